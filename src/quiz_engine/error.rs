use thiserror::Error;

use crate::quiz_engine::models::AnswerKey;

/// Recoverable failures reported by session operations.
///
/// A failed operation never leaves a partially updated session behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("section not found: {0}")]
    SectionNotFound(String),

    #[error("question {0} is not part of this session")]
    KeyNotFound(AnswerKey),

    #[error("option {option:?} is not declared for question {key}")]
    InvalidOption { key: AnswerKey, option: String },

    #[error("page {page} is outside 1..={total_pages}")]
    OutOfRange { page: usize, total_pages: usize },

    #[error("sampling produced no questions but a non-empty session was required")]
    EmptySession,

    #[error("no session has been started")]
    NotStarted,
}

impl EngineError {
    /// True for both "not found" flavours (unknown section, unknown key).
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::SectionNotFound(_) | EngineError::KeyNotFound(_))
    }
}

/// Problems found while loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("section {section:?} has a non-integer question id {raw:?}")]
    InvalidQuestionId { section: String, raw: String },

    #[error("question {key} appears more than once")]
    DuplicateQuestion { key: AnswerKey },

    #[error("question {key} has {count} option(s), at least 2 are required")]
    TooFewOptions { key: AnswerKey, count: usize },

    #[error("question {key} names correct answer {answer:?} which is not among its options")]
    UnknownCorrectAnswer { key: AnswerKey, answer: String },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
