use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Question identity
// ---------------------------------------------------------------------------

/// Composite identity of a question: `(section, question_id)`.
///
/// Unique across the whole bank. The same key addresses both the question
/// and the answer recorded for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnswerKey {
    pub section: String,
    pub question_id: u32,
}

impl AnswerKey {
    pub fn new(section: impl Into<String>, question_id: u32) -> Self {
        AnswerKey { section: section.into(), question_id }
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.section, self.question_id)
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

/// One multiple-choice question, tagged with the section it belongs to.
///
/// Immutable once the bank is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub section: String,
    pub question_id: u32,
    pub text: String,
    /// Opaque image identifier. Resolving it is up to the renderer, see
    /// [`image_fallback_path`](crate::quiz_engine::helpers::image_fallback_path).
    pub image: Option<String>,
    /// Option key → option text, in declared order.
    pub options: IndexMap<String, String>,
    pub correct_answer: String,
}

impl Question {
    pub fn key(&self) -> AnswerKey {
        AnswerKey::new(self.section.clone(), self.question_id)
    }

    pub fn is_key(&self, key: &AnswerKey) -> bool {
        self.question_id == key.question_id && self.section == key.section
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.contains_key(option)
    }
}

// ---------------------------------------------------------------------------
// Session lifecycle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No question set has been generated yet.
    Uninitialized,
    /// Answers can be recorded.
    Active,
    /// Answers are locked and the score is visible.
    Revealed,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Uninitialized => write!(f, "uninitialized"),
            SessionPhase::Active        => write!(f, "active"),
            SessionPhase::Revealed      => write!(f, "revealed"),
        }
    }
}

/// What `record_answer` did with the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The answer was stored. `previous` holds the overwritten option, if any.
    Recorded { previous: Option<String> },
    /// Results are already revealed; the selection was dropped.
    Ignored,
}

/// Per-question marking shown next to each question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerStatus {
    /// Results are still hidden.
    Pending,
    Unanswered,
    Correct,
    Incorrect,
}

impl fmt::Display for AnswerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerStatus::Pending    => write!(f, "pending"),
            AnswerStatus::Unanswered => write!(f, "unanswered"),
            AnswerStatus::Correct    => write!(f, "correct"),
            AnswerStatus::Incorrect  => write!(f, "incorrect"),
        }
    }
}

// ---------------------------------------------------------------------------
// Scoring output
// ---------------------------------------------------------------------------

/// Derived score of a session. Never stored, always recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub total: usize,
    pub correct: usize,
    pub wrong: usize,
    pub unanswered: usize,
    /// `100 * correct / total`, or 0 for an empty session.
    pub percentage: f64,
    /// `wrong + unanswered`.
    pub error_count: usize,
    pub max_errors_allowed: usize,
    pub passed: bool,
}
