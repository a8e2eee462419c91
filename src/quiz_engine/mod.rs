//! Quiz session engine: sampling, answer tracking, scoring and pagination.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: questions, answer keys, phases, score summary |
//! | `bank`       | Read-only question bank with JSON loading and validation |
//! | `sampler`    | Fisher-Yates random sampling, section sampling, study browse |
//! | `session`    | Session state and its atomic mutators |
//! | `timer`      | Cancellable countdown for timed sessions |
//! | `scorer`     | Pass/fail policy and the pure scoring function |
//! | `pagination` | Page views, page bounds, review navigator |
//! | `config`     | Session configuration, modes and requests |
//! | `generator`  | Single entry point `generate_session()`: dispatches on mode |
//! | `helpers`    | Search filter, ceil-division, image fallback path |
//! | `error`      | Engine and bank-loading errors |

pub mod bank;
pub mod config;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod pagination;
pub mod sampler;
pub mod scorer;
pub mod session;
pub mod timer;

// Re-export the public API surface so callers can use
// `quiz_engine::generate_session` without reaching into sub-modules.
pub use bank::QuestionBank;
pub use config::{SessionConfig, SessionMode, SessionRequest};
pub use error::{BankError, EngineError, Result};
pub use generator::{generate_session, regenerate};
pub use models::{AnswerKey, AnswerStatus, Question, RecordOutcome, ScoreSummary, SessionPhase};
pub use pagination::PageBounds;
pub use scorer::{score, PassPolicy};
pub use session::SessionState;
pub use timer::Tick;
