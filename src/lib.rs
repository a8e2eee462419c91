//! # quiz_session_engine
//!
//! The engine behind a timed multiple-choice exam trainer.
//!
//! A bank of questions grouped into named sections is sampled into a test
//! session; the session tracks the user's answers across paginated views,
//! scores them against a pass/fail policy and lets the user jump back to the
//! questions they missed. Rendering is left entirely to the caller.
//!
//! ## How it works
//!
//! 1. Load a [`QuestionBank`] from its JSON document.
//! 2. Build a [`SessionRequest`] with a [`SessionMode`] (random test,
//!    section test or study browse), an optional RNG seed and a
//!    [`SessionConfig`] carrying the page size, [`PassPolicy`] and timer.
//! 3. Call [`generate_session`]: the engine samples the questions (an
//!    unbiased Fisher-Yates shuffle for random tests) and returns a fresh
//!    [`SessionState`].
//! 4. Drive the session from user actions: `record_answer`, `go_to_page`,
//!    `reveal_results`, `reset_answers`, and `tick` for timed tests.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the same
//!   random test every time.
//! - **Injected policy**: a fixed error limit (`MaxErrors`) for fixed-length
//!   tests or a proportional one for variable-length section tests.
//! - **Explicit failures**: out-of-range pages, undeclared options and
//!   unknown sections are reported as [`EngineError`]s and never mutate state.
//!
//! ## Quick start
//!
//! ```rust
//! use quiz_session_engine::{generate_session, QuestionBank, SessionMode, SessionRequest};
//!
//! let bank = QuestionBank::from_json_str(r#"{
//!     "Botany": { "questions": {
//!         "1": { "text": "Host tree?", "options": { "a": "Oak", "b": "Palm" }, "correctAnswer": "a" },
//!         "2": { "text": "Soil?", "options": { "a": "Sand", "b": "Limestone" }, "correctAnswer": "b" }
//!     } }
//! }"#).unwrap();
//!
//! let mut session = generate_session(&bank, &SessionRequest::new(SessionMode::random()).with_seed(42)).unwrap();
//! let first = session.questions()[0].key();
//! session.record_answer(&first, "a").unwrap();
//!
//! let summary = session.reveal_results().unwrap();
//! assert_eq!(summary.total, 2);
//! assert_eq!(summary.correct + summary.wrong + summary.unanswered, 2);
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `quiz_session_engine::generate_session`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate_session, regenerate, score, AnswerKey, AnswerStatus, BankError, EngineError,
    PageBounds, PassPolicy, Question, QuestionBank, RecordOutcome, ScoreSummary, SessionConfig,
    SessionMode, SessionPhase, SessionRequest, SessionState, Tick,
};
