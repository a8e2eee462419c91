//! Scoring and pass/fail policy.
//!
//! Every unanswered question counts as an error, exactly like a wrong answer.
//! The policy decides how many errors are tolerated for a given test length.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    helpers::ceil_div,
    models::{AnswerKey, Question, ScoreSummary},
    session::SessionState,
};

/// How many errors a session may contain and still pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PassPolicy {
    /// Pass iff `errors <= max`, whatever the length of the test.
    MaxErrors { max: usize },
    /// Pass iff `errors <= ceil(total * numerator / denominator)`.
    Proportional { numerator: usize, denominator: usize },
}

impl PassPolicy {
    pub fn max_errors(max: usize) -> Self {
        PassPolicy::MaxErrors { max }
    }

    pub fn proportional(numerator: usize, denominator: usize) -> Self {
        PassPolicy::Proportional { numerator, denominator }
    }

    /// Errors tolerated for a test of `total` questions.
    pub fn allowed_errors(self, total: usize) -> usize {
        match self {
            PassPolicy::MaxErrors { max } => max,
            PassPolicy::Proportional { numerator, denominator } => {
                ceil_div(total.saturating_mul(numerator), denominator)
            }
        }
    }
}

/// Score a question set against recorded answers. Pure.
pub fn score_answers(
    questions: &[Question],
    answers: &HashMap<AnswerKey, String>,
    policy: PassPolicy,
) -> ScoreSummary {
    let total = questions.len();
    let mut correct = 0usize;
    let mut wrong = 0usize;
    let mut unanswered = 0usize;

    for q in questions {
        match answers.get(&q.key()) {
            None => unanswered += 1,
            Some(choice) if *choice == q.correct_answer => correct += 1,
            Some(_) => wrong += 1,
        }
    }

    let error_count = wrong + unanswered;
    let max_errors_allowed = policy.allowed_errors(total);
    let percentage = if total > 0 { 100.0 * correct as f64 / total as f64 } else { 0.0 };

    ScoreSummary {
        total,
        correct,
        wrong,
        unanswered,
        percentage,
        error_count,
        max_errors_allowed,
        passed: error_count <= max_errors_allowed,
    }
}

/// Score the session with the policy it was created with.
pub fn score(state: &SessionState) -> ScoreSummary {
    score_answers(state.questions(), state.answers(), state.config().pass_policy)
}
