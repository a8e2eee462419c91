//! Page views over a session and the review navigator.
//!
//! Pages are 1-based. `page_size` is passed explicitly so a renderer can
//! project the same session at different densities; the session's own
//! navigation uses its configured page size.

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::{EngineError, Result},
    helpers::ceil_div,
    models::{AnswerKey, Question},
    session::SessionState,
};

/// 1-based inclusive range of the questions shown on a page, out of `total`.
/// All zero for an empty session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBounds {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

/// `max(1, ceil(total / page_size))`.
pub fn total_pages(state: &SessionState, page_size: usize) -> usize {
    ceil_div(state.questions().len(), page_size.max(1)).max(1)
}

/// Questions visible on the current page.
pub fn page_of(state: &SessionState, page_size: usize) -> &[Question] {
    let questions = state.questions();
    let size = page_size.max(1);
    let start = ((state.current_page() - 1) * size).min(questions.len());
    let end = (start + size).min(questions.len());
    &questions[start..end]
}

pub fn page_bounds(state: &SessionState, page_size: usize) -> PageBounds {
    let visible = page_of(state, page_size).len();
    let total = state.questions().len();
    if visible == 0 {
        return PageBounds { first: 0, last: 0, total };
    }
    let first = (state.current_page() - 1) * page_size.max(1) + 1;
    PageBounds { first, last: first + visible - 1, total }
}

/// Page that holds the question addressed by `key`.
pub fn locate_page(state: &SessionState, key: &AnswerKey, page_size: usize) -> Result<usize> {
    let index = state
        .questions()
        .iter()
        .position(|q| q.is_key(key))
        .ok_or_else(|| EngineError::KeyNotFound(key.clone()))?;
    Ok(index / page_size.max(1) + 1)
}

/// Keys of wrong or unanswered questions, in session order.
pub fn missed_questions(state: &SessionState) -> Vec<AnswerKey> {
    state
        .questions()
        .iter()
        .filter(|q| state.answer_for(&q.key()) != Some(q.correct_answer.as_str()))
        .map(Question::key)
        .collect()
}
