//! Small shared functions used by the sampler, scorer and pagination code.

use crate::quiz_engine::models::Question;

/// Fallback location of a question image when the renderer cannot resolve
/// the identifier directly.
pub fn image_fallback_path(image: &str) -> String {
    format!("/images/{image}")
}

/// True if `question`'s text or any option text contains `filter`,
/// ignoring case. An empty filter matches everything.
pub fn matches_filter(question: &Question, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    question.text.to_lowercase().contains(&needle)
        || question.options.values().any(|o| o.to_lowercase().contains(&needle))
}

/// `ceil(a / b)` for non-negative integers; 0 when `b` is 0.
pub fn ceil_div(a: usize, b: usize) -> usize {
    if b == 0 {
        return 0;
    }
    a.div_ceil(b)
}
