use rand::Rng;

use crate::quiz_engine::{
    bank::QuestionBank,
    error::{EngineError, Result},
    helpers::matches_filter,
    models::Question,
};

/// Unbiased in-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Flatten the whole bank, shuffle it and keep the first `count` questions.
///
/// Returns fewer than `count` questions when the bank is smaller, and an
/// empty set when `count` is 0. Never duplicates a question.
pub fn sample_random<R: Rng>(bank: &QuestionBank, count: usize, rng: &mut R) -> Vec<Question> {
    if count == 0 {
        return Vec::new();
    }
    let mut all: Vec<Question> = bank.questions().cloned().collect();
    shuffle(&mut all, rng);
    all.truncate(count);
    all
}

/// All questions of `section` in bank order, optionally narrowed by a
/// case-insensitive search over question and option text.
pub fn sample_section(bank: &QuestionBank, section: &str, filter: Option<&str>) -> Result<Vec<Question>> {
    let questions = bank
        .section(section)
        .ok_or_else(|| EngineError::SectionNotFound(section.to_string()))?;
    let filter = filter.unwrap_or_default();
    Ok(questions.iter().filter(|q| matches_filter(q, filter)).cloned().collect())
}

/// Study listing: one section, or every section when `section` is `None`,
/// with the same search filter as [`sample_section`].
pub fn browse(bank: &QuestionBank, section: Option<&str>, filter: Option<&str>) -> Result<Vec<Question>> {
    match section {
        Some(name) => sample_section(bank, name, filter),
        None => {
            let filter = filter.unwrap_or_default();
            Ok(bank.questions().filter(|q| matches_filter(q, filter)).cloned().collect())
        }
    }
}
