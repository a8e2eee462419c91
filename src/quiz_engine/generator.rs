use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::quiz_engine::{
    bank::QuestionBank,
    config::{SessionMode, SessionRequest},
    error::{EngineError, Result},
    models::Question,
    sampler,
    session::SessionState,
};

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Assemble the question set for `mode`.
pub fn sample_for<R: Rng>(bank: &QuestionBank, mode: &SessionMode, rng: &mut R) -> Result<Vec<Question>> {
    match mode {
        SessionMode::Random { count } =>
            Ok(sampler::sample_random(bank, *count, rng)),

        SessionMode::Section { name, filter } =>
            sampler::sample_section(bank, name, filter.as_deref()),

        SessionMode::Browse { section, filter } =>
            sampler::browse(bank, section.as_deref(), filter.as_deref()),
    }
}

fn sample_request(bank: &QuestionBank, request: &SessionRequest) -> Result<Vec<Question>> {
    let mut rng = make_rng(request.rng_seed);
    let questions = sample_for(bank, &request.mode, &mut rng)?;
    if questions.is_empty() && request.require_non_empty {
        return Err(EngineError::EmptySession);
    }
    debug!(mode = ?request.mode, questions = questions.len(), "sampled question set");
    Ok(questions)
}

/// Single entry point: sample a question set and start a session on it.
pub fn generate_session(bank: &QuestionBank, request: &SessionRequest) -> Result<SessionState> {
    let questions = sample_request(bank, request)?;
    let mut state = SessionState::new(request.config.clone());
    state.start_session(questions);
    Ok(state)
}

/// "New test": replace `state` with a freshly sampled session. On error the
/// old session is left untouched.
pub fn regenerate(state: &mut SessionState, bank: &QuestionBank, request: &SessionRequest) -> Result<()> {
    *state = generate_session(bank, request)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> QuestionBank {
        QuestionBank::from_json_str(
            r#"{
                "A": { "questions": {
                    "1": { "text": "Alpha one", "options": { "a": "x", "b": "y" }, "correctAnswer": "a" },
                    "2": { "text": "Alpha two", "options": { "a": "x", "b": "y" }, "correctAnswer": "b" }
                } },
                "Empty": { "questions": {} }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn seeded_random_sessions_are_reproducible() {
        let request = SessionRequest::new(SessionMode::random()).with_seed(7);
        let a = generate_session(&bank(), &request).unwrap();
        let b = generate_session(&bank(), &request).unwrap();
        assert_eq!(a.questions(), b.questions());
    }

    #[test]
    fn empty_section_starts_empty_session_unless_required() {
        let request = SessionRequest::new(SessionMode::section("Empty"));
        let state = generate_session(&bank(), &request).unwrap();
        assert!(state.questions().is_empty());

        let err = generate_session(&bank(), &request.non_empty()).unwrap_err();
        assert_eq!(err, EngineError::EmptySession);
    }

    #[test]
    fn regenerate_failure_keeps_previous_session() {
        let mut state = generate_session(&bank(), &SessionRequest::new(SessionMode::section("A"))).unwrap();
        let missing = SessionRequest::new(SessionMode::section("Nope"));
        assert!(regenerate(&mut state, &bank(), &missing).unwrap_err().is_not_found());
        assert_eq!(state.questions().len(), 2);
    }

    #[test]
    fn browse_mode_lists_the_whole_bank() {
        let request = SessionRequest::new(SessionMode::Browse { section: None, filter: Some("two".into()) });
        let state = generate_session(&bank(), &request).unwrap();
        assert_eq!(state.questions().len(), 1);
        assert_eq!(state.questions()[0].question_id, 2);
    }
}
