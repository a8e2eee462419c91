//! Session state and its mutators.
//!
//! Lifecycle:
//!
//! ```text
//! Uninitialized --start--> Active --reveal / timer expiry--> Revealed
//!                            ^                                  |
//!                            +----------- reset_answers --------+
//! ```
//!
//! `start_session` from any phase replaces the whole question set. Every
//! mutator validates first and mutates second, so an `Err` leaves the state
//! untouched.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::quiz_engine::{
    config::SessionConfig,
    error::{EngineError, Result},
    models::{AnswerKey, AnswerStatus, Question, RecordOutcome, ScoreSummary, SessionPhase},
    pagination, scorer,
    timer::{Countdown, Tick},
};

#[derive(Debug, Clone)]
pub struct SessionState {
    config: SessionConfig,
    questions: Vec<Question>,
    answers: HashMap<AnswerKey, String>,
    phase: SessionPhase,
    current_page: usize,
    timer: Option<Countdown>,
}

impl SessionState {
    /// An uninitialized session that will use `config` once started.
    pub fn new(config: SessionConfig) -> Self {
        SessionState {
            config,
            questions: Vec::new(),
            answers: HashMap::new(),
            phase: SessionPhase::Uninitialized,
            current_page: 1,
            timer: None,
        }
    }

    // -----------------------------------------------------------------------
    // Mutators
    // -----------------------------------------------------------------------

    /// Replace the question set and start over: no answers, results hidden,
    /// first page, fresh countdown.
    pub fn start_session(&mut self, questions: Vec<Question>) {
        info!(questions = questions.len(), timed = self.config.time_limit_secs.is_some(), "session started");
        self.questions = questions;
        self.answers.clear();
        self.phase = SessionPhase::Active;
        self.current_page = 1;
        // A zero limit means untimed.
        self.timer = self.config.time_limit_secs.filter(|secs| *secs > 0).map(Countdown::new);
    }

    /// Select `option` for the question addressed by `key`, overwriting any
    /// earlier choice.
    ///
    /// After results are revealed the call is a no-op and reports
    /// [`RecordOutcome::Ignored`].
    pub fn record_answer(&mut self, key: &AnswerKey, option: &str) -> Result<RecordOutcome> {
        if self.phase == SessionPhase::Revealed {
            debug!(%key, option, "answer ignored, results already revealed");
            return Ok(RecordOutcome::Ignored);
        }
        let question = self.question(key).ok_or_else(|| EngineError::KeyNotFound(key.clone()))?;
        if !question.has_option(option) {
            return Err(EngineError::InvalidOption { key: key.clone(), option: option.to_string() });
        }
        let previous = self.answers.insert(key.clone(), option.to_string());
        Ok(RecordOutcome::Recorded { previous })
    }

    /// Lock the answers and return the final score. Revealing twice returns
    /// the same score without further changes.
    pub fn reveal_results(&mut self) -> Result<ScoreSummary> {
        match self.phase {
            SessionPhase::Uninitialized => Err(EngineError::NotStarted),
            SessionPhase::Revealed => Ok(scorer::score(self)),
            SessionPhase::Active => Ok(self.reveal_now()),
        }
    }

    fn reveal_now(&mut self) -> ScoreSummary {
        self.phase = SessionPhase::Revealed;
        if let Some(timer) = self.timer.as_mut() {
            timer.cancel();
        }
        let summary = scorer::score(self);
        info!(
            correct = summary.correct,
            wrong = summary.wrong,
            unanswered = summary.unanswered,
            passed = summary.passed,
            "results revealed"
        );
        summary
    }

    /// Retry the same questions: answers cleared, results hidden, first page,
    /// countdown restarted.
    pub fn reset_answers(&mut self) -> Result<()> {
        if self.phase == SessionPhase::Uninitialized {
            return Err(EngineError::NotStarted);
        }
        self.answers.clear();
        self.phase = SessionPhase::Active;
        self.current_page = 1;
        if let Some(timer) = self.timer.as_mut() {
            timer.rearm();
        }
        debug!(questions = self.questions.len(), "answers reset");
        Ok(())
    }

    /// Move to page `page` (1-based). Out-of-range pages are rejected.
    pub fn go_to_page(&mut self, page: usize) -> Result<()> {
        let total_pages = self.total_pages();
        if page == 0 || page > total_pages {
            warn!(page, total_pages, "page navigation rejected");
            return Err(EngineError::OutOfRange { page, total_pages });
        }
        self.current_page = page;
        Ok(())
    }

    pub fn next_page(&mut self) -> Result<()> {
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> Result<()> {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Jump to the page holding `key`, returning that page.
    pub fn jump_to_question(&mut self, key: &AnswerKey) -> Result<usize> {
        let page = pagination::locate_page(self, key, self.config.effective_page_size())?;
        self.current_page = page;
        Ok(page)
    }

    /// Advance the countdown by `elapsed_secs`. Reaching zero reveals the
    /// results. Ticks outside the Active phase are ignored.
    pub fn tick(&mut self, elapsed_secs: u32) -> Tick {
        if self.phase != SessionPhase::Active {
            return Tick::Idle;
        }
        let Some(timer) = self.timer.as_mut() else {
            return Tick::Idle;
        };
        let tick = timer.tick(elapsed_secs);
        if tick == Tick::Expired {
            info!("time is up");
            self.reveal_now();
        }
        tick
    }

    /// Drop the countdown for the rest of this session, retries included.
    /// Only `start_session` brings a configured timer back.
    pub fn disable_timer(&mut self) {
        if self.timer.take().is_some() {
            debug!("timer disabled");
        }
    }

    // -----------------------------------------------------------------------
    // Read-only projections
    // -----------------------------------------------------------------------

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &HashMap<AnswerKey, String> {
        &self.answers
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn results_revealed(&self) -> bool {
        self.phase == SessionPhase::Revealed
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn time_remaining(&self) -> Option<u32> {
        self.timer.as_ref().map(Countdown::remaining)
    }

    pub fn timer_running(&self) -> bool {
        self.timer.as_ref().is_some_and(Countdown::is_running)
    }

    pub fn question(&self, key: &AnswerKey) -> Option<&Question> {
        self.questions.iter().find(|q| q.is_key(key))
    }

    pub fn answer_for(&self, key: &AnswerKey) -> Option<&str> {
        self.answers.get(key).map(String::as_str)
    }

    /// Marking for one question: `Pending` until results are revealed.
    pub fn answer_status(&self, key: &AnswerKey) -> Result<AnswerStatus> {
        let question = self.question(key).ok_or_else(|| EngineError::KeyNotFound(key.clone()))?;
        if !self.results_revealed() {
            return Ok(AnswerStatus::Pending);
        }
        Ok(match self.answers.get(key) {
            None => AnswerStatus::Unanswered,
            Some(choice) if *choice == question.correct_answer => AnswerStatus::Correct,
            Some(_) => AnswerStatus::Incorrect,
        })
    }

    /// The score, but only once results are revealed.
    pub fn summary(&self) -> Option<ScoreSummary> {
        self.results_revealed().then(|| scorer::score(self))
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self, self.config.effective_page_size())
    }

    pub fn current_page_questions(&self) -> &[Question] {
        pagination::page_of(self, self.config.effective_page_size())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn questions(n: u32) -> Vec<Question> {
        (1..=n)
            .map(|id| Question {
                section: "Hunting".into(),
                question_id: id,
                text: format!("Question {id}"),
                image: None,
                options: IndexMap::from([
                    ("a".to_string(), "Dog".to_string()),
                    ("b".to_string(), "Pig".to_string()),
                    ("c".to_string(), "Cat".to_string()),
                ]),
                correct_answer: "a".into(),
            })
            .collect()
    }

    fn key(id: u32) -> AnswerKey {
        AnswerKey::new("Hunting", id)
    }

    fn active(n: u32) -> SessionState {
        let mut s = SessionState::default();
        s.start_session(questions(n));
        s
    }

    #[test]
    fn new_session_is_uninitialized() {
        let s = SessionState::default();
        assert_eq!(s.phase(), SessionPhase::Uninitialized);
        assert_eq!(s.current_page(), 1);
        assert!(s.questions().is_empty());
    }

    #[test]
    fn overwriting_an_answer_keeps_one_entry_with_latest_value() {
        let mut s = active(3);
        assert_eq!(s.record_answer(&key(1), "b").unwrap(), RecordOutcome::Recorded { previous: None });
        assert_eq!(
            s.record_answer(&key(1), "c").unwrap(),
            RecordOutcome::Recorded { previous: Some("b".into()) }
        );
        assert_eq!(s.answers().len(), 1);
        assert_eq!(s.answer_for(&key(1)), Some("c"));
    }

    #[test]
    fn undeclared_option_is_rejected_without_mutation() {
        let mut s = active(3);
        s.record_answer(&key(2), "a").unwrap();
        let err = s.record_answer(&key(2), "z").unwrap_err();
        assert_eq!(err, EngineError::InvalidOption { key: key(2), option: "z".into() });
        assert_eq!(s.answer_for(&key(2)), Some("a"));
    }

    #[test]
    fn answering_a_foreign_question_is_not_found() {
        let mut s = active(3);
        let err = s.record_answer(&AnswerKey::new("Cooking", 1), "a").unwrap_err();
        assert!(err.is_not_found());
        assert!(s.answers().is_empty());
    }

    #[test]
    fn answers_are_ignored_after_reveal() {
        let mut s = active(3);
        s.record_answer(&key(1), "a").unwrap();
        s.reveal_results().unwrap();
        assert_eq!(s.record_answer(&key(1), "b").unwrap(), RecordOutcome::Ignored);
        assert_eq!(s.record_answer(&key(2), "a").unwrap(), RecordOutcome::Ignored);
        assert_eq!(s.answer_for(&key(1)), Some("a"));
        assert_eq!(s.answers().len(), 1);
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut s = active(3);
        s.record_answer(&key(1), "a").unwrap();
        let first = s.reveal_results().unwrap();
        let second = s.reveal_results().unwrap();
        assert_eq!(first, second);
        assert_eq!(s.phase(), SessionPhase::Revealed);
    }

    #[test]
    fn lifecycle_operations_require_a_started_session() {
        let mut s = SessionState::default();
        assert_eq!(s.reveal_results().unwrap_err(), EngineError::NotStarted);
        assert_eq!(s.reset_answers().unwrap_err(), EngineError::NotStarted);
    }

    #[test]
    fn reset_keeps_questions_and_clears_everything_else() {
        let mut s = active(25);
        s.record_answer(&key(1), "b").unwrap();
        s.go_to_page(3).unwrap();
        s.reveal_results().unwrap();

        s.reset_answers().unwrap();
        assert_eq!(s.phase(), SessionPhase::Active);
        assert!(s.answers().is_empty());
        assert_eq!(s.current_page(), 1);
        assert_eq!(s.questions().len(), 25);
    }

    #[test]
    fn start_replaces_questions_from_any_phase() {
        let mut s = active(5);
        s.record_answer(&key(1), "a").unwrap();
        s.reveal_results().unwrap();
        s.start_session(questions(2));
        assert_eq!(s.phase(), SessionPhase::Active);
        assert_eq!(s.questions().len(), 2);
        assert!(s.answers().is_empty());
    }

    #[test]
    fn out_of_range_pages_are_rejected() {
        let mut s = active(24);
        assert_eq!(s.total_pages(), 3);
        s.go_to_page(2).unwrap();
        assert_eq!(
            s.go_to_page(4).unwrap_err(),
            EngineError::OutOfRange { page: 4, total_pages: 3 }
        );
        assert!(s.go_to_page(0).is_err());
        assert_eq!(s.current_page(), 2);
    }

    #[test]
    fn next_and_previous_stop_at_the_edges() {
        let mut s = active(15);
        assert!(s.previous_page().is_err());
        s.next_page().unwrap();
        assert_eq!(s.current_page(), 2);
        assert!(s.next_page().is_err());
        s.previous_page().unwrap();
        assert_eq!(s.current_page(), 1);
    }

    #[test]
    fn status_is_pending_until_reveal() {
        let mut s = active(3);
        s.record_answer(&key(1), "a").unwrap();
        s.record_answer(&key(2), "b").unwrap();
        assert_eq!(s.answer_status(&key(1)).unwrap(), AnswerStatus::Pending);
        assert!(s.summary().is_none());

        s.reveal_results().unwrap();
        assert_eq!(s.answer_status(&key(1)).unwrap(), AnswerStatus::Correct);
        assert_eq!(s.answer_status(&key(2)).unwrap(), AnswerStatus::Incorrect);
        assert_eq!(s.answer_status(&key(3)).unwrap(), AnswerStatus::Unanswered);
        assert!(s.summary().is_some());
    }

    #[test]
    fn jump_moves_to_the_questions_page() {
        let mut s = active(24);
        assert_eq!(s.jump_to_question(&key(24)).unwrap(), 3);
        assert_eq!(s.current_page(), 3);
        assert!(s.jump_to_question(&AnswerKey::new("Other", 1)).is_err());
        assert_eq!(s.current_page(), 3);
    }

    #[test]
    fn timer_expiry_reveals_results() {
        let mut s = SessionState::new(SessionConfig::random_exam().with_time_limit(3));
        s.start_session(questions(2));
        assert_eq!(s.time_remaining(), Some(3));
        assert_eq!(s.tick(1), Tick::Running { remaining: 2 });
        assert_eq!(s.tick(2), Tick::Expired);
        assert!(s.results_revealed());
        assert_eq!(s.tick(1), Tick::Idle);
    }

    #[test]
    fn manual_reveal_and_disable_stop_the_timer() {
        let mut s = SessionState::new(SessionConfig::random_exam().with_time_limit(10));
        s.start_session(questions(2));
        s.tick(1);
        s.reveal_results().unwrap();
        assert!(!s.timer_running());
        assert_eq!(s.tick(1), Tick::Idle);
        assert_eq!(s.time_remaining(), Some(9));

        s.reset_answers().unwrap();
        assert_eq!(s.time_remaining(), Some(10));
        s.disable_timer();
        assert_eq!(s.tick(5), Tick::Idle);
        assert_eq!(s.phase(), SessionPhase::Active);
        assert_eq!(s.time_remaining(), None);
    }

    #[test]
    fn disabled_timer_stays_off_after_retry() {
        let mut s = SessionState::new(SessionConfig::random_exam().with_time_limit(5));
        s.start_session(questions(2));
        s.disable_timer();
        s.reset_answers().unwrap();
        assert_eq!(s.tick(5), Tick::Idle);
        assert!(!s.results_revealed());
        assert!(!s.timer_running());

        s.start_session(questions(2));
        assert_eq!(s.time_remaining(), Some(5));
    }

    #[test]
    fn zero_time_limit_means_untimed() {
        let mut s = SessionState::new(SessionConfig::random_exam().with_time_limit(0));
        s.start_session(questions(2));
        assert_eq!(s.time_remaining(), None);
        assert_eq!(s.tick(1), Tick::Idle);
        assert_eq!(s.phase(), SessionPhase::Active);
    }

    #[test]
    fn untimed_session_ignores_ticks() {
        let mut s = active(2);
        assert_eq!(s.time_remaining(), None);
        assert_eq!(s.tick(100), Tick::Idle);
        assert_eq!(s.phase(), SessionPhase::Active);
    }
}
