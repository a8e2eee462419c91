//! Console walkthrough of a random test and a section test.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Random test**: a seeded 6-question test over a small two-section
//!    bank, some answers recorded, results revealed, and every missed
//!    question located on its page.
//!
//! 2. **Section test**: all questions of one section with a search filter,
//!    scored under the proportional pass policy.
//!
//! Set `RUST_LOG=debug` to see the engine's tracing events.

use quiz_session_engine::{
    generate_session, quiz_engine::{helpers::image_fallback_path, pagination},
    AnswerStatus, QuestionBank, SessionMode, SessionRequest, SessionState,
};

const BANK: &str = r#"{
    "Botany": { "questions": {
        "1": { "text": "Which tree commonly hosts the black truffle?", "image": "oak.jpg",
               "options": { "a": "Oak", "b": "Palm", "c": "Cactus" }, "correctAnswer": "a" },
        "2": { "text": "Truffles form a symbiosis with tree roots called?",
               "options": { "a": "Lichen", "b": "Mycorrhiza", "c": "Rhizome" }, "correctAnswer": "b" },
        "3": { "text": "Preferred soil for the black truffle?",
               "options": { "a": "Acidic peat", "b": "Calcareous", "c": "Pure sand" }, "correctAnswer": "b" },
        "4": { "text": "What part of the fungus is the truffle?",
               "options": { "a": "Fruiting body", "b": "Spore", "c": "Leaf" }, "correctAnswer": "a" }
    } },
    "Regulations": { "questions": {
        "1": { "text": "Which animal is allowed to search for truffles?",
               "options": { "a": "Trained dog", "b": "Any animal" }, "correctAnswer": "a" },
        "2": { "text": "Digging tools must leave the soil?",
               "options": { "a": "Refilled", "b": "Open" }, "correctAnswer": "a" },
        "3": { "text": "Harvesting at night is?",
               "options": { "a": "Forbidden", "b": "Encouraged" }, "correctAnswer": "a" }
    } }
}"#;

fn print_page(state: &SessionState) {
    let bounds = pagination::page_bounds(state, state.config().effective_page_size());
    println!(
        "  Page {}/{}: questions {}-{} of {}",
        state.current_page(), state.total_pages(), bounds.first, bounds.last, bounds.total
    );
    for q in state.current_page_questions() {
        let status = state.answer_status(&q.key()).unwrap_or(AnswerStatus::Pending);
        let image = q.image.as_deref().map(image_fallback_path).unwrap_or_default();
        println!("   [{:>10}] {} {} {image}", status.to_string(), q.key(), q.text);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let bank = match QuestionBank::from_json_str(BANK) {
        Ok(bank) => bank,
        Err(e) => {
            eprintln!("could not load bank: {e}");
            return;
        }
    };
    println!("Sections: {}", bank.section_names().collect::<Vec<_>>().join(", "));

    // ── random test ──────────────────────────────────────────────────────────
    println!("\n━━ Random test ━━");
    let config = SessionMode::random().default_config().with_page_size(4);
    let request = SessionRequest::new(SessionMode::Random { count: 6 }).with_seed(42).with_config(config);
    let Ok(mut session) = generate_session(&bank, &request) else { return };

    let keys: Vec<_> = session.questions().iter().map(|q| q.key()).collect();
    for (i, key) in keys.iter().enumerate().take(4) {
        let choice = if i % 2 == 0 { "a" } else { "b" };
        if let Err(e) = session.record_answer(key, choice) {
            println!("  rejected: {e}");
        }
    }
    print_page(&session);

    if let Err(e) = session.go_to_page(9) {
        println!("  navigation rejected: {e}");
    }

    if let Ok(summary) = session.reveal_results() {
        println!(
            "  Score: {}/{} ({:.0}%), {} errors, {} allowed: {}",
            summary.correct, summary.total, summary.percentage,
            summary.error_count, summary.max_errors_allowed,
            if summary.passed { "PASSED" } else { "FAILED" }
        );
    }
    for key in pagination::missed_questions(&session) {
        if let Ok(page) = session.jump_to_question(&key) {
            println!("  missed {key} → page {page}");
        }
    }

    // ── section test ─────────────────────────────────────────────────────────
    println!("\n━━ Section test (Botany, filter \"truffle\") ━━");
    let request = SessionRequest::new(SessionMode::Section {
        name: "Botany".into(),
        filter: Some("truffle".into()),
    });
    let Ok(mut section) = generate_session(&bank, &request) else { return };
    if let Some(first) = section.questions().first().map(|q| q.key()) {
        let _ = section.record_answer(&first, "a");
    }
    if let Ok(summary) = section.reveal_results() {
        println!(
            "  {} questions, {} errors, {} allowed: {}",
            summary.total, summary.error_count, summary.max_errors_allowed,
            if summary.passed { "PASSED" } else { "FAILED" }
        );
    }
    print_page(&section);
}
