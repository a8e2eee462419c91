//! Read-only question bank, grouped by section.
//!
//! The bank is usually loaded from the nested JSON document used by the quiz
//! front end:
//!
//! ```json
//! {
//!   "Biology": {
//!     "questions": {
//!       "1": {
//!         "text": "Which tree hosts the white truffle?",
//!         "image": "oak.jpg",
//!         "options": { "a": "Oak", "b": "Palm" },
//!         "correctAnswer": "a"
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Question ids are object keys and therefore strings; they must parse as
//! integers. All validation happens once here, so session code can assume a
//! well-formed bank.

use std::collections::HashSet;
use std::io::Read;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::quiz_engine::{
    error::BankError,
    models::{AnswerKey, Question},
};

#[derive(Debug, Deserialize)]
struct RawSection {
    #[serde(default)]
    questions: IndexMap<String, RawQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    text: String,
    #[serde(default)]
    image: Option<String>,
    options: IndexMap<String, String>,
    correct_answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    sections: IndexMap<String, Vec<Question>>,
}

impl QuestionBank {
    /// Parse and validate a bank from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, BankError> {
        let raw: IndexMap<String, RawSection> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse and validate a bank from any reader yielding JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BankError> {
        let raw: IndexMap<String, RawSection> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Build a bank from already-constructed questions, grouping them by
    /// section in first-seen order. Runs the same validation and
    /// normalisation as JSON loading.
    pub fn from_questions(questions: impl IntoIterator<Item = Question>) -> Result<Self, BankError> {
        let mut sections: IndexMap<String, Vec<Question>> = IndexMap::new();
        let mut seen = HashSet::new();
        for mut q in questions {
            // An empty image name means "no image".
            q.image = q.image.filter(|name| !name.is_empty());
            validate(&q)?;
            if !seen.insert(q.key()) {
                return Err(BankError::DuplicateQuestion { key: q.key() });
            }
            sections.entry(q.section.clone()).or_default().push(q);
        }
        for questions in sections.values_mut() {
            questions.sort_by_key(|q| q.question_id);
        }
        Ok(QuestionBank { sections })
    }

    fn from_raw(raw: IndexMap<String, RawSection>) -> Result<Self, BankError> {
        let mut sections = IndexMap::with_capacity(raw.len());
        for (section, body) in raw {
            let mut questions = Vec::with_capacity(body.questions.len());
            let mut seen = HashSet::new();
            for (raw_id, rq) in body.questions {
                let question_id = raw_id.trim().parse::<u32>().map_err(|_| {
                    BankError::InvalidQuestionId { section: section.clone(), raw: raw_id.clone() }
                })?;
                if !seen.insert(question_id) {
                    return Err(BankError::DuplicateQuestion {
                        key: AnswerKey::new(section.clone(), question_id),
                    });
                }
                let question = Question {
                    section: section.clone(),
                    question_id,
                    text: rq.text,
                    // An empty image name means "no image".
                    image: rq.image.filter(|name| !name.is_empty()),
                    options: rq.options,
                    correct_answer: rq.correct_answer,
                };
                validate(&question)?;
                questions.push(question);
            }
            questions.sort_by_key(|q| q.question_id);
            debug!(section = %section, questions = questions.len(), "loaded bank section");
            sections.insert(section, questions);
        }
        Ok(QuestionBank { sections })
    }

    /// Section names in declared order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Questions of one section in ascending id order.
    pub fn section(&self, name: &str) -> Option<&[Question]> {
        self.sections.get(name).map(Vec::as_slice)
    }

    pub fn section_len(&self, name: &str) -> Option<usize> {
        self.sections.get(name).map(Vec::len)
    }

    /// Every question of the bank, section by section.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.values().flatten()
    }

    pub fn get(&self, key: &AnswerKey) -> Option<&Question> {
        self.sections
            .get(&key.section)?
            .iter()
            .find(|q| q.question_id == key.question_id)
    }

    /// Total number of questions across all sections.
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate(question: &Question) -> Result<(), BankError> {
    if question.options.len() < 2 {
        return Err(BankError::TooFewOptions { key: question.key(), count: question.options.len() });
    }
    if !question.has_option(&question.correct_answer) {
        return Err(BankError::UnknownCorrectAnswer {
            key: question.key(),
            answer: question.correct_answer.clone(),
        });
    }
    Ok(())
}
