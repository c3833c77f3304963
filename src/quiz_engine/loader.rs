//! JSON question banks.
//!
//! A bank file is a JSON array of objects shaped like [`Question`]:
//!
//! ```json
//! [
//!   {
//!     "text": "Which game is this position from?",
//!     "right_answer": "Byrne - Fischer, New York 1956",
//!     "wrong_answers": ["Anderssen - Kieseritzky, London 1851"],
//!     "assets": ["1Q6/5pk1/2p3p1/1p2N2p/1b5P/1bn5/2r3P1/2K5 w - - 16 42"]
//!   }
//! ]
//! ```
//!
//! Items that do not fit that shape, or that would make an unplayable
//! question, are skipped with a warning rather than failing the whole load.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use crate::quiz_engine::models::{LoadError, Question, LABELS};

/// Read and validate the bank at `path`.
pub fn load_questions_from_json(path: impl AsRef<Path>) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let questions = load_questions_from_str(&raw)?;
    info!("loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

/// Parse a bank from JSON text.
pub fn load_questions_from_str(raw: &str) -> Result<Vec<Question>, LoadError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Array(items) => Ok(load_questions_from_data(items)),
        _ => Err(LoadError::NotAnArray),
    }
}

/// Turn already-parsed items into questions, skipping invalid ones.
pub fn load_questions_from_data(items: Vec<Value>) -> Vec<Question> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<Question>(item) {
            Ok(question) => match rejection_reason(&question) {
                None => Some(question),
                Some(reason) => {
                    warn!("skipping question #{idx}: {reason}");
                    None
                }
            },
            Err(e) => {
                warn!("skipping question #{idx}: {e}");
                None
            }
        })
        .collect()
}

fn rejection_reason(question: &Question) -> Option<&'static str> {
    if question.right_answer.is_empty() {
        Some("right answer is empty")
    } else if question.wrong_answers.is_empty() {
        Some("no wrong answers")
    } else if question.wrong_answers.iter().any(|a| a.is_empty()) {
        Some("a wrong answer is empty")
    } else if question.nb_options() > LABELS.len() {
        Some("more options than available labels")
    } else {
        None
    }
}
