use std::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// Option labels, in the order shuffled options are assigned to them.
pub const LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// One quiz item. Never mutated once it is in a bank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub right_answer: String,
    pub wrong_answers: Vec<String>,
    /// Opaque display payloads (FEN strings for chess banks).
    pub assets: Vec<String>,
}

/// Placeholder shown by a presenter before its first question is cued.
pub(crate) static EMPTY_QUESTION: Question = Question {
    text: String::new(),
    right_answer: String::new(),
    wrong_answers: Vec::new(),
    assets: Vec::new(),
};

impl Question {
    /// Build a question; validity is checked by the loader, not here.
    pub fn new(
        text: impl Into<String>,
        right_answer: impl Into<String>,
        wrong_answers: Vec<String>,
        assets: Vec<String>,
    ) -> Self {
        Question {
            text: text.into(),
            right_answer: right_answer.into(),
            wrong_answers,
            assets,
        }
    }

    /// Number of answer options the question produces (right + wrong).
    pub fn nb_options(&self) -> usize {
        1 + self.wrong_answers.len()
    }

    /// Whether the question may enter a bank: a non-empty right answer, at
    /// least one wrong answer, and no empty wrong answer.
    pub fn is_playable(&self) -> bool {
        !self.right_answer.is_empty()
            && !self.wrong_answers.is_empty()
            && self.wrong_answers.iter().all(|a| !a.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Answer validation
// ---------------------------------------------------------------------------

/// Outcome of checking a submitted option label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerCheck {
    Correct,
    Incorrect,
    /// The label does not name any displayed option.
    InvalidKey,
}

impl AnswerCheck {
    /// `Some(correct)` for a definitive result, `None` for `InvalidKey`.
    pub fn verdict(self) -> Option<bool> {
        match self {
            AnswerCheck::Correct    => Some(true),
            AnswerCheck::Incorrect  => Some(false),
            AnswerCheck::InvalidKey => None,
        }
    }
}

impl fmt::Display for AnswerCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerCheck::Correct    => write!(f, "correct"),
            AnswerCheck::Incorrect  => write!(f, "incorrect"),
            AnswerCheck::InvalidKey => write!(f, "invalid key"),
        }
    }
}

/// Where a presenter stands in its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    /// A question is cued and waiting for a definitive answer.
    Presenting,
    /// The last cued question has been scored; the next one is not cued yet.
    Answered,
    Finished,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("no questions provided: the question bank must be non-empty")]
    EmptyBank,
    #[error("no questions requested: length must be positive (got {requested})")]
    InvalidLength { requested: i64 },
    #[error("non-integer number of questions requested: {input:?}")]
    TypeMismatch { input: String },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("question bank is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question bank must be a JSON array of questions")]
    NotAnArray,
}
