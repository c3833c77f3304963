use std::collections::BTreeMap;

use log::debug;
use rand::{rngs::StdRng, Rng};

use crate::quiz_engine::{
    brain::QuizBrain,
    models::{AnswerCheck, Question, SessionPhase, EMPTY_QUESTION, LABELS},
};

/// Mediates between a [`QuizBrain`] and whatever view drives the session.
///
/// The presenter is UI-agnostic: it hands out plain strings and labelled
/// options, checks submitted labels, and keeps score through the quiz.
/// Rendering assets is left to an [`AssetRenderer`](crate::AssetRenderer).
pub struct QuizPresenter<'a, R: Rng = StdRng> {
    quiz: QuizBrain<'a, R>,
    current_question: &'a Question,
    current_user_choices: BTreeMap<char, String>,
    awaiting_answer: bool,
}

impl<'a, R: Rng> QuizPresenter<'a, R> {
    /// Wrap `quiz`; nothing is on display until the first cue.
    pub fn new(quiz: QuizBrain<'a, R>) -> Self {
        QuizPresenter {
            quiz,
            current_question: &EMPTY_QUESTION,
            current_user_choices: BTreeMap::new(),
            awaiting_answer: false,
        }
    }

    /// Move to the next question and label its freshly shuffled options.
    ///
    /// Panics if the session has no question left; check
    /// [`nb_questions_remaining`](Self::nb_questions_remaining) first.
    pub fn cue_next_question(&mut self) {
        self.current_question = self.quiz.next_question();
        self.current_user_choices = self.multiple_choice_dict();
        self.awaiting_answer = true;
        debug!(
            "cued question {} with {} options",
            self.quiz.current_question_number(),
            self.current_user_choices.len()
        );
    }

    /// A new label → option map for the current question. Does not replace
    /// the choices currently on display.
    pub fn multiple_choice_dict(&mut self) -> BTreeMap<char, String> {
        let options = self.quiz.generate_multiple_choice_options(self.current_question);
        assert!(options.len() <= LABELS.len(), "{} options exceed the label alphabet", options.len());
        LABELS.chars().zip(options).collect()
    }

    /// Check a submitted option label, ignoring case.
    pub fn is_correct(&self, user_answer_key: &str) -> AnswerCheck {
        let mut chars = user_answer_key.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_uppercase(),
            _ => return AnswerCheck::InvalidKey,
        };
        match self.current_user_choices.get(&key) {
            None => AnswerCheck::InvalidKey,
            Some(answer) if *answer == self.current_question.right_answer => AnswerCheck::Correct,
            Some(_) => AnswerCheck::Incorrect,
        }
    }

    /// Record the outcome of the question on display. Call exactly once per
    /// cued question, after a definitive [`is_correct`](Self::is_correct).
    pub fn post_question_update(&mut self, result: bool) {
        assert!(
            self.awaiting_answer,
            "post_question_update called without a question awaiting an answer"
        );
        if result {
            self.quiz.increment_score();
        }
        self.quiz.increment_nb_questions_answered();
        self.awaiting_answer = false;
    }

    /// Where the session stands, derived from the quiz counters.
    pub fn phase(&self) -> SessionPhase {
        if self.awaiting_answer {
            SessionPhase::Presenting
        } else if self.quiz.is_finished() {
            SessionPhase::Finished
        } else if self.quiz.nb_questions_answered() == 0 {
            SessionPhase::NotStarted
        } else {
            SessionPhase::Answered
        }
    }

    /// Feedback line for a definitive result.
    pub fn result_feedback(&self, result: bool) -> String {
        if result {
            "Correct!".to_string()
        } else {
            format!("Incorrect. The correct answer was {}.", self.right_answer())
        }
    }

    /// Score so far as `"<correct>/<answered>"`.
    pub fn scoreline_report(&self) -> String {
        format!("{}/{}", self.user_score(), self.nb_questions_answered())
    }

    /// Prompt text of the question on display.
    pub fn question_statement(&self) -> &str {
        &self.current_question.text
    }

    /// Correct option of the question on display.
    pub fn right_answer(&self) -> &str {
        &self.current_question.right_answer
    }

    /// Raw assets of the question on display, for an `AssetRenderer`.
    pub fn question_assets(&self) -> &[String] {
        &self.current_question.assets
    }

    /// The question on display; the empty sentinel before the first cue.
    pub fn current_question(&self) -> &'a Question {
        self.current_question
    }

    /// Label → option map shown for the current question.
    pub fn current_user_choices(&self) -> &BTreeMap<char, String> {
        &self.current_user_choices
    }

    /// 1-based number of the question in play.
    pub fn current_question_number(&self) -> usize {
        self.quiz.current_question_number()
    }

    /// Questions answered correctly so far.
    pub fn user_score(&self) -> usize {
        self.quiz.user_score()
    }

    /// Questions answered so far, right or wrong.
    pub fn nb_questions_answered(&self) -> usize {
        self.quiz.nb_questions_answered()
    }

    /// Questions left; zero once the session is finished.
    pub fn nb_questions_remaining(&self) -> usize {
        self.quiz.nb_questions_remaining()
    }

    /// The underlying quiz model.
    pub fn quiz(&self) -> &QuizBrain<'a, R> {
        &self.quiz
    }
}
