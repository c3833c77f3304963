use log::debug;
use rand::{rngs::StdRng, seq::index, seq::SliceRandom, Rng};

use crate::quiz_engine::models::{Question, QuizError};

/// Tracks one quiz session: the sampled questions, progress and score.
///
/// The questions are drawn from the bank once, at construction. Playing again
/// means building a new `QuizBrain` against the same bank.
pub struct QuizBrain<'a, R: Rng = StdRng> {
    question_bank: &'a [Question],
    questions: Vec<&'a Question>,
    length: usize,
    nb_questions_answered: usize,
    user_score: usize,
    current_scored: bool,
    rng: R,
}

impl<'a, R: Rng> QuizBrain<'a, R> {
    /// Sample a session of `length` questions from `question_bank`.
    ///
    /// If the bank holds fewer than `length` questions the session uses all
    /// of them, in random order.
    ///
    /// # Errors
    /// * [`QuizError::EmptyBank`] if `question_bank` is empty (checked first).
    /// * [`QuizError::InvalidLength`] if `length` is zero.
    pub fn new(question_bank: &'a [Question], length: usize, mut rng: R) -> Result<Self, QuizError> {
        if question_bank.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        if length == 0 {
            return Err(QuizError::InvalidLength { requested: 0 });
        }

        let length = length.min(question_bank.len());
        // Distinct indices, fully shuffled: every ordered subset is equally likely.
        let questions: Vec<&'a Question> = index::sample(&mut rng, question_bank.len(), length)
            .into_iter()
            .map(|i| &question_bank[i])
            .collect();
        debug!("sampled {} of {} questions for a new session", length, question_bank.len());

        Ok(QuizBrain {
            question_bank,
            questions,
            length,
            nb_questions_answered: 0,
            user_score: 0,
            current_scored: false,
            rng,
        })
    }

    /// 1-based number of the question in play.
    pub fn current_question_number(&self) -> usize {
        1 + self.nb_questions_answered
    }

    /// The question at the current position; panics once the session is exhausted.
    pub fn next_question(&self) -> &'a Question {
        assert!(
            self.nb_questions_answered < self.length,
            "next_question called with no questions remaining ({} of {} answered)",
            self.nb_questions_answered,
            self.length
        );
        self.questions[self.nb_questions_answered]
    }

    /// Mark the question in play as answered; panics past the session length.
    pub fn increment_nb_questions_answered(&mut self) {
        assert!(
            self.nb_questions_answered < self.length,
            "all {} questions have already been answered",
            self.length
        );
        self.nb_questions_answered += 1;
        self.current_scored = false;
    }

    /// Credit the question in play. At most one call per question, made
    /// before the matching `increment_nb_questions_answered`.
    pub fn increment_score(&mut self) {
        assert!(
            self.nb_questions_answered < self.length,
            "cannot score a finished session"
        );
        assert!(
            !self.current_scored,
            "question {} was already scored",
            self.current_question_number()
        );
        self.current_scored = true;
        self.user_score += 1;
    }

    /// Questions not yet answered; zero once the session is complete.
    pub fn nb_questions_remaining(&self) -> usize {
        self.length - self.nb_questions_answered
    }

    /// Whether every question of the session has been answered.
    pub fn is_finished(&self) -> bool {
        self.nb_questions_remaining() == 0
    }

    /// The right answer and every wrong answer of `question`, in a uniformly
    /// random order. Each call shuffles afresh.
    pub fn generate_multiple_choice_options(&mut self, question: &Question) -> Vec<String> {
        let mut options = Vec::with_capacity(question.nb_options());
        options.push(question.right_answer.clone());
        options.extend(question.wrong_answers.iter().cloned());
        options.shuffle(&mut self.rng);
        options
    }

    /// Session size after clamping to the bank.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The sampled questions, in the order they will be asked.
    pub fn questions(&self) -> &[&'a Question] {
        &self.questions
    }

    /// The full pool this session was drawn from.
    pub fn question_bank(&self) -> &'a [Question] {
        self.question_bank
    }

    /// Questions answered correctly so far.
    pub fn user_score(&self) -> usize {
        self.user_score
    }

    /// Questions answered so far, right or wrong.
    pub fn nb_questions_answered(&self) -> usize {
        self.nb_questions_answered
    }
}
