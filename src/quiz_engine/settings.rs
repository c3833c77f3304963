use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    brain::QuizBrain,
    models::{Question, QuizError},
    presenter::QuizPresenter,
};

/// How a quiz session is drawn from the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    /// Requested number of questions; clamped to the bank size.
    pub length: usize,
    /// Fixed seed for reproducible sessions; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        QuizSettings { length: 5, rng_seed: None }
    }
}

impl QuizSettings {
    /// Settings for `length` questions drawn from entropy.
    pub fn new(length: usize) -> Self {
        QuizSettings { length, ..Default::default() }
    }

    /// RNG for one session: seeded if `rng_seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        }
    }

    /// Sample a fresh session from `question_bank` and wrap it in a presenter.
    pub fn session<'a>(&self, question_bank: &'a [Question]) -> Result<QuizPresenter<'a>, QuizError> {
        let quiz = QuizBrain::new(question_bank, self.length, self.rng())?;
        Ok(QuizPresenter::new(quiz))
    }
}

/// Parse a requested session length typed by a user.
///
/// Text that is not an integer is a [`QuizError::TypeMismatch`]; zero or a
/// negative integer is a [`QuizError::InvalidLength`].
pub fn parse_length(input: &str) -> Result<usize, QuizError> {
    let trimmed = input.trim();
    let requested: i64 = trimmed.parse().map_err(|_| QuizError::TypeMismatch {
        input: trimmed.to_string(),
    })?;
    if requested <= 0 {
        return Err(QuizError::InvalidLength { requested });
    }
    usize::try_from(requested).map_err(|_| QuizError::InvalidLength { requested })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_has_five_questions() {
        let settings = QuizSettings::default();
        assert_eq!(settings.length, 5);
        assert_eq!(settings.rng_seed, None);
    }

    #[test]
    fn seeded_settings_reproduce_sessions() {
        let bank: Vec<Question> = (0..12)
            .map(|i| Question::new(format!("Q{i}"), "yes", vec!["no".into()], vec![]))
            .collect();
        let settings = QuizSettings { length: 6, rng_seed: Some(31) };
        let a = settings.session(&bank).unwrap();
        let b = settings.session(&bank).unwrap();
        assert_eq!(a.quiz().questions(), b.quiz().questions());
        assert_eq!(a.nb_questions_remaining(), 6);
    }

    #[test]
    fn session_surfaces_construction_errors() {
        assert_eq!(QuizSettings::new(3).session(&[]).err(), Some(QuizError::EmptyBank));
    }

    #[test]
    fn parse_length_accepts_positive_integers() {
        assert_eq!(parse_length("5"), Ok(5));
        assert_eq!(parse_length(" 12 \n"), Ok(12));
    }

    #[test]
    fn parse_length_rejects_non_integers() {
        for input in ["2.5", "five", "", "1e3"] {
            assert_eq!(
                parse_length(input),
                Err(QuizError::TypeMismatch { input: input.trim().to_string() })
            );
        }
    }

    #[test]
    fn parse_length_rejects_non_positive_lengths() {
        assert_eq!(parse_length("0"), Err(QuizError::InvalidLength { requested: 0 }));
        assert_eq!(parse_length("-3"), Err(QuizError::InvalidLength { requested: -3 }));
    }
}
