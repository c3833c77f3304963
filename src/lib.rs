//! # pgn_quizzer
//!
//! A multiple-choice quiz engine, built around chess positions but agnostic
//! to what its questions are about.
//!
//! ## How it works
//!
//! 1. Load a question bank, e.g. with [`load_questions_from_json`]. Invalid
//!    items (no right answer, no wrong answers, empty options) are skipped.
//! 2. Draw a session with [`QuizSettings::session`] (or build a
//!    [`QuizBrain`] with your own RNG and wrap it in a [`QuizPresenter`]).
//!    The session is a uniformly random, duplicate-free sample of the bank.
//! 3. Drive the presenter from a view: cue a question, show its statement,
//!    assets and labelled options, check the submitted label with
//!    [`QuizPresenter::is_correct`], then record the result with
//!    [`QuizPresenter::post_question_update`].
//!
//! ## Key features
//!
//! - **Three-valued answers**: [`AnswerCheck::InvalidKey`] is distinct from a
//!   wrong answer, so a view can re-prompt without costing the player a point.
//! - **Deterministic**: pass `rng_seed: Some(u64)` (or any seeded `Rng`) to
//!   reproduce the exact same session and option order.
//! - **Pluggable rendering**: assets go through an [`AssetRenderer`];
//!   [`FenDiagram`] draws chess positions, [`RawAsset`] shows text as-is.
//!
//! ## Quick start
//!
//! ```rust
//! use pgn_quizzer::{AnswerCheck, Question, QuizSettings};
//!
//! let bank = vec![
//!     Question::new("After 1. e4 e5 2. Nf3, what is Black's most common reply?", "Nc6",
//!         vec!["Nf6".into(), "d6".into()], vec![]),
//! ];
//! let settings = QuizSettings { length: 1, rng_seed: Some(42) };
//! let mut presenter = settings.session(&bank).unwrap();
//!
//! presenter.cue_next_question();
//! for (label, option) in presenter.current_user_choices() {
//!     println!("{label}. {option}");
//! }
//! assert_eq!(presenter.is_correct("?"), AnswerCheck::InvalidKey);
//!
//! let check = presenter.is_correct("a");
//! presenter.post_question_update(check == AnswerCheck::Correct);
//! assert_eq!(presenter.nb_questions_remaining(), 0);
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `pgn_quizzer::QuizBrain`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    load_questions_from_data, load_questions_from_json, load_questions_from_str, parse_length,
    run_quiz_console, AnswerCheck, AssetRenderer, FenDiagram, LoadError, Question, QuizBrain,
    QuizError, QuizPresenter, QuizSettings, RawAsset, SessionPhase,
};
