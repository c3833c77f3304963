//! Core quiz engine: question sampling, presentation, and answer checking.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: questions, answer checks, session phases, errors |
//! | `brain`     | `QuizBrain`: samples a session from the bank, tracks progress and score |
//! | `presenter` | `QuizPresenter`: labels options, validates answers, reports score |
//! | `settings`  | Session configuration and length parsing |
//! | `loader`    | JSON question banks, skipping invalid items |
//! | `render`    | Asset renderers (raw text, FEN board diagrams) |
//! | `console`   | Text-console session loop over any reader/writer pair |

pub mod brain;
pub mod console;
pub mod loader;
pub mod models;
pub mod presenter;
pub mod render;
pub mod settings;

pub use brain::QuizBrain;
pub use console::run_quiz_console;
pub use loader::{load_questions_from_data, load_questions_from_json, load_questions_from_str};
pub use models::{AnswerCheck, LoadError, Question, QuizError, SessionPhase, LABELS};
pub use presenter::QuizPresenter;
pub use render::{AssetRenderer, FenDiagram, RawAsset};
pub use settings::{parse_length, QuizSettings};
