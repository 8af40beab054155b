//! # pattern-quiz
//!
//! Turn-based "guess the hidden value" quizzes driven by a small round
//! state machine.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic Core**: The state machine never inspects rule
//!    parameters. Variants plug in through [`PuzzleSource`].
//!
//! 2. **Explicit State**: Every action goes through [`transition`] and comes
//!    back as a [`View`]. Nothing is read from ambient globals.
//!
//! 3. **Reproducible**: All randomness comes from a seeded [`QuizRng`], and a
//!    session snapshot resumes the exact same stream.
//!
//! ## Modules
//!
//! - `core`: State, actions, RNG, configuration
//! - `puzzles`: Rules, puzzles, the fixed catalogue, weather values
//! - `rules`: The `PuzzleSource` trait
//! - `games`: Pattern, catalogue, weather and price variants
//! - `session`: State machine, views, presenters

pub mod core;
pub mod error;
pub mod games;
pub mod puzzles;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord,
    ArithmeticConfig, GeometricConfig, QuizConfig, Span,
    Feedback, Phase, RoundState,
    QuizRng, QuizRngState,
};

pub use crate::error::{ConfigError, GenerationError, SessionError};

pub use crate::puzzles::{
    Answer, Catalogue, CatalogueEntry, CatalogueId,
    Puzzle, Rule, RuleFamily, RuleKey, Weather,
};

pub use crate::rules::PuzzleSource;

pub use crate::games::catalogue::CatalogueGame;
pub use crate::games::pattern::PatternGame;
pub use crate::games::price::PriceGame;
pub use crate::games::weather::WeatherGame;

pub use crate::session::{transition, Presenter, Session, View};
