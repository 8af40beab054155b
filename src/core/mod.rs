//! Core engine types: state, actions, RNG, configuration.
//!
//! These are shared by every quiz variant. Variants plug in through
//! [`crate::rules::PuzzleSource`] rather than modifying the core.

pub mod action;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{Action, ActionKind, ActionRecord};
pub use config::{ArithmeticConfig, GeometricConfig, QuizConfig, Span, MIN_SEQUENCE_LEN};
pub use rng::{QuizRng, QuizRngState};
pub use state::{Feedback, Phase, RoundState};
