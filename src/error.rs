//! Error types for generation, configuration and session handling.
//!
//! A wrong guess is never an error; it produces feedback. Errors here are
//! either blocking (the source ran dry) or rejections that leave the session
//! untouched (bad input, an action that does not fit the current phase).

use thiserror::Error;

use crate::core::Phase;

/// A puzzle source could not produce a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Every puzzle the source can offer has been used this session.
    #[error("no puzzles left in {source_name}; reset the session to play again")]
    Exhausted { source_name: String },

    /// The rejection-sampling loop hit its retry cap.
    #[error("gave up after {attempts} rejected draws")]
    DrawRejected { attempts: u32 },
}

/// Invalid [`crate::core::QuizConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("target score must be at least 1")]
    ZeroTarget,

    #[error("max_draw_attempts must be at least 1")]
    ZeroAttempts,

    #[error("magnitude bound must be positive, got {0}")]
    NonPositiveBound(i64),

    #[error("{field}: span min {min} is greater than max {max}")]
    InvertedSpan { field: &'static str, min: i64, max: i64 },

    #[error("{field}: sequences must have at least 4 elements, span allows {min}")]
    TooShort { field: &'static str, min: i64 },

    #[error("{field}: span {min}..={max} reaches past the magnitude bound {bound}")]
    StartOutOfBounds { field: &'static str, min: i64, max: i64, bound: i64 },

    #[error("{field}: candidate set is empty")]
    EmptyCandidates { field: &'static str },

    #[error("weather history must cover at least 2 days, got {0}")]
    ShortHistory(usize),

    #[error("cannot read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejection from [`crate::session::Session`].
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no guess was entered")]
    MissingGuess,

    #[error("'{input}' is not a valid answer")]
    MalformedGuess { input: String },

    #[error("{action} is not allowed while {phase}")]
    UnexpectedAction { action: &'static str, phase: Phase },

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("session snapshot failed: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("session snapshot is inconsistent: {0}")]
    InconsistentSnapshot(&'static str),
}

impl SessionError {
    /// True when only a reset can move the session forward.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        matches!(self, SessionError::Generation(_))
    }
}
