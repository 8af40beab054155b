//! Player actions routed in by the presentation adapter.
//!
//! Exactly one action is processed at a time:
//! - `Submit(guess)` while a puzzle is showing
//! - `Continue` after feedback
//! - `Reset` from anywhere

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::state::Phase;
use crate::error::SessionError;

/// A player action carrying a parsed guess of answer type `A`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action<A> {
    Submit(A),
    Continue,
    Reset,
}

impl<A> Action<A> {
    /// Payload-free kind, used for history and error messages.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Submit(_) => ActionKind::Submit,
            Action::Continue => ActionKind::Continue,
            Action::Reset => ActionKind::Reset,
        }
    }
}

impl<A: FromStr> Action<A> {
    /// Parse raw text input into a `Submit` action.
    ///
    /// Blank input is `MissingGuess`; anything `A` cannot parse is
    /// `MalformedGuess`. Input is never defaulted to a value.
    pub fn parse_submit(raw: &str) -> Result<Self, SessionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SessionError::MissingGuess);
        }
        trimmed
            .parse::<A>()
            .map(Action::Submit)
            .map_err(|_| SessionError::MalformedGuess { input: trimmed.to_string() })
    }
}

/// Action without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Submit,
    Continue,
    Reset,
}

impl ActionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionKind::Submit => "submit",
            ActionKind::Continue => "continue",
            ActionKind::Reset => "reset",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accepted action and the phase change it caused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Round the action was taken in (starts at 1).
    pub round: u32,
    pub action: ActionKind,
    pub from: Phase,
    pub to: Phase,
}

impl ActionRecord {
    #[must_use]
    pub fn new(round: u32, action: ActionKind, from: Phase, to: Phase) -> Self {
        Self { round, action, from, to }
    }
}
