//! Round state: everything one session remembers between actions.
//!
//! ## Phase
//!
//! `Init → Playing → Checking → Finished → (Victory | Playing)`.
//! `Checking` is transient: a submit passes through it and lands in
//! `Finished` or `Victory` within the same action.
//!
//! ## RoundState
//!
//! Score, target, the current puzzle, the last rule (so the next draw can
//! avoid repeating it), feedback and a history of accepted actions. The
//! history uses `im` so snapshotting a session does not copy it.

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use crate::puzzles::{Answer, Puzzle, Rule};

/// Where the session is in the round lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Init,
    Playing,
    Checking,
    Finished,
    Victory,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Init => "initializing",
            Phase::Playing => "playing",
            Phase::Checking => "checking",
            Phase::Finished => "finished",
            Phase::Victory => "victory",
        }
    }

    /// Victory accepts nothing but a reset.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::Victory
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one checked guess.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feedback<A> {
    pub correct: bool,
    pub guess: A,
    pub answer: A,
    pub rule_description: String,
    /// The full, unmasked sequence.
    pub revealed: String,
}

impl<A: fmt::Display> fmt::Display for Feedback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.correct {
            write!(f, "Correct! The answer was {}.", self.answer)?;
        } else {
            write!(f, "Not quite. You said {}, but the answer was {}.", self.guess, self.answer)?;
        }
        write!(f, "\n\nRule: {}.", self.rule_description)?;
        write!(f, "\n\nFull pattern: {}", self.revealed)
    }
}

/// Mutable state of one session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundState<A> {
    pub phase: Phase,

    /// Correct answers so far. Never decreases within a session.
    pub score: u32,

    /// Fixed when the session is created.
    target_score: u32,

    /// Round number (starts at 1 once the first puzzle is drawn).
    pub round: u32,

    pub puzzle: Option<Puzzle<A>>,

    /// Rule of the previous puzzle, passed to the next draw.
    pub last_rule: Option<Rule>,

    pub feedback: Option<Feedback<A>>,

    /// Bumped whenever a fresh puzzle is shown so adapters can reset input.
    pub input_nonce: u64,

    /// Set when only a reset can move the session forward.
    pub notice: Option<String>,

    pub history: Vector<ActionRecord>,
}

impl<A: Answer> RoundState<A> {
    #[must_use]
    pub fn new(target_score: u32) -> Self {
        assert!(target_score > 0, "Target score must be at least 1");
        Self {
            phase: Phase::Init,
            score: 0,
            target_score,
            round: 0,
            puzzle: None,
            last_rule: None,
            feedback: None,
            input_nonce: 0,
            notice: None,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.score >= self.target_score
    }

    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.notice.is_some()
    }

    /// Return to `Init`: zero score, forget the last rule and the puzzle.
    ///
    /// The input nonce keeps counting so a reused widget still resets.
    pub fn reset(&mut self) {
        self.phase = Phase::Init;
        self.score = 0;
        self.round = 0;
        self.puzzle = None;
        self.last_rule = None;
        self.feedback = None;
        self.notice = None;
        self.history.clear();
    }

    /// Install a freshly drawn puzzle and start its round.
    pub fn begin_round(&mut self, puzzle: Puzzle<A>) {
        self.last_rule = Some(puzzle.rule().clone());
        self.puzzle = Some(puzzle);
        self.round += 1;
        self.input_nonce += 1;
        self.feedback = None;
        self.notice = None;
        self.phase = Phase::Playing;
    }

    pub fn record(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }
}
