//! Puzzle source trait for quiz variants.
//!
//! Variants implement `PuzzleSource` to define:
//! - How a puzzle is drawn, given the previous round's rule
//! - Whether (and when) the supply runs out
//! - What they remember across rounds and how a reset clears it

use crate::core::QuizRng;
use crate::error::GenerationError;
use crate::puzzles::{Answer, Puzzle, Rule};

/// Puzzle source trait.
///
/// The round state machine calls into this trait; it never looks at rule
/// parameters itself.
///
/// ## Implementation Notes
///
/// - `draw`: avoid repeating `last_rule`'s key unless the candidate pool
///   leaves no alternative
/// - `draw`: bound any rejection loop and return `DrawRejected` past the cap
/// - `remaining`: `None` for sources that never run out
/// - `reset`: called on every session init, including the first
pub trait PuzzleSource {
    /// Type of the hidden value the player guesses.
    type Answer: Answer;

    /// Short name used in logs and exhaustion messages.
    fn name(&self) -> &str;

    /// Produce the next puzzle.
    fn draw(
        &mut self,
        last_rule: Option<&Rule>,
        rng: &mut QuizRng,
    ) -> Result<Puzzle<Self::Answer>, GenerationError>;

    /// Puzzles left before exhaustion, if the supply is finite.
    fn remaining(&self) -> Option<usize> {
        None
    }

    /// Told whether the last checked guess was right.
    fn record_outcome(&mut self, _correct: bool) {}

    /// Forget everything remembered this session.
    fn reset(&mut self) {}

    /// Sentence revealed on the victory screen.
    fn victory_hint(&self) -> Option<&str> {
        None
    }

    /// Convenience: the `Exhausted` error for this source.
    fn exhausted(&self) -> GenerationError {
        GenerationError::Exhausted { source_name: self.name().to_string() }
    }
}
