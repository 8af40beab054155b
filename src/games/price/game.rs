//! Basket pricing curriculum.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::QuizRng;
use crate::error::GenerationError;
use crate::puzzles::{Puzzle, Rule};
use crate::rules::PuzzleSource;

/// Price of one basket slot.
pub const SLOT_PRICE: i64 = 100;

/// Number of curriculum stages.
pub const STAGES: u8 = 3;

const QUESTION_SIZES: std::ops::RangeInclusive<i64> = 3..=9;

const VICTORY_HINT: &str =
    "A basket slot costs 100, candy adds 10 and chocolate adds 5. Thanks for helping me learn to reason!";

/// Something that can go in a basket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Snack {
    Candy,
    Chocolate,
}

impl Snack {
    #[must_use]
    pub const fn surcharge(self) -> i64 {
        match self {
            Snack::Candy => 10,
            Snack::Chocolate => 5,
        }
    }
}

impl fmt::Display for Snack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Snack::Candy => f.write_str("🍬 candy"),
            Snack::Chocolate => f.write_str("🍫 chocolate"),
        }
    }
}

/// A basket of `size` slots holding some snacks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basket {
    pub size: i64,
    pub snacks: Vec<Snack>,
}

impl Basket {
    pub fn new(size: i64, snacks: &[Snack]) -> Self {
        Self { size, snacks: snacks.to_vec() }
    }

    #[must_use]
    pub fn price(&self) -> i64 {
        self.size * SLOT_PRICE + self.snacks.iter().map(|s| s.surcharge()).sum::<i64>()
    }
}

impl fmt::Display for Basket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "basket size {}, ", self.size)?;
        if self.snacks.is_empty() {
            return f.write_str("nothing inside");
        }
        let names: Vec<String> = self.snacks.iter().map(ToString::to_string).collect();
        f.write_str(&names.join(" + "))
    }
}

/// Nudge shown with a stage's prompt.
#[must_use]
pub fn stage_hint(stage: u8) -> Option<&'static str> {
    match stage {
        1 => Some("The bigger the basket, the higher the price! One basket slot costs 100."),
        2 => Some("Same basket, but candy or chocolate makes it cost a little more!"),
        3 => Some("Now a basket holds both candy and chocolate. Add them both up!"),
        _ => None,
    }
}

/// Example baskets shown for a stage, and the snacks in the question basket.
#[must_use]
pub fn stage_layout(stage: u8) -> Option<(Vec<Basket>, Vec<Snack>)> {
    use Snack::{Candy, Chocolate};

    match stage {
        // Only the size differs.
        1 => Some((
            vec![Basket::new(2, &[]), Basket::new(4, &[]), Basket::new(6, &[])],
            vec![],
        )),
        // Same size, different snacks.
        2 => Some((
            vec![Basket::new(5, &[]), Basket::new(5, &[Candy]), Basket::new(5, &[Chocolate])],
            vec![Candy],
        )),
        // Both vary.
        3 => Some((
            vec![
                Basket::new(3, &[Candy]),
                Basket::new(4, &[Chocolate]),
                Basket::new(2, &[Candy, Chocolate]),
            ],
            vec![Candy, Chocolate],
        )),
        _ => None,
    }
}

/// Price-rule inference source.
///
/// A correct answer advances to the next stage; a miss repeats the stage
/// with a different question basket.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceGame {
    stage: u8,
}

impl Default for PriceGame {
    fn default() -> Self {
        Self { stage: 1 }
    }
}

impl PriceGame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage the next draw will use (1-based).
    #[must_use]
    pub fn stage(&self) -> u8 {
        self.stage
    }
}

impl PuzzleSource for PriceGame {
    type Answer = i64;

    fn name(&self) -> &str {
        "price stages"
    }

    fn draw(
        &mut self,
        last_rule: Option<&Rule>,
        rng: &mut QuizRng,
    ) -> Result<Puzzle<i64>, GenerationError> {
        let (examples, snacks) = match stage_layout(self.stage) {
            Some(layout) => layout,
            None => return Err(self.exhausted()),
        };

        let previous_size = match last_rule {
            Some(Rule::Pricing { stage, size }) if *stage == self.stage => Some(*size),
            _ => None,
        };
        let sizes: Vec<i64> = QUESTION_SIZES.filter(|&s| Some(s) != previous_size).collect();
        let size = match rng.choose(&sizes) {
            Some(size) => *size,
            None => return Err(self.exhausted()),
        };
        let question = Basket::new(size, &snacks);

        let mut labels: Vec<String> = examples
            .iter()
            .enumerate()
            .map(|(i, b)| format!("example {}: {}", i + 1, b))
            .collect();
        labels.push(format!("this order: {}", question));

        let values: Vec<i64> = examples.iter().chain(std::iter::once(&question)).map(Basket::price).collect();
        let blank = values.len() - 1;

        debug!("price stage {} asks about {}", self.stage, question);
        let mut puzzle = Puzzle::new(Rule::Pricing { stage: self.stage, size }, values, blank)
            .with_labels(labels)
            .with_heading(format!("Step {} / {}", self.stage, STAGES));
        if let Some(hint) = stage_hint(self.stage) {
            puzzle = puzzle.with_hint(hint);
        }
        Ok(puzzle)
    }

    fn remaining(&self) -> Option<usize> {
        Some(usize::from((STAGES + 1).saturating_sub(self.stage)))
    }

    fn record_outcome(&mut self, correct: bool) {
        if correct {
            self.stage = self.stage.saturating_add(1);
        }
    }

    fn reset(&mut self) {
        self.stage = 1;
    }

    fn victory_hint(&self) -> Option<&str> {
        Some(VICTORY_HINT)
    }
}
