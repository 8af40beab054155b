//! Random arithmetic/geometric number patterns.

use log::debug;
use serde::{Deserialize, Serialize};

use super::sequence::{arithmetic_sequence, blank_range, geometric_sequence};
use crate::core::{ArithmeticConfig, GeometricConfig, QuizConfig, QuizRng};
use crate::error::GenerationError;
use crate::puzzles::{Puzzle, Rule, Sequence};
use crate::rules::PuzzleSource;

const VICTORY_HINT: &str = "Sharp spikes bristle thickly along the top of the castle wall.";

/// Number-pattern source drawing a fresh rule every round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatternGame {
    arithmetic: ArithmeticConfig,
    geometric: GeometricConfig,
    magnitude_bound: i64,
    max_draw_attempts: u32,
}

impl PatternGame {
    #[must_use]
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            arithmetic: config.arithmetic.clone(),
            geometric: config.geometric.clone(),
            magnitude_bound: config.magnitude_bound,
            max_draw_attempts: config.max_draw_attempts,
        }
    }

    /// Draw an arithmetic puzzle, avoiding `previous_step`.
    pub fn draw_arithmetic(
        &self,
        previous_step: Option<i64>,
        rng: &mut QuizRng,
    ) -> Result<Puzzle<i64>, GenerationError> {
        let cfg = &self.arithmetic;
        let steps = candidates(&cfg.steps, &cfg.emergency_steps, previous_step);
        let length = rng.gen_range(cfg.length.range()) as usize;

        for attempt in 1..=self.max_draw_attempts {
            let start = rng.gen_range(cfg.start.range());
            let step = pick(&steps, rng);
            match arithmetic_sequence(start, step, length, self.magnitude_bound) {
                Ok(values) => return Ok(finish(Rule::Arithmetic { start, step }, values, rng)),
                Err(reason) => debug!("arithmetic draw {attempt} rejected: {reason}"),
            }
        }
        Err(GenerationError::DrawRejected { attempts: self.max_draw_attempts })
    }

    /// Draw a geometric puzzle, avoiding `previous_ratio`.
    ///
    /// Ratio and length are fixed for the whole draw; only the start value
    /// is redrawn after a rejection.
    pub fn draw_geometric(
        &self,
        previous_ratio: Option<i64>,
        rng: &mut QuizRng,
    ) -> Result<Puzzle<i64>, GenerationError> {
        let cfg = &self.geometric;
        let ratios = candidates(&cfg.ratios, &cfg.emergency_ratios, previous_ratio);
        let ratio = pick(&ratios, rng);
        let length = rng.gen_range(cfg.length.range()) as usize;

        for attempt in 1..=self.max_draw_attempts {
            let start = rng.gen_range(cfg.start.range());
            match geometric_sequence(start, ratio, length, self.magnitude_bound, cfg.allow_non_positive) {
                Ok(values) => return Ok(finish(Rule::Geometric { start, ratio }, values, rng)),
                Err(reason) => {
                    debug!("geometric draw {attempt} (start {start}, x{ratio}, len {length}) rejected: {reason}");
                }
            }
        }
        Err(GenerationError::DrawRejected { attempts: self.max_draw_attempts })
    }
}

impl PuzzleSource for PatternGame {
    type Answer = i64;

    fn name(&self) -> &str {
        "number patterns"
    }

    fn draw(
        &mut self,
        last_rule: Option<&Rule>,
        rng: &mut QuizRng,
    ) -> Result<Puzzle<i64>, GenerationError> {
        let puzzle = if rng.gen_bool(0.5) {
            let previous = match last_rule {
                Some(Rule::Arithmetic { step, .. }) => Some(*step),
                _ => None,
            };
            self.draw_arithmetic(previous, rng)?
        } else {
            let previous = match last_rule {
                Some(Rule::Geometric { ratio, .. }) => Some(*ratio),
                _ => None,
            };
            self.draw_geometric(previous, rng)?
        };

        debug!("drew {:?} -> {}", puzzle.rule(), puzzle.masked_text());
        Ok(puzzle)
    }

    fn victory_hint(&self) -> Option<&str> {
        Some(VICTORY_HINT)
    }
}

/// `pool` minus `previous`, or `emergency` if that leaves nothing.
fn candidates(pool: &[i64], emergency: &[i64], previous: Option<i64>) -> Vec<i64> {
    let filtered: Vec<i64> = pool.iter().copied().filter(|&c| Some(c) != previous).collect();
    if filtered.is_empty() {
        debug!("candidate pool empty after excluding {previous:?}; using emergency set");
        emergency.to_vec()
    } else {
        filtered
    }
}

fn pick(candidates: &[i64], rng: &mut QuizRng) -> i64 {
    // Config validation guarantees non-empty candidate sets.
    rng.choose(candidates).copied().unwrap_or(1)
}

fn finish(rule: Rule, values: Sequence, rng: &mut QuizRng) -> Puzzle<i64> {
    let blank = rng.gen_index(blank_range(values.len()));
    Puzzle::new(rule, values, blank)
}
