//! Rules: the generative pattern behind a puzzle's answer.
//!
//! A [`Rule`] is a sum type; each variant belongs to one quiz family. The
//! [`RuleKey`] of a rule is the parameter that must not repeat between
//! consecutive rounds: two arithmetic rounds in a row never share a step, two
//! weather rounds never share a motif, and so on.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::catalogue::CatalogueId;
use super::weather::Weather;

/// Inline storage for number sequences (lengths 4-7 in practice).
pub type Sequence = SmallVec<[i64; 8]>;

/// The pattern underlying a puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    /// `start + i * step`.
    Arithmetic { start: i64, step: i64 },

    /// `start * ratio^i`.
    Geometric { start: i64, ratio: i64 },

    /// A hand-authored catalogue entry.
    FixedSequence {
        id: CatalogueId,
        values: Sequence,
        blank_index: usize,
    },

    /// A weather motif repeated day after day.
    Cycle { name: String, motif: Vec<Weather> },

    /// Price curriculum stage, asked about a basket of `size` slots.
    Pricing { stage: u8, size: i64 },
}

/// Identity of the parameter that distinguishes consecutive rounds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKey {
    Step(i64),
    Ratio(i64),
    Catalogue(CatalogueId),
    Cycle(String),
    Pricing { stage: u8, size: i64 },
}

/// Rule family, used to pick candidate sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleFamily {
    Arithmetic,
    Geometric,
    Fixed,
    Cycle,
    Pricing,
}

impl Rule {
    #[must_use]
    pub fn family(&self) -> RuleFamily {
        match self {
            Rule::Arithmetic { .. } => RuleFamily::Arithmetic,
            Rule::Geometric { .. } => RuleFamily::Geometric,
            Rule::FixedSequence { .. } => RuleFamily::Fixed,
            Rule::Cycle { .. } => RuleFamily::Cycle,
            Rule::Pricing { .. } => RuleFamily::Pricing,
        }
    }

    /// Parameter that must differ from the previous round's.
    ///
    /// Catalogue entries report the step or ratio their values follow, so an
    /// authored "+10" sequence collides with a generated one. Entries that
    /// follow neither fall back to their catalogue id.
    #[must_use]
    pub fn key(&self) -> RuleKey {
        match self {
            Rule::Arithmetic { step, .. } => RuleKey::Step(*step),
            Rule::Geometric { ratio, .. } => RuleKey::Ratio(*ratio),
            Rule::FixedSequence { id, values, .. } => {
                if let Some(step) = common_difference(values) {
                    RuleKey::Step(step)
                } else if let Some(ratio) = common_ratio(values) {
                    RuleKey::Ratio(ratio)
                } else {
                    RuleKey::Catalogue(*id)
                }
            }
            Rule::Cycle { name, .. } => RuleKey::Cycle(name.clone()),
            Rule::Pricing { stage, size } => RuleKey::Pricing { stage: *stage, size: *size },
        }
    }

    /// Human-readable description shown with the feedback.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Rule::Arithmetic { step, .. } => describe_step(*step),
            Rule::Geometric { ratio, .. } => describe_ratio(*ratio),
            Rule::FixedSequence { values, .. } => {
                if let Some(step) = common_difference(values) {
                    describe_step(step)
                } else if let Some(ratio) = common_ratio(values) {
                    describe_ratio(ratio)
                } else {
                    "a fixed sequence".to_string()
                }
            }
            Rule::Cycle { motif, .. } => {
                let names: Vec<&str> = motif.iter().map(|w| w.name()).collect();
                format!("{} repeating", names.join(" - "))
            }
            Rule::Pricing { stage, .. } => match stage {
                1 => "each basket slot costs 100".to_string(),
                2 => "candy adds 10 and chocolate adds 5 to the basket price".to_string(),
                _ => "basket slots cost 100 each, plus 10 for candy and 5 for chocolate".to_string(),
            },
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn describe_step(step: i64) -> String {
    if step >= 0 {
        format!("grows by {} each step (adding)", step)
    } else {
        format!("shrinks by {} each step (subtracting)", step.abs())
    }
}

fn describe_ratio(ratio: i64) -> String {
    format!("multiplies by {} each step", ratio)
}

/// Common difference of `values`, if every adjacent pair shares one.
#[must_use]
pub fn common_difference(values: &[i64]) -> Option<i64> {
    let mut pairs = values.windows(2).map(|w| w[1] - w[0]);
    let first = pairs.next()?;
    pairs.all(|d| d == first).then_some(first)
}

/// Common integer ratio of `values`, if every adjacent pair shares one.
#[must_use]
pub fn common_ratio(values: &[i64]) -> Option<i64> {
    let mut ratios = values.windows(2).map(|w| {
        if w[0] != 0 && w[1] % w[0] == 0 {
            Some(w[1] / w[0])
        } else {
            None
        }
    });
    let first = ratios.next()??;
    ratios.all(|r| r == Some(first)).then_some(first)
}
