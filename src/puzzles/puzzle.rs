//! A single round's puzzle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rule::Rule;

/// Placeholder shown in place of the hidden value.
pub const BLANK: &str = "?";

/// Values a quiz can ask the player for.
///
/// Comparison is exact `PartialEq`; there is no tolerance band.
pub trait Answer: Clone + PartialEq + fmt::Debug + fmt::Display + FromStr {}

impl<T> Answer for T where T: Clone + PartialEq + fmt::Debug + fmt::Display + FromStr {}

/// Ordered values with one hidden, plus the rule that produced them.
///
/// The correct answer is always the value at `blank_index`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Puzzle<A> {
    rule: Rule,
    values: SmallVec<[A; 8]>,
    /// Per-position captions. Empty, or one per value.
    labels: Vec<String>,
    blank_index: usize,
    description: String,
    /// Title shown above the values, e.g. a curriculum stage.
    #[serde(default)]
    heading: Option<String>,
    /// Nudge shown with the prompt, before any guess.
    #[serde(default)]
    hint: Option<String>,
}

impl<A: Answer> Puzzle<A> {
    /// Build a puzzle.
    ///
    /// Panics if `blank_index` is out of bounds.
    pub fn new(rule: Rule, values: impl IntoIterator<Item = A>, blank_index: usize) -> Self {
        let values: SmallVec<[A; 8]> = values.into_iter().collect();
        assert!(
            blank_index < values.len(),
            "blank index {} out of bounds for {} values",
            blank_index,
            values.len()
        );
        let description = rule.describe();
        Self {
            rule,
            values,
            labels: Vec::new(),
            blank_index,
            description,
            heading: None,
            hint: None,
        }
    }

    /// Attach one caption per value.
    ///
    /// Panics if the count does not match.
    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        assert_eq!(labels.len(), self.values.len(), "one label per value");
        self.labels = labels;
        self
    }

    /// Override the rule's generated description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Attach a nudge shown alongside the prompt.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    #[must_use]
    pub fn values(&self) -> &[A] {
        &self.values
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn blank_index(&self) -> usize {
        self.blank_index
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Whether the blank and captions fit the values.
    ///
    /// Always true for puzzles built through [`Puzzle::new`]; a deserialized
    /// one may not be.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.blank_index < self.values.len()
            && (self.labels.is_empty() || self.labels.len() == self.values.len())
    }

    /// The value hidden at the blank.
    #[must_use]
    pub fn answer(&self) -> &A {
        &self.values[self.blank_index]
    }

    /// Exact comparison against the answer.
    #[must_use]
    pub fn is_correct(&self, guess: &A) -> bool {
        guess == self.answer()
    }

    /// Display cells with the blank masked.
    #[must_use]
    pub fn masked_cells(&self) -> Vec<String> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| if i == self.blank_index { BLANK.to_string() } else { v.to_string() })
            .collect()
    }

    /// Display cells with nothing hidden.
    #[must_use]
    pub fn revealed_cells(&self) -> Vec<String> {
        self.values.iter().map(ToString::to_string).collect()
    }

    /// Masked sequence joined with arrows, e.g. `3 → 6 → ? → 12`.
    #[must_use]
    pub fn masked_text(&self) -> String {
        self.masked_cells().join(" → ")
    }

    /// Full sequence joined with arrows.
    #[must_use]
    pub fn revealed_text(&self) -> String {
        self.revealed_cells().join(" → ")
    }
}
