//! Quiz configuration.
//!
//! Everything the generators draw from lives here: value spans, candidate
//! steps and ratios, the magnitude bound and the retry cap. The target score
//! is fixed once a session is built from a config.
//!
//! Configs can be built in code with the `with_*` methods or loaded from a
//! partial JSON document; missing fields fall back to [`QuizConfig::default`].

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Smallest sequence a number puzzle may show.
pub const MIN_SEQUENCE_LEN: i64 = 4;

/// Inclusive integer span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub min: i64,
    pub max: i64,
}

impl Span {
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn range(self) -> RangeInclusive<i64> {
        self.min..=self.max
    }

    fn check(self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedSpan { field, min: self.min, max: self.max });
        }
        Ok(())
    }

    fn check_within(self, field: &'static str, bound: i64) -> Result<(), ConfigError> {
        self.check(field)?;
        if self.min < -bound || self.max > bound {
            return Err(ConfigError::StartOutOfBounds { field, min: self.min, max: self.max, bound });
        }
        Ok(())
    }

    fn check_length(self, field: &'static str) -> Result<(), ConfigError> {
        self.check(field)?;
        if self.min < MIN_SEQUENCE_LEN {
            return Err(ConfigError::TooShort { field, min: self.min });
        }
        Ok(())
    }
}

/// Parameters for arithmetic (add/subtract) draws.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithmeticConfig {
    /// First element.
    pub start: Span,
    /// Candidate common differences. May include negative steps.
    pub steps: Vec<i64>,
    /// Used when excluding the previous step empties `steps`.
    pub emergency_steps: Vec<i64>,
    /// Sequence length.
    pub length: Span,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            start: Span::new(1, 100),
            steps: vec![1, 2, 3, 5, 10, 15, -1, -2, -3, -5, -10],
            emergency_steps: vec![20, -20],
            length: Span::new(5, 7),
        }
    }
}

/// Parameters for geometric (multiply) draws.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometricConfig {
    /// First element. Kept small so growth stays presentable.
    pub start: Span,
    /// Candidate integer ratios.
    pub ratios: Vec<i64>,
    /// Used when excluding the previous ratio empties `ratios`.
    pub emergency_ratios: Vec<i64>,
    /// Sequence length.
    pub length: Span,
    /// Accept draws containing zero or negative elements.
    pub allow_non_positive: bool,
}

impl Default for GeometricConfig {
    fn default() -> Self {
        Self {
            start: Span::new(1, 10),
            ratios: vec![2, 3, 4],
            emergency_ratios: vec![2, 3, 4],
            length: Span::new(4, 6),
            allow_non_positive: false,
        }
    }
}

/// Complete quiz configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Correct answers needed for victory.
    pub target_score: u32,

    /// Cap on rejected draws before a generator gives up.
    pub max_draw_attempts: u32,

    /// Largest magnitude any element of a number puzzle may reach.
    pub magnitude_bound: i64,

    pub arithmetic: ArithmeticConfig,

    pub geometric: GeometricConfig,

    /// Days of weather shown before the one to predict.
    pub weather_history_length: usize,

    /// Replaces the variant's own hint sentence on the victory screen.
    pub victory_hint: Option<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            target_score: 3,
            max_draw_attempts: 100,
            magnitude_bound: 5000,
            arithmetic: ArithmeticConfig::default(),
            geometric: GeometricConfig::default(),
            weather_history_length: 6,
            victory_hint: None,
        }
    }
}

impl QuizConfig {
    /// Load a config from JSON. Omitted fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    #[must_use]
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    #[must_use]
    pub fn with_max_draw_attempts(mut self, attempts: u32) -> Self {
        self.max_draw_attempts = attempts;
        self
    }

    #[must_use]
    pub fn with_magnitude_bound(mut self, bound: i64) -> Self {
        self.magnitude_bound = bound;
        self
    }

    #[must_use]
    pub fn with_arithmetic(mut self, arithmetic: ArithmeticConfig) -> Self {
        self.arithmetic = arithmetic;
        self
    }

    #[must_use]
    pub fn with_geometric(mut self, geometric: GeometricConfig) -> Self {
        self.geometric = geometric;
        self
    }

    #[must_use]
    pub fn with_weather_history_length(mut self, days: usize) -> Self {
        self.weather_history_length = days;
        self
    }

    #[must_use]
    pub fn with_victory_hint(mut self, hint: impl Into<String>) -> Self {
        self.victory_hint = Some(hint.into());
        self
    }

    /// Check every invariant the generators rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_score == 0 {
            return Err(ConfigError::ZeroTarget);
        }
        if self.max_draw_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.magnitude_bound <= 0 {
            return Err(ConfigError::NonPositiveBound(self.magnitude_bound));
        }

        let arith = &self.arithmetic;
        arith.start.check_within("arithmetic.start", self.magnitude_bound)?;
        arith.length.check_length("arithmetic.length")?;
        if arith.steps.is_empty() {
            return Err(ConfigError::EmptyCandidates { field: "arithmetic.steps" });
        }
        if arith.emergency_steps.is_empty() {
            return Err(ConfigError::EmptyCandidates { field: "arithmetic.emergency_steps" });
        }

        let geo = &self.geometric;
        geo.start.check_within("geometric.start", self.magnitude_bound)?;
        geo.length.check_length("geometric.length")?;
        if geo.ratios.is_empty() {
            return Err(ConfigError::EmptyCandidates { field: "geometric.ratios" });
        }
        if geo.emergency_ratios.is_empty() {
            return Err(ConfigError::EmptyCandidates { field: "geometric.emergency_ratios" });
        }

        if self.weather_history_length < 2 {
            return Err(ConfigError::ShortHistory(self.weather_history_length));
        }

        Ok(())
    }
}
