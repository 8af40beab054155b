//! Weather motif quiz.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{QuizConfig, QuizRng};
use crate::error::GenerationError;
use crate::puzzles::{Puzzle, Rule, Weather};
use crate::rules::PuzzleSource;

use crate::puzzles::Weather::{Cloudy, Rainy, Sunny};

const VICTORY_HINT: &str = "Red lava light seeps out between the stones of the castle gate.";

/// A named repeating weather motif.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motif {
    pub name: String,
    pub days: Vec<Weather>,
}

impl Motif {
    pub fn new(name: impl Into<String>, days: &[Weather]) -> Self {
        assert!(!days.is_empty(), "Motif must have at least one day");
        Self { name: name.into(), days: days.to_vec() }
    }

    /// Weather on day `i`, counting from the first day shown.
    #[must_use]
    pub fn day(&self, i: usize) -> Weather {
        self.days[i % self.days.len()]
    }

    fn rule(&self) -> Rule {
        Rule::Cycle { name: self.name.clone(), motif: self.days.clone() }
    }
}

/// The six motifs of the standard quiz.
#[must_use]
pub fn standard_motifs() -> Vec<Motif> {
    vec![
        Motif::new("rain-rain-sun", &[Rainy, Rainy, Sunny]),
        Motif::new("cloud-rain-sun", &[Cloudy, Rainy, Sunny]),
        Motif::new("sun-cloud", &[Sunny, Cloudy]),
        Motif::new("rain-cloud-cloud", &[Rainy, Cloudy, Cloudy]),
        Motif::new("cloud-sun-rain", &[Cloudy, Sunny, Rainy]),
        Motif::new("rain-sun-sun", &[Rainy, Sunny, Sunny]),
    ]
}

/// Source showing a few days of history and asking for tomorrow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeatherGame {
    motifs: Vec<Motif>,
    history_length: usize,
}

impl WeatherGame {
    #[must_use]
    pub fn new(config: &QuizConfig) -> Self {
        Self::with_motifs(standard_motifs(), config.weather_history_length)
    }

    /// Panics if `motifs` is empty.
    #[must_use]
    pub fn with_motifs(motifs: Vec<Motif>, history_length: usize) -> Self {
        assert!(!motifs.is_empty(), "WeatherGame needs at least one motif");
        Self { motifs, history_length }
    }

    #[must_use]
    pub fn motifs(&self) -> &[Motif] {
        &self.motifs
    }

    #[must_use]
    pub fn history_length(&self) -> usize {
        self.history_length
    }
}

impl PuzzleSource for WeatherGame {
    type Answer = Weather;

    fn name(&self) -> &str {
        "weather motifs"
    }

    fn draw(
        &mut self,
        last_rule: Option<&Rule>,
        rng: &mut QuizRng,
    ) -> Result<Puzzle<Weather>, GenerationError> {
        let last_name = match last_rule {
            Some(Rule::Cycle { name, .. }) => Some(name.as_str()),
            _ => None,
        };

        let mut available: Vec<&Motif> = self.motifs.iter().collect();
        if available.len() > 1 {
            available.retain(|m| Some(m.name.as_str()) != last_name);
        }

        let motif = match rng.choose(&available) {
            Some(motif) => *motif,
            None => return Err(self.exhausted()),
        };

        // History followed by tomorrow, which is the blank.
        let values: Vec<Weather> = (0..=self.history_length).map(|i| motif.day(i)).collect();
        let mut labels: Vec<String> = (0..self.history_length)
            .map(|i| format!("{} days ago", self.history_length - i))
            .collect();
        if let Some(yesterday) = labels.last_mut() {
            *yesterday = "yesterday".to_string();
        }
        labels.push("tomorrow".to_string());

        debug!("drew weather motif {}", motif.name);
        Ok(Puzzle::new(motif.rule(), values, self.history_length).with_labels(labels))
    }

    fn victory_hint(&self) -> Option<&str> {
        Some(VICTORY_HINT)
    }
}
