//! Categorical weather values used by the weather quiz.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One day's weather.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    Sunny,
    Rainy,
    Cloudy,
}

impl Weather {
    /// Every weather value, in the order the answer choices are offered.
    pub const ALL: [Weather; 3] = [Weather::Sunny, Weather::Rainy, Weather::Cloudy];

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Weather::Sunny => "☀️",
            Weather::Rainy => "🌧️",
            Weather::Cloudy => "☁️",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Weather::Sunny => "sunny",
            Weather::Rainy => "rainy",
            Weather::Cloudy => "cloudy",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.emoji())
    }
}

/// Unrecognised weather text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected sunny, rainy or cloudy")]
pub struct ParseWeatherError;

impl FromStr for Weather {
    type Err = ParseWeatherError;

    /// Accepts the emoji, the name, a common synonym, or the first letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        // Emoji input may arrive with or without the variation selector.
        let bare = text.trim_end_matches('\u{fe0f}');
        for weather in Weather::ALL {
            if bare == weather.emoji().trim_end_matches('\u{fe0f}') {
                return Ok(weather);
            }
        }

        match text.to_ascii_lowercase().as_str() {
            "s" | "sun" | "sunny" | "clear" => Ok(Weather::Sunny),
            "r" | "rain" | "rainy" => Ok(Weather::Rainy),
            "c" | "cloud" | "cloudy" => Ok(Weather::Cloudy),
            _ => Err(ParseWeatherError),
        }
    }
}
