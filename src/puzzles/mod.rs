//! Puzzle content: rules, puzzles, the fixed catalogue and weather values.

pub mod catalogue;
pub mod puzzle;
pub mod rule;
pub mod weather;

pub use catalogue::{Catalogue, CatalogueEntry, CatalogueId};
pub use puzzle::{Answer, Puzzle, BLANK};
pub use rule::{common_difference, common_ratio, Rule, RuleFamily, RuleKey, Sequence};
pub use weather::{ParseWeatherError, Weather};
