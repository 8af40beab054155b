//! Number patterns drawn at random.
//!
//! Each round flips a coin between an arithmetic rule (add or subtract a
//! step) and a geometric rule (multiply by a small ratio). The previous
//! round's step or ratio is excluded from the next draw of the same family.
//! Geometric draws are rejection-sampled until every element stays inside the
//! magnitude bound, with a hard cap on attempts.

mod game;
pub mod sequence;

pub use game::PatternGame;
pub use sequence::{arithmetic_sequence, geometric_sequence, InvalidDraw};
