//! Quiz variants.
//!
//! Each variant is a [`crate::rules::PuzzleSource`]:
//! - [`pattern`]: random arithmetic/geometric number patterns
//! - [`catalogue`]: ten fixed number patterns, each used once
//! - [`weather`]: repeating weather motifs
//! - [`price`]: basket pricing curriculum

pub mod catalogue;
pub mod pattern;
pub mod price;
pub mod weather;
