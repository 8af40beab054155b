//! Puzzle source trait for quiz variants.
//!
//! Variants implement `PuzzleSource` to define how puzzles are drawn and
//! when the supply runs out. The session calls into `PuzzleSource` but
//! never interprets variant-specific rules directly.

pub mod source;

pub use source::PuzzleSource;
