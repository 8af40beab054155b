//! Number patterns from a fixed catalogue.
//!
//! Ten authored sequences, each served at most once per session. When all
//! ten are used the source reports exhaustion and the session waits for a
//! reset.

mod game;

pub use game::CatalogueGame;
