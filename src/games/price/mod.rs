//! Price-rule inference quiz.
//!
//! Three stages of example baskets teach the pricing rule piece by piece:
//! size alone, snacks alone, then both. The player prices a new basket each
//! round.

mod game;

pub use game::{stage_hint, stage_layout, Basket, PriceGame, Snack, SLOT_PRICE, STAGES};
