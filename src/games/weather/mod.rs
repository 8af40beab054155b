//! Weather pattern quiz.
//!
//! A motif such as rain-rain-sun repeats over the shown history; the player
//! predicts the next day. The previous round's motif is never drawn twice in
//! a row while another is available.

mod game;

pub use game::{standard_motifs, Motif, WeatherGame};
