//! Duel simulation harness driving the tactical mind

pub mod duel;

pub use duel::{Duel, DuelConfig, TickOutcome};
