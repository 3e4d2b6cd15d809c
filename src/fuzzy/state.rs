//! Discrete tactical state derived from the fuzzy outputs
//!
//! A first-match decision list over critical-health degree and the
//! defuzzified aggression value. The ordering is load-bearing: berserk
//! outranks everything, so a dying fighter reads BERSERK even when raw
//! aggression alone would read RUTHLESS.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Critical-health degree above which the fighter snaps to berserk.
pub const BERSERK_CRITICAL_THRESHOLD: f32 = 0.5;
/// Aggression floors for the remaining states, checked in descending order.
pub const RUTHLESS_AGGRESSION: f32 = 75.0;
pub const AGGRESSIVE_AGGRESSION: f32 = 50.0;
pub const CAUTIOUS_AGGRESSION: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TacticalState {
    Berserk,
    Ruthless,
    Aggressive,
    Cautious,
    Defensive,
}

impl TacticalState {
    /// Classify one evaluation's outputs; total and deterministic
    ///
    /// All comparisons are strict, so a critical degree of exactly 0.5 or
    /// an aggression of exactly 75.0 falls through to the next branch.
    pub fn classify(critical_degree: f32, aggression: f32) -> Self {
        if critical_degree > BERSERK_CRITICAL_THRESHOLD {
            TacticalState::Berserk
        } else if aggression > RUTHLESS_AGGRESSION {
            TacticalState::Ruthless
        } else if aggression > AGGRESSIVE_AGGRESSION {
            TacticalState::Aggressive
        } else if aggression > CAUTIOUS_AGGRESSION {
            TacticalState::Cautious
        } else {
            TacticalState::Defensive
        }
    }
}

impl fmt::Display for TacticalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TacticalState::Berserk => "BERSERK",
            TacticalState::Ruthless => "RUTHLESS",
            TacticalState::Aggressive => "AGGRESSIVE",
            TacticalState::Cautious => "CAUTIOUS",
            TacticalState::Defensive => "DEFENSIVE",
        };
        write!(f, "{}", label)
    }
}
