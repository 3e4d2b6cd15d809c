//! Rule base and inference
//!
//! Eight fixed rules, each a MIN-combination of percept degrees feeding one
//! of three aggression bands. The table is plain data so it can be tested
//! and rebalanced without touching the evaluation loop.

use serde::{Deserialize, Serialize};

use crate::fuzzy::domain::{Percept, PerceptDegrees};

/// Consequent bucket a rule feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggressionBand {
    Low,
    Medium,
    High,
}

/// One inference rule: fire at min(cap, min of cue degrees)
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub cues: &'static [Percept],
    /// Upper bound on firing strength; 1.0 means uncapped
    pub cap: f32,
    pub band: AggressionBand,
}

impl Rule {
    pub fn strength(&self, degrees: &PerceptDegrees) -> f32 {
        self.cues
            .iter()
            .map(|cue| degrees.degree(*cue))
            .fold(self.cap, f32::min)
    }
}

/// The tuned rule table, in evaluation order
pub const RULES: [Rule; 8] = [
    Rule {
        name: "close_the_gap",
        cues: &[Percept::Healthy, Percept::Far],
        cap: 1.0,
        band: AggressionBand::High,
    },
    Rule {
        name: "press_advantage",
        cues: &[Percept::Healthy, Percept::Close],
        cap: 1.0,
        band: AggressionBand::High,
    },
    Rule {
        name: "measured_exchange",
        cues: &[Percept::Wounded, Percept::Medium],
        cap: 1.0,
        band: AggressionBand::Medium,
    },
    Rule {
        name: "desperate_fury",
        cues: &[Percept::Critical],
        cap: 1.0,
        band: AggressionBand::High,
    },
    Rule {
        name: "punish_spam",
        cues: &[Percept::Spamming],
        cap: 0.8,
        band: AggressionBand::High,
    },
    Rule {
        name: "guard_up",
        cues: &[Percept::Wounded, Percept::Close],
        cap: 1.0,
        band: AggressionBand::Low,
    },
    Rule {
        name: "press_while_spent",
        cues: &[Percept::Spent, Percept::Medium],
        cap: 1.0,
        band: AggressionBand::High,
    },
    Rule {
        name: "coil_before_strike",
        cues: &[Percept::Armed, Percept::Close],
        cap: 1.0,
        band: AggressionBand::Low,
    },
];

/// Aggression-band truth values after MAX aggregation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BandStrengths {
    pub low: f32,
    pub medium: f32,
    pub high: f32,
}

// Centroid anchors for the three bands.
pub const ANCHOR_LOW: f32 = 15.0;
pub const ANCHOR_MEDIUM: f32 = 50.0;
pub const ANCHOR_HIGH: f32 = 95.0;

/// Defuzzification fallback when no rule fired at all.
pub const IDLE_AGGRESSION: f32 = 50.0;

impl BandStrengths {
    /// Weighted-average centroid over the three anchors
    ///
    /// Convex weighting keeps the result inside [15, 95]; the final clamp
    /// only absorbs last-ulp rounding from the division. A denominator of
    /// exactly zero means no rule fired; that is a defined quiet state, not
    /// an error, and reads as the axis midpoint.
    pub fn defuzzify(&self) -> f32 {
        let denominator = self.low + self.medium + self.high;
        if denominator == 0.0 {
            return IDLE_AGGRESSION;
        }
        let centroid = (self.low * ANCHOR_LOW
            + self.medium * ANCHOR_MEDIUM
            + self.high * ANCHOR_HIGH)
            / denominator;
        centroid.clamp(ANCHOR_LOW, ANCHOR_HIGH)
    }
}

/// Run every rule against one set of degrees and MAX-aggregate per band
pub fn infer(degrees: &PerceptDegrees) -> BandStrengths {
    let mut bands = BandStrengths::default();
    for rule in &RULES {
        let strength = rule.strength(degrees);
        match rule.band {
            AggressionBand::Low => bands.low = bands.low.max(strength),
            AggressionBand::Medium => bands.medium = bands.medium.max(strength),
            AggressionBand::High => bands.high = bands.high.max(strength),
        }
    }
    bands
}
