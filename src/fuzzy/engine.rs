//! The tactical mind: one evaluation per simulation tick
//!
//! `evaluate` runs the full pipeline (fuzzify, infer, defuzzify, posture,
//! classify) as a pure computation and returns an immutable `Assessment`.
//! The engine's only state is a copy of the most recent assessment, kept
//! for diagnostic readers and written as the final step of each call.

use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::fuzzy::domain::{self, PerceptDegrees, PostureDegrees};
use crate::fuzzy::rules::{self, BandStrengths};
use crate::fuzzy::state::TacticalState;

/// One tick's worth of measurements, supplied by the host controller
///
/// Values are taken as-is: out-of-range measurements degrade to zero
/// membership by construction, never to an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatSample {
    /// Distance to the target in world units, non-negative, unbounded above
    pub distance: f32,
    /// Own health in percent, nominally [0, 100], not clamped
    pub health_percent: f32,
    /// Decaying recent-strike accumulator, nominally [0, 20]
    pub attack_intensity: f32,
    /// Special-ability cooldown in ticks, nominally [0, 120]
    pub cooldown_remaining: f32,
}

impl CombatSample {
    pub const fn new(
        distance: f32,
        health_percent: f32,
        attack_intensity: f32,
        cooldown_remaining: f32,
    ) -> Self {
        Self {
            distance,
            health_percent,
            attack_intensity,
            cooldown_remaining,
        }
    }
}

/// Everything one evaluation produced, as a single immutable value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub inputs: CombatSample,
    pub percepts: PerceptDegrees,
    pub bands: BandStrengths,
    pub aggression: f32,
    /// Diagnostic re-fuzzification of `aggression`; never drives decisions
    pub posture: PostureDegrees,
    pub state: TacticalState,
}

/// Fuzzy-logic combat brain
///
/// Construction validates the compiled-in shape tables once; evaluation is
/// then infallible. Takes `&mut self` per call, so in-process the borrow
/// checker already serializes whole evaluations; hosts driving it from
/// multiple threads must do the same externally.
#[derive(Debug, Clone)]
pub struct TacticalMind {
    last: Option<Assessment>,
}

impl TacticalMind {
    /// Build a mind, failing fast if any compiled-in control points are
    /// malformed
    pub fn new() -> Result<Self> {
        domain::validate_tables()?;
        Ok(Self { last: None })
    }

    /// Evaluate one sample and return the full assessment
    ///
    /// Pure except for the snapshot write at the end: identical samples
    /// produce bit-identical assessments. Raises no errors and performs
    /// no I/O.
    pub fn evaluate(&mut self, sample: CombatSample) -> Assessment {
        let percepts = PerceptDegrees::fuzzify(
            sample.distance,
            sample.health_percent,
            sample.attack_intensity,
            sample.cooldown_remaining,
        );
        let bands = rules::infer(&percepts);
        let aggression = bands.defuzzify();
        let posture = PostureDegrees::fuzzify(aggression);
        let state = TacticalState::classify(percepts.health.critical, aggression);

        let assessment = Assessment {
            inputs: sample,
            percepts,
            bands,
            aggression,
            posture,
            state,
        };
        self.last = Some(assessment);
        assessment
    }

    /// Most recent assessment, for dashboards and other read-only consumers
    pub fn last_assessment(&self) -> Option<&Assessment> {
        self.last.as_ref()
    }
}
