//! Input domains and their tuned membership sets
//!
//! Four input axes (distance, health, attack intensity, cooldown) carry
//! three linguistic sets each; the output aggression axis carries three
//! posture sets used only for diagnostics. Control points are fixed
//! compiled-in configuration, validated once at engine construction.

use serde::{Deserialize, Serialize};

use crate::core::{ArenaError, Result};
use crate::fuzzy::membership::Shape;

// Distance to the target, world units.
pub const DISTANCE_CLOSE: Shape = Shape::trapezoid(-1.0, 0.0, 4.0, 8.0);
pub const DISTANCE_MEDIUM: Shape = Shape::triangle(4.0, 10.0, 16.0);
pub const DISTANCE_FAR: Shape = Shape::trapezoid(10.0, 16.0, 100.0, 100.0);

// Own health, percent.
pub const HEALTH_CRITICAL: Shape = Shape::trapezoid(-1.0, 0.0, 30.0, 40.0);
pub const HEALTH_WOUNDED: Shape = Shape::triangle(30.0, 50.0, 70.0);
pub const HEALTH_HEALTHY: Shape = Shape::trapezoid(60.0, 80.0, 100.0, 101.0);

// Recent strike frequency, decaying accumulator.
pub const ATTACK_CALM: Shape = Shape::trapezoid(-1.0, 0.0, 2.0, 4.0);
pub const ATTACK_FIGHTING: Shape = Shape::triangle(2.0, 5.0, 8.0);
pub const ATTACK_SPAMMING: Shape = Shape::trapezoid(5.0, 8.0, 20.0, 20.0);

// Special-ability cooldown, ticks remaining.
pub const COOLDOWN_ARMED: Shape = Shape::trapezoid(-1.0, 0.0, 10.0, 30.0);
pub const COOLDOWN_RECHARGING: Shape = Shape::triangle(20.0, 60.0, 100.0);
pub const COOLDOWN_SPENT: Shape = Shape::trapezoid(80.0, 110.0, 120.0, 121.0);

// Output aggression axis, diagnostic re-fuzzification only.
pub const POSTURE_PASSIVE: Shape = Shape::trapezoid(-1.0, 0.0, 25.0, 45.0);
pub const POSTURE_NEUTRAL: Shape = Shape::triangle(30.0, 50.0, 70.0);
pub const POSTURE_AGGRESSIVE: Shape = Shape::trapezoid(55.0, 75.0, 100.0, 101.0);

/// A linguistic label over one of the four input axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Percept {
    Close,
    Medium,
    Far,
    Critical,
    Wounded,
    Healthy,
    Calm,
    Fighting,
    Spamming,
    Armed,
    Recharging,
    Spent,
}

impl Percept {
    pub fn label(&self) -> &'static str {
        match self {
            Percept::Close => "close",
            Percept::Medium => "medium",
            Percept::Far => "far",
            Percept::Critical => "critical",
            Percept::Wounded => "wounded",
            Percept::Healthy => "healthy",
            Percept::Calm => "calm",
            Percept::Fighting => "fighting",
            Percept::Spamming => "spamming",
            Percept::Armed => "armed",
            Percept::Recharging => "recharging",
            Percept::Spent => "spent",
        }
    }

    /// The membership set this label names; `INPUT_SETS` derives its
    /// shape column from this mapping.
    pub const fn shape(self) -> Shape {
        match self {
            Percept::Close => DISTANCE_CLOSE,
            Percept::Medium => DISTANCE_MEDIUM,
            Percept::Far => DISTANCE_FAR,
            Percept::Critical => HEALTH_CRITICAL,
            Percept::Wounded => HEALTH_WOUNDED,
            Percept::Healthy => HEALTH_HEALTHY,
            Percept::Calm => ATTACK_CALM,
            Percept::Fighting => ATTACK_FIGHTING,
            Percept::Spamming => ATTACK_SPAMMING,
            Percept::Armed => COOLDOWN_ARMED,
            Percept::Recharging => COOLDOWN_RECHARGING,
            Percept::Spent => COOLDOWN_SPENT,
        }
    }
}

/// The full input-set table as (axis, percept, shape) rows, in axis order
///
/// Telemetry iterates this to plot curves; validation iterates it to fail
/// fast on malformed control points. The shape column is filled in from
/// `Percept::shape` so the two listings cannot drift apart.
pub const INPUT_SETS: [(&str, Percept, Shape); 12] = [
    ("distance", Percept::Close, Percept::Close.shape()),
    ("distance", Percept::Medium, Percept::Medium.shape()),
    ("distance", Percept::Far, Percept::Far.shape()),
    ("health", Percept::Critical, Percept::Critical.shape()),
    ("health", Percept::Wounded, Percept::Wounded.shape()),
    ("health", Percept::Healthy, Percept::Healthy.shape()),
    ("attack", Percept::Calm, Percept::Calm.shape()),
    ("attack", Percept::Fighting, Percept::Fighting.shape()),
    ("attack", Percept::Spamming, Percept::Spamming.shape()),
    ("cooldown", Percept::Armed, Percept::Armed.shape()),
    ("cooldown", Percept::Recharging, Percept::Recharging.shape()),
    ("cooldown", Percept::Spent, Percept::Spent.shape()),
];

/// Posture sets over the output axis as (label, shape) rows
pub const POSTURE_SETS: [(&str, Shape); 3] = [
    ("passive", POSTURE_PASSIVE),
    ("neutral", POSTURE_NEUTRAL),
    ("aggressive", POSTURE_AGGRESSIVE),
];

/// Validate every compiled-in shape, wrapping the first failure with its
/// set name. Called once from `TacticalMind::new`.
pub fn validate_tables() -> Result<()> {
    for (axis, percept, shape) in INPUT_SETS {
        shape.validate().map_err(|reason| ArenaError::InvalidShape {
            set: format!("{}/{}", axis, percept.label()),
            reason,
        })?;
    }
    for (label, shape) in POSTURE_SETS {
        shape.validate().map_err(|reason| ArenaError::InvalidShape {
            set: format!("aggression/{}", label),
            reason,
        })?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceDegrees {
    pub close: f32,
    pub medium: f32,
    pub far: f32,
}

impl DistanceDegrees {
    pub fn fuzzify(distance: f32) -> Self {
        Self {
            close: DISTANCE_CLOSE.degree(distance),
            medium: DISTANCE_MEDIUM.degree(distance),
            far: DISTANCE_FAR.degree(distance),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthDegrees {
    pub critical: f32,
    pub wounded: f32,
    pub healthy: f32,
}

impl HealthDegrees {
    pub fn fuzzify(health_percent: f32) -> Self {
        Self {
            critical: HEALTH_CRITICAL.degree(health_percent),
            wounded: HEALTH_WOUNDED.degree(health_percent),
            healthy: HEALTH_HEALTHY.degree(health_percent),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackDegrees {
    pub calm: f32,
    pub fighting: f32,
    pub spamming: f32,
}

impl AttackDegrees {
    pub fn fuzzify(attack_intensity: f32) -> Self {
        Self {
            calm: ATTACK_CALM.degree(attack_intensity),
            fighting: ATTACK_FIGHTING.degree(attack_intensity),
            spamming: ATTACK_SPAMMING.degree(attack_intensity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CooldownDegrees {
    pub armed: f32,
    pub recharging: f32,
    pub spent: f32,
}

impl CooldownDegrees {
    pub fn fuzzify(cooldown_remaining: f32) -> Self {
        Self {
            armed: COOLDOWN_ARMED.degree(cooldown_remaining),
            recharging: COOLDOWN_RECHARGING.degree(cooldown_remaining),
            spent: COOLDOWN_SPENT.degree(cooldown_remaining),
        }
    }
}

/// All twelve input memberships for one measurement sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerceptDegrees {
    pub distance: DistanceDegrees,
    pub health: HealthDegrees,
    pub attack: AttackDegrees,
    pub cooldown: CooldownDegrees,
}

impl PerceptDegrees {
    pub fn fuzzify(
        distance: f32,
        health_percent: f32,
        attack_intensity: f32,
        cooldown_remaining: f32,
    ) -> Self {
        Self {
            distance: DistanceDegrees::fuzzify(distance),
            health: HealthDegrees::fuzzify(health_percent),
            attack: AttackDegrees::fuzzify(attack_intensity),
            cooldown: CooldownDegrees::fuzzify(cooldown_remaining),
        }
    }

    /// Degree of one named percept, for the rule evaluator
    pub fn degree(&self, percept: Percept) -> f32 {
        match percept {
            Percept::Close => self.distance.close,
            Percept::Medium => self.distance.medium,
            Percept::Far => self.distance.far,
            Percept::Critical => self.health.critical,
            Percept::Wounded => self.health.wounded,
            Percept::Healthy => self.health.healthy,
            Percept::Calm => self.attack.calm,
            Percept::Fighting => self.attack.fighting,
            Percept::Spamming => self.attack.spamming,
            Percept::Armed => self.cooldown.armed,
            Percept::Recharging => self.cooldown.recharging,
            Percept::Spent => self.cooldown.spent,
        }
    }
}

/// Diagnostic memberships of the defuzzified aggression value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostureDegrees {
    pub passive: f32,
    pub neutral: f32,
    pub aggressive: f32,
}

impl PostureDegrees {
    pub fn fuzzify(aggression: f32) -> Self {
        Self {
            passive: POSTURE_PASSIVE.degree(aggression),
            neutral: POSTURE_NEUTRAL.degree(aggression),
            aggressive: POSTURE_AGGRESSIVE.degree(aggression),
        }
    }
}
