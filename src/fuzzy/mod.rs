//! Fuzzy inference pipeline
//!
//! Shapes map measurements to degrees, domains name and bundle them, rules
//! combine them into aggression bands, and the engine ties the steps into
//! one assessment per tick.

pub mod domain;
pub mod engine;
pub mod membership;
pub mod rules;
pub mod state;

pub use domain::{Percept, PerceptDegrees, PostureDegrees};
pub use engine::{Assessment, CombatSample, TacticalMind};
pub use membership::Shape;
pub use rules::{AggressionBand, BandStrengths};
pub use state::TacticalState;
