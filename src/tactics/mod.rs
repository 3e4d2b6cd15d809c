//! Maneuver planning on top of the tactical mind
//!
//! Converts an `Assessment` into movement and strike intents. The planner
//! owns no position or velocity; hosts apply the intents however their
//! movement model works.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fuzzy::{Assessment, TacticalState};

/// Aggression a fighter needs before committing to a strike.
pub const STRIKE_AGGRESSION_THRESHOLD: f32 = 50.0;
/// Strike reach in world units; beyond this the fighter keeps moving.
pub const STRIKE_RANGE: f32 = 6.0;
/// Armed degree above which the special ability is considered ready.
pub const ARMED_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Maneuver {
    /// Straight-line rush, berserk only
    Charge,
    Advance,
    /// Hold mid range, circling for an opening
    Skirmish,
    FallBack,
}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Maneuver::Charge => "charge",
            Maneuver::Advance => "advance",
            Maneuver::Skirmish => "skirmish",
            Maneuver::FallBack => "fallback",
        };
        write!(f, "{}", label)
    }
}

/// One tick's movement and strike intents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManeuverPlan {
    pub maneuver: Maneuver,
    /// Circle the target while the special ability is ready
    pub strafe: bool,
    /// Commit to a strike this tick
    pub strike: bool,
    /// Spend the special ability on this strike
    pub unleash: bool,
}

/// Derive intents from one assessment
pub fn plan_maneuver(assessment: &Assessment) -> ManeuverPlan {
    let maneuver = match assessment.state {
        TacticalState::Berserk => Maneuver::Charge,
        TacticalState::Ruthless | TacticalState::Aggressive => Maneuver::Advance,
        TacticalState::Cautious => Maneuver::Skirmish,
        TacticalState::Defensive => Maneuver::FallBack,
    };

    let ability_ready = assessment.percepts.cooldown.armed > ARMED_THRESHOLD;
    let strike = assessment.aggression > STRIKE_AGGRESSION_THRESHOLD
        && assessment.inputs.distance < STRIKE_RANGE;

    ManeuverPlan {
        maneuver,
        strafe: ability_ready,
        strike,
        unleash: strike && ability_ready,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::{CombatSample, TacticalMind};

    fn assess(distance: f32, health: f32, attack: f32, cooldown: f32) -> Assessment {
        let mut mind = TacticalMind::new().unwrap();
        mind.evaluate(CombatSample::new(distance, health, attack, cooldown))
    }

    #[test]
    fn test_ruthless_advances_and_strikes_in_range() {
        let plan = plan_maneuver(&assess(2.0, 90.0, 0.0, 60.0));
        assert_eq!(plan.maneuver, Maneuver::Advance);
        assert!(plan.strike);
        assert!(!plan.strafe);
        assert!(!plan.unleash);
    }

    #[test]
    fn test_armed_fighter_strafes_and_unleashes() {
        // Cooldown 5 puts armed on its plateau; healthy+close fires High
        // while armed+close fires Low, netting aggression 55.
        let assessment = assess(2.0, 90.0, 0.0, 5.0);
        assert_eq!(assessment.aggression, 55.0);
        let plan = plan_maneuver(&assessment);
        assert_eq!(plan.maneuver, Maneuver::Advance);
        assert!(plan.strafe);
        assert!(plan.strike);
        assert!(plan.unleash);
    }

    #[test]
    fn test_berserk_charges_even_out_of_reach() {
        let plan = plan_maneuver(&assess(20.0, 20.0, 0.0, 60.0));
        assert_eq!(plan.maneuver, Maneuver::Charge);
        assert!(!plan.strike);
        assert!(!plan.unleash);
    }

    #[test]
    fn test_quiet_field_skirmishes() {
        let plan = plan_maneuver(&assess(200.0, 50.0, 0.0, 50.0));
        assert_eq!(plan.maneuver, Maneuver::Skirmish);
        assert!(!plan.strike);
    }

    #[test]
    fn test_cornered_and_wounded_falls_back() {
        // wounded+close reads pure Low: aggression 15, defensive.
        let assessment = assess(2.0, 50.0, 0.0, 60.0);
        assert_eq!(assessment.aggression, 15.0);
        let plan = plan_maneuver(&assessment);
        assert_eq!(plan.maneuver, Maneuver::FallBack);
        assert!(!plan.strike);
    }

    #[test]
    fn test_strike_range_is_exclusive() {
        let assessment = assess(6.0, 90.0, 0.0, 60.0);
        assert!(assessment.aggression > STRIKE_AGGRESSION_THRESHOLD);
        let plan = plan_maneuver(&assessment);
        assert!(!plan.strike);
    }

    #[test]
    fn test_maneuver_display_is_lowercase() {
        assert_eq!(Maneuver::Charge.to_string(), "charge");
        assert_eq!(Maneuver::FallBack.to_string(), "fallback");
    }
}
