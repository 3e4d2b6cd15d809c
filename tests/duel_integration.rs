//! Duel harness integration tests
//!
//! Full evaluate-plan-advance loops against the scripted opponent. Where a
//! scenario must hold regardless of RNG draws, the opponent's strike chance
//! is pinned to 0 or 1 so the trajectory is fully determined.

use arena_mind::fuzzy::TacticalState;
use arena_mind::sim::{Duel, DuelConfig};
use arena_mind::tactics::Maneuver;

/// Same seed and config replay the exact same duel, tick for tick
#[test]
fn test_duel_replays_identically_for_a_seed() {
    let mut a = Duel::new(DuelConfig::default(), 7).unwrap();
    let mut b = Duel::new(DuelConfig::default(), 7).unwrap();
    for _ in 0..300 {
        assert_eq!(a.advance(), b.advance());
        if a.concluded() {
            break;
        }
    }
    assert_eq!(a.tick(), b.tick());
    assert_eq!(a.health(), b.health());
    assert_eq!(a.opponent_vitality(), b.opponent_vitality());
    assert_eq!(a.distance(), b.distance());
}

/// A healthy fighter opening at range spends the first ten ticks closing:
/// the far cue keeps the high band saturated and every tick reads RUTHLESS
#[test]
fn test_healthy_opening_closes_the_gap() {
    // Outside the opponent's reach no swing can land, so health stays full
    // and the trajectory is the same for any seed.
    let mut duel = Duel::new(DuelConfig::default(), 99).unwrap();
    for _ in 0..10 {
        let outcome = duel.advance();
        assert_eq!(outcome.assessment.state, TacticalState::Ruthless);
        assert_eq!(outcome.plan.maneuver, Maneuver::Advance);
        assert!(!outcome.plan.strike);
    }
    // 25 units minus ten advance steps of 1.5.
    assert_eq!(duel.distance(), 10.0);
    assert_eq!(duel.health(), 100.0);
    assert_eq!(duel.opponent_vitality(), 100.0);
}

/// Against a relentless opponent the spam-punishment rule keeps the fighter
/// pressing past the skirmish ring, coiling into an unleashed first strike
#[test]
fn test_spam_pressure_builds_to_an_unleashed_strike() {
    let config = DuelConfig {
        opponent_strike_chance: 1.0,
        ..DuelConfig::default()
    };
    let mut duel = Duel::new(config, 123).unwrap();

    // Thirteen ticks of approach: too far to strike or be struck.
    for _ in 0..13 {
        let outcome = duel.advance();
        assert!(!outcome.plan.strike);
        assert!(!outcome.took_hit);
    }
    assert_eq!(duel.health(), 100.0);
    assert_eq!(duel.opponent_vitality(), 100.0);

    // Tick 14 evaluates at 5.5 units: inside strike range with the ability
    // still armed, so the first strike spends it.
    let fourteenth = duel.advance();
    assert!(fourteenth.plan.strike);
    assert!(fourteenth.plan.unleash);
    assert_eq!(duel.opponent_vitality(), 82.0);
    assert_eq!(duel.cooldown_remaining(), 120.0);

    // Tick 15 closes to the opponent's reach; the guaranteed swing lands.
    let fifteenth = duel.advance();
    assert!(fifteenth.took_hit);
    assert_eq!(duel.health(), 94.0);
}

/// Wounded with the opponent on top of them, the fighter backs off at the
/// low anchor; by the third tick the opening gap has softened the close
/// cue and aggression drifts up while staying defensive
#[test]
fn test_wounded_and_cornered_backs_away() {
    let config = DuelConfig {
        start_distance: 2.0,
        start_health: 50.0,
        opponent_strike_chance: 0.0,
        ..DuelConfig::default()
    };
    let mut duel = Duel::new(config, 11).unwrap();

    // Ticks one and two evaluate inside the close plateau, where guard_up
    // and coil_before_strike saturate the low band on their own.
    for expected_distance in [4.0, 6.0] {
        let outcome = duel.advance();
        assert_eq!(outcome.assessment.aggression, 15.0);
        assert_eq!(outcome.assessment.state, TacticalState::Defensive);
        assert_eq!(outcome.plan.maneuver, Maneuver::FallBack);
        assert!(!outcome.plan.strike);
        assert_eq!(duel.distance(), expected_distance);
    }

    // The third tick evaluates at 6 units, halfway down the close ramp.
    // The low band thins to 0.5 while measured_exchange stirs at a third;
    // the centroid lands at 29, still short of the cautious threshold.
    let third = duel.advance();
    assert!((third.assessment.aggression - 29.0).abs() < 1e-3);
    assert_eq!(third.assessment.state, TacticalState::Defensive);
    assert_eq!(third.plan.maneuver, Maneuver::FallBack);
    assert!(!third.plan.strike);
    assert_eq!(duel.distance(), 8.0);

    assert_eq!(duel.health(), 50.0);
    assert_eq!(duel.strikes_landed(), 0);
}

/// Critical health charges straight in regardless of the odds
#[test]
fn test_critical_health_charges() {
    let config = DuelConfig {
        start_distance: 14.0,
        start_health: 20.0,
        opponent_strike_chance: 0.0,
        ..DuelConfig::default()
    };
    let mut duel = Duel::new(config, 11).unwrap();

    let outcome = duel.advance();
    assert_eq!(outcome.assessment.state, TacticalState::Berserk);
    assert_eq!(outcome.plan.maneuver, Maneuver::Charge);
    assert_eq!(duel.distance(), 11.0);
}

/// Config validation failures surface as constructor errors
#[test]
fn test_invalid_config_is_rejected_at_construction() {
    let config = DuelConfig {
        opponent_strike_chance: 2.0,
        ..DuelConfig::default()
    };
    assert!(Duel::new(config, 1).is_err());
}
