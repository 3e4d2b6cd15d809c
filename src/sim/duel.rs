//! Scalar duel harness
//!
//! Produces the four measurements the mind consumes, advancing them once
//! per tick from the planner's intents. Geometry is a single distance
//! scalar; the opponent is scripted off a seeded RNG, so a fixed seed and
//! config replay the exact same duel.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::{ArenaError, Result, Tick};
use crate::fuzzy::{Assessment, CombatSample, TacticalMind};
use crate::tactics::{self, Maneuver, ManeuverPlan};

/// Per-tick decay factor on the opponent-attack accumulator.
pub const ATTACK_DECAY: f32 = 0.9;
/// Accumulator bump per observed opponent swing.
pub const ATTACK_BUMP: f32 = 2.0;
/// Accumulator ceiling, matching the spamming set's support.
pub const ATTACK_CAP: f32 = 20.0;
/// Cooldown value after the special ability is spent, in ticks.
pub const COOLDOWN_RESET: f32 = 120.0;

/// Tunable duel parameters
///
/// Defaults are the balance values the scenarios were tuned against; change
/// them freely but run `validate` before starting a duel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelConfig {
    /// Opening distance to the opponent, world units
    pub start_distance: f32,
    /// Fighter's opening health, percent
    pub start_health: f32,
    /// Fighter's opening ability cooldown, ticks
    pub start_cooldown: f32,
    /// Opponent's opening vitality, percent
    pub opponent_vitality: f32,
    /// Inward speed while charging, units per tick
    pub charge_speed: f32,
    /// Inward speed while advancing
    pub advance_speed: f32,
    /// Drift speed while skirmishing toward the preferred ring
    pub skirmish_speed: f32,
    /// Outward speed while falling back
    pub fallback_speed: f32,
    /// Distance a skirmishing fighter tries to hold
    pub preferred_ring: f32,
    /// Chance per tick that the opponent swings, in [0, 1]
    pub opponent_strike_chance: f64,
    /// Distance inside which an opponent swing lands
    pub opponent_reach: f32,
    /// Health lost per landed opponent swing
    pub opponent_strike_damage: f32,
    /// Vitality removed per ordinary landed strike
    pub strike_damage: f32,
    /// Vitality removed when the strike spends the special ability
    pub unleash_damage: f32,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            start_distance: 25.0,
            start_health: 100.0,
            start_cooldown: 0.0,
            opponent_vitality: 100.0,
            charge_speed: 3.0,
            advance_speed: 1.5,
            skirmish_speed: 0.75,
            fallback_speed: 2.0,
            preferred_ring: 10.0,
            opponent_strike_chance: 0.25,
            opponent_reach: 4.0,
            opponent_strike_damage: 6.0,
            strike_damage: 5.0,
            unleash_damage: 18.0,
        }
    }
}

impl DuelConfig {
    pub fn validate(&self) -> Result<()> {
        if self.start_distance < 0.0 {
            return Err(ArenaError::InvalidConfig(format!(
                "start_distance must be non-negative, got {}",
                self.start_distance
            )));
        }
        if self.start_health <= 0.0 || self.start_health > 100.0 {
            return Err(ArenaError::InvalidConfig(format!(
                "start_health must be in (0, 100], got {}",
                self.start_health
            )));
        }
        if self.start_cooldown < 0.0 {
            return Err(ArenaError::InvalidConfig(format!(
                "start_cooldown must be non-negative, got {}",
                self.start_cooldown
            )));
        }
        if self.opponent_vitality <= 0.0 {
            return Err(ArenaError::InvalidConfig(format!(
                "opponent_vitality must be positive, got {}",
                self.opponent_vitality
            )));
        }
        for (name, speed) in [
            ("charge_speed", self.charge_speed),
            ("advance_speed", self.advance_speed),
            ("skirmish_speed", self.skirmish_speed),
            ("fallback_speed", self.fallback_speed),
        ] {
            if speed <= 0.0 {
                return Err(ArenaError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, speed
                )));
            }
        }
        if self.preferred_ring < 0.0 {
            return Err(ArenaError::InvalidConfig(format!(
                "preferred_ring must be non-negative, got {}",
                self.preferred_ring
            )));
        }
        if !(0.0..=1.0).contains(&self.opponent_strike_chance) {
            return Err(ArenaError::InvalidConfig(format!(
                "opponent_strike_chance must be in [0, 1], got {}",
                self.opponent_strike_chance
            )));
        }
        if self.opponent_reach <= 0.0 {
            return Err(ArenaError::InvalidConfig(format!(
                "opponent_reach must be positive, got {}",
                self.opponent_reach
            )));
        }
        for (name, damage) in [
            ("opponent_strike_damage", self.opponent_strike_damage),
            ("strike_damage", self.strike_damage),
            ("unleash_damage", self.unleash_damage),
        ] {
            if damage < 0.0 {
                return Err(ArenaError::InvalidConfig(format!(
                    "{} must be non-negative, got {}",
                    name, damage
                )));
            }
        }
        Ok(())
    }
}

/// Everything one tick produced, for drivers and logs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickOutcome {
    pub tick: Tick,
    pub assessment: Assessment,
    pub plan: ManeuverPlan,
    pub struck_opponent: bool,
    pub took_hit: bool,
}

/// One fighter's duel against the scripted opponent
#[derive(Debug)]
pub struct Duel {
    config: DuelConfig,
    mind: TacticalMind,
    rng: StdRng,
    tick: Tick,
    distance: f32,
    health: f32,
    opponent_vitality: f32,
    attack_intensity: f32,
    cooldown_remaining: f32,
    strikes_landed: u32,
    strikes_taken: u32,
}

impl Duel {
    pub fn new(config: DuelConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            distance: config.start_distance,
            health: config.start_health,
            opponent_vitality: config.opponent_vitality,
            attack_intensity: 0.0,
            cooldown_remaining: config.start_cooldown,
            mind: TacticalMind::new()?,
            rng: StdRng::seed_from_u64(seed),
            tick: 0,
            strikes_landed: 0,
            strikes_taken: 0,
            config,
        })
    }

    /// Current measurements, exactly what the next `advance` will evaluate
    pub fn sample(&self) -> CombatSample {
        CombatSample::new(
            self.distance,
            self.health,
            self.attack_intensity,
            self.cooldown_remaining,
        )
    }

    /// Advance the duel by one tick
    ///
    /// Order within the tick: evaluate the mind on the current
    /// measurements, resolve the fighter's strike, update the ability
    /// cooldown, resolve the opponent's swing, then move. Each stage sees
    /// the stage before it, and the next tick's evaluation sees the final
    /// state.
    pub fn advance(&mut self) -> TickOutcome {
        self.tick += 1;

        let assessment = self.mind.evaluate(self.sample());
        let plan = tactics::plan_maneuver(&assessment);

        let struck_opponent = plan.strike;
        if plan.strike {
            let damage = if plan.unleash {
                self.config.unleash_damage
            } else {
                self.config.strike_damage
            };
            self.opponent_vitality = (self.opponent_vitality - damage).max(0.0);
            self.strikes_landed += 1;
        }

        if plan.unleash {
            self.cooldown_remaining = COOLDOWN_RESET;
        } else {
            self.cooldown_remaining = (self.cooldown_remaining - 1.0).max(0.0);
        }

        self.attack_intensity *= ATTACK_DECAY;
        let mut took_hit = false;
        if self.rng.gen_bool(self.config.opponent_strike_chance) {
            self.attack_intensity = (self.attack_intensity + ATTACK_BUMP).min(ATTACK_CAP);
            if self.distance <= self.config.opponent_reach {
                self.health = (self.health - self.config.opponent_strike_damage).max(0.0);
                self.strikes_taken += 1;
                took_hit = true;
            }
        }

        match plan.maneuver {
            Maneuver::Charge => {
                self.distance = (self.distance - self.config.charge_speed).max(0.0);
            }
            Maneuver::Advance => {
                self.distance = (self.distance - self.config.advance_speed).max(0.0);
            }
            Maneuver::Skirmish => {
                if self.distance > self.config.preferred_ring {
                    self.distance = (self.distance - self.config.skirmish_speed)
                        .max(self.config.preferred_ring);
                } else {
                    self.distance = (self.distance + self.config.skirmish_speed)
                        .min(self.config.preferred_ring);
                }
            }
            Maneuver::FallBack => {
                self.distance += self.config.fallback_speed;
            }
        }

        tracing::debug!(
            tick = self.tick,
            state = %assessment.state,
            aggression = assessment.aggression,
            maneuver = %plan.maneuver,
            distance = self.distance,
            health = self.health,
            opponent = self.opponent_vitality,
            "duel tick"
        );

        TickOutcome {
            tick: self.tick,
            assessment,
            plan,
            struck_opponent,
            took_hit,
        }
    }

    /// True once either side is out of the fight
    pub fn concluded(&self) -> bool {
        self.health <= 0.0 || self.opponent_vitality <= 0.0
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn opponent_vitality(&self) -> f32 {
        self.opponent_vitality
    }

    pub fn attack_intensity(&self) -> f32 {
        self.attack_intensity
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown_remaining
    }

    pub fn strikes_landed(&self) -> u32 {
        self.strikes_landed
    }

    pub fn strikes_taken(&self) -> u32 {
        self.strikes_taken
    }

    pub fn mind(&self) -> &TacticalMind {
        &self.mind
    }

    // Measurement overrides for the interactive driver.

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.max(0.0);
    }

    pub fn set_health(&mut self, health: f32) {
        self.health = health.max(0.0);
    }

    pub fn set_attack_intensity(&mut self, intensity: f32) {
        self.attack_intensity = intensity.clamp(0.0, ATTACK_CAP);
    }

    pub fn set_cooldown(&mut self, cooldown: f32) {
        self.cooldown_remaining = cooldown.max(0.0);
    }
}
