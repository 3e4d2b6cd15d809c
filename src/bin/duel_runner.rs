//! Headless Duel Runner
//!
//! Runs the tactical mind through a scripted duel and emits a JSON summary,
//! for balance sweeps and regression comparisons across seeds.

use arena_mind::core::error::Result;
use arena_mind::fuzzy::TacticalState;
use arena_mind::sim::{Duel, DuelConfig};
use clap::Parser;
use serde::Serialize;

/// Headless Duel Runner - scripted duels for balance sweeps
#[derive(Parser, Debug)]
#[command(name = "duel_runner")]
#[command(about = "Run a scripted duel and output a JSON summary")]
struct Args {
    /// Maximum ticks before the duel times out
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Opening distance to the opponent, world units
    #[arg(long, default_value_t = 25.0)]
    distance: f32,

    /// Fighter's opening health, percent
    #[arg(long, default_value_t = 100.0)]
    health: f32,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Print per-tick lines to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Ticks spent in each tactical state
#[derive(Serialize, Default)]
struct StateOccupancy {
    berserk: u64,
    ruthless: u64,
    aggressive: u64,
    cautious: u64,
    defensive: u64,
}

impl StateOccupancy {
    fn record(&mut self, state: TacticalState) {
        match state {
            TacticalState::Berserk => self.berserk += 1,
            TacticalState::Ruthless => self.ruthless += 1,
            TacticalState::Aggressive => self.aggressive += 1,
            TacticalState::Cautious => self.cautious += 1,
            TacticalState::Defensive => self.defensive += 1,
        }
    }
}

/// JSON output structure
#[derive(Serialize)]
struct DuelSummary {
    outcome: String,
    ticks: u64,
    final_state: String,
    final_distance: f32,
    final_health: f32,
    final_opponent_vitality: f32,
    aggression_min: f32,
    aggression_mean: f32,
    aggression_max: f32,
    state_occupancy: StateOccupancy,
    strikes_landed: u32,
    strikes_taken: u32,
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let config = DuelConfig {
        start_distance: args.distance,
        start_health: args.health,
        ..DuelConfig::default()
    };
    let mut duel = Duel::new(config, seed)?;

    let mut occupancy = StateOccupancy::default();
    let mut aggression_min = f32::MAX;
    let mut aggression_max = f32::MIN;
    let mut aggression_sum = 0.0f64;
    let mut final_state = None;

    while duel.tick() < args.ticks && !duel.concluded() {
        let outcome = duel.advance();
        occupancy.record(outcome.assessment.state);
        aggression_min = aggression_min.min(outcome.assessment.aggression);
        aggression_max = aggression_max.max(outcome.assessment.aggression);
        aggression_sum += f64::from(outcome.assessment.aggression);
        final_state = Some(outcome.assessment.state);

        if args.verbose {
            eprintln!(
                "[{}] {} {} dist={:.1} health={:.0} foe={:.0} aggr={:.1}",
                outcome.tick,
                outcome.assessment.state,
                outcome.plan.maneuver,
                duel.distance(),
                duel.health(),
                duel.opponent_vitality(),
                outcome.assessment.aggression
            );
        }
    }

    let ticks = duel.tick();
    let outcome = if duel.health() <= 0.0 {
        "defeat"
    } else if duel.opponent_vitality() <= 0.0 {
        "victory"
    } else {
        "timeout"
    };
    let (aggression_min, aggression_mean, aggression_max) = if ticks > 0 {
        (
            aggression_min,
            (aggression_sum / ticks as f64) as f32,
            aggression_max,
        )
    } else {
        (0.0, 0.0, 0.0)
    };

    let summary = DuelSummary {
        outcome: outcome.to_string(),
        ticks,
        final_state: final_state
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string()),
        final_distance: duel.distance(),
        final_health: duel.health(),
        final_opponent_vitality: duel.opponent_vitality(),
        aggression_min,
        aggression_mean,
        aggression_max,
        state_occupancy: occupancy,
        strikes_landed: duel.strikes_landed(),
        strikes_taken: duel.strikes_taken(),
        seed,
    };

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        "text" => {
            println!("Duel Summary");
            println!("============");
            println!("Outcome: {}", summary.outcome);
            println!("Ticks: {}", summary.ticks);
            println!("Final state: {}", summary.final_state);
            println!(
                "Final: dist {:.1}, health {:.0}%, foe {:.0}%",
                summary.final_distance, summary.final_health, summary.final_opponent_vitality
            );
            println!(
                "Aggression: min {:.1}, mean {:.1}, max {:.1}",
                summary.aggression_min, summary.aggression_mean, summary.aggression_max
            );
            println!(
                "Strikes: landed {}, taken {}",
                summary.strikes_landed, summary.strikes_taken
            );
            println!("Seed: {}", summary.seed);
        }
        _ => {
            eprintln!("Unknown format '{}', defaulting to json", args.format);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
