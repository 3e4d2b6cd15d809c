//! Arena Mind - Entry Point
//!
//! Interactive driver for the fuzzy tactical mind. It runs a scalar duel
//! against the scripted opponent, one tick per command, and exposes the
//! full membership tables for inspection while tuning rule balance.

use arena_mind::core::error::Result;
use arena_mind::sim::{Duel, DuelConfig};
use arena_mind::telemetry;

use std::io::{self, Write};

/// Seed for the interactive session; fixed so replays are comparable.
const REPL_SEED: u64 = 42;
/// Sample count per curve for the `curves` dump.
const CURVE_RESOLUTION: usize = 64;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("arena_mind=debug")
        .init();

    tracing::info!("Arena Mind starting...");

    let mut duel = Duel::new(DuelConfig::default(), REPL_SEED)?;

    // Display welcome message
    println!("\n=== ARENA MIND ===");
    println!("Fuzzy-logic tactical brain in a scalar duel");
    println!();
    println!("Commands:");
    println!("  tick / t             - Advance the duel by one tick");
    println!("  run <n>              - Run n ticks");
    println!("  status / s           - Show the full membership breakdown");
    println!("  set <measure> <v>    - Override distance|health|attack|cooldown");
    println!("  curves               - Dump membership curves as JSON");
    println!("  reset                - Restart the duel from the opening state");
    println!("  quit / q             - Exit");
    println!();

    // Main loop
    loop {
        display_status(&duel);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "tick" || input == "t" {
            let outcome = duel.advance();
            println!(
                "Tick {}: {} ({}), aggression {:.1}",
                outcome.tick, outcome.assessment.state, outcome.plan.maneuver, outcome.assessment.aggression
            );
            continue;
        }

        if input == "status" || input == "s" {
            display_detailed_status(&duel);
            continue;
        }

        if let Some(rest) = input.strip_prefix("run ") {
            if let Ok(n) = rest.trim().parse::<u32>() {
                println!("Running {} ticks...", n);
                for _ in 0..n {
                    duel.advance();
                    if duel.concluded() {
                        println!("Duel concluded at tick {}.", duel.tick());
                        break;
                    }
                }
                println!("Now at tick {}.", duel.tick());
            } else {
                println!("Usage: run <number>");
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("set ") {
            handle_set(&mut duel, rest);
            continue;
        }

        if input == "curves" {
            let bundle = serde_json::json!({
                "inputs": telemetry::input_curves(CURVE_RESOLUTION),
                "postures": telemetry::posture_curves(CURVE_RESOLUTION),
            });
            println!("{}", serde_json::to_string_pretty(&bundle)?);
            continue;
        }

        if input == "reset" {
            duel = Duel::new(DuelConfig::default(), REPL_SEED)?;
            println!("Duel reset.");
            continue;
        }

        println!("Unknown command. Available: tick, run <n>, status, set, curves, reset, quit");
    }

    println!(
        "\nGoodbye! {} ticks, {} strikes landed, {} taken.",
        duel.tick(),
        duel.strikes_landed(),
        duel.strikes_taken()
    );
    Ok(())
}

/// Apply a `set <measure> <value>` override to the duel state
fn handle_set(duel: &mut Duel, args: &str) {
    let mut parts = args.split_whitespace();
    let measure = parts.next();
    let value = parts.next().and_then(|v| v.parse::<f32>().ok());
    match (measure, value) {
        (Some("distance"), Some(v)) => {
            duel.set_distance(v);
            println!("distance = {:.1}", duel.distance());
        }
        (Some("health"), Some(v)) => {
            duel.set_health(v);
            println!("health = {:.1}", duel.health());
        }
        (Some("attack"), Some(v)) => {
            duel.set_attack_intensity(v);
            println!("attack = {:.1}", duel.attack_intensity());
        }
        (Some("cooldown"), Some(v)) => {
            duel.set_cooldown(v);
            println!("cooldown = {:.1}", duel.cooldown_remaining());
        }
        _ => println!("Usage: set distance|health|attack|cooldown <value>"),
    }
}

/// Display a brief status summary
fn display_status(duel: &Duel) {
    println!();
    let state = duel
        .mind()
        .last_assessment()
        .map(|a| a.state.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "--- Tick {} | dist {:.1} | health {:.0}% | foe {:.0}% | state {} ---",
        duel.tick(),
        duel.distance(),
        duel.health(),
        duel.opponent_vitality(),
        state
    );
    println!();
}

/// Display the full membership breakdown of the last assessment
fn display_detailed_status(duel: &Duel) {
    println!();
    println!("=== Detailed Status (Tick {}) ===", duel.tick());
    let sample = duel.sample();
    println!(
        "Measurements: distance {:.2}, health {:.2}, attack {:.2}, cooldown {:.2}",
        sample.distance, sample.health_percent, sample.attack_intensity, sample.cooldown_remaining
    );

    let assessment = match duel.mind().last_assessment() {
        Some(assessment) => assessment,
        None => {
            println!("No assessment yet; run a tick first.");
            return;
        }
    };

    let p = &assessment.percepts;
    println!(
        "  Distance: close {:.2}, medium {:.2}, far {:.2}",
        p.distance.close, p.distance.medium, p.distance.far
    );
    println!(
        "  Health:   critical {:.2}, wounded {:.2}, healthy {:.2}",
        p.health.critical, p.health.wounded, p.health.healthy
    );
    println!(
        "  Attack:   calm {:.2}, fighting {:.2}, spamming {:.2}",
        p.attack.calm, p.attack.fighting, p.attack.spamming
    );
    println!(
        "  Cooldown: armed {:.2}, recharging {:.2}, spent {:.2}",
        p.cooldown.armed, p.cooldown.recharging, p.cooldown.spent
    );
    println!(
        "  Bands:    low {:.2}, medium {:.2}, high {:.2}",
        assessment.bands.low, assessment.bands.medium, assessment.bands.high
    );
    println!(
        "  Posture:  passive {:.2}, neutral {:.2}, aggressive {:.2}",
        assessment.posture.passive, assessment.posture.neutral, assessment.posture.aggressive
    );
    println!(
        "  Aggression {:.2} -> {}",
        assessment.aggression, assessment.state
    );
    println!(
        "  Strikes: landed {}, taken {}",
        duel.strikes_landed(),
        duel.strikes_taken()
    );
    println!();
}
