//! Flap Dodge headless host
//!
//! Runs the simulation without a window: an autoplay bot picks a difficulty,
//! steers toward the door, and the final snapshot is printed as JSON.
//!
//! Usage: `flap-dodge [--seed N] [--ticks N] [--difficulty easy|normal|hell] [--settings PATH]`

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use flap_dodge::Settings;
use flap_dodge::consts::SIM_DT;
use flap_dodge::platform::{EdgeTracker, FixedStep, KeyState};
use flap_dodge::sim::{
    Difficulty, GamePhase, GameState, MenuSelection, SimulationSnapshot, TickInput, tick,
};

#[derive(Parser, Debug)]
#[command(name = "flap-dodge")]
#[command(about = "Headless Flap Dodge run driven by an autoplay bot")]
struct Cli {
    /// RNG seed for obstacle spawning
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Stop after this many simulation ticks
    #[arg(long, default_value_t = 60 * 60 * 5)]
    ticks: u64,

    /// Difficulty the bot picks from the menu
    #[arg(long, default_value = "easy", value_parser = parse_difficulty)]
    difficulty: Difficulty,

    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn parse_difficulty(name: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(name).ok_or_else(|| format!("unknown difficulty {name} (easy, normal, hell)"))
}

/// Scripted player standing in for a keyboard
struct Autopilot {
    target: Difficulty,
}

impl Autopilot {
    /// Keys to hold for the coming tick; presses alternate with releases so
    /// every press registers as a fresh edge
    fn keys(&self, state: &GameState, last: &SimulationSnapshot) -> KeyState {
        let even = state.time_ticks % 2 == 0;
        match last.phase {
            GamePhase::Menu => {
                let mut target = MenuSelection::default();
                target.select(self.target);
                let target_index = target.index();
                let current = state.menu.index();
                KeyState {
                    down: even && current < target_index,
                    up: even && current > target_index,
                    confirm: even && current == target_index,
                    ..Default::default()
                }
            }
            GamePhase::Playing => KeyState {
                right: true,
                jump: even && self.should_jump(state),
                ..Default::default()
            },
            GamePhase::Win | GamePhase::Lose => KeyState {
                confirm: even,
                ..Default::default()
            },
        }
    }

    fn should_jump(&self, state: &GameState) -> bool {
        let player = &state.player;
        let sinking = player.screen_position.y > state.settings.floor_limit() - 120.0;
        let threatened = state.obstacles.iter().any(|o| {
            let ahead = o.position.x - player.position.x;
            let below_head = o.position.y + state.settings.obstacle_size.y > player.position.y;
            let above_feet = o.position.y < player.position.y + player.size.y + 40.0;
            (0.0..300.0).contains(&ahead) && below_head && above_feet
        });
        sinking || (threatened && player.velocity.y > 0.0)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Flap Dodge (headless) starting...");

    let options = Cli::parse();
    let settings = match &options.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.validate()?;

    let mut state = GameState::with_settings(settings, Pcg32::seed_from_u64(options.seed));
    let pilot = Autopilot {
        target: options.difficulty,
    };
    let mut edges = EdgeTracker::new();
    let mut step = FixedStep::new();
    let mut snapshot = state.snapshot();
    let mut finished_episode = false;

    log::info!(
        "Seed {}, difficulty {}, up to {} ticks",
        options.seed,
        options.difficulty.as_str(),
        options.ticks
    );

    'frames: while state.time_ticks < options.ticks {
        // Headless frames arrive exactly on the tick boundary
        for _ in 0..step.push(SIM_DT) {
            let input: TickInput = edges.sample(pilot.keys(&state, &snapshot));
            let previous = snapshot.phase;
            snapshot = tick(&mut state, &input);

            if snapshot.phase != previous {
                log::info!(
                    "Tick {}: {:?} -> {:?}",
                    snapshot.tick,
                    previous,
                    snapshot.phase
                );
                if matches!(snapshot.phase, GamePhase::Win | GamePhase::Lose) {
                    finished_episode = true;
                }
                if snapshot.phase == GamePhase::Menu && finished_episode {
                    break 'frames;
                }
            }
            if snapshot.exit_requested {
                break 'frames;
            }
        }
    }

    if !finished_episode {
        log::warn!("Episode still running after {} ticks", state.time_ticks);
    }

    let json = serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["flap-dodge"]).unwrap();
        assert_eq!(cli.seed, 12345);
        assert_eq!(cli.ticks, 18_000);
        assert_eq!(cli.difficulty, Difficulty::Easy);
        assert!(cli.settings.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "flap-dodge",
            "--seed",
            "7",
            "--difficulty",
            "HELL",
            "--settings",
            "tuning.json",
        ])
        .unwrap();
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.difficulty, Difficulty::Hell);
        assert_eq!(cli.settings, Some(PathBuf::from("tuning.json")));
    }

    #[test]
    fn test_cli_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["flap-dodge", "--difficulty", "nightmare"]).is_err());
        assert!(Cli::try_parse_from(["flap-dodge", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_autopilot_walks_menu_to_target() {
        let state = GameState::new(1);
        let pilot = Autopilot {
            target: Difficulty::Hell,
        };
        let keys = pilot.keys(&state, &state.snapshot());
        assert!(keys.down && !keys.up && !keys.confirm);
    }
}
