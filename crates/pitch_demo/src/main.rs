//! Pitch demo CLI
//!
//! Loads a roster, lines both teams up for kick-off, and optionally plays a
//! few ticks of random running, passing and shooting.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use pitch_core::motion::TRACE_TARGET;
use pitch_core::{
    draw_roster, AudioSink, Ball, BallState, Color, MotionContext, Movement, Player, RecordingSurface,
    Roster, Side, SimConfig, Squad, Surface, FIELD_HEIGHT, FIELD_WIDTH,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::PathBuf;

const DEFAULT_ROSTER: &str = include_str!("../../../demos/roster.json");

/// Ticks between shots; every other touch is a pass.
const SHOT_EVERY: u32 = 5;

#[derive(Parser)]
#[command(name = "pitch_demo")]
#[command(about = "Place two squads on the pitch and move them around", long_about = None)]
struct Cli {
    /// Roster file (.json, .yaml, .yml); the bundled roster is used when omitted
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print kick-off locations as JSON
    Place {
        /// Pretty-print the JSON
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Run a number of ticks and print every movement
    Simulate {
        /// Number of ticks to play
        #[arg(long, default_value_t = 10)]
        ticks: u32,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Config file (.json, .yaml, .yml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Use the calm preset instead of the standard one
        #[arg(long, default_value = "false")]
        calm: bool,

        /// Route movement trace lines through the logger (switches the config's `debug` on)
        #[arg(long, default_value = "false")]
        debug: bool,

        /// Print the draw commands of the final frame
        #[arg(long, default_value = "false")]
        draw: bool,
    },
}

/// Reports kicks through the logger.
#[derive(Default)]
struct LoggingAudio {
    kicks: usize,
}

impl AudioSink for LoggingAudio {
    fn play(&mut self, clip: &str) {
        self.kicks += 1;
        log::info!("playing {}", clip);
    }
}

#[derive(Serialize)]
struct PlacedPlayer<'a> {
    name: String,
    number: u8,
    role: &'a str,
    bench: bool,
    x: i32,
    y: i32,
}

#[derive(Serialize)]
struct PlacedTeam<'a> {
    name: &'a str,
    side: Side,
    players: Vec<PlacedPlayer<'a>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Trace lines are only emitted when the resolved config has debug on.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter(Some(TRACE_TARGET), LevelFilter::Debug)
        .init();

    let roster = match &cli.roster {
        Some(path) => Roster::from_path(path).with_context(|| format!("loading {}", path.display()))?,
        None => Roster::from_json_str(DEFAULT_ROSTER).context("parsing bundled roster")?,
    };
    let home_name = roster.home.name.clone();
    let away_name = roster.away.name.clone();
    let mut home = roster.home.into_squad().with_context(|| format!("building {}", home_name))?;
    let mut away = roster.away.into_squad().with_context(|| format!("building {}", away_name))?;

    home.init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Left);
    away.init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Right);
    log::info!(
        "{} ({} + {} bench) vs {} ({} + {} bench)",
        home_name,
        home.main.len(),
        home.bench_players().count(),
        away_name,
        away.main.len(),
        away.bench_players().count()
    );

    match cli.command {
        Commands::Place { pretty } => {
            let teams = [
                placed_team(&home_name, Side::Left, &home),
                placed_team(&away_name, Side::Right, &away),
            ];
            let json = if pretty {
                serde_json::to_string_pretty(&teams)?
            } else {
                serde_json::to_string(&teams)?
            };
            println!("{}", json);
        }

        Commands::Simulate { ticks, seed, config, calm, debug, draw } => {
            let config = match config {
                Some(path) => SimConfig::from_path(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None if calm => SimConfig::calm(),
                None => SimConfig::standard(),
            };
            let config = apply_debug_flag(config, debug);

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut audio = LoggingAudio::default();
            let mut ball = Ball::new(5, Color::WHITE, pitch_centre());

            let movements = simulate(ticks, &mut home, &mut away, &mut ball, &mut rng, &mut audio, &config)?;
            if !config.debug {
                for movement in &movements {
                    println!("{}", movement);
                }
            }

            println!(
                "\n{} movements over {} ticks, {} kicks, ball at {}",
                movements.len(),
                ticks,
                audio.kicks,
                ball.location()
            );

            if draw {
                print_frame(&home, &away, &ball)?;
            }
        }
    }

    Ok(())
}

/// `--debug` can switch tracing on but never off.
fn apply_debug_flag(config: SimConfig, debug: bool) -> SimConfig {
    if debug {
        config.with_debug(true)
    } else {
        config
    }
}

fn pitch_centre() -> pitch_core::Location {
    pitch_core::Location::new(FIELD_WIDTH / 2, FIELD_HEIGHT / 2)
}

fn placed_team<'a>(name: &'a str, side: Side, squad: &'a Squad) -> PlacedTeam<'a> {
    let placed = |player: &'a Player, bench: bool| {
        let location = player.location().unwrap_or_default();
        PlacedPlayer {
            name: player.name().to_string(),
            number: player.number(),
            role: player.role().as_str(),
            bench,
            x: location.x,
            y: location.y,
        }
    };
    let players = squad
        .main
        .iter()
        .map(|p| placed(p, false))
        .chain(squad.bench_players().map(|p| placed(p, true)))
        .collect();
    PlacedTeam { name, side, players }
}

/// Everyone runs each tick; one player of the team in possession touches the ball.
/// Possession flips after every shot.
fn simulate(
    ticks: u32,
    home: &mut Squad,
    away: &mut Squad,
    ball: &mut Ball,
    rng: &mut ChaCha8Rng,
    audio: &mut LoggingAudio,
    config: &SimConfig,
) -> Result<Vec<Movement>> {
    let mut movements = Vec::new();
    let mut home_in_possession = true;

    for tick in 1..=ticks {
        let carrier = {
            let attackers = if home_in_possession { &home.main } else { &away.main };
            rng.gen_range(0..attackers.len())
        };
        let mut ctx = MotionContext::new(&mut *rng, &mut *audio, config)?;

        for player in home.main.iter_mut().chain(away.main.iter_mut()) {
            movements.push(player.run(&mut ctx)?);
        }

        let attackers = if home_in_possession { &home.main } else { &away.main };
        let touch = &attackers[carrier];
        if tick % SHOT_EVERY == 0 {
            movements.push(touch.shoot(ball, &mut ctx)?);
            home_in_possession = !home_in_possession;
        } else {
            movements.push(touch.pass(ball, &mut ctx)?);
        }
    }

    Ok(movements)
}

fn print_frame(home: &Squad, away: &Squad, ball: &Ball) -> Result<()> {
    use pitch_core::Drawable;

    let mut surface = RecordingSurface::new(Color::RED);
    draw_roster(&home.main, &mut surface)?;
    surface.set_color(Color::BLUE);
    draw_roster(&away.main, &mut surface)?;
    ball.draw(&mut surface)?;

    println!("\nFinal frame:");
    for command in &surface.commands {
        println!("  {}", command);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> (Squad, Squad) {
        let roster = Roster::from_json_str(DEFAULT_ROSTER).unwrap();
        let mut home = roster.home.into_squad().unwrap();
        let mut away = roster.away.into_squad().unwrap();
        home.init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Left);
        away.init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Right);
        (home, away)
    }

    #[test]
    fn test_bundled_roster_places_everyone() {
        let (home, away) = bundled();
        let team = placed_team("Reds", Side::Left, &home);
        assert_eq!(team.players.len(), 13);
        assert!(team.players.iter().filter(|p| p.bench).all(|p| p.y == FIELD_HEIGHT));
        assert!(away.main.iter().all(Player::is_placed));
    }

    #[test]
    fn test_debug_flag_only_switches_on() {
        let from_file = SimConfig::standard().with_debug(true);
        assert!(apply_debug_flag(from_file.clone(), false).debug);
        assert!(apply_debug_flag(from_file, true).debug);
        assert!(apply_debug_flag(SimConfig::standard().with_debug(false), true).debug);
        assert!(!apply_debug_flag(SimConfig::standard().with_debug(false), false).debug);
    }

    #[test]
    fn test_simulate_rejects_config_without_clips() {
        let (mut home, mut away) = bundled();
        let mut ball = Ball::new(5, Color::WHITE, pitch_centre());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut audio = LoggingAudio::default();
        let mut config = SimConfig::standard().with_debug(false);
        config.motion.kick_clips.clear();

        assert!(simulate(5, &mut home, &mut away, &mut ball, &mut rng, &mut audio, &config).is_err());
        assert_eq!(audio.kicks, 0);
    }

    #[test]
    fn test_simulate_counts_and_kicks() {
        let (mut home, mut away) = bundled();
        let mut ball = Ball::new(5, Color::WHITE, pitch_centre());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut audio = LoggingAudio::default();
        let config = SimConfig::standard().with_debug(false);

        let movements = simulate(10, &mut home, &mut away, &mut ball, &mut rng, &mut audio, &config).unwrap();
        assert_eq!(movements.len(), 10 * 23);
        assert_eq!(audio.kicks, 2);
    }
}
