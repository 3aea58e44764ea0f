//! Paddle Duel headless runner
//!
//! Plays a CPU-vs-CPU match without a window and prints the final frame as
//! JSON. Useful for checking settings files and reproducing seeds.
//!
//! Usage: `paddle-duel [SETTINGS.json] [--seed N] [--ticks N] [--pace NAME]`

use std::process::ExitCode;

use paddle_duel::consts::TICKS_PER_SECOND;
use paddle_duel::settings::Pace;
use paddle_duel::sim::{GamePhase, GameState, PaddleControl, TickInput, tick};
use paddle_duel::{ConfigError, Settings};

/// Default run length: two minutes of play
const DEFAULT_TICKS: u64 = 120 * TICKS_PER_SECOND as u64;

struct Args {
    settings_path: Option<String>,
    seed: u64,
    ticks: u64,
    pace: Option<Pace>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        settings_path: None,
        seed: 0,
        ticks: DEFAULT_TICKS,
        pace: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = value.parse().map_err(|_| format!("bad seed: {}", value))?;
            }
            "--ticks" => {
                let value = iter.next().ok_or("--ticks needs a value")?;
                args.ticks = value
                    .parse()
                    .map_err(|_| format!("bad tick count: {}", value))?;
            }
            "--pace" => {
                let value = iter.next().ok_or("--pace needs a value")?;
                args.pace =
                    Some(Pace::from_str(&value).ok_or_else(|| format!("unknown pace: {}", value))?);
            }
            _ if arg.starts_with("--") => return Err(format!("unknown option: {}", arg)),
            _ => args.settings_path = Some(arg),
        }
    }

    Ok(args)
}

fn run(args: Args) -> Result<GameState, ConfigError> {
    let mut settings = match &args.settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(pace) = args.pace {
        log::info!("Pace: {}", pace.as_str());
        settings.apply_pace(pace);
    }

    let mut state = GameState::new(settings, args.seed)?;
    let input = TickInput {
        left: PaddleControl::Cpu,
        right: PaddleControl::Cpu,
        ..Default::default()
    };

    for _ in 0..args.ticks {
        tick(&mut state, &input);
        if matches!(state.phase, GamePhase::GameOver { .. }) {
            break;
        }
    }

    Ok(state)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Paddle Duel (headless) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };

    let state = match run(args) {
        Ok(state) => state,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Finished after {} ticks: {} - {}",
        state.time_ticks,
        state.scores.left,
        state.scores.right
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Failed to encode snapshot: {}", err);
            ExitCode::FAILURE
        }
    }
}
