//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    grid::{MAX_DIMENSION, MIN_DIMENSION},
    interpolation::DEFAULT_EASE_RATE,
};

/// Default maze width in cells.
const DEFAULT_WIDTH: u16 = 39;

/// Default maze height in cells.
const DEFAULT_HEIGHT: u16 = 21;

/// Default number of terminal columns per maze cell.
const DEFAULT_CELL_WIDTH: u16 = 2;

/// Default number of ticks per second.
const DEFAULT_FPS: u16 = 60;

/// Default delay between stepping on the exit and the victory announcement.
const DEFAULT_VICTORY_DELAY_MS: u64 = 600;

/// Session configuration.
///
/// This structure holds everything the session and the terminal front end are built from. It is
/// parsed from the command line, and its [`Default`] implementation matches the command-line
/// defaults.
#[derive(Clone, Debug, PartialEq, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Maze width in cells; odd, from 3 to 999.
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = parse_dimension)]
    pub width: u16,
    /// Maze height in cells; odd, from 3 to 999.
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = parse_dimension)]
    pub height: u16,
    /// Terminal columns spanned by each maze cell.
    #[arg(
        long,
        default_value_t = DEFAULT_CELL_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..=4)
    )]
    pub cell_width: u16,
    /// Share of the remaining distance the avatar covers on each tick, in (0, 1].
    #[arg(long, default_value_t = DEFAULT_EASE_RATE, value_parser = parse_rate)]
    pub speed: f64,
    /// Animation ticks per second.
    #[arg(
        long,
        default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u16).range(1..=240)
    )]
    pub fps: u16,
    /// Milliseconds between reaching the exit and the victory announcement.
    #[arg(long, default_value_t = DEFAULT_VICTORY_DELAY_MS)]
    pub victory_delay_ms: u64,
    /// Seed for the maze generator; a random one is drawn when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// File to write logs to; nothing is logged when omitted.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Log filter directive, such as "info" or "glowmaze=debug".
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_width: DEFAULT_CELL_WIDTH,
            speed: DEFAULT_EASE_RATE,
            fps: DEFAULT_FPS,
            victory_delay_ms: DEFAULT_VICTORY_DELAY_MS,
            seed: None,
            log_file: None,
            log_level: "info".to_owned(),
        }
    }
}

/// Parses a maze dimension, accepting odd numbers from [`MIN_DIMENSION`] to [`MAX_DIMENSION`].
fn parse_dimension(value: &str) -> Result<u16, String> {
    let dimension: u16 = value.parse().map_err(|err| format!("{err}"))?;

    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) || dimension % 2 == 0 {
        return Err(format!(
            "{dimension} is not an odd number from {MIN_DIMENSION} to {MAX_DIMENSION}"
        ));
    }

    Ok(dimension)
}

/// Parses an interpolation rate, accepting values in `(0, 1]`.
fn parse_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value.parse().map_err(|err| format!("{err}"))?;

    if rate > 0.0 && rate <= 1.0 {
        Ok(rate)
    } else {
        Err(format!("{rate} is not within (0, 1]"))
    }
}
