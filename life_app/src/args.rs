// args.rs - Command line configuration

use clap::Parser;
use life_core::{CELL_SIZE, HEIGHT, SIMULATION_TICK, WIDTH};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "life", version, about = "Interactive Conway's Game of Life")]
pub struct Args {
    /// JSON start grid: rows of 0/1 values, top row first. The window is
    /// sized to fit it.
    pub start_grid: Option<PathBuf>,

    /// Start from a built-in pattern (e.g. "glider", "pulsar") on an empty grid
    #[arg(long, conflicts_with = "start_grid")]
    pub pattern: Option<String>,

    /// Side length of a cell in pixels
    #[arg(long, default_value_t = CELL_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub cell_size: u32,

    /// Grid width in pixels when no start grid is given
    #[arg(long, default_value_t = WIDTH)]
    pub width: u32,

    /// Grid height in pixels when no start grid is given
    #[arg(long, default_value_t = HEIGHT)]
    pub height: u32,

    /// Milliseconds between generations
    #[arg(long, default_value_t = SIMULATION_TICK.as_millis() as u64)]
    pub tick_ms: u64,

    /// Directory of template collection files
    #[arg(long, default_value = "templates")]
    pub templates: PathBuf,

    /// Seed for the random start grid
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with the simulation paused
    #[arg(long)]
    pub paused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["life"]).unwrap();
        assert_eq!(args.cell_size, 7);
        assert_eq!((args.width, args.height), (301, 301));
        assert_eq!(args.tick_ms, 50);
        assert_eq!(args.templates, PathBuf::from("templates"));
        assert!(args.start_grid.is_none() && !args.paused);
    }

    #[test]
    fn start_grid_and_pattern_conflict() {
        assert!(Args::try_parse_from(["life", "grid.json", "--pattern", "glider"]).is_err());
        let args = Args::try_parse_from(["life", "--pattern", "glider", "--seed", "3"]).unwrap();
        assert_eq!(args.pattern.as_deref(), Some("glider"));
        assert_eq!(args.seed, Some(3));
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        assert!(Args::try_parse_from(["life", "--cell-size", "0"]).is_err());
    }
}
