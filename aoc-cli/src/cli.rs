//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run every solver one after another on a single worker
    Sequential,
    /// One task per year; days and parts of a year run in order
    Year,
    /// One task per puzzle; its parts run in order on the parsed input (default)
    #[default]
    Day,
    /// One task per part; each part parses its own copy of the input
    Part,
}

/// Advent of Code puzzle archive runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run archived Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags a solver must carry to run (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}/day-{dd}.txt` inputs and `.answers` files
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Number of worker threads
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Compare answers against the recorded `.answers` files
    #[arg(long)]
    pub check: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_run_everything_by_day() {
        let args = Args::try_parse_from(["aoc", "--input-dir", "puzzles"]).unwrap();
        assert_eq!(args.year, None);
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert_eq!(args.input_dir, PathBuf::from("puzzles"));
        assert!(!args.check);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn filters_and_flags_parse() {
        let args = Args::try_parse_from([
            "aoc",
            "-y",
            "2022",
            "-d",
            "17",
            "-p",
            "2",
            "--tags",
            "y2022,grid",
            "--parallelize-by",
            "part",
            "--check",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.year, Some(2022));
        assert_eq!(args.day, Some(17));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["y2022", "grid"]);
        assert_eq!(args.parallelize_by, ParallelizeBy::Part);
        assert!(args.check);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn day_and_part_are_bounded() {
        assert!(Args::try_parse_from(["aoc", "-d", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "-d", "0"]).is_err());
        assert!(Args::try_parse_from(["aoc", "-p", "3"]).is_err());
    }
}
