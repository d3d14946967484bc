//! Command-line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How work is spread over the thread pool
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run every solver in order on one thread
    Sequential,
    /// One task per year; days within a year run in order
    Year,
    /// One task per year/day; parts of a day run in order
    #[default]
    Day,
}

/// Run puzzle solvers against inputs stored on disk
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
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

    /// Only run solvers carrying all of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}/day{DD}.txt` input files
    #[arg(short, long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Number of worker threads (defaults to available parallelism)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year or day
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Only print answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log debug events from the solvers
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.year, None);
        assert!(args.tags.is_empty());
        assert_eq!(args.input_dir, PathBuf::from("inputs"));
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert!(!args.quiet && !args.verbose);
    }

    #[test]
    fn test_filters_and_tags() {
        let args = Args::try_parse_from([
            "aoc",
            "--year",
            "2024",
            "-d",
            "16",
            "-p",
            "2",
            "--tags",
            "2024,grid",
            "--parallelize-by",
            "sequential",
        ])
        .unwrap();
        assert_eq!(args.year, Some(2024));
        assert_eq!(args.day, Some(16));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["2024".to_string(), "grid".to_string()]);
        assert_eq!(args.parallelize_by, ParallelizeBy::Sequential);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--parallelize-by", "part"]).is_err());
    }
}
