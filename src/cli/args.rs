//! Command line argument parsing for the patmatch CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::matcher::Algorithm;

/// patmatch - compare exact string matchers by character comparisons
#[derive(Parser, Debug, Clone)]
#[command(name = "patmatch")]
#[command(about = "Compare exact string matchers by the character comparisons they perform")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct PatmatchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PatmatchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run every algorithm over every pattern and report statistics
    Run(RunArgs),

    /// Search a single pattern with each algorithm
    Search(SearchArgs),

    /// Show the FBAS anchor and shift table of a pattern
    Anchor(AnchorArgs),
}

/// Where the text to search comes from
#[derive(Args, Debug, Clone, Default)]
pub struct CorpusArgs {
    /// UTF-8 text file to search (default: built-in Inferno excerpt)
    #[arg(long, value_name = "FILE", env = "PATMATCH_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Generate a synthetic corpus of this many characters instead
    #[arg(long, value_name = "CHARS", conflicts_with = "corpus")]
    pub synthetic: Option<usize>,

    /// Seed for the synthetic corpus
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

/// Arguments for a full benchmark run
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: CorpusArgs,

    /// Benchmark configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Pattern to search for (repeatable, replaces configured patterns)
    #[arg(short, long = "pattern", value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Algorithm to run (repeatable, default: all)
    #[arg(short, long = "algorithm", value_name = "ALGORITHM")]
    pub algorithms: Vec<Algorithm>,

    /// Run patterns one after another
    #[arg(long)]
    pub sequential: bool,

    /// Number of threads to use
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Lowercase the corpus before searching
    #[arg(long)]
    pub lowercase: bool,

    /// Output file for the report (JSON)
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,
}

/// Arguments for a single search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Pattern to search for
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    #[command(flatten)]
    pub source: CorpusArgs,

    /// Search this literal text instead of a corpus
    #[arg(long, conflicts_with_all = ["corpus", "synthetic"])]
    pub text: Option<String>,

    /// Algorithm to run (repeatable, default: all)
    #[arg(short, long = "algorithm", value_name = "ALGORITHM")]
    pub algorithms: Vec<Algorithm>,
}

/// Arguments for anchor inspection
#[derive(Parser, Debug, Clone)]
pub struct AnchorArgs {
    /// Pattern to analyze
    #[arg(value_name = "PATTERN")]
    pub pattern: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl RunArgs {
    /// Check if patterns should run in parallel
    pub fn parallel(&self) -> bool {
        !self.sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_run_command() {
        let args = PatmatchArgs::try_parse_from([
            "patmatch",
            "run",
            "--corpus",
            "commedia.txt",
            "-p",
            "inferno",
            "--pattern",
            "selva oscura",
            "-a",
            "bmh",
            "-a",
            "fbas",
            "--sequential",
        ])
        .unwrap();

        if let Command::Run(run_args) = args.command {
            assert_eq!(run_args.source.corpus, Some(PathBuf::from("commedia.txt")));
            assert_eq!(run_args.patterns, vec!["inferno", "selva oscura"]);
            assert_eq!(run_args.algorithms, vec![Algorithm::Bmh, Algorithm::Fbas]);
            assert!(!run_args.parallel());
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_search_command_with_text() {
        let args = PatmatchArgs::try_parse_from([
            "patmatch",
            "-f",
            "json",
            "search",
            "z",
            "--text",
            "abcz",
        ])
        .unwrap();

        assert!(matches!(args.output_format, OutputFormat::Json));
        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.pattern, "z");
            assert_eq!(search_args.text.as_deref(), Some("abcz"));
            assert!(search_args.algorithms.is_empty());
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_synthetic_conflicts_with_corpus() {
        let result = PatmatchArgs::try_parse_from([
            "patmatch",
            "run",
            "--corpus",
            "a.txt",
            "--synthetic",
            "1000",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_version_flag() {
        let err = PatmatchArgs::try_parse_from(["patmatch", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(err.to_string().contains(crate::VERSION));
    }

    #[test]
    fn test_verbosity_levels() {
        let args = PatmatchArgs::try_parse_from(["patmatch", "-vvv", "anchor", "dante"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = PatmatchArgs::try_parse_from(["patmatch", "anchor", "dante"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            PatmatchArgs::try_parse_from(["patmatch", "-q", "-vv", "anchor", "dante"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
