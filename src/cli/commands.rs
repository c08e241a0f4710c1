//! Command implementations for the patmatch CLI.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::bench::{AlgorithmRun, BenchmarkConfig, BenchmarkReport, BenchmarkRunner};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::matcher::{self, Algorithm, FbasMatcher, Matcher};
use crate::pattern::Pattern;

/// Execute a CLI command.
pub fn execute_command(args: PatmatchArgs) -> Result<()> {
    match &args.command {
        Command::Run(run_args) => run_benchmark(run_args, &args),
        Command::Search(search_args) => search_pattern(search_args, &args),
        Command::Anchor(anchor_args) => show_anchor(anchor_args, &args),
    }
}

/// Run the full benchmark.
fn run_benchmark(args: &RunArgs, cli_args: &PatmatchArgs) -> Result<()> {
    let config = build_config(args)?;
    let corpus = load_corpus(&args.source)?;

    info!(
        "Running benchmark on {} ({} characters)",
        corpus.name(),
        corpus.len()
    );

    let report = BenchmarkRunner::new(config).run(&corpus)?;

    // Save results to file if specified
    if let Some(output_file) = &args.output_file {
        save_benchmark_report(&report, output_file, cli_args)?;
    }

    output_result("Benchmark completed", &report, cli_args)
}

/// Merge the configuration file (if any) with command line overrides.
fn build_config(args: &RunArgs) -> Result<BenchmarkConfig> {
    let mut config = match &args.config_file {
        Some(path) => {
            info!("Loading benchmark configuration from {}", path.display());
            BenchmarkConfig::from_file(path)?
        }
        None => BenchmarkConfig::default(),
    };

    if !args.patterns.is_empty() {
        config.patterns = args.patterns.clone();
    }
    if !args.algorithms.is_empty() {
        config.algorithms = dedup_algorithms(&args.algorithms);
    }
    if args.sequential {
        config.parallel = false;
    }
    if let Some(threads) = args.threads {
        config.threads = Some(threads);
    }
    if args.lowercase {
        config.lowercase_corpus = true;
    }

    config.validate()?;
    Ok(config)
}

/// Search a single pattern with each requested algorithm.
fn search_pattern(args: &SearchArgs, cli_args: &PatmatchArgs) -> Result<()> {
    let pattern = Pattern::new(&args.pattern)?;
    let corpus = match &args.text {
        Some(text) => Corpus::from_text("<text>", text),
        None => load_corpus(&args.source)?,
    };

    let algorithms = if args.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        dedup_algorithms(&args.algorithms)
    };

    let results = algorithms
        .into_iter()
        .map(|algorithm| {
            let result = matcher::build(algorithm, pattern.clone()).find(corpus.chars());
            AlgorithmRun::new(algorithm, result)
        })
        .collect();

    output_result(
        "Search completed",
        &SearchResults {
            pattern: pattern.to_string(),
            source: corpus.name().to_string(),
            text_chars: corpus.len(),
            results,
        },
        cli_args,
    )
}

/// Show the FBAS preprocessing for a pattern.
fn show_anchor(args: &AnchorArgs, cli_args: &PatmatchArgs) -> Result<()> {
    let matcher = FbasMatcher::new(&args.pattern)?;
    let shift_table = matcher
        .shift_table()
        .entries()
        .into_iter()
        .map(|(character, shift)| ShiftEntry { character, shift })
        .collect();

    output_result(
        "Anchor analysis",
        &AnchorReport {
            pattern: matcher.pattern().to_string(),
            length: matcher.pattern().len(),
            anchor: matcher.anchor_info(),
            shift_table,
            default_shift: matcher.pattern().len(),
        },
        cli_args,
    )
}

/// Resolve the corpus source: file, synthetic, or the built-in sample.
fn load_corpus(source: &CorpusArgs) -> Result<Corpus> {
    match (&source.corpus, source.synthetic) {
        (Some(path), _) => Corpus::from_file(path),
        (None, Some(len)) => Corpus::synthetic(len, source.seed),
        (None, None) => Ok(Corpus::sample()),
    }
}

/// Keep the first occurrence of each algorithm.
fn dedup_algorithms(algorithms: &[Algorithm]) -> Vec<Algorithm> {
    let mut unique = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        if !unique.contains(&algorithm) {
            unique.push(algorithm);
        }
    }
    unique
}

/// Save the benchmark report to file.
fn save_benchmark_report(
    report: &BenchmarkReport,
    file_path: &Path,
    cli_args: &PatmatchArgs,
) -> Result<()> {
    let mut file = File::create(file_path)?;

    let json = if cli_args.pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    file.write_all(json.as_bytes())?;

    info!("Benchmark report saved to: {}", file_path.display());

    Ok(())
}
