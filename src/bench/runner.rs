//! Drives every configured matcher over every configured pattern.

use std::time::Instant;

use chrono::Utc;
use log::{debug, info, warn};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::bench::config::BenchmarkConfig;
use crate::bench::report::{AlgorithmRun, BenchmarkReport, PatternReport, Summary};
use crate::corpus::Corpus;
use crate::error::{PatmatchError, Result};
use crate::matcher::{self, Algorithm, FbasMatcher, Matcher};
use crate::pattern::Pattern;

/// Runs a [`BenchmarkConfig`] against a corpus.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    /// Create a runner for `config`.
    pub fn new(config: BenchmarkConfig) -> Self {
        BenchmarkRunner { config }
    }

    /// Run every pattern against `corpus`.
    pub fn run(&self, corpus: &Corpus) -> Result<BenchmarkReport> {
        let patterns = self.config.validate()?;
        corpus.ensure_not_empty()?;

        let lowered;
        let corpus = if self.config.lowercase_corpus {
            lowered = corpus.to_lowercase();
            &lowered
        } else {
            corpus
        };

        info!(
            "Running {} patterns x {} algorithms over '{}' ({} characters)",
            patterns.len(),
            self.config.algorithms.len(),
            corpus.name(),
            corpus.len()
        );

        let start = Instant::now();
        let reports = if self.config.parallel {
            debug!("Using {} worker threads", self.config.effective_threads());
            self.run_parallel(&patterns, corpus)?
        } else {
            patterns
                .iter()
                .map(|p| self.run_pattern(p, corpus))
                .collect()
        };
        let duration = start.elapsed();

        let summary = Summary::from_reports(&reports, &self.config.algorithms);
        if summary.disagreements > 0 {
            warn!(
                "{} pattern(s) produced disagreeing positions",
                summary.disagreements
            );
        }
        info!("Benchmark finished in {}ms", duration.as_millis());

        Ok(BenchmarkReport {
            corpus: corpus.name().to_string(),
            corpus_chars: corpus.len(),
            algorithms: self.config.algorithms.clone(),
            generated_at: Utc::now(),
            duration_ms: duration.as_millis() as u64,
            patterns: reports,
            summary,
        })
    }

    fn run_parallel(&self, patterns: &[Pattern], corpus: &Corpus) -> Result<Vec<PatternReport>> {
        let work = || {
            patterns
                .par_iter()
                .map(|p| self.run_pattern(p, corpus))
                .collect::<Vec<_>>()
        };

        match self.config.threads {
            Some(threads) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| PatmatchError::thread_pool(e.to_string()))?;
                Ok(pool.install(work))
            }
            None => Ok(work()),
        }
    }

    /// Run every configured algorithm for a single pattern.
    pub fn run_pattern(&self, pattern: &Pattern, corpus: &Corpus) -> PatternReport {
        let text = corpus.chars();
        let mut anchor = None;

        let runs: Vec<AlgorithmRun> = self
            .config
            .algorithms
            .iter()
            .map(|&algorithm| {
                let result = if algorithm == Algorithm::Fbas {
                    let fbas = FbasMatcher::with_pattern(pattern.clone());
                    anchor = Some(fbas.anchor_info());
                    fbas.find(text)
                } else {
                    matcher::build(algorithm, pattern.clone()).find(text)
                };
                debug!(
                    "'{pattern}' {algorithm}: position={:?} comparisons={}",
                    result.position, result.comparisons
                );
                AlgorithmRun::new(algorithm, result)
            })
            .collect();

        let report = PatternReport::new(pattern.to_string(), pattern.len(), runs, anchor);
        if !report.positions_agree {
            warn!("Algorithms disagree on the position of {:?}", report.pattern);
        }
        report
    }
}
