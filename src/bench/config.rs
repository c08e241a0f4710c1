//! Configuration for benchmark runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PatmatchError, Result};
use crate::matcher::Algorithm;
use crate::pattern::Pattern;

/// Patterns searched when the configuration does not name any.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "inferno",
    "paradiso",
    "purgatorio",
    "beatrice",
    "dante",
    "virtute",
    "canoscenza",
    "nel mezzo",
    "selva oscura",
    "amor",
    "luce",
    "dolce",
];

/// Configuration for a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Patterns to search for, in reporting order.
    pub patterns: Vec<String>,

    /// Algorithms to run for every pattern.
    pub algorithms: Vec<Algorithm>,

    /// Run patterns in parallel.
    pub parallel: bool,

    /// Thread pool size for parallel runs.
    /// If None, uses the global rayon pool.
    pub threads: Option<usize>,

    /// Lowercase the corpus before searching.
    pub lowercase_corpus: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
            algorithms: Algorithm::ALL.to_vec(),
            parallel: true,
            threads: None,
            lowercase_corpus: false,
        }
    }
}

impl BenchmarkConfig {
    /// Create a configuration for the given patterns with all algorithms.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: BenchmarkConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Restrict the run to `algorithms`.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Enable or disable parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the thread pool size.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Lowercase the corpus before searching.
    pub fn with_lowercase_corpus(mut self, lowercase: bool) -> Self {
        self.lowercase_corpus = lowercase;
        self
    }

    /// Number of worker threads a parallel run will use.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }

    /// Check the configuration and return the parsed patterns.
    pub fn validate(&self) -> Result<Vec<Pattern>> {
        if self.patterns.is_empty() {
            return Err(PatmatchError::invalid_config("no patterns configured"));
        }
        if self.algorithms.is_empty() {
            return Err(PatmatchError::invalid_config("no algorithms configured"));
        }
        if self.threads == Some(0) {
            return Err(PatmatchError::invalid_config("threads must be at least 1"));
        }

        self.patterns.iter().map(|p| Pattern::new(p)).collect()
    }
}
