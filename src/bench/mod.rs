//! Benchmark harness.
//!
//! Runs the configured matchers over a [`Corpus`](crate::corpus::Corpus) and
//! collects positions, comparison counts and FBAS improvement statistics.

pub mod config;
pub mod report;
pub mod runner;

pub use config::{BenchmarkConfig, DEFAULT_PATTERNS};
pub use report::{AlgorithmRun, BenchmarkReport, PatternReport, Summary};
pub use runner::BenchmarkRunner;
