//! Result records produced by benchmark runs.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matcher::{Algorithm, AnchorInfo, MatchResult};

/// One algorithm searched for one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub position: Option<usize>,
    pub comparisons: u64,
}

impl AlgorithmRun {
    pub fn new(algorithm: Algorithm, result: MatchResult) -> Self {
        AlgorithmRun {
            algorithm,
            position: result.position,
            comparisons: result.comparisons,
        }
    }

    /// Column name used for this run in tabular output.
    pub fn column_name(&self) -> String {
        format!("{}_comparisons", self.algorithm.name())
    }
}

/// All runs for one pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternReport {
    pub pattern: String,
    /// Pattern length in characters.
    pub length: usize,
    pub runs: Vec<AlgorithmRun>,
    /// Anchor chosen by FBAS, when FBAS was run.
    pub anchor: Option<AnchorInfo>,
    /// FBAS comparison savings relative to BMH, in percent.
    pub improvement_vs_bmh: Option<f64>,
    /// FBAS comparison savings relative to the naive scan, in percent.
    pub improvement_vs_naive: Option<f64>,
    /// Whether every algorithm reported the same position.
    pub positions_agree: bool,
}

impl PatternReport {
    /// Assemble a report and derive the comparison statistics.
    pub fn new(
        pattern: String,
        length: usize,
        runs: Vec<AlgorithmRun>,
        anchor: Option<AnchorInfo>,
    ) -> Self {
        let positions_agree = runs.windows(2).all(|w| w[0].position == w[1].position);
        let mut report = PatternReport {
            pattern,
            length,
            runs,
            anchor,
            improvement_vs_bmh: None,
            improvement_vs_naive: None,
            positions_agree,
        };
        report.improvement_vs_bmh = report.improvement(Algorithm::Bmh);
        report.improvement_vs_naive = report.improvement(Algorithm::Naive);
        report
    }

    /// The run of `algorithm`, if it was part of the benchmark.
    pub fn run(&self, algorithm: Algorithm) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|r| r.algorithm == algorithm)
    }

    /// Comparisons performed by `algorithm`.
    pub fn comparisons(&self, algorithm: Algorithm) -> Option<u64> {
        self.run(algorithm).map(|r| r.comparisons)
    }

    /// The agreed match position, `None` if not found or if runs disagree.
    pub fn position(&self) -> Option<usize> {
        if self.positions_agree {
            self.runs.first().and_then(|r| r.position)
        } else {
            None
        }
    }

    /// How many times fewer comparisons `algorithm` needed than the naive scan.
    ///
    /// `Some(0.0)` when `algorithm` performed no comparisons at all.
    pub fn speedup_vs_naive(&self, algorithm: Algorithm) -> Option<f64> {
        let naive = self.comparisons(Algorithm::Naive)?;
        let other = self.comparisons(algorithm)?;
        if other == 0 {
            Some(0.0)
        } else {
            Some(naive as f64 / other as f64)
        }
    }

    fn improvement(&self, baseline: Algorithm) -> Option<f64> {
        let base = self.comparisons(baseline)?;
        let fbas = self.comparisons(Algorithm::Fbas)?;
        if base == 0 {
            return None;
        }
        Some((base as f64 - fbas as f64) / base as f64 * 100.0)
    }
}

/// Aggregates over every pattern of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub patterns: usize,
    /// Sum of comparisons per algorithm.
    pub total_comparisons: BTreeMap<Algorithm, u64>,
    /// Mean FBAS improvement over BMH; patterns without a value count as 0.
    pub average_improvement_vs_bmh: Option<f64>,
    /// Mean FBAS improvement over the naive scan; patterns without a value count as 0.
    pub average_improvement_vs_naive: Option<f64>,
    /// Patterns on which FBAS needed fewer comparisons than BMH.
    pub fbas_wins_vs_bmh: usize,
    /// Patterns on which the algorithms reported different positions.
    pub disagreements: usize,
}

impl Summary {
    /// Summarize `reports`, which were produced with `algorithms`.
    pub fn from_reports(reports: &[PatternReport], algorithms: &[Algorithm]) -> Self {
        let mut total_comparisons = BTreeMap::new();
        for &algorithm in algorithms {
            let total = reports.iter().filter_map(|r| r.comparisons(algorithm)).sum();
            total_comparisons.insert(algorithm, total);
        }

        let has = |a: Algorithm| algorithms.contains(&a);
        let average = |f: fn(&PatternReport) -> Option<f64>| {
            if reports.is_empty() {
                return None;
            }
            let sum: f64 = reports.iter().map(|r| f(r).unwrap_or(0.0)).sum();
            Some(sum / reports.len() as f64)
        };

        let fbas = has(Algorithm::Fbas);
        Summary {
            patterns: reports.len(),
            total_comparisons,
            average_improvement_vs_bmh: if fbas && has(Algorithm::Bmh) {
                average(|r| r.improvement_vs_bmh)
            } else {
                None
            },
            average_improvement_vs_naive: if fbas && has(Algorithm::Naive) {
                average(|r| r.improvement_vs_naive)
            } else {
                None
            },
            fbas_wins_vs_bmh: reports
                .iter()
                .filter(|r| r.improvement_vs_bmh.is_some_and(|i| i > 0.0))
                .count(),
            disagreements: reports.iter().filter(|r| !r.positions_agree).count(),
        }
    }
}

/// Complete result of a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub corpus: String,
    /// Corpus length in characters.
    pub corpus_chars: usize,
    pub algorithms: Vec<Algorithm>,
    pub generated_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub patterns: Vec<PatternReport>,
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(algorithm: Algorithm, position: Option<usize>, comparisons: u64) -> AlgorithmRun {
        AlgorithmRun {
            algorithm,
            position,
            comparisons,
        }
    }

    fn report(pattern: &str, counts: [u64; 4]) -> PatternReport {
        let runs = Algorithm::ALL
            .iter()
            .zip(counts)
            .map(|(&a, c)| run(a, Some(3), c))
            .collect();
        PatternReport::new(pattern.to_string(), pattern.chars().count(), runs, None)
    }

    #[test]
    fn test_improvements() {
        let r = report("luce", [1000, 900, 400, 300]);
        assert_eq!(r.improvement_vs_bmh, Some(25.0));
        assert_eq!(r.improvement_vs_naive, Some(70.0));
        assert!(r.positions_agree);
        assert_eq!(r.position(), Some(3));
        assert_eq!(r.speedup_vs_naive(Algorithm::Bmh), Some(2.5));
    }

    #[test]
    fn test_zero_baseline_has_no_improvement() {
        let r = report("luce", [0, 0, 0, 0]);
        assert_eq!(r.improvement_vs_bmh, None);
        assert_eq!(r.speedup_vs_naive(Algorithm::Fbas), Some(0.0));
    }

    #[test]
    fn test_disagreement_detected() {
        let runs = vec![
            run(Algorithm::Naive, Some(3), 10),
            run(Algorithm::Bmh, Some(4), 5),
        ];
        let r = PatternReport::new("x".into(), 1, runs, None);
        assert!(!r.positions_agree);
        assert_eq!(r.position(), None);
        // FBAS did not run
        assert_eq!(r.improvement_vs_bmh, None);
    }

    #[test]
    fn test_summary() {
        let reports = vec![
            report("luce", [1000, 900, 400, 300]),
            report("amor", [1000, 900, 400, 500]),
            report("zero", [0, 0, 0, 0]),
        ];
        let summary = Summary::from_reports(&reports, &Algorithm::ALL);

        assert_eq!(summary.patterns, 3);
        assert_eq!(summary.total_comparisons[&Algorithm::Naive], 2000);
        assert_eq!(summary.total_comparisons[&Algorithm::Fbas], 800);
        assert_eq!(summary.fbas_wins_vs_bmh, 1);
        assert_eq!(summary.disagreements, 0);
        // (25 - 25 + 0) / 3
        assert_eq!(summary.average_improvement_vs_bmh, Some(0.0));
        // (70 + 50 + 0) / 3
        assert_eq!(summary.average_improvement_vs_naive, Some(40.0));
    }

    #[test]
    fn test_summary_without_fbas() {
        let summary = Summary::from_reports(&[], &[Algorithm::Naive, Algorithm::Kmp]);
        assert_eq!(summary.average_improvement_vs_bmh, None);
        assert_eq!(summary.total_comparisons.len(), 2);
    }
}
