//! Integration tests for benchmark runs over corpora.

use patmatch::bench::{BenchmarkConfig, BenchmarkReport, BenchmarkRunner, DEFAULT_PATTERNS};
use patmatch::prelude::*;
use tempfile::TempDir;

#[test]
fn test_default_run_on_sample() -> Result<()> {
    let report = BenchmarkRunner::default().run(&Corpus::sample())?;

    assert_eq!(report.patterns.len(), DEFAULT_PATTERNS.len());
    assert_eq!(report.summary.patterns, DEFAULT_PATTERNS.len());
    assert_eq!(report.summary.disagreements, 0);
    assert_eq!(report.algorithms, Algorithm::ALL.to_vec());

    for pattern in &report.patterns {
        assert_eq!(pattern.runs.len(), 4);
        assert!(pattern.anchor.is_some());
    }

    // Totals are the sums of the per-pattern counts
    for algorithm in Algorithm::ALL {
        let sum: u64 = report
            .patterns
            .iter()
            .filter_map(|p| p.comparisons(algorithm))
            .sum();
        assert_eq!(report.summary.total_comparisons[&algorithm], sum);
    }

    Ok(())
}

#[test]
fn test_config_file_round_trip() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    let config = BenchmarkConfig::new(["paura", "notte"])
        .with_algorithms(vec![Algorithm::Bmh, Algorithm::Fbas])
        .with_parallel(false);
    config.save(&path)?;

    let loaded = BenchmarkConfig::from_file(&path)?;
    assert_eq!(loaded, config);

    let report = BenchmarkRunner::new(loaded).run(&Corpus::sample())?;
    let paura = &report.patterns[0];
    assert_eq!(paura.position(), Some(262));
    assert_eq!(paura.comparisons(Algorithm::Bmh), Some(81));
    assert_eq!(paura.comparisons(Algorithm::Fbas), Some(67));
    assert_eq!(paura.comparisons(Algorithm::Naive), None);
    assert!(paura.improvement_vs_bmh.unwrap() > 0.0);
    assert_eq!(paura.improvement_vs_naive, None);

    Ok(())
}

#[test]
fn test_corpus_from_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("canto.txt");
    std::fs::write(&path, "per me si va ne la città dolente")?;

    let corpus = Corpus::from_file(&path)?;
    let report = BenchmarkRunner::new(BenchmarkConfig::new(["città", "dolente"])).run(&corpus)?;

    assert_eq!(report.patterns[0].position(), Some(19));
    assert_eq!(report.patterns[1].position(), Some(25));
    assert_eq!(report.corpus_chars, 32);

    Ok(())
}

#[test]
fn test_synthetic_corpus_is_reproducible() -> Result<()> {
    let a = Corpus::synthetic(5_000, 99)?;
    let b = Corpus::synthetic(5_000, 99)?;
    assert_eq!(a, b);

    let runner = BenchmarkRunner::new(BenchmarkConfig::default().with_threads(2));
    let first = runner.run(&a)?;
    let second = runner.run(&b)?;
    assert_eq!(first.patterns, second.patterns);

    Ok(())
}

#[test]
fn test_report_serializes_to_json() -> Result<()> {
    let report = BenchmarkRunner::new(BenchmarkConfig::new(["vita"])).run(&Corpus::sample())?;

    let json = serde_json::to_string(&report)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["patterns"][0]["pattern"], "vita");
    assert_eq!(value["algorithms"][3], "fbas");

    let restored: BenchmarkReport = serde_json::from_str(&json)?;
    assert_eq!(restored.generated_at, report.generated_at);
    assert_eq!(restored.patterns[0].runs, report.patterns[0].runs);
    assert_eq!(restored.patterns[0].anchor, report.patterns[0].anchor);

    Ok(())
}

#[test]
fn test_invalid_configs_rejected() {
    let corpus = Corpus::sample();

    let err = BenchmarkRunner::new(BenchmarkConfig::new([""]))
        .run(&corpus)
        .unwrap_err();
    assert!(matches!(err, PatmatchError::InvalidPattern(_)));

    let err = BenchmarkRunner::new(BenchmarkConfig::default().with_algorithms(Vec::new()))
        .run(&corpus)
        .unwrap_err();
    assert!(matches!(err, PatmatchError::InvalidConfig(_)));
}
