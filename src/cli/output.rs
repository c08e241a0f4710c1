//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::bench::{AlgorithmRun, BenchmarkReport, PatternReport};
use crate::cli::args::{OutputFormat, PatmatchArgs};
use crate::error::Result;
use crate::matcher::{Algorithm, AnchorInfo};

const RULE_WIDTH: usize = 70;

/// Result structure for single-pattern searches.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub pattern: String,
    pub source: String,
    pub text_chars: usize,
    pub results: Vec<AlgorithmRun>,
}

/// One explicit shift table entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShiftEntry {
    pub character: char,
    pub shift: usize,
}

/// Result structure for anchor inspection.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnchorReport {
    pub pattern: String,
    pub length: usize,
    pub anchor: AnchorInfo,
    pub shift_table: Vec<ShiftEntry>,
    /// Shift for characters absent from the table.
    pub default_shift: usize,
}

/// Types that know how to present themselves on a terminal.
pub trait Render: Serialize {
    /// Print in human-readable form.
    fn print_human(&self, args: &PatmatchArgs);

    /// Value handed to the CSV writer; arrays of flat objects become rows.
    fn csv_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Render>(message: &str, result: &T, args: &PatmatchArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result, args),
        OutputFormat::Yaml => output_yaml(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Render>(message: &str, result: &T, args: &PatmatchArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    result.print_human(args);
    Ok(())
}

impl Render for BenchmarkReport {
    fn print_human(&self, args: &PatmatchArgs) {
        println!("{}", "=".repeat(RULE_WIDTH));
        println!("PATTERN MATCHING COMPARISON");
        println!(
            "Corpus: {} ({} characters)",
            self.corpus,
            format_count(self.corpus_chars as u64)
        );
        println!("{}", "=".repeat(RULE_WIDTH));

        for report in &self.patterns {
            print_pattern_report(report);
        }

        if args.verbosity() > 1 && self.algorithms.contains(&Algorithm::Naive) {
            print_speedups(self);
        }

        let summary = &self.summary;
        println!();
        println!("{}", "=".repeat(RULE_WIDTH));
        println!("FINAL STATISTICS");
        println!("{}", "=".repeat(RULE_WIDTH));
        println!();
        println!("Total comparisons (sum over all patterns):");
        for (algorithm, total) in &summary.total_comparisons {
            let label = format!("{}:", algorithm.label());
            println!("  {label:<7} {:>15}", format_count(*total));
        }

        if let Some(avg) = summary.average_improvement_vs_bmh {
            println!();
            println!("Average improvement:");
            println!("  FBAS vs BMH:   {}", format_percent(avg));
            if let Some(avg) = summary.average_improvement_vs_naive {
                println!("  FBAS vs Naive: {}", format_percent(avg));
            }
            println!();
            println!(
                "FBAS wins vs BMH: {}/{} patterns",
                summary.fbas_wins_vs_bmh, summary.patterns
            );
        }

        if summary.disagreements > 0 {
            println!();
            println!(
                "WARNING: {} pattern(s) with disagreeing positions",
                summary.disagreements
            );
        }

        println!();
        println!("Completed in {}ms", self.duration_ms);
        println!("{}", "=".repeat(RULE_WIDTH));
    }

    fn csv_value(&self) -> Result<Value> {
        let rows = self
            .patterns
            .iter()
            .map(|report| {
                let mut row = serde_json::Map::new();
                row.insert("pattern".into(), json!(report.pattern));
                row.insert("length".into(), json!(report.length));
                row.insert(
                    "position".into(),
                    report.position().map_or(json!(-1), |p| json!(p)),
                );
                for run in &report.runs {
                    row.insert(run.column_name(), json!(run.comparisons));
                }
                if let Some(anchor) = &report.anchor {
                    row.insert("fbas_anchor".into(), json!(anchor.anchor_char));
                    row.insert("fbas_anchor_index".into(), json!(anchor.anchor_index));
                }
                row.insert("improvement_vs_bmh".into(), json!(report.improvement_vs_bmh));
                row.insert(
                    "improvement_vs_naive".into(),
                    json!(report.improvement_vs_naive),
                );
                Value::Object(row)
            })
            .collect();
        Ok(Value::Array(rows))
    }
}

/// Print one pattern block.
fn print_pattern_report(report: &PatternReport) {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Pattern: '{}' (length: {})", report.pattern, report.length);
    println!("{}", "=".repeat(RULE_WIDTH));

    for run in &report.runs {
        let label = format!("{}:", run.algorithm.label());
        println!(
            "{label:<15} {:>12} comparisons",
            format_count(run.comparisons)
        );
        if run.algorithm == Algorithm::Fbas
            && let Some(anchor) = &report.anchor
        {
            println!(
                "                (anchor: '{}' pos {}, rarity: {})",
                anchor.anchor_char, anchor.anchor_index, anchor.rarity_score
            );
        }
    }

    match report.position() {
        Some(position) => println!("Found at position {position}"),
        None if report.positions_agree => println!("Not found"),
        None => println!("WARNING: algorithms disagree on the position"),
    }

    if let Some(improvement) = report.improvement_vs_bmh {
        let symbol = if improvement > 0.0 { "✓" } else { "✗" };
        println!();
        println!(
            "{symbol} FBAS vs BMH:  {} comparisons",
            format_percent(improvement)
        );
    }
}

/// Print speedups relative to the naive scan.
fn print_speedups(report: &BenchmarkReport) {
    println!();
    println!("Speedup vs Naive:");
    println!("─────────────────");
    for pattern in &report.patterns {
        let speedups: Vec<String> = pattern
            .runs
            .iter()
            .filter(|r| r.algorithm != Algorithm::Naive)
            .filter_map(|r| {
                pattern
                    .speedup_vs_naive(r.algorithm)
                    .map(|s| format!("{} {s:.2}x", r.algorithm.label()))
            })
            .collect();
        println!("  {:<15} {}", truncate(&pattern.pattern, 15), speedups.join("  "));
    }
}

impl Render for SearchResults {
    fn print_human(&self, _args: &PatmatchArgs) {
        println!("Pattern: '{}'", self.pattern);
        println!(
            "Source: {} ({} characters)",
            self.source,
            format_count(self.text_chars as u64)
        );
        println!();
        for run in &self.results {
            let position = run
                .position
                .map_or_else(|| "not found".to_string(), |p| p.to_string());
            println!(
                "{:<6} position: {position:<10} comparisons: {:>12}",
                run.algorithm.label(),
                format_count(run.comparisons)
            );
        }
    }

    fn csv_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.results)?)
    }
}

impl Render for AnchorReport {
    fn print_human(&self, _args: &PatmatchArgs) {
        println!("Pattern: '{}' (length: {})", self.pattern, self.length);
        println!(
            "Anchor: '{}' at index {} (rarity score {})",
            self.anchor.anchor_char, self.anchor.anchor_index, self.anchor.rarity_score
        );
        println!();
        println!("Shift table:");
        for entry in &self.shift_table {
            println!("  {:?} -> {}", entry.character, entry.shift);
        }
        println!("  (other) -> {}", self.default_shift);
    }

    fn csv_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.shift_table)?)
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PatmatchArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
fn output_csv<T: Render>(result: &T, _args: &PatmatchArgs) -> Result<()> {
    match result.csv_value()? {
        Value::Array(arr) => {
            for (i, item) in arr.iter().enumerate() {
                if i == 0
                    && let Some(obj) = item.as_object()
                {
                    let headers: Vec<String> = obj.keys().cloned().collect();
                    println!("{}", headers.join(","));
                }

                if let Some(obj) = item.as_object() {
                    let values: Vec<String> = obj.values().map(format_csv_value).collect();
                    println!("{}", values.join(","));
                }
            }
        }
        Value::Object(obj) => {
            println!("key,value");
            for (key, value) in obj {
                let formatted_csv_value = format_csv_value(&value);
                println!("{key},{formatted_csv_value}");
            }
        }
        value => {
            println!("value");
            println!("{}", format_csv_value(&value));
        }
    }

    Ok(())
}

/// Output in YAML format.
fn output_yaml<T: Serialize>(result: &T, _args: &PatmatchArgs) -> Result<()> {
    // Convert to JSON value first, then format as simple YAML
    let value = serde_json::to_value(result)?;
    print_yaml_value(&value, 0);
    Ok(())
}

/// Print YAML value with indentation.
fn print_yaml_value(value: &Value, indent: usize) {
    let spaces = "  ".repeat(indent);

    match value {
        Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    Value::Object(_) | Value::Array(_) => {
                        println!("{spaces}{key}:");
                        print_yaml_value(val, indent + 1);
                    }
                    _ => {
                        let formatted_yaml_val = format_yaml_value(val);
                        println!("{spaces}{key}: {formatted_yaml_val}");
                    }
                }
            }
        }
        Value::Array(arr) => {
            for item in arr {
                match item {
                    Value::Object(_) | Value::Array(_) => {
                        println!("{spaces}-");
                        print_yaml_value(item, indent + 1);
                    }
                    _ => {
                        let formatted_yaml_item = format_yaml_value(item);
                        println!("{spaces}- {formatted_yaml_item}");
                    }
                }
            }
        }
        _ => {
            let formatted_yaml_value = format_yaml_value(value);
            println!("{formatted_yaml_value}");
        }
    }
}

/// Format a JSON value for YAML output.
fn format_yaml_value(value: &Value) -> String {
    match value {
        Value::String(s) => {
            if s.is_empty()
                || s.trim() != s
                || s.contains(['\n', '"', '\\', ':', '#', '\''])
            {
                let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
                format!("\"{escaped}\"")
            } else {
                s.clone()
            }
        }
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => "~".to_string(), // For complex types
    }
}

/// Format a JSON value for CSV output.
fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                let escaped = s.replace('"', "\"\"");
                format!("\"{escaped}\"")
            } else {
                s.clone()
            }
        }
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => "\"[object]\"".to_string(),
        Value::Null => "".to_string(),
    }
}

/// Format a count with thousands separators.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a signed percentage with two decimals.
fn format_percent(value: f64) -> String {
    format!("{value:+.2}%")
}

/// Shorten long patterns for column output.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let head: String = s.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(123456), "123,456");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.346), "+12.35%");
        assert_eq!(format_percent(-3.0), "-3.00%");
    }

    #[test]
    fn test_format_csv_value() {
        assert_eq!(format_csv_value(&Value::String("test".to_string())), "test");
        assert_eq!(
            format_csv_value(&Value::String("nel mezzo, del".to_string())),
            "\"nel mezzo, del\""
        );
        assert_eq!(format_csv_value(&json!(42)), "42");
        assert_eq!(format_csv_value(&Value::Null), "");
    }

    #[test]
    fn test_format_yaml_value() {
        assert_eq!(format_yaml_value(&json!("dante")), "dante");
        assert_eq!(format_yaml_value(&json!("ch'i'")), "\"ch'i'\"");
        assert_eq!(format_yaml_value(&json!(" ")), "\" \"");
        assert_eq!(format_yaml_value(&json!(null)), "null");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("amor", 15), "amor");
        assert_eq!(truncate("selva oscura e aspra", 15), "selva oscura e ...");
    }

    #[test]
    fn test_report_csv_rows() {
        use crate::bench::{BenchmarkConfig, BenchmarkRunner};
        use crate::corpus::Corpus;

        let report = BenchmarkRunner::new(BenchmarkConfig::new(["vita", "amor"]))
            .run(&Corpus::sample())
            .unwrap();
        let value = report.csv_value().unwrap();
        let rows = value.as_array().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["pattern"], "vita");
        assert!(rows[0]["fbas_comparisons"].is_u64());
        assert_eq!(rows[1]["fbas_anchor"], "m");
    }
}
