//! Exact single-pattern matchers that count character comparisons.
//!
//! Every matcher is built once from a [`Pattern`] (paying its preprocessing
//! cost up front) and can then be run against any number of texts. A search
//! reports the first match position together with the number of elementary
//! character comparisons it performed:
//!
//! - [`NaiveMatcher`]: brute-force scan, the correctness baseline
//! - [`KmpMatcher`]: prefix-function scan that never re-reads the text
//! - [`BmhMatcher`]: bad-character skip scan, right-to-left windows
//! - [`FbasMatcher`]: BMH skips, but checks the rarest pattern character first
//!
//! Searching takes `&self`, so a single matcher can be shared between
//! threads. [`Session`] wraps a matcher for callers that prefer reading the
//! comparison count back after the search.

pub mod bmh;
pub mod fbas;
pub mod kmp;
pub mod naive;
pub mod rarity;
pub mod session;
pub mod shift;

pub use bmh::BmhMatcher;
pub use fbas::{AnchorInfo, FbasMatcher};
pub use kmp::{KmpMatcher, PrefixTable};
pub use naive::NaiveMatcher;
pub use session::Session;
pub use shift::ShiftTable;

use std::fmt::{self, Debug};
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PatmatchError, Result};
use crate::pattern::Pattern;

/// Outcome of a single search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    /// Character offset of the first full match, `None` when not found.
    pub position: Option<usize>,
    /// Elementary character comparisons performed during the call.
    pub comparisons: u64,
}

impl MatchResult {
    /// A result for a search that located the pattern.
    pub fn found(position: usize, comparisons: u64) -> Self {
        MatchResult {
            position: Some(position),
            comparisons,
        }
    }

    /// A result for a search that exhausted the text.
    pub fn not_found(comparisons: u64) -> Self {
        MatchResult {
            position: None,
            comparisons,
        }
    }

    /// Whether the pattern was found.
    pub fn is_match(&self) -> bool {
        self.position.is_some()
    }

    /// The position with the conventional `-1` sentinel for "not found".
    pub fn position_or_sentinel(&self) -> i64 {
        self.position.map_or(-1, |p| p as i64)
    }
}

/// Common contract of all matchers.
pub trait Matcher: Send + Sync + Debug {
    /// The algorithm implemented by this matcher.
    fn algorithm(&self) -> Algorithm;

    /// The pattern this matcher was built for.
    fn pattern(&self) -> &Pattern;

    /// Search `text` for the first occurrence of the pattern.
    fn find(&self, text: &[char]) -> MatchResult;
}

/// The available matching algorithms.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Brute-force scan
    Naive,
    /// Knuth-Morris-Pratt
    Kmp,
    /// Boyer-Moore-Horspool
    Bmh,
    /// Frequency-based anchor search
    Fbas,
}

impl Algorithm {
    /// All algorithms, in reporting order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Naive,
        Algorithm::Kmp,
        Algorithm::Bmh,
        Algorithm::Fbas,
    ];

    /// Short lowercase identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Kmp => "kmp",
            Algorithm::Bmh => "bmh",
            Algorithm::Fbas => "fbas",
        }
    }

    /// Display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Naive => "Naive",
            Algorithm::Kmp => "KMP",
            Algorithm::Bmh => "BMH",
            Algorithm::Fbas => "FBAS",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = PatmatchError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PatmatchError::invalid_config(format!("unknown algorithm '{s}'")))
    }
}

/// Build a boxed matcher for `algorithm` over `pattern`.
pub fn build(algorithm: Algorithm, pattern: Pattern) -> Box<dyn Matcher> {
    match algorithm {
        Algorithm::Naive => Box::new(NaiveMatcher::with_pattern(pattern)),
        Algorithm::Kmp => Box::new(KmpMatcher::with_pattern(pattern)),
        Algorithm::Bmh => Box::new(BmhMatcher::with_pattern(pattern)),
        Algorithm::Fbas => Box::new(FbasMatcher::with_pattern(pattern)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("kmp".parse::<Algorithm>().unwrap(), Algorithm::Kmp);
        assert_eq!("FBAS".parse::<Algorithm>().unwrap(), Algorithm::Fbas);
        assert!("boyer".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::Bmh.to_string(), "BMH");
    }

    #[test]
    fn test_match_result_sentinel() {
        assert_eq!(MatchResult::found(7, 12).position_or_sentinel(), 7);
        assert_eq!(MatchResult::not_found(3).position_or_sentinel(), -1);
        assert!(!MatchResult::default().is_match());
    }

    #[test]
    fn test_build_dispatches_every_algorithm() {
        let text = chars("nel mezzo del cammin di nostra vita");
        for algorithm in Algorithm::ALL {
            let matcher = build(algorithm, Pattern::new("cammin").unwrap());
            assert_eq!(matcher.algorithm(), algorithm);
            assert_eq!(matcher.pattern().to_string(), "cammin");
            assert_eq!(matcher.find(&text).position, Some(14));
        }
    }

    #[test]
    fn test_matchers_are_shareable_across_threads() {
        let matcher = build(Algorithm::Fbas, Pattern::new("vita").unwrap());
        let text = chars("nel mezzo del cammin di nostra vita");
        let expected = matcher.find(&text);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| matcher.find(&text)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
