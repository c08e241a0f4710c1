//! Brute-force matcher.

use crate::error::Result;
use crate::matcher::{Algorithm, MatchResult, Matcher};
use crate::pattern::Pattern;

/// Tries every offset and compares left to right until the first mismatch.
///
/// Needs no preprocessing and serves as the reference the other matchers are
/// checked against.
#[derive(Debug, Clone)]
pub struct NaiveMatcher {
    pattern: Pattern,
}

impl NaiveMatcher {
    /// Create a new naive matcher.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self::with_pattern(Pattern::new(pattern)?))
    }

    /// Create a naive matcher from a validated pattern.
    pub fn with_pattern(pattern: Pattern) -> Self {
        NaiveMatcher { pattern }
    }
}

impl Matcher for NaiveMatcher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Naive
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn find(&self, text: &[char]) -> MatchResult {
        let m = self.pattern.len();
        let mut comparisons = 0;

        if text.len() < m {
            return MatchResult::not_found(comparisons);
        }

        for i in 0..=text.len() - m {
            let mut j = 0;
            while j < m {
                comparisons += 1;
                if text[i + j] != self.pattern[j] {
                    break;
                }
                j += 1;
            }
            if j == m {
                return MatchResult::found(i, comparisons);
            }
        }

        MatchResult::not_found(comparisons)
    }
}
