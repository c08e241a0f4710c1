//! Knuth-Morris-Pratt matcher.
//!
//! The prefix table lets the scan fall back inside the pattern instead of
//! moving the text pointer backwards, so every text character is read a
//! bounded number of times.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matcher::{Algorithm, MatchResult, Matcher};
use crate::pattern::Pattern;

/// Longest-proper-prefix-which-is-also-suffix table.
///
/// `table[i]` is the length of the longest proper prefix of the pattern that
/// is also a suffix of `pattern[0..=i]`. Always `table[0] == 0` and
/// `table[i] <= i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixTable {
    lps: Vec<usize>,
}

impl PrefixTable {
    /// Compute the prefix table of `pattern`.
    pub fn build(pattern: &[char]) -> Self {
        let m = pattern.len();
        let mut lps = vec![0; m];
        let mut length = 0;
        let mut i = 1;

        while i < m {
            if pattern[i] == pattern[length] {
                length += 1;
                lps[i] = length;
                i += 1;
            } else if length != 0 {
                // retry the same i against a shorter border
                length = lps[length - 1];
            } else {
                lps[i] = 0;
                i += 1;
            }
        }

        PrefixTable { lps }
    }

    /// The raw table.
    pub fn as_slice(&self) -> &[usize] {
        &self.lps
    }
}

impl Deref for PrefixTable {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.lps
    }
}

/// Linear-time matcher driven by a [`PrefixTable`].
#[derive(Debug, Clone)]
pub struct KmpMatcher {
    pattern: Pattern,
    lps: PrefixTable,
}

impl KmpMatcher {
    /// Create a new KMP matcher.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self::with_pattern(Pattern::new(pattern)?))
    }

    /// Create a KMP matcher from a validated pattern.
    pub fn with_pattern(pattern: Pattern) -> Self {
        let lps = PrefixTable::build(&pattern);
        KmpMatcher { pattern, lps }
    }

    /// The precomputed prefix table.
    pub fn prefix_table(&self) -> &PrefixTable {
        &self.lps
    }

    /// Search and invoke `on_step` with the text pointer before every
    /// counted comparison.
    pub(crate) fn find_traced<F>(&self, text: &[char], mut on_step: F) -> MatchResult
    where
        F: FnMut(usize),
    {
        let n = text.len();
        let m = self.pattern.len();
        let mut comparisons = 0;
        let mut i = 0;
        let mut j = 0;

        while i < n {
            on_step(i);
            comparisons += 1;
            if self.pattern[j] == text[i] {
                i += 1;
                j += 1;
            }
            if j == m {
                return MatchResult::found(i - j, comparisons);
            }

            // Fall back within the same step; this recheck is not counted.
            if i < n && self.pattern[j] != text[i] {
                if j > 0 {
                    j = self.lps[j - 1];
                } else {
                    i += 1;
                }
            }
        }

        MatchResult::not_found(comparisons)
    }
}

impl Matcher for KmpMatcher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Kmp
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn find(&self, text: &[char]) -> MatchResult {
        let mut last = 0;
        self.find_traced(text, |i| {
            debug_assert!(i >= last, "text pointer moved backwards");
            last = i;
        })
    }
}
