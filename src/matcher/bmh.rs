//! Boyer-Moore-Horspool matcher.

use crate::error::Result;
use crate::matcher::shift::ShiftTable;
use crate::matcher::{Algorithm, MatchResult, Matcher};
use crate::pattern::Pattern;

/// Compares each window right to left and skips ahead using the character
/// under the window's last position.
#[derive(Debug, Clone)]
pub struct BmhMatcher {
    pattern: Pattern,
    shifts: ShiftTable,
}

impl BmhMatcher {
    /// Create a new BMH matcher.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self::with_pattern(Pattern::new(pattern)?))
    }

    /// Create a BMH matcher from a validated pattern.
    pub fn with_pattern(pattern: Pattern) -> Self {
        let shifts = ShiftTable::build(&pattern);
        BmhMatcher { pattern, shifts }
    }

    /// The precomputed bad-character table.
    pub fn shift_table(&self) -> &ShiftTable {
        &self.shifts
    }
}

impl Matcher for BmhMatcher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bmh
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn find(&self, text: &[char]) -> MatchResult {
        let n = text.len();
        let m = self.pattern.len();
        let mut comparisons = 0;
        let mut i = 0;

        while i + m <= n {
            let window = &text[i..i + m];
            let mut matched = true;
            for j in (0..m).rev() {
                comparisons += 1;
                if window[j] != self.pattern[j] {
                    matched = false;
                    break;
                }
            }
            if matched {
                return MatchResult::found(i, comparisons);
            }

            i += self.shifts.shift(window[m - 1]);
        }

        MatchResult::not_found(comparisons)
    }
}
