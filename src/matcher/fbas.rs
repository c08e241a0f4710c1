//! Frequency-based anchor search.
//!
//! A Horspool variant that, for every window, first checks the pattern's
//! statistically rarest character (the anchor). Windows that do not contain
//! the anchor are rejected after a single comparison. When the anchor matches,
//! the remaining positions are verified left to right, skipping the anchor.
//! Window advancement is identical to [`BmhMatcher`](super::BmhMatcher), so
//! only the comparison count differs, never the reported position.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matcher::rarity;
use crate::matcher::shift::ShiftTable;
use crate::matcher::{Algorithm, MatchResult, Matcher};
use crate::pattern::Pattern;

/// The character FBAS checks first in every window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorInfo {
    /// The anchor character as it appears in the pattern.
    pub anchor_char: char,
    /// Index of the anchor inside the pattern.
    pub anchor_index: usize,
    /// Rarity score of the anchor (lower is rarer).
    pub rarity_score: u32,
}

impl AnchorInfo {
    /// Select the rarest character of `pattern`.
    ///
    /// Returns `None` only for an empty slice. Ties go to the lowest index.
    pub fn select(pattern: &[char]) -> Option<Self> {
        let mut best: Option<AnchorInfo> = None;
        for (index, &c) in pattern.iter().enumerate() {
            let score = rarity::score(c);
            if best.is_none_or(|b| score < b.rarity_score) {
                best = Some(AnchorInfo {
                    anchor_char: c,
                    anchor_index: index,
                    rarity_score: score,
                });
            }
        }
        best
    }
}

/// Anchor-first matcher with Horspool shifts.
#[derive(Debug, Clone)]
pub struct FbasMatcher {
    pattern: Pattern,
    anchor: AnchorInfo,
    shifts: ShiftTable,
}

impl FbasMatcher {
    /// Create a new FBAS matcher.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self::with_pattern(Pattern::new(pattern)?))
    }

    /// Create an FBAS matcher from a validated pattern.
    pub fn with_pattern(pattern: Pattern) -> Self {
        let anchor = AnchorInfo::select(&pattern).unwrap_or(AnchorInfo {
            anchor_char: pattern[0],
            anchor_index: 0,
            rarity_score: rarity::score(pattern[0]),
        });
        let shifts = ShiftTable::build(&pattern);
        FbasMatcher {
            pattern,
            anchor,
            shifts,
        }
    }

    /// The anchor chosen at construction.
    pub fn anchor_info(&self) -> AnchorInfo {
        self.anchor
    }

    /// The precomputed bad-character table.
    pub fn shift_table(&self) -> &ShiftTable {
        &self.shifts
    }

    fn verify_rest(&self, window: &[char], comparisons: &mut u64) -> bool {
        for (i, (&p, &t)) in self.pattern.iter().zip(window).enumerate() {
            if i == self.anchor.anchor_index {
                continue;
            }
            *comparisons += 1;
            if p != t {
                return false;
            }
        }
        true
    }
}

impl Matcher for FbasMatcher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fbas
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn find(&self, text: &[char]) -> MatchResult {
        let n = text.len();
        let m = self.pattern.len();
        let mut comparisons = 0;
        let mut current = 0;

        while current + m <= n {
            let window = &text[current..current + m];

            comparisons += 1;
            if window[self.anchor.anchor_index] == self.anchor.anchor_char
                && self.verify_rest(window, &mut comparisons)
            {
                return MatchResult::found(current, comparisons);
            }

            current += self.shifts.shift(window[m - 1]);
        }

        MatchResult::not_found(comparisons)
    }
}
