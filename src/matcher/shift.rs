//! Bad-character shift table shared by the Horspool-style matchers.

use ahash::AHashMap;

/// Maps a character to the distance the search window may advance when that
/// character sits under the window's last position.
///
/// Every pattern character except the final one gets `m - 1 - index` of its
/// rightmost occurrence; anything else shifts by the full pattern length.
#[derive(Debug, Clone)]
pub struct ShiftTable {
    shifts: AHashMap<char, usize>,
    pattern_len: usize,
}

impl ShiftTable {
    /// Build the table for `pattern`.
    pub fn build(pattern: &[char]) -> Self {
        let m = pattern.len();
        let mut shifts = AHashMap::with_capacity(m);

        // later occurrences overwrite earlier ones, keeping the smallest shift
        for (index, &c) in pattern.iter().enumerate().take(m.saturating_sub(1)) {
            shifts.insert(c, m - 1 - index);
        }

        ShiftTable {
            shifts,
            pattern_len: m,
        }
    }

    /// Shift for `c`, falling back to the pattern length.
    #[inline]
    pub fn shift(&self, c: char) -> usize {
        self.shifts.get(&c).copied().unwrap_or(self.pattern_len)
    }

    /// The explicit entry for `c`, if the table has one.
    pub fn get(&self, c: char) -> Option<usize> {
        self.shifts.get(&c).copied()
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Whether the table has no explicit entries (single-character patterns).
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Explicit entries sorted by character.
    pub fn entries(&self) -> Vec<(char, usize)> {
        let mut entries: Vec<(char, usize)> = self.shifts.iter().map(|(&c, &s)| (c, s)).collect();
        entries.sort_unstable();
        entries
    }
}
