//! Static letter rarity scores used for anchor selection.
//!
//! Lower scores are rarer. The ranking follows standard Italian/English
//! letter frequencies. Characters outside the table, including accented
//! letters, digits, punctuation, whitespace and `v`, score [`DEFAULT_SCORE`].

/// Score of characters the table does not rank.
pub const DEFAULT_SCORE: u32 = 50;

/// Rarity score of `c`, matched case-insensitively.
pub fn score(c: char) -> u32 {
    let lower = c.to_lowercase().next().unwrap_or(c);
    match lower {
        'z' => 1,
        'j' => 2,
        'x' => 3,
        'q' => 4,
        'k' => 5,
        'b' => 10,
        'g' => 11,
        'h' => 12,
        'y' => 13,
        'p' => 14,
        'm' => 15,
        'u' => 16,
        'c' => 17,
        'l' => 18,
        'd' => 19,
        'r' => 20,
        'w' => 21,
        'f' => 22,
        's' => 23,
        'n' => 24,
        't' => 25,
        'i' => 26,
        'o' => 27,
        'a' => 28,
        'e' => 29,
        _ => DEFAULT_SCORE,
    }
}
