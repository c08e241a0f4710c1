//! Search patterns.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{PatmatchError, Result};

/// An immutable, non-empty sequence of characters to search for.
///
/// Characters are Unicode scalar values, so positions reported by the
/// matchers are character offsets, not byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern {
    chars: Vec<char>,
}

impl Pattern {
    /// Create a pattern from a string slice.
    pub fn new(pattern: &str) -> Result<Self> {
        Self::from_chars(pattern.chars().collect())
    }

    /// Create a pattern from an already decoded character sequence.
    pub fn from_chars(chars: Vec<char>) -> Result<Self> {
        if chars.is_empty() {
            return Err(PatmatchError::invalid_pattern("pattern must not be empty"));
        }
        Ok(Pattern { chars })
    }

    /// Pattern length in characters.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// The characters of the pattern.
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl Deref for Pattern {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Pattern {
    type Error = PatmatchError;

    fn try_from(value: String) -> Result<Self> {
        Pattern::new(&value)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = PatmatchError;

    fn try_from(value: &str) -> Result<Self> {
        Pattern::new(value)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.chars.into_iter().collect()
    }
}
