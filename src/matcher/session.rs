//! Accessor-style search API.

use crate::matcher::{MatchResult, Matcher};

/// Wraps a matcher and remembers the outcome of its most recent search.
///
/// `search` takes `&mut self`, so a session can only be driven by one caller
/// at a time. Share the inner matcher (or build one per thread) for
/// concurrent use.
#[derive(Debug, Clone)]
pub struct Session<M> {
    matcher: M,
    last: Option<MatchResult>,
}

impl<M: Matcher> Session<M> {
    /// Create a session around `matcher`.
    pub fn new(matcher: M) -> Self {
        Session {
            matcher,
            last: None,
        }
    }

    /// Search `text` and record the comparison count.
    pub fn search(&mut self, text: &[char]) -> Option<usize> {
        let result = self.matcher.find(text);
        self.last = Some(result);
        result.position
    }

    /// Comparisons performed by the most recent search, 0 before any search.
    pub fn comparisons(&self) -> u64 {
        self.last.map_or(0, |r| r.comparisons)
    }

    /// Full result of the most recent search.
    pub fn last_result(&self) -> Option<MatchResult> {
        self.last
    }

    /// The wrapped matcher.
    pub fn matcher(&self) -> &M {
        &self.matcher
    }
}
