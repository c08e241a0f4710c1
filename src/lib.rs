//! # patmatch
//!
//! Exact single-pattern string matchers that count the character comparisons
//! they perform, plus a harness to compare them over a text corpus.
//!
//! ## Matchers
//!
//! - Naive brute-force scan
//! - Knuth-Morris-Pratt
//! - Boyer-Moore-Horspool
//! - FBAS: Horspool shifts with a rarest-character-first check
//!
//! ```
//! use patmatch::prelude::*;
//!
//! let text: Vec<char> = "nel mezzo del cammin di nostra vita".chars().collect();
//! let matcher = FbasMatcher::new("cammin")?;
//! let result = matcher.find(&text);
//!
//! assert_eq!(result.position, Some(14));
//! assert_eq!(matcher.anchor_info().anchor_char, 'm');
//! # Ok::<(), patmatch::error::PatmatchError>(())
//! ```

pub mod bench;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod matcher;
pub mod pattern;

pub mod prelude {
    pub use crate::corpus::Corpus;
    pub use crate::error::{PatmatchError, Result};
    pub use crate::matcher::{
        Algorithm, AnchorInfo, BmhMatcher, FbasMatcher, KmpMatcher, MatchResult, Matcher,
        NaiveMatcher, Session,
    };
    pub use crate::pattern::Pattern;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
