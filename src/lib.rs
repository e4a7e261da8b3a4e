//! Backtracking regular-expression matching without an automaton.
//!
//! Supported syntax: literals, `.`, the quantifiers `*`, `+` and `?`,
//! bracket classes (`[abc]`, `[a-z]`, `[^abc]`), and the anchors `^`/`$`.
//!
//! ```
//! use backtrack_regex_rs::{contains, count_matches, whole_matches};
//!
//! assert!(whole_matches("abb", "a*bb", true).unwrap());
//! assert!(!whole_matches("abb", "a*bbb", true).unwrap());
//! assert!(contains("hello world", "wor", true).unwrap());
//! assert_eq!(count_matches("aaa", "a", true).unwrap(), 3);
//! ```
pub mod cache;
pub mod errors;
pub mod matcher;
pub mod pattern;
pub mod repl;

pub use cache::{CacheMetrics, MatchCache, MatchCacheKey, MatchOperation, MatchOutcome};
pub use errors::{MatchError, MatchResult};
pub use matcher::{Matcher, MatcherOptions, SearchOptions};
pub use pattern::{PatternSyntaxError, SyntaxErrorKind, validate_pattern};

/// True iff the entire text is consumed by the entire pattern.
pub fn whole_matches(text: &str, pattern: &str, case_sensitive: bool) -> MatchResult<bool> {
    Matcher::default().whole_matches(text, pattern, case_sensitive)
}

/// True iff the pattern matches a prefix of some suffix of the text.
pub fn contains(text: &str, pattern: &str, case_sensitive: bool) -> MatchResult<bool> {
    Matcher::default().contains(text, pattern, case_sensitive)
}

/// Number of distinct start offsets at which the pattern matches.
pub fn count_matches(text: &str, pattern: &str, case_sensitive: bool) -> MatchResult<usize> {
    Matcher::default().count_matches(text, pattern, case_sensitive)
}
