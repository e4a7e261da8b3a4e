use memchr::memmem;

use crate::pattern::is_plain_literal;

use super::backtrack::{Anchoring, Backtracker, load_chars};

/// Per-call knobs for the search functions. The pattern is assumed to have
/// passed [`validate_pattern`](crate::pattern::validate_pattern).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub case_sensitive: bool,
    pub memoize: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            memoize: true,
        }
    }
}

impl SearchOptions {
    pub fn with_case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    pub fn with_memoize(mut self, value: bool) -> Self {
        self.memoize = value;
        self
    }
}

#[tracing::instrument(
    level = "trace",
    skip(options),
    fields(text=%text, pattern=%pattern, case_sensitive=options.case_sensitive)
)]
pub fn whole_matches(text: &str, pattern: &str, options: SearchOptions) -> bool {
    let text = load_chars(text, options.case_sensitive);
    let pattern = load_chars(pattern, options.case_sensitive);

    Backtracker::new(&text, &pattern, Anchoring::Full, options.memoize).matches_from(0)
}

#[tracing::instrument(
    level = "trace",
    skip(options),
    fields(text=%text, pattern=%pattern, case_sensitive=options.case_sensitive)
)]
pub fn contains(text: &str, pattern: &str, options: SearchOptions) -> bool {
    if options.case_sensitive && is_plain_literal(pattern) {
        return memmem::find(text.as_bytes(), pattern.as_bytes()).is_some();
    }

    let text = load_chars(text, options.case_sensitive);
    let pattern = load_chars(pattern, options.case_sensitive);
    let mut backtracker = Backtracker::new(&text, &pattern, Anchoring::Prefix, options.memoize);

    (0..=text.len()).any(|start| backtracker.matches_from(start))
}

#[tracing::instrument(
    level = "trace",
    skip(options),
    fields(text=%text, pattern=%pattern, case_sensitive=options.case_sensitive)
)]
pub fn count_matches(text: &str, pattern: &str, options: SearchOptions) -> usize {
    match_offsets(text, pattern, options).len()
}

/// Char offsets `i` in `[0, len)` where some prefix of the text from `i`
/// matches the whole pattern. Each offset appears once, in order.
///
/// Case-insensitive searches run over `str::to_lowercase` of the text, and
/// the offsets index that lowered text, which can be longer than the input.
#[tracing::instrument(
    level = "trace",
    skip(options),
    fields(text=%text, pattern=%pattern, case_sensitive=options.case_sensitive)
)]
pub fn match_offsets(text: &str, pattern: &str, options: SearchOptions) -> Vec<usize> {
    let text = load_chars(text, options.case_sensitive);
    let pattern = load_chars(pattern, options.case_sensitive);
    let mut backtracker = Backtracker::new(&text, &pattern, Anchoring::Prefix, options.memoize);

    (0..text.len())
        .filter(|&start| backtracker.matches_from(start))
        .collect()
}
