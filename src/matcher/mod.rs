mod backtrack;
mod memo;
mod options;
mod search;
mod service;

pub use options::{
    DEFAULT_CACHE_CAPACITY, MatcherConfigError, MatcherOptions, MatcherOptionsBuilder,
};
pub use search::{SearchOptions, contains, count_matches, match_offsets, whole_matches};
pub use service::Matcher;
