use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::SearchOptions;

pub const DEFAULT_CACHE_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MatcherOptions {
    pub memoize: bool,
    pub cache_results: bool,
    pub cache_capacity: usize,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            memoize: true,
            cache_results: false,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl MatcherOptions {
    pub fn builder() -> MatcherOptionsBuilder {
        MatcherOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), MatcherConfigError> {
        if self.cache_results && self.cache_capacity == 0 {
            return Err(MatcherConfigError::CacheCapacityInvalid {
                provided: self.cache_capacity,
            });
        }
        Ok(())
    }

    pub(crate) fn search(&self, case_sensitive: bool) -> SearchOptions {
        SearchOptions {
            case_sensitive,
            memoize: self.memoize,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct MatcherOptionsBuilder {
    options: MatcherOptions,
}

impl MatcherOptionsBuilder {
    pub fn memoize(mut self, value: bool) -> Self {
        self.options.memoize = value;
        self
    }

    pub fn cache_results(mut self, value: bool) -> Self {
        self.options.cache_results = value;
        self
    }

    pub fn cache_capacity(mut self, value: usize) -> Self {
        self.options.cache_capacity = value;
        self
    }

    pub fn build(self) -> Result<MatcherOptions, MatcherConfigError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatcherConfigError {
    #[error("cache_capacity must be at least 1 when cache_results is enabled (got {provided})")]
    CacheCapacityInvalid { provided: usize },
}
