use crate::cache::{
    CacheMetrics, LookupCounters, MatchCache, MatchCacheKey, MatchOperation, MatchOutcome,
};
use crate::errors::MatchResult;
use crate::pattern::validate_pattern;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::sync::Arc;

use super::{MatcherOptions, SearchOptions, search};

/// Validating front end over the search functions, with an optional shared
/// result cache.
#[derive(Debug, Clone)]
pub struct Matcher {
    options: MatcherOptions,
    cache: Option<Arc<RwLock<MatchCache>>>,
    lookups: Option<Arc<LookupCounters>>,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            options: MatcherOptions::default(),
            cache: None,
            lookups: None,
        }
    }
}

impl Matcher {
    pub fn new(options: Option<MatcherOptions>) -> MatchResult<Self> {
        let options = options.unwrap_or_default();
        options.validate()?;

        let cache = if options.cache_results {
            Some(Arc::new(RwLock::new(MatchCache::new(options.cache_capacity))))
        } else {
            None
        };
        let lookups = cache.as_ref().map(|_| Arc::new(LookupCounters::default()));

        Ok(Self {
            options,
            cache,
            lookups,
        })
    }

    /// Uses a caller-owned cache regardless of `cache_results`.
    pub fn with_cache(options: MatcherOptions, cache: Arc<RwLock<MatchCache>>) -> Self {
        Self {
            options,
            cache: Some(cache),
            lookups: Some(Arc::new(LookupCounters::default())),
        }
    }

    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    pub fn cache_metrics(&self) -> Option<CacheMetrics> {
        self.lookups.as_ref().map(|counters| counters.metrics())
    }

    #[tracing::instrument(skip(self), fields(operation = "whole_matches"))]
    pub fn whole_matches(
        &self,
        text: &str,
        pattern: &str,
        case_sensitive: bool,
    ) -> MatchResult<bool> {
        let outcome = self.run(MatchOperation::WholeMatch, text, pattern, case_sensitive)?;
        Ok(outcome.as_bool().unwrap_or_default())
    }

    #[tracing::instrument(skip(self), fields(operation = "contains"))]
    pub fn contains(&self, text: &str, pattern: &str, case_sensitive: bool) -> MatchResult<bool> {
        let outcome = self.run(MatchOperation::Contains, text, pattern, case_sensitive)?;
        Ok(outcome.as_bool().unwrap_or_default())
    }

    #[tracing::instrument(skip(self), fields(operation = "count_matches"))]
    pub fn count_matches(
        &self,
        text: &str,
        pattern: &str,
        case_sensitive: bool,
    ) -> MatchResult<usize> {
        let outcome = self.run(MatchOperation::Count, text, pattern, case_sensitive)?;
        Ok(outcome.as_count().unwrap_or_default())
    }

    /// Offsets are in chars; when `case_sensitive` is false they index the
    /// lowercased text.
    #[tracing::instrument(skip(self), fields(operation = "match_offsets"))]
    pub fn match_offsets(
        &self,
        text: &str,
        pattern: &str,
        case_sensitive: bool,
    ) -> MatchResult<Vec<usize>> {
        let outcome = self.run(MatchOperation::Offsets, text, pattern, case_sensitive)?;
        Ok(outcome.into_offsets().unwrap_or_default())
    }

    /// Validates, then answers from the cache or computes and stores. The
    /// returned outcome always has the shape `operation` produces.
    fn run(
        &self,
        operation: MatchOperation,
        text: &str,
        pattern: &str,
        case_sensitive: bool,
    ) -> MatchResult<MatchOutcome> {
        validate_pattern(pattern)?;

        let search = self.options.search(case_sensitive);

        let Some(cache) = self.cache.as_ref() else {
            return Ok(compute(operation, text, pattern, search));
        };

        let key = MatchCacheKey::new(operation, text, pattern, case_sensitive);

        let cached = {
            let guard = cache.upgradable_read();
            if guard.contains_key(&key) {
                RwLockUpgradableReadGuard::upgrade(guard).get(&key)
            } else {
                None
            }
        };
        // Entries inserted by hand through a shared cache may have the wrong shape.
        let cached = cached.filter(|outcome| outcome.answers(operation));

        if let Some(counters) = &self.lookups {
            counters.record(cached.is_some());
        }
        tracing::event!(
            tracing::Level::DEBUG,
            cache = if cached.is_some() { "hit" } else { "miss" },
            operation = ?operation,
            "match cache lookup"
        );

        if let Some(outcome) = cached {
            return Ok(outcome);
        }

        let outcome = compute(operation, text, pattern, search);
        cache.write().insert(key, outcome.clone());

        Ok(outcome)
    }
}

fn compute(
    operation: MatchOperation,
    text: &str,
    pattern: &str,
    options: SearchOptions,
) -> MatchOutcome {
    match operation {
        MatchOperation::WholeMatch => {
            MatchOutcome::Bool(search::whole_matches(text, pattern, options))
        }
        MatchOperation::Contains => MatchOutcome::Bool(search::contains(text, pattern, options)),
        MatchOperation::Count => MatchOutcome::Count(search::count_matches(text, pattern, options)),
        MatchOperation::Offsets => {
            MatchOutcome::Offsets(search::match_offsets(text, pattern, options))
        }
    }
}
