use hashbrown::HashMap as FastHashMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOperation {
    WholeMatch,
    Contains,
    Count,
    Offsets,
}

/// A finished result, shaped by the operation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Bool(bool),
    Count(usize),
    Offsets(Vec<usize>),
}

impl MatchOutcome {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<usize> {
        match self {
            Self::Count(value) => Some(*value),
            _ => None,
        }
    }

    pub fn into_offsets(self) -> Option<Vec<usize>> {
        match self {
            Self::Offsets(value) => Some(value),
            _ => None,
        }
    }

    /// Whether this outcome has the shape `operation` produces.
    pub fn answers(&self, operation: MatchOperation) -> bool {
        matches!(
            (operation, self),
            (MatchOperation::WholeMatch | MatchOperation::Contains, Self::Bool(_))
                | (MatchOperation::Count, Self::Count(_))
                | (MatchOperation::Offsets, Self::Offsets(_))
        )
    }
}

/// Identity of one call: the operation and its exact arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchCacheKey {
    operation: MatchOperation,
    text: Box<str>,
    pattern: Box<str>,
    case_sensitive: bool,
}

impl MatchCacheKey {
    pub fn new(
        operation: MatchOperation,
        text: &str,
        pattern: &str,
        case_sensitive: bool,
    ) -> Self {
        Self {
            operation,
            text: text.into(),
            pattern: pattern.into(),
            case_sensitive,
        }
    }
}

/// Bounded least-recently-used store of finished match results.
///
/// `recency` holds keys from most to least recently used; its back is the
/// next eviction.
#[derive(Debug)]
pub struct MatchCache {
    capacity: usize,
    entries: FastHashMap<MatchCacheKey, MatchOutcome>,
    recency: VecDeque<MatchCacheKey>,
    evictions: u64,
}

impl MatchCache {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: FastHashMap::with_capacity(capacity),
            recency: VecDeque::with_capacity(capacity),
            evictions: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    pub fn contains_key(&self, key: &MatchCacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Looks up `key` and marks it most recently used on a hit.
    pub fn get(&mut self, key: &MatchCacheKey) -> Option<MatchOutcome> {
        let outcome = self.entries.get(key).cloned()?;
        self.mark_used(key);
        Some(outcome)
    }

    pub fn insert(&mut self, key: MatchCacheKey, outcome: MatchOutcome) {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = outcome;
            self.mark_used(&key);
            return;
        }

        if self.entries.len() >= self.capacity
            && let Some(stale) = self.recency.pop_back()
        {
            self.entries.remove(&stale);
            self.evictions += 1;
            tracing::trace!(operation = ?stale.operation, "match cache eviction");
        }

        self.recency.push_front(key.clone());
        self.entries.insert(key, outcome);
    }

    fn mark_used(&mut self, key: &MatchCacheKey) {
        if self.recency.front() == Some(key) {
            return;
        }
        self.recency.retain(|existing| existing != key);
        self.recency.push_front(key.clone());
    }
}

/// Point-in-time lookup counts for one matcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
}

impl CacheMetrics {
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups served from the cache, `0.0` before any lookup.
    pub fn hit_ratio(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct LookupCounters {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl LookupCounters {
    pub(crate) fn record(&self, hit: bool) {
        let counter = if hit { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn metrics(&self) -> CacheMetrics {
        CacheMetrics {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
