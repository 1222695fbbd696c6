//! Suggestion cache
//!
//! Look-aside cache for catalog search results. Each entry carries two
//! deadlines: past `valid_until` it is never served, past `purge_after` it
//! is physically dropped on the next insert.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use super::suggestion::Suggestion;

/// Default staleness window
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(5 * 60);
/// Default physical purge window
pub const DEFAULT_PURGE_AFTER: Duration = Duration::from_secs(10 * 60);

/// Cache key: a typed search term, or the listing shown before any term
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Listing,
    Term(String),
}

impl CacheKey {
    /// Key for a (possibly empty) search term
    pub fn for_term(term: &str) -> Self {
        if term.is_empty() {
            CacheKey::Listing
        } else {
            CacheKey::Term(term.to_string())
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<Suggestion>,
    valid_until: Instant,
    purge_after: Instant,
}

/// TTL cache of suggestion lists.
///
/// Concurrent misses on one key may each compute; the last store wins.
#[derive(Debug)]
pub struct SuggestionCache {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    stale_after: Duration,
    purge_after: Duration,
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_AFTER, DEFAULT_PURGE_AFTER)
    }
}

impl SuggestionCache {
    /// `purge_after` is raised to `stale_after` if shorter.
    pub fn new(stale_after: Duration, purge_after: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            stale_after,
            purge_after: purge_after.max(stale_after),
        }
    }

    /// Returns the fresh value for `key`, or computes, stores and returns it.
    pub async fn get_or_compute<F, Fut>(&self, key: CacheKey, compute: F) -> Vec<Suggestion>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Vec<Suggestion>>,
    {
        self.get_or_compute_at(key, Instant::now, compute).await
    }

    /// Same as `get_or_compute` with an explicit clock.
    ///
    /// The clock is read once for the lookup and again after `compute`
    /// finishes, so entry lifetimes start when the value was stored.
    pub async fn get_or_compute_at<C, F, Fut>(
        &self,
        key: CacheKey,
        clock: C,
        compute: F,
    ) -> Vec<Suggestion>
    where
        C: Fn() -> Instant,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Vec<Suggestion>>,
    {
        if let Some(hit) = self.get(&key, clock()) {
            #[cfg(debug_assertions)]
            log::debug!("Suggestion cache hit for {:?}", key);
            return hit;
        }

        #[cfg(debug_assertions)]
        log::debug!("Suggestion cache miss for {:?}", key);

        // The lock is not held while computing
        let value = compute().await;
        self.insert(key, value.clone(), clock());
        value
    }

    /// Fresh value for `key` at `now`, if any
    pub fn get(&self, key: &CacheKey, now: Instant) -> Option<Vec<Suggestion>> {
        let entries = self.lock();
        entries
            .get(key)
            .filter(|entry| now < entry.valid_until)
            .map(|entry| entry.value.clone())
    }

    /// Stores `value` under `key`, replacing any previous entry
    pub fn insert(&self, key: CacheKey, value: Vec<Suggestion>, now: Instant) {
        let mut entries = self.lock();
        entries.retain(|_, entry| now < entry.purge_after);
        entries.insert(
            key,
            CacheEntry {
                value,
                valid_until: now + self.stale_after,
                purge_after: now + self.purge_after,
            },
        );
    }

    /// Number of stored entries, stale ones included
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every critical section leaves the map consistent, so poisoning is ignored.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<CacheKey, CacheEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
