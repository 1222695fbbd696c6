//! Tests for the suggestion cache

use super::*;
use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn value(text: &str) -> Vec<Suggestion> {
    vec![Suggestion::new(text, "(Official) test image")]
}

/// Clock that can be moved forward by the test
struct TestClock {
    start: Instant,
    offset: Cell<Duration>,
}

impl TestClock {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    fn now(&self) -> Instant {
        self.start + self.offset.get()
    }

    fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }
}

#[test]
fn test_cache_key_for_term() {
    assert_eq!(CacheKey::for_term(""), CacheKey::Listing);
    assert_eq!(CacheKey::for_term("ubu"), CacheKey::Term("ubu".to_string()));
}

#[tokio::test]
async fn test_miss_computes_and_stores() {
    let cache = SuggestionCache::default();
    let calls = AtomicUsize::new(0);

    let result = cache
        .get_or_compute(CacheKey::Listing, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            value("alpine")
        })
        .await;

    assert_eq!(result, value("alpine"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn test_hit_skips_compute() {
    let cache = SuggestionCache::default();
    let calls = AtomicUsize::new(0);

    for _ in 0..3 {
        let result = cache
            .get_or_compute(CacheKey::for_term("ubu"), || async {
                calls.fetch_add(1, Ordering::SeqCst);
                value("ubuntu")
            })
            .await;
        assert_eq!(result, value("ubuntu"));
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_keys_are_independent() {
    let cache = SuggestionCache::default();

    let listing = cache
        .get_or_compute(CacheKey::Listing, || async { value("alpine") })
        .await;
    let term = cache
        .get_or_compute(CacheKey::for_term("ubu"), || async { value("ubuntu") })
        .await;

    assert_eq!(listing, value("alpine"));
    assert_eq!(term, value("ubuntu"));
    assert_eq!(cache.len(), 2);
}

#[tokio::test]
async fn test_stale_entry_is_recomputed() {
    let cache = SuggestionCache::new(Duration::from_secs(300), Duration::from_secs(600));
    let clock = TestClock::new();
    let calls = AtomicUsize::new(0);

    let first = cache
        .get_or_compute_at(CacheKey::Listing, || clock.now(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            value("first")
        })
        .await;
    assert_eq!(first, value("first"));

    clock.advance(Duration::from_secs(299));
    let still_fresh = cache
        .get_or_compute_at(CacheKey::Listing, || clock.now(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            value("second")
        })
        .await;
    assert_eq!(still_fresh, value("first"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    clock.advance(Duration::from_secs(1));
    let recomputed = cache
        .get_or_compute_at(CacheKey::Listing, || clock.now(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            value("second")
        })
        .await;
    assert_eq!(recomputed, value("second"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_stale_but_unpurged_entry_is_kept_but_not_served() {
    let cache = SuggestionCache::new(Duration::from_secs(300), Duration::from_secs(600));
    let t0 = Instant::now();

    cache.insert(CacheKey::Listing, value("alpine"), t0);

    let later = t0 + Duration::from_secs(400);
    assert_eq!(cache.get(&CacheKey::Listing, later), None);
    // Still physically present until the purge window passes
    cache.insert(CacheKey::for_term("x"), value("x"), later);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_purged_entries_removed_on_insert() {
    let cache = SuggestionCache::new(Duration::from_secs(300), Duration::from_secs(600));
    let t0 = Instant::now();

    cache.insert(CacheKey::Listing, value("alpine"), t0);
    cache.insert(CacheKey::for_term("ubu"), value("ubuntu"), t0 + Duration::from_secs(100));

    cache.insert(CacheKey::for_term("red"), value("redis"), t0 + Duration::from_secs(650));

    // Listing (purge at 600) is gone, "ubu" (purge at 700) remains
    assert_eq!(cache.len(), 2);
    assert_eq!(
        cache.get(&CacheKey::for_term("ubu"), t0 + Duration::from_secs(350)),
        Some(value("ubuntu"))
    );
}

#[test]
fn test_insert_replaces_entry() {
    let cache = SuggestionCache::default();
    let t0 = Instant::now();

    cache.insert(CacheKey::Listing, value("old"), t0);
    cache.insert(CacheKey::Listing, value("new"), t0);

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&CacheKey::Listing, t0), Some(value("new")));
}

#[test]
fn test_purge_window_never_shorter_than_stale_window() {
    let cache = SuggestionCache::new(Duration::from_secs(300), Duration::from_secs(10));
    let t0 = Instant::now();

    cache.insert(CacheKey::Listing, value("alpine"), t0);
    cache.insert(CacheKey::for_term("x"), value("x"), t0 + Duration::from_secs(200));

    assert_eq!(
        cache.get(&CacheKey::Listing, t0 + Duration::from_secs(250)),
        Some(value("alpine"))
    );
}

#[test]
fn test_concurrent_inserts_do_not_corrupt() {
    let cache = Arc::new(SuggestionCache::default());
    let now = Instant::now();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || {
                for round in 0..50 {
                    let text = format!("image-{}-{}", i, round);
                    cache.insert(CacheKey::Listing, value(&text), now);
                    let _ = cache.get(&CacheKey::Listing, now);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 1);
    let stored = cache.get(&CacheKey::Listing, now).unwrap();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].text.starts_with("image-"));
}
