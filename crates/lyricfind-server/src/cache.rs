//! In-memory response cache with per-entry expiry.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Stable key for a list of request components.
///
/// Components are separated before hashing, so `["ab", "c"]` and
/// `["a", "bc"]` give different keys.
pub fn cache_key(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update([0]);
    }
    hex::encode(hasher.finalize())
}

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    /// `None` when the TTL is too large to represent.
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// A bounded map whose entries expire after a fixed TTL.
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
    ttl: Duration,
    capacity: usize,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            capacity,
        }
    }

    /// Whether inserts are kept at all.
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero() && self.capacity > 0
    }

    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired(now) {
                return Some(entry.value.clone());
            }
        }
        self.entries.remove_if(key, |_, entry| entry.is_expired(now));
        None
    }

    pub fn insert(&self, key: String, value: V) {
        if !self.is_enabled() {
            return;
        }

        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.make_room();
        }

        let entry = CacheEntry {
            value,
            expires_at: Instant::now().checked_add(self.ttl),
        };
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop expired entries, then the entry closest to expiry if still full.
    fn make_room(&self) {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        debug!("Pruned {} expired cache entries", before - self.entries.len());

        if self.entries.len() < self.capacity {
            return;
        }

        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.expires_at)
            .map(|entry| entry.key().clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}
