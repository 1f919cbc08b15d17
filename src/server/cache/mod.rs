//! In-process cache for materialized listing pages.
//!
//! Values are stored as serialized JSON bytes keyed by the canonical request key, so a
//! hit returns exactly the bytes produced by the first computation. Entries expire by
//! TTL, the store is capacity-bounded, and concurrent misses for one key are coalesced
//! into a single computation.

use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use std::{future::Future, sync::Arc, time::Duration};
use tokio::{
    sync::{Mutex, OwnedMutexGuard},
    time::Instant,
};

#[cfg(test)]
mod test;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Arc<[u8]>,
    expires_at: Instant,
}

/// Shared page cache with TTL expiry and single-flight miss handling.
#[derive(Debug)]
pub struct ListingCache {
    entries: DashMap<String, CacheEntry>,
    /// One lock per key with a computation in progress.
    inflight: DashMap<String, Arc<Mutex<()>>>,
    /// Bumped by every `invalidate_prefix` call for that prefix.
    generations: DashMap<String, u64>,
    capacity: usize,
}

impl ListingCache {
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            inflight: DashMap::new(),
            generations: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Returns the live value stored under `key`.
    ///
    /// An expired entry is removed and reported as a miss.
    pub fn get(&self, key: &str) -> Option<Arc<[u8]>> {
        let now = Instant::now();

        {
            let entry = self.entries.get(key)?;
            if entry.expires_at > now {
                return Some(entry.value.clone());
            }
        }

        self.entries.remove_if(key, |_, entry| entry.expires_at <= now);
        None
    }

    /// Stores `value` under `key` for `ttl`, replacing any previous value.
    ///
    /// When the cache is full, expired entries are purged first; if none expired, the
    /// entry closest to expiry is evicted.
    pub fn set(&self, key: impl Into<String>, value: Arc<[u8]>, ttl: Duration) {
        let key = key.into();

        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.make_room();
        }

        self.entries.insert(
            key,
            CacheEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    /// Removes every entry whose key starts with `prefix`.
    ///
    /// # Returns
    /// - `usize` - Number of entries removed
    pub fn invalidate_prefix(&self, prefix: &str) -> usize {
        *self.generations.entry(prefix.to_owned()).or_default() += 1;

        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before.saturating_sub(self.entries.len());

        if removed > 0 {
            tracing::debug!("Invalidated {} cached pages with prefix {}", removed, prefix);
        }

        removed
    }

    /// Drops every expired entry.
    ///
    /// # Returns
    /// - `usize` - Number of entries removed
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        before.saturating_sub(self.entries.len())
    }

    /// Sum of the invalidation generations of every prefix `key` falls under.
    fn generation(&self, key: &str) -> u64 {
        self.generations
            .iter()
            .filter(|entry| key.starts_with(entry.key().as_str()))
            .map(|entry| *entry.value())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn make_room(&self) {
        self.purge_expired();
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

    /// Returns the cached value for `key`, or computes, stores and returns it.
    ///
    /// Concurrent callers missing on the same key wait for the first caller's
    /// computation and then read its result. If that caller is cancelled or fails, the
    /// next waiter computes instead. Failed computations are never cached, and neither
    /// is a value whose key was invalidated while it was being computed.
    ///
    /// # Arguments
    /// - `key` - Canonical cache key
    /// - `ttl` - Lifetime of a freshly computed entry
    /// - `compute` - Produces the value on a miss
    ///
    /// # Returns
    /// - `Ok(T)` - Cached or freshly computed value
    /// - `Err(E)` - `compute` failed, or the value could not be (de)serialized
    pub async fn get_or_try_compute<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        compute: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        E: From<serde_json::Error>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(bytes) = self.get(key) {
            tracing::debug!("Cache hit: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let _flight = self.join_flight(key).await;

        if let Some(bytes) = self.get(key) {
            tracing::debug!("Cache hit after wait: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }

        tracing::debug!("Cache miss: {}", key);
        let generation = self.generation(key);
        let value = compute().await?;
        let bytes: Arc<[u8]> = serde_json::to_vec(&value)?.into();
        self.set(key, bytes.clone(), ttl);

        // Checked after the insert so an invalidation racing the store either
        // removes the entry itself or is seen here.
        if self.generation(key) != generation {
            self.entries
                .remove_if(key, |_, entry| Arc::ptr_eq(&entry.value, &bytes));
            tracing::debug!("Discarded page invalidated during computation: {}", key);
        }

        Ok(value)
    }

    async fn join_flight<'a>(&'a self, key: &'a str) -> Flight<'a> {
        let lock = self.inflight.entry(key.to_owned()).or_default().clone();
        let permit = lock.clone().lock_owned().await;

        Flight {
            cache: self,
            key,
            lock,
            permit: Some(permit),
        }
    }
}

/// Holds the per-key lock for the duration of one computation.
///
/// Dropping it releases the lock and removes the key's lock entry once no other
/// caller is waiting on it.
struct Flight<'a> {
    cache: &'a ListingCache,
    key: &'a str,
    lock: Arc<Mutex<()>>,
    permit: Option<OwnedMutexGuard<()>>,
}

impl Drop for Flight<'_> {
    fn drop(&mut self) {
        self.permit.take();
        // Two references remain when nobody else waits: the map's and ours.
        self.cache.inflight.remove_if(self.key, |_, lock| {
            Arc::ptr_eq(lock, &self.lock) && Arc::strong_count(lock) == 2
        });
    }
}
