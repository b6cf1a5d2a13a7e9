//! Two-tier photo cache.
//!
//! Image bytes are looked up in memory, then in the durable image directory,
//! then fetched from the network. Durable hits are promoted into memory and
//! network hits are written through to both tiers. A failed fetch evicts the
//! key from both tiers.
//!
//! # Invariants
//!
//! - Memory never holds an entry whose durable file was evicted: `evict`
//!   clears both tiers before returning.
//! - Work on one key is serialised by a per-key lock, so concurrent `get`s of
//!   the same URL perform at most one network fetch.

mod key;
mod store;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use bytes::Bytes;
use tracing::{debug, warn};

use crate::ports::ImageFetcherPort;
use crate::utils::KeyedLocks;

pub use key::derive_cache_key;
pub use store::DiskStore;

/// Memory + durable cache of photo image bytes keyed by source URL.
pub struct PhotoCache {
    memory: RwLock<HashMap<String, Bytes>>,
    disk: DiskStore,
    fetcher: Arc<dyn ImageFetcherPort>,
    locks: KeyedLocks<String>,
}

impl PhotoCache {
    /// Create a cache whose durable tier lives in `dir`.
    pub fn new(dir: impl Into<PathBuf>, fetcher: Arc<dyn ImageFetcherPort>) -> Self {
        Self {
            memory: RwLock::new(HashMap::new()),
            disk: DiskStore::new(dir),
            fetcher,
            locks: KeyedLocks::new(),
        }
    }

    /// Get the bytes for `source_url`, fetching them if neither tier has them.
    ///
    /// Returns `None` if the image could not be obtained.
    pub async fn get(&self, source_url: &str) -> Option<Bytes> {
        let key = derive_cache_key(source_url);

        if let Some(bytes) = self.memory_get(&key) {
            debug!(%key, "Photo cache memory hit");
            return Some(bytes);
        }

        let _guard = self.locks.lock(&key).await;

        // Another get may have filled the entry while we waited
        if let Some(bytes) = self.memory_get(&key) {
            debug!(%key, "Photo cache memory hit");
            return Some(bytes);
        }

        match self.disk.read(&key).await {
            Ok(Some(bytes)) => {
                debug!(%key, "Photo cache durable hit");
                self.memory_put(&key, bytes.clone());
                return Some(bytes);
            }
            Ok(None) => {}
            Err(e) => warn!(%key, error = %e, "Failed to read cached photo"),
        }

        debug!(%key, "Photo cache miss, fetching");
        match self.fetcher.fetch(source_url).await {
            Ok(bytes) => {
                // Memory only mirrors entries that reached the durable tier
                match self.disk.write(&key, &bytes).await {
                    Ok(()) => self.memory_put(&key, bytes.clone()),
                    Err(e) => warn!(%key, error = %e, "Failed to persist photo"),
                }
                Some(bytes)
            }
            Err(e) => {
                warn!(%key, error = %e, "Photo fetch failed");
                self.remove_entry(&key).await;
                None
            }
        }
    }

    /// Remove `source_url` from both tiers. Evicting an absent entry is a no-op.
    pub async fn evict(&self, source_url: &str) {
        let key = derive_cache_key(source_url);
        let _guard = self.locks.lock(&key).await;
        self.remove_entry(&key).await;
        debug!(%key, "Evicted photo");
    }

    /// Whether either tier holds an entry for `source_url`.
    pub async fn contains(&self, source_url: &str) -> bool {
        let key = derive_cache_key(source_url);
        self.memory_get(&key).is_some() || self.disk.exists(&key).await
    }

    /// Drop the memory tier. Durable entries are kept and promoted again on use.
    pub fn clear_memory(&self) {
        self.memory
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of entries in the memory tier.
    pub fn memory_len(&self) -> usize {
        self.memory
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Directory of the durable tier.
    pub fn dir(&self) -> &std::path::Path {
        self.disk.dir()
    }

    fn memory_get(&self, key: &str) -> Option<Bytes> {
        self.memory
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn memory_put(&self, key: &str, bytes: Bytes) {
        self.memory
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), bytes);
    }

    // Caller holds the key lock
    async fn remove_entry(&self, key: &str) {
        self.memory
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        if let Err(e) = self.disk.remove(key).await {
            warn!(%key, error = %e, "Failed to delete cached photo");
        }
    }
}

impl std::fmt::Debug for PhotoCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoCache")
            .field("dir", &self.disk.dir())
            .field("memory_entries", &self.memory_len())
            .finish_non_exhaustive()
    }
}
