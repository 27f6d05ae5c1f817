//! Unified cache builder for all eviction policies.
//!
//! The policy is selected once at construction; afterwards the caller works
//! against one uniform API regardless of which engine is behind it.
//!
//! ## Example
//!
//! ```
//! use cachefront::builder::{CacheBuilder, CachePolicy};
//!
//! let mut cache = CacheBuilder::new(100).build::<u64, String>(CachePolicy::Arc);
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
use crate::policy::arc::ArcCache;
use crate::policy::fifo::FifoCache;
use crate::policy::lfu::LfuCache;
use crate::policy::lru::LruCache;
use crate::traits::{CoreCache, ReadOnlyCache};

/// Available cache eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// First In, First Out eviction.
    Fifo,
    /// Least Recently Used eviction.
    Lru,
    /// Least Frequently Used eviction (oldest-access tie-break).
    Lfu,
    /// Adaptive Replacement Cache: self-tuning recency/frequency balance.
    Arc,
}

/// Uniform cache front that hides which eviction policy is running.
pub struct Cache<K, V>
where
    K: Clone + Eq + Hash,
{
    inner: CacheInner<K, V>,
}

enum CacheInner<K, V>
where
    K: Clone + Eq + Hash,
{
    Fifo(FifoCache<K, V>),
    Lru(LruCache<K, V>),
    Lfu(LfuCache<K, V>),
    Arc(ArcCache<K, V>),
}

impl<K, V> Cache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Inserts a key-value pair. Returns the previous value if the key existed.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match &mut self.inner {
            CacheInner::Fifo(fifo) => fifo.insert(key, value),
            CacheInner::Lru(lru) => lru.insert(key, value),
            CacheInner::Lfu(lfu) => lfu.insert(key, value),
            CacheInner::Arc(arc) => arc.insert(key, value),
        }
    }

    /// Gets a reference to a value by key, updating policy state on a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match &mut self.inner {
            CacheInner::Fifo(fifo) => fifo.get(key),
            CacheInner::Lru(lru) => lru.get(key),
            CacheInner::Lfu(lfu) => lfu.get(key),
            CacheInner::Arc(arc) => arc.get(key),
        }
    }

    /// Checks if a key exists without updating access state.
    pub fn contains(&self, key: &K) -> bool {
        match &self.inner {
            CacheInner::Fifo(fifo) => fifo.contains(key),
            CacheInner::Lru(lru) => lru.contains(key),
            CacheInner::Lfu(lfu) => lfu.contains(key),
            CacheInner::Arc(arc) => arc.contains(key),
        }
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        match &self.inner {
            CacheInner::Fifo(fifo) => fifo.len(),
            CacheInner::Lru(lru) => lru.len(),
            CacheInner::Lfu(lfu) => lfu.len(),
            CacheInner::Arc(arc) => arc.len(),
        }
    }

    /// Returns `true` if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum capacity.
    pub fn capacity(&self) -> usize {
        match &self.inner {
            CacheInner::Fifo(fifo) => fifo.capacity(),
            CacheInner::Lru(lru) => lru.capacity(),
            CacheInner::Lfu(lfu) => lfu.capacity(),
            CacheInner::Arc(arc) => arc.capacity(),
        }
    }

    /// Clears all entries.
    pub fn clear(&mut self) {
        match &mut self.inner {
            CacheInner::Fifo(fifo) => fifo.clear(),
            CacheInner::Lru(lru) => lru.clear(),
            CacheInner::Lfu(lfu) => lfu.clear(),
            CacheInner::Arc(arc) => arc.clear(),
        }
    }

    /// Returns which policy this cache was built with.
    pub fn policy(&self) -> CachePolicy {
        match &self.inner {
            CacheInner::Fifo(_) => CachePolicy::Fifo,
            CacheInner::Lru(_) => CachePolicy::Lru,
            CacheInner::Lfu(_) => CachePolicy::Lfu,
            CacheInner::Arc(_) => CachePolicy::Arc,
        }
    }
}

/// Builder for creating cache instances.
pub struct CacheBuilder {
    capacity: usize,
}

impl CacheBuilder {
    /// Creates a new cache builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Builds a cache with the specified policy.
    ///
    /// # Panics
    ///
    /// Panics if the configured capacity is zero. See
    /// [`try_build`](Self::try_build).
    pub fn build<K, V>(self, policy: CachePolicy) -> Cache<K, V>
    where
        K: Clone + Eq + Hash,
    {
        match self.try_build(policy) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Builds a cache with the specified policy, failing on invalid
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configured capacity is zero.
    pub fn try_build<K, V>(self, policy: CachePolicy) -> Result<Cache<K, V>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        let inner = match policy {
            CachePolicy::Fifo => CacheInner::Fifo(FifoCache::try_new(self.capacity)?),
            CachePolicy::Lru => CacheInner::Lru(LruCache::try_new(self.capacity)?),
            CachePolicy::Lfu => CacheInner::Lfu(LfuCache::try_new(self.capacity)?),
            CachePolicy::Arc => CacheInner::Arc(ArcCache::try_new(self.capacity)?),
        };

        Ok(Cache { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICIES: [CachePolicy; 4] = [
        CachePolicy::Fifo,
        CachePolicy::Lru,
        CachePolicy::Lfu,
        CachePolicy::Arc,
    ];

    #[test]
    fn all_policies_basic_ops() {
        for policy in POLICIES {
            let mut cache = CacheBuilder::new(10).build::<u64, String>(policy);
            assert_eq!(cache.policy(), policy);

            assert_eq!(cache.insert(1, "one".to_string()), None);
            assert_eq!(cache.insert(2, "two".to_string()), None);

            assert_eq!(cache.get(&1), Some(&"one".to_string()));
            assert_eq!(cache.get(&2), Some(&"two".to_string()));
            assert_eq!(cache.get(&3), None);

            assert!(cache.contains(&1));
            assert!(!cache.contains(&99));

            assert_eq!(cache.len(), 2);
            assert!(!cache.is_empty());
            assert_eq!(cache.capacity(), 10);

            assert_eq!(cache.insert(1, "ONE".to_string()), Some("one".to_string()));
            assert_eq!(cache.get(&1), Some(&"ONE".to_string()));

            cache.clear();
            assert!(cache.is_empty());
        }
    }

    #[test]
    fn all_policies_enforce_capacity() {
        for policy in POLICIES {
            let mut cache = CacheBuilder::new(2).build::<u64, u64>(policy);
            for i in 0..100 {
                cache.insert(i, i * 10);
                assert!(cache.len() <= 2, "{:?} exceeded capacity", policy);
            }
        }
    }

    #[test]
    fn zero_capacity_fails_for_every_policy() {
        for policy in POLICIES {
            let built = CacheBuilder::new(0).try_build::<u64, u64>(policy);
            assert!(built.is_err(), "{:?} accepted capacity 0", policy);
        }
    }
}
