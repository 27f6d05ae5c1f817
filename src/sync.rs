//! Mutex adapter for sharing a cache across threads.
//!
//! The policies themselves are single-threaded and lock-free; the capability
//! contract requires exclusive access per call. [`SyncCache`] supplies that
//! exclusion as a wrapper, so single-threaded users never pay for a lock
//! they did not ask for.
//!
//! Values are returned by clone: a reference into the cache cannot outlive
//! the lock guard.

use parking_lot::Mutex;

use crate::traits::{CoreCache, MutableCache};

/// Thread-safe wrapper around any cache policy.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use cachefront::policy::lru::LruCache;
/// use cachefront::sync::SyncCache;
///
/// let cache = Arc::new(SyncCache::new(LruCache::new(100)));
///
/// let handle = {
///     let cache = Arc::clone(&cache);
///     std::thread::spawn(move || {
///         cache.insert(1u64, "one".to_string());
///     })
/// };
/// handle.join().unwrap();
///
/// assert_eq!(cache.get_cloned(&1), Some("one".to_string()));
/// ```
#[derive(Debug)]
pub struct SyncCache<C> {
    inner: Mutex<C>,
}

impl<C> SyncCache<C> {
    /// Wraps `cache` in a mutex.
    pub fn new(cache: C) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    /// Runs `f` with exclusive access to the underlying cache.
    ///
    /// Use this to batch several operations under one lock acquisition.
    pub fn with<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Consumes the wrapper, returning the inner cache.
    pub fn into_inner(self) -> C {
        self.inner.into_inner()
    }

    /// Inserts a key-value pair, returning the previous value if present.
    pub fn insert<K, V>(&self, key: K, value: V) -> Option<V>
    where
        C: CoreCache<K, V>,
    {
        self.inner.lock().insert(key, value)
    }

    /// Gets a clone of the value for `key`, updating policy state on a hit.
    pub fn get_cloned<K, V>(&self, key: &K) -> Option<V>
    where
        C: CoreCache<K, V>,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Checks if a key exists without updating access state.
    pub fn contains<K, V>(&self, key: &K) -> bool
    where
        C: CoreCache<K, V>,
    {
        self.inner.lock().contains(key)
    }

    /// Returns the number of live entries.
    pub fn len<K, V>(&self) -> usize
    where
        C: CoreCache<K, V>,
    {
        self.inner.lock().len()
    }

    /// Removes a key, returning its value if present.
    pub fn remove<K, V>(&self, key: &K) -> Option<V>
    where
        C: MutableCache<K, V>,
    {
        self.inner.lock().remove(key)
    }

    /// Clears all entries.
    pub fn clear<K, V>(&self)
    where
        C: CoreCache<K, V>,
    {
        self.inner.lock().clear()
    }
}
