//! Backing-store contract and read-through composition.
//!
//! The cache never calls a store from inside a policy: the caller observes a
//! miss, fetches from its store, and inserts the result. [`ReadThrough`]
//! packages exactly that flow for callers that want it handled in one place.
//!
//! ```text
//!   caller ──get(k)──► ReadThrough ──get(k)──► Cache (any policy)
//!                          │  miss
//!                          └──fetch(k)──► BackingStore (DB, remote service)
//!                                │ Some(v)
//!                                └──insert(k, v) into the cache
//! ```
//!
//! Store operations are fallible independently of the cache: a fetch error is
//! surfaced as [`StoreError`], never swallowed into a miss.

use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::error::StoreError;
use crate::traits::CoreCache;

/// A slower, fallible key/value store fronted by the cache.
///
/// Both operations are synchronous; the cache contract assumes they are only
/// invoked outside the cache's own critical section.
pub trait BackingStore<K, V> {
    /// Fetches the value for `key`, or `None` if the store has no record.
    fn fetch(&mut self, key: &K) -> Result<Option<V>, StoreError>;

    /// Persists `value` under `key`.
    fn store(&mut self, key: K, value: V) -> Result<(), StoreError>;
}

/// In-memory [`BackingStore`] used as a stand-in for a real database in
/// tests, examples, and benches.
#[derive(Debug, Default)]
pub struct MemoryStore<K, V> {
    entries: FxHashMap<K, V>,
}

impl<K, V> MemoryStore<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K, V> BackingStore<K, V> for MemoryStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn fetch(&mut self, key: &K) -> Result<Option<V>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn store(&mut self, key: K, value: V) -> Result<(), StoreError> {
        self.entries.insert(key, value);
        Ok(())
    }
}

/// Cache-in-front-of-store composition.
///
/// # Example
///
/// ```
/// use cachefront::policy::lru::LruCache;
/// use cachefront::store::{MemoryStore, ReadThrough};
///
/// let store: MemoryStore<u64, String> =
///     [(1, "one".to_string())].into_iter().collect();
/// let mut front = ReadThrough::new(LruCache::new(10), store);
///
/// assert_eq!(front.get(&1).unwrap(), Some("one".to_string()));
/// assert_eq!(front.get(&2).unwrap(), None);
/// ```
#[derive(Debug)]
pub struct ReadThrough<C, S> {
    cache: C,
    store: S,
}

impl<C, S> ReadThrough<C, S> {
    /// Composes a cache with a backing store.
    pub fn new(cache: C, store: S) -> Self {
        Self { cache, store }
    }

    /// Returns a reference to the cache side.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Returns a reference to the store side.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Looks up `key` in the cache, falling back to the store on a miss.
    ///
    /// A store hit is inserted into the cache before returning, so repeat
    /// lookups are served from memory. A store-level failure is returned as
    /// an error; an absent key is `Ok(None)`.
    pub fn get<K, V>(&mut self, key: &K) -> Result<Option<V>, StoreError>
    where
        K: Clone,
        V: Clone,
        C: CoreCache<K, V>,
        S: BackingStore<K, V>,
    {
        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value.clone()));
        }
        match self.store.fetch(key)? {
            Some(value) => {
                self.cache.insert(key.clone(), value.clone());
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Writes through to the store, then refreshes the cache.
    ///
    /// The cache is only updated once the store accepted the write, so a
    /// failed write never leaves the cache ahead of the store.
    pub fn put<K, V>(&mut self, key: K, value: V) -> Result<(), StoreError>
    where
        K: Clone,
        V: Clone,
        C: CoreCache<K, V>,
        S: BackingStore<K, V>,
    {
        self.store.store(key.clone(), value.clone())?;
        self.cache.insert(key, value);
        Ok(())
    }
}
