//! LRU (Least Recently Used) replacement policy.
//!
//! Evicts the least recently touched entry. Every hit (read or overwrite)
//! refreshes the entry's access stamp and moves it to the most-recent
//! position, so the eviction order is a total order over last accesses.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<K, SlotId>        list: IntrusiveList<CacheEntry>
//!   ┌─────────┬─────────┐              head ─► [C] ◄──► [A] ◄──► [B] ◄── tail
//!   │  key A  │  id_1   │                 MRU                       LRU
//!   │  key B  │  id_2   │                                        (victim)
//!   │  key C  │  id_3   │
//!   └─────────┴─────────┘
//! ```
//!
//! | Operation | Time | Notes                               |
//! |-----------|------|-------------------------------------|
//! | `get`     | O(1) | Hit moves entry to front (MRU)      |
//! | `insert`  | O(1) | May evict the back (LRU) entry      |
//! | `remove`  | O(1) | Arbitrary removal is order-safe     |
//! | `pop_lru` | O(1) | Back of the list                    |

use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::ds::{IntrusiveList, SlotId};
use crate::entry::{CacheEntry, Tick};
use crate::error::ConfigError;
#[cfg(feature = "metrics")]
use crate::metrics::{CacheMetricsSnapshot, PolicyMetrics};
use crate::traits::{CoreCache, LruCacheTrait, MutableCache, ReadOnlyCache};

/// Least-recently-used cache.
///
/// # Example
///
/// ```
/// use cachefront::policy::lru::LruCache;
/// use cachefront::traits::{CoreCache, ReadOnlyCache};
///
/// let mut cache = LruCache::new(2);
/// cache.insert("a", 1);
/// cache.insert("b", 2);
/// cache.get(&"a");      // "b" is now least recently used
/// cache.insert("c", 3); // evicts "b"
///
/// assert_eq!(cache.get(&"b"), None);
/// assert_eq!(cache.get(&"a"), Some(&1));
/// assert_eq!(cache.get(&"c"), Some(&3));
/// ```
#[derive(Debug)]
pub struct LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    index: FxHashMap<K, SlotId>,
    list: IntrusiveList<CacheEntry<K, V>>,
    capacity: usize,
    tick: Tick,
    #[cfg(feature = "metrics")]
    metrics: PolicyMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a new LRU cache with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. See [`try_new`](Self::try_new).
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a new LRU cache, returning an error on invalid parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("cache capacity must be greater than zero"));
        }
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            list: IntrusiveList::with_capacity(capacity),
            capacity,
            tick: 0,
            #[cfg(feature = "metrics")]
            metrics: PolicyMetrics::default(),
        })
    }

    fn next_tick(&mut self) -> Tick {
        self.tick += 1;
        self.tick
    }

    /// Evicts the LRU entry, returning it.
    fn evict_lru(&mut self) -> Option<(K, V)> {
        let entry = self.list.pop_back()?;
        self.index.remove(&entry.key);
        #[cfg(feature = "metrics")]
        self.metrics.record_eviction();
        Some((entry.key, entry.value))
    }

    /// Captures a snapshot of this instance's operation counters.
    #[cfg(feature = "metrics")]
    pub fn metrics(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot(self.index.len(), self.capacity)
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.list.debug_validate_invariants();
        assert_eq!(self.index.len(), self.list.len());
        assert!(self.list.len() <= self.capacity);
        for &id in self.index.values() {
            assert!(self.list.contains(id));
        }
    }
}

impl<K, V> ReadOnlyCache<K, V> for LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get(false);
                return None;
            }
        };

        let tick = self.next_tick();
        self.list.move_to_front(id);
        let entry = self.list.get_mut(id).expect("lru entry missing");
        entry.last_accessed = tick;
        #[cfg(feature = "metrics")]
        self.metrics.record_get(true);
        self.list.get(id).map(|entry| &entry.value)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&id) = self.index.get(&key) {
            let tick = self.next_tick();
            self.list.move_to_front(id);
            let entry = self.list.get_mut(id).expect("lru entry missing");
            entry.last_accessed = tick;
            let old = std::mem::replace(&mut entry.value, value);
            #[cfg(feature = "metrics")]
            self.metrics.record_insert(true);
            return Some(old);
        }

        if self.index.len() >= self.capacity {
            self.evict_lru();
        }

        let tick = self.next_tick();
        let id = self.list.push_front(CacheEntry::new(key.clone(), value, tick));
        self.index.insert(key, id);
        #[cfg(feature = "metrics")]
        self.metrics.record_insert(false);
        None
    }

    fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        let entry = self.list.remove(id).expect("lru entry missing");
        Some(entry.value)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        let entry = self.list.pop_back()?;
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.back().map(|entry| (&entry.key, &entry.value))
    }

    fn touch(&mut self, key: &K) -> bool {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => return false,
        };
        let tick = self.next_tick();
        self.list.move_to_front(id);
        if let Some(entry) = self.list.get_mut(id) {
            entry.last_accessed = tick;
        }
        true
    }
}
