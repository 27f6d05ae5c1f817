//! # Cache Trait Hierarchy
//!
//! This module defines the trait hierarchy for the cache subsystem, providing a
//! unified interface for the four eviction policies (FIFO, LRU, LFU, ARC) while
//! ensuring type safety and policy-appropriate operation sets.
//!
//! ## Architecture
//!
//! ```text
//!                ┌─────────────────────────────────────────┐
//!                │           ReadOnlyCache<K, V>           │
//!                │                                         │
//!                │  contains(&, &K) → bool                 │
//!                │  len(&) → usize                         │
//!                │  is_empty(&) → bool                     │
//!                │  capacity(&) → usize                    │
//!                └───────────────────┬─────────────────────┘
//!                                    │
//!                ┌───────────────────▼─────────────────────┐
//!                │            CoreCache<K, V>              │
//!                │                                         │
//!                │  insert(&mut, K, V) → Option<V>         │
//!                │  get(&mut, &K) → Option<&V>             │
//!                │  clear(&mut)                            │
//!                └──────────┬───────────────────┬──────────┘
//!                           │                   │
//!         ┌─────────────────▼──────┐   ┌────────▼────────────────┐
//!         │  FifoCacheTrait<K, V>  │   │   MutableCache<K, V>    │
//!         │                        │   │                         │
//!         │  pop_oldest() → (K, V) │   │  remove(&K) → Option<V> │
//!         │  peek_oldest()         │   │  remove_batch(&[K])     │
//!         │  pop_oldest_batch(n)   │   └──────┬───────────┬──────┘
//!         │                        │          │           │
//!         │  ⚠ No arbitrary        │   ┌──────▼─────┐ ┌───▼────────┐
//!         │    removal!            │   │ LruCache-  │ │ LfuCache-  │
//!         └────────────────────────┘   │ Trait      │ │ Trait      │
//!                                      │            │ │            │
//!                                      │ pop_lru()  │ │ pop_lfu()  │
//!                                      │ peek_lru() │ │ peek_lfu() │
//!                                      │ touch(&K)  │ │ frequency()│
//!                                      └────────────┘ └────────────┘
//! ```
//!
//! ## Trait Summary
//!
//! | Trait            | Extends        | Purpose                              |
//! |------------------|----------------|--------------------------------------|
//! | `ReadOnlyCache`  | -              | Side-effect-free introspection       |
//! | `CoreCache`      | `ReadOnlyCache`| Universal cache operations           |
//! | `MutableCache`   | `CoreCache`    | Adds arbitrary key removal           |
//! | `FifoCacheTrait` | `CoreCache`    | FIFO-specific (no remove!)           |
//! | `LruCacheTrait`  | `MutableCache` | LRU-specific with recency tracking   |
//! | `LfuCacheTrait`  | `MutableCache` | LFU-specific with frequency tracking |
//!
//! ## Why FIFO Doesn't Extend MutableCache
//!
//! FIFO caches evict in strict insertion order. Arbitrary removal would leave
//! holes in the insertion queue and muddle what "oldest" means, so
//! [`FifoCacheTrait`] extends [`CoreCache`] directly and offers only
//! order-respecting eviction (`pop_oldest`).
//!
//! ## Thread Safety
//!
//! Implementations are **not** thread-safe. Every call requires exclusive
//! access (`&mut self` or an external lock). ARC additionally extends this to
//! `get`, which rebalances internal lists on every hit.

/// Side-effect-free cache introspection.
///
/// Unlike [`CoreCache::get`], none of these operations affect eviction order
/// or access statistics.
pub trait ReadOnlyCache<K, V> {
    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of live entries in the cache.
    ///
    /// For ARC this excludes ghost (history) records.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no live entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum capacity of the cache.
    fn capacity(&self) -> usize;
}

/// Core cache operations that all caches support.
///
/// # Example
///
/// ```
/// use cachefront::traits::{CoreCache, ReadOnlyCache};
/// use cachefront::policy::lru::LruCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V>: ReadOnlyCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the cache is at capacity, an entry may be evicted according to the
    /// cache's eviction policy before the new entry is inserted.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key.
    ///
    /// May update internal state (recency, frequency) depending on the
    /// eviction policy. `None` signals a miss: the caller should consult its
    /// backing store and [`insert`](Self::insert) the result.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Removes all entries from the cache.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// Implemented by LRU, LFU, and ARC. FIFO caches intentionally do NOT
/// implement this trait because arbitrary removal would violate insertion
/// order; use [`FifoCacheTrait`] instead.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a specific key-value pair.
    ///
    /// Returns the removed value if the key existed, or `None` if it didn't.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes multiple keys, returning removed values in input order.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// FIFO-specific operations that respect insertion order.
///
/// # Example
///
/// ```
/// use cachefront::traits::{CoreCache, FifoCacheTrait, ReadOnlyCache};
/// use cachefront::policy::fifo::FifoCache;
///
/// let mut cache = FifoCache::new(3);
/// cache.insert(1, "first");
/// cache.insert(2, "second");
///
/// assert_eq!(cache.peek_oldest(), Some((&1, &"first")));
/// assert_eq!(cache.pop_oldest(), Some((1, "first")));
/// assert_eq!(cache.len(), 1);
/// ```
pub trait FifoCacheTrait<K, V>: CoreCache<K, V> {
    /// Removes and returns the oldest entry (first inserted).
    fn pop_oldest(&mut self) -> Option<(K, V)>;

    /// Peeks at the oldest entry without removing it.
    fn peek_oldest(&self) -> Option<(&K, &V)>;

    /// Removes up to `count` oldest entries, oldest first.
    fn pop_oldest_batch(&mut self, count: usize) -> Vec<(K, V)> {
        (0..count).filter_map(|_| self.pop_oldest()).collect()
    }
}

/// LRU-specific operations that respect access order.
///
/// # Example
///
/// ```
/// use cachefront::traits::{CoreCache, LruCacheTrait};
/// use cachefront::policy::lru::LruCache;
///
/// let mut cache = LruCache::new(3);
/// cache.insert(1, "first");
/// cache.insert(2, "second");
///
/// // Key 1 is LRU; touching it makes key 2 the victim.
/// assert!(cache.touch(&1));
/// assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(2));
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Peeks at the LRU entry without removing it or updating recency.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks an entry as recently used without retrieving the value.
    ///
    /// Returns `true` if the key was found and touched.
    fn touch(&mut self, key: &K) -> bool;
}

/// LFU-specific operations that respect frequency order.
///
/// # Example
///
/// ```
/// use cachefront::traits::{CoreCache, LfuCacheTrait};
/// use cachefront::policy::lfu::LfuCache;
///
/// let mut cache = LfuCache::new(3);
/// cache.insert(1, "a");
/// cache.get(&1);
/// assert_eq!(cache.frequency(&1), Some(2));
/// ```
pub trait LfuCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least frequently used entry.
    ///
    /// Ties are broken by the oldest last access.
    fn pop_lfu(&mut self) -> Option<(K, V)>;

    /// Peeks at the LFU entry without removing it or counting an access.
    fn peek_lfu(&self) -> Option<(&K, &V)>;

    /// Returns the access frequency recorded for `key`, if present.
    fn frequency(&self, key: &K) -> Option<u64>;
}
