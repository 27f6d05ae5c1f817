//! FIFO (First In, First Out) replacement policy.
//!
//! Evicts strictly in insertion order. Access never reorders entries, and
//! overwriting an existing key keeps its original queue position, so the
//! eviction sequence is fully determined by first-insertion times.
//!
//! ## Architecture
//!
//! ```text
//!   queue: VecDeque<K>                 map: FxHashMap<K, CacheEntry>
//!   ┌─────┬─────┬─────┬─────┐          ┌─────────┬─────────────────┐
//!   │  A  │  B  │  C  │  D  │          │  key    │  entry (value)  │
//!   └─────┴─────┴─────┴─────┘          ├─────────┼─────────────────┤
//!     ▲                   ▲            │   A..D  │  ...            │
//!   oldest             newest          └─────────┴─────────────────┘
//!   (next victim)
//! ```
//!
//! | Operation    | Time | Notes                              |
//! |--------------|------|------------------------------------|
//! | `get`        | O(1) | No side effect on order            |
//! | `insert`     | O(1) | Overwrite keeps queue position     |
//! | `pop_oldest` | O(1) | Queue front                        |
//!
//! There is no arbitrary removal: a `remove(&K)` would leave a hole in the
//! insertion queue, so `FifoCache` implements [`FifoCacheTrait`] rather than
//! [`MutableCache`](crate::traits::MutableCache).

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::hash::Hash;

use crate::entry::{CacheEntry, Tick};
use crate::error::ConfigError;
#[cfg(feature = "metrics")]
use crate::metrics::{CacheMetricsSnapshot, PolicyMetrics};
use crate::traits::{CoreCache, FifoCacheTrait, ReadOnlyCache};

/// First-in, first-out cache.
///
/// # Example
///
/// ```
/// use cachefront::policy::fifo::FifoCache;
/// use cachefront::traits::{CoreCache, ReadOnlyCache};
///
/// let mut cache = FifoCache::new(2);
/// cache.insert("a", 1);
/// cache.insert("b", 2);
/// cache.insert("c", 3); // evicts "a", the oldest insertion
///
/// assert_eq!(cache.get(&"a"), None);
/// assert_eq!(cache.get(&"b"), Some(&2));
/// assert_eq!(cache.len(), 2);
/// ```
#[derive(Debug)]
pub struct FifoCache<K, V>
where
    K: Clone + Eq + Hash,
{
    map: FxHashMap<K, CacheEntry<K, V>>,
    queue: VecDeque<K>,
    capacity: usize,
    tick: Tick,
    #[cfg(feature = "metrics")]
    metrics: PolicyMetrics,
}

impl<K, V> FifoCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a new FIFO cache with the specified capacity.
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

    /// Creates a new FIFO cache, returning an error on invalid parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("cache capacity must be greater than zero"));
        }
        Ok(Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            queue: VecDeque::with_capacity(capacity),
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

    /// Captures a snapshot of this instance's operation counters.
    #[cfg(feature = "metrics")]
    pub fn metrics(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot(self.map.len(), self.capacity)
    }
}

impl<K, V> ReadOnlyCache<K, V> for FifoCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> CoreCache<K, V> for FifoCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        let value = self.map.get(key).map(|entry| &entry.value);
        #[cfg(feature = "metrics")]
        self.metrics.record_get(value.is_some());
        value
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(entry) = self.map.get_mut(&key) {
            // Overwrite in place: queue position and stamp are unchanged.
            let old = std::mem::replace(&mut entry.value, value);
            #[cfg(feature = "metrics")]
            self.metrics.record_insert(true);
            return Some(old);
        }

        if self.map.len() >= self.capacity {
            if let Some(oldest) = self.queue.pop_front() {
                self.map.remove(&oldest);
                #[cfg(feature = "metrics")]
                self.metrics.record_eviction();
            }
        }

        let tick = self.next_tick();
        self.queue.push_back(key.clone());
        self.map
            .insert(key.clone(), CacheEntry::new(key, value, tick));
        #[cfg(feature = "metrics")]
        self.metrics.record_insert(false);
        None
    }

    fn clear(&mut self) {
        self.map.clear();
        self.queue.clear();
    }
}

impl<K, V> FifoCacheTrait<K, V> for FifoCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn pop_oldest(&mut self) -> Option<(K, V)> {
        let key = self.queue.pop_front()?;
        let entry = self.map.remove(&key).expect("fifo entry missing");
        Some((key, entry.value))
    }

    fn peek_oldest(&self) -> Option<(&K, &V)> {
        let key = self.queue.front()?;
        let entry = self.map.get(key).expect("fifo entry missing");
        Some((&entry.key, &entry.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_insert_and_get() {
        let mut cache = FifoCache::new(10);
        cache.insert("key1", "value1");
        assert_eq!(cache.get(&"key1"), Some(&"value1"));
        assert_eq!(cache.get(&"missing"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn fifo_evicts_in_insertion_order() {
        let mut cache = FifoCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("c", 3);

        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), Some(&3));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn fifo_get_does_not_reorder() {
        let mut cache = FifoCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);

        // Touching "a" must not save it: it is still the oldest insertion.
        cache.get(&"a");
        cache.insert("c", 3);

        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn fifo_overwrite_keeps_queue_position() {
        let mut cache = FifoCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);

        assert_eq!(cache.insert("a", 10), Some(1));
        assert_eq!(cache.get(&"a"), Some(&10));

        // "a" is still first in line despite the overwrite.
        cache.insert("c", 3);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
    }

    #[test]
    fn fifo_pop_and_peek_oldest() {
        let mut cache = FifoCache::new(10);
        cache.insert(1, "first");
        cache.insert(2, "second");

        assert_eq!(cache.peek_oldest(), Some((&1, &"first")));
        assert_eq!(cache.peek_oldest(), Some((&1, &"first")));
        assert_eq!(cache.pop_oldest(), Some((1, "first")));
        assert_eq!(cache.pop_oldest(), Some((2, "second")));
        assert_eq!(cache.pop_oldest(), None);
    }

    #[test]
    fn fifo_pop_oldest_batch() {
        let mut cache = FifoCache::new(10);
        cache.insert(1, "a");
        cache.insert(2, "b");
        cache.insert(3, "c");

        let batch = cache.pop_oldest_batch(2);
        assert_eq!(batch, vec![(1, "a"), (2, "b")]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn fifo_entry_frequency_stays_vestigial() {
        let mut cache = FifoCache::new(4);
        cache.insert("a", 1);
        cache.get(&"a");
        cache.get(&"a");
        assert_eq!(cache.map[&"a"].frequency(), 1);
    }

    #[test]
    fn fifo_clear() {
        let mut cache = FifoCache::new(4);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.pop_oldest(), None);
    }

    #[test]
    fn fifo_zero_capacity_rejected() {
        assert!(FifoCache::<u64, u64>::try_new(0).is_err());
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn fifo_new_zero_capacity_panics() {
        let _ = FifoCache::<u64, u64>::new(0);
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn fifo_metrics_record_ops() {
        let mut cache = FifoCache::new(1);
        cache.insert("a", 1);
        cache.get(&"a");
        cache.get(&"b");
        cache.insert("b", 2); // evicts "a"

        let snap = cache.metrics();
        assert_eq!(snap.get_hits, 1);
        assert_eq!(snap.get_misses, 1);
        assert_eq!(snap.insert_new, 2);
        assert_eq!(snap.evicted_entries, 1);
    }
}
