//! Adaptive Replacement Cache (ARC) replacement policy.
//!
//! ARC balances recency against frequency at runtime by maintaining four
//! lists and a self-tuning target parameter `p`, instead of committing to a
//! fixed preference the way LRU or LFU do.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         ArcCache<K, V> Layout                       │
//! │                                                                     │
//! │   T1 (live: seen once)                T2 (live: seen repeatedly)    │
//! │   ┌─────────────────────────┐         ┌─────────────────────────┐   │
//! │   │ MRU               LRU   │ promote │ MRU               LRU   │   │
//! │   │  [e] ◄──► [d] ◄──► [c] ─┼────────►│  [a] ◄──► [b] ◄──► ...  │   │
//! │   │ IntrusiveList + t1_map  │ on hit  │ IntrusiveList + t2_map  │   │
//! │   └───────────┬─────────────┘         └───────────┬─────────────┘   │
//! │               │ evict                             │ evict           │
//! │               ▼                                   ▼                 │
//! │   B1 (ghost history of T1)            B2 (ghost history of T2)      │
//! │   ┌─────────────────────────┐         ┌─────────────────────────┐   │
//! │   │ GhostList<K>: keys only │         │ GhostList<K>: keys only │   │
//! │   └─────────────────────────┘         └─────────────────────────┘   │
//! │                                                                     │
//! │   p: target size for T1 (0 ≤ p ≤ capacity)                          │
//! │   • insert hits B1 → raise p (recency was undervalued)              │
//! │   • insert hits B2 → lower p (frequency was undervalued)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ghost Hits and Adaptation
//!
//! A miss on a key whose ghost record survives in B1 or B2 is a *near miss*:
//! the policy held that key until one eviction ago, so its size split between
//! the tiers was slightly wrong. The adjustment to `p` is proportional to how
//! lopsided the histories already are: `max(1, |B2|/|B1|)` up on a B1 hit,
//! `max(1, |B1|/|B2|)` down on a B2 hit. The adjustment is self-damping rather
//! than a fixed step. The floor of 1 also covers the empty-opposite-list
//! case, so no division guard beyond it is needed.
//!
//! A ghost hit re-enters the cache directly in T2: the ghost record is proof
//! of reuse, which is precisely T2's admission criterion.
//!
//! ## Operations
//!
//! | Operation | Time   | Notes                                       |
//! |-----------|--------|---------------------------------------------|
//! | `get`     | O(1)   | Hit in T1 graduates the entry to T2         |
//! | `insert`  | O(1)*  | *Amortized; may trim ghosts and evict       |
//! | `len`     | O(1)   | Live entries only (T1 + T2)                 |
//!
//! ## Invariants
//!
//! - An item is in exactly one of the four lists; each per-list index map
//!   mirrors its list exactly.
//! - `|T1| + |B1| ≤ capacity`; `|T1| + |T2| ≤ capacity`; `0 ≤ p ≤ capacity`.
//! - Ghost records hold keys only. Because demotion moves the key into a
//!   [`GhostList`] and drops the value, a ghost structurally cannot leak a
//!   stale value, and the live-list index maps can never resolve to a ghost.
//!
//! ## References
//!
//! - Megiddo & Modha, "ARC: A Self-Tuning, Low Overhead Replacement Cache",
//!   FAST 2003
//!
//! ## Thread Safety
//!
//! Not thread-safe; every operation (including `get`) rebalances internal
//! lists and requires exclusive access.

use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::ds::{GhostList, IntrusiveList, SlotId};
use crate::error::ConfigError;
#[cfg(feature = "metrics")]
use crate::metrics::{CacheMetricsSnapshot, PolicyMetrics};
use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};

/// Live entry in T1 or T2. Ghost records never use this type; they are keys
/// inside a [`GhostList`].
#[derive(Debug)]
struct ArcEntry<K, V> {
    key: K,
    value: V,
}

/// Adaptive Replacement Cache.
///
/// # Example
///
/// ```
/// use cachefront::policy::arc::ArcCache;
/// use cachefront::traits::{CoreCache, ReadOnlyCache};
///
/// let mut cache = ArcCache::new(2);
/// cache.insert("a", 1);
/// cache.insert("b", 2);
///
/// // A hit graduates "a" from the recency tier into the frequency tier.
/// assert_eq!(cache.get(&"a"), Some(&1));
/// assert_eq!(cache.t2_len(), 1);
///
/// cache.insert("c", 3); // evicts "b"; its key remains as a B1 ghost
/// assert_eq!(cache.get(&"b"), None);
/// assert_eq!(cache.len(), 2);
/// ```
#[derive(Debug)]
pub struct ArcCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// T1: live entries seen exactly once recently. Front = MRU.
    t1: IntrusiveList<ArcEntry<K, V>>,
    t1_map: FxHashMap<K, SlotId>,

    /// T2: live entries seen more than once. Front = MRU.
    t2: IntrusiveList<ArcEntry<K, V>>,
    t2_map: FxHashMap<K, SlotId>,

    /// B1: ghost history of keys evicted from T1.
    b1: GhostList<K>,

    /// B2: ghost history of keys evicted from T2.
    b2: GhostList<K>,

    /// Adaptation parameter: target size for T1.
    p: usize,

    capacity: usize,

    #[cfg(feature = "metrics")]
    metrics: PolicyMetrics,
}

impl<K, V> ArcCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a new ARC cache with the specified capacity.
    ///
    /// The adaptation parameter `p` starts at 0 and moves only in response
    /// to ghost hits.
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

    /// Creates a new ARC cache, returning an error on invalid parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("cache capacity must be greater than zero"));
        }
        Ok(Self {
            t1: IntrusiveList::with_capacity(capacity),
            t1_map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            t2: IntrusiveList::with_capacity(capacity),
            t2_map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            b1: GhostList::with_capacity(capacity),
            b2: GhostList::with_capacity(capacity),
            p: 0,
            capacity,
            #[cfg(feature = "metrics")]
            metrics: PolicyMetrics::default(),
        })
    }

    /// Returns the current value of the adaptation parameter `p`.
    ///
    /// This is the target size for T1: higher values favor recency
    /// retention, lower values favor frequency retention.
    pub fn p_value(&self) -> usize {
        self.p
    }

    /// Returns the number of live entries in T1 (seen once recently).
    pub fn t1_len(&self) -> usize {
        self.t1.len()
    }

    /// Returns the number of live entries in T2 (seen repeatedly).
    pub fn t2_len(&self) -> usize {
        self.t2.len()
    }

    /// Returns the number of ghost keys in B1.
    pub fn b1_len(&self) -> usize {
        self.b1.len()
    }

    /// Returns the number of ghost keys in B2.
    pub fn b2_len(&self) -> usize {
        self.b2.len()
    }

    /// Moves a T1 entry to the MRU position of T2.
    fn promote_to_t2(&mut self, id: SlotId) -> SlotId {
        let entry = self.t1.remove(id).expect("t1 entry missing");
        self.t1_map.remove(&entry.key);
        let new_id = self.t2.push_front(ArcEntry {
            key: entry.key.clone(),
            value: entry.value,
        });
        self.t2_map.insert(entry.key, new_id);
        new_id
    }

    /// Inserts a brand-new live entry at the MRU position of T2.
    fn admit_to_t2(&mut self, key: K, value: V) {
        let id = self.t2.push_front(ArcEntry {
            key: key.clone(),
            value,
        });
        self.t2_map.insert(key, id);
    }

    /// Evicts one live entry, demoting its key to the matching ghost list.
    ///
    /// Takes the T1 LRU when T1 is nonempty and either exceeds its target
    /// (`|T1| > p`) or sits exactly at it while the caller is serving a B2
    /// ghost hit; otherwise takes the T2 LRU.
    fn replace(&mut self, prefer_b2: bool) {
        let from_t1 = !self.t1.is_empty()
            && (self.t1.len() > self.p || (prefer_b2 && self.t1.len() == self.p));

        if from_t1 {
            if let Some(entry) = self.t1.pop_back() {
                self.t1_map.remove(&entry.key);
                self.b1.record(entry.key);
                #[cfg(feature = "metrics")]
                self.metrics.record_eviction();
            }
        } else if let Some(entry) = self.t2.pop_back() {
            self.t2_map.remove(&entry.key);
            self.b2.record(entry.key);
            #[cfg(feature = "metrics")]
            self.metrics.record_eviction();
        }
    }

    /// Bounds the combined ghost history near one capacity's worth.
    ///
    /// Prefers dropping from the larger history; on equal sizes B1 yields
    /// first as long as B2 is nonempty.
    fn trim_ghosts(&mut self) {
        while self.b1.len() + self.b2.len() >= self.capacity {
            let from_b1 = !self.b1.is_empty()
                && (self.b1.len() > self.b2.len()
                    || (self.b1.len() == self.b2.len() && !self.b2.is_empty()));
            if from_b1 {
                self.b1.pop_oldest();
            } else if self.b2.pop_oldest().is_none() {
                break;
            }
        }
    }

    /// Drops the T1 LRU entry outright (no ghost record).
    fn drop_t1_lru(&mut self) {
        if let Some(entry) = self.t1.pop_back() {
            self.t1_map.remove(&entry.key);
            #[cfg(feature = "metrics")]
            self.metrics.record_eviction();
        }
    }

    /// Makes room for a never-seen key.
    ///
    /// When the recency side (`|T1| + |B1|`) is at its structural limit, the
    /// room must come out of that side: trim a B1 ghost and run `replace`,
    /// or, if T1 alone fills the limit, drop its LRU entry outright. When
    /// the recency side has headroom but the four lists are collectively
    /// full, trim the ghost histories first and then `replace`.
    fn make_room_for_new(&mut self) {
        if self.t1.len() + self.b1.len() == self.capacity {
            if self.t1.len() < self.capacity {
                self.b1.pop_oldest();
                self.replace(false);
            } else {
                self.drop_t1_lru();
            }
        } else {
            let total = self.t1.len() + self.t2.len() + self.b1.len() + self.b2.len();
            if total >= self.capacity {
                if self.t1.len() + self.t2.len() < 2 * self.capacity {
                    self.trim_ghosts();
                    self.replace(false);
                } else if !self.t1.is_empty() {
                    self.drop_t1_lru();
                } else if let Some(entry) = self.t2.pop_back() {
                    self.t2_map.remove(&entry.key);
                    #[cfg(feature = "metrics")]
                    self.metrics.record_eviction();
                }
            }
        }
    }

    /// Captures a snapshot of this instance's operation counters.
    #[cfg(feature = "metrics")]
    pub fn metrics(&self) -> CacheMetricsSnapshot {
        self.metrics
            .snapshot(self.t1.len() + self.t2.len(), self.capacity)
    }

    /// Validates internal invariants; panics on violation.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.t1.debug_validate_invariants();
        self.t2.debug_validate_invariants();
        self.b1.debug_validate_invariants();
        self.b2.debug_validate_invariants();

        assert_eq!(self.t1_map.len(), self.t1.len());
        assert_eq!(self.t2_map.len(), self.t2.len());
        for &id in self.t1_map.values() {
            assert!(self.t1.contains(id));
        }
        for &id in self.t2_map.values() {
            assert!(self.t2.contains(id));
        }

        assert!(self.t1.len() + self.t2.len() <= self.capacity);
        assert!(self.t1.len() + self.b1.len() <= self.capacity);
        assert!(self.p <= self.capacity);

        // No key is tracked as both live and ghost, or live in both tiers.
        for key in self.t1_map.keys() {
            assert!(!self.t2_map.contains_key(key));
            assert!(!self.b1.contains(key));
            assert!(!self.b2.contains(key));
        }
        for key in self.t2_map.keys() {
            assert!(!self.b1.contains(key));
            assert!(!self.b2.contains(key));
        }
    }
}

impl<K, V> ReadOnlyCache<K, V> for ArcCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn contains(&self, key: &K) -> bool {
        self.t1_map.contains_key(key) || self.t2_map.contains_key(key)
    }

    /// Live entries only; ghost records are not counted.
    fn len(&self) -> usize {
        self.t1.len() + self.t2.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> CoreCache<K, V> for ArcCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        // Hit in T1: a second touch graduates the entry into the frequency
        // tier.
        if let Some(&id) = self.t1_map.get(key) {
            let new_id = self.promote_to_t2(id);
            #[cfg(feature = "metrics")]
            self.metrics.record_get(true);
            return self.t2.get(new_id).map(|entry| &entry.value);
        }

        // Hit in T2: refresh recency within the frequency tier.
        if let Some(&id) = self.t2_map.get(key) {
            self.t2.move_to_front(id);
            #[cfg(feature = "metrics")]
            self.metrics.record_get(true);
            return self.t2.get(id).map(|entry| &entry.value);
        }

        // Ghost presence is never surfaced as a hit.
        #[cfg(feature = "metrics")]
        self.metrics.record_get(false);
        None
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        // Live in T1: update and graduate, same as an access.
        if let Some(&id) = self.t1_map.get(&key) {
            let new_id = self.promote_to_t2(id);
            let entry = self.t2.get_mut(new_id).expect("t2 entry missing");
            #[cfg(feature = "metrics")]
            self.metrics.record_insert(true);
            return Some(std::mem::replace(&mut entry.value, value));
        }

        // Live in T2: update and refresh.
        if let Some(&id) = self.t2_map.get(&key) {
            self.t2.move_to_front(id);
            let entry = self.t2.get_mut(id).expect("t2 entry missing");
            #[cfg(feature = "metrics")]
            self.metrics.record_insert(true);
            return Some(std::mem::replace(&mut entry.value, value));
        }

        // Recency near-miss: the key was one eviction away from a T1 hit.
        // Grow the T1 target proportionally to how lopsided the histories
        // are, free a live slot, and admit straight into T2.
        if self.b1.contains(&key) {
            let delta = (self.b2.len() / self.b1.len()).max(1);
            self.p = (self.p + delta).min(self.capacity);
            self.replace(false);
            self.b1.remove(&key);
            self.admit_to_t2(key, value);
            #[cfg(feature = "metrics")]
            {
                self.metrics.record_ghost_hit();
                self.metrics.record_insert(false);
            }
            return None;
        }

        // Frequency near-miss: symmetric, shrinking the T1 target.
        if self.b2.contains(&key) {
            let delta = (self.b1.len() / self.b2.len()).max(1);
            self.p = self.p.saturating_sub(delta);
            self.replace(true);
            self.b2.remove(&key);
            self.admit_to_t2(key, value);
            #[cfg(feature = "metrics")]
            {
                self.metrics.record_ghost_hit();
                self.metrics.record_insert(false);
            }
            return None;
        }

        // Never seen: make room, then enter through the recency tier.
        self.make_room_for_new();
        let id = self.t1.push_front(ArcEntry {
            key: key.clone(),
            value,
        });
        self.t1_map.insert(key, id);
        #[cfg(feature = "metrics")]
        self.metrics.record_insert(false);
        None
    }

    fn clear(&mut self) {
        self.t1.clear();
        self.t1_map.clear();
        self.t2.clear();
        self.t2_map.clear();
        self.b1.clear();
        self.b2.clear();
        self.p = 0;
    }
}

impl<K, V> MutableCache<K, V> for ArcCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Removes a live entry. Ghost records are not reachable through
    /// `remove`; they age out through the ghost-trim rules.
    fn remove(&mut self, key: &K) -> Option<V> {
        if let Some(id) = self.t1_map.remove(key) {
            return self.t1.remove(id).map(|entry| entry.value);
        }
        if let Some(id) = self.t2_map.remove(key) {
            return self.t2.remove(id).map(|entry| entry.value);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_new_cache() {
        let cache: ArcCache<String, i32> = ArcCache::new(100);
        assert_eq!(cache.capacity(), 100);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.t1_len(), 0);
        assert_eq!(cache.t2_len(), 0);
        assert_eq!(cache.b1_len(), 0);
        assert_eq!(cache.b2_len(), 0);
        assert_eq!(cache.p_value(), 0);
    }

    #[test]
    fn arc_zero_capacity_rejected() {
        assert!(ArcCache::<u64, u64>::try_new(0).is_err());
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn arc_new_zero_capacity_panics() {
        let _ = ArcCache::<u64, u64>::new(0);
    }

    #[test]
    fn arc_insert_and_get() {
        let mut cache = ArcCache::new(10);

        // First insert goes to T1.
        cache.insert("key1", "value1");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.t1_len(), 1);
        assert_eq!(cache.t2_len(), 0);

        // Get promotes to T2.
        assert_eq!(cache.get(&"key1"), Some(&"value1"));
        assert_eq!(cache.t1_len(), 0);
        assert_eq!(cache.t2_len(), 1);

        // Second get stays in T2.
        assert_eq!(cache.get(&"key1"), Some(&"value1"));
        assert_eq!(cache.t1_len(), 0);
        assert_eq!(cache.t2_len(), 1);
        cache.debug_validate_invariants();
    }

    #[test]
    fn arc_update_existing_graduates() {
        let mut cache = ArcCache::new(10);

        cache.insert("key1", "value1");
        assert_eq!(cache.t1_len(), 1);

        // Overwriting a T1 entry counts as a touch: it moves to T2.
        let old = cache.insert("key1", "new_value");
        assert_eq!(old, Some("value1"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.t1_len(), 0);
        assert_eq!(cache.t2_len(), 1);

        assert_eq!(cache.get(&"key1"), Some(&"new_value"));
    }

    #[test]
    fn arc_eviction_trace() {
        // The canonical capacity-2 trace: a graduates to T2, b falls to B1,
        // c lands in T1.
        let mut cache = ArcCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        assert_eq!(cache.get(&"a"), Some(&1));
        cache.insert("c", 3);

        assert_eq!(cache.t1_len(), 1);
        assert_eq!(cache.t2_len(), 1);
        assert_eq!(cache.b1_len(), 1);
        assert_eq!(cache.len(), 2);

        // Ghost presence is never a hit.
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"c"), Some(&3));
        assert_eq!(cache.t2_len(), 2);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.len(), 2);
        cache.debug_validate_invariants();
    }

    #[test]
    fn arc_scan_evicts_directly_without_ghosts() {
        // Pure one-touch scans fill T1; once |T1| == capacity the direct
        // eviction path drops entries without recording history, so p never
        // moves.
        let mut cache = ArcCache::new(4);
        for i in 0..100u32 {
            cache.insert(i, i);
            assert!(cache.len() <= 4);
        }
        assert_eq!(cache.t1_len(), 4);
        assert_eq!(cache.b1_len(), 0);
        assert_eq!(cache.p_value(), 0);
        cache.debug_validate_invariants();
    }

    #[test]
    fn arc_b1_ghost_hit_raises_p_and_readmits_to_t2() {
        let mut cache = ArcCache::new(4);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("c", 3);
        cache.insert("d", 4);
        cache.get(&"a");
        cache.get(&"b");
        // T1 = [d, c], T2 = [b, a]
        cache.insert("e", 5); // replace() takes T1 LRU: "c" → B1
        assert!(cache.b1.contains(&"c"));
        assert_eq!(cache.p_value(), 0);

        cache.insert("c", 30); // B1 ghost hit
        assert_eq!(cache.p_value(), 1);
        assert!(!cache.b1.contains(&"c"));
        assert_eq!(cache.get(&"c"), Some(&30));
        assert_eq!(cache.len(), 4);
        // Readmission goes to the frequency tier, not T1.
        assert!(cache.t2_map.contains_key(&"c"));
        cache.debug_validate_invariants();
    }

    #[test]
    fn arc_b2_ghost_hit_lowers_p() {
        let mut cache = ArcCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.get(&"a"); // T1=[b], T2=[a]
        cache.insert("c", 3); // replace: "b" → B1

        // B1 ghost hit raises p to 1 and pushes "a" out of T2 into B2.
        cache.insert("b", 20);
        assert_eq!(cache.p_value(), 1);
        assert!(cache.b2.contains(&"a"));

        // B2 ghost hit lowers p again.
        cache.insert("a", 10);
        assert_eq!(cache.p_value(), 0);
        assert!(!cache.b2.contains(&"a"));
        assert_eq!(cache.get(&"a"), Some(&10));
        assert_eq!(cache.len(), 2);
        cache.debug_validate_invariants();
    }

    #[test]
    fn arc_recency_limit_trims_b1_before_replacing() {
        // Drive |T1| + |B1| to the capacity limit with B1 nonempty and
        // verify the oldest B1 ghost is dropped to admit the new key.
        let mut cache = ArcCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.get(&"a"); // T1=[b], T2=[a]
        cache.insert("c", 3); // replace: "b" → B1; T1=[c]
        assert_eq!(cache.t1_len(), 1);
        assert_eq!(cache.b1_len(), 1);

        // |T1| + |B1| == 2 == capacity, with |T1| < capacity.
        cache.insert("d", 4);
        assert_eq!(cache.b1_len(), 1); // "b" dropped, "c" demoted in its place
        assert!(!cache.b1.contains(&"b"));
        assert!(cache.b1.contains(&"c"));
        assert_eq!(cache.len(), 2);
        cache.debug_validate_invariants();
    }

    #[test]
    fn arc_ghost_histories_stay_bounded() {
        let mut cache = ArcCache::new(8);
        for i in 0..64u32 {
            cache.insert(i, i);
            // Sprinkle repeat touches so both tiers and histories populate.
            if i % 3 == 0 {
                cache.get(&(i / 2));
            }
            assert!(cache.b1_len() + cache.b2_len() <= cache.capacity());
            cache.debug_validate_invariants();
        }
    }

    #[test]
    fn arc_remove_live_entries() {
        let mut cache = ArcCache::new(10);
        cache.insert("key1", "value1");
        cache.insert("key2", "value2");
        cache.get(&"key1"); // key1 in T2, key2 in T1

        assert_eq!(cache.remove(&"key1"), Some("value1"));
        assert_eq!(cache.remove(&"key2"), Some("value2"));
        assert_eq!(cache.remove(&"key2"), None);
        assert!(cache.is_empty());
        cache.debug_validate_invariants();
    }

    #[test]
    fn arc_clear_resets_adaptation() {
        let mut cache = ArcCache::new(4);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.get(&"a");
        cache.insert("c", 3);
        cache.insert("d", 4);
        cache.insert("e", 5);

        cache.clear();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.t1_len(), 0);
        assert_eq!(cache.t2_len(), 0);
        assert_eq!(cache.b1_len(), 0);
        assert_eq!(cache.b2_len(), 0);
        assert_eq!(cache.p_value(), 0);
    }

    #[test]
    fn arc_idempotent_get() {
        let mut cache = ArcCache::new(4);
        cache.insert("a", 1);
        let first = cache.get(&"a").copied();
        let second = cache.get(&"a").copied();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn arc_metrics_record_ghost_hits() {
        let mut cache = ArcCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.get(&"a");
        cache.insert("c", 3); // "b" → B1
        cache.insert("b", 20); // ghost hit

        let snap = cache.metrics();
        assert_eq!(snap.ghost_hits, 1);
        assert!(snap.evicted_entries >= 1);
    }
}
