//! Recency-ordered list of ghost keys.
//!
//! Used by adaptive policies (ARC-style) to track recently evicted keys
//! without retaining values. Implemented as an `IntrusiveList<K>` plus an
//! index. Ghost records carry the key only, so a ghost can never expose
//! stale application data.
//!
//! ```text
//!   index: HashMap<K, SlotId>          list: IntrusiveList<K>
//!   ┌─────────┬─────────┐              head ─► [A] ◄──► [B] ◄──► [C] ◄── tail
//!   │  key A  │  id_1   │                 newest                  oldest
//!   │  key B  │  id_2   │
//!   └─────────┴─────────┘
//! ```
//!
//! The list itself is unbounded; the owning policy bounds it explicitly
//! (e.g. ARC's ghost-trim loop). `record` / `remove` / `contains` /
//! `pop_oldest` are O(1) average.

use std::collections::HashMap;
use std::hash::Hash;

use crate::ds::intrusive_list::IntrusiveList;
use crate::ds::slot_arena::SlotId;

/// Recency list of keys (no values) for ghost-history tracking.
#[derive(Debug)]
pub struct GhostList<K> {
    list: IntrusiveList<K>,
    index: HashMap<K, SlotId>,
}

impl<K> GhostList<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty ghost list.
    pub fn new() -> Self {
        Self {
            list: IntrusiveList::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty ghost list with reserved capacity for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: IntrusiveList::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of keys currently tracked.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if there are no keys tracked.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns `true` if `key` is present.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Records `key` as the most recent ghost.
    ///
    /// If the key is already tracked it is refreshed to the most-recent
    /// position instead of being duplicated.
    pub fn record(&mut self, key: K) {
        if let Some(&id) = self.index.get(&key) {
            self.list.move_to_front(id);
            return;
        }

        let id = self.list.push_front(key.clone());
        self.index.insert(key, id);
    }

    /// Drops and returns the oldest ghost key, if any.
    pub fn pop_oldest(&mut self) -> Option<K> {
        let key = self.list.pop_back()?;
        self.index.remove(&key);
        Some(key)
    }

    /// Removes `key` from the ghost list; returns `true` if it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        let id = match self.index.remove(key) {
            Some(id) => id,
            None => return false,
        };
        self.list.remove(id);
        true
    }

    /// Clears all tracked keys.
    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.list.len(), self.index.len());
        for &id in self.index.values() {
            assert!(self.list.contains(id));
        }
    }
}

impl<K> Default for GhostList<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
