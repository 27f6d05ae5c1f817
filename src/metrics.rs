//! Per-instance operation counters, compiled in with the `metrics` feature.
//!
//! Each policy embeds a [`PolicyMetrics`] behind `#[cfg(feature = "metrics")]`
//! and records into it on the hot paths. [`CacheMetricsSnapshot`] is a plain
//! copyable view for callers; there is no exporter or reporting layer.

/// Counters recorded by a single cache instance.
#[derive(Debug, Default)]
pub struct PolicyMetrics {
    get_calls: u64,
    get_hits: u64,
    get_misses: u64,

    insert_calls: u64,
    insert_updates: u64,
    insert_new: u64,

    evicted_entries: u64,

    /// ARC only: inserts that matched a ghost record in B1 or B2.
    ghost_hits: u64,
}

impl PolicyMetrics {
    pub(crate) fn record_get(&mut self, hit: bool) {
        self.get_calls += 1;
        if hit {
            self.get_hits += 1;
        } else {
            self.get_misses += 1;
        }
    }

    pub(crate) fn record_insert(&mut self, update: bool) {
        self.insert_calls += 1;
        if update {
            self.insert_updates += 1;
        } else {
            self.insert_new += 1;
        }
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evicted_entries += 1;
    }

    pub(crate) fn record_ghost_hit(&mut self) {
        self.ghost_hits += 1;
    }

    /// Captures a copyable snapshot, with current len/capacity gauges.
    pub(crate) fn snapshot(&self, cache_len: usize, capacity: usize) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            get_calls: self.get_calls,
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            insert_calls: self.insert_calls,
            insert_updates: self.insert_updates,
            insert_new: self.insert_new,
            evicted_entries: self.evicted_entries,
            ghost_hits: self.ghost_hits,
            cache_len,
            capacity,
        }
    }
}

/// Copyable view of a cache instance's counters.
#[derive(Debug, Default, Clone, Copy)]
pub struct CacheMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,

    pub evicted_entries: u64,
    pub ghost_hits: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

impl CacheMetricsSnapshot {
    /// Hit fraction over all `get` calls, or 0.0 before any call.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}
