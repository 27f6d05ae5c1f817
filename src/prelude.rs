pub use crate::builder::{Cache, CacheBuilder, CachePolicy};
pub use crate::ds::{GhostList, IntrusiveList, SlotArena, SlotId};
pub use crate::error::{ConfigError, StoreError};
pub use crate::policy::arc::ArcCache;
pub use crate::policy::fifo::FifoCache;
pub use crate::policy::lfu::LfuCache;
pub use crate::policy::lru::LruCache;
pub use crate::store::{BackingStore, MemoryStore, ReadThrough};
pub use crate::traits::{
    CoreCache, FifoCacheTrait, LfuCacheTrait, LruCacheTrait, MutableCache, ReadOnlyCache,
};

#[cfg(feature = "concurrency")]
pub use crate::sync::SyncCache;

#[cfg(feature = "metrics")]
pub use crate::metrics::CacheMetricsSnapshot;
