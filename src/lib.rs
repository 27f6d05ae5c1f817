//! cachefront: fixed-capacity in-process caching with pluggable eviction.
//!
//! Four eviction policies (FIFO, LRU, LFU, ARC) behind one uniform
//! contract, intended as a front for a slower backing store: on a miss the
//! caller fetches from the store and inserts the result.
//!
//! ```
//! use cachefront::policy::arc::ArcCache;
//! use cachefront::traits::{CoreCache, ReadOnlyCache};
//!
//! let mut cache = ArcCache::new(100);
//! cache.insert("page", "content");
//! assert_eq!(cache.get(&"page"), Some(&"content"));
//! assert_eq!(cache.len(), 1);
//! ```
//!
//! Policies are single-threaded structures; concurrent use requires external
//! mutual exclusion (the `concurrency` feature provides a mutex adapter).

pub mod builder;
pub mod ds;
pub mod entry;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod policy;
pub mod prelude;
pub mod store;

#[cfg(feature = "concurrency")]
pub mod sync;

pub mod traits;
