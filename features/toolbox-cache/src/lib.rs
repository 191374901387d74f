//! Toolbox Cache stores serializable values under string keys.
//!
//! ```rust
//! use toolbox_cache::{CodableCache, JsonCache, MemoryStore};
//!
//! let cache = JsonCache::new(MemoryStore::new());
//! cache.set("last_sync", &1_700_000_000_u64);
//!
//! assert_eq!(cache.get::<u64>("last_sync"), Some(1_700_000_000));
//! assert_eq!(cache.get::<String>("last_sync"), None);
//! ```

pub mod cache;
pub mod errors;
pub mod store;

pub use cache::{CodableCache, JsonCache};
pub use errors::CacheError;
pub use store::{KeyValueStore, MemoryStore};
