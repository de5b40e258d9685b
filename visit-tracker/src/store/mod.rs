//! Key-value storage behind the visit tracker.
//!
//! The counter lives at [`COUNTER_KEY`] as an integer string. Markers live at
//! [`MARKERS_KEY`] as a list of JSON strings, newest at the head, capped at
//! [`MARKER_CAP`] entries. Counter and list are written by separate commands;
//! nothing here makes a visit atomic.

mod memory;
mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use crate::config::{Config, StoreBackend};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

pub const COUNTER_KEY: &str = "visits";
pub const MARKERS_KEY: &str = "locations";
/// Maximum number of markers kept in the list.
pub const MARKER_CAP: isize = 200;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("redis: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("value at `{0}` is not an integer")]
    NotAnInteger(&'static str),
    #[error("increment of `{0}` would overflow")]
    Overflow(&'static str),
    #[error("store unavailable")]
    Unavailable,
}

/// Raw store operations. List indices follow Redis `LRANGE`/`LTRIM`
/// semantics: inclusive on both ends, negative values count from the tail.
#[async_trait]
pub trait VisitStore: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    /// Raw counter value, `None` when the key is absent.
    async fn get_counter(&self) -> Result<Option<String>, StoreError>;

    /// Increment the counter by one and return the new value.
    async fn increment_counter(&self) -> Result<i64, StoreError>;

    /// Prepend an encoded marker to the list.
    async fn push_marker(&self, raw: &str) -> Result<(), StoreError>;

    /// Keep only the markers in `start..=stop`.
    async fn trim_markers(&self, start: isize, stop: isize) -> Result<(), StoreError>;

    /// Encoded markers in `start..=stop`, newest first.
    async fn list_markers(&self, start: isize, stop: isize) -> Result<Vec<String>, StoreError>;

    async fn delete_counter(&self) -> Result<(), StoreError>;

    async fn delete_markers(&self) -> Result<(), StoreError>;
}

/// Current visit count, or 0 if it cannot be read.
///
/// This read is lossy on purpose: pages that only display the counter must
/// not fail because the store is down or the key holds garbage.
pub async fn visit_count(store: &dyn VisitStore) -> i64 {
    match store.get_counter().await {
        Ok(None) => 0,
        Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Counter `{}` holds non-integer {:?}, reading as 0", COUNTER_KEY, raw);
            0
        }),
        Err(e) => {
            log::warn!("Failed to read counter from {} store, reading as 0: {}", store.backend_tag(), e);
            0
        }
    }
}

/// Open the store selected by the configuration. Opening never touches the
/// network; connection failures surface on the first command.
pub fn open(config: &Config) -> Result<Arc<dyn VisitStore>, StoreError> {
    match config.store_backend {
        StoreBackend::Redis => Ok(Arc::new(RedisStore::open(&config.redis_url())?)),
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}
