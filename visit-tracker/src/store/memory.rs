//! In-process store for tests and local runs without Redis.

use super::{COUNTER_KEY, StoreError, VisitStore};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
struct MemoryData {
    counter: Option<String>,
    markers: VecDeque<String>,
}

/// Mirrors the Redis commands the service uses. Each operation holds the lock
/// for its own duration only, so like Redis it is atomic per command and not
/// across commands.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<MemoryData>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation fail with [`StoreError::Unavailable`], as if the
    /// backing server had gone away.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    /// Overwrite the raw counter value.
    pub fn set_counter_raw(&self, raw: &str) {
        if let Ok(mut data) = self.data.lock() {
            data.counter = Some(raw.to_string());
        }
    }

    fn with_data<T>(&self, f: impl FnOnce(&mut MemoryData) -> Result<T, StoreError>) -> Result<T, StoreError> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable);
        }
        let mut data = self.data.lock().map_err(|_| StoreError::Unavailable)?;
        f(&mut *data)
    }
}

/// Resolve Redis-style inclusive indices against a list of `len` items.
/// Returns `None` when the range selects nothing.
fn resolve_range(len: usize, start: isize, stop: isize) -> Option<(usize, usize)> {
    let len = len as isize;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
    if len == 0 || start > stop || start >= len {
        return None;
    }
    Some((start as usize, stop as usize))
}

#[async_trait]
impl VisitStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn get_counter(&self) -> Result<Option<String>, StoreError> {
        self.with_data(|data| Ok(data.counter.clone()))
    }

    async fn increment_counter(&self) -> Result<i64, StoreError> {
        self.with_data(|data| {
            let current: i64 = match &data.counter {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| StoreError::NotAnInteger(COUNTER_KEY))?,
                None => 0,
            };
            let next = current
                .checked_add(1)
                .ok_or(StoreError::Overflow(COUNTER_KEY))?;
            data.counter = Some(next.to_string());
            Ok(next)
        })
    }

    async fn push_marker(&self, raw: &str) -> Result<(), StoreError> {
        self.with_data(|data| {
            data.markers.push_front(raw.to_string());
            Ok(())
        })
    }

    async fn trim_markers(&self, start: isize, stop: isize) -> Result<(), StoreError> {
        self.with_data(|data| {
            match resolve_range(data.markers.len(), start, stop) {
                Some((start, stop)) => {
                    data.markers.truncate(stop + 1);
                    data.markers.drain(..start);
                }
                None => data.markers.clear(),
            }
            Ok(())
        })
    }

    async fn list_markers(&self, start: isize, stop: isize) -> Result<Vec<String>, StoreError> {
        self.with_data(|data| {
            Ok(match resolve_range(data.markers.len(), start, stop) {
                Some((start, stop)) => data.markers.range(start..=stop).cloned().collect(),
                None => Vec::new(),
            })
        })
    }

    async fn delete_counter(&self) -> Result<(), StoreError> {
        self.with_data(|data| {
            data.counter = None;
            Ok(())
        })
    }

    async fn delete_markers(&self) -> Result<(), StoreError> {
        self.with_data(|data| {
            data.markers.clear();
            Ok(())
        })
    }
}
