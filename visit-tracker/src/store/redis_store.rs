use super::{COUNTER_KEY, MARKERS_KEY, StoreError, VisitStore};
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;

/// Redis-backed store. One client per process; a multiplexed connection is
/// fetched per operation and no command is retried.
pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    /// Parses the URL only. No connection is made until the first command.
    pub fn open(url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url)?;
        Ok(Self { client })
    }

    async fn connection(&self) -> Result<MultiplexedConnection, StoreError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl VisitStore for RedisStore {
    fn backend_tag(&self) -> &'static str {
        "redis"
    }

    async fn get_counter(&self) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = conn.get(COUNTER_KEY).await?;
        Ok(raw)
    }

    async fn increment_counter(&self) -> Result<i64, StoreError> {
        let mut conn = self.connection().await?;
        let count: i64 = conn.incr(COUNTER_KEY, 1_i64).await?;
        Ok(count)
    }

    async fn push_marker(&self, raw: &str) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let _: i64 = conn.lpush(MARKERS_KEY, raw).await?;
        Ok(())
    }

    async fn trim_markers(&self, start: isize, stop: isize) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let _: () = conn.ltrim(MARKERS_KEY, start, stop).await?;
        Ok(())
    }

    async fn list_markers(&self, start: isize, stop: isize) -> Result<Vec<String>, StoreError> {
        let mut conn = self.connection().await?;
        let raw: Vec<String> = conn.lrange(MARKERS_KEY, start, stop).await?;
        Ok(raw)
    }

    async fn delete_counter(&self) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let _: i64 = conn.del(COUNTER_KEY).await?;
        Ok(())
    }

    async fn delete_markers(&self) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let _: i64 = conn.del(MARKERS_KEY).await?;
        Ok(())
    }
}
