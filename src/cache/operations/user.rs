use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use crate::cache::traits::ExpiringCache;
use crate::error::Result;

/// 用户缓存的 Redis 实现
pub struct RedisUserCache {
    client: Arc<RedisClient>,
}

impl RedisUserCache {
    pub fn new(client: Arc<RedisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExpiringCache for RedisUserCache {
    /// 读取键值
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let result: Option<String> = conn.get(key).await?;

        Ok(result)
    }

    /// 写入键值并设置过期时间
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let _: () = conn.set_ex(key, value, ttl.as_secs()).await?;

        Ok(())
    }

    /// 删除键
    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let _: () = conn.del(key).await?;

        Ok(())
    }

    /// 判断键是否存在
    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let exists: bool = conn.exists(key).await?;

        Ok(exists)
    }

    /// 查询键的剩余存活时间
    async fn ttl_remaining(&self, key: &str) -> Result<Option<Duration>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        // TTL 返回 -2 表示键不存在，-1 表示未设置过期
        let secs: i64 = conn.ttl(key).await?;
        if secs < 0 {
            return Ok(None);
        }

        Ok(Some(Duration::from_secs(secs as u64)))
    }
}
