use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// 过期键值缓存契约
///
/// 键为字符串，值为序列化后的 JSON 字符串；单键读写删除由后端保证原子性。
#[async_trait]
pub trait ExpiringCache: Send + Sync {
    /// 读取键值，键不存在或已过期时返回 None
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// 写入键值并设置过期时间
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// 删除键
    async fn delete(&self, key: &str) -> Result<()>;

    /// 判断键是否存在
    async fn exists(&self, key: &str) -> Result<bool>;

    /// 查询键的剩余存活时间，键不存在或未设置过期时返回 None
    async fn ttl_remaining(&self, key: &str) -> Result<Option<Duration>>;
}
