// 缓存模块
// 包含缓存键构造、缓存数据结构、缓存契约与 Redis 实现

use std::sync::Arc;

use redis::Client as RedisClient;

use crate::config::Config;
use crate::error::Result;

pub mod keys;
pub mod models;
pub mod operations;
pub mod traits;

// 重新导出常用类型，方便其他模块使用
pub use models::user::CachedUser;
pub use operations::user::RedisUserCache;
pub use traits::ExpiringCache;

/// 创建 Redis 客户端
pub fn connect(config: &Config) -> Result<Arc<RedisClient>> {
    let client = RedisClient::open(config.redis_url.clone())?;
    Ok(Arc::new(client))
}
