use std::time::Duration;

use crate::cache::keys::user_keys;
use crate::cache::models::user::CachedUser;
use crate::cache::traits::ExpiringCache;
use crate::database::models::user::UserEntity;
use crate::database::traits::UserStore;
use crate::error::Result;

/// 默认缓存过期时间
pub const DEFAULT_USER_TTL: Duration = Duration::from_secs(5 * 60);

/// 带缓存的用户存储库
///
/// 读取优先走缓存，未命中回源存储并回填；创建直接写入缓存，
/// 更新与删除先落存储、成功后失效缓存条目，绝不回填未经
/// 存储确认的数据。无内部锁，任意数量的任务可并发调用。
pub struct CachedUserRepository<S, C> {
    store: S,
    cache: C,
    ttl: Duration,
}

impl<S, C> CachedUserRepository<S, C>
where
    S: UserStore,
    C: ExpiringCache,
{
    /// 创建带缓存的存储库，使用默认过期时间
    pub fn new(store: S, cache: C) -> Self {
        Self::with_ttl(store, cache, DEFAULT_USER_TTL)
    }

    /// 创建带缓存的存储库并指定过期时间
    pub fn with_ttl(store: S, cache: C, ttl: Duration) -> Self {
        Self { store, cache, ttl }
    }

    /// 底层记录存储句柄，用于不走缓存的操作
    pub fn store(&self) -> &S {
        &self.store
    }

    /// 底层缓存句柄
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// 根据ID查询用户，优先读取缓存
    pub async fn get_by_id(&self, id: i64) -> Result<UserEntity> {
        let key = user_keys::user_info_key(id);

        // 先尝试从缓存获取
        match self.cache.get(&key).await {
            Ok(Some(json)) => match serde_json::from_str::<CachedUser>(&json) {
                Ok(cached) => {
                    if let Some(user) = cached.into_entity() {
                        tracing::debug!("cache hit for {}", key);
                        return Ok(user);
                    }
                    tracing::warn!("cached entry {} has invalid timestamp, treating as miss", key);
                }
                Err(e) => {
                    // 损坏条目按未命中处理，由随后的回源读取修复
                    tracing::warn!("failed to decode cached entry {}: {}", key, e);
                }
            },
            Ok(None) => {
                tracing::debug!("cache miss for {}", key);
            }
            Err(e) => {
                // 缓存故障降级为未命中，存储读取照常进行
                tracing::warn!("cache read for {} failed, falling back to store: {}", key, e);
            }
        }

        // 缓存未命中，回源存储
        let user = self.store.get_by_id(id).await?;
        self.refresh_entry(&key, &user).await;

        Ok(user)
    }

    /// 创建用户并主动写入缓存
    pub async fn create(&self, email: &str, name: &str) -> Result<UserEntity> {
        let user = self.store.create(email, name).await?;

        // 新键不存在旧值，直接写入
        let key = user_keys::user_info_key(user.id);
        self.refresh_entry(&key, &user).await;

        Ok(user)
    }

    /// 更新用户并失效缓存条目
    ///
    /// 不回填新值，下一次读取强制回源。
    pub async fn update(&self, id: i64, email: &str, name: &str) -> Result<()> {
        self.store.update(id, email, name).await?;
        self.invalidate_entry(id).await;

        Ok(())
    }

    /// 删除用户并失效缓存条目
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.store.delete(id).await?;
        self.invalidate_entry(id).await;

        Ok(())
    }

    /// 尽力而为地回填缓存条目，失败只记录日志，不影响调用结果
    async fn refresh_entry(&self, key: &str, user: &UserEntity) {
        let cached = CachedUser::from(user);
        let json = match serde_json::to_string(&cached) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("failed to serialize user {} for cache: {}", user.id, e);
                return;
            }
        };

        if let Err(e) = self.cache.set(key, &json, self.ttl).await {
            tracing::warn!("failed to cache user {}: {}", user.id, e);
        }
    }

    /// 存储写入成功后失效缓存，失败只记录日志，陈旧条目由过期时间清除
    async fn invalidate_entry(&self, id: i64) {
        let key = user_keys::user_info_key(id);
        if let Err(e) = self.cache.delete(&key).await {
            tracing::warn!("failed to invalidate cache entry {}: {}", key, e);
        }
    }
}
