use thiserror::Error;

/// 存储库统一错误类型
///
/// 存储错误原样透传给调用方；缓存错误在读路径降级为未命中，
/// 在写路径于存储提交后被吞掉，只会扩大过期窗口。
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 记录不存在
    #[error("user not found")]
    NotFound,

    /// 唯一键冲突
    #[error("email already taken")]
    Conflict,

    /// 后端存储不可用
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// 缓存层故障，序列化或传输错误
    #[error("cache unavailable: {0}")]
    CacheUnavailable(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Conflict,
            other => Self::StoreUnavailable(other.to_string()),
        }
    }
}

impl From<redis::RedisError> for RepositoryError {
    fn from(err: redis::RedisError) -> Self {
        Self::CacheUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::CacheUnavailable(err.to_string())
    }
}
