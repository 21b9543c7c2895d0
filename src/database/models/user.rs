use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 用户数据库实体
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserEntity {
    /// 由存储分配的自增主键，不会复用
    pub id: i64,
    /// 唯一备用键，由存储的唯一索引约束
    pub email: String,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
