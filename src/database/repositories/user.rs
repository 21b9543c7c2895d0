use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::user::UserEntity;
use crate::database::traits::UserStore;
use crate::error::{RepositoryError, Result};

// 依赖的表结构：
//
// CREATE TABLE users (
//     id BIGSERIAL PRIMARY KEY,
//     email TEXT NOT NULL UNIQUE,
//     name TEXT NOT NULL,
//     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
// );

/// 用户存储库的 PostgreSQL 实现
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserRepository {
    /// 根据ID查找用户
    async fn get_by_id(&self, id: i64) -> Result<UserEntity> {
        let user = sqlx::query_as::<_, UserEntity>(
            "SELECT id, email, name, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or(RepositoryError::NotFound)
    }

    /// 根据邮箱查找用户
    async fn get_by_email(&self, email: &str) -> Result<UserEntity> {
        let user = sqlx::query_as::<_, UserEntity>(
            "SELECT id, email, name, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or(RepositoryError::NotFound)
    }

    /// 创建用户，邮箱唯一约束冲突映射为 Conflict
    async fn create(&self, email: &str, name: &str) -> Result<UserEntity> {
        let user = sqlx::query_as::<_, UserEntity>(
            "INSERT INTO users (email, name) VALUES ($1, $2) \
             RETURNING id, email, name, created_at",
        )
        .bind(email)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("created user {}", user.id);
        Ok(user)
    }

    /// 更新用户邮箱与名称
    async fn update(&self, id: i64, email: &str, name: &str) -> Result<()> {
        let result = sqlx::query("UPDATE users SET email = $1, name = $2 WHERE id = $3")
            .bind(email)
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        // 未命中任何行视为记录不存在，避免假成功
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// 删除用户
    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// 按ID升序列出全部用户
    async fn list(&self) -> Result<Vec<UserEntity>> {
        let users = sqlx::query_as::<_, UserEntity>(
            "SELECT id, email, name, created_at FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// 统计用户总数
    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
