use async_trait::async_trait;

use crate::database::models::user::UserEntity;
use crate::error::Result;

/// 用户记录存储契约
///
/// 协调器只依赖该抽象，不直接接触任何存储传输层。
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 根据ID查找用户，不存在时返回 NotFound
    async fn get_by_id(&self, id: i64) -> Result<UserEntity>;

    /// 根据邮箱查找用户，不存在时返回 NotFound
    async fn get_by_email(&self, email: &str) -> Result<UserEntity>;

    /// 创建用户，邮箱重复时返回 Conflict
    async fn create(&self, email: &str, name: &str) -> Result<UserEntity>;

    /// 更新用户，不存在时返回 NotFound
    async fn update(&self, id: i64, email: &str, name: &str) -> Result<()>;

    /// 删除用户，不存在时返回 NotFound
    async fn delete(&self, id: i64) -> Result<()>;

    /// 按ID升序列出全部用户
    async fn list(&self) -> Result<Vec<UserEntity>>;

    /// 统计用户总数
    async fn count(&self) -> Result<i64>;
}
