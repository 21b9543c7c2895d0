// 数据库模块
// 包含数据库实体定义、存储契约与 PostgreSQL 存储库实现

use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

use crate::config::Config;
use crate::error::Result;

pub mod models;
pub mod repositories;
pub mod traits;

// 重新导出常用类型，方便其他模块使用
pub use models::user::UserEntity;
pub use repositories::user::PgUserRepository;
pub use traits::UserStore;

/// 创建数据库连接池
pub async fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET application_name = 'usercache';").await?;
                Ok(())
            })
        })
        .connect(&config.database_url)
        .await?;

    Ok(pool)
}
