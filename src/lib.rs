pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod repository;

pub use cache::{ExpiringCache, RedisUserCache};
pub use config::Config;
pub use database::{PgUserRepository, UserEntity, UserStore};
pub use error::{RepositoryError, Result};
pub use repository::CachedUserRepository;
