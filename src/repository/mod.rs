// 存储库模块
// 组合记录存储与过期缓存的旁路缓存协调器

pub mod user;

pub use user::{CachedUserRepository, DEFAULT_USER_TTL};
