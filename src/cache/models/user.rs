use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::database::models::user::UserEntity;

/// 用户缓存数据模型，以 JSON 形式存入缓存
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CachedUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: i64, // Unix timestamp
}

impl From<&UserEntity> for CachedUser {
    fn from(user: &UserEntity) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: user.created_at.timestamp(),
        }
    }
}

impl CachedUser {
    /// 还原为数据库实体
    ///
    /// 时间戳无法表示时返回 None，调用方按损坏条目处理。
    pub fn into_entity(self) -> Option<UserEntity> {
        let created_at = DateTime::from_timestamp(self.created_at, 0)?;

        Some(UserEntity {
            id: self.id,
            email: self.email,
            name: self.name,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn snapshot_round_trips() {
        let user = UserEntity {
            id: 7,
            email: "alice@example.com".to_string(),
            name: "Alice Smith".to_string(),
            created_at: Utc::now(),
        };

        let restored = CachedUser::from(&user).into_entity().unwrap();
        assert_eq!(restored.id, user.id);
        assert_eq!(restored.email, user.email);
        assert_eq!(restored.name, user.name);
        // 快照精确到秒
        assert_eq!(restored.created_at.timestamp(), user.created_at.timestamp());
    }

    #[test]
    fn rejects_unrepresentable_timestamp() {
        let cached = CachedUser {
            id: 1,
            email: "bad@example.com".to_string(),
            name: "Bad".to_string(),
            created_at: i64::MAX,
        };

        assert!(cached.into_entity().is_none());
    }
}
