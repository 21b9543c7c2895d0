/// 用户信息缓存键前缀
const USER_INFO_PREFIX: &str = "user:";

/// 生成用户信息缓存键
pub fn user_info_key(user_id: i64) -> String {
    format!("{}{}", USER_INFO_PREFIX, user_id)
}

#[cfg(test)]
mod tests {
    use super::user_info_key;

    #[test]
    fn formats_user_key() {
        assert_eq!(user_info_key(1), "user:1");
        assert_eq!(user_info_key(9042), "user:9042");
    }
}
