//! 时间类型模块
//!
//! `Timestamp` 是可序列化的毫秒时间戳，用于上传对象的 key 和会话过期判断。

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// 毫秒时间戳，用于序列化传输和存储
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// 由秒级 Unix 时间创建（认证服务返回的 `expires_at` 是秒）
    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs * 1000)
    }

    /// 当前时间
    ///
    /// wasm32 下由 chrono 的 `wasmbind` 特性读取 `Date.now()`。
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// 获取毫秒值
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_convert_to_millis() {
        let ts = Timestamp::from_secs(1_700_000_000);
        assert_eq!(ts.as_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let ts = Timestamp::new(1_500);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1500");
        assert_eq!(serde_json::from_str::<Timestamp>("1500").unwrap(), ts);
    }
}
