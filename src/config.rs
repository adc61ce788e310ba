//! 运行时配置
//!
//! 每一项都通过变量查找函数读取，读不到就用默认值。
//! 前端在编译期用 `option_env!` 提供查找函数，测试直接传入 map。

use leafscan_shared::{
    DEFAULT_DETECT_FUNCTION, DEFAULT_DETECTIONS_TABLE, DEFAULT_IMAGE_BUCKET,
    DEFAULT_PROFILES_TABLE, MAX_IMAGE_BYTES,
};

const DEFAULT_API_URL: &str = "http://localhost:54321";

pub const VAR_API_URL: &str = "LEAFSCAN_API_URL";
pub const VAR_ANON_KEY: &str = "LEAFSCAN_ANON_KEY";
pub const VAR_IMAGE_BUCKET: &str = "LEAFSCAN_IMAGE_BUCKET";
pub const VAR_DETECT_FUNCTION: &str = "LEAFSCAN_DETECT_FUNCTION";
pub const VAR_DETECTIONS_TABLE: &str = "LEAFSCAN_DETECTIONS_TABLE";
pub const VAR_PROFILES_TABLE: &str = "LEAFSCAN_PROFILES_TABLE";
pub const VAR_MAX_UPLOAD_BYTES: &str = "LEAFSCAN_MAX_UPLOAD_BYTES";

/// 应用配置
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// 托管后端根地址（无尾部斜杠）
    pub api_url: String,
    /// 匿名访问密钥，随每个请求放在 `apikey` 头里
    pub anon_key: String,
    pub image_bucket: String,
    pub detect_function: String,
    pub detections_table: String,
    pub profiles_table: String,
    pub max_upload_bytes: u64,
}

impl AppConfig {
    /// 从变量查找函数构建配置
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let max_upload_bytes = lookup(VAR_MAX_UPLOAD_BYTES)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(MAX_IMAGE_BYTES);

        Self {
            api_url: var(VAR_API_URL, DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            anon_key: var(VAR_ANON_KEY, ""),
            image_bucket: var(VAR_IMAGE_BUCKET, DEFAULT_IMAGE_BUCKET),
            detect_function: var(VAR_DETECT_FUNCTION, DEFAULT_DETECT_FUNCTION),
            detections_table: var(VAR_DETECTIONS_TABLE, DEFAULT_DETECTIONS_TABLE),
            profiles_table: var(VAR_PROFILES_TABLE, DEFAULT_PROFILES_TABLE),
            max_upload_bytes,
        }
    }

    /// 拼接完整 URL
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_url, path)
        } else {
            format!("{}/{}", self.api_url, path)
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = AppConfig::default();
        assert_eq!(config.image_bucket, "leaf-images");
        assert_eq!(config.detect_function, "detect-disease");
        assert_eq!(config.detections_table, "detections");
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_lookup_overrides_and_trims() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (VAR_API_URL, "https://abc.example.co/"),
            (VAR_ANON_KEY, "anon"),
            (VAR_IMAGE_BUCKET, "  "),
            (VAR_MAX_UPLOAD_BYTES, "not-a-number"),
        ]);
        let config = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.api_url, "https://abc.example.co");
        assert_eq!(config.anon_key, "anon");
        assert_eq!(config.image_bucket, "leaf-images");
        assert_eq!(config.max_upload_bytes, MAX_IMAGE_BYTES);
        assert_eq!(config.url("/rest/v1/detections"), "https://abc.example.co/rest/v1/detections");
        assert_eq!(config.url("auth/v1/logout"), "https://abc.example.co/auth/v1/logout");
    }
}
