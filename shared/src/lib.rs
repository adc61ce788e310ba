use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

pub use date::Timestamp;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 叶片图片所在的对象存储桶
pub const DEFAULT_IMAGE_BUCKET: &str = "leaf-images";
/// 远程病害识别函数名
pub const DEFAULT_DETECT_FUNCTION: &str = "detect-disease";
pub const DEFAULT_DETECTIONS_TABLE: &str = "detections";
pub const DEFAULT_PROFILES_TABLE: &str = "profiles";
/// 单张图片上限：5 MiB
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

pub const HEADER_API_KEY: &str = "apikey";
pub const HEADER_PREFER: &str = "Prefer";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 一次识别提交的持久化结果
///
/// 字段名与 `detections` 表的列名一致（snake_case）。
/// 记录只会被创建和删除，从不原地更新。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub id: String,
    pub user_id: String,
    pub image_url: String,
    pub disease_name: String,
    pub is_healthy: bool,
    /// 百分比，0–100
    pub confidence: f64,
    pub remedy: String,
    pub created_at: DateTime<Utc>,
}

/// 插入 `detections` 表时的请求体
///
/// `id` 与 `created_at` 由存储端生成。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDetection {
    pub user_id: String,
    pub image_url: String,
    pub disease_name: String,
    pub is_healthy: bool,
    pub confidence: f64,
    pub remedy: String,
}

impl NewDetection {
    /// 由用户 ID、图片地址和识别结果组装插入请求
    pub fn from_result(
        user_id: impl Into<String>,
        image_url: impl Into<String>,
        result: &ClassificationResult,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            image_url: image_url.into(),
            disease_name: result.disease_name.clone(),
            is_healthy: result.is_healthy,
            confidence: result.confidence,
            remedy: result.remedy.clone(),
        }
    }
}

/// 识别函数的返回结构（camelCase 线格式）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub is_healthy: bool,
    pub disease_name: String,
    pub confidence: f64,
    pub remedy: String,
}

impl From<&DetectionRecord> for ClassificationResult {
    fn from(record: &DetectionRecord) -> Self {
        Self {
            is_healthy: record.is_healthy,
            disease_name: record.disease_name.clone(),
            confidence: record.confidence,
            remedy: record.remedy.clone(),
        }
    }
}

/// 注册后写入 `profiles` 表的用户资料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// 认证用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// 已认证会话
///
/// `expires_at` 为会话过期时刻；令牌本身对前端是不透明的。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Timestamp,
    pub user: User,
}

impl Session {
    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    /// 会话是否会在 `now + margin_ms` 之前过期
    pub fn expires_within(&self, now: Timestamp, margin_ms: i64) -> bool {
        self.expires_at.as_millis() <= now.as_millis() + margin_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_result_uses_camel_case() {
        let raw = r#"{"isHealthy":false,"diseaseName":"Leaf Blight","confidence":92,"remedy":"Apply copper fungicide"}"#;
        let result: ClassificationResult = serde_json::from_str(raw).unwrap();
        assert!(!result.is_healthy);
        assert_eq!(result.disease_name, "Leaf Blight");
        assert_eq!(result.confidence, 92.0);
    }

    #[test]
    fn test_detection_record_reads_table_row() {
        let raw = r#"{
            "id": "9b1c",
            "user_id": "u-1",
            "image_url": "https://cdn/leaf.png",
            "disease_name": "Healthy",
            "is_healthy": true,
            "confidence": 97.5,
            "remedy": "None needed",
            "created_at": "2026-10-18T09:30:00.123456+00:00"
        }"#;
        let record: DetectionRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.user_id, "u-1");
        assert!(record.is_healthy);
        assert_eq!(record.created_at.timestamp(), 1_792_315_800);
    }

    #[test]
    fn test_session_expiry_window() {
        let session = Session {
            access_token: "a".into(),
            refresh_token: "r".into(),
            expires_at: Timestamp::new(100_000),
            user: User {
                id: "u".into(),
                email: None,
            },
        };
        assert!(!session.expires_within(Timestamp::new(0), 60_000));
        assert!(session.expires_within(Timestamp::new(40_000), 60_000));
    }
}
