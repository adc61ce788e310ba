//! 托管后端的线协议
//!
//! 认证（GoTrue 风格）、表（PostgREST 风格）、对象存储与函数调用的路径和载荷。

use crate::{Session, Timestamp, User};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// 认证请求 (Auth)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpMetadata {
    pub name: String,
}

/// 注册新用户
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub data: SignUpMetadata,
}

/// 注册响应
///
/// 开启邮件确认时服务端直接返回用户对象，否则返回带 `user` 的会话。
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    /// 仅在关闭邮件确认时返回
    #[serde(default)]
    pub access_token: Option<String>,
}

impl SignUpResponse {
    pub fn user_id(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|u| u.id.as_str())
            .or(self.id.as_deref())
    }
}

impl ApiRequest for SignUpRequest {
    type Response = SignUpResponse;
    const PATH: &'static str = "/auth/v1/signup";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 邮箱密码登录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordGrantRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for PasswordGrantRequest {
    type Response = TokenResponse;
    const PATH: &'static str = "/auth/v1/token?grant_type=password";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 刷新令牌
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshGrantRequest {
    pub refresh_token: String,
}

impl ApiRequest for RefreshGrantRequest {
    type Response = TokenResponse;
    const PATH: &'static str = "/auth/v1/token?grant_type=refresh_token";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 注销（需携带当前 access token）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoutRequest {}

impl ApiRequest for LogoutRequest {
    type Response = ();
    const PATH: &'static str = "/auth/v1/logout";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 令牌端点响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// 有效期（秒）
    pub expires_in: i64,
    /// 过期时刻（Unix 秒），部分部署不返回
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

impl TokenResponse {
    /// 转换为会话；缺少 `expires_at` 时由 `now + expires_in` 推算
    pub fn into_session(self, now: Timestamp) -> Session {
        let expires_at = match self.expires_at {
            Some(secs) => Timestamp::from_secs(secs),
            None => Timestamp::new(now.as_millis() + self.expires_in * 1000),
        };
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

// =========================================================
// 函数调用 (Functions)
// =========================================================

/// 识别函数请求体：base64 data URI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    pub image_data: String,
}

pub fn function_path(name: &str) -> String {
    format!("/functions/v1/{}", name)
}

// =========================================================
// 表与对象存储路径 (REST / Storage)
// =========================================================

pub fn table_path(table: &str) -> String {
    format!("/rest/v1/{}", table)
}

pub fn object_path(bucket: &str, key: &str) -> String {
    format!("/storage/v1/object/{}/{}", bucket, key)
}

pub fn public_object_path(bucket: &str, key: &str) -> String {
    format!("/storage/v1/object/public/{}/{}", bucket, key)
}

// =========================================================
// 错误载荷
// =========================================================

/// 托管后端各服务的错误体
///
/// 不同服务使用不同字段承载消息文本，按优先级取第一个非空字段。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn into_message(self) -> Option<String> {
        [self.message, self.msg, self.error_description, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_response_accepts_both_shapes() {
        let bare: SignUpResponse = serde_json::from_str(r#"{"id":"u-1","email":"a@b"}"#).unwrap();
        assert_eq!(bare.user_id(), Some("u-1"));
        assert_eq!(bare.access_token, None);

        let wrapped: SignUpResponse =
            serde_json::from_str(r#"{"access_token":"t","user":{"id":"u-2"}}"#).unwrap();
        assert_eq!(wrapped.user_id(), Some("u-2"));
        assert_eq!(wrapped.access_token.as_deref(), Some("t"));
    }

    #[test]
    fn test_token_response_derives_expiry_from_expires_in() {
        let token = TokenResponse {
            access_token: "a".into(),
            refresh_token: "r".into(),
            expires_in: 3600,
            expires_at: None,
            user: User {
                id: "u".into(),
                email: None,
            },
        };
        let session = token.into_session(Timestamp::new(1_000));
        assert_eq!(session.expires_at.as_millis(), 3_601_000);
    }

    #[test]
    fn test_error_body_prefers_first_non_empty_field() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"","error_description":"Invalid login credentials","error":"invalid_grant"}"#)
                .unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Invalid login credentials"));
        assert_eq!(ApiErrorBody::default().into_message(), None);
    }

    #[test]
    fn test_classify_request_wire_name() {
        let json = serde_json::to_string(&ClassifyRequest {
            image_data: "data:image/png;base64,AAAA".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"imageData":"data:image/png;base64,AAAA"}"#);
    }
}
