use std::fmt;

use serde::{Deserialize, Serialize};

// =========================================================
// 错误类别枚举
// =========================================================

/// 错误类别
///
/// 每个外部协作方一个类别，外加输入校验和并发提交。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// 文件类型或大小不合法，尚未发出任何网络请求
    Validation,
    /// 认证服务失败或当前没有会话
    Auth,
    /// 对象存储上传/删除失败
    Storage,
    /// 远程识别函数失败
    Classification,
    /// 记录表读写失败
    Database,
    /// 请求未到达服务端（fetch 失败、读取文件失败）
    Network,
    /// JSON 解析或序列化错误
    Serialization,
    /// 已有一次提交正在进行
    Busy,
}

impl ErrorKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "INVALID_INPUT",
            ErrorKind::Auth => "AUTH_FAILED",
            ErrorKind::Storage => "STORAGE_ERROR",
            ErrorKind::Classification => "CLASSIFICATION_ERROR",
            ErrorKind::Database => "DATABASE_ERROR",
            ErrorKind::Network => "NETWORK_ERROR",
            ErrorKind::Serialization => "JSON_PARSE_ERROR",
            ErrorKind::Busy => "SUBMISSION_IN_FLIGHT",
        }
    }
}

// =========================================================
// 输入校验错误
// =========================================================

/// 选中文件未通过校验
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please upload an image file")]
    NotAnImage { media_type: String },
    #[error("Image size should be less than {limit_mib}MB")]
    TooLarge { size: u64, limit_mib: u64 },
}

// =========================================================
// 错误上下文追踪
// =========================================================

/// 结构化的错误追踪片段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorSpan {
    /// 操作名称，如 "storage.upload", "records.insert"
    pub operation: String,
    /// 额外的细节信息，如对象 key、记录 id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorSpan {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: None,
        }
    }

    pub fn with_detail(operation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: Some(detail.into()),
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

/// Application Domain Errors
///
/// - kind: 错误类别
/// - message: 面向用户的消息（通常是协作方返回的原文）
/// - source: 原始错误（可选，用于错误链）
/// - spans: 结构化的调用追踪栈
#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    source: Option<Box<dyn std::error::Error + 'static>>,
    spans: Vec<ErrorSpan>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
            spans: Vec::new(),
        }
    }

    // --- Convenience constructors ---

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Auth, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    pub fn classification(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Classification, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    pub fn busy() -> Self {
        Self::new(ErrorKind::Busy, "A detection is already in progress")
    }

    /// 未登录时的统一错误
    pub fn no_session() -> Self {
        Self::auth("You must be signed in")
    }

    // --- Context builders (Builder Pattern) ---

    /// 添加操作追踪（无额外细节）
    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan::new(operation));
        self
    }

    /// 添加操作追踪（带额外细节）
    pub fn in_op_with(mut self, operation: impl Into<String>, detail: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan::with_detail(operation, detail));
        self
    }

    /// 设置原始错误源
    pub fn with_source<E: std::error::Error + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // --- Accessors ---

    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn spans(&self) -> &[ErrorSpan] {
        &self.spans
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }
}

// =========================================================
// Display & Error trait 实现
// =========================================================

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)?;

        if !self.spans.is_empty() {
            write!(f, " | trace: ")?;
            for (i, span) in self.spans.iter().enumerate() {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{}", span.operation)?;
                if let Some(detail) = &span.detail {
                    write!(f, "({})", detail)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

// =========================================================
// 类型转换实现
// =========================================================

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::new(ErrorKind::Validation, e.to_string()).with_source(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::serialization(e.to_string()).with_source(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_includes_trace() {
        let err = AppError::storage("Bucket not found")
            .in_op_with("storage.upload", "u-1/1700000000000.png")
            .in_op("workflow.submit");
        assert_eq!(
            err.to_string(),
            "[STORAGE_ERROR] Bucket not found | trace: storage.upload(u-1/1700000000000.png) -> workflow.submit"
        );
        assert_eq!(err.spans().len(), 2);
    }

    #[test]
    fn test_validation_error_keeps_source() {
        let err: AppError = ValidationError::TooLarge {
            size: 6 * 1024 * 1024,
            limit_mib: 5,
        }
        .into();
        assert!(err.is_validation());
        assert_eq!(err.message(), "Image size should be less than 5MB");
        assert!(err.source().is_some());
    }
}
