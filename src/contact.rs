//! 联系表单
//!
//! 没有后端接口，发送只是一次固定时长的模拟等待。

use std::time::Duration;

use crate::error::{AppError, AppResult, ErrorKind};

/// 模拟发送的等待时长
pub const CONTACT_SEND_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() || self.message.trim().is_empty() {
            return Err(invalid("Please fill in all fields"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(invalid("Please enter a valid email address"));
        }
        Ok(())
    }

    /// 发送成功后清空
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn invalid(message: &str) -> AppError {
    AppError::new(ErrorKind::Validation, message).in_op("contact.validate")
}

/// `@` 两侧都有内容即可
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}
