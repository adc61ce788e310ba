//! LeafScan 核心逻辑
//!
//! 与浏览器无关的部分：文案查找、会话镜像与路由守卫、识别提交流程、历史列表。
//! 所有外部协作方（认证、对象存储、识别函数、记录表、本地存储）都以 trait 注入，
//! 前端 crate 提供基于 REST 的实现，测试提供内存实现。

pub mod clock;
pub mod config;
pub mod contact;
pub mod error;
pub mod history;
pub mod locale;
pub mod onboarding;
pub mod route;
pub mod session;
pub mod theme;
pub mod workflow;

pub use config::AppConfig;
pub use error::{AppError, AppResult, ErrorKind};
pub use locale::Language;
pub use route::AppRoute;
