//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其守卫规则。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 落地页 (默认路由)
    #[default]
    Landing,
    /// 登录 / 注册
    Auth,
    /// 识别面板 (需要认证)
    Dashboard,
    /// 识别历史 (需要认证)
    History,
    About,
    Contact,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("/");
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Landing,
            "/auth" => Self::Auth,
            "/dashboard" => Self::Dashboard,
            "/history" => Self::History,
            "/about" => Self::About,
            "/contact" => Self::Contact,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Auth => "/auth",
            Self::Dashboard => "/dashboard",
            Self::History => "/history",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::History)
    }

    /// 定义已认证用户是否应该离开此路由（登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Auth)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Auth
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// 守卫：给定认证状态，返回实际应该进入的路由
    ///
    /// 被拒绝的路由在视图挂载前就被替换，因此不会为其发起任何数据请求。
    pub fn resolve(self, is_authenticated: bool) -> Self {
        if self.requires_auth() && !is_authenticated {
            Self::auth_failure_redirect()
        } else if self.should_redirect_when_authenticated() && is_authenticated {
            Self::auth_success_redirect()
        } else {
            self
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
