//! LeafScan 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `api`: 托管后端客户端，实现核心 crate 的协作方 trait
//! - `auth`: 会话镜像与令牌刷新
//! - `i18n`: 界面语言
//! - `theme`: 明暗主题
//! - `web::router`: 路由服务（守卫规则来自核心 crate）
//! - `components`: UI 组件层

mod api;
mod auth;
mod i18n;
pub mod logging;
mod theme;
mod components {
    pub mod about;
    pub mod contact;
    pub mod dashboard;
    pub mod history;
    mod icons;
    pub mod landing;
    mod language_switcher;
    pub mod login;
    pub mod nav;
    pub mod not_found;
    mod theme_toggle;
    pub mod toast;
}

use leafscan::config::{
    AppConfig, VAR_ANON_KEY, VAR_API_URL, VAR_DETECT_FUNCTION, VAR_DETECTIONS_TABLE,
    VAR_IMAGE_BUCKET, VAR_MAX_UPLOAD_BYTES, VAR_PROFILES_TABLE,
};
use leafscan::route::AppRoute;
use leptos::prelude::*;

use crate::api::{LeafScanApi, provide_api};
use crate::auth::{AuthContext, init_auth};
use crate::components::about::AboutPage;
use crate::components::contact::ContactPage;
use crate::components::dashboard::DashboardPage;
use crate::components::history::HistoryPage;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::nav::Navbar;
use crate::components::not_found::NotFoundPage;
use crate::components::toast::{ToastContext, ToastHost};
use crate::i18n::LocaleContext;
use crate::theme::ThemeContext;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod file;
    mod http;
    pub mod router;
    mod storage;
    mod timer;

    pub use file::BrowserFile;
    pub use http::{HttpClient, HttpRequestBuilder, parse_json};
    pub use storage::{BrowserPrefs, LocalStorage};
    pub use timer::Interval;
}

use web::router::{Router, RouterOutlet};

/// 构建期注入的部署配置（trunk 构建时读取环境变量）
fn app_config() -> AppConfig {
    AppConfig::from_lookup(|name| {
        let value = match name {
            VAR_API_URL => option_env!("LEAFSCAN_API_URL"),
            VAR_ANON_KEY => option_env!("LEAFSCAN_ANON_KEY"),
            VAR_IMAGE_BUCKET => option_env!("LEAFSCAN_IMAGE_BUCKET"),
            VAR_DETECT_FUNCTION => option_env!("LEAFSCAN_DETECT_FUNCTION"),
            VAR_DETECTIONS_TABLE => option_env!("LEAFSCAN_DETECTIONS_TABLE"),
            VAR_PROFILES_TABLE => option_env!("LEAFSCAN_PROFILES_TABLE"),
            VAR_MAX_UPLOAD_BYTES => option_env!("LEAFSCAN_MAX_UPLOAD_BYTES"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Auth => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::History => view! { <HistoryPage /> }.into_any(),
        AppRoute::About => view! { <AboutPage /> }.into_any(),
        AppRoute::Contact => view! { <ContactPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

/// 会话解析完成前的占位
fn pending_view() -> AnyView {
    view! {
        <div class="flex items-center justify-center min-h-screen">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
    .into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 界面语言、主题与通知
    provide_context(LocaleContext::load());
    provide_context(ThemeContext::load());
    provide_context(ToastContext::new());

    // 2. 后端客户端（恢复上次保存的会话）
    let config = app_config();
    if config.anon_key.is_empty() {
        tracing::warn!("LEAFSCAN_ANON_KEY is not set, requests will be rejected by the backend");
    }
    tracing::info!(api_url = %config.api_url, "starting leafscan");
    let api = LeafScanApi::new(config);
    provide_api(api.clone());

    // 3. 认证上下文：挂载会话跟踪器
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx, api);

    view! {
        // 4. 路由器组件：注入会话信号实现守卫
        <Router session=auth_ctx.session_signal()>
            <Navbar />
            <main>
                <RouterOutlet matcher=route_matcher pending=pending_view />
            </main>
            <ToastHost />
        </Router>
    }
}
