//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："请求 -> 守卫 -> 更新 History -> 切换视图"。
//! 守卫规则来自核心 crate 的 `AppRoute::resolve` 与 `redirect_for`。

use leafscan::route::AppRoute;
use leafscan::session::{SessionState, redirect_for};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 站内路由的完整地址（用于邮件中的回跳链接）
pub fn absolute_url(route: AppRoute) -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{}{}", origin, route.to_path()))
}

#[derive(Clone, Copy)]
enum HistoryMode {
    Push,
    Replace,
}

fn write_history(path: &str, mode: HistoryMode) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(path)),
    };
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；会话状态由外部注入。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    session: Signal<SessionState>,
}

impl RouterService {
    fn new(session: Signal<SessionState>) -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_path()));
        Self {
            current_route,
            set_route,
            session,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate_to(&self, route: AppRoute) {
        self.go(route, HistoryMode::Push);
    }

    /// 会话已确定时先做守卫，再写 History 并切换视图。
    /// 会话未确定时照常切换，由出口组件挂起受保护视图，等解析完成后再由 Effect 重定向。
    fn go(&self, target: AppRoute, mode: HistoryMode) {
        let state = self.session.get_untracked();
        let resolved = redirect_for(target, &state).unwrap_or(target);
        if resolved != target {
            tracing::info!(from = %target, to = %resolved, "navigation redirected by guard");
        }
        write_history(resolved.to_path(), mode);
        self.set_route.set(resolved);
    }

    /// 浏览器后退/前进也走守卫
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            router.go(AppRoute::from_path(&current_path()), HistoryMode::Replace);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 监听器与应用同寿命
        closure.forget();
    }

    /// 会话变化（包括首次解析）时重新检查当前路由
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let session = self.session;

        Effect::new(move |_| {
            let state = session.get();
            let route = current_route.get_untracked();
            if let Some(redirect) = redirect_for(route, &state) {
                tracing::info!(
                    from = %route,
                    to = %redirect,
                    authenticated = state.is_authenticated(),
                    "session changed, redirecting"
                );
                write_history(redirect.to_path(), HistoryMode::Replace);
                set_route.set(redirect);
            }
        });
    }
}

fn provide_router(session: Signal<SessionState>) -> RouterService {
    let router = RouterService::new(session);
    router.init_popstate_listener();
    router.setup_auth_redirect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(session: Signal<SessionState>, children: Children) -> impl IntoView {
    provide_router(session);
    children()
}

/// 路由出口组件
///
/// 受保护路由在会话解析完成前只显示加载状态，不挂载视图（因此不会发起数据请求）。
#[component]
pub fn RouterOutlet(
    matcher: fn(AppRoute) -> AnyView,
    /// 会话解析中的占位视图
    pending: fn() -> AnyView,
) -> impl IntoView {
    let router = use_router();
    let session = router.session;
    // 只在"是否已解析"变化时重渲染，令牌刷新不会重建当前视图
    let resolved = Memo::new(move |_| session.with(|s| s.is_resolved()));

    move || {
        let current = router.current_route().get();
        if current.requires_auth() && !resolved.get() {
            pending()
        } else {
            matcher(current)
        }
    }
}

/// 站内链接：拦截点击，走路由服务而不是整页跳转
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
