//! 会话跟踪模块
//!
//! 认证服务是会话的唯一权威来源；这里只维护一份只读镜像：
//! - 挂载时先订阅变更事件，再查询已有会话
//! - 此后状态只由订阅回调驱动（登录、登出、令牌刷新）
//! - `Subscription` 在 drop 时自动退订，覆盖成功、出错、卸载所有退出路径

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use async_trait::async_trait;
use leafscan_shared::{Session, Timestamp};

use crate::error::AppResult;
use crate::route::AppRoute;

/// 会话在此时长内过期就主动刷新
pub const REFRESH_MARGIN_MS: i64 = 60_000;
/// 检查是否需要刷新的周期
pub const REFRESH_TICK_MS: u32 = 30_000;

// =========================================================
// 认证事件与订阅
// =========================================================

/// 认证状态变更事件
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
    TokenRefreshed(Session),
}

impl AuthEvent {
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthEvent::SignedIn(s) | AuthEvent::TokenRefreshed(s) => Some(s),
            AuthEvent::SignedOut => None,
        }
    }
}

type Listener = Rc<dyn Fn(&AuthEvent)>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// 认证事件中心
///
/// 认证客户端持有一个实例，并在会话变化时调用 `emit`。
#[derive(Clone, Default)]
pub struct AuthEventHub {
    inner: Rc<RefCell<HubInner>>,
}

impl AuthEventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册监听器，返回的句柄 drop 时退订
    pub fn subscribe(&self, listener: impl Fn(&AuthEvent) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            hub: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// 广播事件
    ///
    /// 先复制监听器列表再逐个调用，回调内部可以安全地订阅或退订。
    pub fn emit(&self, event: AuthEvent) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(&event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// 订阅句柄
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    hub: Weak<RefCell<HubInner>>,
    id: u64,
}

impl Subscription {
    /// 显式退订（等价于 drop）
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

// =========================================================
// 认证协作方
// =========================================================

/// 注册结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub user_id: String,
    /// 关闭邮件确认时服务端随注册返回的令牌，只用于写入资料行
    pub access_token: Option<String>,
}

/// 托管认证服务
#[async_trait(?Send)]
pub trait AuthProvider {
    /// 注册新账号；不会建立会话
    ///
    /// `redirect_to` 是确认邮件中链接的回跳地址。
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
        redirect_to: Option<&str>,
    ) -> AppResult<Registration>;
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session>;
    async fn sign_out(&self) -> AppResult<()>;
    async fn get_session(&self) -> AppResult<Option<Session>>;
    async fn refresh(&self, session: &Session) -> AppResult<Session>;
    fn subscribe(&self, on_change: Box<dyn Fn(&AuthEvent)>) -> Subscription;
}

// =========================================================
// 会话镜像
// =========================================================

/// 会话镜像状态
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// 挂载后、首次查询返回前
    #[default]
    Resolving,
    Unauthenticated,
    Authenticated(Session),
}

impl SessionState {
    pub fn from_session(session: Option<Session>) -> Self {
        match session {
            Some(s) => SessionState::Authenticated(s),
            None => SessionState::Unauthenticated,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionState::Resolving)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(s) => Some(s),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session().map(|s| s.user_id())
    }
}

impl From<&AuthEvent> for SessionState {
    fn from(event: &AuthEvent) -> Self {
        SessionState::from_session(event.session().cloned())
    }
}

/// 当前路由在给定会话状态下是否需要跳转
///
/// 会话尚未确定时不做判断，避免把持有有效会话的用户误送到登录页。
pub fn redirect_for(route: AppRoute, state: &SessionState) -> Option<AppRoute> {
    if !state.is_resolved() {
        return None;
    }
    let target = route.resolve(state.is_authenticated());
    (target != route).then_some(target)
}

/// 会话跟踪器
///
/// 持有订阅句柄；跟踪器被 drop 时订阅随之释放。
pub struct SessionTracker {
    state: Rc<RefCell<SessionState>>,
    _subscription: Subscription,
}

impl SessionTracker {
    /// 订阅变更并解析初始会话
    ///
    /// 每次镜像变化（包括初始解析）都会调用 `on_change`。
    /// 查询失败时按未登录处理，订阅保留，之后的登录事件照常生效。
    pub async fn mount<A, F>(auth: &A, on_change: F) -> Self
    where
        A: AuthProvider + ?Sized,
        F: Fn(&SessionState) + 'static,
    {
        let state = Rc::new(RefCell::new(SessionState::Resolving));
        let on_change: Rc<dyn Fn(&SessionState)> = Rc::new(on_change);

        let subscription = {
            let state = state.clone();
            let on_change = on_change.clone();
            auth.subscribe(Box::new(move |event: &AuthEvent| {
                let next = SessionState::from(event);
                tracing::debug!(
                    authenticated = next.is_authenticated(),
                    "session changed by auth event"
                );
                *state.borrow_mut() = next.clone();
                on_change(&next);
            }))
        };

        let initial = match auth.get_session().await {
            Ok(session) => session,
            Err(e) => {
                let e = e.in_op("session.mount");
                tracing::error!(error = %e, "failed to resolve session, treating as signed out");
                None
            }
        };

        // 查询期间若已收到事件，以事件为准
        let resolved = {
            let mut current = state.borrow_mut();
            if !current.is_resolved() {
                *current = SessionState::from_session(initial);
            }
            current.clone()
        };
        tracing::info!(
            authenticated = resolved.is_authenticated(),
            "session resolved"
        );
        on_change(&resolved);

        Self {
            state,
            _subscription: subscription,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// 提交识别时读取的用户 ID
    pub fn user_id(&self) -> Option<String> {
        self.state.borrow().user_id().map(str::to_string)
    }

    /// 会话即将过期时请求刷新；刷新失败则登出
    ///
    /// 镜像本身不在这里修改，而是等待认证服务发出的事件。
    pub async fn refresh_if_expiring<A>(&self, auth: &A, now: Timestamp) -> AppResult<bool>
    where
        A: AuthProvider + ?Sized,
    {
        let Some(session) = self.state.borrow().session().cloned() else {
            return Ok(false);
        };
        if !session.expires_within(now, REFRESH_MARGIN_MS) {
            return Ok(false);
        }

        match auth.refresh(&session).await {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!(error = %e, "token refresh failed, signing out");
                auth.sign_out().await.map_err(|e| e.in_op("session.refresh"))?;
                Err(e.in_op("session.refresh"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use leafscan_shared::User;
    use std::cell::{Cell, RefCell};

    fn session(user: &str, expires_at: i64) -> Session {
        Session {
            access_token: format!("token-{}", user),
            refresh_token: "refresh".into(),
            expires_at: Timestamp::new(expires_at),
            user: User {
                id: user.into(),
                email: None,
            },
        }
    }

    /// 内存认证服务：每个状态变化都通过事件中心广播
    #[derive(Default)]
    struct MockAuth {
        hub: AuthEventHub,
        stored: RefCell<Option<Session>>,
        fail_get_session: bool,
        fail_refresh: bool,
        log: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl AuthProvider for MockAuth {
        async fn sign_up(
            &self,
            _email: &str,
            _password: &str,
            _name: &str,
            _redirect_to: Option<&str>,
        ) -> AppResult<Registration> {
            Ok(Registration {
                user_id: "new-user".into(),
                access_token: None,
            })
        }

        async fn sign_in(&self, email: &str, _password: &str) -> AppResult<Session> {
            let s = session(email, i64::MAX);
            *self.stored.borrow_mut() = Some(s.clone());
            self.hub.emit(AuthEvent::SignedIn(s.clone()));
            Ok(s)
        }

        async fn sign_out(&self) -> AppResult<()> {
            self.log.borrow_mut().push("sign_out".into());
            *self.stored.borrow_mut() = None;
            self.hub.emit(AuthEvent::SignedOut);
            Ok(())
        }

        async fn get_session(&self) -> AppResult<Option<Session>> {
            if self.fail_get_session {
                return Err(AppError::auth("network down"));
            }
            Ok(self.stored.borrow().clone())
        }

        async fn refresh(&self, current: &Session) -> AppResult<Session> {
            self.log.borrow_mut().push("refresh".into());
            if self.fail_refresh {
                return Err(AppError::auth("Invalid Refresh Token"));
            }
            let s = session(current.user_id(), i64::MAX);
            self.hub.emit(AuthEvent::TokenRefreshed(s.clone()));
            Ok(s)
        }

        fn subscribe(&self, on_change: Box<dyn Fn(&AuthEvent)>) -> Subscription {
            self.hub.subscribe(on_change)
        }
    }

    #[tokio::test]
    async fn test_mount_resolves_existing_session() {
        let auth = MockAuth::default();
        *auth.stored.borrow_mut() = Some(session("u-1", i64::MAX));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let tracker = SessionTracker::mount(&auth, move |s: &SessionState| {
            sink.borrow_mut().push(s.is_authenticated())
        })
        .await;

        assert_eq!(tracker.user_id().as_deref(), Some("u-1"));
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[tokio::test]
    async fn test_events_drive_the_mirror() {
        let auth = MockAuth::default();
        let tracker = SessionTracker::mount(&auth, |_: &SessionState| {}).await;
        assert_eq!(tracker.state(), SessionState::Unauthenticated);

        auth.sign_in("u-2", "pw").await.unwrap();
        assert_eq!(tracker.user_id().as_deref(), Some("u-2"));

        auth.sign_out().await.unwrap();
        assert_eq!(tracker.state(), SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_dropping_tracker_releases_subscription() {
        let auth = MockAuth::default();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let tracker = SessionTracker::mount(&auth, move |_: &SessionState| {
            counter.set(counter.get() + 1)
        })
        .await;
        assert_eq!(auth.hub.listener_count(), 1);

        drop(tracker);
        assert_eq!(auth.hub.listener_count(), 0);

        auth.sign_in("u-3", "pw").await.unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_mount_keeps_listening_for_sign_in() {
        let auth = MockAuth {
            fail_get_session: true,
            ..Default::default()
        };
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let tracker = SessionTracker::mount(&auth, move |s: &SessionState| {
            sink.borrow_mut().push(s.is_authenticated())
        })
        .await;
        assert_eq!(tracker.state(), SessionState::Unauthenticated);
        assert_eq!(auth.hub.listener_count(), 1);

        auth.sign_in("u-9", "pw").await.unwrap();
        assert_eq!(tracker.user_id().as_deref(), Some("u-9"));
        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn test_explicit_unsubscribe_and_reentrant_emit() {
        let hub = AuthEventHub::new();
        let inner_hub = hub.clone();
        let nested = Rc::new(RefCell::new(None));
        let slot = nested.clone();
        let outer = hub.subscribe(move |_| {
            // 回调中订阅不会因借用冲突而 panic
            *slot.borrow_mut() = Some(inner_hub.subscribe(|_| {}));
        });
        hub.emit(AuthEvent::SignedOut);
        assert_eq!(hub.listener_count(), 2);

        outer.unsubscribe();
        nested.borrow_mut().take();
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_no_session_redirects_protected_routes_to_sign_in() {
        let state = SessionState::Unauthenticated;
        assert_eq!(redirect_for(AppRoute::History, &state), Some(AppRoute::Auth));
        assert_eq!(redirect_for(AppRoute::Dashboard, &state), Some(AppRoute::Auth));
        assert_eq!(redirect_for(AppRoute::Landing, &state), None);
        assert_eq!(redirect_for(AppRoute::History, &SessionState::Resolving), None);

        let signed_in = SessionState::Authenticated(session("u", i64::MAX));
        assert_eq!(redirect_for(AppRoute::Auth, &signed_in), Some(AppRoute::Dashboard));
    }

    #[tokio::test]
    async fn test_refresh_only_when_expiring() {
        let auth = MockAuth::default();
        *auth.stored.borrow_mut() = Some(session("u-1", 100_000));
        let tracker = SessionTracker::mount(&auth, |_: &SessionState| {}).await;

        assert!(!tracker.refresh_if_expiring(&auth, Timestamp::new(0)).await.unwrap());
        assert!(tracker.refresh_if_expiring(&auth, Timestamp::new(50_000)).await.unwrap());
        assert_eq!(*auth.log.borrow(), vec!["refresh".to_string()]);
        assert_eq!(
            tracker.state().session().map(|s| s.expires_at),
            Some(Timestamp::new(i64::MAX))
        );
    }

    #[tokio::test]
    async fn test_failed_refresh_signs_out() {
        let auth = MockAuth {
            fail_refresh: true,
            ..Default::default()
        };
        *auth.stored.borrow_mut() = Some(session("u-1", 10));
        let tracker = SessionTracker::mount(&auth, |_: &SessionState| {}).await;

        let result = tracker.refresh_if_expiring(&auth, Timestamp::new(0)).await;
        assert!(result.is_err());
        assert_eq!(tracker.state(), SessionState::Unauthenticated);
        assert_eq!(
            *auth.log.borrow(),
            vec!["refresh".to_string(), "sign_out".to_string()]
        );
    }
}
