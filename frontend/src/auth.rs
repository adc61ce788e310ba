//! 认证模块
//!
//! 会话镜像以信号的形式放进 Context；路由服务通过注入的信号检查认证状态。
//! 真正的会话由认证服务持有，这里只跟随它的事件。

use std::rc::Rc;

use leafscan::session::{AuthProvider, REFRESH_TICK_MS, SessionState, SessionTracker};
use leafscan_shared::Timestamp;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::LeafScanApi;
use crate::web::Interval;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话镜像（只读）
    pub state: ReadSignal<SessionState>,
    set_state: WriteSignal<SessionState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::Resolving);
        Self { state, set_state }
    }

    /// 注入路由服务的会话信号
    pub fn session_signal(&self) -> Signal<SessionState> {
        self.state.into()
    }

    /// 提交时刻的用户 ID（不追踪）
    pub fn user_id(&self) -> Option<String> {
        self.state
            .with_untracked(|s| s.user_id().map(str::to_string))
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated())
    }

    pub fn user_email(&self) -> Option<String> {
        self.state
            .with(|s| s.session().and_then(|session| session.user.email.clone()))
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 跟踪器与刷新定时器随 App 所有者一起释放
struct Keepalive {
    _tracker: Rc<SessionTracker>,
    _refresh: Option<Interval>,
}

/// 挂载会话跟踪器并启动令牌刷新
///
/// 查询失败时按未登录处理，跟踪器仍然挂载，之后的登录事件照常同步。
pub fn init_auth(ctx: &AuthContext, api: LeafScanApi) {
    let set_state = ctx.set_state;
    let keepalive = StoredValue::<Option<Keepalive>, LocalStorage>::new_local(None);

    spawn_local(async move {
        let tracker = Rc::new(
            SessionTracker::mount(&api, move |state: &SessionState| {
                set_state.set(state.clone());
            })
            .await,
        );

        let tick = {
            let tracker = tracker.clone();
            move || {
                let tracker = tracker.clone();
                let api = api.clone();
                spawn_local(async move {
                    if let Err(e) = tracker.refresh_if_expiring(&api, Timestamp::now()).await {
                        tracing::warn!(error = %e, "session expired");
                    }
                });
            }
        };

        let refresh = Interval::new(REFRESH_TICK_MS, tick)
            .inspect_err(|e| tracing::error!(error = ?e, "failed to start token refresh timer"))
            .ok();
        keepalive.set_value(Some(Keepalive {
            _tracker: tracker,
            _refresh: refresh,
        }));
    });
}

/// 注销：认证服务广播登出事件后，镜像与路由会自动更新
pub async fn logout(api: &LeafScanApi) {
    if let Err(e) = api.sign_out().await {
        tracing::warn!(error = %e, "sign out failed");
    }
}
