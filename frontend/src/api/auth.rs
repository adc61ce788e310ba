//! 认证端点（GoTrue 风格）
//!
//! 会话的每次变化都先写入本地存储，再通过事件中心广播。

use async_trait::async_trait;
use leafscan::session::{AuthEvent, AuthProvider, REFRESH_MARGIN_MS, Registration, Subscription};
use leafscan::{AppError, AppResult, ErrorKind};
use leafscan_shared::protocol::{
    ApiRequest, LogoutRequest, PasswordGrantRequest, RefreshGrantRequest, SignUpMetadata,
    SignUpRequest, SignUpResponse,
};
use leafscan_shared::{Session, Timestamp};

use super::LeafScanApi;

#[async_trait(?Send)]
impl AuthProvider for LeafScanApi {
    /// 注册只创建账号；即使服务端返回了令牌也不建立会话
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
        redirect_to: Option<&str>,
    ) -> AppResult<Registration> {
        let request = SignUpRequest {
            email: email.to_string(),
            password: password.to_string(),
            data: SignUpMetadata {
                name: display_name.to_string(),
            },
        };
        let path = match redirect_to {
            Some(url) => format!(
                "{}?redirect_to={}",
                SignUpRequest::PATH,
                String::from(js_sys::encode_uri_component(url))
            ),
            None => SignUpRequest::PATH.to_string(),
        };
        let builder = self.request(SignUpRequest::METHOD, &path).json(&request)?;
        let response: SignUpResponse = self
            .send(builder, ErrorKind::Auth)
            .await
            .map_err(|e| e.in_op("auth.sign_up"))?;

        let user_id = response
            .user_id()
            .map(str::to_string)
            .ok_or_else(|| AppError::auth("Sign-up response did not include a user"))?;
        Ok(Registration {
            user_id,
            access_token: response.access_token,
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session> {
        let request = PasswordGrantRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let token = self
            .call(&request, ErrorKind::Auth)
            .await
            .map_err(|e| e.in_op("auth.sign_in"))?;

        let session = token.into_session(Timestamp::now());
        self.store_session(Some(&session));
        self.inner.hub.emit(AuthEvent::SignedIn(session.clone()));
        Ok(session)
    }

    /// 服务端注销失败时仍清除本地会话
    async fn sign_out(&self) -> AppResult<()> {
        if self.current_session().is_some() {
            if let Err(e) = self.call(&LogoutRequest::default(), ErrorKind::Auth).await {
                tracing::warn!(error = %e, "server-side logout failed");
            }
        }
        self.store_session(None);
        self.inner.hub.emit(AuthEvent::SignedOut);
        Ok(())
    }

    /// 返回保存的会话；已经或即将过期时先尝试刷新，刷新失败视为无会话
    async fn get_session(&self) -> AppResult<Option<Session>> {
        let Some(session) = self.current_session() else {
            return Ok(None);
        };
        if !session.expires_within(Timestamp::now(), REFRESH_MARGIN_MS) {
            return Ok(Some(session));
        }

        match self.refresh(&session).await {
            Ok(fresh) => Ok(Some(fresh)),
            Err(e) => {
                tracing::warn!(error = %e, "stored session could not be refreshed");
                self.store_session(None);
                Ok(None)
            }
        }
    }

    async fn refresh(&self, session: &Session) -> AppResult<Session> {
        let request = RefreshGrantRequest {
            refresh_token: session.refresh_token.clone(),
        };
        let token = self
            .call(&request, ErrorKind::Auth)
            .await
            .map_err(|e| e.in_op("auth.refresh"))?;

        let fresh = token.into_session(Timestamp::now());
        self.store_session(Some(&fresh));
        tracing::debug!(user_id = %fresh.user_id(), "token refreshed");
        self.inner.hub.emit(AuthEvent::TokenRefreshed(fresh.clone()));
        Ok(fresh)
    }

    fn subscribe(&self, on_change: Box<dyn Fn(&AuthEvent)>) -> Subscription {
        self.inner.hub.subscribe(on_change)
    }
}
