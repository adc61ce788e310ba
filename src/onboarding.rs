//! 登录 / 注册表单流程
//!
//! 注册成功后不自动登录，而是切回登录模式，让用户再走一次登录（两步式引导）。

use async_trait::async_trait;
use leafscan_shared::{Profile, Session};

use crate::error::{AppError, AppResult, ErrorKind};
use crate::session::{AuthProvider, Registration};

/// 用户资料表
#[async_trait(?Send)]
pub trait ProfileStore {
    /// `bearer` 为注册时拿到的令牌；缺失时按当前会话或匿名密钥请求
    async fn insert_profile(&self, profile: &Profile, bearer: Option<&str>) -> AppResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    /// 提交成功后表单应处于的模式
    pub fn after(self, outcome: &AuthOutcome) -> Self {
        match outcome {
            AuthOutcome::SignedUp { .. } => AuthMode::SignIn,
            AuthOutcome::SignedIn(_) => self,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    SignedUp { user_id: String },
    SignedIn(Session),
}

/// 表单内容
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AuthForm {
    fn check(&self) -> AppResult<()> {
        let missing = self.email.trim().is_empty()
            || self.password.is_empty()
            || (self.mode == AuthMode::SignUp && self.name.trim().is_empty());
        if missing {
            return Err(AppError::new(
                ErrorKind::Validation,
                "Please fill in all fields",
            ));
        }
        Ok(())
    }
}

/// 按表单模式执行注册或登录
///
/// 注册：创建账号，再写入 `{id, name, email}` 资料行；资料写入失败同样视为失败。
/// 注册返回的令牌只随资料写入请求发送，不会成为会话。
/// 登录：建立会话，会话变化由认证服务广播给会话跟踪器。
pub async fn submit_auth<A, P>(
    auth: &A,
    profiles: &P,
    form: &AuthForm,
    redirect_to: Option<&str>,
) -> AppResult<AuthOutcome>
where
    A: AuthProvider + ?Sized,
    P: ProfileStore + ?Sized,
{
    form.check()?;
    let email = form.email.trim();

    match form.mode {
        AuthMode::SignUp => {
            let name = form.name.trim();
            let Registration {
                user_id,
                access_token,
            } = auth
                .sign_up(email, &form.password, name, redirect_to)
                .await
                .map_err(|e| e.in_op("onboarding.sign_up"))?;

            let profile = Profile {
                id: user_id.clone(),
                name: name.to_string(),
                email: email.to_string(),
            };
            profiles
                .insert_profile(&profile, access_token.as_deref())
                .await
                .map_err(|e| e.in_op_with("onboarding.profile", &user_id))?;

            tracing::info!(user_id = %user_id, "account created");
            Ok(AuthOutcome::SignedUp { user_id })
        }
        AuthMode::SignIn => {
            let session = auth
                .sign_in(email, &form.password)
                .await
                .map_err(|e| e.in_op("onboarding.sign_in"))?;
            tracing::info!(user_id = %session.user_id(), "signed in");
            Ok(AuthOutcome::SignedIn(session))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{AuthEvent, AuthEventHub, Subscription};
    use leafscan_shared::{Timestamp, User};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        log: RefCell<Vec<String>>,
        profiles: RefCell<Vec<Profile>>,
        fail_profile: bool,
        sign_up_token: Option<String>,
        hub: AuthEventHub,
    }

    #[async_trait(?Send)]
    impl AuthProvider for Recorder {
        async fn sign_up(
            &self,
            email: &str,
            _password: &str,
            name: &str,
            redirect_to: Option<&str>,
        ) -> AppResult<Registration> {
            self.log.borrow_mut().push(format!(
                "sign_up:{}:{}:{}",
                email,
                name,
                redirect_to.unwrap_or("-")
            ));
            Ok(Registration {
                user_id: "u-new".into(),
                access_token: self.sign_up_token.clone(),
            })
        }

        async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session> {
            self.log.borrow_mut().push(format!("sign_in:{}", email));
            if password != "secret" {
                return Err(AppError::auth("Invalid login credentials"));
            }
            Ok(Session {
                access_token: "a".into(),
                refresh_token: "r".into(),
                expires_at: Timestamp::new(0),
                user: User {
                    id: "u-1".into(),
                    email: Some(email.into()),
                },
            })
        }

        async fn sign_out(&self) -> AppResult<()> {
            self.hub.emit(AuthEvent::SignedOut);
            Ok(())
        }

        async fn get_session(&self) -> AppResult<Option<Session>> {
            Ok(None)
        }

        async fn refresh(&self, session: &Session) -> AppResult<Session> {
            Ok(session.clone())
        }

        fn subscribe(&self, on_change: Box<dyn Fn(&AuthEvent)>) -> Subscription {
            self.hub.subscribe(on_change)
        }
    }

    #[async_trait(?Send)]
    impl ProfileStore for Recorder {
        async fn insert_profile(&self, profile: &Profile, bearer: Option<&str>) -> AppResult<()> {
            self.log
                .borrow_mut()
                .push(format!("profile:{}:{}", profile.id, bearer.unwrap_or("anon")));
            if self.fail_profile {
                return Err(AppError::database("duplicate key value"));
            }
            self.profiles.borrow_mut().push(profile.clone());
            Ok(())
        }
    }

    fn form(mode: AuthMode) -> AuthForm {
        AuthForm {
            mode,
            name: " Asha ".into(),
            email: "asha@farm.in".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_creates_profile_and_returns_to_sign_in() {
        let backend = Recorder::default();
        let outcome = submit_auth(&backend, &backend, &form(AuthMode::SignUp), None)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            AuthOutcome::SignedUp {
                user_id: "u-new".into()
            }
        );
        assert_eq!(AuthMode::SignUp.after(&outcome), AuthMode::SignIn);
        assert_eq!(
            backend.profiles.borrow()[0],
            Profile {
                id: "u-new".into(),
                name: "Asha".into(),
                email: "asha@farm.in".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_sign_up_token_authorizes_profile_insert() {
        let backend = Recorder {
            sign_up_token: Some("t-new".into()),
            ..Default::default()
        };
        submit_auth(
            &backend,
            &backend,
            &form(AuthMode::SignUp),
            Some("https://leafscan.app/auth"),
        )
        .await
        .unwrap();

        assert_eq!(
            *backend.log.borrow(),
            vec![
                "sign_up:asha@farm.in:Asha:https://leafscan.app/auth".to_string(),
                "profile:u-new:t-new".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_unconfirmed_sign_up_inserts_profile_with_anon_key() {
        let backend = Recorder::default();
        submit_auth(&backend, &backend, &form(AuthMode::SignUp), None)
            .await
            .unwrap();
        assert_eq!(backend.log.borrow()[1], "profile:u-new:anon");
    }

    #[tokio::test]
    async fn test_failed_profile_insert_fails_sign_up() {
        let backend = Recorder {
            fail_profile: true,
            ..Default::default()
        };
        let err = submit_auth(&backend, &backend, &form(AuthMode::SignUp), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(err.message(), "duplicate key value");
    }

    #[tokio::test]
    async fn test_sign_in_keeps_mode_and_skips_profile() {
        let backend = Recorder::default();
        let outcome = submit_auth(&backend, &backend, &form(AuthMode::SignIn), None)
            .await
            .unwrap();

        assert!(matches!(outcome, AuthOutcome::SignedIn(_)));
        assert_eq!(AuthMode::SignIn.after(&outcome), AuthMode::SignIn);
        assert_eq!(*backend.log.borrow(), vec!["sign_in:asha@farm.in".to_string()]);
    }

    #[tokio::test]
    async fn test_bad_credentials_surface_provider_message() {
        let backend = Recorder::default();
        let mut f = form(AuthMode::SignIn);
        f.password = "wrong".into();
        let err = submit_auth(&backend, &backend, &f, None).await.unwrap_err();
        assert_eq!(err.message(), "Invalid login credentials");
    }

    #[tokio::test]
    async fn test_empty_fields_rejected_without_calls() {
        let backend = Recorder::default();
        let mut f = form(AuthMode::SignUp);
        f.name = "   ".into();
        let err = submit_auth(&backend, &backend, &f, None).await.unwrap_err();
        assert!(err.is_validation());
        assert!(backend.log.borrow().is_empty());
    }

    #[test]
    fn test_toggle_switches_modes() {
        assert_eq!(AuthMode::SignIn.toggle(), AuthMode::SignUp);
        assert_eq!(AuthMode::SignUp.toggle().toggle(), AuthMode::SignUp);
    }
}
