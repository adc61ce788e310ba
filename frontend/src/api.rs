//! 托管后端客户端
//!
//! 一个 `LeafScanApi` 实现核心 crate 的全部协作方 trait：
//! - `auth`: 认证（注册、登录、刷新、注销、会话事件）
//! - `storage`: 图片对象存储
//! - `functions`: 识别函数
//! - `records`: 识别记录表与用户资料表

mod auth;
mod functions;
mod records;
mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use leafscan::session::AuthEventHub;
use leafscan::{AppConfig, AppError, AppResult, ErrorKind};
use leafscan_shared::protocol::{ApiErrorBody, ApiRequest, HttpMethod};
use leafscan_shared::{HEADER_API_KEY, Session};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::web::LocalStorage as BrowserStorage;
use crate::web::{HttpClient, HttpRequestBuilder, parse_json};

/// 持久化会话的本地存储键
const SESSION_STORAGE_KEY: &str = "leafscan.session";

struct Inner {
    config: AppConfig,
    session: RefCell<Option<Session>>,
    hub: AuthEventHub,
}

#[derive(Clone)]
pub struct LeafScanApi {
    inner: Rc<Inner>,
}

impl LeafScanApi {
    /// 创建客户端，并恢复上次保存的会话
    pub fn new(config: AppConfig) -> Self {
        let session = BrowserStorage::get(SESSION_STORAGE_KEY).and_then(|raw| {
            serde_json::from_str::<Session>(&raw)
                .inspect_err(|e| tracing::warn!(error = %e, "discarding unreadable stored session"))
                .ok()
        });
        Self {
            inner: Rc::new(Inner {
                config,
                session: RefCell::new(session),
                hub: AuthEventHub::new(),
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    fn current_session(&self) -> Option<Session> {
        self.inner.session.borrow().clone()
    }

    /// 更新内存与本地存储中的会话
    fn store_session(&self, session: Option<&Session>) {
        *self.inner.session.borrow_mut() = session.cloned();
        let persisted = match session {
            Some(s) => serde_json::to_string(s)
                .map(|raw| BrowserStorage::set(SESSION_STORAGE_KEY, &raw))
                .unwrap_or(false),
            None => BrowserStorage::delete(SESSION_STORAGE_KEY),
        };
        if !persisted {
            tracing::warn!("failed to persist session to local storage");
        }
    }

    /// 带认证头的请求：有会话时用 access token，否则用匿名密钥
    fn request(&self, method: HttpMethod, path: &str) -> HttpRequestBuilder {
        self.request_as(method, path, None)
    }

    /// 指定令牌优先于会话令牌
    fn request_as(&self, method: HttpMethod, path: &str, token: Option<&str>) -> HttpRequestBuilder {
        let config = &self.inner.config;
        let bearer = token.map(str::to_string).unwrap_or_else(|| {
            self.inner
                .session
                .borrow()
                .as_ref()
                .map(|s| s.access_token.clone())
                .unwrap_or_else(|| config.anon_key.clone())
        });

        HttpClient::request(method, &config.url(path))
            .header(HEADER_API_KEY, &config.anon_key)
            .header("Authorization", &format!("Bearer {}", bearer))
    }

    /// 发送请求并解析 JSON；非 2xx 时取服务端返回的消息文本
    async fn send<T: DeserializeOwned>(
        &self,
        builder: HttpRequestBuilder,
        kind: ErrorKind,
    ) -> AppResult<T> {
        let response = builder.send().await?;
        let status = response.status();
        let ok = response.ok();
        let text = response.text().await?;

        if !ok {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(ApiErrorBody::into_message)
                .unwrap_or_else(|| format!("Request failed with status {}", status));
            return Err(AppError::new(kind, message).in_op_with("http", status.to_string()));
        }
        parse_json(&text)
    }

    /// 调用绑定了路径与方法的端点
    async fn call<R: ApiRequest>(&self, request: &R, kind: ErrorKind) -> AppResult<R::Response> {
        let builder = self.request(R::METHOD, R::PATH).json(request)?;
        self.send(builder, kind).await
    }
}

// =========================================================
// Context
// =========================================================

/// 客户端持有 `Rc`，只能放在本地存储的 `StoredValue` 中
#[derive(Clone, Copy)]
pub struct ApiContext(StoredValue<LeafScanApi, LocalStorage>);

pub fn provide_api(api: LeafScanApi) {
    provide_context(ApiContext(StoredValue::new_local(api)));
}

impl ApiContext {
    /// 取出客户端句柄（事件处理器与异步任务中使用）
    pub fn client(&self) -> LeafScanApi {
        self.0.get_value()
    }
}

pub fn use_api() -> ApiContext {
    use_context::<ApiContext>().expect("ApiContext should be provided")
}
