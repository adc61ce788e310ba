//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 提供简洁的 HTTP 客户端接口。
//! 请求体可以是 JSON 文本，也可以是浏览器 `Blob`（上传文件时直接发送原始字节）。

use leafscan::{AppError, ErrorKind};
use leafscan_shared::protocol::HttpMethod;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Headers, Request, RequestInit, Response};

fn method_name(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "GET",
        HttpMethod::Post => "POST",
        HttpMethod::Delete => "DELETE",
    }
}

/// HTTP 错误类型
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("failed to build request: {0}")]
    RequestBuildFailed(String),
    #[error("network error: {0}")]
    NetworkError(String),
    #[error("failed to read response: {0}")]
    ResponseParseFailed(String),
}

impl From<HttpError> for AppError {
    fn from(e: HttpError) -> Self {
        let kind = match e {
            HttpError::ResponseParseFailed(_) => ErrorKind::Serialization,
            _ => ErrorKind::Network,
        };
        AppError::new(kind, e.to_string()).with_source(e)
    }
}

/// HTTP 响应封装
pub struct HttpResponse {
    inner: Response,
}

impl HttpResponse {
    /// 获取 HTTP 状态码
    pub fn status(&self) -> u16 {
        self.inner.status()
    }

    /// 检查响应是否成功 (2xx)
    pub fn ok(&self) -> bool {
        self.inner.ok()
    }

    /// 获取响应体文本
    pub async fn text(self) -> Result<String, HttpError> {
        let promise = self
            .inner
            .text()
            .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;

        let text = JsFuture::from(promise)
            .await
            .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;

        text.as_string()
            .ok_or_else(|| HttpError::ResponseParseFailed("body is not a string".to_string()))
    }
}

enum Body {
    Text(String),
    Blob(Blob),
}

/// HTTP 请求构建器
pub struct HttpRequestBuilder {
    url: String,
    method: HttpMethod,
    headers: Vec<(String, String)>,
    body: Option<Body>,
}

impl HttpRequestBuilder {
    fn new(url: String, method: HttpMethod) -> Self {
        Self {
            url,
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    /// 添加请求头
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    /// 设置 JSON 请求体
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, AppError> {
        let body = serde_json::to_string(value)?;
        let mut builder = self.header("Content-Type", "application/json");
        builder.body = Some(Body::Text(body));
        Ok(builder)
    }

    /// 以原始字节上传
    pub fn blob(mut self, blob: &Blob, content_type: &str) -> Self {
        self = self.header("Content-Type", content_type);
        self.body = Some(Body::Blob(blob.clone()));
        self
    }

    /// 发送请求
    pub async fn send(self) -> Result<HttpResponse, HttpError> {
        let headers = Headers::new()
            .map_err(|e| HttpError::RequestBuildFailed(format!("Headers: {:?}", e)))?;

        for (key, value) in &self.headers {
            headers
                .set(key, value)
                .map_err(|e| HttpError::RequestBuildFailed(format!("header {}: {:?}", key, e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(method_name(self.method));
        opts.set_headers(&headers.into());

        match &self.body {
            Some(Body::Text(text)) => opts.set_body(&JsValue::from_str(text)),
            Some(Body::Blob(blob)) => opts.set_body(blob),
            None => {}
        }

        let request = Request::new_with_str_and_init(&self.url, &opts)
            .map_err(|e| HttpError::RequestBuildFailed(format!("{:?}", e)))?;

        let window = web_sys::window()
            .ok_or_else(|| HttpError::NetworkError("no window object".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| HttpError::NetworkError(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| HttpError::ResponseParseFailed(format!("not a Response: {:?}", e)))?;

        Ok(HttpResponse { inner: response })
    }
}

/// 轻量级 HTTP 客户端
pub struct HttpClient;

impl HttpClient {
    pub fn request(method: HttpMethod, url: &str) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url.to_string(), method)
    }
}

/// 解析 JSON 响应体；空响应体按 `null` 处理（204 等）
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, AppError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    Ok(serde_json::from_str(text)?)
}
