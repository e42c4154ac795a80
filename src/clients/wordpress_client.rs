/// WordPress REST API 客户端
///
/// 只负责"创建一篇文章"这一个调用，状态码的含义由服务层判断
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::Secret;

/// 新建文章的请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub status: &'a str,
}

/// 原始响应（状态码 + 响应体）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WpResponse {
    pub status: u16,
    pub body: String,
}

/// 创建文章能力
#[async_trait]
pub trait WordPressApi: Send + Sync {
    async fn create_post(
        &self,
        endpoint: &str,
        username: &str,
        password: &Secret,
        post: &NewPost<'_>,
    ) -> AppResult<WpResponse>;
}

/// 基于 `reqwest` 的实现
///
/// 不设置超时，使用 reqwest 的默认行为
#[derive(Clone, Default)]
pub struct WordPressClient {
    http: reqwest::Client,
}

impl WordPressClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl WordPressApi for WordPressClient {
    async fn create_post(
        &self,
        endpoint: &str,
        username: &str,
        password: &Secret,
        post: &NewPost<'_>,
    ) -> AppResult<WpResponse> {
        debug!("POST {} (status: {})", endpoint, post.status);

        let response = self
            .http
            .post(endpoint)
            .basic_auth(username, Some(password.expose()))
            .json(post)
            .send()
            .await
            .map_err(|e| AppError::wordpress_request_failed(endpoint, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::wordpress_request_failed(endpoint, e))?;

        debug!("WordPress 响应状态码: {}", status);

        Ok(WpResponse { status, body })
    }
}
