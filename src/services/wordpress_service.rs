//! WordPress 发布服务 - 业务能力层
//!
//! 连接检查（测试草稿）和批量发布。只有 HTTP 201 视为成功，
//! 失败不重试、不回滚。

use tracing::{debug, error, info, warn};

use crate::clients::{NewPost, WordPressApi};
use crate::error::{AppResult, InputError};
use crate::models::{FaqTable, PublishTarget};
use crate::utils::logging::truncate_text;

const CREATED: u16 = 201;

const PROBE_TITLE: &str = "Test Post";
const PROBE_CONTENT: &str = "This is a test post to check the WordPress connection.";
const UNANSWERED_DETAIL: &str = "回答生成失败，未发布";

/// 连接检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub success: bool,
    pub status: u16,
    pub body: String,
}

/// 单条 FAQ 发布失败的记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    pub question: String,
    /// 网络错误时没有状态码
    pub status: Option<u16>,
    /// 响应体或错误描述
    pub detail: String,
}

/// 批量发布结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    pub success_count: usize,
    pub total: usize,
    pub failures: Vec<RowFailure>,
}

impl PublishReport {
    /// 只有全部成功才算成功
    pub fn is_success(&self) -> bool {
        self.success_count == self.total
    }
}

/// WordPress 发布服务
pub struct WordPressService<'a, W: WordPressApi + ?Sized> {
    api: &'a W,
}

impl<'a, W: WordPressApi + ?Sized> WordPressService<'a, W> {
    pub fn new(api: &'a W) -> Self {
        Self { api }
    }

    /// 创建一篇测试草稿，检查凭据和端点是否可用
    ///
    /// 非 201 状态码原样返回；只有网络错误才返回 Err
    pub async fn check_connection(&self, target: &PublishTarget) -> AppResult<ProbeOutcome> {
        let endpoint = target.probe_endpoint();
        info!("🔌 检查 WordPress 连接: {}", endpoint);

        let post = NewPost {
            title: PROBE_TITLE,
            content: PROBE_CONTENT,
            status: "draft",
        };
        let response = self
            .api
            .create_post(&endpoint, &target.username, &target.password, &post)
            .await?;

        let success = response.status == CREATED;
        if success {
            info!("✓ WordPress 连接正常");
        } else {
            warn!("WordPress 连接失败，状态码: {}", response.status);
        }

        Ok(ProbeOutcome {
            success,
            status: response.status,
            body: response.body,
        })
    }

    /// 逐条发布 FAQ
    ///
    /// 单条失败只记录，继续处理下一条；没有回答的行不发布，记为失败
    pub async fn publish(&self, target: &PublishTarget, table: &FaqTable) -> AppResult<PublishReport> {
        if table.is_empty() {
            return Err(InputError::EmptyTable.into());
        }

        let endpoint = target.publish_endpoint();
        let mut report = PublishReport {
            total: table.len(),
            ..Default::default()
        };

        for (idx, row) in table.rows().iter().enumerate() {
            if !row.is_answered() {
                warn!("跳过没有回答的 FAQ: {}", truncate_text(&row.question, 60));
                report.failures.push(RowFailure {
                    question: row.question.clone(),
                    status: None,
                    detail: UNANSWERED_DETAIL.to_string(),
                });
                continue;
            }

            debug!("[{}/{}] 发布: {}", idx + 1, report.total, truncate_text(&row.question, 60));

            let post = NewPost {
                title: &row.question,
                content: &row.answer,
                status: "publish",
            };

            match self
                .api
                .create_post(&endpoint, &target.username, &target.password, &post)
                .await
            {
                Ok(response) if response.status == CREATED => {
                    report.success_count += 1;
                }
                Ok(response) => {
                    error!(
                        "发布失败: {} - 状态码: {}",
                        truncate_text(&row.question, 60),
                        response.status
                    );
                    report.failures.push(RowFailure {
                        question: row.question.clone(),
                        status: Some(response.status),
                        detail: response.body,
                    });
                }
                Err(e) => {
                    error!("发布时发生异常: {} - {}", truncate_text(&row.question, 60), e);
                    report.failures.push(RowFailure {
                        question: row.question.clone(),
                        status: None,
                        detail: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}
