//! 回答生成服务 - 业务能力层
//!
//! 只负责"为一个问题生成 HTML 回答"

use pulldown_cmark::{html, Options, Parser};
use tracing::debug;

use super::question_service::SYSTEM_MESSAGE;
use crate::clients::{ChatBackend, ChatRequest};
use crate::error::{AppResult, LlmError};
use crate::i18n::answer_prompt;
use crate::models::GenerationRequest;

const ANSWER_MAX_TOKENS: u32 = 3500;
const TEMPERATURE: f32 = 0.7;

/// 回答生成服务
pub struct AnswerService<'a, B: ChatBackend + ?Sized> {
    backend: &'a B,
}

impl<'a, B: ChatBackend + ?Sized> AnswerService<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// 构建发送给 LLM 的请求
    pub fn build_request(request: &GenerationRequest<'_>, question: &str) -> ChatRequest {
        ChatRequest {
            model: request.model.as_str().to_string(),
            system_message: Some(SYSTEM_MESSAGE.to_string()),
            user_message: answer_prompt(request.locale, request.topic, question),
            max_tokens: ANSWER_MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    /// 生成回答并转换为 HTML
    ///
    /// LLM 返回空内容时视为失败
    pub async fn generate(&self, request: &GenerationRequest<'_>, question: &str) -> AppResult<String> {
        let chat_request = Self::build_request(request, question);
        let markdown = self.backend.complete(request.credential, &chat_request).await?;

        let answer = markdown_to_html(&markdown);
        if answer.trim().is_empty() {
            return Err(LlmError::EmptyAnswer {
                question: question.to_string(),
            }
            .into());
        }

        debug!("回答长度: {} 字符", answer.len());
        Ok(answer)
    }
}

/// Markdown 转 HTML（内联 HTML 原样保留）
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown.trim(), options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
