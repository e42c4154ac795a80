//! LLM API 客户端
//!
//! 兼容 OpenAI Chat Completions 接口，使用 `async-openai` 发起调用

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult, LlmError};
use crate::models::Secret;

/// 一次聊天请求的全部参数
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub system_message: Option<String>,
    pub user_message: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// 聊天补全能力
///
/// 生成器只依赖这个 trait，测试中可以替换为假实现
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// 发送请求并返回去掉首尾空白的文本
    async fn complete(&self, credential: &Secret, request: &ChatRequest) -> AppResult<String>;
}

/// 基于 `async-openai` 的实现
pub struct OpenAiChat {
    api_base_url: String,
}

impl OpenAiChat {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    fn client(&self, credential: &Secret) -> Client<OpenAIConfig> {
        let config = OpenAIConfig::new()
            .with_api_key(credential.expose())
            .with_api_base(&self.api_base_url);
        Client::with_config(config)
    }
}

#[async_trait]
impl ChatBackend for OpenAiChat {
    async fn complete(&self, credential: &Secret, request: &ChatRequest) -> AppResult<String> {
        debug!("调用 LLM API，模型: {}", request.model);
        debug!("用户消息长度: {} 字符", request.user_message.len());

        let build_err = |e: async_openai::error::OpenAIError| LlmError::RequestBuild(e.to_string());

        let mut messages = Vec::new();

        if let Some(sys_msg) = &request.system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg.as_str())
                .build()
                .map_err(build_err)?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(request.user_message.as_str())
            .build()
            .map_err(build_err)?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&request.model)
            .messages(messages)
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .build()
            .map_err(build_err)?;

        let response = self
            .client(credential)
            .chat()
            .create(chat_request)
            .await
            .map_err(|e| {
                warn!("LLM API 调用失败: {}", e);
                AppError::llm_api_failed(&request.model, e)
            })?;

        debug!("LLM API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| LlmError::EmptyContent {
                model: request.model.clone(),
            })?;

        Ok(content.trim().to_string())
    }
}
