//! 问题生成服务 - 业务能力层
//!
//! 只负责"为一个主题生成 N 个问题"，不关心流程

use tracing::{debug, warn};

use crate::clients::{ChatBackend, ChatRequest};
use crate::error::AppResult;
use crate::i18n::question_prompt;
use crate::models::GenerationRequest;

pub const SYSTEM_MESSAGE: &str = "You are a helpful assistant.";
const QUESTION_MAX_TOKENS: u32 = 1500;
const TEMPERATURE: f32 = 0.7;

/// 问题生成服务
pub struct QuestionService<'a, B: ChatBackend + ?Sized> {
    backend: &'a B,
}

impl<'a, B: ChatBackend + ?Sized> QuestionService<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// 构建发送给 LLM 的请求
    pub fn build_request(request: &GenerationRequest<'_>) -> ChatRequest {
        ChatRequest {
            model: request.model.as_str().to_string(),
            system_message: Some(SYSTEM_MESSAGE.to_string()),
            user_message: question_prompt(request.locale, request.count, request.topic),
            max_tokens: QUESTION_MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    /// 生成问题列表
    ///
    /// 调用失败时直接返回错误，由调用方决定如何提示
    pub async fn generate(&self, request: &GenerationRequest<'_>) -> AppResult<Vec<String>> {
        let chat_request = Self::build_request(request);
        let response = self.backend.complete(request.credential, &chat_request).await?;

        let questions = split_questions(&response, request.count);
        debug!("主题 {} 生成 {} 个问题", request.topic, questions.len());

        Ok(questions)
    }
}

/// 按行拆分 LLM 返回的问题，去掉空行，最多保留 `count` 个
pub fn split_questions(response: &str, count: usize) -> Vec<String> {
    let lines: Vec<String> = response
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines.len() > count {
        warn!("LLM 返回了 {} 行，只保留前 {} 个问题", lines.len(), count);
    }

    lines.into_iter().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::i18n::Locale;
    use crate::models::{ModelChoice, Secret};
    use crate::testing::ScriptedChat;

    fn request<'a>(credential: &'a Secret, count: usize) -> GenerationRequest<'a> {
        GenerationRequest {
            credential,
            topic: "Dachreinigung",
            count,
            model: ModelChoice::Gpt4,
            locale: Locale::German,
        }
    }

    #[test]
    fn test_split_questions_drops_blank_lines() {
        let questions = split_questions("\n1. Was?\n\n2. Wie?\n   \n3. Wo?\n", 5);
        assert_eq!(questions, vec!["1. Was?", "2. Wie?", "3. Wo?"]);
    }

    #[test]
    fn test_split_questions_caps_at_count() {
        let questions = split_questions("a\nb\nc\nd", 2);
        assert_eq!(questions, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_generate_uses_fixed_sampling_parameters() {
        let backend = ScriptedChat::replying("Frage 1?\nFrage 2?\nFrage 3?");
        let credential = Secret::new("sk-test");

        let questions = QuestionService::new(&backend)
            .generate(&request(&credential, 3))
            .await
            .unwrap();

        assert_eq!(questions.len(), 3);
        let seen = backend.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].model, "gpt-4");
        assert_eq!(seen[0].max_tokens, 1500);
        assert_eq!(seen[0].temperature, 0.7);
        assert_eq!(seen[0].system_message.as_deref(), Some(SYSTEM_MESSAGE));
        assert!(seen[0].user_message.contains("Deutsch"));
        assert!(seen[0].user_message.contains("Dachreinigung"));
    }

    #[tokio::test]
    async fn test_generate_never_exceeds_count() {
        let backend = ScriptedChat::replying("q1\nq2\nq3\nq4\nq5\nq6\nq7");
        let credential = Secret::new("sk-test");

        for count in 1..=5 {
            let questions = QuestionService::new(&backend)
                .generate(&request(&credential, count))
                .await
                .unwrap();
            assert!(questions.len() <= count);
            assert!(questions.iter().all(|q| !q.is_empty()));
        }
    }

    #[tokio::test]
    async fn test_generate_propagates_failure() {
        let backend = ScriptedChat::failing();
        let credential = Secret::new("sk-test");

        let err = QuestionService::new(&backend)
            .generate(&request(&credential, 3))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
