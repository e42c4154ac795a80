use crate::i18n::Locale;

/// 敏感字符串（API 密钥、应用密码）
///
/// `Debug` 和 `Display` 都不会输出原文
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}

/// 可选模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelChoice {
    #[default]
    Gpt35Turbo,
    Gpt4,
    Gpt4Turbo,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 3] = [
        ModelChoice::Gpt35Turbo,
        ModelChoice::Gpt4,
        ModelChoice::Gpt4Turbo,
    ];

    /// 获取 API 使用的模型名称
    pub fn as_str(self) -> &'static str {
        match self {
            ModelChoice::Gpt35Turbo => "gpt-3.5-turbo",
            ModelChoice::Gpt4 => "gpt-4",
            ModelChoice::Gpt4Turbo => "gpt-4-turbo",
        }
    }

    pub fn find(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|m| m.as_str().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单次生成请求（每次调用临时构建，不持久化）
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    pub credential: &'a Secret,
    pub topic: &'a str,
    pub count: usize,
    pub model: ModelChoice,
    pub locale: Locale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_redacted() {
        let secret = Secret::new(" sk-live-123 ");
        assert_eq!(secret.expose(), "sk-live-123");
        assert_eq!(format!("{secret:?}"), "Secret(***)");
        assert_eq!(secret.to_string(), "***");
    }

    #[test]
    fn test_model_find() {
        assert_eq!(ModelChoice::find("GPT-4"), Some(ModelChoice::Gpt4));
        assert_eq!(ModelChoice::find("gpt-4-turbo"), Some(ModelChoice::Gpt4Turbo));
        assert_eq!(ModelChoice::find("gpt-5"), None);
    }
}
