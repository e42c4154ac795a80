use serde::Deserialize;
use std::path::Path;

use crate::error::{AppError, AppResult, ConfigError};
use crate::i18n::Locale;
use crate::models::ModelChoice;

/// 程序配置
///
/// 加载顺序：默认值 → TOML 配置文件 → 环境变量。
/// API 密钥和 WordPress 凭据不属于配置，只在会话中输入。
#[derive(Clone, Debug)]
pub struct Config {
    // --- LLM 配置 ---
    pub llm_api_base_url: String,
    pub default_model: ModelChoice,
    // --- 生成配置 ---
    /// 默认每个主题生成的 FAQ 数量
    pub default_faq_count: usize,
    /// 界面允许选择的最大数量
    pub max_faq_count: usize,
    /// 免费额度上限，None 表示不限制
    pub tier_ceiling: Option<usize>,
    pub default_locale: Locale,
    // --- 文件配置 ---
    pub sample_csv_path: String,
    pub output_csv_path: String,
    /// 输出日志文件
    pub output_log_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            default_model: ModelChoice::Gpt35Turbo,
            default_faq_count: 5,
            max_faq_count: 10,
            tier_ceiling: Some(5),
            default_locale: Locale::English,
            sample_csv_path: "sample.csv".to_string(),
            output_csv_path: "output_faqs.csv".to_string(),
            output_log_file: "faq_generator.log".to_string(),
            verbose_logging: false,
        }
    }
}

/// TOML 配置文件内容，所有字段可选
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    llm_api_base_url: Option<String>,
    default_model: Option<String>,
    default_faq_count: Option<usize>,
    tier_ceiling: Option<toml::Value>,
    default_locale: Option<String>,
    sample_csv_path: Option<String>,
    output_csv_path: Option<String>,
    output_log_file: Option<String>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 按 默认值 → 配置文件 → 环境变量 的顺序加载配置
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        let explicit = std::env::var("FAQGEN_CONFIG").ok();
        let path = explicit.clone().unwrap_or_else(|| "faqgen.toml".to_string());
        if explicit.is_some() || Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| AppError::file_read_failed(&path, e))?;
            config.apply_toml(&path, &content)?;
        }

        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// 应用 TOML 配置文件内容
    pub fn apply_toml(&mut self, path: &str, content: &str) -> AppResult<()> {
        let file: FileConfig = toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_string(),
            source,
        })?;

        if let Some(v) = file.llm_api_base_url {
            self.llm_api_base_url = v;
        }
        if let Some(v) = file.default_model {
            self.default_model = parse_model("default_model", &v)?;
        }
        if let Some(v) = file.default_faq_count {
            self.default_faq_count = v;
        }
        if let Some(v) = file.tier_ceiling {
            self.tier_ceiling = match v {
                toml::Value::Integer(n) if n > 0 => Some(n as usize),
                toml::Value::Integer(_) => None,
                toml::Value::String(s) => parse_ceiling("tier_ceiling", &s)?,
                other => return Err(parse_error("tier_ceiling", &other.to_string(), "usize | \"none\"")),
            };
        }
        if let Some(v) = file.default_locale {
            self.default_locale = parse_locale("default_locale", &v)?;
        }
        if let Some(v) = file.sample_csv_path {
            self.sample_csv_path = v;
        }
        if let Some(v) = file.output_csv_path {
            self.output_csv_path = v;
        }
        if let Some(v) = file.output_log_file {
            self.output_log_file = v;
        }
        if let Some(v) = file.verbose_logging {
            self.verbose_logging = v;
        }
        Ok(())
    }

    /// 应用环境变量覆盖
    ///
    /// `lookup` 便于测试时替换真实环境变量
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> AppResult<()> {
        if let Some(v) = lookup("LLM_API_BASE_URL") {
            self.llm_api_base_url = v;
        }
        if let Some(v) = lookup("FAQGEN_DEFAULT_MODEL") {
            self.default_model = parse_model("FAQGEN_DEFAULT_MODEL", &v)?;
        }
        if let Some(v) = lookup("FAQGEN_DEFAULT_COUNT") {
            self.default_faq_count = v
                .trim()
                .parse()
                .map_err(|_| parse_error("FAQGEN_DEFAULT_COUNT", &v, "usize"))?;
        }
        if let Some(v) = lookup("FAQGEN_TIER_CEILING") {
            self.tier_ceiling = parse_ceiling("FAQGEN_TIER_CEILING", &v)?;
        }
        if let Some(v) = lookup("FAQGEN_LOCALE") {
            self.default_locale = parse_locale("FAQGEN_LOCALE", &v)?;
        }
        if let Some(v) = lookup("FAQGEN_SAMPLE_CSV") {
            self.sample_csv_path = v;
        }
        if let Some(v) = lookup("FAQGEN_OUTPUT_CSV") {
            self.output_csv_path = v;
        }
        if let Some(v) = lookup("FAQGEN_LOG_FILE") {
            self.output_log_file = v;
        }
        if let Some(v) = lookup("VERBOSE_LOGGING") {
            self.verbose_logging = v
                .trim()
                .parse()
                .map_err(|_| parse_error("VERBOSE_LOGGING", &v, "bool"))?;
        }
        Ok(())
    }

    /// 本次会话实际允许的最大 FAQ 数量
    pub fn effective_max_count(&self) -> usize {
        match self.tier_ceiling {
            Some(ceiling) => ceiling.min(self.max_faq_count),
            None => self.max_faq_count,
        }
    }
}

fn parse_error(var_name: &str, value: &str, expected_type: &str) -> AppError {
    ConfigError::EnvVarParseFailed {
        var_name: var_name.to_string(),
        value: value.to_string(),
        expected_type: expected_type.to_string(),
    }
    .into()
}

fn parse_model(var_name: &str, value: &str) -> AppResult<ModelChoice> {
    ModelChoice::find(value).ok_or_else(|| parse_error(var_name, value, "model"))
}

fn parse_locale(var_name: &str, value: &str) -> AppResult<Locale> {
    Locale::find(value).ok_or_else(|| parse_error(var_name, value, "locale"))
}

fn parse_ceiling(var_name: &str, value: &str) -> AppResult<Option<usize>> {
    match value.trim().to_lowercase().as_str() {
        "none" | "off" | "0" => Ok(None),
        other => other
            .parse::<usize>()
            .map(Some)
            .map_err(|_| parse_error(var_name, value, "usize | \"none\"")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_use_constrained_tier() {
        let config = Config::default();
        assert_eq!(config.tier_ceiling, Some(5));
        assert_eq!(config.effective_max_count(), 5);
        assert_eq!(config.default_model, ModelChoice::Gpt35Turbo);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(env(&[
                ("FAQGEN_TIER_CEILING", "none"),
                ("FAQGEN_DEFAULT_MODEL", "gpt-4"),
                ("FAQGEN_LOCALE", "de"),
                ("VERBOSE_LOGGING", "true"),
            ]))
            .unwrap();

        assert_eq!(config.tier_ceiling, None);
        assert_eq!(config.effective_max_count(), 10);
        assert_eq!(config.default_model, ModelChoice::Gpt4);
        assert_eq!(config.default_locale, Locale::German);
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_invalid_env_value_is_reported() {
        let mut config = Config::default();
        let err = config
            .apply_env(env(&[("FAQGEN_DEFAULT_COUNT", "many")]))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::EnvVarParseFailed { ref var_name, .. }) if var_name == "FAQGEN_DEFAULT_COUNT"
        ));
    }

    #[test]
    fn test_toml_file_layer() {
        let mut config = Config::default();
        config
            .apply_toml(
                "faqgen.toml",
                r#"
                llm_api_base_url = "http://localhost:8080/v1"
                tier_ceiling = 3
                default_locale = "Turkish"
                "#,
            )
            .unwrap();

        assert_eq!(config.llm_api_base_url, "http://localhost:8080/v1");
        assert_eq!(config.tier_ceiling, Some(3));
        assert_eq!(config.default_locale, Locale::Turkish);
    }

    #[test]
    fn test_broken_toml_is_reported() {
        let mut config = Config::default();
        let err = config.apply_toml("faqgen.toml", "tier_ceiling = [").unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::TomlParseFailed { .. })));
    }
}
