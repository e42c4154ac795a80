use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 用户输入错误（缺少输入、超出额度等）
    #[error("输入错误: {0}")]
    Input(#[from] InputError),
    /// LLM 服务错误
    #[error("LLM错误: {0}")]
    Llm(#[from] LlmError),
    /// WordPress 调用错误
    #[error("WordPress错误: {0}")]
    WordPress(#[from] WordPressError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// CSV 解析 / 写入错误
    #[error("CSV错误: {0}")]
    Csv(#[from] csv::Error),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 用户输入错误
///
/// 这些错误在发起任何外部调用之前就会被拦截
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// 缺少 API 密钥
    #[error("缺少 API 密钥")]
    MissingCredential,
    /// 缺少主题文件
    #[error("缺少主题文件")]
    MissingTopics,
    /// 主题文件中没有任何主题
    #[error("主题文件中没有主题: {path}")]
    NoTopics { path: String },
    /// FAQ 数量超出允许范围
    #[error("FAQ 数量 {requested} 超出范围 [{min}, {max}]")]
    CountOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },
    /// FAQ 数量超出免费额度
    #[error("FAQ 数量 {requested} 超出免费额度 {ceiling}")]
    TierLimitExceeded { requested: usize, ceiling: usize },
    /// 缺少 WordPress 连接信息
    #[error("缺少 WordPress 站点地址、用户名或应用密码")]
    MissingPublishTarget,
    /// 自定义文章类型名称不合法
    #[error("文章类型名称不合法: {0}")]
    InvalidPostType(String),
    /// 没有可发布的 FAQ
    #[error("没有可发布的 FAQ")]
    EmptyTable,
}

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {source}")]
    ApiCallFailed {
        model: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 请求构建失败
    #[error("LLM 请求构建失败: {0}")]
    RequestBuild(String),
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
    /// 回答为空
    #[error("LLM 没有返回回答: {question}")]
    EmptyAnswer { question: String },
}

/// WordPress 调用错误
#[derive(Debug, Error)]
pub enum WordPressError {
    /// 网络请求失败（没有拿到 HTTP 状态码）
    #[error("WordPress 请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 同一批 FAQ 已经发布到同一站点
    #[error("本批 FAQ 已经发布到 {site}，请重新生成后再发布")]
    AlreadyPublished { site: String },
    /// 尚未通过连接检查
    #[error("请先检查 WordPress 连接")]
    NotVerified,
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建LLM API调用错误
    pub fn llm_api_failed(
        model: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Llm(LlmError::ApiCallFailed {
            model: model.into(),
            source: Box::new(source),
        })
    }

    /// 创建 WordPress 请求失败错误
    pub fn wordpress_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::WordPress(WordPressError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
