//! 日志初始化
//!
//! 控制台输出到 stderr，同时追加写入运行日志文件

use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::utils::logging::init_log_file;

const DEFAULT_LOG_FILTER: &str = "faq_generator=info";
const VERBOSE_LOG_FILTER: &str = "faq_generator=debug";

/// 仅控制台输出（测试和早期启动阶段使用）
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// 按配置初始化日志：stderr + 日志文件
pub fn init_with_config(config: &Config) -> AppResult<()> {
    init_log_file(&config.output_log_file)?;

    let file = OpenOptions::new()
        .append(true)
        .open(&config.output_log_file)
        .map_err(|e| AppError::file_write_failed(&config.output_log_file, e))?;

    let default_filter = if config.verbose_logging {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_filter(filter()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter()),
        )
        .try_init();

    Ok(())
}
