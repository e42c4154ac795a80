/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use std::fs;
use tracing::info;

use crate::error::{AppError, AppResult};

/// 初始化日志文件（写入文件头）
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> AppResult<()> {
    let log_header = format!(
        "{}\nFAQ 生成日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header).map_err(|e| AppError::file_write_failed(log_file_path, e))?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `model`: 默认模型
/// - `ceiling`: 免费额度上限
pub fn log_startup(model: &str, ceiling: Option<usize>) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - FAQ 生成器");
    info!("🤖 默认模型: {}", model);
    match ceiling {
        Some(c) => info!("📊 每个主题最多 {} 条 FAQ", c),
        None => info!("📊 不限制每个主题的 FAQ 数量"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录主题开始处理
///
/// # 参数
/// - `index`: 主题序号（从 1 开始）
/// - `total`: 主题总数
/// - `topic`: 主题名称
pub fn log_topic_start(index: usize, total: usize, topic: &str) {
    info!("\n{}", "─".repeat(60));
    info!("📦 处理主题 {}/{}: {}", index, total, topic);
    info!("{}", "─".repeat(60));
}

/// 打印生成统计信息
pub fn print_generation_stats(topics: usize, rows: usize, failures: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 FAQ 生成完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📁 主题数: {}", topics);
    info!("✅ 成功: {}", rows);
    info!("❌ 失败: {}", failures);
    info!("{}", "=".repeat(60));
}

/// 打印发布统计信息
pub fn print_publish_stats(success: usize, total: usize, site: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 WordPress 发布统计 ({})", site);
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", total - success);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("Größe", 3), "Grö...");
        assert_eq!(truncate_text("kurz", 10), "kurz");
    }

    #[test]
    fn test_init_log_file_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let path = path.to_str().unwrap();

        init_log_file(path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("FAQ 生成日志"));
    }
}
