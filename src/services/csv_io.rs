//! CSV 读写服务 - 业务能力层
//!
//! 读取主题列表、导出 FAQ 表、导出示例文件

use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult, FileError, InputError};
use crate::models::{FaqTable, Topic};

/// 可识别的主题列名（小写）
const TOPIC_HEADERS: [&str; 5] = ["leistung", "service", "topic", "thema", "hizmet"];

/// 从文件读取主题列表
pub fn load_topics(path: &Path) -> AppResult<Vec<Topic>> {
    let path_str = path.display().to_string();
    if !path.exists() {
        return Err(FileError::NotFound { path: path_str }.into());
    }

    let file = File::open(path).map_err(|e| AppError::file_read_failed(&path_str, e))?;
    let topics = read_topics(file)?;

    if topics.is_empty() {
        return Err(InputError::NoTopics { path: path_str }.into());
    }

    info!("✓ 从 {} 读取到 {} 个主题", path_str, topics.len());
    Ok(topics)
}

/// 从任意来源读取主题
///
/// 主题列取第一个可识别的列名，找不到时取第一列；空白单元格跳过
pub fn read_topics<R: Read>(reader: R) -> AppResult<Vec<Topic>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = reader.headers()?.clone();
    let column = headers
        .iter()
        .position(|h| {
            let h = h.trim_start_matches('\u{feff}').trim().to_lowercase();
            TOPIC_HEADERS.contains(&h.as_str())
        })
        .unwrap_or_else(|| {
            warn!("没有找到主题列，使用第一列: {:?}", headers.get(0));
            0
        });
    debug!("主题列: {} ({:?})", column, headers.get(column));

    let mut topics = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(topic) = record.get(column).and_then(Topic::new) {
            topics.push(topic);
        }
    }

    Ok(topics)
}

/// 把 FAQ 表写成 CSV
pub fn write_faqs<W: Write>(writer: W, table: &FaqTable) -> AppResult<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    if table.is_empty() {
        writer.write_record(["Leistung", "Frage", "Antwort"])?;
    }
    for row in table.rows() {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .map_err(|e| AppError::file_write_failed("<csv>", e))?;
    Ok(())
}

/// 把 FAQ 表保存到文件
pub fn save_faqs(path: &Path, table: &FaqTable) -> AppResult<()> {
    let path_str = path.display().to_string();
    let file = File::create(path).map_err(|e| AppError::file_write_failed(&path_str, e))?;
    write_faqs(file, table)?;
    info!("✓ 已保存 {} 条 FAQ 到 {}", table.len(), path_str);
    Ok(())
}

/// 复制示例 CSV 到指定位置
pub fn export_sample(sample: &Path, destination: &Path) -> AppResult<()> {
    if !sample.exists() {
        return Err(FileError::NotFound {
            path: sample.display().to_string(),
        }
        .into());
    }
    std::fs::copy(sample, destination)
        .map_err(|e| AppError::file_write_failed(destination.display().to_string(), e))?;
    Ok(())
}
