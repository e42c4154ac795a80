//! # FAQ Generator
//!
//! 按 CSV 中的主题批量生成 FAQ，导出 CSV 并发布到 WordPress
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 持有外部连接，只暴露能力
//! - `ChatBackend` - OpenAI 兼容的聊天补全
//! - `WordPressApi` - WordPress REST 创建文章
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `QuestionService` - 为一个主题生成问题
//! - `AnswerService` - 为一个问题生成 HTML 回答
//! - `WordPressService` - 连接检查和批量发布
//! - `csv_io` - 读取主题、导出 FAQ 表
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一轮生成"和会话状态
//! - `FaqFlow` - 流程编排（questions → answers → table）
//! - `Session` / `PublishGate` - 会话状态和发布闸门
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 交互会话，菜单调度和提示
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod ui;
pub mod utils;
pub mod workflow;

#[cfg(test)]
mod testing;

// 重新导出常用类型
pub use clients::{ChatBackend, OpenAiChat, WordPressApi, WordPressClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use i18n::Locale;
pub use models::{FaqRow, FaqTable, PostType, PublishTarget, Secret, Topic};
pub use orchestrator::App;
pub use workflow::{FaqFlow, GenerationReport, Session};
