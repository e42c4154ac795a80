//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责会话调度，是整个系统的"指挥中心"。
//!
//! ### `app` - 交互会话
//! - 管理会话生命周期（初始化、运行、结束）
//! - 把菜单操作分派给 workflow / services
//! - 把错误翻译成当前语言的提示
//!
//! ## 层次关系
//!
//! ```text
//! app (处理一次会话)
//!     ↓
//! workflow::FaqFlow (处理 Vec<Topic>)
//!     ↓
//! services (能力层：questions / answers / csv / wordpress)
//!     ↓
//! clients (基础设施：LLM / WordPress REST)
//! ```
//!
//! ## 设计原则
//!
//! 1. **向下依赖**：编排层 → workflow → services → clients
//! 2. **无业务逻辑**：只做调度和展示，不做具体业务判断

pub mod app;

pub use app::{user_message, Action, App};
