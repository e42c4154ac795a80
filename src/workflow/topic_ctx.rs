//! 主题处理上下文
//!
//! 封装"我正在处理第几个主题"这一信息

use std::fmt::Display;

/// 主题处理上下文（仅用于日志和提示）
#[derive(Debug, Clone)]
pub struct TopicCtx<'a> {
    /// 主题序号（从1开始）
    pub index: usize,
    /// 主题总数
    pub total: usize,
    pub topic: &'a str,
}

impl<'a> TopicCtx<'a> {
    pub fn new(index: usize, total: usize, topic: &'a str) -> Self {
        Self { index, total, topic }
    }
}

impl Display for TopicCtx<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[主题 {}/{} {}]", self.index, self.total, self.topic)
    }
}
