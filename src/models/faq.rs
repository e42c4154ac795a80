use serde::{Deserialize, Serialize};

/// 主题（CSV 中的一行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic(String);

impl Topic {
    /// 创建主题，空白主题返回 None
    pub fn new(label: impl AsRef<str>) -> Option<Self> {
        let label = label.as_ref().trim();
        if label.is_empty() {
            None
        } else {
            Some(Self(label.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 一条 FAQ（主题、问题、HTML 回答）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRow {
    #[serde(rename = "Leistung")]
    pub topic: String,
    #[serde(rename = "Frage")]
    pub question: String,
    #[serde(rename = "Antwort")]
    pub answer: String,
}

impl FaqRow {
    pub fn answered(topic: &str, question: String, answer: String) -> Self {
        Self {
            topic: topic.to_string(),
            question,
            answer,
        }
    }

    /// 回答生成失败的行：保留问题，回答为空
    pub fn unanswered(topic: &str, question: String) -> Self {
        Self::answered(topic, question, String::new())
    }

    /// 空回答即失败标记，这类行导出 CSV 但不发布
    pub fn is_answered(&self) -> bool {
        !self.answer.trim().is_empty()
    }
}

/// 一次生成得到的 FAQ 表
///
/// `generation` 每次新生成都会递增，用于判断同一批 FAQ 是否已经发布过
#[derive(Debug, Clone, Default)]
pub struct FaqTable {
    generation: u64,
    rows: Vec<FaqRow>,
}

impl FaqTable {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            rows: Vec::new(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn push(&mut self, row: FaqRow) {
        self.rows.push(row);
    }

    pub fn extend(&mut self, rows: impl IntoIterator<Item = FaqRow>) {
        self.rows.extend(rows);
    }

    pub fn rows(&self) -> &[FaqRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 有回答的行数
    pub fn answered_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_answered()).count()
    }

    /// 统计某个主题下的 FAQ 数量
    pub fn count_for(&self, topic: &str) -> usize {
        self.rows.iter().filter(|r| r.topic == topic).count()
    }
}
