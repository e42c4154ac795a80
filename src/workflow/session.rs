//! 会话上下文
//!
//! 一次交互会话的全部可变状态：凭据、主题、生成结果、发布目标。
//! 会话结束即丢弃，不做任何持久化。

use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::error::{InputError, WordPressError};
use crate::i18n::{texts, Locale, LocaleTexts};
use crate::models::{FaqTable, ModelChoice, PublishTarget, Secret, Topic};

const MIN_FAQ_COUNT: usize = 1;

/// 发布闸门
///
/// - 必须先对同一目标通过连接检查
/// - 同一批 FAQ 对同一站点同一文章类型只发布一次
#[derive(Debug, Default)]
pub struct PublishGate {
    verified: Option<PublishTarget>,
    published: HashSet<(String, String, u64)>,
}

impl PublishGate {
    fn key(target: &PublishTarget, generation: u64) -> (String, String, u64) {
        (
            target.site_url.clone(),
            target.post_type.rest_base().to_string(),
            generation,
        )
    }

    pub fn mark_verified(&mut self, target: &PublishTarget) {
        self.verified = Some(target.clone());
    }

    /// 连接检查失败后撤销
    pub fn revoke(&mut self) {
        self.verified = None;
    }

    pub fn is_verified(&self, target: &PublishTarget) -> bool {
        self.verified.as_ref() == Some(target)
    }

    /// 判断是否允许发布
    pub fn authorize(&self, target: &PublishTarget, generation: u64) -> Result<(), WordPressError> {
        if !self.is_verified(target) {
            return Err(WordPressError::NotVerified);
        }
        if self.published.contains(&Self::key(target, generation)) {
            return Err(WordPressError::AlreadyPublished {
                site: target.site_url.clone(),
            });
        }
        Ok(())
    }

    /// 记录已发布（无论全部成功与否，已发布的文章不会回滚）
    pub fn mark_published(&mut self, target: &PublishTarget, generation: u64) {
        self.published.insert(Self::key(target, generation));
    }
}

/// 会话上下文
#[derive(Debug)]
pub struct Session {
    pub locale: Locale,
    pub credential: Secret,
    pub topics: Vec<Topic>,
    pub topics_source: Option<PathBuf>,
    pub faq_count: usize,
    pub model: ModelChoice,
    table: Option<FaqTable>,
    generations: u64,
    publish_target: Option<PublishTarget>,
    gate: PublishGate,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            locale: config.default_locale,
            credential: Secret::default(),
            topics: Vec::new(),
            topics_source: None,
            faq_count: config.default_faq_count,
            model: config.default_model,
            table: None,
            generations: 0,
            publish_target: None,
            gate: PublishGate::default(),
        }
    }

    pub fn texts(&self) -> &'static LocaleTexts {
        texts(self.locale)
    }

    /// 生成前校验输入，失败时不会发起任何外部调用
    ///
    /// 先检查缺失输入，再检查数量范围和免费额度
    pub fn validate_generation(&self, config: &Config) -> Result<usize, InputError> {
        if self.credential.is_empty() {
            return Err(InputError::MissingCredential);
        }
        if self.topics.is_empty() {
            return Err(InputError::MissingTopics);
        }
        validate_count(self.faq_count, config)
    }

    /// 开始新一轮生成，返回带新编号的空表
    pub fn begin_generation(&mut self) -> FaqTable {
        self.generations += 1;
        FaqTable::new(self.generations)
    }

    /// 保存生成结果（覆盖上一轮）
    pub fn store_table(&mut self, table: FaqTable) {
        debug!("保存第 {} 轮生成结果: {} 条", table.generation(), table.len());
        self.table = Some(table);
    }

    pub fn table(&self) -> Option<&FaqTable> {
        self.table.as_ref()
    }

    pub fn publish_target(&self) -> Option<&PublishTarget> {
        self.publish_target.as_ref()
    }

    pub fn set_publish_target(&mut self, target: PublishTarget) {
        self.publish_target = Some(target);
    }

    pub fn gate(&self) -> &PublishGate {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut PublishGate {
        &mut self.gate
    }
}

/// 校验每个主题的 FAQ 数量
pub fn validate_count(requested: usize, config: &Config) -> Result<usize, InputError> {
    if !(MIN_FAQ_COUNT..=config.max_faq_count).contains(&requested) {
        return Err(InputError::CountOutOfRange {
            requested,
            min: MIN_FAQ_COUNT,
            max: config.max_faq_count,
        });
    }
    if let Some(ceiling) = config.tier_ceiling {
        if requested > ceiling {
            return Err(InputError::TierLimitExceeded { requested, ceiling });
        }
    }
    Ok(requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostType;

    fn ready_session(config: &Config) -> Session {
        let mut session = Session::new(config);
        session.credential = Secret::new("sk-test");
        session.topics = vec![Topic::new("Solar").unwrap()];
        session
    }

    fn target(site: &str) -> PublishTarget {
        PublishTarget::new(site, "editor", Secret::new("pw"), PostType::Posts).unwrap()
    }

    #[test]
    fn test_missing_inputs_block_generation() {
        let config = Config::default();
        let mut session = Session::new(&config);
        assert_eq!(
            session.validate_generation(&config),
            Err(InputError::MissingCredential)
        );

        session.credential = Secret::new("sk-test");
        assert_eq!(
            session.validate_generation(&config),
            Err(InputError::MissingTopics)
        );
    }

    #[test]
    fn test_counts_above_ceiling_rejected() {
        let config = Config::default();
        let mut session = ready_session(&config);

        for count in 6..=10 {
            session.faq_count = count;
            assert_eq!(
                session.validate_generation(&config),
                Err(InputError::TierLimitExceeded {
                    requested: count,
                    ceiling: 5
                })
            );
        }

        session.faq_count = 5;
        assert_eq!(session.validate_generation(&config), Ok(5));
    }

    #[test]
    fn test_count_range_without_ceiling() {
        let config = Config {
            tier_ceiling: None,
            ..Config::default()
        };
        assert_eq!(validate_count(10, &config), Ok(10));
        assert!(matches!(
            validate_count(0, &config),
            Err(InputError::CountOutOfRange { .. })
        ));
        assert!(matches!(
            validate_count(11, &config),
            Err(InputError::CountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_generations_are_numbered() {
        let config = Config::default();
        let mut session = ready_session(&config);
        let first = session.begin_generation();
        let second = session.begin_generation();
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn test_gate_requires_check_for_same_target() {
        let mut gate = PublishGate::default();
        let a = target("https://a.example");
        let b = target("https://b.example");

        assert!(matches!(gate.authorize(&a, 1), Err(WordPressError::NotVerified)));

        gate.mark_verified(&a);
        assert!(gate.authorize(&a, 1).is_ok());
        assert!(matches!(gate.authorize(&b, 1), Err(WordPressError::NotVerified)));
    }

    #[test]
    fn test_gate_blocks_duplicate_publish() {
        let mut gate = PublishGate::default();
        let a = target("https://a.example");
        gate.mark_verified(&a);
        gate.mark_published(&a, 1);

        assert!(matches!(
            gate.authorize(&a, 1),
            Err(WordPressError::AlreadyPublished { .. })
        ));
        // 新一轮生成可以再次发布
        assert!(gate.authorize(&a, 2).is_ok());
    }

    #[test]
    fn test_gate_revoke_after_failed_check() {
        let mut gate = PublishGate::default();
        let a = target("https://a.example");
        gate.mark_verified(&a);
        gate.revoke();
        assert!(matches!(gate.authorize(&a, 1), Err(WordPressError::NotVerified)));
    }
}
