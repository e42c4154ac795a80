//! FAQ 生成流程 - 流程层
//!
//! 流程顺序（逐个主题、逐个问题，串行执行）：
//! 1. 生成问题列表
//! 2. 为每个问题生成回答
//! 3. 写入 FAQ 表；回答失败的行以空回答保留，记录后继续

use tracing::{error, info, warn};

use crate::clients::ChatBackend;
use crate::i18n::Locale;
use crate::models::{FaqRow, FaqTable, GenerationRequest, ModelChoice, Secret, Topic};
use crate::services::{AnswerService, QuestionService};
use crate::utils::logging::{log_topic_start, print_generation_stats, truncate_text};
use crate::workflow::topic_ctx::TopicCtx;

/// 一次生成运行的参数
#[derive(Debug, Clone)]
pub struct FlowParams<'a> {
    pub credential: &'a Secret,
    pub count: usize,
    pub model: ModelChoice,
    pub locale: Locale,
}

/// 生成失败的记录（已报告，不重试）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    /// 问题生成失败，该主题没有任何 FAQ
    Questions { topic: String, error: String },
    /// 单个回答生成失败，该问题以空回答写入 FAQ 表
    Answer {
        topic: String,
        question: String,
        error: String,
    },
}

/// 流程进度事件，交给编排层决定如何展示
#[derive(Debug)]
pub enum FlowEvent<'a> {
    TopicStarted(&'a TopicCtx<'a>),
    Failed(&'a GenerationFailure),
}

/// 生成结果
#[derive(Debug)]
pub struct GenerationReport {
    pub table: FaqTable,
    pub failures: Vec<GenerationFailure>,
}

/// FAQ 生成流程
///
/// - 编排"问题 → 回答 → 汇总"
/// - 不持有会话状态
/// - 只依赖业务能力（services）
pub struct FaqFlow<'a, B: ChatBackend + ?Sized> {
    questions: QuestionService<'a, B>,
    answers: AnswerService<'a, B>,
}

impl<'a, B: ChatBackend + ?Sized> FaqFlow<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            questions: QuestionService::new(backend),
            answers: AnswerService::new(backend),
        }
    }

    /// 为所有主题生成 FAQ，结果写入 `table`
    pub async fn run(
        &self,
        params: &FlowParams<'_>,
        topics: &[Topic],
        mut table: FaqTable,
        on_event: &mut dyn FnMut(FlowEvent<'_>),
    ) -> GenerationReport {
        let mut failures = Vec::new();
        let total = topics.len();

        for (idx, topic) in topics.iter().enumerate() {
            let ctx = TopicCtx::new(idx + 1, total, topic.as_str());
            log_topic_start(ctx.index, ctx.total, ctx.topic);
            on_event(FlowEvent::TopicStarted(&ctx));

            let request = GenerationRequest {
                credential: params.credential,
                topic: topic.as_str(),
                count: params.count,
                model: params.model,
                locale: params.locale,
            };

            let rows = self.run_topic(&ctx, &request, &mut failures, on_event).await;
            table.extend(rows);
        }

        print_generation_stats(total, table.answered_count(), failures.len());

        GenerationReport { table, failures }
    }

    async fn run_topic(
        &self,
        ctx: &TopicCtx<'_>,
        request: &GenerationRequest<'_>,
        failures: &mut Vec<GenerationFailure>,
        on_event: &mut dyn FnMut(FlowEvent<'_>),
    ) -> Vec<FaqRow> {
        let questions = match self.questions.generate(request).await {
            Ok(questions) => questions,
            Err(e) => {
                error!("{} ❌ 问题生成失败: {}", ctx, e);
                let failure = GenerationFailure::Questions {
                    topic: ctx.topic.to_string(),
                    error: e.to_string(),
                };
                on_event(FlowEvent::Failed(&failure));
                failures.push(failure);
                return Vec::new();
            }
        };

        if questions.is_empty() {
            warn!("{} LLM 没有返回任何问题", ctx);
        } else {
            info!("{} ✓ 生成 {} 个问题", ctx, questions.len());
        }

        let mut rows = Vec::with_capacity(questions.len());
        for question in questions {
            match self.answers.generate(request, &question).await {
                Ok(answer) => rows.push(FaqRow::answered(ctx.topic, question, answer)),
                Err(e) => {
                    error!("{} ❌ 回答生成失败 ({}): {}", ctx, truncate_text(&question, 40), e);
                    let failure = GenerationFailure::Answer {
                        topic: ctx.topic.to_string(),
                        question: question.clone(),
                        error: e.to_string(),
                    };
                    on_event(FlowEvent::Failed(&failure));
                    failures.push(failure);
                    rows.push(FaqRow::unanswered(ctx.topic, question));
                }
            }
        }

        rows
    }
}
