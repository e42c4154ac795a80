//! 交互会话编排 - 编排层
//!
//! ## 职责
//!
//! 1. **会话生命周期**：创建 [`Session`]，结束时丢弃
//! 2. **菜单调度**：把用户操作分派到对应处理函数
//! 3. **提示信息**：把各层返回的错误翻译成当前语言的提示
//!
//! 本层不做具体业务判断，只做调度和展示。

use std::path::Path;
use tracing::{info, warn};

use crate::clients::{ChatBackend, OpenAiChat, WordPressApi, WordPressClient};
use crate::config::Config;
use crate::error::{AppError, AppResult, InputError, WordPressError};
use crate::i18n::{Locale, LocaleTexts};
use crate::models::{ModelChoice, PostType, PublishTarget, Secret};
use crate::services::{csv_io, WordPressService};
use crate::ui::{Console, TerminalConsole};
use crate::utils::logging::{log_startup, print_publish_stats, truncate_text};
use crate::workflow::{FaqFlow, FlowEvent, FlowParams, GenerationFailure, Session};

/// 菜单操作（按显示顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    EnterApiKey,
    LoadTopics,
    ExportSample,
    SetCount,
    SelectModel,
    Generate,
    Review,
    SaveCsv,
    ConnectWordPress,
    Upload,
    ChangeLanguage,
    Quit,
}

impl Action {
    pub const ALL: [Action; 12] = [
        Action::EnterApiKey,
        Action::LoadTopics,
        Action::ExportSample,
        Action::SetCount,
        Action::SelectModel,
        Action::Generate,
        Action::Review,
        Action::SaveCsv,
        Action::ConnectWordPress,
        Action::Upload,
        Action::ChangeLanguage,
        Action::Quit,
    ];

    fn label(self, texts: &LocaleTexts) -> &'static str {
        let label = match self {
            Action::EnterApiKey => texts.api_key_prompt,
            Action::LoadTopics => texts.upload_prompt,
            Action::ExportSample => texts.download_sample,
            Action::SetCount => texts.num_faqs_prompt,
            Action::SelectModel => texts.model_prompt,
            Action::Generate => texts.generate_button,
            Action::Review => texts.review_faqs,
            Action::SaveCsv => texts.download_faqs,
            Action::ConnectWordPress => texts.check_wp_button,
            Action::Upload => texts.upload_wp_button,
            Action::ChangeLanguage => texts.change_language,
            Action::Quit => texts.quit,
        };
        label.trim_end_matches(':')
    }
}

/// 应用主结构
pub struct App<C: Console, B: ChatBackend, W: WordPressApi> {
    config: Config,
    console: C,
    chat: B,
    wordpress: W,
    session: Session,
}

impl App<TerminalConsole, OpenAiChat, WordPressClient> {
    /// 使用终端、OpenAI 兼容接口和 reqwest 初始化应用
    pub fn initialize(config: Config) -> Self {
        let chat = OpenAiChat::new(&config.llm_api_base_url);
        App::new(config, TerminalConsole::new(), chat, WordPressClient::new())
    }
}

impl<C: Console, B: ChatBackend, W: WordPressApi> App<C, B, W> {
    pub fn new(config: Config, console: C, chat: B, wordpress: W) -> Self {
        let session = Session::new(&config);
        Self {
            config,
            console,
            chat,
            wordpress,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// 运行交互会话，输入结束或选择退出时返回
    pub async fn run(&mut self) -> AppResult<()> {
        log_startup(self.config.default_model.as_str(), self.config.tier_ceiling);

        if !self.change_language()? {
            return Ok(());
        }

        loop {
            let texts = self.session.texts();
            let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label(texts)).collect();
            let Some(idx) = self.console.choose(texts.menu_prompt, &labels)? else {
                break;
            };

            let action = Action::ALL[idx];
            if action == Action::Quit {
                break;
            }

            if let Err(e) = self.dispatch(action).await {
                warn!("操作 {:?} 失败: {}", action, e);
                let message = user_message(self.session.texts(), &e);
                self.console.error(&message);
            }
        }

        info!("👋 会话结束");
        Ok(())
    }

    /// 执行单个菜单操作
    pub async fn dispatch(&mut self, action: Action) -> AppResult<()> {
        match action {
            Action::EnterApiKey => self.enter_api_key(),
            Action::LoadTopics => self.load_topics(),
            Action::ExportSample => self.export_sample(),
            Action::SetCount => self.set_count(),
            Action::SelectModel => self.select_model(),
            Action::Generate => self.generate().await,
            Action::Review => self.review(),
            Action::SaveCsv => self.save_csv(),
            Action::ConnectWordPress => self.connect_wordpress().await,
            Action::Upload => self.upload().await,
            Action::ChangeLanguage => self.change_language().map(|_| ()),
            Action::Quit => Ok(()),
        }
    }

    // ========== 输入收集 ==========

    /// 选择语言并显示使用说明；输入结束时返回 false
    fn change_language(&mut self) -> AppResult<bool> {
        let names: Vec<&str> = Locale::ALL.iter().map(|l| l.name()).collect();
        let prompt = self.session.texts().change_language;
        let Some(idx) = self.console.choose(prompt, &names)? else {
            return Ok(false);
        };
        self.session.locale = Locale::ALL[idx];
        info!("🌐 语言: {}", self.session.locale);
        self.console.show(self.session.texts().how_it_works);
        Ok(true)
    }

    fn enter_api_key(&mut self) -> AppResult<()> {
        let texts = self.session.texts();
        if let Some(key) = self.console.ask_secret(texts.api_key_prompt)? {
            self.session.credential = Secret::new(key);
        }
        Ok(())
    }

    fn load_topics(&mut self) -> AppResult<()> {
        let texts = self.session.texts();
        let Some(path) = self.console.ask(texts.upload_prompt)? else {
            return Ok(());
        };
        let path = Path::new(path.trim());
        let topics = csv_io::load_topics(path)?;

        self.console
            .show(&format!("✓ {} ({})", path.display(), topics.len()));
        self.session.topics = topics;
        self.session.topics_source = Some(path.to_path_buf());
        Ok(())
    }

    fn export_sample(&mut self) -> AppResult<()> {
        let texts = self.session.texts();
        let sample = Path::new(&self.config.sample_csv_path);
        if !sample.exists() {
            self.console.error(texts.sample_missing);
            return Ok(());
        }

        let Some(destination) = self.console.ask(texts.save_path_prompt)? else {
            return Ok(());
        };
        let destination = match destination.trim() {
            "" => "sample_download.csv",
            other => other,
        };
        csv_io::export_sample(sample, Path::new(destination))?;
        self.console
            .success(&format!("{} {}", texts.sample_saved, destination));
        Ok(())
    }

    fn set_count(&mut self) -> AppResult<()> {
        let texts = self.session.texts();
        let label = format!(
            "{} (1-{})",
            texts.num_faqs_prompt.trim_end_matches(':'),
            self.config.effective_max_count()
        );
        let Some(answer) = self.console.ask(&label)? else {
            return Ok(());
        };
        let requested = answer.trim().parse::<usize>().map_err(|_| {
            InputError::CountOutOfRange {
                requested: 0,
                min: 1,
                max: self.config.max_faq_count,
            }
        })?;
        if !(1..=self.config.max_faq_count).contains(&requested) {
            return Err(InputError::CountOutOfRange {
                requested,
                min: 1,
                max: self.config.max_faq_count,
            }
            .into());
        }
        // 免费额度在点击生成时检查
        self.session.faq_count = requested;
        Ok(())
    }

    fn select_model(&mut self) -> AppResult<()> {
        let texts = self.session.texts();
        let names: Vec<&str> = ModelChoice::ALL.iter().map(|m| m.as_str()).collect();
        if let Some(idx) = self.console.choose(texts.model_prompt, &names)? {
            self.session.model = ModelChoice::ALL[idx];
        }
        Ok(())
    }

    // ========== 生成 ==========

    async fn generate(&mut self) -> AppResult<()> {
        let count = self.session.validate_generation(&self.config)?;
        let table = self.session.begin_generation();
        let texts = self.session.texts();

        info!(
            "🤖 开始生成: {} 个主题, 每个 {} 条, 模型 {}",
            self.session.topics.len(),
            count,
            self.session.model
        );

        let params = FlowParams {
            credential: &self.session.credential,
            count,
            model: self.session.model,
            locale: self.session.locale,
        };

        let console = &mut self.console;
        let mut on_event = |event: FlowEvent<'_>| match event {
            FlowEvent::TopicStarted(ctx) => console.show(&format!(
                "{} {} ({}/{})",
                texts.generating_topic, ctx.topic, ctx.index, ctx.total
            )),
            FlowEvent::Failed(failure) => console.error(&describe_failure(failure)),
        };

        let report = FaqFlow::new(&self.chat)
            .run(&params, &self.session.topics, table, &mut on_event)
            .await;

        let answered = report.table.answered_count();
        let rows = report.table.len();
        self.session.store_table(report.table);
        self.console
            .success(&format!("{} ({}/{})", texts.generation_done, answered, rows));
        self.review()
    }

    fn review(&mut self) -> AppResult<()> {
        let texts = self.session.texts();
        let Some(table) = self.session.table().filter(|t| !t.is_empty()) else {
            self.console.warn(texts.no_faqs);
            return Ok(());
        };

        if let Some(source) = &self.session.topics_source {
            self.console.show(&format!("{} ({})", texts.review_faqs, source.display()));
        }
        for (i, row) in table.rows().iter().enumerate() {
            let answer = if row.is_answered() {
                truncate_text(row.answer.trim(), 120)
            } else {
                "❌ -".to_string()
            };
            self.console.show(&format!(
                "{:>3}. [{}] {}\n     {}",
                i + 1,
                row.topic,
                row.question,
                answer
            ));
        }
        Ok(())
    }

    fn save_csv(&mut self) -> AppResult<()> {
        let texts = self.session.texts();
        let Some(table) = self.session.table() else {
            self.console.warn(texts.no_faqs);
            return Ok(());
        };

        let Some(answer) = self.console.ask(texts.save_path_prompt)? else {
            return Ok(());
        };
        let path = match answer.trim() {
            "" => self.config.output_csv_path.clone(),
            other => other.to_string(),
        };

        csv_io::save_faqs(Path::new(&path), table)?;
        self.console.success(&format!("{} {}", texts.faqs_saved, path));
        Ok(())
    }

    // ========== WordPress ==========

    /// 输入 WordPress 设置并用测试草稿检查连接
    async fn connect_wordpress(&mut self) -> AppResult<()> {
        let texts = self.session.texts();
        if self.session.table().is_none() {
            self.console.warn(texts.no_faqs);
            return Ok(());
        }

        // 重新输入设置即撤销之前的验证
        self.session.gate_mut().revoke();
        self.console.show(texts.wp_settings);
        let Some(target) = self.ask_publish_target()? else {
            return Ok(());
        };

        let checked = WordPressService::new(&self.wordpress)
            .check_connection(&target)
            .await;
        let verified = matches!(&checked, Ok(outcome) if outcome.success);
        if verified {
            self.session.gate_mut().mark_verified(&target);
        }
        self.session.set_publish_target(target);

        let outcome = checked?;
        if verified {
            self.console.success(texts.check_wp_success);
        } else {
            self.console.error(&format!(
                "{} HTTP {}: {}",
                texts.check_wp_failure, outcome.status, outcome.body
            ));
        }
        Ok(())
    }

    fn ask_publish_target(&mut self) -> AppResult<Option<PublishTarget>> {
        let texts = self.session.texts();
        let Some(site_url) = self.console.ask(texts.wp_url_prompt)? else {
            return Ok(None);
        };
        let Some(username) = self.console.ask(texts.wp_user_prompt)? else {
            return Ok(None);
        };
        let Some(password) = self.console.ask_secret(texts.wp_password_prompt)? else {
            return Ok(None);
        };
        let Some(choice) = self
            .console
            .choose(texts.post_type_prompt, &PostType::CHOICES)?
        else {
            return Ok(None);
        };

        let post_type = match choice {
            0 => PostType::Posts,
            1 => PostType::Pages,
            _ => {
                let Some(rest_base) = self.console.ask(texts.custom_post_type_prompt)? else {
                    return Ok(None);
                };
                PostType::custom(&rest_base)?
            }
        };

        Ok(Some(PublishTarget::new(
            &site_url,
            &username,
            Secret::new(password),
            post_type,
        )?))
    }

    /// 唯一的发布入口
    async fn upload(&mut self) -> AppResult<()> {
        let texts = self.session.texts();
        let Some(table) = self.session.table() else {
            self.console.warn(texts.no_faqs);
            return Ok(());
        };
        let target = self
            .session
            .publish_target()
            .ok_or(WordPressError::NotVerified)?;
        self.session.gate().authorize(target, table.generation())?;

        let report = WordPressService::new(&self.wordpress)
            .publish(target, table)
            .await?;

        let target = target.clone();
        let generation = table.generation();
        self.session.gate_mut().mark_published(&target, generation);
        print_publish_stats(report.success_count, report.total, &target.site_url);

        for failure in &report.failures {
            let status = failure
                .status
                .map(|s| format!("HTTP {}", s))
                .unwrap_or_else(|| "-".to_string());
            self.console.error(&format!(
                "{} - {}: {}",
                failure.question, status, failure.detail
            ));
        }

        if report.is_success() {
            self.console.success(texts.upload_success);
        } else {
            self.console.error(&format!(
                "{} ({}/{})",
                texts.upload_failure, report.success_count, report.total
            ));
        }
        Ok(())
    }
}

/// 把生成失败描述成一行提示
fn describe_failure(failure: &GenerationFailure) -> String {
    match failure {
        GenerationFailure::Questions { topic, error } => format!("{}: {}", topic, error),
        GenerationFailure::Answer {
            topic,
            question,
            error,
        } => format!("{} / {}: {}", topic, question, error),
    }
}

/// 把错误翻译成当前语言的提示；没有固定文案的错误原样显示
pub fn user_message(texts: &LocaleTexts, err: &AppError) -> String {
    match err {
        AppError::Input(InputError::MissingCredential | InputError::MissingTopics) => {
            texts.error_message.to_string()
        }
        AppError::Input(InputError::TierLimitExceeded { ceiling, .. }) => {
            texts.limit_message(*ceiling)
        }
        AppError::Input(InputError::CountOutOfRange { min, max, .. }) => {
            texts.range_message(*min, *max)
        }
        AppError::Input(InputError::MissingPublishTarget) => texts.wp_missing_fields.to_string(),
        AppError::Input(InputError::EmptyTable) => texts.no_faqs.to_string(),
        AppError::WordPress(WordPressError::NotVerified) => texts.not_verified.to_string(),
        AppError::WordPress(WordPressError::AlreadyPublished { .. }) => {
            texts.already_published.to_string()
        }
        other => other.to_string(),
    }
}
