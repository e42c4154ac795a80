//! 单元测试共用的假实现

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::clients::{ChatBackend, ChatRequest, NewPost, WordPressApi, WpResponse};
use crate::error::{AppError, AppResult};
use crate::models::Secret;
use crate::ui::Console;

type Responder = Box<dyn Fn(&ChatRequest) -> Option<String> + Send + Sync>;

/// 按请求内容返回结果的假 LLM，返回 None 表示调用失败
pub struct ScriptedChat {
    responder: Responder,
    pub seen: Mutex<Vec<ChatRequest>>,
}

impl ScriptedChat {
    pub fn new(responder: impl Fn(&ChatRequest) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            responder: Box::new(responder),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::new(move |_| Some(text.clone()))
    }

    pub fn failing() -> Self {
        Self::new(|_| None)
    }

    pub fn call_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatBackend for ScriptedChat {
    async fn complete(&self, _credential: &Secret, request: &ChatRequest) -> AppResult<String> {
        self.seen.lock().unwrap().push(request.clone());
        match (self.responder)(request) {
            Some(text) => Ok(text.trim().to_string()),
            None => Err(AppError::llm_api_failed(
                &request.model,
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
            )),
        }
    }
}

/// 一次记录下来的 WordPress 调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPost {
    pub endpoint: String,
    pub username: String,
    pub title: String,
    pub content: String,
    pub status: String,
}

/// 依次返回预设状态码的假 WordPress，预设用完后返回 201
pub struct ScriptedWordPress {
    replies: Mutex<VecDeque<Option<(u16, String)>>>,
    pub posts: Mutex<Vec<RecordedPost>>,
}

impl ScriptedWordPress {
    /// `None` 表示网络错误（没有状态码）
    pub fn new(replies: Vec<Option<(u16, &str)>>) -> Self {
        Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(|(status, body)| (status, body.to_string())))
                    .collect(),
            ),
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn always_created() -> Self {
        Self::new(Vec::new())
    }

    pub fn recorded(&self) -> Vec<RecordedPost> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl WordPressApi for ScriptedWordPress {
    async fn create_post(
        &self,
        endpoint: &str,
        username: &str,
        _password: &Secret,
        post: &NewPost<'_>,
    ) -> AppResult<WpResponse> {
        self.posts.lock().unwrap().push(RecordedPost {
            endpoint: endpoint.to_string(),
            username: username.to_string(),
            title: post.title.to_string(),
            content: post.content.to_string(),
            status: post.status.to_string(),
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Some((201, r#"{"id":1}"#.to_string())));

        match reply {
            Some((status, body)) => Ok(WpResponse { status, body }),
            None => Err(AppError::wordpress_request_failed(
                endpoint,
                std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out"),
            )),
        }
    }
}

/// 控制台输出的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shown {
    Info,
    Success,
    Warn,
    Error,
}

/// 按预设输入应答的控制台，输入用完视为输入结束
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub output: Vec<(Shown, String)>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn errors(&self) -> Vec<&str> {
        self.output
            .iter()
            .filter(|(kind, _)| *kind == Shown::Error)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.output
            .iter()
            .filter(|(kind, _)| *kind == Shown::Success)
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, text: &str) {
        self.output.push((Shown::Info, text.to_string()));
    }

    fn success(&mut self, text: &str) {
        self.output.push((Shown::Success, text.to_string()));
    }

    fn warn(&mut self, text: &str) {
        self.output.push((Shown::Warn, text.to_string()));
    }

    fn error(&mut self, text: &str) {
        self.output.push((Shown::Error, text.to_string()));
    }

    fn ask(&mut self, _label: &str) -> AppResult<Option<String>> {
        Ok(self.inputs.pop_front())
    }
}
