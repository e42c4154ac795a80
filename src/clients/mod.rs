pub mod llm_client;
pub mod wordpress_client;

pub use llm_client::{ChatBackend, ChatRequest, OpenAiChat};
pub use wordpress_client::{NewPost, WordPressApi, WordPressClient, WpResponse};
