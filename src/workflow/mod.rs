pub mod faq_flow;
pub mod session;
pub mod topic_ctx;

pub use faq_flow::{FaqFlow, FlowEvent, FlowParams, GenerationFailure, GenerationReport};
pub use session::{validate_count, PublishGate, Session};
pub use topic_ctx::TopicCtx;
