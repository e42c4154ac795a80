pub mod faq;
pub mod publish;
pub mod request;

pub use faq::{FaqRow, FaqTable, Topic};
pub use publish::{PostType, PublishTarget};
pub use request::{GenerationRequest, ModelChoice, Secret};
