pub mod locale;
pub mod texts;

pub use locale::Locale;
pub use texts::{answer_prompt, question_prompt, texts, LocaleTexts};
