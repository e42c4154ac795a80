pub mod answer_service;
pub mod csv_io;
pub mod question_service;
pub mod wordpress_service;

pub use answer_service::{markdown_to_html, AnswerService};
pub use question_service::{split_questions, QuestionService};
pub use wordpress_service::{ProbeOutcome, PublishReport, RowFailure, WordPressService};
