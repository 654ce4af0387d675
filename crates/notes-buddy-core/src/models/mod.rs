//! Page view-models and sample data.
//!
//! - [`chat`] - Chat transcript
//! - [`roadmap`] - Study roadmap with step completion
//! - [`summarize`] - Summarizer form state
//! - [`test_gen`] - Test generator configuration and questions
//! - [`study_plan`] - Daily study tasks
//! - [`catalog`] - Resources, videos, problems, results and profile data

pub mod catalog;
pub mod chat;
pub mod roadmap;
pub mod study_plan;
pub mod summarize;
pub mod test_gen;

pub use catalog::Catalog;
pub use chat::{Message, Sender, Transcript};
pub use roadmap::{Roadmap, RoadmapStep};
pub use study_plan::{Priority, StudyPlan, StudyTask};
pub use summarize::SummarizeForm;
pub use test_gen::{Difficulty, Question, QuestionKind, TestConfig, TestRequest, TestType};
