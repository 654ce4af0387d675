//! Content generation boundary.
//!
//! Views talk to a [`ContentGenerator`] instead of scheduling fake replies
//! themselves. [`SimulatedGenerator`] is the only backend today: it waits a
//! fixed latency through its [`Delay`] and returns canned content.

use std::future::Future;

use crate::config::latency;
use crate::error::GenerateError;
use crate::models::roadmap::RoadmapStep;
use crate::models::test_gen::{Question, QuestionKind, TestRequest};

/// Asynchronous wait used to simulate backend latency.
pub trait Delay {
    fn wait(&self, ms: u32) -> impl Future<Output = ()>;
}

/// Delay that resolves immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&self, _ms: u32) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}

/// A generated test together with the request that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedTest {
    pub request: TestRequest,
    pub questions: Vec<Question>,
}

impl GeneratedTest {
    /// Notification text shown once the test is ready.
    pub fn summary_line(&self) -> String {
        format!(
            "Created {} questions from {}",
            self.questions.len(),
            self.request.file_name
        )
    }
}

/// Source of AI-style study content.
pub trait ContentGenerator {
    /// Answer a chat question.
    fn chat_reply(&self, prompt: &str) -> impl Future<Output = Result<String, GenerateError>>;

    /// Break a chapter or topic into study steps.
    fn roadmap(&self, topic: &str)
    -> impl Future<Output = Result<Vec<RoadmapStep>, GenerateError>>;

    /// Summarize text. The result is markdown.
    fn summarize(&self, text: &str) -> impl Future<Output = Result<String, GenerateError>>;

    /// Build a test from an uploaded file.
    fn generate_test(
        &self,
        request: &TestRequest,
    ) -> impl Future<Output = Result<GeneratedTest, GenerateError>>;
}

/// Canned-response generator with fixed latency.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedGenerator<D> {
    delay: D,
}

impl<D: Delay> SimulatedGenerator<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }
}

impl<D: Delay> ContentGenerator for SimulatedGenerator<D> {
    async fn chat_reply(&self, prompt: &str) -> Result<String, GenerateError> {
        let prompt = non_empty(prompt)?;
        self.delay.wait(latency::CHAT_REPLY).await;
        Ok(format!(
            "I understand your question: \"{}\". Based on the uploaded materials, here's what \
             I can help you with. This is a simulated response - a connected backend would \
             answer from your documents.",
            prompt
        ))
    }

    async fn roadmap(&self, topic: &str) -> Result<Vec<RoadmapStep>, GenerateError> {
        non_empty(topic)?;
        self.delay.wait(latency::ROADMAP).await;
        Ok(ROADMAP_TEMPLATE
            .iter()
            .enumerate()
            .map(|(i, (title, description, minutes))| {
                RoadmapStep::new(i as u32 + 1, *title, *description, *minutes)
            })
            .collect())
    }

    async fn summarize(&self, text: &str) -> Result<String, GenerateError> {
        non_empty(text)?;
        self.delay.wait(latency::SUMMARY).await;
        Ok(canned_summary(text))
    }

    async fn generate_test(&self, request: &TestRequest) -> Result<GeneratedTest, GenerateError> {
        non_empty(&request.file_name)?;
        self.delay.wait(latency::TEST).await;
        let questions = (0..request.count)
            .map(|i| sample_question(request.test_type.kind_at(i), i as usize))
            .collect();
        Ok(GeneratedTest {
            request: request.clone(),
            questions,
        })
    }
}

const ROADMAP_TEMPLATE: &[(&str, &str, u32)] = &[
    (
        "Read Chapter Overview",
        "Get familiar with the main concepts and learning objectives of the chapter.",
        15,
    ),
    (
        "Identify Key Terms",
        "Make a list of important vocabulary and definitions from the chapter.",
        20,
    ),
    (
        "Study Core Concepts",
        "Deep dive into the main theories and principles explained in the chapter.",
        45,
    ),
    (
        "Work Through Examples",
        "Practice with examples and case studies provided in the material.",
        30,
    ),
    (
        "Create Summary Notes",
        "Write concise notes summarizing the key points and formulas.",
        25,
    ),
    (
        "Self-Assessment Quiz",
        "Test your understanding with practice questions or review exercises.",
        20,
    ),
];

fn non_empty(input: &str) -> Result<&str, GenerateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(GenerateError::EmptyInput)
    } else {
        Ok(trimmed)
    }
}

fn canned_summary(text: &str) -> String {
    let lead = text.split(' ').take(5).collect::<Vec<_>>().join(" ");
    let original_len = text.chars().count();
    let reduced_len = (original_len as f64 * 0.3).floor() as usize;

    format!(
        "Here's a concise summary of your text:\n\n\
         **Key Points:**\n\n\
         - {lead}... represents the main concept\n\
         - Important themes and ideas have been identified and condensed\n\
         - Critical information has been preserved while removing redundant details\n\
         - The core message remains intact in this shortened format\n\n\
         **Summary Length:** {reduced_len} characters (reduced from {original_len} characters)\n\n\
         This summary captures the essential information while making it easier to review \
         and understand."
    )
}

fn sample_question(kind: QuestionKind, index: usize) -> Question {
    let number = index + 1;
    match kind {
        QuestionKind::MultipleChoice => Question {
            kind,
            prompt: format!(
                "What is the main concept discussed in section {} of the uploaded material?",
                number
            ),
            options: ["Option A", "Option B", "Option C", "Option D"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            answer: "Option A".to_string(),
        },
        QuestionKind::TrueFalse => Question {
            kind,
            prompt: format!(
                "Section {} of the material covers advanced topics in the subject area.",
                number
            ),
            options: vec!["True".to_string(), "False".to_string()],
            answer: "True".to_string(),
        },
        QuestionKind::ShortAnswer => Question {
            kind,
            prompt: format!("Explain the key principle mentioned in chapter {}.", number),
            options: Vec::new(),
            answer: "Sample answer based on the content".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_gen::{Difficulty, TestType};

    fn generator() -> SimulatedGenerator<NoDelay> {
        SimulatedGenerator::new(NoDelay)
    }

    #[tokio::test]
    async fn test_chat_reply_quotes_prompt() {
        let reply = generator().chat_reply("  What is osmosis? ").await.unwrap();
        assert!(reply.contains("\"What is osmosis?\""));
    }

    #[tokio::test]
    async fn test_empty_input_rejected() {
        let g = generator();
        assert_eq!(g.chat_reply("   ").await, Err(GenerateError::EmptyInput));
        assert_eq!(g.summarize("").await, Err(GenerateError::EmptyInput));
        assert!(matches!(g.roadmap("\n").await, Err(GenerateError::EmptyInput)));
    }

    #[tokio::test]
    async fn test_roadmap_has_six_ordered_steps() {
        let steps = generator().roadmap("Photosynthesis").await.unwrap();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0].title, "Read Chapter Overview");
        assert_eq!(steps[5].title, "Self-Assessment Quiz");
        assert!(steps.iter().all(|s| !s.completed));
        let total: u32 = steps.iter().map(|s| s.minutes).sum();
        assert_eq!(total, 155);
    }

    #[tokio::test]
    async fn test_summary_reports_lengths() {
        let text = "The mitochondria is the powerhouse of the cell";
        let summary = generator().summarize(text).await.unwrap();
        assert!(summary.contains("The mitochondria is the powerhouse..."));
        // 46 chars * 0.3 = 13.8
        assert!(summary.contains("13 characters (reduced from 46 characters)"));
    }

    #[tokio::test]
    async fn test_generate_test_honors_count_and_type() {
        let request = TestRequest {
            file_name: "bio.pdf".to_string(),
            test_type: TestType::Mixed,
            count: 5,
            difficulty: Difficulty::Medium,
        };
        let test = generator().generate_test(&request).await.unwrap();
        assert_eq!(test.questions.len(), 5);
        assert_eq!(test.questions[0].kind, QuestionKind::MultipleChoice);
        assert_eq!(test.questions[1].kind, QuestionKind::TrueFalse);
        assert_eq!(test.questions[2].kind, QuestionKind::ShortAnswer);
        assert_eq!(test.questions[3].options.len(), 4);
        assert_eq!(test.summary_line(), "Created 5 questions from bio.pdf");

        let tf = TestRequest {
            test_type: TestType::TrueFalse,
            ..request
        };
        let test = generator().generate_test(&tf).await.unwrap();
        assert!(test.questions.iter().all(|q| q.kind == QuestionKind::TrueFalse));
    }
}
