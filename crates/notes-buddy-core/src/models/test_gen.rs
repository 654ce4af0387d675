//! Test generator configuration and generated questions.
//!
//! The config card binds plain `<select>` values; [`TestConfig::validate`]
//! turns them into a [`TestRequest`] once every field is chosen.

use crate::error::ConfigError;

/// Allowed question counts.
pub const QUESTION_COUNTS: &[u32] = &[5, 10, 15, 20];

/// Which question kinds a test contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestType {
    Mixed,
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

impl TestType {
    pub const ALL: [TestType; 4] = [
        TestType::Mixed,
        TestType::MultipleChoice,
        TestType::TrueFalse,
        TestType::ShortAnswer,
    ];

    /// Form value, e.g. `multiple-choice`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Mixed => "mixed",
            TestType::MultipleChoice => "multiple-choice",
            TestType::TrueFalse => "true-false",
            TestType::ShortAnswer => "short-answer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TestType::Mixed => "Mixed Questions",
            TestType::MultipleChoice => "Multiple Choice",
            TestType::TrueFalse => "True/False",
            TestType::ShortAnswer => "Short Answer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Kind of the question at `index`. Mixed tests cycle through all kinds.
    pub fn kind_at(&self, index: u32) -> QuestionKind {
        match self {
            TestType::MultipleChoice => QuestionKind::MultipleChoice,
            TestType::TrueFalse => QuestionKind::TrueFalse,
            TestType::ShortAnswer => QuestionKind::ShortAnswer,
            TestType::Mixed => match index % 3 {
                0 => QuestionKind::MultipleChoice,
                1 => QuestionKind::TrueFalse,
                _ => QuestionKind::ShortAnswer,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

/// Kind of a single generated question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "Multiple Choice",
            QuestionKind::TrueFalse => "True/False",
            QuestionKind::ShortAnswer => "Short Answer",
        }
    }
}

/// A generated question. `options` is empty for short answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// A complete, validated generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestRequest {
    pub file_name: String,
    pub test_type: TestType,
    pub count: u32,
    pub difficulty: Difficulty,
}

/// Raw form state of the configuration card. Empty strings mean "unselected".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestConfig {
    pub file_name: String,
    pub test_type: String,
    pub count: String,
    pub difficulty: String,
}

impl TestConfig {
    /// Check every field is selected and holds a known value.
    ///
    /// Fields are checked in form order: file, type, count, difficulty.
    pub fn validate(&self) -> Result<TestRequest, ConfigError> {
        let file_name = required("file", &self.file_name)?;
        let test_type = required("test type", &self.test_type)?;
        let count = required("question count", &self.count)?;
        let difficulty = required("difficulty", &self.difficulty)?;

        let test_type = TestType::parse(test_type).ok_or_else(|| ConfigError::Invalid {
            field: "test type",
            value: test_type.to_string(),
        })?;
        let count = count
            .parse::<u32>()
            .ok()
            .filter(|n| QUESTION_COUNTS.contains(n))
            .ok_or_else(|| ConfigError::Invalid {
                field: "question count",
                value: count.to_string(),
            })?;
        let difficulty = Difficulty::parse(difficulty).ok_or_else(|| ConfigError::Invalid {
            field: "difficulty",
            value: difficulty.to_string(),
        })?;

        Ok(TestRequest {
            file_name: file_name.to_string(),
            test_type,
            count,
            difficulty,
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ConfigError::Missing(field))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> TestConfig {
        TestConfig {
            file_name: "bio.pdf".into(),
            test_type: "mixed".into(),
            count: "10".into(),
            difficulty: "hard".into(),
        }
    }

    #[test]
    fn test_validate_complete() {
        let request = complete().validate().unwrap();
        assert_eq!(request.file_name, "bio.pdf");
        assert_eq!(request.test_type, TestType::Mixed);
        assert_eq!(request.count, 10);
        assert_eq!(request.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_validate_reports_first_missing() {
        assert_eq!(
            TestConfig::default().validate(),
            Err(ConfigError::Missing("file"))
        );
        let config = TestConfig {
            count: String::new(),
            ..complete()
        };
        assert_eq!(config.validate(), Err(ConfigError::Missing("question count")));
    }

    #[test]
    fn test_validate_rejects_unknown_values() {
        let config = TestConfig {
            count: "7".into(),
            ..complete()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "question count", .. })
        ));
    }

    #[test]
    fn test_kind_at_cycles_for_mixed() {
        let kinds: Vec<_> = (0..4).map(|i| TestType::Mixed.kind_at(i)).collect();
        assert_eq!(
            kinds,
            vec![
                QuestionKind::MultipleChoice,
                QuestionKind::TrueFalse,
                QuestionKind::ShortAnswer,
                QuestionKind::MultipleChoice,
            ]
        );
        assert_eq!(TestType::ShortAnswer.kind_at(0), QuestionKind::ShortAnswer);
    }

    #[test]
    fn test_parse_form_values() {
        assert_eq!(TestType::parse("true-false"), Some(TestType::TrueFalse));
        assert_eq!(TestType::parse("essay"), None);
        assert_eq!(Difficulty::parse("easy"), Some(Difficulty::Easy));
    }
}
