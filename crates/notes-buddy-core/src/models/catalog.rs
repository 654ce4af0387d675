//! Compiled-in sample catalogs.
//!
//! Each catalog is a TOML file under `assets/data/` embedded with
//! `include_str!` and parsed once at startup by [`Catalog::load`].

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::CatalogError;

const RESOURCES_TOML: &str = include_str!("../../assets/data/resources.toml");
const VIDEOS_TOML: &str = include_str!("../../assets/data/videos.toml");
const PROBLEMS_TOML: &str = include_str!("../../assets/data/problems.toml");
const TEST_RESULTS_TOML: &str = include_str!("../../assets/data/test_results.toml");
const PROFILE_TOML: &str = include_str!("../../assets/data/profile.toml");

/// Filter value that disables a select filter.
pub const ALL: &str = "all";

/// Toast text for the coding practice "Run" button.
pub const RUN_MESSAGE: &str =
    "Code executed! In a real implementation, this would run your code against test cases.";
/// Toast text for the coding practice "Submit" button.
pub const SUBMIT_MESSAGE: &str =
    "Code submitted! In a real implementation, this would evaluate your solution.";

// =============================================================================
// Records
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Pdf,
    Video,
    Article,
    Website,
    Book,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Pdf => "pdf",
            ResourceKind::Video => "video",
            ResourceKind::Article => "article",
            ResourceKind::Website => "website",
            ResourceKind::Book => "book",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub title: String,
    pub kind: ResourceKind,
    pub subject: String,
    pub description: String,
    pub url: String,
    pub rating: f32,
    pub level: Level,
    pub tags: Vec<String>,
}

impl Resource {
    /// True for real links; `#` placeholders have nowhere to go.
    pub fn is_external(&self) -> bool {
        self.url.starts_with("http")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Video {
    pub id: u32,
    pub title: String,
    pub instructor: String,
    pub duration: String,
    pub rating: f32,
    pub views: String,
    pub subject: String,
    pub level: Level,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum ProblemDifficulty {
    Easy,
    Medium,
    Hard,
}

impl ProblemDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemDifficulty::Easy => "Easy",
            ProblemDifficulty::Medium => "Medium",
            ProblemDifficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProblemExample {
    pub input: String,
    pub output: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Problem {
    pub id: u32,
    pub title: String,
    pub difficulty: ProblemDifficulty,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub examples: Vec<ProblemExample>,
    pub constraints: Vec<String>,
    pub acceptance_rate: f32,
    pub solved_by: u32,
}

impl Problem {
    /// e.g. `1250K solved`
    pub fn solved_label(&self) -> String {
        format!("{:.0}K solved", self.solved_by as f64 / 1000.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Language {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TestResult {
    pub id: u32,
    pub test_name: String,
    pub subject: String,
    /// Percentage, 0..=100.
    pub score: u32,
    pub total_questions: u32,
    pub time_spent: String,
    pub date: String,
    pub difficulty: String,
}

impl TestResult {
    /// Correct answers implied by the score, rounded to nearest.
    pub fn correct_answers(&self) -> u32 {
        (self.score as f64 / 100.0 * self.total_questions as f64).round() as u32
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Coarse grade used to color a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => ScoreBand::Excellent,
            80..=89 => ScoreBand::Good,
            70..=79 => ScoreBand::Fair,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::NeedsWork => "needs-work",
        }
    }
}

/// Aggregate over all test results.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultStats {
    pub average: f64,
    pub best: u32,
    pub count: usize,
}

impl ResultStats {
    /// Zeroes for an empty slice.
    pub fn from_results(results: &[TestResult]) -> Self {
        let count = results.len();
        let best = results.iter().map(|r| r.score).max().unwrap_or(0);
        let average = if count == 0 {
            0.0
        } else {
            results.iter().map(|r| r.score as f64).sum::<f64>() / count as f64
        };
        Self {
            average,
            best,
            count,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProfileStat {
    /// Icon key: `chat`, `roadmap`, `summary` or `clock`.
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Activity {
    pub action: String,
    pub subject: String,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub streak_days: u32,
    pub goal: String,
    pub goal_percent: u32,
    pub stats: Vec<ProfileStat>,
    pub activity: Vec<Activity>,
}

// =============================================================================
// Filters
// =============================================================================

/// Search and select state of the resources page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceFilter {
    pub search: String,
    pub subject: String,
    pub kind: String,
}

impl Default for ResourceFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            subject: ALL.to_string(),
            kind: ALL.to_string(),
        }
    }
}

impl ResourceFilter {
    pub fn matches(&self, resource: &Resource) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = contains(&resource.title, &needle)
            || contains(&resource.description, &needle)
            || resource.tags.iter().any(|t| contains(t, &needle));
        matches_search
            && select_matches(&self.subject, &resource.subject)
            && select_matches(&self.kind, resource.kind.as_str())
    }

    pub fn apply<'a>(&self, resources: &'a [Resource]) -> Vec<&'a Resource> {
        resources.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Search and select state of the video library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoFilter {
    pub search: String,
    pub subject: String,
    pub level: String,
}

impl Default for VideoFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            subject: ALL.to_string(),
            level: ALL.to_string(),
        }
    }
}

impl VideoFilter {
    pub fn matches(&self, video: &Video) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = contains(&video.title, &needle)
            || contains(&video.instructor, &needle)
            || video.tags.iter().any(|t| contains(t, &needle));
        matches_search
            && select_matches(&self.subject, &video.subject)
            && select_matches(&self.level, video.level.as_str())
    }

    pub fn apply<'a>(&self, videos: &'a [Video]) -> Vec<&'a Video> {
        videos.iter().filter(|v| self.matches(v)).collect()
    }
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

fn select_matches(selected: &str, value: &str) -> bool {
    selected == ALL || selected == value
}

// =============================================================================
// Loading
// =============================================================================

#[derive(Deserialize)]
struct ResourcesFile {
    subjects: Vec<String>,
    kinds: Vec<String>,
    resources: Vec<Resource>,
}

#[derive(Deserialize)]
struct VideosFile {
    subjects: Vec<String>,
    levels: Vec<String>,
    videos: Vec<Video>,
}

#[derive(Deserialize)]
struct ProblemsFile {
    starter_code: String,
    languages: Vec<Language>,
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct ResultsFile {
    results: Vec<TestResult>,
}

/// All sample data shown by the catalog pages.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    pub resources: Vec<Resource>,
    pub resource_subjects: Vec<String>,
    pub resource_kinds: Vec<String>,
    pub videos: Vec<Video>,
    pub video_subjects: Vec<String>,
    pub video_levels: Vec<String>,
    pub problems: Vec<Problem>,
    pub languages: Vec<Language>,
    pub starter_code: String,
    pub results: Vec<TestResult>,
    pub profile: Profile,
}

impl Catalog {
    /// Parse every embedded catalog.
    pub fn load() -> Result<Self, CatalogError> {
        let resources: ResourcesFile = parse("resources", RESOURCES_TOML)?;
        let videos: VideosFile = parse("videos", VIDEOS_TOML)?;
        let problems: ProblemsFile = parse("problems", PROBLEMS_TOML)?;
        let results: ResultsFile = parse("test_results", TEST_RESULTS_TOML)?;
        let profile: Profile = parse("profile", PROFILE_TOML)?;

        Ok(Self {
            resources: resources.resources,
            resource_subjects: resources.subjects,
            resource_kinds: resources.kinds,
            videos: videos.videos,
            video_subjects: videos.subjects,
            video_levels: videos.levels,
            problems: problems.problems,
            languages: problems.languages,
            starter_code: problems.starter_code,
            results: results.results,
            profile,
        })
    }

    pub fn problem(&self, id: u32) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    pub fn result_stats(&self) -> ResultStats {
        ResultStats::from_results(&self.results)
    }
}

fn parse<T: DeserializeOwned>(name: &'static str, source: &str) -> Result<T, CatalogError> {
    toml::from_str(source).map_err(|e| CatalogError::Parse {
        name,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    #[test]
    fn test_embedded_catalogs_parse() {
        let catalog = catalog();
        assert_eq!(catalog.resources.len(), 5);
        assert_eq!(catalog.videos.len(), 6);
        assert_eq!(catalog.problems.len(), 4);
        assert_eq!(catalog.results.len(), 3);
        assert_eq!(catalog.profile.stats.len(), 4);
        assert!(catalog.starter_code.starts_with("// Write your solution here"));
        assert_eq!(catalog.resource_subjects[0], ALL);
    }

    #[test]
    fn test_resource_search_is_case_insensitive() {
        let catalog = catalog();
        let filter = ResourceFilter {
            search: "CALCULUS".into(),
            ..ResourceFilter::default()
        };
        let hits = filter.apply(&catalog.resources);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Advanced Mathematics Textbook");
    }

    #[test]
    fn test_resource_filters_combine() {
        let catalog = catalog();
        assert_eq!(ResourceFilter::default().apply(&catalog.resources).len(), 5);

        let by_kind = ResourceFilter {
            kind: "website".into(),
            ..ResourceFilter::default()
        };
        assert_eq!(by_kind.apply(&catalog.resources).len(), 1);

        let none = ResourceFilter {
            subject: "History".into(),
            kind: "book".into(),
            ..ResourceFilter::default()
        };
        assert!(none.apply(&catalog.resources).is_empty());
    }

    #[test]
    fn test_video_search_matches_instructor_and_tags() {
        let catalog = catalog();
        let by_instructor = VideoFilter {
            search: "lisa park".into(),
            ..VideoFilter::default()
        };
        assert_eq!(by_instructor.apply(&catalog.videos).len(), 1);

        let by_tag = VideoFilter {
            search: "algorithms".into(),
            level: "Beginner".into(),
            ..VideoFilter::default()
        };
        let hits = by_tag.apply(&catalog.videos);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].instructor, "Alex Rodriguez");

        let advanced = VideoFilter {
            level: "Advanced".into(),
            ..VideoFilter::default()
        };
        assert_eq!(advanced.apply(&catalog.videos).len(), 2);
    }

    #[test]
    fn test_result_stats() {
        let stats = catalog().result_stats();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.best, 92);
        assert!((stats.average - 85.0).abs() < 1e-9);
        assert_eq!(ResultStats::from_results(&[]).average, 0.0);
    }

    #[test]
    fn test_correct_answers_and_bands() {
        let catalog = catalog();
        // 85% of 20, 92% of 15 = 13.8, 78% of 25 = 19.5
        let correct: Vec<_> = catalog.results.iter().map(|r| r.correct_answers()).collect();
        assert_eq!(correct, vec![17, 14, 20]);

        assert_eq!(ScoreBand::from_score(90), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(89), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(70), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(69), ScoreBand::NeedsWork);
    }

    #[test]
    fn test_problem_lookup() {
        let catalog = catalog();
        let problem = catalog.problem(4).unwrap();
        assert_eq!(problem.title, "Valid Parentheses");
        assert_eq!(problem.examples.len(), 3);
        assert_eq!(problem.solved_label(), "890K solved");
        assert!(catalog.problem(2).unwrap().examples[0].explanation.is_none());
        assert!(catalog.problem(99).is_none());
    }
}
