//! Hash-based routing.
//!
//! URL format: `#/path`. Trailing slashes and query strings are ignored when
//! parsing, so `#/chat/` and `#/chat?x=1` both resolve to [`AppRoute::Chat`].
//! Reading and writing the browser location is the application's job.

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Chat,
    Roadmap,
    Summarize,
    TestGenerator,
    TestResults,
    Resources,
    StudyPlan,
    Pomodoro,
    EduTube,
    CodingPractice,
    Profile,
    Auth,
    /// Unknown path, kept for display.
    NotFound(String),
}

impl AppRoute {
    /// Parse a location hash (`#/chat`, `#chat`, `` ...).
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_matches('/');

        match path {
            "" => Self::Home,
            "chat" => Self::Chat,
            "roadmap" => Self::Roadmap,
            "summarize" => Self::Summarize,
            "test-generator" => Self::TestGenerator,
            "test-results" => Self::TestResults,
            "resources" => Self::Resources,
            "study-plan" => Self::StudyPlan,
            "pomodoro" => Self::Pomodoro,
            "edutube" => Self::EduTube,
            "coding-practice" => Self::CodingPractice,
            "profile" => Self::Profile,
            "auth" => Self::Auth,
            other => Self::NotFound(format!("/{}", other)),
        }
    }

    /// Path without the leading `#`, e.g. `/chat`.
    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::Chat => "/chat",
            Self::Roadmap => "/roadmap",
            Self::Summarize => "/summarize",
            Self::TestGenerator => "/test-generator",
            Self::TestResults => "/test-results",
            Self::Resources => "/resources",
            Self::StudyPlan => "/study-plan",
            Self::Pomodoro => "/pomodoro",
            Self::EduTube => "/edutube",
            Self::CodingPractice => "/coding-practice",
            Self::Profile => "/profile",
            Self::Auth => "/auth",
            Self::NotFound(path) => path,
        }
    }

    pub fn to_hash(&self) -> String {
        format!("#{}", self.path())
    }

    /// Whether the page renders inside the navbar layout. Only auth does not.
    pub fn uses_chrome(&self) -> bool {
        !matches!(self, Self::Auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/chat"), AppRoute::Chat);
        assert_eq!(AppRoute::from_hash("#/test-generator"), AppRoute::TestGenerator);
        assert_eq!(AppRoute::from_hash("#/edutube"), AppRoute::EduTube);
    }

    #[test]
    fn test_trailing_slash_and_query_ignored() {
        assert_eq!(AppRoute::from_hash("#/pomodoro/"), AppRoute::Pomodoro);
        assert_eq!(AppRoute::from_hash("#/auth?next=chat"), AppRoute::Auth);
        assert_eq!(AppRoute::from_hash("#/?q=1"), AppRoute::Home);
    }

    #[test]
    fn test_unknown_routes() {
        assert_eq!(
            AppRoute::from_hash("#/nope/deeper"),
            AppRoute::NotFound("/nope/deeper".to_string())
        );
        assert_eq!(AppRoute::from_hash("#/nope").to_hash(), "#/nope");
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Home.to_hash(), "#/");
        assert_eq!(AppRoute::StudyPlan.to_hash(), "#/study-plan");
        assert_eq!(
            AppRoute::from_hash(&AppRoute::CodingPractice.to_hash()),
            AppRoute::CodingPractice
        );
    }

    #[test]
    fn test_only_auth_hides_chrome() {
        assert!(!AppRoute::Auth.uses_chrome());
        assert!(AppRoute::Home.uses_chrome());
        assert!(AppRoute::NotFound("/x".into()).uses_chrome());
    }
}
