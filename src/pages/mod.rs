//! One component per route.

mod auth;
mod chat;
mod coding_practice;
mod edutube;
mod home;
mod not_found;
mod pomodoro;
mod profile;
mod resources;
mod roadmap;
mod study_plan;
mod summarize;
mod test_generator;
mod test_results;

pub use auth::Auth;
pub use chat::Chat;
pub use coding_practice::CodingPractice;
pub use edutube::EduTube;
pub use home::Home;
pub use not_found::NotFound;
pub use pomodoro::Pomodoro;
pub use profile::ProfilePage;
pub use resources::Resources;
pub use roadmap::RoadmapPage;
pub use study_plan::StudyPlanPage;
pub use summarize::Summarize;
pub use test_generator::TestGenerator;
pub use test_results::TestResults;
