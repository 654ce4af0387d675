//! Platform-independent domain logic for Notes Buddy.
//!
//! This crate contains everything that does not need a browser:
//! - [`pomodoro`] - Work/break countdown state machine
//! - [`files`] - Uploaded-file registry with soft-miss lookups
//! - [`theme`] - Light/dark theme store over a [`storage::KeyValueStore`]
//! - [`generate`] - Pluggable content generation with a simulated backend
//! - [`validation`] - Auth form validation
//! - [`route`] - Hash route parsing
//! - [`models`] - Page view-models and sample catalogs

pub mod config;
pub mod error;
pub mod files;
pub mod generate;
pub mod models;
pub mod pomodoro;
pub mod route;
pub mod storage;
pub mod theme;
pub mod validation;

pub use files::{FileRegistry, UploadedFile};
pub use generate::{ContentGenerator, Delay, GeneratedTest, SimulatedGenerator};
pub use pomodoro::{PomodoroSession, TickOutcome, TimerMode, TimerSettings};
pub use route::AppRoute;
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::{Theme, ThemeStore};
pub use validation::{Field, FieldErrors, LoginForm, RegisterForm};
