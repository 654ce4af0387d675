//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`navbar`] - Top navigation with theme toggle and sign out
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`toast`] - Transient notifications
//! - [`file_upload`] - Upload control feeding the file registry
//! - [`progress`] - Progress bar

pub mod file_upload;
pub mod icons;
pub mod navbar;
pub mod progress;
pub mod router;
pub mod toast;

pub use router::AppRouter;
