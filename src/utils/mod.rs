//! Browser glue for the application.
//!
//! Provides:
//! - [`dom`] - Window, document, clipboard and download helpers
//! - [`LocalStore`] - localStorage-backed [`KeyValueStore`](notes_buddy_core::KeyValueStore)
//! - [`BrowserDelay`] - Timer-backed latency for the simulated generator
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`BrowserError`] - Failures of browser API calls

pub mod dom;
mod error;
mod markdown;
mod storage;
mod timer;

pub use error::BrowserError;
pub use markdown::markdown_to_html;
pub use storage::LocalStore;
pub use timer::BrowserDelay;
