//! Application configuration.
//!
//! UI-level constants. Domain defaults (pomodoro durations, latencies,
//! accepted uploads) live in `notes_buddy_core::config`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand name shown in the navbar and on the auth page.
pub const APP_NAME: &str = "AI Notes Buddy";

// =============================================================================
// Navigation
// =============================================================================

/// Navbar entries as `(label, hash)`.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "#/"),
    ("Chat", "#/chat"),
    ("Roadmap", "#/roadmap"),
    ("Summarize", "#/summarize"),
    ("Test Generator", "#/test-generator"),
    ("Test Results", "#/test-results"),
    ("Resources", "#/resources"),
    ("Study Plan", "#/study-plan"),
    ("Pomodoro Timer", "#/pomodoro"),
    ("EduTube", "#/edutube"),
    ("Coding Practice", "#/coding-practice"),
    ("Profile", "#/profile"),
];

/// Media query below which the navbar collapses into a menu.
pub const MOBILE_QUERY: &str = "(max-width: 768px)";

// =============================================================================
// Notifications
// =============================================================================

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 3000;

// =============================================================================
// Summary Export
// =============================================================================

/// File name used when downloading a summary.
pub const SUMMARY_FILE_NAME: &str = "summary.txt";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
