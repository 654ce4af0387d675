//! Domain configuration constants.
//!
//! UI-only settings (app name, navigation, icon theme) live in the
//! application crate's `config.rs`.

// =============================================================================
// Persistence
// =============================================================================

/// localStorage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

// =============================================================================
// Pomodoro
// =============================================================================

/// Pomodoro timer defaults and allowed ranges.
pub mod pomodoro {
    /// Default work session length in minutes.
    pub const DEFAULT_WORK_MINUTES: u32 = 25;
    /// Default short break length in minutes.
    pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
    /// Default long break length in minutes.
    pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;

    /// Every Nth completed work session is followed by a long break.
    pub const LONG_BREAK_EVERY: u32 = 4;

    /// Smallest accepted duration in minutes.
    pub const MIN_MINUTES: u32 = 1;
    /// Largest accepted duration in minutes.
    pub const MAX_MINUTES: u32 = 120;

    /// Duration choices offered by the settings card.
    pub const WORK_OPTIONS: &[u32] = &[15, 20, 25, 30, 45];
    pub const SHORT_BREAK_OPTIONS: &[u32] = &[3, 5, 10];
    pub const LONG_BREAK_OPTIONS: &[u32] = &[15, 20, 30];

    /// Interval between countdown ticks in milliseconds.
    pub const TICK_MS: u32 = 1000;

    /// Daily session goal shown on the stats card.
    pub const DAILY_GOAL_SESSIONS: u32 = 8;
}

// =============================================================================
// Simulated Latency
// =============================================================================

/// Fixed delays (milliseconds) used by the simulated generator.
pub mod latency {
    pub const CHAT_REPLY: u32 = 2000;
    pub const ROADMAP: u32 = 3000;
    pub const SUMMARY: u32 = 2500;
    pub const TEST: u32 = 3000;
    /// Login/register stub round-trip.
    pub const AUTH: u32 = 1000;
}

// =============================================================================
// Uploads
// =============================================================================

/// File extensions accepted by the upload controls (lowercase, no dot).
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt"];

/// Value for the `accept` attribute of file inputs.
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.doc,.docx,.txt";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length for registration.
pub const MIN_PASSWORD_LEN: usize = 6;
