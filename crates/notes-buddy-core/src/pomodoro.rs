//! Pomodoro countdown state machine.
//!
//! A session cycles `Work -> ShortBreak -> Work -> ... -> LongBreak` where
//! every fourth completed work period earns a long break. The session itself
//! holds no timer; the caller drives it with [`PomodoroSession::tick`] once
//! per elapsed second while it is running.

use crate::config::pomodoro as cfg;
use crate::error::SettingsError;

/// The three timer modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimerMode {
    #[default]
    Work,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    /// All modes in display order.
    pub const ALL: [TimerMode; 3] = [TimerMode::Work, TimerMode::ShortBreak, TimerMode::LongBreak];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Work => "Work",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, TimerMode::Work)
    }

    /// Duration choices offered in the settings card.
    pub fn options(&self) -> &'static [u32] {
        match self {
            TimerMode::Work => cfg::WORK_OPTIONS,
            TimerMode::ShortBreak => cfg::SHORT_BREAK_OPTIONS,
            TimerMode::LongBreak => cfg::LONG_BREAK_OPTIONS,
        }
    }
}

/// Configured durations per mode, in minutes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerSettings {
    pub work_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_minutes: cfg::DEFAULT_WORK_MINUTES,
            short_break_minutes: cfg::DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: cfg::DEFAULT_LONG_BREAK_MINUTES,
        }
    }
}

impl TimerSettings {
    pub fn minutes(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Work => self.work_minutes,
            TimerMode::ShortBreak => self.short_break_minutes,
            TimerMode::LongBreak => self.long_break_minutes,
        }
    }

    pub fn seconds(&self, mode: TimerMode) -> u32 {
        self.minutes(mode) * 60
    }

    /// Update one mode's duration after range-checking it.
    pub fn set(&mut self, mode: TimerMode, minutes: u32) -> Result<(), SettingsError> {
        if !(cfg::MIN_MINUTES..=cfg::MAX_MINUTES).contains(&minutes) {
            return Err(SettingsError::OutOfRange {
                got: minutes,
                min: cfg::MIN_MINUTES,
                max: cfg::MAX_MINUTES,
            });
        }
        match mode {
            TimerMode::Work => self.work_minutes = minutes,
            TimerMode::ShortBreak => self.short_break_minutes = minutes,
            TimerMode::LongBreak => self.long_break_minutes = minutes,
        }
        Ok(())
    }
}

/// Result of a single [`PomodoroSession::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session was not running; nothing changed.
    Idle,
    /// One second was consumed and time remains.
    Counting,
    /// The countdown hit zero and the session moved to `next`. `minutes` is
    /// the length the finished countdown was loaded with.
    Completed {
        finished: TimerMode,
        next: TimerMode,
        minutes: u32,
    },
}

/// A pomodoro session.
///
/// `seconds_remaining` is always within `[0, loaded_seconds]`, where
/// `loaded_seconds` is the duration the current countdown was loaded with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PomodoroSession {
    mode: TimerMode,
    seconds_remaining: u32,
    loaded_seconds: u32,
    is_running: bool,
    completed_work_cycles: u32,
    settings: TimerSettings,
}

impl Default for PomodoroSession {
    fn default() -> Self {
        Self::new(TimerSettings::default())
    }
}

impl PomodoroSession {
    /// Create an idle session in work mode with the given settings.
    pub fn new(settings: TimerSettings) -> Self {
        let loaded = settings.seconds(TimerMode::Work);
        Self {
            mode: TimerMode::Work,
            seconds_remaining: loaded,
            loaded_seconds: loaded,
            is_running: false,
            completed_work_cycles: 0,
            settings,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Length of the countdown currently loaded.
    pub fn loaded_seconds(&self) -> u32 {
        self.loaded_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn completed_work_cycles(&self) -> u32 {
        self.completed_work_cycles
    }

    pub fn settings(&self) -> TimerSettings {
        self.settings
    }

    pub fn start(&mut self) {
        if self.seconds_remaining > 0 {
            self.is_running = true;
        }
    }

    pub fn pause(&mut self) {
        self.is_running = false;
    }

    /// Start if paused, pause if running.
    pub fn toggle_running(&mut self) {
        if self.is_running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Consume one second of the countdown.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running || self.seconds_remaining == 0 {
            return TickOutcome::Idle;
        }

        self.seconds_remaining -= 1;
        if self.seconds_remaining > 0 {
            return TickOutcome::Counting;
        }

        let finished = self.mode;
        let minutes = self.loaded_seconds / 60;
        let next = self.complete();
        TickOutcome::Completed {
            finished,
            next,
            minutes,
        }
    }

    /// Stop and jump to `mode` with its full configured duration.
    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.is_running = false;
        self.load(mode);
    }

    /// Stop and reload the current mode's configured duration.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.load(self.mode);
    }

    /// Change a mode's configured duration.
    ///
    /// Takes effect the next time that mode is loaded. When the edited mode is
    /// the current one and the countdown has not been started, it is reloaded
    /// immediately.
    pub fn set_duration(&mut self, mode: TimerMode, minutes: u32) -> Result<(), SettingsError> {
        self.settings.set(mode, minutes)?;
        let untouched = !self.is_running && self.seconds_remaining == self.loaded_seconds;
        if mode == self.mode && untouched {
            self.load(mode);
        }
        Ok(())
    }

    /// Percentage of the loaded countdown already elapsed, in `[0, 100]`.
    pub fn progress_percent(&self) -> f64 {
        if self.loaded_seconds == 0 {
            return 0.0;
        }
        let elapsed = self.loaded_seconds.saturating_sub(self.seconds_remaining);
        (f64::from(elapsed) / f64::from(self.loaded_seconds) * 100.0).clamp(0.0, 100.0)
    }

    /// Remaining time as `MM:SS`.
    pub fn display_time(&self) -> String {
        format_time(self.seconds_remaining)
    }

    fn complete(&mut self) -> TimerMode {
        self.is_running = false;
        let next = if self.mode == TimerMode::Work {
            self.completed_work_cycles += 1;
            if self.completed_work_cycles % cfg::LONG_BREAK_EVERY == 0 {
                TimerMode::LongBreak
            } else {
                TimerMode::ShortBreak
            }
        } else {
            TimerMode::Work
        };
        self.load(next);
        next
    }

    fn load(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.loaded_seconds = self.settings.seconds(mode);
        self.seconds_remaining = self.loaded_seconds;
    }
}

/// Format seconds as zero-padded `MM:SS`.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_settings() -> TimerSettings {
        TimerSettings {
            work_minutes: 1,
            short_break_minutes: 1,
            long_break_minutes: 2,
        }
    }

    fn run_to_completion(session: &mut PomodoroSession) -> TickOutcome {
        session.start();
        loop {
            match session.tick() {
                TickOutcome::Counting => continue,
                other => return other,
            }
        }
    }

    #[test]
    fn test_default_session() {
        let session = PomodoroSession::default();
        assert_eq!(session.mode(), TimerMode::Work);
        assert_eq!(session.seconds_remaining(), 25 * 60);
        assert!(!session.is_running());
        assert_eq!(session.completed_work_cycles(), 0);
        assert_eq!(session.display_time(), "25:00");
    }

    #[test]
    fn test_tick_while_paused_is_noop() {
        let mut session = PomodoroSession::default();
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.seconds_remaining(), 25 * 60);
    }

    #[test]
    fn test_tick_decrements() {
        let mut session = PomodoroSession::default();
        session.start();
        assert_eq!(session.tick(), TickOutcome::Counting);
        assert_eq!(session.seconds_remaining(), 25 * 60 - 1);
        session.pause();
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.seconds_remaining(), 25 * 60 - 1);
    }

    #[test]
    fn test_work_completion_moves_to_short_break() {
        let mut session = PomodoroSession::new(short_settings());
        let outcome = run_to_completion(&mut session);
        assert_eq!(
            outcome,
            TickOutcome::Completed {
                finished: TimerMode::Work,
                next: TimerMode::ShortBreak,
                minutes: 1,
            }
        );
        assert!(!session.is_running());
        assert_eq!(session.completed_work_cycles(), 1);
        assert_eq!(session.seconds_remaining(), 60);
    }

    #[test]
    fn test_break_completion_returns_to_work() {
        let mut session = PomodoroSession::new(short_settings());
        session.switch_mode(TimerMode::ShortBreak);
        let outcome = run_to_completion(&mut session);
        assert_eq!(
            outcome,
            TickOutcome::Completed {
                finished: TimerMode::ShortBreak,
                next: TimerMode::Work,
                minutes: 1,
            }
        );
        assert_eq!(session.completed_work_cycles(), 0);
    }

    #[test]
    fn test_fourth_work_cycle_earns_long_break() {
        let mut session = PomodoroSession::new(short_settings());
        let mut long_breaks = Vec::new();
        for _ in 0..8 {
            run_to_completion(&mut session);
            if session.mode() == TimerMode::LongBreak {
                long_breaks.push(session.completed_work_cycles());
                assert_eq!(session.seconds_remaining(), 120);
            }
            // Finish the break and go back to work.
            run_to_completion(&mut session);
            assert_eq!(session.mode(), TimerMode::Work);
        }
        assert_eq!(long_breaks, vec![4, 8]);
    }

    #[test]
    fn test_switch_mode_resets_and_stops() {
        let mut session = PomodoroSession::default();
        session.start();
        session.tick();
        session.switch_mode(TimerMode::LongBreak);
        assert_eq!(session.mode(), TimerMode::LongBreak);
        assert!(!session.is_running());
        assert_eq!(session.seconds_remaining(), 15 * 60);
        assert_eq!(session.completed_work_cycles(), 0);
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut session = PomodoroSession::default();
        session.switch_mode(TimerMode::ShortBreak);
        session.start();
        session.tick();
        session.tick();
        session.reset();
        assert_eq!(session.mode(), TimerMode::ShortBreak);
        assert!(!session.is_running());
        assert_eq!(session.seconds_remaining(), 5 * 60);
    }

    #[test]
    fn test_duration_edit_deferred_for_other_mode() {
        let mut session = PomodoroSession::default();
        session.start();
        session.tick();
        session.set_duration(TimerMode::ShortBreak, 10).unwrap();
        assert_eq!(session.seconds_remaining(), 25 * 60 - 1);
        session.switch_mode(TimerMode::ShortBreak);
        assert_eq!(session.seconds_remaining(), 10 * 60);
    }

    #[test]
    fn test_duration_edit_deferred_mid_countdown() {
        let mut session = PomodoroSession::default();
        session.start();
        session.tick();
        session.pause();
        session.set_duration(TimerMode::Work, 15).unwrap();
        assert_eq!(session.seconds_remaining(), 25 * 60 - 1);
        assert_eq!(session.loaded_seconds(), 25 * 60);
        session.reset();
        assert_eq!(session.seconds_remaining(), 15 * 60);
    }

    #[test]
    fn test_completion_reports_loaded_length_after_mid_countdown_edit() {
        let mut session = PomodoroSession::default();
        session.start();
        session.tick();
        session.pause();
        session.set_duration(TimerMode::Work, 45).unwrap();
        let outcome = run_to_completion(&mut session);
        assert_eq!(
            outcome,
            TickOutcome::Completed {
                finished: TimerMode::Work,
                next: TimerMode::ShortBreak,
                minutes: 25,
            }
        );
        assert_eq!(session.settings().work_minutes, 45);
    }

    #[test]
    fn test_duration_edit_applies_to_untouched_current_mode() {
        let mut session = PomodoroSession::default();
        session.set_duration(TimerMode::Work, 45).unwrap();
        assert_eq!(session.seconds_remaining(), 45 * 60);
        assert_eq!(session.progress_percent(), 0.0);
    }

    #[test]
    fn test_settings_set_enforces_range() {
        let mut settings = TimerSettings::default();
        assert!(settings.set(TimerMode::LongBreak, 0).is_err());
        assert!(settings.set(TimerMode::LongBreak, 121).is_err());
        assert_eq!(settings, TimerSettings::default());
        settings.set(TimerMode::LongBreak, 120).unwrap();
        settings.set(TimerMode::ShortBreak, 1).unwrap();
        assert_eq!(settings.minutes(TimerMode::LongBreak), 120);
        assert_eq!(settings.seconds(TimerMode::ShortBreak), 60);
    }

    #[test]
    fn test_duration_out_of_range_rejected() {
        let mut session = PomodoroSession::default();
        assert_eq!(
            session.set_duration(TimerMode::Work, 0),
            Err(SettingsError::OutOfRange {
                got: 0,
                min: 1,
                max: 120
            })
        );
        assert!(session.set_duration(TimerMode::Work, 121).is_err());
        assert_eq!(session.settings().work_minutes, 25);
    }

    #[test]
    fn test_progress_percent() {
        let mut session = PomodoroSession::new(short_settings());
        assert_eq!(session.progress_percent(), 0.0);
        session.start();
        for _ in 0..30 {
            session.tick();
        }
        assert!((session.progress_percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_start_at_zero_is_noop() {
        let mut session = PomodoroSession::new(short_settings());
        session.seconds_remaining = 0;
        session.start();
        assert!(!session.is_running());
        assert_eq!(session.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(25 * 60), "25:00");
        assert_eq!(format_time(61), "01:01");
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(TimerMode::Work.label(), "Work");
        assert_eq!(TimerMode::ShortBreak.label(), "Short Break");
        assert_eq!(TimerMode::LongBreak.label(), "Long Break");
        assert!(TimerMode::LongBreak.is_break());
        assert!(!TimerMode::Work.is_break());
    }
}
