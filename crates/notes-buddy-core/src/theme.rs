//! Light/dark theme preference.
//!
//! The preference is stored as a plain `light`/`dark` string under
//! [`THEME_STORAGE_KEY`]. Applying the theme to the document (root class and
//! favicon) is the application's job; this module only supplies the values.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::config::THEME_STORAGE_KEY;
use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Favicon as an SVG data URL; inverted colors for dark mode.
    pub fn favicon_href(&self) -> String {
        let (fg, bg) = match self {
            Theme::Light => ("black", "white"),
            Theme::Dark => ("white", "black"),
        };
        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32" fill="{fg}"><circle cx="16" cy="16" r="12" fill="{fg}"/><path d="M16 8v16M8 16h16" stroke="{bg}" stroke-width="2"/></svg>"#
        );
        format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Theme value backed by persistent storage.
#[derive(Clone, Debug)]
pub struct ThemeStore<S> {
    theme: Theme,
    storage: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Rehydrate from storage, falling back to light for missing or unknown values.
    pub fn load(storage: S) -> Self {
        let theme = storage
            .get(THEME_STORAGE_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Self { theme, storage }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip light/dark and persist.
    ///
    /// The in-memory value changes even if the write fails.
    pub fn toggle(&mut self) -> Result<Theme, StorageError> {
        self.theme = self.theme.toggled();
        self.persist()?;
        Ok(self.theme)
    }

    /// Write the current value to storage.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        self.storage.set(THEME_STORAGE_KEY, self.theme.as_str())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed(key.to_string()))
        }
    }

    #[test]
    fn test_load_defaults_to_light() {
        let store = ThemeStore::load(MemoryStore::new());
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_load_rehydrates_dark() {
        let store = ThemeStore::load(MemoryStore::with_entry("theme", "dark"));
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_load_ignores_garbage() {
        let store = ThemeStore::load(MemoryStore::with_entry("theme", "sepia"));
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_round_trips_and_persists() {
        let mut store = ThemeStore::load(MemoryStore::new());
        let original = store.theme();

        assert_eq!(store.toggle(), Ok(Theme::Dark));
        assert_eq!(store.storage().get("theme").as_deref(), Some("dark"));

        assert_eq!(store.toggle(), Ok(original));
        assert_eq!(
            store.storage().get("theme").as_deref(),
            Some(original.as_str())
        );
    }

    #[test]
    fn test_toggle_survives_write_failure() {
        let mut store = ThemeStore::load(FailingStore);
        assert!(store.toggle().is_err());
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_favicon_differs_per_theme() {
        let light = Theme::Light.favicon_href();
        let dark = Theme::Dark.favicon_href();
        assert!(light.starts_with("data:image/svg+xml;base64,"));
        assert_ne!(light, dark);

        let encoded = dark.trim_start_matches("data:image/svg+xml;base64,");
        let svg = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert!(svg.contains(r#"fill="white""#));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
