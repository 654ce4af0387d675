//! localStorage adapter.

use notes_buddy_core::KeyValueStore;
use notes_buddy_core::error::StorageError;

use super::dom;

/// [`KeyValueStore`] over `window.localStorage`.
///
/// Holds no handle; storage is looked up on every call so the value stays
/// `Send` and can live inside a signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use notes_buddy_core::{Theme, ThemeStore};
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trips_through_local_storage() {
        let mut store = LocalStore;
        store.set("notes-buddy-test", "value").unwrap();
        assert_eq!(store.get("notes-buddy-test").as_deref(), Some("value"));
        assert_eq!(store.get("notes-buddy-missing"), None);
    }

    #[wasm_bindgen_test]
    fn test_theme_survives_reload() {
        let mut store = LocalStore;
        store.set("theme", "light").unwrap();

        let mut theme = ThemeStore::load(LocalStore);
        assert_eq!(theme.toggle(), Ok(Theme::Dark));

        let reloaded = ThemeStore::load(LocalStore);
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert_eq!(LocalStore.get("theme").as_deref(), Some("dark"));
    }
}
