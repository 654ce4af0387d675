//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Missing APIs are
//! reported as `None` or [`BrowserError`] rather than panicking.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Storage, Window};

use super::BrowserError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Log an informational message to the browser console.
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current URL hash including the '#' prefix, or empty.
pub fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Add or remove a class on `<html>`.
pub fn set_root_class(class: &str, enabled: bool) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.class_list().toggle_with_force(class, enabled);
    }
}

/// Point the page favicon at `href`, creating the `<link>` if needed.
pub fn set_favicon(href: &str) -> Result<(), BrowserError> {
    let document = document().ok_or(BrowserError::NoDocument)?;
    let link = match document.query_selector("link[rel*='icon']").ok().flatten() {
        Some(el) => el,
        None => {
            let el = document
                .create_element("link")
                .map_err(|_| BrowserError::NoDocument)?;
            let _ = el.set_attribute("rel", "icon");
            let head = document.head().ok_or(BrowserError::NoDocument)?;
            let _ = head.append_child(&el);
            el
        }
    };
    let link = link
        .dyn_into::<web_sys::HtmlLinkElement>()
        .map_err(|_| BrowserError::NoDocument)?;
    link.set_type("image/svg+xml");
    link.set_href(href);
    Ok(())
}

// =============================================================================
// Clipboard & Downloads
// =============================================================================

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), BrowserError> {
    let window = window().ok_or(BrowserError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| BrowserError::Clipboard(js_message(&e)))
}

/// Offer `text` as a file download named `file_name`.
pub fn download_text(file_name: &str, text: &str) -> Result<(), BrowserError> {
    let document = document().ok_or(BrowserError::NoDocument)?;

    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| BrowserError::Download(js_message(&e)))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| BrowserError::Download(js_message(&e)))?;

    let anchor = document
        .create_element("a")
        .map_err(|_| BrowserError::NoDocument)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| BrowserError::NoDocument)?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

// =============================================================================
// Time
// =============================================================================

/// Local wall-clock time label for chat messages, e.g. `10:42:07 AM`.
pub fn time_label() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("en-US")
        .into()
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn root_has(class: &str) -> bool {
        document()
            .and_then(|d| d.document_element())
            .map(|root| root.class_list().contains(class))
            .unwrap_or(false)
    }

    #[wasm_bindgen_test]
    fn test_root_class_toggles() {
        set_root_class("dark", true);
        assert!(root_has("dark"));
        set_root_class("dark", false);
        assert!(!root_has("dark"));
    }

    #[wasm_bindgen_test]
    fn test_favicon_link_is_reused() {
        set_favicon("data:image/svg+xml;base64,AAAA").unwrap();
        set_favicon("data:image/svg+xml;base64,BBBB").unwrap();
        let count = document()
            .and_then(|d| d.query_selector_all("link[rel*='icon']").ok())
            .map(|list| list.length())
            .unwrap_or(0);
        assert_eq!(count, 1);
    }

    #[wasm_bindgen_test]
    fn test_hash_round_trip() {
        set_hash("#/pomodoro");
        assert_eq!(current_hash(), "#/pomodoro");
    }
}
