//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use notes_buddy_core::models::Catalog;
use notes_buddy_core::{FileRegistry, SimulatedGenerator, Theme, ThemeStore, UploadedFile};

use crate::components::AppRouter;
use crate::components::toast::{ToastQueue, Toaster};
use crate::utils::{BrowserDelay, LocalStore, dom};

/// Content backend used by every page. Swap this alias to change backends.
pub type Generator = SimulatedGenerator<BrowserDelay>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read from any child with
/// `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because every field is either a signal or a
/// zero-sized service.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Light/dark preference, persisted to localStorage.
    pub theme: RwSignal<ThemeStore<LocalStore>>,
    /// Files the user has uploaded this session.
    pub files: RwSignal<FileRegistry>,
    /// Transient notifications.
    pub toasts: ToastQueue,
    /// Simulated AI backend.
    pub generator: Generator,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            theme: RwSignal::new(ThemeStore::load(LocalStore)),
            files: RwSignal::new(FileRegistry::new()),
            toasts: ToastQueue::new(),
            generator: Generator::new(BrowserDelay),
        }
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.with(|t| t.theme())
    }

    /// Flip light/dark. A failed write is logged; the new theme still applies.
    pub fn toggle_theme(&self) {
        let result = self.theme.try_update(|t| t.toggle());
        match result {
            Some(Ok(theme)) => dom::log(&format!("theme set to {}", theme)),
            Some(Err(e)) => dom::warn(&format!("theme not persisted: {}", e)),
            None => {}
        }
    }

    /// Register an upload, replacing any file with the same name.
    pub fn add_file(&self, file: UploadedFile) {
        dom::log(&format!("registered {} ({})", file.name, file.display_size()));
        self.files.update(|r| r.add(file));
    }

    pub fn remove_file(&self, name: &str) {
        dom::log(&format!("removed {}", name));
        self.files.update(|r| r.remove(name));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the theme to the document root class and favicon.
fn apply_theme(theme: Theme) {
    dom::set_root_class("dark", theme.is_dark());
    if let Err(e) = dom::set_favicon(&theme.favicon_href()) {
        dom::warn(&format!("favicon not updated: {}", e));
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Loads the compiled-in catalogs and provides them as a stored value
/// - Keeps the document theme in sync with the theme signal
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    Effect::new(move || apply_theme(ctx.current_theme()));

    let routed = Catalog::load().map(|catalog| {
        provide_context(StoredValue::new(catalog));
        view! { <AppRouter /> }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #6b7280; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #f3f4f6;
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #6b7280;">
                                "Error details"
                            </summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: #dc2626;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| dom::reload()
                            style="
                                background: linear-gradient(to right, #0ea5e9, #a855f7);
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 8px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {routed}
        </ErrorBoundary>
        <Toaster />
    }
}
