//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the page is derived from `#/path`
//! - **Navbar stays mounted**: only the page body re-renders on navigation
//! - **Auth is chromeless**: `#/auth` renders full screen without the navbar
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
use notes_buddy_core::AppRoute;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::navbar::Navbar;
use crate::pages;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Route parsed from the current location.
pub fn current_route() -> AppRoute {
    AppRoute::from_hash(&dom::current_hash())
}

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(current_route());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(current_route());
            if let Some(window) = dom::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());
    let with_chrome = Memo::new(move |_| route_memo.with(|r| r.uses_chrome()));

    view! {
        <div class=css::layout>
            <Show when=move || with_chrome.get()>
                <Navbar route=route_memo />
            </Show>
            <main class=move || if with_chrome.get() { css::main } else { css::bare }>
                {move || page_for(route_memo.get())}
            </main>
        </div>
    }
}

fn page_for(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <pages::Home /> }.into_any(),
        AppRoute::Chat => view! { <pages::Chat /> }.into_any(),
        AppRoute::Roadmap => view! { <pages::RoadmapPage /> }.into_any(),
        AppRoute::Summarize => view! { <pages::Summarize /> }.into_any(),
        AppRoute::TestGenerator => view! { <pages::TestGenerator /> }.into_any(),
        AppRoute::TestResults => view! { <pages::TestResults /> }.into_any(),
        AppRoute::Resources => view! { <pages::Resources /> }.into_any(),
        AppRoute::StudyPlan => view! { <pages::StudyPlanPage /> }.into_any(),
        AppRoute::Pomodoro => view! { <pages::Pomodoro /> }.into_any(),
        AppRoute::EduTube => view! { <pages::EduTube /> }.into_any(),
        AppRoute::CodingPractice => view! { <pages::CodingPractice /> }.into_any(),
        AppRoute::Profile => view! { <pages::ProfilePage /> }.into_any(),
        AppRoute::Auth => view! { <pages::Auth /> }.into_any(),
        AppRoute::NotFound(path) => view! { <pages::NotFound path=path /> }.into_any(),
    }
}
