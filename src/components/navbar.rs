//! Top navigation bar.
//!
//! Full link row on desktop; below `MOBILE_QUERY` the links collapse behind
//! a menu button.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;
use notes_buddy_core::AppRoute;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, MOBILE_QUERY, NAV_ITEMS};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/navbar.module.css");

#[component]
pub fn Navbar(route: Memo<AppRoute>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let is_mobile = use_media_query(MOBILE_QUERY);
    let menu_open = RwSignal::new(false);

    // Close the menu on navigation and when crossing the breakpoint
    Effect::new(move |_| {
        route.track();
        is_mobile.track();
        menu_open.set(false);
    });

    let sign_out = move |_| {
        menu_open.set(false);
        dom::log("signed out");
        dom::set_hash(&AppRoute::Auth.to_hash());
    };

    let is_dark = Signal::derive(move || ctx.current_theme().is_dark());
    let theme_title = Signal::derive(move || {
        if is_dark.get() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    });

    let links = move || {
        NAV_ITEMS
            .iter()
            .map(|&(label, hash)| {
                let active = move || route.with(|r| r.to_hash() == hash);
                view! {
                    <a
                        href=hash
                        class=move || if active() { css::linkActive } else { css::link }
                        on:click=move |_| menu_open.set(false)
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=css::bar>
            <div class=css::inner>
                <a href="#/" class=css::brand>
                    <span class=css::logo><Icon icon=ic::BOOK /></span>
                    <span class=css::brandName>{APP_NAME}</span>
                </a>

                <Show when=move || !is_mobile.get()>
                    <div class=css::links>{links}</div>
                </Show>

                <div class=css::actions>
                    <button
                        class=css::iconButton
                        title=theme_title
                        on:click=move |_| ctx.toggle_theme()
                    >
                        {move || if is_dark.get() {
                            view! { <Icon icon=ic::SUN /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::MOON /> }.into_any()
                        }}
                    </button>

                    <Show
                        when=move || is_mobile.get()
                        fallback=move || view! {
                            <button class=css::signOut on:click=sign_out>
                                <Icon icon=ic::LOG_OUT />
                                <span>"Sign Out"</span>
                            </button>
                        }
                    >
                        <button
                            class=css::iconButton
                            title="Menu"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() {
                                view! { <Icon icon=ic::CLOSE /> }.into_any()
                            } else {
                                view! { <Icon icon=ic::MENU /> }.into_any()
                            }}
                        </button>
                    </Show>
                </div>
            </div>

            <Show when=move || is_mobile.get() && menu_open.get()>
                <div class=css::mobileMenu>
                    {links}
                    <button class=css::mobileSignOut on:click=sign_out>
                        <Icon icon=ic::LOG_OUT />
                        <span>"Sign Out"</span>
                    </button>
                </div>
            </Show>
        </nav>
    }
}
