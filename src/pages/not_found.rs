//! Catch-all view for unknown routes.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(page, "src/pages/page.module.css");
stylance::import_crate_style!(css, "src/pages/not_found.module.css");

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <div class=stylance::classes!(page::container, css::wrapper)>
            <div class=page::emptyIcon><Icon icon=ic::ALERT /></div>
            <h1 class=css::code>"404"</h1>
            <p class=page::subtitle>"Oops! Page not found"</p>
            <p class=page::muted>
                "No page at " <code class=css::path>{path}</code>
            </p>
            <a href="#/" class=stylance::classes!(page::button, css::home)>
                "Return to Home"
            </a>
        </div>
    }
}
