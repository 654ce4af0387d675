use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/progress.module.css");

/// Horizontal progress bar. `percent` is clamped to `[0, 100]`.
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<f64>) -> impl IntoView {
    let width = move || format!("width: {:.1}%", percent.get().clamp(0.0, 100.0));

    view! {
        <div class=css::track role="progressbar">
            <div class=css::fill style=width></div>
        </div>
    }
}
