//! Notes summarizer with copy and download export.

use leptos::prelude::*;
use leptos_icons::Icon;
use notes_buddy_core::ContentGenerator;
use notes_buddy_core::models::SummarizeForm;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::file_upload::FileUpload;
use crate::components::icons as ic;
use crate::config::SUMMARY_FILE_NAME;
use crate::utils::{dom, markdown_to_html};

stylance::import_crate_style!(page, "src/pages/page.module.css");
stylance::import_crate_style!(css, "src/pages/summarize.module.css");

#[component]
pub fn Summarize() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let form = RwSignal::new(SummarizeForm::new());

    let file_names = Memo::new(move |_| ctx.files.with(|r| r.names()));

    let on_select = move |ev: leptos::ev::Event| {
        let name = event_target_value(&ev);
        if name.is_empty() {
            return;
        }
        ctx.files
            .with_untracked(|registry| form.update(|f| f.select_file(registry, &name)));
        ctx.toasts
            .info("File Selected", format!("Content from {} loaded", name));
    };

    let summarize = move |_| {
        let text = form.with_untracked(|f| f.input.clone());
        if text.trim().is_empty() {
            ctx.toasts
                .error("Input Required", "Please enter text or select a file to summarize");
            return;
        }
        if form.with_untracked(|f| f.pending) {
            return;
        }
        form.update(|f| f.pending = true);

        let generator = ctx.generator;
        spawn_local(async move {
            let result = generator.summarize(&text).await;
            let applied = form.try_update(|f| {
                f.pending = false;
                if let Ok(summary) = &result {
                    f.output = summary.clone();
                }
            });
            if applied.is_none() {
                return;
            }
            match result {
                Ok(_) => ctx
                    .toasts
                    .info("Summary Generated!", "Your text has been successfully summarized"),
                Err(e) => ctx.toasts.error("Summary failed", e.to_string()),
            }
        });
    };

    let copy = move |_| {
        let output = form.with_untracked(|f| f.output.clone());
        spawn_local(async move {
            match dom::copy_to_clipboard(&output).await {
                Ok(()) => ctx.toasts.info("Copied!", "Summary copied to clipboard"),
                Err(e) => {
                    dom::warn(&format!("clipboard write failed: {}", e));
                    ctx.toasts.error("Copy failed", e.to_string());
                }
            }
        });
    };

    let download = move |_| {
        let output = form.with_untracked(|f| f.output.clone());
        match dom::download_text(SUMMARY_FILE_NAME, &output) {
            Ok(()) => ctx
                .toasts
                .info("Downloaded!", format!("Summary saved as {}", SUMMARY_FILE_NAME)),
            Err(e) => {
                dom::warn(&format!("download failed: {}", e));
                ctx.toasts.error("Download failed", e.to_string());
            }
        }
    };

    let pending = move || form.with(|f| f.pending);
    let output_html = Memo::new(move |_| form.with(|f| markdown_to_html(&f.output)));

    view! {
        <div class=page::container>
            <div class=page::header>
                <h1 class=page::title>
                    "Smart " <span class=page::gradient>"Note Summarizer"</span>
                </h1>
                <p class=page::subtitle>
                    "Transform lengthy notes and documents into concise, easy-to-review summaries."
                </p>
            </div>

            <div class=page::cols2>
                <div class=page::stack>
                    <div class=page::card>
                        <div class=page::cardHeader>
                            <h2 class=page::cardTitle><Icon icon=ic::UPLOAD /> "Upload Document"</h2>
                        </div>
                        <div class=page::cardBody>
                            <FileUpload />
                            <Show when=move || !file_names.with(|n| n.is_empty())>
                                <div>
                                    <label class=page::label for="summary-file">"Select uploaded file"</label>
                                    <select
                                        id="summary-file"
                                        class=page::select
                                        prop:value=move || form.with(|f| f.selected_file.clone())
                                        on:change=on_select
                                    >
                                        <option value="">"Choose a file..."</option>
                                        <For
                                            each=move || file_names.get()
                                            key=|name| name.clone()
                                            children=|name| view! {
                                                <option value=name.clone()>{name.clone()}</option>
                                            }
                                        />
                                    </select>
                                </div>
                            </Show>
                        </div>
                    </div>

                    <div class=page::card>
                        <div class=page::cardHeader>
                            <h2 class=page::cardTitle><Icon icon=ic::FILE_TEXT /> "Or Paste Text"</h2>
                        </div>
                        <div class=page::cardBody>
                            <textarea
                                class=stylance::classes!(page::textarea, css::source)
                                placeholder="Paste your notes or text here..."
                                prop:value=move || form.with(|f| f.input.clone())
                                on:input=move |ev| form.update(|f| f.input = event_target_value(&ev))
                            ></textarea>
                            <p class=page::muted>
                                {move || format!("{} characters", form.with(|f| f.char_count()))}
                            </p>
                            <button
                                class=stylance::classes!(page::button, page::block)
                                disabled=move || !form.with(|f| f.can_submit())
                                on:click=summarize
                            >
                                <Show
                                    when=pending
                                    fallback=|| view! { <Icon icon=ic::SPARKLES /> "Generate Summary" }
                                >
                                    <span class=page::spin><Icon icon=ic::SPINNER /></span>
                                    "Generating Summary..."
                                </Show>
                            </button>
                        </div>
                    </div>
                </div>

                <div class=page::card>
                    <div class=page::cardHeader>
                        <div class=page::row>
                            <h2 class=page::cardTitle><Icon icon=ic::SPARKLES /> "Summary"</h2>
                            <Show when=move || form.with(|f| f.has_output())>
                                <div class=page::inline>
                                    <button class=page::buttonOutline title="Copy" on:click=copy>
                                        <Icon icon=ic::COPY />
                                    </button>
                                    <button class=page::buttonOutline title="Download" on:click=download>
                                        <Icon icon=ic::DOWNLOAD />
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </div>
                    <div class=page::cardBody>
                        <Show
                            when=move || form.with(|f| f.has_output())
                            fallback=|| view! {
                                <div class=page::empty>
                                    <div class=page::emptyIcon><Icon icon=ic::FILE_TEXT /></div>
                                    <p>"Your summary will appear here"</p>
                                    <p class=page::muted>"Upload a document or paste text to get started"</p>
                                </div>
                            }
                        >
                            <div
                                class=stylance::classes!(page::markdown, css::output)
                                inner_html=move || output_html.get()
                            ></div>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
