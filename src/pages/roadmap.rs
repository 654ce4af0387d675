//! Chapter roadmap generator with step checklist.

use leptos::prelude::*;
use leptos_icons::Icon;
use notes_buddy_core::ContentGenerator;
use notes_buddy_core::models::{Roadmap, RoadmapStep};
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::file_upload::FileUpload;
use crate::components::icons as ic;
use crate::components::progress::ProgressBar;

stylance::import_crate_style!(page, "src/pages/page.module.css");
stylance::import_crate_style!(css, "src/pages/roadmap.module.css");

/// File name without its extension, used as the roadmap topic.
fn topic_from_file(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}

#[component]
pub fn RoadmapPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let topic = RwSignal::new(String::new());
    let roadmap = RwSignal::new(Roadmap::default());
    let generating = RwSignal::new(false);

    let generate = move |_| {
        let input = topic.get_untracked();
        if input.trim().is_empty() || generating.get_untracked() {
            return;
        }
        generating.set(true);
        let generator = ctx.generator;
        spawn_local(async move {
            match generator.roadmap(&input).await {
                Ok(steps) => {
                    roadmap.try_set(Roadmap::new(input.trim(), steps));
                }
                Err(e) => ctx.toasts.error("Roadmap failed", e.to_string()),
            }
            generating.try_set(false);
        });
    };

    let on_uploaded = Callback::new(move |name: String| topic.set(topic_from_file(&name)));

    let steps = Memo::new(move |_| roadmap.with(|r| r.steps.clone()));
    let progress = Signal::derive(move || roadmap.with(|r| r.progress_percent()));

    view! {
        <div class=page::container>
            <div class=page::header>
                <h1 class=page::title>
                    "Chapter " <span class=page::gradient>"Roadmap Generator"</span>
                </h1>
                <p class=page::subtitle>
                    "Break down complex chapters into manageable learning steps with AI-generated study roadmaps."
                </p>
            </div>

            <div class=page::split>
                <div class=page::stack>
                    <div class=page::card>
                        <div class=page::cardHeader>
                            <h2 class=page::cardTitle><Icon icon=ic::UPLOAD /> "Upload Chapter"</h2>
                        </div>
                        <div class=page::cardBody>
                            <FileUpload
                                on_uploaded=on_uploaded
                                hint="Upload a chapter to use its name as the topic"
                            />
                        </div>
                    </div>

                    <div class=page::card>
                        <div class=page::cardHeader>
                            <h2 class=page::cardTitle><Icon icon=ic::MAP /> "Or Enter Topic"</h2>
                        </div>
                        <div class=page::cardBody>
                            <textarea
                                class=page::textarea
                                placeholder="Enter chapter title or topic you want to study..."
                                prop:value=move || topic.get()
                                on:input=move |ev| topic.set(event_target_value(&ev))
                            ></textarea>
                            <button
                                class=stylance::classes!(page::button, page::block)
                                disabled=move || generating.get() || topic.with(|t| t.trim().is_empty())
                                on:click=generate
                            >
                                <Show
                                    when=move || generating.get()
                                    fallback=|| view! { <Icon icon=ic::SPARKLES /> "Generate Roadmap" }
                                >
                                    <span class=page::spin><Icon icon=ic::SPINNER /></span>
                                    "Generating Roadmap..."
                                </Show>
                            </button>
                        </div>
                    </div>
                </div>

                <div class=page::card>
                    <div class=page::cardHeader>
                        <div class=page::row>
                            <h2 class=page::cardTitle><Icon icon=ic::TARGET /> "Study Roadmap"</h2>
                            <Show when=move || !roadmap.with(|r| r.is_empty())>
                                <span class=page::badge>
                                    {move || roadmap.with(|r| format!("{}/{} completed", r.completed_count(), r.steps.len()))}
                                </span>
                            </Show>
                        </div>
                        <Show when=move || !roadmap.with(|r| r.topic.is_empty())>
                            <p class=page::muted>{move || roadmap.with(|r| r.topic.clone())}</p>
                        </Show>
                    </div>
                    <div class=page::cardBody>
                        <Show
                            when=move || !roadmap.with(|r| r.is_empty())
                            fallback=|| view! {
                                <div class=page::empty>
                                    <div class=page::emptyIcon><Icon icon=ic::MAP /></div>
                                    <p>"Your study roadmap will appear here"</p>
                                    <p class=page::muted>"Upload a chapter or enter a topic to get started"</p>
                                </div>
                            }
                        >
                            <ProgressBar percent=progress />
                            <ol class=css::steps>
                                <For
                                    each=move || steps.get()
                                    key=|s| (s.id, s.completed)
                                    children=move |step| view! {
                                        <StepItem
                                            step=step
                                            on_toggle=Callback::new(move |id| roadmap.update(|r| r.toggle(id)))
                                        />
                                    }
                                />
                            </ol>
                            <Show when=move || roadmap.with(|r| r.is_complete())>
                                <div class=page::success>
                                    <p class=css::successTitle>"Congratulations!"</p>
                                    <p>"You've completed your study roadmap."</p>
                                </div>
                            </Show>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StepItem(step: RoadmapStep, on_toggle: Callback<u32>) -> impl IntoView {
    let id = step.id;
    let class = if step.completed {
        stylance::classes!(css::step, css::stepDone)
    } else {
        css::step.to_string()
    };

    view! {
        <li class=class>
            <button class=css::check title="Toggle step" on:click=move |_| on_toggle.run(id)>
                {if step.completed {
                    view! { <Icon icon=ic::CHECK /> }.into_any()
                } else {
                    view! { <span class=css::number>{id}</span> }.into_any()
                }}
            </button>
            <div class=css::stepBody>
                <h3 class=css::stepTitle>{step.title.clone()}</h3>
                <p class=page::muted>{step.description.clone()}</p>
                <span class=css::eta><Icon icon=ic::CLOCK /> {step.estimated_time()}</span>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_strips_extension() {
        assert_eq!(topic_from_file("cell-biology.pdf"), "cell-biology");
        assert_eq!(topic_from_file("notes.v2.txt"), "notes.v2");
        assert_eq!(topic_from_file("README"), "README");
        assert_eq!(topic_from_file(".docx"), ".docx");
    }
}
