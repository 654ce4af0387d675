//! Practice test generator over uploaded files.

use leptos::prelude::*;
use leptos_icons::Icon;
use notes_buddy_core::models::test_gen::QUESTION_COUNTS;
use notes_buddy_core::models::{Difficulty, Question, TestConfig, TestType};
use notes_buddy_core::{ContentGenerator, GeneratedTest};
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::file_upload::FileUpload;
use crate::components::icons as ic;
use crate::utils::dom;

stylance::import_crate_style!(page, "src/pages/page.module.css");
stylance::import_crate_style!(css, "src/pages/test_generator.module.css");

#[component]
pub fn TestGenerator() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let config = RwSignal::new(TestConfig::default());
    let generated = RwSignal::new(None::<GeneratedTest>);
    let generating = RwSignal::new(false);

    let file_names = Memo::new(move |_| ctx.files.with(|r| r.names()));

    let generate = move |_| {
        if generating.get_untracked() {
            return;
        }
        let request = match config.with_untracked(|c| c.validate()) {
            Ok(request) => request,
            Err(e) => {
                dom::log(&format!("test config rejected: {}", e));
                ctx.toasts.error(
                    "Missing Information",
                    "Please select a file and configure all test settings",
                );
                return;
            }
        };
        generating.set(true);

        let generator = ctx.generator;
        spawn_local(async move {
            match generator.generate_test(&request).await {
                Ok(test) => {
                    ctx.toasts.info("Test Generated!", test.summary_line());
                    generated.try_set(Some(test));
                }
                Err(e) => ctx.toasts.error("Test generation failed", e.to_string()),
            }
            generating.try_set(false);
        });
    };

    view! {
        <div class=page::container>
            <div class=page::header>
                <h1 class=page::title>
                    "AI " <span class=page::gradient>"Test Generator"</span>
                </h1>
                <p class=page::subtitle>
                    "Create custom practice tests from your study materials to check your understanding."
                </p>
            </div>

            <div class=page::split>
                <div class=page::stack>
                    <div class=page::card>
                        <div class=page::cardHeader>
                            <h2 class=page::cardTitle><Icon icon=ic::UPLOAD /> "Upload Materials"</h2>
                        </div>
                        <div class=page::cardBody>
                            <FileUpload />
                        </div>
                    </div>

                    <div class=page::card>
                        <div class=page::cardHeader>
                            <h2 class=page::cardTitle><Icon icon=ic::SETTINGS /> "Test Configuration"</h2>
                        </div>
                        <div class=page::cardBody>
                            <div>
                                <label class=page::label for="test-file">"Source file"</label>
                                <select
                                    id="test-file"
                                    class=page::select
                                    prop:value=move || config.with(|c| c.file_name.clone())
                                    on:change=move |ev| config.update(|c| c.file_name = event_target_value(&ev))
                                >
                                    <option value="">"Select a file"</option>
                                    <For
                                        each=move || file_names.get()
                                        key=|name| name.clone()
                                        children=|name| view! {
                                            <option value=name.clone()>{name.clone()}</option>
                                        }
                                    />
                                </select>
                            </div>

                            <div>
                                <label class=page::label for="test-type">"Question type"</label>
                                <select
                                    id="test-type"
                                    class=page::select
                                    prop:value=move || config.with(|c| c.test_type.clone())
                                    on:change=move |ev| config.update(|c| c.test_type = event_target_value(&ev))
                                >
                                    <option value="">"Select type"</option>
                                    {TestType::ALL
                                        .iter()
                                        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                                        .collect_view()}
                                </select>
                            </div>

                            <div>
                                <label class=page::label for="test-count">"Number of questions"</label>
                                <select
                                    id="test-count"
                                    class=page::select
                                    prop:value=move || config.with(|c| c.count.clone())
                                    on:change=move |ev| config.update(|c| c.count = event_target_value(&ev))
                                >
                                    <option value="">"Select count"</option>
                                    {QUESTION_COUNTS
                                        .iter()
                                        .map(|n| view! { <option value=n.to_string()>{format!("{} questions", n)}</option> })
                                        .collect_view()}
                                </select>
                            </div>

                            <div>
                                <label class=page::label for="test-difficulty">"Difficulty"</label>
                                <select
                                    id="test-difficulty"
                                    class=page::select
                                    prop:value=move || config.with(|c| c.difficulty.clone())
                                    on:change=move |ev| config.update(|c| c.difficulty = event_target_value(&ev))
                                >
                                    <option value="">"Select difficulty"</option>
                                    {Difficulty::ALL
                                        .iter()
                                        .map(|d| view! { <option value=d.as_str()>{d.label()}</option> })
                                        .collect_view()}
                                </select>
                            </div>

                            <button
                                class=stylance::classes!(page::button, page::block)
                                disabled=move || generating.get()
                                on:click=generate
                            >
                                <Show
                                    when=move || generating.get()
                                    fallback=|| view! { <Icon icon=ic::SPARKLES /> "Generate Test" }
                                >
                                    <span class=page::spin><Icon icon=ic::SPINNER /></span>
                                    "Generating Test..."
                                </Show>
                            </button>
                        </div>
                    </div>
                </div>

                <div class=page::card>
                    <div class=page::cardHeader>
                        <div class=page::row>
                            <h2 class=page::cardTitle><Icon icon=ic::TEST /> "Generated Test"</h2>
                            {move || generated.with(|t| t.as_ref().map(|t| view! {
                                <span class=page::badge>
                                    {format!("{} · {}", t.request.test_type.label(), t.request.difficulty.label())}
                                </span>
                            }))}
                        </div>
                    </div>
                    <div class=page::cardBody>
                        {move || match generated.get() {
                            Some(test) => view! {
                                <ol class=css::questions>
                                    {test
                                        .questions
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, q)| view! { <QuestionCard number=i + 1 question=q /> })
                                        .collect_view()}
                                </ol>
                            }
                            .into_any(),
                            None => view! {
                                <div class=page::empty>
                                    <div class=page::emptyIcon><Icon icon=ic::TEST /></div>
                                    <p>"Your generated test will appear here"</p>
                                    <p class=page::muted>"Upload a file and configure the test settings"</p>
                                </div>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn QuestionCard(number: usize, question: Question) -> impl IntoView {
    let options = question
        .options
        .iter()
        .map(|option| view! { <li class=css::option>{option.clone()}</li> })
        .collect_view();

    view! {
        <li class=css::question>
            <div class=page::row>
                <h3 class=css::prompt>{format!("{}. {}", number, question.prompt)}</h3>
                <span class=page::badgeMuted>{question.kind.label()}</span>
            </div>
            <ul class=css::options>{options}</ul>
            <p class=css::answer>
                <Icon icon=ic::CHECK /> " Answer: " {question.answer.clone()}
            </p>
        </li>
    }
}
