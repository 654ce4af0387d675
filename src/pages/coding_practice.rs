//! Coding practice: problem list, statement and a plain code editor.

use leptos::prelude::*;
use leptos_icons::Icon;
use notes_buddy_core::models::Catalog;
use notes_buddy_core::models::catalog::{Problem, ProblemDifficulty, RUN_MESSAGE, SUBMIT_MESSAGE};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(page, "src/pages/page.module.css");
stylance::import_crate_style!(css, "src/pages/coding_practice.module.css");

fn difficulty_badge(difficulty: ProblemDifficulty) -> &'static str {
    match difficulty {
        ProblemDifficulty::Easy => page::badgeGreen,
        ProblemDifficulty::Medium => page::badgeYellow,
        ProblemDifficulty::Hard => page::badgeRed,
    }
}

#[component]
pub fn CodingPractice() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let catalog = use_context::<StoredValue<Catalog>>().expect("Catalog must be provided at root");

    let problems = catalog.with_value(|c| c.problems.clone());
    let languages = catalog.with_value(|c| c.languages.clone());
    let default_language = languages.first().map(|l| l.value.clone()).unwrap_or_default();

    let selected = RwSignal::new(None::<u32>);
    let language = RwSignal::new(default_language);
    let code = RwSignal::new(catalog.with_value(|c| c.starter_code.clone()));

    let current = Memo::new(move |_| {
        selected
            .get()
            .and_then(|id| catalog.with_value(|c| c.problem(id).cloned()))
    });

    let select = move |id: u32| {
        selected.set(Some(id));
        code.set(catalog.with_value(|c| c.starter_code.clone()));
    };

    let problem_list = problems
        .into_iter()
        .map(|problem| {
            let id = problem.id;
            let class = move || {
                if selected.get() == Some(id) {
                    stylance::classes!(css::problem, css::problemActive)
                } else {
                    css::problem.to_string()
                }
            };
            view! {
                <button class=class on:click=move |_| select(id)>
                    <div class=page::row>
                        <span class=css::problemTitle>{format!("{}. {}", problem.id, problem.title)}</span>
                        <span class=difficulty_badge(problem.difficulty)>{problem.difficulty.as_str()}</span>
                    </div>
                    <div class=page::row>
                        <span class=page::muted>{problem.category.clone()}</span>
                        <span class=page::muted>
                            {format!("{:.1}% · {}", problem.acceptance_rate, problem.solved_label())}
                        </span>
                    </div>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class=page::containerWide>
            <div class=page::header>
                <h1 class=page::title>
                    "Coding " <span class=page::gradient>"Practice"</span>
                </h1>
                <p class=page::subtitle>
                    "Sharpen your problem-solving skills with curated programming challenges."
                </p>
            </div>

            <div class=page::split>
                <div class=page::card>
                    <div class=page::cardHeader>
                        <h2 class=page::cardTitle><Icon icon=ic::CODE /> "Problems"</h2>
                    </div>
                    <div class=page::cardBody>{problem_list}</div>
                </div>

                {move || match current.get() {
                    Some(problem) => view! {
                        <div class=page::stack>
                            <ProblemDetails problem=problem />
                            <div class=page::card>
                                <div class=page::cardHeader>
                                    <div class=page::row>
                                        <h2 class=page::cardTitle><Icon icon=ic::CODE /> "Solution"</h2>
                                        <select
                                            class=stylance::classes!(page::select, css::language)
                                            prop:value=move || language.get()
                                            on:change=move |ev| language.set(event_target_value(&ev))
                                        >
                                            {languages
                                                .iter()
                                                .map(|l| view! { <option value=l.value.clone()>{l.label.clone()}</option> })
                                                .collect_view()}
                                        </select>
                                    </div>
                                </div>
                                <div class=page::cardBody>
                                    <textarea
                                        class=stylance::classes!(page::textarea, css::editor)
                                        spellcheck="false"
                                        prop:value=move || code.get()
                                        on:input=move |ev| code.set(event_target_value(&ev))
                                    ></textarea>
                                    <div class=css::actions>
                                        <button
                                            class=page::buttonOutline
                                            on:click=move |_| ctx.toasts.info("Run", RUN_MESSAGE)
                                        >
                                            <Icon icon=ic::PLAY /> "Run"
                                        </button>
                                        <button
                                            class=page::button
                                            on:click=move |_| ctx.toasts.info("Submit", SUBMIT_MESSAGE)
                                        >
                                            <Icon icon=ic::SEND /> "Submit"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class=page::card>
                            <div class=page::empty>
                                <div class=page::emptyIcon><Icon icon=ic::CODE /></div>
                                <p>"Select a problem to start coding"</p>
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ProblemDetails(problem: Problem) -> impl IntoView {
    let examples = problem
        .examples
        .iter()
        .enumerate()
        .map(|(i, example)| {
            let explanation = example
                .explanation
                .clone()
                .map(|text| view! { <p><strong>"Explanation: "</strong>{text}</p> });
            view! {
                <div class=css::example>
                    <p class=css::exampleTitle>{format!("Example {}", i + 1)}</p>
                    <p><strong>"Input: "</strong><code>{example.input.clone()}</code></p>
                    <p><strong>"Output: "</strong><code>{example.output.clone()}</code></p>
                    {explanation}
                </div>
            }
        })
        .collect_view();

    let constraints = problem
        .constraints
        .iter()
        .map(|c| view! { <li><code>{c.clone()}</code></li> })
        .collect_view();

    view! {
        <div class=page::card>
            <div class=page::cardHeader>
                <div class=page::row>
                    <h2 class=page::cardTitle>{problem.title.clone()}</h2>
                    <span class=difficulty_badge(problem.difficulty)>{problem.difficulty.as_str()}</span>
                </div>
            </div>
            <div class=page::cardBody>
                <p class=css::description>{problem.description.clone()}</p>
                {examples}
                <div>
                    <p class=css::exampleTitle>"Constraints"</p>
                    <ul class=css::constraints>{constraints}</ul>
                </div>
            </div>
        </div>
    }
}
