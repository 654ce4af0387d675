//! Past test scores with summary statistics.

use leptos::prelude::*;
use leptos_icons::Icon;
use notes_buddy_core::models::Catalog;
use notes_buddy_core::models::catalog::{ScoreBand, TestResult};

use crate::components::icons as ic;
use crate::components::progress::ProgressBar;

stylance::import_crate_style!(page, "src/pages/page.module.css");
stylance::import_crate_style!(css, "src/pages/test_results.module.css");

fn band_badge(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => page::badgeGreen,
        ScoreBand::Good => page::badge,
        ScoreBand::Fair => page::badgeYellow,
        ScoreBand::NeedsWork => page::badgeRed,
    }
}

#[component]
pub fn TestResults() -> impl IntoView {
    let catalog = use_context::<StoredValue<Catalog>>().expect("Catalog must be provided at root");
    let results = catalog.with_value(|c| c.results.clone());
    let stats = catalog.with_value(|c| c.result_stats());

    view! {
        <div class=page::container>
            <div class=page::header>
                <h1 class=page::title>
                    "Test " <span class=page::gradient>"Results"</span>
                </h1>
                <p class=page::subtitle>"Track your progress and review your performance."</p>
            </div>

            <div class=stylance::classes!(page::cols3, page::section)>
                <StatCard icon=ic::TREND label="Average Score" value=format!("{:.0}%", stats.average) />
                <StatCard icon=ic::TROPHY label="Best Score" value=format!("{}%", stats.best) />
                <StatCard icon=ic::TARGET label="Tests Taken" value=stats.count.to_string() />
            </div>

            <div class=page::card>
                <div class=page::cardHeader>
                    <h2 class=page::cardTitle><Icon icon=ic::TEST /> "Recent Tests"</h2>
                </div>
                <div class=page::cardBody>
                    {if results.is_empty() {
                        view! {
                            <div class=page::empty>
                                <div class=page::emptyIcon><Icon icon=ic::TEST /></div>
                                <p>"No tests taken yet"</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        results
                            .into_iter()
                            .map(|result| view! { <ResultRow result=result /> })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatCard(icon: icondata::Icon, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class=page::card>
            <div class=stylance::classes!(page::cardBody, css::stat)>
                <span class=page::statIcon><Icon icon=icon /></span>
                <div>
                    <p class=page::statLabel>{label}</p>
                    <p class=page::statValue>{value}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ResultRow(result: TestResult) -> impl IntoView {
    let band = result.band();
    let percent = result.score as f64;

    view! {
        <div class=css::result>
            <div class=page::row>
                <div>
                    <h3 class=css::name>{result.test_name.clone()}</h3>
                    <p class=page::muted>
                        {format!("{} · {} · {}", result.subject, result.difficulty, result.date)}
                    </p>
                </div>
                <span class=band_badge(band)>{format!("{}%", result.score)}</span>
            </div>
            <ProgressBar percent=Signal::derive(move || percent) />
            <div class=css::meta>
                <span class=page::inline>
                    <Icon icon=ic::CHECK />
                    {format!("{}/{} correct", result.correct_answers(), result.total_questions)}
                </span>
                <span class=page::inline>
                    <Icon icon=ic::CLOCK />
                    {result.time_spent.clone()}
                </span>
            </div>
        </div>
    }
}
