//! Daily study plan checklist.

use leptos::prelude::*;
use leptos_icons::Icon;
use notes_buddy_core::models::study_plan::StudyTask;
use notes_buddy_core::models::{Priority, StudyPlan};

use crate::components::icons as ic;
use crate::components::progress::ProgressBar;

stylance::import_crate_style!(page, "src/pages/page.module.css");
stylance::import_crate_style!(css, "src/pages/study_plan.module.css");

fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::High => page::badgeRed,
        Priority::Medium => page::badgeYellow,
        Priority::Low => page::badgeGreen,
    }
}

/// `90` -> `1h 30m`, `45` -> `45m`
fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

#[component]
pub fn StudyPlanPage() -> impl IntoView {
    let plan = RwSignal::new(StudyPlan::sample());
    let tasks = Memo::new(move |_| plan.with(|p| p.tasks.clone()));
    let percent = Signal::derive(move || plan.with(|p| p.completion_percent()));
    let on_toggle = Callback::new(move |id: u32| plan.update(|p| p.toggle(id)));

    view! {
        <div class=page::container>
            <div class=page::header>
                <h1 class=page::title>
                    "Study " <span class=page::gradient>"Plan"</span>
                </h1>
                <p class=page::subtitle>"Stay on track with a focused plan for the day."</p>
            </div>

            <div class=stylance::classes!(page::cols3, page::section)>
                <div class=page::card>
                    <div class=page::cardBody>
                        <p class=page::statLabel>"Completed"</p>
                        <p class=page::statValue>
                            {move || plan.with(|p| format!("{}/{}", p.completed_count(), p.tasks.len()))}
                        </p>
                    </div>
                </div>
                <div class=page::card>
                    <div class=page::cardBody>
                        <p class=page::statLabel>"Time Studied"</p>
                        <p class=page::statValue>
                            {move || plan.with(|p| format!(
                                "{} / {}",
                                format_minutes(p.completed_minutes()),
                                format_minutes(p.total_minutes()),
                            ))}
                        </p>
                    </div>
                </div>
                <div class=page::card>
                    <div class=page::cardBody>
                        <p class=page::statLabel>"Remaining"</p>
                        <p class=page::statValue>{move || plan.with(|p| p.remaining_count())}</p>
                    </div>
                </div>
            </div>

            <div class=page::card>
                <div class=page::cardHeader>
                    <div class=page::row>
                        <h2 class=page::cardTitle><Icon icon=ic::CALENDAR /> "Today's Tasks"</h2>
                        <span class=page::badgeMuted>{move || plan.with(|p| p.date.clone())}</span>
                    </div>
                </div>
                <div class=page::cardBody>
                    <div>
                        <div class=page::row>
                            <span class=page::muted>"Daily progress"</span>
                            <span class=page::muted>{move || format!("{:.0}%", percent.get())}</span>
                        </div>
                        <ProgressBar percent=percent />
                    </div>

                    <ul class=css::tasks>
                        <For
                            each=move || tasks.get()
                            key=|t| (t.id, t.completed)
                            children=move |task| view! { <TaskRow task=task on_toggle=on_toggle /> }
                        />
                    </ul>

                    <Show when=move || plan.with(|p| p.is_done())>
                        <div class=page::success>
                            <p class=css::doneTitle>"All tasks completed!"</p>
                            <p>"Great job staying on track today."</p>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TaskRow(task: StudyTask, on_toggle: Callback<u32>) -> impl IntoView {
    let id = task.id;
    let class = if task.completed {
        stylance::classes!(css::task, css::taskDone)
    } else {
        css::task.to_string()
    };

    view! {
        <li class=class>
            <input
                type="checkbox"
                class=css::checkbox
                prop:checked=task.completed
                on:change=move |_| on_toggle.run(id)
            />
            <div class=css::taskBody>
                <p class=css::taskTitle>{task.title.clone()}</p>
                <p class=page::muted>{task.subject.clone()}</p>
            </div>
            <span class=page::inline>
                <Icon icon=ic::CLOCK />
                <span class=page::muted>{format_minutes(task.minutes)}</span>
            </span>
            <span class=priority_badge(task.priority)>{task.priority.as_str()}</span>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h");
        assert_eq!(format_minutes(90), "1h 30m");
        assert_eq!(format_minutes(240), "4h");
    }
}
