//! Pomodoro timer page.
//!
//! The countdown runs on a one-second browser interval that exists only
//! while the session is running. It is cleared on pause, reset, mode switch,
//! completion and when the page is disposed.

use std::time::Duration;

use leptos::prelude::*;
use leptos_icons::Icon;
use notes_buddy_core::config::pomodoro::{DAILY_GOAL_SESSIONS, TICK_MS};
use notes_buddy_core::{PomodoroSession, TickOutcome, TimerMode};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::progress::ProgressBar;
use crate::utils::dom;

stylance::import_crate_style!(page, "src/pages/page.module.css");
stylance::import_crate_style!(css, "src/pages/pomodoro.module.css");

/// Sessions and minutes already logged today before this visit.
const SAMPLE_SESSIONS_TODAY: u32 = 3;
const SAMPLE_MINUTES_TODAY: u32 = 75;

fn completion_toast(finished: TimerMode, next: TimerMode) -> (&'static str, String) {
    if finished.is_break() {
        ("Break Over!", "Ready to get back to work?".to_string())
    } else {
        (
            "Work Session Complete!",
            format!("Time for a {}.", next.label().to_lowercase()),
        )
    }
}

#[component]
pub fn Pomodoro() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let session = RwSignal::new(PomodoroSession::default());
    let current_task = RwSignal::new(String::new());
    let focused_minutes = RwSignal::new(0u32);
    let interval = StoredValue::new(None::<IntervalHandle>);

    let stop_interval = move || {
        if let Some(handle) = interval.try_update_value(|h| h.take()).flatten() {
            handle.clear();
        }
    };

    let on_tick = move || {
        let outcome = session.try_update(|s| s.tick());
        if let Some(TickOutcome::Completed {
            finished,
            next,
            minutes,
        }) = outcome
        {
            if finished == TimerMode::Work {
                focused_minutes.update(|m| *m += minutes);
            }
            dom::log(&format!("{} finished, next: {}", finished.label(), next.label()));
            let (title, description) = completion_toast(finished, next);
            ctx.toasts.info(title, description);
        }
    };

    let running = Memo::new(move |_| session.with(|s| s.is_running()));
    Effect::new(move || {
        if running.get() {
            if interval.with_value(|h| h.is_some()) {
                return;
            }
            match set_interval_with_handle(on_tick, Duration::from_millis(u64::from(TICK_MS))) {
                Ok(handle) => interval.set_value(Some(handle)),
                Err(e) => {
                    dom::warn(&format!("timer not started: {:?}", e));
                    session.update(|s| s.pause());
                }
            }
        } else {
            stop_interval();
        }
    });
    on_cleanup(stop_interval);

    let set_minutes = move |mode: TimerMode, value: String| {
        let Ok(minutes) = value.parse::<u32>() else {
            return;
        };
        let result = session.try_update(|s| s.set_duration(mode, minutes));
        if let Some(Err(e)) = result {
            ctx.toasts.error("Invalid duration", e.to_string());
        }
    };

    let mode_buttons = TimerMode::ALL
        .iter()
        .map(|&mode| {
            let icon = if mode.is_break() { ic::COFFEE } else { ic::WORK };
            let class = move || {
                if session.with(|s| s.mode()) == mode {
                    stylance::classes!(css::mode, css::modeActive)
                } else {
                    css::mode.to_string()
                }
            };
            view! {
                <button class=class on:click=move |_| session.update(|s| s.switch_mode(mode))>
                    <Icon icon=icon />
                    {mode.label()}
                </button>
            }
        })
        .collect_view();

    let settings_rows = TimerMode::ALL
        .iter()
        .map(|&mode| {
            let id = format!("duration-{}", mode.label().to_lowercase().replace(' ', "-"));
            view! {
                <div>
                    <label class=page::label for=id.clone()>{format!("{} (minutes)", mode.label())}</label>
                    <select
                        id=id
                        class=page::select
                        prop:value=move || session.with(|s| s.settings().minutes(mode).to_string())
                        prop:disabled=move || running.get()
                        on:change=move |ev| set_minutes(mode, event_target_value(&ev))
                    >
                        {mode
                            .options()
                            .iter()
                            .map(|m| view! { <option value=m.to_string()>{m.to_string()}</option> })
                            .collect_view()}
                    </select>
                </div>
            }
        })
        .collect_view();

    let sessions_today = move || SAMPLE_SESSIONS_TODAY + session.with(|s| s.completed_work_cycles());
    let goal_percent = Signal::derive(move || {
        f64::from(sessions_today()) / f64::from(DAILY_GOAL_SESSIONS) * 100.0
    });

    view! {
        <div class=page::container>
            <div class=page::header>
                <h1 class=page::title>
                    "Pomodoro " <span class=page::gradient>"Timer"</span>
                </h1>
                <p class=page::subtitle>
                    "Stay focused with timed work sessions and regular breaks."
                </p>
            </div>

            <div class=page::split>
                <div class=page::stack>
                    <div class=page::card>
                        <div class=page::cardHeader>
                            <h2 class=page::cardTitle><Icon icon=ic::SETTINGS /> "Timer Settings"</h2>
                        </div>
                        <div class=page::cardBody>{settings_rows}</div>
                    </div>

                    <div class=page::card>
                        <div class=page::cardHeader>
                            <h2 class=page::cardTitle><Icon icon=ic::TREND /> "Today's Stats"</h2>
                        </div>
                        <div class=page::cardBody>
                            <div class=page::row>
                                <span class=page::muted>"Sessions completed"</span>
                                <span class=css::statValue>{sessions_today}</span>
                            </div>
                            <div class=page::row>
                                <span class=page::muted>"Focus time"</span>
                                <span class=css::statValue>
                                    {move || format!("{} min", SAMPLE_MINUTES_TODAY + focused_minutes.get())}
                                </span>
                            </div>
                            <div class=page::row>
                                <span class=page::muted>"Daily goal"</span>
                                <span class=css::statValue>
                                    {move || format!("{}/{}", sessions_today(), DAILY_GOAL_SESSIONS)}
                                </span>
                            </div>
                            <ProgressBar percent=goal_percent />
                        </div>
                    </div>
                </div>

                <div class=page::card>
                    <div class=stylance::classes!(page::cardBody, css::timer)>
                        <div class=css::modes>{mode_buttons}</div>

                        <div class=css::clock>{move || session.with(|s| s.display_time())}</div>
                        <p class=page::muted>
                            {move || {
                                let (mode, cycles) = session.with(|s| (s.mode(), s.completed_work_cycles()));
                                format!("{} · {} work sessions completed", mode.label(), cycles)
                            }}
                        </p>

                        <div class=css::progress>
                            <ProgressBar percent=Signal::derive(move || session.with(|s| s.progress_percent())) />
                        </div>

                        <div class=css::controls>
                            <button
                                class=stylance::classes!(page::button, page::large)
                                on:click=move |_| session.update(|s| s.toggle_running())
                            >
                                <Show
                                    when=move || running.get()
                                    fallback=|| view! { <Icon icon=ic::PLAY /> "Start" }
                                >
                                    <Icon icon=ic::PAUSE /> "Pause"
                                </Show>
                            </button>
                            <button
                                class=stylance::classes!(page::buttonOutline, page::large)
                                on:click=move |_| session.update(|s| s.reset())
                            >
                                <Icon icon=ic::RESET /> "Reset"
                            </button>
                        </div>

                        <div class=css::task>
                            <label class=page::label for="current-task">"What are you working on?"</label>
                            <input
                                id="current-task"
                                class=page::input
                                type="text"
                                placeholder="e.g. Review chapter 3 notes"
                                prop:value=move || current_task.get()
                                on:input=move |ev| current_task.set(event_target_value(&ev))
                            />
                            <Show when=move || !current_task.with(|t| t.trim().is_empty())>
                                <p class=page::muted>
                                    {move || format!("Current task: {}", current_task.get().trim())}
                                </p>
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_toast_text() {
        let (title, description) = completion_toast(TimerMode::Work, TimerMode::LongBreak);
        assert_eq!(title, "Work Session Complete!");
        assert_eq!(description, "Time for a long break.");

        let (title, _) = completion_toast(TimerMode::ShortBreak, TimerMode::Work);
        assert_eq!(title, "Break Over!");
    }
}
