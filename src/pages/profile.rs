//! Student profile with sample stats and activity.

use leptos::prelude::*;
use leptos_icons::Icon;
use notes_buddy_core::models::Catalog;

use crate::components::icons as ic;
use crate::components::progress::ProgressBar;

stylance::import_crate_style!(page, "src/pages/page.module.css");
stylance::import_crate_style!(css, "src/pages/profile.module.css");

/// Map a catalog icon key to an icon; unknown keys get a generic one.
fn stat_icon(key: &str) -> icondata::Icon {
    match key {
        "chat" => ic::CHAT,
        "roadmap" => ic::MAP,
        "summary" => ic::FILE_TEXT,
        "clock" => ic::CLOCK,
        _ => ic::STAR,
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let catalog = use_context::<StoredValue<Catalog>>().expect("Catalog must be provided at root");
    let profile = catalog.with_value(|c| c.profile.clone());
    let goal_percent = profile.goal_percent as f64;

    let stats = profile
        .stats
        .iter()
        .map(|stat| {
            view! {
                <div class=page::card>
                    <div class=stylance::classes!(page::cardBody, css::stat)>
                        <span class=page::statIcon><Icon icon=stat_icon(&stat.icon) /></span>
                        <p class=page::statValue>{stat.value.clone()}</p>
                        <p class=page::statLabel>{stat.label.clone()}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let activity = profile
        .activity
        .iter()
        .map(|item| {
            view! {
                <li class=css::activity>
                    <span class=css::dot></span>
                    <div class=css::activityBody>
                        <p class=css::action>{item.action.clone()}</p>
                        <p class=page::muted>{item.subject.clone()}</p>
                    </div>
                    <span class=page::muted>{item.time.clone()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class=page::container>
            <div class=stylance::classes!(page::card, page::section)>
                <div class=stylance::classes!(page::cardBody, css::hero)>
                    <div class=css::avatar><Icon icon=ic::USER /></div>
                    <div class=css::identity>
                        <h1 class=css::name>{profile.name.clone()}</h1>
                        <p class=page::muted>{profile.title.clone()}</p>
                        <div class=page::tags>
                            <span class=page::badge>
                                {format!("{}-day streak", profile.streak_days)}
                            </span>
                        </div>
                    </div>
                </div>
            </div>

            <div class=stylance::classes!(page::cols4, page::section)>{stats}</div>

            <div class=page::cols2>
                <div class=page::card>
                    <div class=page::cardHeader>
                        <h2 class=page::cardTitle><Icon icon=ic::TARGET /> "Current Goal"</h2>
                    </div>
                    <div class=page::cardBody>
                        <div class=page::row>
                            <span>{profile.goal.clone()}</span>
                            <span class=page::muted>{format!("{}%", profile.goal_percent)}</span>
                        </div>
                        <ProgressBar percent=Signal::derive(move || goal_percent) />
                    </div>
                </div>

                <div class=page::card>
                    <div class=page::cardHeader>
                        <h2 class=page::cardTitle><Icon icon=ic::CLOCK /> "Recent Activity"</h2>
                    </div>
                    <div class=page::cardBody>
                        <ul class=css::activityList>{activity}</ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
