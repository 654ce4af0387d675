//! EduTube: filterable educational video library.

use leptos::prelude::*;
use leptos_icons::Icon;
use notes_buddy_core::models::Catalog;
use notes_buddy_core::models::catalog::{ALL, Video, VideoFilter};

use crate::components::icons as ic;

stylance::import_crate_style!(page, "src/pages/page.module.css");
stylance::import_crate_style!(css, "src/pages/edutube.module.css");

#[component]
pub fn EduTube() -> impl IntoView {
    let catalog = use_context::<StoredValue<Catalog>>().expect("Catalog must be provided at root");
    let filter = RwSignal::new(VideoFilter::default());

    let visible = Memo::new(move |_| {
        filter.with(|f| catalog.with_value(|c| f.apply(&c.videos).into_iter().cloned().collect::<Vec<_>>()))
    });
    let subjects = catalog.with_value(|c| c.video_subjects.clone());
    let levels = catalog.with_value(|c| c.video_levels.clone());

    view! {
        <div class=page::containerWide>
            <div class=page::header>
                <h1 class=page::title>
                    <span class=page::gradient>"EduTube"</span>
                </h1>
                <p class=page::subtitle>
                    "Learn from expert instructors with curated educational videos."
                </p>
            </div>

            <div class=stylance::classes!(page::card, page::section)>
                <div class=stylance::classes!(page::cardBody, css::filters)>
                    <div class=stylance::classes!(page::searchBox, css::search)>
                        <span class=page::searchIcon><Icon icon=ic::SEARCH /></span>
                        <input
                            class=page::input
                            type="text"
                            placeholder="Search videos, instructors, topics..."
                            prop:value=move || filter.with(|f| f.search.clone())
                            on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                        />
                    </div>
                    <select
                        class=page::select
                        prop:value=move || filter.with(|f| f.subject.clone())
                        on:change=move |ev| filter.update(|f| f.subject = event_target_value(&ev))
                    >
                        {subjects
                            .into_iter()
                            .map(|s| {
                                let label = if s == ALL { "All Subjects".to_string() } else { s.clone() };
                                view! { <option value=s>{label}</option> }
                            })
                            .collect_view()}
                    </select>
                    <select
                        class=page::select
                        prop:value=move || filter.with(|f| f.level.clone())
                        on:change=move |ev| filter.update(|f| f.level = event_target_value(&ev))
                    >
                        {levels
                            .into_iter()
                            .map(|l| {
                                let label = if l == ALL { "All Levels".to_string() } else { l.clone() };
                                view! { <option value=l>{label}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <p class=stylance::classes!(page::muted, css::count)>
                {move || visible.with(|v| format!("{} videos found", v.len()))}
            </p>

            <Show
                when=move || !visible.with(|v| v.is_empty())
                fallback=|| view! {
                    <div class=page::empty>
                        <div class=page::emptyIcon><Icon icon=ic::PLAY /></div>
                        <p>"No videos match your search"</p>
                    </div>
                }
            >
                <div class=page::cols3>
                    <For
                        each=move || visible.get()
                        key=|v| v.id
                        children=|video| view! { <VideoCard video=video /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn VideoCard(video: Video) -> impl IntoView {
    view! {
        <div class=stylance::classes!(page::card, page::cardHover, css::video)>
            <div class=css::thumb>
                <span class=css::play><Icon icon=ic::PLAY /></span>
                <span class=css::duration>{video.duration.clone()}</span>
            </div>
            <div class=page::cardBody>
                <div class=page::row>
                    <span class=page::badge>{video.subject.clone()}</span>
                    <span class=page::badgeMuted>{video.level.as_str()}</span>
                </div>
                <h3 class=css::title>{video.title.clone()}</h3>
                <p class=page::muted>{video.instructor.clone()}</p>
                <p class=page::muted>{video.description.clone()}</p>
                <div class=page::row>
                    <span class=page::inline>
                        <span class=css::star><Icon icon=ic::STAR /></span>
                        {format!("{:.1}", video.rating)}
                    </span>
                    <span class=page::inline>
                        <Icon icon=ic::EYE />
                        {format!("{} views", video.views)}
                    </span>
                </div>
                <div class=page::tags>
                    {video
                        .tags
                        .iter()
                        .map(|t| view! { <span class=page::badgeMuted>{format!("#{}", t)}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
