//! Searchable library of study resources.

use leptos::prelude::*;
use leptos_icons::Icon;
use notes_buddy_core::models::Catalog;
use notes_buddy_core::models::catalog::{ALL, Resource, ResourceFilter, ResourceKind};

use crate::components::icons as ic;

stylance::import_crate_style!(page, "src/pages/page.module.css");
stylance::import_crate_style!(css, "src/pages/resources.module.css");

fn kind_icon(kind: ResourceKind) -> icondata::Icon {
    match kind {
        ResourceKind::Pdf => ic::FILE_TEXT,
        ResourceKind::Video => ic::PLAY,
        ResourceKind::Article => ic::FILE,
        ResourceKind::Website => ic::EXTERNAL_LINK,
        ResourceKind::Book => ic::BOOK,
    }
}

/// `all` reads as "All Subjects" / "All Types" in the selects.
fn option_label(value: &str, all_label: &'static str) -> String {
    if value == ALL {
        all_label.to_string()
    } else {
        value.to_string()
    }
}

#[component]
pub fn Resources() -> impl IntoView {
    let catalog = use_context::<StoredValue<Catalog>>().expect("Catalog must be provided at root");
    let filter = RwSignal::new(ResourceFilter::default());

    let visible = Memo::new(move |_| {
        filter.with(|f| catalog.with_value(|c| f.apply(&c.resources).into_iter().cloned().collect::<Vec<_>>()))
    });
    let subjects = catalog.with_value(|c| c.resource_subjects.clone());
    let kinds = catalog.with_value(|c| c.resource_kinds.clone());

    view! {
        <div class=page::containerWide>
            <div class=page::header>
                <h1 class=page::title>
                    "Study " <span class=page::gradient>"Resources"</span>
                </h1>
                <p class=page::subtitle>
                    "Discover curated textbooks, videos and articles for every subject."
                </p>
            </div>

            <div class=stylance::classes!(page::card, page::section)>
                <div class=stylance::classes!(page::cardBody, css::filters)>
                    <div class=stylance::classes!(page::searchBox, css::search)>
                        <span class=page::searchIcon><Icon icon=ic::SEARCH /></span>
                        <input
                            class=page::input
                            type="text"
                            placeholder="Search resources..."
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
                            .map(|s| view! { <option value=s.clone()>{option_label(&s, "All Subjects")}</option> })
                            .collect_view()}
                    </select>
                    <select
                        class=page::select
                        prop:value=move || filter.with(|f| f.kind.clone())
                        on:change=move |ev| filter.update(|f| f.kind = event_target_value(&ev))
                    >
                        {kinds
                            .into_iter()
                            .map(|k| view! { <option value=k.clone()>{option_label(&k, "All Types")}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <Show
                when=move || !visible.with(|v| v.is_empty())
                fallback=|| view! {
                    <div class=page::empty>
                        <div class=page::emptyIcon><Icon icon=ic::SEARCH /></div>
                        <p>"No resources match your filters"</p>
                    </div>
                }
            >
                <div class=page::cols3>
                    <For
                        each=move || visible.get()
                        key=|r| r.id
                        children=|resource| view! { <ResourceCard resource=resource /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ResourceCard(resource: Resource) -> impl IntoView {
    let bookmarked = RwSignal::new(false);
    let external = resource.is_external();

    view! {
        <div class=stylance::classes!(page::card, page::cardHover)>
            <div class=page::cardHeader>
                <div class=page::row>
                    <span class=page::inline>
                        <span class=css::kindIcon><Icon icon=kind_icon(resource.kind) /></span>
                        <span class=page::badgeMuted>{resource.kind.as_str()}</span>
                    </span>
                    <button
                        class=move || if bookmarked.get() { css::bookmarkOn } else { css::bookmark }
                        title="Bookmark"
                        on:click=move |_| bookmarked.update(|b| *b = !*b)
                    >
                        <Icon icon=ic::BOOKMARK />
                    </button>
                </div>
                <h3 class=css::title>{resource.title.clone()}</h3>
            </div>
            <div class=page::cardBody>
                <p class=page::muted>{resource.description.clone()}</p>
                <div class=page::tags>
                    {resource
                        .tags
                        .iter()
                        .map(|t| view! { <span class=page::badge>{t.clone()}</span> })
                        .collect_view()}
                </div>
                <div class=page::row>
                    <span class=page::inline>
                        <span class=css::star><Icon icon=ic::STAR /></span>
                        {format!("{:.1}", resource.rating)}
                    </span>
                    <span class=page::badgeMuted>{resource.level.as_str()}</span>
                    <span class=page::muted>{resource.subject.clone()}</span>
                </div>
                <a
                    class=stylance::classes!(page::buttonOutline, page::block)
                    href=resource.url.clone()
                    target=if external { "_blank" } else { "_self" }
                    rel="noopener noreferrer"
                >
                    <Icon icon=ic::EXTERNAL_LINK />
                    "Open Resource"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label_names_all() {
        assert_eq!(option_label("all", "All Subjects"), "All Subjects");
        assert_eq!(option_label("History", "All Subjects"), "History");
    }
}
