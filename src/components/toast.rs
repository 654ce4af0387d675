//! Transient notifications.
//!
//! Pages push toasts through [`ToastQueue`]; [`Toaster`] renders them in a
//! fixed corner stack and each one dismisses itself after
//! `TOAST_DURATION_MS`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::TOAST_DURATION_MS;

stylance::import_crate_style!(css, "src/components/toast.module.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Queue of visible toasts.
#[derive(Clone, Copy)]
pub struct ToastQueue {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Info, title.into(), description.into());
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), description.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.items.try_update(|items| items.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, title: String, description: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                kind,
                title,
                description,
            })
        });

        let queue = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            queue.dismiss(id);
        });
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Corner stack of active toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let queue = ctx.toasts;

    view! {
        <div class=css::stack>
            <For
                each=move || queue.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let (class, icon) = match toast.kind {
                        ToastKind::Info => (css::toast, ic::CHECK),
                        ToastKind::Error => (css::toastError, ic::ALERT),
                    };
                    view! {
                        <div class=class role="status">
                            <span class=css::icon><Icon icon=icon /></span>
                            <div class=css::body>
                                <p class=css::title>{toast.title}</p>
                                <p class=css::description>{toast.description}</p>
                            </div>
                            <button
                                class=css::close
                                title="Dismiss"
                                on:click=move |_| queue.dismiss(id)
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
