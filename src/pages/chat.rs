//! Chat with uploaded study materials.

use leptos::prelude::*;
use leptos_icons::Icon;
use notes_buddy_core::ContentGenerator;
use notes_buddy_core::models::{Message, Transcript};
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::file_upload::FileUpload;
use crate::components::icons as ic;
use crate::utils::{dom, markdown_to_html};

stylance::import_crate_style!(page, "src/pages/page.module.css");
stylance::import_crate_style!(css, "src/pages/chat.module.css");

#[component]
pub fn Chat() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let transcript = RwSignal::new(Transcript::new(dom::time_label()));
    let input = RwSignal::new(String::new());
    let thinking = RwSignal::new(false);

    let send = move || {
        let prompt = input.get_untracked();
        if prompt.trim().is_empty() || thinking.get_untracked() {
            return;
        }
        transcript.update(|t| {
            t.push_user(prompt.clone(), dom::time_label());
        });
        input.set(String::new());
        thinking.set(true);

        let generator = ctx.generator;
        spawn_local(async move {
            match generator.chat_reply(&prompt).await {
                Ok(reply) => {
                    transcript.try_update(|t| t.push_ai(reply, dom::time_label()));
                }
                Err(e) => ctx.toasts.error("No reply", e.to_string()),
            }
            thinking.try_set(false);
        });
    };

    let on_uploaded = Callback::new(move |name: String| {
        transcript.update(|t| {
            t.push_upload_notice(&name, dom::time_label());
        });
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    let messages = Memo::new(move |_| transcript.with(|t| t.messages().to_vec()));

    view! {
        <div class=page::container>
            <div class=page::header>
                <h1 class=page::title>
                    "Chat with Your " <span class=page::gradient>"Study Materials"</span>
                </h1>
                <p class=page::subtitle>
                    "Upload your notes or books and ask questions to understand complex topics better."
                </p>
            </div>

            <div class=page::split>
                <div class=page::card>
                    <div class=page::cardHeader>
                        <h2 class=page::cardTitle><Icon icon=ic::UPLOAD /> "Upload Materials"</h2>
                    </div>
                    <div class=page::cardBody>
                        <FileUpload on_uploaded=on_uploaded />
                    </div>
                </div>

                <div class=stylance::classes!(page::card, css::chatCard)>
                    <div class=page::cardHeader>
                        <h2 class=page::cardTitle><Icon icon=ic::BOT /> "AI Chat Assistant"</h2>
                    </div>

                    <div class=css::messages>
                        <For
                            each=move || messages.get()
                            key=|m| m.id
                            children=|m| view! { <MessageBubble message=m /> }
                        />
                        <Show when=move || thinking.get()>
                            <div class=css::thinking>
                                <span class=page::spin><Icon icon=ic::SPINNER /></span>
                                <span>"AI is thinking..."</span>
                            </div>
                        </Show>
                    </div>

                    <div class=css::composer>
                        <textarea
                            class=stylance::classes!(page::textarea, css::composerInput)
                            placeholder="Ask questions about your uploaded materials..."
                            prop:value=move || input.get()
                            prop:disabled=move || thinking.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        ></textarea>
                        <button
                            class=page::button
                            title="Send"
                            disabled=move || thinking.get() || input.with(|v| v.trim().is_empty())
                            on:click=move |_| send()
                        >
                            <Icon icon=ic::SEND />
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let is_user = message.is_user();
    let (row, bubble, time) = if is_user {
        (css::rowUser, css::bubbleUser, css::timeUser)
    } else {
        (css::rowAi, css::bubbleAi, css::time)
    };
    let icon = if is_user { ic::USER } else { ic::BOT };

    let body = if is_user {
        view! { <p class=css::text>{message.content}</p> }.into_any()
    } else {
        let html = markdown_to_html(&message.content);
        view! { <div class=stylance::classes!(css::text, page::markdown) inner_html=html></div> }
            .into_any()
    };

    view! {
        <div class=row>
            <div class=bubble>
                <span class=css::avatar><Icon icon=icon /></span>
                <div>
                    {body}
                    <p class=time>{message.timestamp}</p>
                </div>
            </div>
        </div>
    }
}
