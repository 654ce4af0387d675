//! Sign in / sign up screen.
//!
//! There is no account backend: a valid form waits briefly and navigates home.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use notes_buddy_core::config::latency;
use notes_buddy_core::{Field, FieldErrors, LoginForm, RegisterForm};
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::utils::dom;

stylance::import_crate_style!(page, "src/pages/page.module.css");
stylance::import_crate_style!(css, "src/pages/auth.module.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

#[component]
pub fn Auth() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let mode = RwSignal::new(AuthMode::Login);
    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let show_password = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let switch_mode = move |next: AuthMode| {
        mode.set(next);
        errors.set(FieldErrors::default());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = mode.get_untracked();
        let result = form.with_untracked(|f| match current {
            AuthMode::Login => LoginForm {
                email: f.email.clone(),
                password: f.password.clone(),
            }
            .validate(),
            AuthMode::Register => f.validate(),
        });
        match result {
            Ok(()) => errors.set(FieldErrors::default()),
            Err(found) => {
                errors.set(found);
                return;
            }
        }

        submitting.set(true);
        spawn_local(async move {
            TimeoutFuture::new(latency::AUTH).await;
            // The value comes back only when the page was disposed meanwhile
            if submitting.try_set(false).is_some() {
                return;
            }
            let (title, description) = match current {
                AuthMode::Login => ("Welcome back!", "You have signed in successfully"),
                AuthMode::Register => ("Account created!", "Welcome to AI Notes Buddy"),
            };
            ctx.toasts.info(title, description);
            dom::set_hash("#/");
        });
    };

    let error_for = move |field: Field| {
        move || {
            errors
                .with(|e| e.get(field))
                .map(|message| view! { <p class=page::fieldError>{message}</p> })
        }
    };
    let is_register = move || mode.get() == AuthMode::Register;
    let password_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <div class=css::screen>
            <div class=css::panel>
                <a href="#/" class=css::brand>
                    <span class=css::logo><Icon icon=ic::BOOK /></span>
                    <span class=page::gradient>{APP_NAME}</span>
                </a>

                <div class=page::card>
                    <div class=page::cardHeader>
                        <h1 class=css::heading>
                            {move || if is_register() { "Create your account" } else { "Welcome back" }}
                        </h1>
                        <p class=page::muted>
                            {move || if is_register() {
                                "Start learning smarter with AI-powered study tools"
                            } else {
                                "Sign in to continue your learning journey"
                            }}
                        </p>
                    </div>

                    <div class=page::cardBody>
                        <div class=css::tabs>
                            <button
                                class=move || if is_register() { css::tab } else { css::tabActive }
                                on:click=move |_| switch_mode(AuthMode::Login)
                            >
                                "Sign In"
                            </button>
                            <button
                                class=move || if is_register() { css::tabActive } else { css::tab }
                                on:click=move |_| switch_mode(AuthMode::Register)
                            >
                                "Sign Up"
                            </button>
                        </div>

                        <form class=page::stack on:submit=on_submit novalidate=true>
                            <Show when=is_register>
                                <div>
                                    <label class=page::label for="auth-name">"Full Name"</label>
                                    <div class=page::searchBox>
                                        <span class=page::searchIcon><Icon icon=ic::USER /></span>
                                        <input
                                            id="auth-name"
                                            class=page::input
                                            type="text"
                                            placeholder="Enter your name"
                                            prop:value=move || form.with(|f| f.name.clone())
                                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                        />
                                    </div>
                                    {error_for(Field::Name)}
                                </div>
                            </Show>

                            <div>
                                <label class=page::label for="auth-email">"Email"</label>
                                <div class=page::searchBox>
                                    <span class=page::searchIcon><Icon icon=ic::MAIL /></span>
                                    <input
                                        id="auth-email"
                                        class=page::input
                                        type="email"
                                        placeholder="you@example.com"
                                        prop:value=move || form.with(|f| f.email.clone())
                                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                    />
                                </div>
                                {error_for(Field::Email)}
                            </div>

                            <div>
                                <label class=page::label for="auth-password">"Password"</label>
                                <div class=page::searchBox>
                                    <span class=page::searchIcon><Icon icon=ic::LOCK /></span>
                                    <input
                                        id="auth-password"
                                        class=page::input
                                        type=password_type
                                        placeholder="Enter your password"
                                        prop:value=move || form.with(|f| f.password.clone())
                                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                    />
                                    <button
                                        type="button"
                                        class=css::reveal
                                        title="Show or hide password"
                                        on:click=move |_| show_password.update(|s| *s = !*s)
                                    >
                                        <Show when=move || show_password.get() fallback=|| view! { <Icon icon=ic::EYE /> }>
                                            <Icon icon=ic::EYE_OFF />
                                        </Show>
                                    </button>
                                </div>
                                {error_for(Field::Password)}
                            </div>

                            <Show when=is_register>
                                <div>
                                    <label class=page::label for="auth-confirm">"Confirm Password"</label>
                                    <div class=page::searchBox>
                                        <span class=page::searchIcon><Icon icon=ic::LOCK /></span>
                                        <input
                                            id="auth-confirm"
                                            class=page::input
                                            type=password_type
                                            placeholder="Confirm your password"
                                            prop:value=move || form.with(|f| f.confirm_password.clone())
                                            on:input=move |ev| {
                                                form.update(|f| f.confirm_password = event_target_value(&ev))
                                            }
                                        />
                                    </div>
                                    {error_for(Field::ConfirmPassword)}
                                </div>
                            </Show>

                            <button
                                type="submit"
                                class=stylance::classes!(page::button, page::block)
                                disabled=move || submitting.get()
                            >
                                <Show
                                    when=move || submitting.get()
                                    fallback=move || view! {
                                        {move || if is_register() { "Create Account" } else { "Sign In" }}
                                        <Icon icon=ic::ARROW_RIGHT />
                                    }
                                >
                                    <span class=page::spin><Icon icon=ic::SPINNER /></span>
                                    "Please wait..."
                                </Show>
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
