//! Signup page: registers a new account and logs in as it.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::app::use_session_manager;
use crate::net::types::SignupInput;
use crate::state::context::use_session;

const MIN_PASSWORD_LEN: usize = 5;

#[derive(Clone, Debug, Default)]
struct SignupDraft {
    username: String,
    password: String,
    first_name: String,
    last_name: String,
    email: String,
}

/// Trim text fields and apply the backend's basic constraints up front.
fn validate_signup_input(draft: &SignupDraft) -> Result<SignupInput, &'static str> {
    let username = draft.username.trim();
    let first_name = draft.first_name.trim();
    let last_name = draft.last_name.trim();
    let email = draft.email.trim();
    if [username, first_name, last_name, email].iter().any(|v| v.is_empty()) || draft.password.is_empty() {
        return Err("All fields are required.");
    }
    if draft.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 5 characters.");
    }
    let valid_email = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid_email {
        return Err("Enter a valid email.");
    }
    Ok(SignupInput {
        username: username.to_owned(),
        password: draft.password.clone(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let manager = use_session_manager();

    manager.get_value().clear_error();

    let draft = RwSignal::new(SignupDraft::default());
    let hint = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_signup_input(&draft.get()) {
            Ok(input) => input,
            Err(msg) => {
                hint.set(msg.to_owned());
                return;
            }
        };
        hint.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let manager = manager.get_value();
            leptos::task::spawn_local(async move {
                match manager.signup(&input).await {
                    Ok(()) => navigate("/", leptos_router::NavigateOptions::default()),
                    Err(e) if e.is_superseded() => {}
                    Err(e) => leptos::logging::warn!("signup failed: {e}"),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            busy.set(false);
        }
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&SignupDraft) -> String, set: fn(&mut SignupDraft, String)| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=label
                prop:value=move || get(&draft.get())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| set(d, value));
                }
            />
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Sign Up"</h1>
                {field("username", "text", |d| d.username.clone(), |d, v| d.username = v)}
                {field("password", "password", |d| d.password.clone(), |d, v| d.password = v)}
                {field("first name", "text", |d| d.first_name.clone(), |d, v| d.first_name = v)}
                {field("last name", "text", |d| d.last_name.clone(), |d, v| d.last_name = v)}
                {field("email", "email", |d| d.email.clone(), |d, v| d.email = v)}
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Sign Up"
                </button>
                <Show when=move || !hint.get().is_empty()>
                    <p class="auth-message">{move || hint.get()}</p>
                </Show>
                <Show when=move || session.error.get().is_some()>
                    <p class="auth-message auth-message--error">
                        {move || session.error.get().map(|e| e.message).unwrap_or_default()}
                    </p>
                </Show>
            </form>
        </div>
    }
}
