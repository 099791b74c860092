//! Login page: username + password against the job-board backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::use_session_manager;
use crate::state::context::use_session;

const MISSING_CREDENTIALS: &str = "Enter both username and password.";

/// Trim the username and require both fields.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let manager = use_session_manager();

    // A failure from some earlier form must not greet this one.
    manager.get_value().clear_error();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let hint = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(pair) => pair,
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
                match manager.login(&username_value, &password_value).await {
                    Ok(()) => navigate("/", leptos_router::NavigateOptions::default()),
                    Err(e) if e.is_superseded() => {}
                    Err(e) => leptos::logging::warn!("login failed: {e}"),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Log In"</h1>
                <input
                    class="auth-input"
                    type="text"
                    autocomplete="username"
                    placeholder="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    autocomplete="current-password"
                    placeholder="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Log In"
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
