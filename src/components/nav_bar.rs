//! Top navigation reflecting the current session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_session_manager;
use crate::state::context::use_session;

/// Navigation bar: auth links when anonymous, greeting + logout otherwise.
///
/// Also registers the router's navigator with the session manager so
/// logout can send the user home.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let manager = use_session_manager();

    let navigate = use_navigate();
    manager.get_value().set_navigator(move |path| navigate(path, NavigateOptions::default()));

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        manager.get_value().logout();
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"Jobly"</a>
            <Show
                when=move || session.view.get().is_logged_in
                fallback=|| {
                    view! {
                        <a class="nav-bar__link" href="/login">"Login"</a>
                        <a class="nav-bar__link" href="/signup">"Sign Up"</a>
                    }
                }
            >
                <Show when=move || session.view.get().is_admin>
                    <span class="nav-bar__badge">"admin"</span>
                </Show>
                <a class="nav-bar__link" href="/" on:click=on_logout>
                    {move || format!("Log out {}", session.view.get().username)}
                </a>
            </Show>
        </nav>
    }
}
