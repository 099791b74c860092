//! Landing page.

use leptos::prelude::*;

use crate::state::context::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <section class="home-page">
            <h1>"Jobly"</h1>
            <p class="home-page__tagline">"All the jobs in one, convenient place."</p>
            <Show
                when=move || session.view.get().is_logged_in
                fallback=|| {
                    view! {
                        <p class="home-page__cta">
                            <a class="btn" href="/login">"Log in"</a>
                            <a class="btn btn--primary" href="/signup">"Sign up"</a>
                        </p>
                    }
                }
            >
                <h2 class="home-page__welcome">{move || format!("Welcome back, {}!", session.view.get().username)}</h2>
            </Show>
        </section>
    }
}
