//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::context::provide_session_context;
use crate::state::session::SessionManager;
use crate::util::credential_store::BrowserCredentialStore;

/// Session manager wired to the browser store and the HTTP backend.
pub type AppSession = SessionManager<HttpApi<BrowserCredentialStore>, BrowserCredentialStore>;

/// Copyable handle to the session manager provided by [`App`].
///
/// Call `get_value()` at the point of use; the handle itself is safe to
/// capture in view closures.
pub fn use_session_manager() -> StoredValue<AppSession, LocalStorage> {
    expect_context::<StoredValue<AppSession, LocalStorage>>()
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session manager, runs bootstrap once on mount, and re-reconciles
/// when another tab rewrites the stored token.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store = BrowserCredentialStore::new(config.token_storage_key.clone());
    let manager: AppSession = SessionManager::new(HttpApi::new(config.api_base_url.clone(), store.clone()), store);
    provide_session_context(manager.clone());

    #[cfg(feature = "hydrate")]
    {
        let booting = manager;
        leptos::task::spawn_local(async move { booting.bootstrap().await });

        let manager = use_session_manager();

        let watched_key = config.token_storage_key.clone();
        let _storage_listener = window_event_listener(leptos::ev::storage, move |ev| {
            // `key` is null when another tab cleared all of storage.
            if ev.key().is_some_and(|key| key != watched_key) {
                return;
            }
            let watching = manager.get_value();
            leptos::task::spawn_local(async move { watching.external_token_change().await });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/jobly.css"/>
        <Title text="Jobly"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                </Routes>
            </main>
        </Router>
    }
}
