//! Read-only session projection broadcast to the UI tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never see the token or profile details, and never hold a
//! writable handle to identity state. [`provide_session_context`] mirrors
//! every published snapshot into signals the tree reads; mutations go
//! through the manager's operations only.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use super::error_surface::SessionError;
use super::session::{Session, SessionManager, SessionSnapshot};
use crate::net::api::JobBoardApi;
use crate::util::credential_store::CredentialStore;

/// Identity and role flags only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionView {
    pub username: String,
    pub is_logged_in: bool,
    pub is_admin: bool,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self { username: session.username.clone(), is_logged_in: session.is_logged_in, is_admin: session.is_admin }
    }
}

impl From<&SessionSnapshot> for SessionView {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self::from(&snapshot.session)
    }
}

/// Reactive handles the UI reads. Both are read-only.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    pub view: ReadSignal<SessionView>,
    pub error: ReadSignal<Option<SessionError>>,
}

/// Mirror `manager` into signals and provide them, plus the manager
/// itself, to every descendant.
pub fn provide_session_context<A, S>(manager: SessionManager<A, S>) -> SessionContext
where
    A: JobBoardApi + 'static,
    S: CredentialStore + 'static,
{
    let snapshot = manager.snapshot();
    let (view, set_view) = signal(SessionView::from(&snapshot));
    let (error, set_error) = signal(snapshot.error);

    manager.subscribe(move |snapshot| {
        let next = SessionView::from(snapshot);
        if view.get_untracked() != next {
            set_view.set(next);
        }
        if error.get_untracked() != snapshot.error {
            set_error.set(snapshot.error.clone());
        }
    });

    let context = SessionContext { view, error };
    provide_context(context);
    provide_context(StoredValue::new_local(manager));
    context
}

/// The session context installed by the root component.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
