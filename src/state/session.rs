//! Authoritative session state and the manager that reconciles it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three sources of truth feed one [`Session`]: the persisted [`Token`], the
//! identity claim decoded from it, and the profile fetched for that claim.
//! [`SessionManager`] is the only writer of token, session, and error state;
//! everything else reads published [`SessionSnapshot`]s.
//!
//! DESIGN
//! ======
//! Named [`SessionEvent`]s drive an explicit [`SessionPhase`] machine:
//!
//! ```text
//! Anonymous --bootstrap/login--> Resolving --profile ok--> Authenticated
//!                                    |
//!                                    +--any failure--> Failed --> Anonymous
//! ```
//!
//! Every identity-changing event bumps a generation counter before it
//! suspends. An asynchronous result whose generation is no longer current
//! is dropped, so a slow login cannot resurrect a session the user has
//! already logged out of.
//!
//! ERROR HANDLING
//! ==============
//! Bootstrap failures are swallowed (a stale token on reload is not a user
//! error). Login/signup failures land in the error surface and are also
//! returned to the caller so the invoking form can stay where it is.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use super::error_surface::{ErrorSurface, SessionError, SessionFailure};
use crate::net::api::JobBoardApi;
use crate::net::token::{self, Token};
use crate::net::types::{JobId, SignupInput, UserProfile};
use crate::util::credential_store::CredentialStore;

/// The UI-visible identity state.
///
/// `is_logged_in` is only ever `true` when token, claim, and profile agreed
/// on `username` (or, after signup, when the backend accepted the input).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
    pub applications: BTreeSet<JobId>,
    pub is_logged_in: bool,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_profile(profile: UserProfile) -> Self {
        Self {
            username: profile.username,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            is_admin: profile.is_admin,
            applications: profile.applications,
            is_logged_in: true,
        }
    }

    /// Optimistic session built from accepted signup input, minus the password.
    #[must_use]
    pub fn from_signup(input: &SignupInput) -> Self {
        Self {
            username: input.username.clone(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            is_admin: false,
            applications: BTreeSet::new(),
            is_logged_in: true,
        }
    }

    #[must_use]
    pub fn has_applied(&self, job_id: JobId) -> bool {
        self.applications.contains(&job_id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Anonymous,
    /// Token stored, profile fetch in flight.
    Resolving,
    Authenticated,
    /// Transient; collapses right after the error is recorded.
    Failed,
}

impl SessionPhase {
    /// Stable phase implied by a settled session.
    fn settled_for(session: &Session) -> Self {
        if session.is_logged_in { Self::Authenticated } else { Self::Anonymous }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Bootstrap,
    ExternalTokenChange,
    Login,
    Signup,
    Logout,
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bootstrap => "bootstrap",
            Self::ExternalTokenChange => "external_token_change",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Logout => "logout",
        };
        f.write_str(name)
    }
}

/// Everything observers receive on each publish.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session: Session,
    pub phase: SessionPhase,
    pub error: Option<SessionError>,
}

type Subscriber = Rc<dyn Fn(&SessionSnapshot)>;
type Navigator = Rc<dyn Fn(&str)>;

#[derive(Debug, Default)]
struct SessionState {
    session: Session,
    phase: SessionPhase,
    errors: ErrorSurface,
    /// Last token this manager wrote or observed in the store.
    token: Option<Token>,
    generation: u64,
}

impl SessionState {
    fn enter(&mut self, next: SessionPhase, event: SessionEvent) {
        if self.phase != next {
            log::debug!("session {event}: {:?} -> {next:?}", self.phase);
            self.phase = next;
        }
    }

    fn collapse(&mut self, event: SessionEvent) {
        self.session = Session::anonymous();
        self.enter(SessionPhase::Anonymous, event);
    }
}

struct Inner<A, S> {
    api: A,
    store: S,
    state: RefCell<SessionState>,
    subscribers: RefCell<Vec<Subscriber>>,
    navigator: RefCell<Option<Navigator>>,
}

/// Single-session orchestrator. Clones share the same state.
pub struct SessionManager<A, S> {
    inner: Rc<Inner<A, S>>,
}

impl<A, S> Clone for SessionManager<A, S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<A: JobBoardApi, S: CredentialStore> SessionManager<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                api,
                store,
                state: RefCell::new(SessionState::default()),
                subscribers: RefCell::new(Vec::new()),
                navigator: RefCell::new(None),
            }),
        }
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.inner.state.borrow().session.clone()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.inner.state.borrow().phase
    }

    #[must_use]
    pub fn error(&self) -> Option<SessionError> {
        self.inner.state.borrow().errors.get().cloned()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.inner.state.borrow();
        SessionSnapshot { session: state.session.clone(), phase: state.phase, error: state.errors.get().cloned() }
    }

    /// Register an observer, called synchronously after every state change.
    pub fn subscribe(&self, observer: impl Fn(&SessionSnapshot) + 'static) {
        self.inner.subscribers.borrow_mut().push(Rc::new(observer));
    }

    /// Register the callback logout uses to send the user home.
    pub fn set_navigator(&self, navigate: impl Fn(&str) + 'static) {
        *self.inner.navigator.borrow_mut() = Some(Rc::new(navigate));
    }

    /// Drop any stale failure; auth forms call this on mount.
    pub fn clear_error(&self) {
        if self.inner.state.borrow().errors.get().is_none() {
            return;
        }
        self.update(|st| st.errors.clear());
    }

    /// Restore a session from the persisted token on application start.
    pub async fn bootstrap(&self) {
        self.reconcile(SessionEvent::Bootstrap).await;
    }

    /// Re-reconcile after the stored token changed outside this manager
    /// (another tab logged in or out). No-op if the token is the one we know.
    pub async fn external_token_change(&self) {
        let known = self.inner.state.borrow().token.clone();
        if self.inner.store.get() == known {
            log::debug!("session {}: token unchanged", SessionEvent::ExternalTokenChange);
            return;
        }
        self.reconcile(SessionEvent::ExternalTokenChange).await;
    }

    /// Authenticate, persist the token, and load the profile for `username`.
    ///
    /// # Errors
    ///
    /// Returns the failure (also recorded in the error surface) if the
    /// credentials are rejected, the issued token does not name `username`,
    /// or the profile cannot be fetched. Token and session are left as they
    /// were. Returns [`SessionFailure::Superseded`] if a newer operation
    /// started while this one was in flight.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), SessionError> {
        let event = SessionEvent::Login;
        let generation = self.begin(event);

        let token = match self.inner.api.authenticate(username, password).await {
            Ok(token) => token,
            Err(err) => return Err(self.fail(generation, event, err.into())),
        };
        if !self.is_current(generation) {
            return Err(SessionFailure::Superseded.into());
        }

        // Persist first: the profile fetch carries the stored token as bearer.
        let previous = self.inner.state.borrow().token.clone();
        self.inner.store.set(&token);
        let claimed = token::decode(&token);
        self.update(|st| {
            st.token = Some(token);
            st.enter(SessionPhase::Resolving, event);
        });

        let profile = match claimed {
            Ok(claim) if claim.username == username => self
                .inner
                .api
                .fetch_profile(username)
                .await
                .map_err(SessionFailure::from)
                .and_then(|profile| matching(username, profile)),
            Ok(claim) => Err(SessionFailure::IdentityMismatch { expected: username.to_owned(), found: claim.username }),
            Err(err) => Err(err.into()),
        };
        if !self.is_current(generation) {
            return Err(SessionFailure::Superseded.into());
        }

        match profile {
            Ok(profile) => {
                self.update(|st| {
                    st.session = Session::from_profile(profile);
                    st.errors.clear();
                    st.enter(SessionPhase::Authenticated, event);
                });
                Ok(())
            }
            Err(failure) => {
                self.restore_token(previous);
                Err(self.fail(generation, event, failure))
            }
        }
    }

    /// Register a new account and optimistically log in as it.
    ///
    /// # Errors
    ///
    /// Returns the registration failure (also recorded in the error surface),
    /// leaving token and session untouched, or
    /// [`SessionFailure::Superseded`] if a newer operation started meanwhile.
    pub async fn signup(&self, input: &SignupInput) -> Result<(), SessionError> {
        let event = SessionEvent::Signup;
        let generation = self.begin(event);

        let token = match self.inner.api.register(input).await {
            Ok(token) => token,
            Err(err) => return Err(self.fail(generation, event, err.into())),
        };
        if !self.is_current(generation) {
            return Err(SessionFailure::Superseded.into());
        }

        self.inner.store.set(&token);
        self.update(|st| {
            st.token = Some(token);
            st.session = Session::from_signup(input);
            st.errors.clear();
            st.enter(SessionPhase::Authenticated, event);
        });
        Ok(())
    }

    /// Forget the session and send the user home. Cannot fail.
    pub fn logout(&self) {
        let event = SessionEvent::Logout;
        self.begin(event);
        self.inner.store.clear();
        self.update(|st| {
            st.token = None;
            st.errors.clear();
            st.collapse(event);
        });

        let navigator = self.inner.navigator.borrow().clone();
        if let Some(navigate) = navigator {
            navigate("/");
        }
    }

    /// Apply the logged-in user to `job_id` and record it in the session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionFailure::NotLoggedIn`] without a session, the API
    /// failure if the backend rejects the application, or
    /// [`SessionFailure::Superseded`] if the identity changed meanwhile.
    /// The error surface is not touched.
    pub async fn apply_to_job(&self, job_id: JobId) -> Result<(), SessionError> {
        let (username, generation) = {
            let state = self.inner.state.borrow();
            if !state.session.is_logged_in {
                return Err(SessionFailure::NotLoggedIn.into());
            }
            if state.session.has_applied(job_id) {
                return Ok(());
            }
            (state.session.username.clone(), state.generation)
        };

        let applied = self.inner.api.apply_to_job(&username, job_id).await?;
        if !self.is_current(generation) {
            return Err(SessionFailure::Superseded.into());
        }
        self.update(|st| {
            st.session.applications.insert(applied);
        });
        Ok(())
    }

    async fn reconcile(&self, event: SessionEvent) {
        let generation = self.begin(event);

        let Some(token) = self.inner.store.get() else {
            self.update(|st| {
                st.token = None;
                st.errors.clear();
                st.collapse(event);
            });
            return;
        };

        let claim = match token::decode(&token) {
            Ok(claim) => claim,
            Err(err) => {
                log::warn!("session {event}: ignoring stored token: {err}");
                self.update(|st| {
                    st.token = Some(token);
                    st.errors.clear();
                    st.collapse(event);
                });
                return;
            }
        };

        self.update(|st| {
            st.token = Some(token);
            st.errors.clear();
            // The stored token now names someone else, so the old identity no longer holds.
            if st.session.username != claim.username {
                st.session = Session::anonymous();
            }
            st.enter(SessionPhase::Resolving, event);
        });

        let profile = self.inner.api.fetch_profile(&claim.username).await;
        if !self.is_current(generation) {
            log::debug!("session {event}: superseded, dropping profile for {}", claim.username);
            return;
        }

        match profile.map_err(SessionFailure::from).and_then(|p| matching(&claim.username, p)) {
            Ok(profile) => self.update(|st| {
                st.session = Session::from_profile(profile);
                st.enter(SessionPhase::Authenticated, event);
            }),
            Err(failure) => {
                log::warn!("session {event}: falling back to anonymous: {failure}");
                self.update(|st| {
                    st.errors.clear();
                    st.collapse(event);
                });
            }
        }
    }

    fn begin(&self, event: SessionEvent) -> u64 {
        let mut state = self.inner.state.borrow_mut();
        state.generation += 1;
        log::debug!("session {event} (generation {})", state.generation);
        state.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.inner.state.borrow().generation == generation
    }

    fn restore_token(&self, previous: Option<Token>) {
        match &previous {
            Some(token) => self.inner.store.set(token),
            None => self.inner.store.clear(),
        }
        self.inner.state.borrow_mut().token = previous;
    }

    /// Record a login/signup failure if it is still current, then hand it back.
    fn fail(&self, generation: u64, event: SessionEvent, failure: SessionFailure) -> SessionError {
        let error = SessionError::from(failure);
        log::warn!("session {event} failed: {error}");
        if !self.is_current(generation) {
            return error;
        }

        let recorded = error.clone();
        self.update(|st| {
            st.errors.set(recorded);
            st.enter(SessionPhase::Failed, event);
        });
        self.update(|st| {
            let settled = SessionPhase::settled_for(&st.session);
            st.enter(settled, event);
        });
        error
    }

    fn update(&self, mutate: impl FnOnce(&mut SessionState)) {
        mutate(&mut self.inner.state.borrow_mut());
        self.publish();
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        let subscribers = self.inner.subscribers.borrow().clone();
        for notify in subscribers {
            notify(&snapshot);
        }
    }
}

fn matching(username: &str, profile: UserProfile) -> Result<UserProfile, SessionFailure> {
    if profile.username == username {
        Ok(profile)
    } else {
        Err(SessionFailure::IdentityMismatch { expected: username.to_owned(), found: profile.username })
    }
}
