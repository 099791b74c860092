//! Durable storage for the single bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager is the only writer. The HTTP client reads the same
//! store to attach the bearer credential. Storage is assumed always
//! available: any browser failure (no window, storage disabled, quota)
//! degrades to "no token" instead of an error.

#[cfg(test)]
#[path = "credential_store_test.rs"]
mod credential_store_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::token::Token;

/// Pure key-value persistence for one token. No validation of contents.
pub trait CredentialStore {
    /// Stored token, or `None` when absent, blank, or unreadable.
    fn get(&self) -> Option<Token>;
    fn set(&self, token: &Token);
    fn clear(&self);
}

/// `localStorage`-backed store; survives page reloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserCredentialStore {
    key: String,
}

impl BrowserCredentialStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for BrowserCredentialStore {
    fn get(&self) -> Option<Token> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(&self.key).ok().flatten()?;
            Some(Token::new(raw)).filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &Token) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.set_item(&self.key, token.as_str()).is_err() {
                log::warn!("failed to persist token under {}", self.key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage()
                && storage.remove_item(&self.key).is_err()
            {
                log::warn!("failed to remove token under {}", self.key);
            }
        }
    }
}

/// In-process store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentialStore {
    slot: Rc<RefCell<Option<Token>>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn with_token(token: Token) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(token))) }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<Token> {
        self.slot.borrow().clone().filter(|t| !t.is_empty())
    }

    fn set(&self, token: &Token) {
        *self.slot.borrow_mut() = Some(token.clone());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
