//! Current-session state for the browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthFlow` is the only writer. `RouteGuard`, the header and the pages are
//! readers; they either read synchronously or subscribe with
//! [`SessionStore::observe`].
//!
//! DESIGN
//! ======
//! One store per app, passed around by handle (`Clone` shares the state).
//! Transitions replace the whole state, so the `is_logged <=> identity`
//! invariant holds by construction: `is_logged` is derived, not stored.
//! Each observer owns an unbounded channel, which keeps delivery ordered and
//! never coalesces two transitions into one item.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use futures::channel::mpsc;

use crate::api::types::SessionInformation;

/// Authenticated user's session payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionIdentity {
    /// Bearer token sent with every API request.
    pub token: String,
    /// Token scheme, usually `"Bearer"`.
    pub token_type: String,
    pub user_id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
}

impl From<SessionInformation> for SessionIdentity {
    fn from(info: SessionInformation) -> Self {
        Self {
            token: info.token,
            token_type: info.token_type,
            user_id: info.id,
            username: info.username,
            first_name: info.first_name,
            last_name: info.last_name,
            is_admin: info.admin,
        }
    }
}

/// Snapshot of the store: either logged out, or logged in as `identity`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    identity: Option<SessionIdentity>,
}

impl SessionState {
    #[must_use]
    pub fn logged_in(identity: SessionIdentity) -> Self {
        Self { identity: Some(identity) }
    }

    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_logged(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn identity(&self) -> Option<&SessionIdentity> {
        self.identity.as_ref()
    }

    /// True only for a logged-in admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(|i| i.is_admin)
    }
}

/// Push stream of [`SessionState`] snapshots returned by [`SessionStore::observe`].
pub type SessionUpdates = mpsc::UnboundedReceiver<SessionState>;

struct StoreInner {
    state: SessionState,
    observers: Vec<mpsc::UnboundedSender<SessionState>>,
}

/// Shared handle to the tab-wide session state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// A fresh store always starts logged out; nothing survives a reload.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                state: SessionState::logged_out(),
                observers: Vec::new(),
            })),
        }
    }

    /// Replace the state with a logged-in session and notify observers.
    pub fn log_in(&self, identity: SessionIdentity) {
        tracing::debug!(user_id = identity.user_id, admin = identity.is_admin, "session: log in");
        self.transition(SessionState::logged_in(identity));
    }

    /// Clear the session and notify observers. Safe to call when already
    /// logged out.
    pub fn log_out(&self) {
        tracing::debug!("session: log out");
        self.transition(SessionState::logged_out());
    }

    #[must_use]
    pub fn is_logged(&self) -> bool {
        self.lock().state.is_logged()
    }

    #[must_use]
    pub fn current_identity(&self) -> Option<SessionIdentity> {
        self.lock().state.identity.clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.lock().state.clone()
    }

    /// Subscribe to state changes.
    ///
    /// The stream yields the current state first, then one item per
    /// transition. It never ends while the store is alive.
    pub fn observe(&self) -> SessionUpdates {
        let (tx, rx) = mpsc::unbounded();
        let mut inner = self.lock();
        // Receiver is alive, send cannot fail.
        let _ = tx.unbounded_send(inner.state.clone());
        inner.observers.push(tx);
        rx
    }

    /// Number of live subscribers (pruned lazily on transition).
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.lock().observers.len()
    }

    fn transition(&self, next: SessionState) {
        let mut inner = self.lock();
        inner.state = next;
        let state = inner.state.clone();
        inner
            .observers
            .retain(|tx| tx.unbounded_send(state.clone()).is_ok());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
