//! Reactive mirror of the session store for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the header and identity-dependent pages to coordinate
//! login redirects and admin-only rendering.
//!
//! DESIGN
//! ======
//! The store stays the single writer-side source of truth. A local task
//! drains `SessionStore::observe()` into an `RwSignal`, so views re-render on
//! every login and logout in the order they happened.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use yoga_studio::{Affordances, SessionState, SessionStore};

/// Store handle plus its reactive snapshot, provided via context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub store: StoredValue<SessionStore>,
    pub state: RwSignal<SessionState>,
}

impl AuthContext {
    /// Create the signal, start mirroring store transitions, and provide the
    /// context to descendants.
    pub fn provide(store: SessionStore) -> Self {
        let state = RwSignal::new(store.snapshot());

        #[cfg(feature = "csr")]
        {
            use futures::StreamExt;

            let mut updates = store.observe();
            leptos::task::spawn_local(async move {
                while let Some(next) = updates.next().await {
                    log::debug!("session changed: logged in = {}", next.is_logged());
                    state.set(next);
                }
            });
        }

        let ctx = Self { store: StoredValue::new(store), state };
        provide_context(ctx);
        ctx
    }

    pub fn store(&self) -> SessionStore {
        self.store.get_value()
    }

    pub fn affordances(&self) -> Affordances {
        Affordances::for_state(&self.state.get())
    }
}

/// Header text for the logged-in user.
pub fn greeting(state: &SessionState) -> Option<String> {
    state.identity().map(|i| yoga_studio::format::display_name(&i.first_name, &i.last_name))
}
