//! Login, registration and logout use cases.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views hand a form to [`AuthFlow`] and act on the returned [`Outcome`]:
//! navigate on success, show the error banner on failure. `AuthFlow` is the
//! only code that calls `SessionStore::log_in` / `log_out`.
//!
//! DESIGN
//! ======
//! Each submit is one attempt: `Idle -> Submitting -> Success | Failed`.
//! Attempts are numbered per form. When a response comes back for an attempt
//! that is no longer the latest, it is dropped without touching the store or
//! the error flag.
//!
//! ERROR HANDLING
//! ==============
//! Rejections and network failures both end as `on_error = true` plus a
//! `Failed` outcome. Login never says which credential was wrong;
//! registration surfaces the server's text when it sent one.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::api::AuthApi;
use crate::api::types::{LoginRequest, RegisterRequest};
use crate::error::ApiError;
use crate::guard::Route;
use crate::session::{SessionIdentity, SessionStore};
use crate::validate::{FormErrors, LoginForm, RegisterForm};

/// Generic failure text shown under the login and register forms.
pub const GENERIC_ERROR: &str = "An error occurred";

// =============================================================================
// OUTCOME
// =============================================================================

/// Result of one submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The form was invalid; no request was sent.
    Blocked(FormErrors),
    /// The attempt succeeded; the view should navigate to `navigate_to`.
    Success { navigate_to: Route },
    /// The attempt failed; `message` is shown under the form.
    Failed { message: String },
    /// A newer attempt started before this one finished; ignore it.
    Superseded,
}

// =============================================================================
// ATTEMPTS
// =============================================================================

#[derive(Debug, Default)]
struct Attempts {
    latest: AtomicU64,
    on_error: AtomicBool,
}

impl Attempts {
    /// Start a new attempt and clear the error flag.
    fn begin(&self) -> u64 {
        self.on_error.store(false, Ordering::SeqCst);
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, attempt: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == attempt
    }

    fn fail(&self) {
        self.on_error.store(true, Ordering::SeqCst);
    }

    fn on_error(&self) -> bool {
        self.on_error.load(Ordering::SeqCst)
    }
}

// =============================================================================
// AUTH FLOW
// =============================================================================

/// Drives the session store through the Auth API.
///
/// Clones share the attempt counters, so every view that holds a clone sees
/// the same `on_error` flags.
#[derive(Debug)]
pub struct AuthFlow<A> {
    api: A,
    store: SessionStore,
    login: Arc<Attempts>,
    register: Arc<Attempts>,
}

impl<A: Clone> Clone for AuthFlow<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            store: self.store.clone(),
            login: Arc::clone(&self.login),
            register: Arc::clone(&self.register),
        }
    }
}

impl<A: AuthApi> AuthFlow<A> {
    pub fn new(api: A, store: SessionStore) -> Self {
        Self { api, store, login: Arc::default(), register: Arc::default() }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Validate, send one `POST auth/login`, and log in on success.
    pub async fn submit_login(&self, form: &LoginForm) -> Outcome {
        let errors = form.validate();
        if !errors.is_valid() {
            return Outcome::Blocked(errors);
        }

        let attempt = self.login.begin();
        let request = LoginRequest { email: form.email.clone(), password: form.password.clone() };
        let result = self.api.login(&request).await;

        if !self.login.is_current(attempt) {
            tracing::debug!(attempt, "auth: discarding superseded login response");
            return Outcome::Superseded;
        }

        match result {
            Ok(info) => {
                let identity = SessionIdentity::from(info);
                tracing::info!(user_id = identity.user_id, admin = identity.is_admin, "auth: login succeeded");
                self.store.log_in(identity);
                Outcome::Success { navigate_to: Route::Sessions }
            }
            Err(e) => {
                log_rejection("login", &e);
                self.login.fail();
                Outcome::Failed { message: GENERIC_ERROR.to_owned() }
            }
        }
    }

    /// Validate and send one `POST auth/register`. Success leads to the
    /// login view; the user is not logged in.
    pub async fn submit_register(&self, form: &RegisterForm) -> Outcome {
        let errors = form.validate();
        if !errors.is_valid() {
            return Outcome::Blocked(errors);
        }

        let attempt = self.register.begin();
        let request = RegisterRequest {
            email: form.email.clone(),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            password: form.password.clone(),
        };
        let result = self.api.register(&request).await;

        if !self.register.is_current(attempt) {
            tracing::debug!(attempt, "auth: discarding superseded register response");
            return Outcome::Superseded;
        }

        match result {
            Ok(()) => {
                tracing::info!("auth: registration succeeded");
                Outcome::Success { navigate_to: Route::Login }
            }
            Err(e) => {
                log_rejection("register", &e);
                self.register.fail();
                let message = e.server_message().unwrap_or(GENERIC_ERROR).to_owned();
                Outcome::Failed { message }
            }
        }
    }

    /// Clear the session. No request is made.
    pub fn logout(&self) -> Route {
        self.store.log_out();
        Route::Home
    }

    pub fn login_on_error(&self) -> bool {
        self.login.on_error()
    }

    pub fn register_on_error(&self) -> bool {
        self.register.on_error()
    }
}

fn log_rejection(action: &str, error: &ApiError) {
    match error.status() {
        Some(status) => tracing::warn!(action, status, "auth: attempt rejected"),
        None => tracing::warn!(action, error = %error, "auth: attempt failed"),
    }
}
