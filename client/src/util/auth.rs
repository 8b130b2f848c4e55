//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page installs the same guard so redirect behavior cannot
//! drift between routes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use yoga_studio::{Navigation, Route, RouteGuard};

use crate::state::auth::AuthContext;

/// Where the guard sends a visitor of `route`, or `None` to stay.
pub fn redirect_target(guard: &RouteGuard, route: Route) -> Option<String> {
    match guard.resolve(route) {
        Navigation::Enter(_) => None,
        Navigation::Redirect(target) => Some(target.path()),
    }
}

/// Re-check `route` on every session change and navigate away when denied.
pub fn install_auth_guard<F>(route: Route, auth: AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let guard = RouteGuard::new(auth.store());
    Effect::new(move || {
        // Track the session signal; the decision itself reads the store.
        auth.state.track();
        if let Some(target) = redirect_target(&guard, route) {
            navigate(&target, NavigateOptions::default());
        }
    });
}
