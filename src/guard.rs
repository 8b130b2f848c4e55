//! Routes, the authentication guard, and admin affordances.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SPA router asks [`RouteGuard::resolve`] before rendering any view. The
//! answer is computed from a live [`SessionStore`] read every time, so a
//! logout blocks the very next protected navigation.
//!
//! Admin status never affects route access here. It only drives which
//! buttons a view shows, via [`Affordances`].

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::fmt;

use crate::session::{SessionState, SessionStore};

/// Every view the app can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Sessions,
    SessionDetail(u64),
    SessionCreate,
    SessionUpdate(u64),
    Me,
    NotFound,
}

impl Route {
    /// Map a browser path to a route. Unknown paths become [`Route::NotFound`].
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self::lookup(path).unwrap_or(Self::NotFound)
    }

    fn lookup(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["sessions"] => Self::Sessions,
            ["sessions", "create"] => Self::SessionCreate,
            ["sessions", "detail", id] => Self::SessionDetail(id.parse().ok()?),
            ["sessions", "update", id] => Self::SessionUpdate(id.parse().ok()?),
            ["me"] => Self::Me,
            ["404"] => Self::NotFound,
            _ => return None,
        };
        Some(route)
    }

    /// Canonical browser path.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Sessions => "/sessions".to_owned(),
            Self::SessionDetail(id) => format!("/sessions/detail/{id}"),
            Self::SessionCreate => "/sessions/create".to_owned(),
            Self::SessionUpdate(id) => format!("/sessions/update/{id}"),
            Self::Me => "/me".to_owned(),
            Self::NotFound => "/404".to_owned(),
        }
    }

    /// Views that require a logged-in user.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Sessions | Self::SessionDetail(_) | Self::SessionCreate | Self::SessionUpdate(_) | Self::Me
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Router instruction produced by the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Render the requested view.
    Enter(Route),
    /// Do not render; go here instead.
    Redirect(Route),
}

impl Navigation {
    /// The route that ends up on screen.
    #[must_use]
    pub fn target(&self) -> Route {
        match self {
            Self::Enter(route) | Self::Redirect(route) => *route,
        }
    }
}

/// Gate evaluated before entering any protected view.
#[derive(Clone, Debug)]
pub struct RouteGuard {
    store: SessionStore,
}

impl RouteGuard {
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// True iff someone is logged in right now. The route itself does not
    /// matter to the decision; callers only ask for protected routes.
    #[must_use]
    pub fn can_enter(&self, _route: &Route) -> bool {
        self.store.is_logged()
    }

    /// Decide what the router should render for `route`.
    #[must_use]
    pub fn resolve(&self, route: Route) -> Navigation {
        if route.is_protected() && !self.can_enter(&route) {
            tracing::debug!(%route, "guard: redirecting anonymous user to login");
            return Navigation::Redirect(Route::Login);
        }
        Navigation::Enter(route)
    }

    /// [`resolve`](Self::resolve) for a raw path. Unknown paths are sent to
    /// the not-found view rather than rendered in place.
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> Navigation {
        match Route::lookup(path) {
            Some(route) => self.resolve(route),
            None => Navigation::Redirect(Route::NotFound),
        }
    }
}

/// Which admin-only or member-only controls a view may show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Affordances {
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_participate: bool,
}

impl Affordances {
    #[must_use]
    pub fn for_state(state: &SessionState) -> Self {
        let admin = state.is_admin();
        Self {
            can_create: admin,
            can_edit: admin,
            can_delete: admin,
            can_participate: state.is_logged() && !admin,
        }
    }
}
