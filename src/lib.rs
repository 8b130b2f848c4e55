//! # yoga-studio
//!
//! Client-side core of the Yoga Studio booking app: who is logged in, which
//! views they may enter, and the login/register/logout use cases that move
//! them between those states.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `client` crate renders these types with Leptos. Everything here is
//! framework-independent so it can be exercised natively against a stubbed
//! REST API.
//!
//! ```text
//! AuthFlow ──login──▶ AuthApi
//!    │ log_in / log_out
//!    ▼
//! SessionStore ──observe──▶ header, pages
//!    ▲
//! RouteGuard (live read on every navigation)
//! ```

pub mod account;
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod flow;
pub mod format;
pub mod guard;
pub mod session;
pub mod validate;

pub use account::{Account, AccountView};
pub use api::HttpApi;
pub use catalog::{Catalog, SessionDetail};
pub use config::ApiConfig;
pub use error::{ApiError, ConfigError, FlowError};
pub use flow::{AuthFlow, Outcome};
pub use guard::{Affordances, Navigation, Route, RouteGuard};
pub use session::{SessionIdentity, SessionState, SessionStore};
pub use validate::{FieldError, FormErrors, LoginForm, RegisterForm, SessionForm};

/// A transient confirmation message plus the view to show next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: &'static str,
    pub navigate_to: Route,
}
