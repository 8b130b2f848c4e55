//! REST wiring for the SPA.
//!
//! The API is served by the page's own origin under `/api/`, the same
//! layout the dev proxy uses. Native builds (tests) fall back to
//! `YOGA_API_URL`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::{LocalStorage, StoredValue};
use yoga_studio::{Account, ApiConfig, AuthFlow, Catalog, ConfigError, HttpApi, SessionStore};

/// Use cases shared by every page, all bound to one store.
#[derive(Clone, Debug)]
pub struct Services {
    pub auth: AuthFlow<HttpApi>,
    pub catalog: Catalog<HttpApi>,
    pub account: Account<HttpApi>,
}

impl Services {
    pub fn new(config: ApiConfig, store: &SessionStore) -> Self {
        let api = HttpApi::new(config, store.clone());
        Self {
            auth: AuthFlow::new(api.clone(), store.clone()),
            catalog: Catalog::new(api.clone(), store.clone()),
            account: Account::new(api, store.clone()),
        }
    }
}

/// How pages reach [`Services`] through context. Local storage because the
/// REST futures are not `Send`.
pub type ServicesHandle = StoredValue<Services, LocalStorage>;

/// API root for this page.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidUrl`] if the origin (or `YOGA_API_URL`
/// natively) is not an absolute URL.
pub fn api_config() -> Result<ApiConfig, ConfigError> {
    #[cfg(feature = "csr")]
    {
        match web_sys::window().and_then(|w| w.location().origin().ok()) {
            Some(origin) => ApiConfig::for_origin(&origin),
            None => ApiConfig::from_env(),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        ApiConfig::from_env()
    }
}

/// Text shown instead of the app when no API root can be built.
pub fn config_error_message(error: &ConfigError) -> String {
    format!("Yoga Studio is misconfigured: {error}")
}
