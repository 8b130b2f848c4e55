//! REST endpoint configuration.
//!
//! Native callers read `YOGA_API_URL`; the SPA builds the URL from the page
//! origin. Either way the base always ends in `/` so endpoint paths such as
//! `auth/login` join underneath it instead of replacing its last segment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use reqwest::Url;

use crate::error::ConfigError;

pub const API_URL_ENV: &str = "YOGA_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/";

/// Where the Yoga Studio REST API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Build a config from an absolute base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `raw` is not an absolute
    /// `http`/`https` URL.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl { url: raw.to_owned(), reason };

        let mut base_url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", base_url.scheme())));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    /// Read the base URL from `YOGA_API_URL`, falling back to the local
    /// development server.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the variable is set to
    /// something that is not an absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(API_URL_ENV)
    }

    fn from_env_var(key: &str) -> Result<Self, ConfigError> {
        match std::env::var(key) {
            Ok(raw) if !raw.trim().is_empty() => Self::new(&raw),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    /// API root served by the page's own origin: `{origin}/api/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `origin` is not an absolute URL.
    pub fn for_origin(origin: &str) -> Result<Self, ConfigError> {
        Self::new(&format!("{}/api/", origin.trim_end_matches('/')))
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for a relative endpoint path such as `session/1`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `path` cannot be joined onto
    /// the base.
    pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ConfigError::InvalidUrl { url: path.to_owned(), reason: e.to_string() })
    }
}
