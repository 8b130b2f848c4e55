//! Error types shared by the REST client and the use-case flows.
//!
//! ERROR HANDLING
//! ==============
//! Auth failures stop at the `AuthFlow` boundary and become the `on_error`
//! flag; the remaining use cases (catalog, account) hand `FlowError` back to
//! the view, which shows a notice and stays put. Nothing here is fatal.

use crate::validate::FormErrors;

// =============================================================================
// API
// =============================================================================

/// Failure of a single REST request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        /// Error text from the response body, when the server sent one.
        message: Option<String>,
    },

    /// The request never completed (DNS, connection reset, CORS, ...).
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response whose body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// The endpoint URL could not be built from the configured base.
    #[error(transparent)]
    Endpoint(#[from] ConfigError),
}

impl ApiError {
    /// HTTP status for rejected requests.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Endpoint(_) => None,
        }
    }

    /// Server-provided error text, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) | Self::Endpoint(_) => None,
        }
    }
}

// =============================================================================
// FLOW
// =============================================================================

/// Failure of a use case that needs a logged-in user or valid input.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// The action requires an identity and the store is logged out.
    #[error("no user is logged in")]
    NotLogged,

    /// The form did not validate; nothing was sent.
    #[error("form is invalid: {0}")]
    Invalid(FormErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

// =============================================================================
// CONFIG
// =============================================================================

/// Errors produced while building an [`ApiConfig`](crate::config::ApiConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}
