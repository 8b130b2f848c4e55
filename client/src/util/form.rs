//! Form helpers shared by the login, register and session form pages.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use yoga_studio::{FlowError, FormErrors, Outcome};

/// What a page does with the result of an auth submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    Navigate(String),
    ShowError(String),
    /// Blocked or superseded: leave the page as it is.
    Stay,
}

impl From<Outcome> for SubmitAction {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success { navigate_to } => Self::Navigate(navigate_to.path()),
            Outcome::Failed { message } => Self::ShowError(message),
            Outcome::Blocked(_) | Outcome::Superseded => Self::Stay,
        }
    }
}

impl SubmitAction {
    /// Error banner once a submit settles, given the one currently `shown`.
    /// Pages clear the banner when a submit starts; a superseded or blocked
    /// attempt leaves whatever the latest attempt put there.
    pub fn banner(&self, shown: Option<String>) -> Option<String> {
        match self {
            Self::ShowError(message) => Some(message.clone()),
            Self::Navigate(_) => None,
            Self::Stay => shown,
        }
    }
}

/// Message under a field once the user has typed something into it.
pub fn field_error(errors: &FormErrors, field: &str, touched: bool) -> Option<String> {
    if !touched {
        return None;
    }
    errors.get(field).map(|e| e.to_string())
}

/// Text for a failed catalogue or account action. Invalid forms are handled
/// by the disabled submit button, so they produce nothing.
pub fn flow_error_text(error: &FlowError) -> Option<String> {
    match error {
        FlowError::Invalid(_) => None,
        FlowError::NotLogged => Some("Please log in again".to_owned()),
        FlowError::Api(e) => Some(e.server_message().unwrap_or("An error occurred").to_owned()),
    }
}

/// Options for a select, plus the text to show when they failed to load.
pub fn select_options<T>(result: Result<Vec<T>, FlowError>) -> (Vec<T>, Option<String>) {
    match result {
        Ok(options) => (options, None),
        Err(e) => (Vec::new(), flow_error_text(&e)),
    }
}
