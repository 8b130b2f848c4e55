//! reqwest implementation of the API traits.
//!
//! Every request reads the store at send time and attaches
//! `Authorization: <type> <token>` when someone is logged in. Responses are
//! read as text first so error bodies can be surfaced; pure parsing lives in
//! free functions for testability.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx statuses become [`ApiError::Rejected`] with the server's
//! `{"message": ...}` text, or the raw body when it is not JSON. Endpoints
//! whose success body carries nothing useful (register, delete, participate)
//! never parse it.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use super::types::{
    LoginRequest, MessageResponse, RegisterRequest, SessionInformation, SessionPayload, Teacher, User, YogaSession,
};
use super::{AuthApi, SessionApi, TeacherApi, UserApi};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::session::{SessionIdentity, SessionStore};

const DEFAULT_TOKEN_TYPE: &str = "Bearer";

// =============================================================================
// CLIENT
// =============================================================================

/// REST client bound to one API root and one session store.
#[derive(Clone, Debug)]
pub struct HttpApi {
    http: reqwest::Client,
    config: ApiConfig,
    store: SessionStore,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ApiConfig, store: SessionStore) -> Self {
        Self { http: reqwest::Client::new(), config, store }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.config.endpoint(path)?;
        tracing::debug!(%method, %url, "api: request");
        let mut request = self.http.request(method, url);
        if let Some(value) = authorization(self.store.current_identity().as_ref()) {
            request = request.header(AUTHORIZATION, value);
        }
        Ok(request)
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        ensure_success(status, body)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send(request).await?;
        parse_body(&body)
    }
}

// =============================================================================
// TRAIT IMPLS
// =============================================================================

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<SessionInformation, ApiError> {
        self.fetch(self.request(Method::POST, "auth/login")?.json(request)).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "auth/register")?.json(request)).await?;
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl UserApi for HttpApi {
    async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        self.fetch(self.request(Method::GET, &user_path(id))?).await
    }

    async fn delete_user(&self, id: u64) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &user_path(id))?).await?;
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl SessionApi for HttpApi {
    async fn list_sessions(&self) -> Result<Vec<YogaSession>, ApiError> {
        self.fetch(self.request(Method::GET, "session")?).await
    }

    async fn get_session(&self, id: u64) -> Result<YogaSession, ApiError> {
        self.fetch(self.request(Method::GET, &session_path(id))?).await
    }

    async fn create_session(&self, payload: &SessionPayload) -> Result<YogaSession, ApiError> {
        self.fetch(self.request(Method::POST, "session")?.json(payload)).await
    }

    async fn update_session(&self, id: u64, payload: &SessionPayload) -> Result<YogaSession, ApiError> {
        self.fetch(self.request(Method::PUT, &session_path(id))?.json(payload)).await
    }

    async fn delete_session(&self, id: u64) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &session_path(id))?).await?;
        Ok(())
    }

    async fn participate(&self, id: u64, user_id: u64) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, &participate_path(id, user_id))?).await?;
        Ok(())
    }

    async fn unparticipate(&self, id: u64, user_id: u64) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &participate_path(id, user_id))?).await?;
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl TeacherApi for HttpApi {
    async fn list_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        self.fetch(self.request(Method::GET, "teacher")?).await
    }

    async fn get_teacher(&self, id: u64) -> Result<Teacher, ApiError> {
        self.fetch(self.request(Method::GET, &teacher_path(id))?).await
    }
}

// =============================================================================
// PATHS
// =============================================================================

fn user_path(id: u64) -> String {
    format!("user/{id}")
}

fn session_path(id: u64) -> String {
    format!("session/{id}")
}

fn participate_path(id: u64, user_id: u64) -> String {
    format!("session/{id}/participate/{user_id}")
}

fn teacher_path(id: u64) -> String {
    format!("teacher/{id}")
}

// =============================================================================
// PARSING
// =============================================================================

/// `Authorization` header value for the current identity, if it has a token.
fn authorization(identity: Option<&SessionIdentity>) -> Option<String> {
    let identity = identity?;
    if identity.token.is_empty() {
        return None;
    }
    let scheme = if identity.token_type.trim().is_empty() { DEFAULT_TOKEN_TYPE } else { identity.token_type.trim() };
    Some(format!("{scheme} {}", identity.token))
}

fn ensure_success(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        return Ok(body);
    }
    tracing::debug!(status, "api: request rejected");
    Err(ApiError::Rejected { status, message: rejection_message(&body) })
}

/// `{"message": "..."}` text, else the trimmed raw body, else nothing. A
/// blank JSON message counts as nothing.
fn rejection_message(body: &str) -> Option<String> {
    if let Ok(MessageResponse { message }) = serde_json::from_str(body) {
        let message = message.trim();
        return (!message.is_empty()).then(|| message.to_owned());
    }
    let raw = body.trim();
    (!raw.is_empty()).then(|| raw.to_owned())
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
