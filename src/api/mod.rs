//! Yoga Studio REST API: wire types, the async traits the use cases depend
//! on, and the reqwest-backed implementation.
//!
//! DESIGN
//! ======
//! One trait per server resource so each use case asks only for what it
//! calls, and tests fake a single resource at a time. The traits are
//! `?Send` because browser fetch futures are not `Send`.

pub mod types;

mod http;

pub use http::HttpApi;

use crate::error::ApiError;
use types::{LoginRequest, RegisterRequest, SessionInformation, SessionPayload, Teacher, User, YogaSession};

// =============================================================================
// AUTH
// =============================================================================

/// `auth/*` endpoints.
#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a session identity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for bad credentials, or a transport error.
    async fn login(&self, request: &LoginRequest) -> Result<SessionInformation, ApiError>;

    /// Create an account. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] carrying the server text when the email
    /// is already taken, or a transport error.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
}

// =============================================================================
// USER
// =============================================================================

/// `user/{id}` endpoints.
#[async_trait::async_trait(?Send)]
pub trait UserApi {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    async fn get_user(&self, id: u64) -> Result<User, ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    async fn delete_user(&self, id: u64) -> Result<(), ApiError>;
}

// =============================================================================
// SESSION
// =============================================================================

/// `session/*` endpoints.
#[async_trait::async_trait(?Send)]
pub trait SessionApi {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    async fn list_sessions(&self) -> Result<Vec<YogaSession>, ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    async fn get_session(&self, id: u64) -> Result<YogaSession, ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    async fn create_session(&self, payload: &SessionPayload) -> Result<YogaSession, ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    async fn update_session(&self, id: u64, payload: &SessionPayload) -> Result<YogaSession, ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    async fn delete_session(&self, id: u64) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    async fn participate(&self, id: u64, user_id: u64) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    async fn unparticipate(&self, id: u64, user_id: u64) -> Result<(), ApiError>;
}

// =============================================================================
// TEACHER
// =============================================================================

/// `teacher/*` endpoints.
#[async_trait::async_trait(?Send)]
pub trait TeacherApi {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    async fn list_teachers(&self) -> Result<Vec<Teacher>, ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    async fn get_teacher(&self, id: u64) -> Result<Teacher, ApiError>;
}
