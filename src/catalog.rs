//! Yoga session use cases: list, detail, create, update, delete, and
//! participation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sessions pages call into [`Catalog`]. Every operation needs a logged-in
//! identity; the route guard normally guarantees one, but a logout racing a
//! click still yields [`FlowError::NotLogged`] instead of an anonymous request.
//!
//! DESIGN
//! ======
//! Admin checks here only decide what [`SessionDetail::affordances`] offers.
//! The server enforces the real permissions.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::Notice;
use crate::api::types::{SessionPayload, Teacher, YogaSession};
use crate::api::{SessionApi, TeacherApi};
use crate::error::FlowError;
use crate::format;
use crate::guard::{Affordances, Route};
use crate::session::{SessionIdentity, SessionStore};
use crate::validate::SessionForm;

pub const CREATED: &str = "Session created !";
pub const UPDATED: &str = "Session updated !";
pub const DELETED: &str = "Session deleted !";

/// Everything the detail view renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionDetail {
    pub session: YogaSession,
    pub teacher: Teacher,
    /// The current user is in `session.users`.
    pub is_participant: bool,
    pub affordances: Affordances,
}

/// Session catalogue bound to one API and one store.
#[derive(Clone, Debug)]
pub struct Catalog<A> {
    api: A,
    store: SessionStore,
}

impl<A: SessionApi + TeacherApi> Catalog<A> {
    pub fn new(api: A, store: SessionStore) -> Self {
        Self { api, store }
    }

    /// # Errors
    ///
    /// [`FlowError::NotLogged`] without an identity, else API failures.
    pub async fn sessions(&self) -> Result<Vec<YogaSession>, FlowError> {
        self.identity()?;
        Ok(self.api.list_sessions().await?)
    }

    /// Teachers for the form's select.
    ///
    /// # Errors
    ///
    /// [`FlowError::NotLogged`] without an identity, else API failures.
    pub async fn teachers(&self) -> Result<Vec<Teacher>, FlowError> {
        self.identity()?;
        Ok(self.api.list_teachers().await?)
    }

    /// Session, its teacher, and what the current user may do with it.
    ///
    /// # Errors
    ///
    /// [`FlowError::NotLogged`] without an identity, else API failures.
    pub async fn detail(&self, id: u64) -> Result<SessionDetail, FlowError> {
        let identity = self.identity()?;
        let session = self.api.get_session(id).await?;
        let teacher = self.api.get_teacher(session.teacher_id).await?;
        Ok(SessionDetail {
            is_participant: session.has_participant(identity.user_id),
            affordances: Affordances::for_state(&self.store.snapshot()),
            session,
            teacher,
        })
    }

    /// Prefilled form for the update view.
    ///
    /// # Errors
    ///
    /// [`FlowError::NotLogged`] without an identity, else API failures.
    pub async fn edit_form(&self, id: u64) -> Result<SessionForm, FlowError> {
        self.identity()?;
        let session = self.api.get_session(id).await?;
        Ok(SessionForm {
            name: session.name,
            date: format::input_date(session.date),
            teacher_id: Some(session.teacher_id),
            description: session.description,
        })
    }

    /// # Errors
    ///
    /// [`FlowError::Invalid`] without sending anything when the form does not
    /// validate; otherwise as [`Catalog::sessions`].
    pub async fn create(&self, form: &SessionForm) -> Result<Notice, FlowError> {
        self.identity()?;
        let payload = payload(form, Vec::new())?;
        let created = self.api.create_session(&payload).await?;
        tracing::info!(session_id = created.id, "catalog: session created");
        Ok(Notice { message: CREATED, navigate_to: Route::Sessions })
    }

    /// Update name, date, teacher and description. Participants are kept as
    /// the server currently has them.
    ///
    /// # Errors
    ///
    /// As [`Catalog::create`].
    pub async fn update(&self, id: u64, form: &SessionForm) -> Result<Notice, FlowError> {
        self.identity()?;
        let errors = form.validate();
        if !errors.is_valid() {
            return Err(FlowError::Invalid(errors));
        }
        let current = self.api.get_session(id).await?;
        let payload = payload(form, current.users)?;
        self.api.update_session(id, &payload).await?;
        tracing::info!(session_id = id, "catalog: session updated");
        Ok(Notice { message: UPDATED, navigate_to: Route::Sessions })
    }

    /// # Errors
    ///
    /// As [`Catalog::sessions`].
    pub async fn delete(&self, id: u64) -> Result<Notice, FlowError> {
        self.identity()?;
        self.api.delete_session(id).await?;
        tracing::info!(session_id = id, "catalog: session deleted");
        Ok(Notice { message: DELETED, navigate_to: Route::Sessions })
    }

    /// Join the session as the current user and return the refreshed detail.
    ///
    /// # Errors
    ///
    /// As [`Catalog::detail`].
    pub async fn participate(&self, id: u64) -> Result<SessionDetail, FlowError> {
        let identity = self.identity()?;
        self.api.participate(id, identity.user_id).await?;
        self.detail(id).await
    }

    /// Leave the session and return the refreshed detail.
    ///
    /// # Errors
    ///
    /// As [`Catalog::detail`].
    pub async fn unparticipate(&self, id: u64) -> Result<SessionDetail, FlowError> {
        let identity = self.identity()?;
        self.api.unparticipate(id, identity.user_id).await?;
        self.detail(id).await
    }

    fn identity(&self) -> Result<SessionIdentity, FlowError> {
        self.store.current_identity().ok_or(FlowError::NotLogged)
    }
}

fn payload(form: &SessionForm, users: Vec<u64>) -> Result<SessionPayload, FlowError> {
    let errors = form.validate();
    match form.teacher_id {
        Some(teacher_id) if errors.is_valid() => Ok(SessionPayload {
            name: form.name.clone(),
            date: form.date.clone(),
            teacher_id,
            description: form.description.clone(),
            users,
        }),
        _ => Err(FlowError::Invalid(errors)),
    }
}
