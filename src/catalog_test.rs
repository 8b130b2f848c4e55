use super::*;
use crate::error::ApiError;
use std::sync::Mutex;
use time::macros::datetime;

// =========================================================================
// FakeStudio
// =========================================================================

/// In-memory sessions and teachers; records every call as `METHOD path`.
struct FakeStudio {
    sessions: Mutex<Vec<YogaSession>>,
    teachers: Vec<Teacher>,
    calls: Mutex<Vec<String>>,
    payloads: Mutex<Vec<SessionPayload>>,
}

impl FakeStudio {
    fn new() -> Self {
        Self {
            sessions: Mutex::new(vec![session(1, &[]), session(2, &[4])]),
            teachers: vec![teacher(1, "Bob", "Marley"), teacher(2, "Hélène", "THIERCELIN")],
            calls: Mutex::new(Vec::new()),
            payloads: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn find(&self, id: u64) -> Result<YogaSession, ApiError> {
        self.sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(ApiError::Rejected { status: 404, message: None })
    }

    fn edit_users(&self, id: u64, f: impl FnOnce(&mut Vec<u64>)) {
        let mut sessions = self.sessions.lock().unwrap();
        if let Some(s) = sessions.iter_mut().find(|s| s.id == id) {
            f(&mut s.users);
        }
    }
}

fn session(id: u64, users: &[u64]) -> YogaSession {
    YogaSession {
        id,
        name: format!("Session {id}"),
        date: datetime!(2024-07-02 17:30:00),
        teacher_id: 1,
        description: format!("Description {id}"),
        users: users.to_vec(),
        created_at: None,
        updated_at: None,
    }
}

fn teacher(id: u64, first_name: &str, last_name: &str) -> Teacher {
    Teacher {
        id,
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        created_at: None,
        updated_at: None,
    }
}

#[async_trait::async_trait(?Send)]
impl<'a> SessionApi for &'a FakeStudio {
    async fn list_sessions(&self) -> Result<Vec<YogaSession>, ApiError> {
        self.record("GET session".to_owned());
        Ok(self.sessions.lock().unwrap().clone())
    }

    async fn get_session(&self, id: u64) -> Result<YogaSession, ApiError> {
        self.record(format!("GET session/{id}"));
        self.find(id)
    }

    async fn create_session(&self, payload: &SessionPayload) -> Result<YogaSession, ApiError> {
        self.record("POST session".to_owned());
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(session(3, &[]))
    }

    async fn update_session(&self, id: u64, payload: &SessionPayload) -> Result<YogaSession, ApiError> {
        self.record(format!("PUT session/{id}"));
        self.payloads.lock().unwrap().push(payload.clone());
        self.find(id)
    }

    async fn delete_session(&self, id: u64) -> Result<(), ApiError> {
        self.record(format!("DELETE session/{id}"));
        self.sessions.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }

    async fn participate(&self, id: u64, user_id: u64) -> Result<(), ApiError> {
        self.record(format!("POST session/{id}/participate/{user_id}"));
        self.edit_users(id, |users| users.push(user_id));
        Ok(())
    }

    async fn unparticipate(&self, id: u64, user_id: u64) -> Result<(), ApiError> {
        self.record(format!("DELETE session/{id}/participate/{user_id}"));
        self.edit_users(id, |users| users.retain(|u| *u != user_id));
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl<'a> TeacherApi for &'a FakeStudio {
    async fn list_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        self.record("GET teacher".to_owned());
        Ok(self.teachers.clone())
    }

    async fn get_teacher(&self, id: u64) -> Result<Teacher, ApiError> {
        self.record(format!("GET teacher/{id}"));
        self.teachers
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(ApiError::Rejected { status: 404, message: None })
    }
}

fn logged_in(user_id: u64, is_admin: bool) -> SessionStore {
    let store = SessionStore::new();
    store.log_in(SessionIdentity {
        token: "jwt".to_owned(),
        token_type: "Bearer".to_owned(),
        user_id,
        username: "yoga@studio.com".to_owned(),
        first_name: "Yoga".to_owned(),
        last_name: "Studio".to_owned(),
        is_admin,
    });
    store
}

fn valid_form() -> SessionForm {
    SessionForm {
        name: "Session 3".to_owned(),
        date: "2024-07-04".to_owned(),
        teacher_id: Some(1),
        description: "Session description".to_owned(),
    }
}

// =========================================================================
// reads
// =========================================================================

#[tokio::test]
async fn anonymous_calls_are_refused_without_requests() {
    let api = FakeStudio::new();
    let catalog = Catalog::new(&api, SessionStore::new());

    assert!(matches!(catalog.sessions().await, Err(FlowError::NotLogged)));
    assert!(matches!(catalog.participate(1).await, Err(FlowError::NotLogged)));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn sessions_and_teachers_are_listed() {
    let api = FakeStudio::new();
    let catalog = Catalog::new(&api, logged_in(1, true));

    assert_eq!(catalog.sessions().await.unwrap().len(), 2);
    let teachers = catalog.teachers().await.unwrap();
    assert_eq!(teachers[0].full_name(), "Bob Marley");
}

#[tokio::test]
async fn detail_for_admin_offers_admin_controls() {
    let api = FakeStudio::new();
    let catalog = Catalog::new(&api, logged_in(1, true));

    let detail = catalog.detail(1).await.unwrap();

    assert_eq!(detail.teacher.id, 1);
    assert!(!detail.is_participant);
    assert!(detail.affordances.can_delete);
    assert!(!detail.affordances.can_participate);
    assert_eq!(api.calls(), ["GET session/1", "GET teacher/1"]);
}

#[tokio::test]
async fn detail_marks_participation_for_member() {
    let api = FakeStudio::new();
    let catalog = Catalog::new(&api, logged_in(4, false));

    let detail = catalog.detail(2).await.unwrap();

    assert!(detail.is_participant);
    assert!(detail.affordances.can_participate);
    assert!(!detail.affordances.can_delete);
}

#[tokio::test]
async fn edit_form_is_prefilled_from_session() {
    let api = FakeStudio::new();
    let catalog = Catalog::new(&api, logged_in(1, true));

    let form = catalog.edit_form(1).await.unwrap();

    assert_eq!(form.name, "Session 1");
    assert_eq!(form.date, "2024-07-02");
    assert_eq!(form.teacher_id, Some(1));
}

// =========================================================================
// writes
// =========================================================================

#[tokio::test]
async fn create_with_empty_form_sends_nothing() {
    let api = FakeStudio::new();
    let catalog = Catalog::new(&api, logged_in(1, true));

    let result = catalog.create(&SessionForm::default()).await;

    let Err(FlowError::Invalid(errors)) = result else { panic!("expected Invalid") };
    assert_eq!(errors.len(), 4);
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn create_sends_one_post_and_returns_notice() {
    let api = FakeStudio::new();
    let catalog = Catalog::new(&api, logged_in(1, true));

    let notice = catalog.create(&valid_form()).await.unwrap();

    assert_eq!(notice, Notice { message: "Session created !", navigate_to: Route::Sessions });
    assert_eq!(api.calls(), ["POST session"]);
    assert_eq!(api.payloads.lock().unwrap()[0].date, "2024-07-04");
}

#[tokio::test]
async fn update_keeps_current_participants() {
    let api = FakeStudio::new();
    let catalog = Catalog::new(&api, logged_in(1, true));

    let notice = catalog.update(2, &valid_form()).await.unwrap();

    assert_eq!(notice.message, "Session updated !");
    assert_eq!(api.calls(), ["GET session/2", "PUT session/2"]);
    assert_eq!(api.payloads.lock().unwrap()[0].users, vec![4]);
}

#[tokio::test]
async fn delete_returns_notice_and_sessions_route() {
    let api = FakeStudio::new();
    let catalog = Catalog::new(&api, logged_in(1, true));

    let notice = catalog.delete(1).await.unwrap();

    assert_eq!(notice, Notice { message: "Session deleted !", navigate_to: Route::Sessions });
    assert_eq!(catalog.sessions().await.unwrap().len(), 1);
}

#[tokio::test]
async fn participation_toggles_with_current_user_id() {
    let api = FakeStudio::new();
    let catalog = Catalog::new(&api, logged_in(7, false));

    let joined = catalog.participate(1).await.unwrap();
    assert!(joined.is_participant);

    let left = catalog.unparticipate(1).await.unwrap();
    assert!(!left.is_participant);

    let calls = api.calls();
    assert!(calls.contains(&"POST session/1/participate/7".to_owned()));
    assert!(calls.contains(&"DELETE session/1/participate/7".to_owned()));
}

#[tokio::test]
async fn api_failure_is_surfaced() {
    let api = FakeStudio::new();
    let catalog = Catalog::new(&api, logged_in(1, true));

    let result = catalog.detail(99).await;

    assert!(matches!(result, Err(FlowError::Api(ApiError::Rejected { status: 404, .. }))));
}
