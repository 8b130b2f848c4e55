mod support;

use serde_json::json;
use support::{InterceptServer, login_response, session_json, teacher_json};
use yoga_studio::api::SessionApi;
use yoga_studio::api::types::YogaSession;
use yoga_studio::{AuthFlow, Catalog, FlowError, LoginForm, Route, SessionForm, SessionStore};

async fn logged_in(server: &InterceptServer, user_id: u64, admin: bool) -> SessionStore {
    server.intercept("POST", "/api/auth/login", 200, login_response(user_id, admin));
    let store = SessionStore::new();
    let flow = AuthFlow::new(server.api(&store), store.clone());
    let form = LoginForm { email: "yoga@studio.com".to_owned(), password: "test!1234".to_owned() };
    flow.submit_login(&form).await;
    assert!(store.is_logged());
    store
}

fn stub_catalog(server: &InterceptServer) {
    server.intercept("GET", "/api/session", 200, json!([session_json(1, &[]), session_json(2, &[])]));
    server.intercept("GET", "/api/session/1", 200, session_json(1, &[]));
    server.intercept("GET", "/api/teacher", 200, json!([teacher_json(1, "Bob", "Marley"), teacher_json(2, "Hélène", "THIERCELIN")]));
    server.intercept("GET", "/api/teacher/1", 200, teacher_json(1, "Bob", "Marley"));
}

fn new_session() -> SessionForm {
    SessionForm {
        name: "Session 3".to_owned(),
        date: "2024-07-04".to_owned(),
        teacher_id: Some(1),
        description: "Session description".to_owned(),
    }
}

#[tokio::test]
async fn list_carries_bearer_token() {
    let server = InterceptServer::start().await;
    stub_catalog(&server);
    let store = logged_in(&server, 1, true).await;
    let catalog = Catalog::new(server.api(&store), store.clone());

    let sessions: Vec<YogaSession> = catalog.sessions().await.unwrap();

    assert_eq!(sessions.len(), 2);
    assert_eq!(yoga_studio::format::session_heading(sessions[0].date), "Session on July 7, 2024");
    assert_eq!(server.last("GET", "/api/session").authorization.as_deref(), Some("Bearer jwt-1"));
}

#[tokio::test]
async fn admin_creates_session() {
    let server = InterceptServer::start().await;
    stub_catalog(&server);
    server.intercept("POST", "/api/session", 200, session_json(3, &[]));
    let store = logged_in(&server, 1, true).await;
    let catalog = Catalog::new(server.api(&store), store.clone());

    let notice = catalog.create(&new_session()).await.unwrap();

    assert_eq!(notice.message, "Session created !");
    assert_eq!(notice.navigate_to, Route::Sessions);
    let body = server.last("POST", "/api/session").json();
    assert_eq!(body["name"], "Session 3");
    assert_eq!(body["date"], "2024-07-04");
    assert_eq!(body["teacher_id"], 1);
}

#[tokio::test]
async fn empty_form_sends_no_post() {
    let server = InterceptServer::start().await;
    let store = logged_in(&server, 1, true).await;
    let catalog = Catalog::new(server.api(&store), store.clone());

    let result = catalog.create(&SessionForm::default()).await;

    assert!(matches!(result, Err(FlowError::Invalid(_))));
    assert!(!server.calls().contains(&"POST /api/session".to_owned()));
}

#[tokio::test]
async fn admin_edits_session() {
    let server = InterceptServer::start().await;
    stub_catalog(&server);
    server.intercept("PUT", "/api/session/1", 200, session_json(1, &[]));
    let store = logged_in(&server, 1, true).await;
    let catalog = Catalog::new(server.api(&store), store.clone());

    let mut form = catalog.edit_form(1).await.unwrap();
    assert_eq!(form.name, "Session 1");
    form.name = "Session 4".to_owned();

    let notice = catalog.update(1, &form).await.unwrap();

    assert_eq!(notice.message, "Session updated !");
    assert_eq!(server.last("PUT", "/api/session/1").json()["name"], "Session 4");
}

#[tokio::test]
async fn admin_deletes_session() {
    let server = InterceptServer::start().await;
    stub_catalog(&server);
    server.intercept("DELETE", "/api/session/1", 200, session_json(1, &[]));
    let store = logged_in(&server, 1, true).await;
    let catalog = Catalog::new(server.api(&store), store.clone());

    let detail = catalog.detail(1).await.unwrap();
    assert!(detail.affordances.can_delete);

    let notice = catalog.delete(1).await.unwrap();
    assert_eq!(notice.message, "Session deleted !");
}

#[tokio::test]
async fn member_participates_then_cancels() {
    let server = InterceptServer::start().await;
    stub_catalog(&server);
    server.intercept("POST", "/api/session/1/participate/2", 200, json!({}));
    server.intercept("DELETE", "/api/session/1/participate/2", 200, json!({}));
    let store = logged_in(&server, 2, false).await;
    let catalog = Catalog::new(server.api(&store), store.clone());

    let detail = catalog.detail(1).await.unwrap();
    assert!(detail.affordances.can_participate);
    assert!(!detail.affordances.can_edit);
    assert!(!detail.is_participant);

    server.intercept("GET", "/api/session/1", 200, session_json(1, &[2]));
    assert!(catalog.participate(1).await.unwrap().is_participant);

    server.intercept("GET", "/api/session/1", 200, session_json(1, &[]));
    assert!(!catalog.unparticipate(1).await.unwrap().is_participant);

    let calls = server.calls();
    assert!(calls.contains(&"POST /api/session/1/participate/2".to_owned()));
    assert!(calls.contains(&"DELETE /api/session/1/participate/2".to_owned()));
}

#[tokio::test]
async fn logged_out_requests_carry_no_token() {
    let server = InterceptServer::start().await;
    stub_catalog(&server);
    let store = logged_in(&server, 1, true).await;
    let api = server.api(&store);

    store.log_out();
    let catalog = Catalog::new(api.clone(), store.clone());
    assert!(matches!(catalog.sessions().await, Err(FlowError::NotLogged)));

    api.list_sessions().await.unwrap();
    assert_eq!(server.last("GET", "/api/session").authorization, None);
}
