mod support;

use support::{InterceptServer, login_response, user_json};
use yoga_studio::{Account, AuthFlow, LoginForm, Navigation, Route, RouteGuard, SessionStore};

async fn logged_in(server: &InterceptServer, user_id: u64, admin: bool) -> SessionStore {
    server.intercept("POST", "/api/auth/login", 200, login_response(user_id, admin));
    let store = SessionStore::new();
    let flow = AuthFlow::new(server.api(&store), store.clone());
    let form = LoginForm { email: "john.doe@example.com".to_owned(), password: "test!1234".to_owned() };
    flow.submit_login(&form).await;
    store
}

#[tokio::test]
async fn member_sees_profile_and_delete_option() {
    let server = InterceptServer::start().await;
    server.intercept("GET", "/api/user/3", 200, user_json(3, false));
    let store = logged_in(&server, 3, false).await;
    let account = Account::new(server.api(&store), store.clone());

    let view = account.load().await.unwrap();

    assert_eq!(yoga_studio::format::display_name(&view.user.first_name, &view.user.last_name), "John DOE");
    assert_eq!(view.user.email, "john.doe@example.com");
    assert!(view.can_delete);
}

#[tokio::test]
async fn admin_sees_no_delete_option() {
    let server = InterceptServer::start().await;
    server.intercept("GET", "/api/user/1", 200, user_json(1, true));
    let store = logged_in(&server, 1, true).await;
    let account = Account::new(server.api(&store), store.clone());

    assert!(!account.load().await.unwrap().can_delete);
}

#[tokio::test]
async fn deleting_account_logs_out() {
    let server = InterceptServer::start().await;
    server.intercept("DELETE", "/api/user/3", 200, serde_json::json!({}));
    let store = logged_in(&server, 3, false).await;
    let account = Account::new(server.api(&store), store.clone());
    let guard = RouteGuard::new(store.clone());

    let notice = account.delete().await.unwrap();

    assert_eq!(notice.message, "Your account has been deleted !");
    assert_eq!(notice.navigate_to, Route::Home);
    assert!(!store.is_logged());
    assert_eq!(guard.resolve(Route::Me), Navigation::Redirect(Route::Login));
    assert_eq!(server.last("DELETE", "/api/user/3").authorization.as_deref(), Some("Bearer jwt-3"));
}

#[tokio::test]
async fn rejected_delete_keeps_session() {
    let server = InterceptServer::start().await;
    let store = logged_in(&server, 3, false).await;
    let account = Account::new(server.api(&store), store.clone());

    assert!(account.delete().await.is_err());
    assert!(store.is_logged());
}
