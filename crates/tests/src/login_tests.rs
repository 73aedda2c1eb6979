use crate::common::*;
use client::{AuthContext, Rides};
use pretty_assertions::assert_eq;
use serde_json::Value;
use shared_types::{AppErrorKind, LoginForm};

fn form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_login_then_list_with_returned_token() {
    let backend = test_backend().await;
    let anonymous = backend.api_as(AuthContext::anonymous());

    let session = anonymous.login(&form("ops@fleet.test", "secret")).await.unwrap();
    assert_eq!(session.token, TOKEN);
    assert_eq!(session.username, "ops");
    assert_eq!(session.role, "admin");

    let api = anonymous.with_auth(AuthContext::from_session(session));
    assert!(api.auth().is_authenticated());
    let (table, _) = mount::<Rides>(&api, "").await;
    assert!(table.error().is_none());
    assert_eq!(table.page().unwrap().total_count, Some(25));
}

#[tokio::test]
async fn test_wrong_password_shows_server_message() {
    let backend = test_backend().await;
    let err = backend
        .api_as(AuthContext::anonymous())
        .login(&form("ops@fleet.test", "guess"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert_eq!(err.message, "Invalid email or password");
}

#[tokio::test]
async fn test_malformed_credentials_never_leave_the_client() {
    let backend = test_backend().await;
    let err = backend
        .api_as(AuthContext::anonymous())
        .login(&form("ops", ""))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field("email").is_some());
    assert!(err.field("password").is_some());
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_login_posts_credentials() {
    let backend = test_backend().await;
    backend
        .api_as(AuthContext::anonymous())
        .login(&form("ops@fleet.test", "secret"))
        .await
        .unwrap();

    let request = backend.last_request();
    assert_eq!(request.path, "/admin/login");
    let body = request.body.unwrap();
    assert_eq!(body["email"], Value::from("ops@fleet.test"));
    assert_eq!(body["password"], Value::from("secret"));
}
