use std::sync::Arc;

use super::*;
use crate::gateway::{Gateway, Method};
use crate::session::{CredentialStore, LOGIN_ROUTE, SessionPhase};
use crate::test_support::{BASE_URL, CANDIDATE_JSON, FakeTransport, session_with};
use crate::types::SessionUser;

fn guarded(session: &Session) -> Gateway<Arc<FakeTransport>> {
    Gateway::new(BASE_URL, Arc::new(FakeTransport::new()))
        .with_interceptor(BearerAuth::new(session.clone()))
        .with_interceptor(SessionExpiry::new(session.clone()))
}

fn auth_header(gw: &Gateway<Arc<FakeTransport>>, path: &str) -> Option<String> {
    gw.transport().sent_to(path).last().and_then(|request| {
        request
            .headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(AUTHORIZATION))
            .map(|(_, value)| value.clone())
    })
}

// =============================================================================
// is_login_path
// =============================================================================

#[test]
fn login_path_detection() {
    assert!(is_login_path("auth/login/"));
    assert!(is_login_path("/auth/login/"));
    assert!(is_login_path("auth/login"));
    assert!(!is_login_path("auth/logout/"));
    assert!(!is_login_path("auth/login-history/"));
    assert!(!is_login_path("auth/login/extra/"));
    assert!(!is_login_path("auth/me/"));
    assert!(!is_login_path("jobs/"));
}

// =============================================================================
// BearerAuth
// =============================================================================

#[tokio::test]
async fn bearer_header_carries_exact_credential() {
    let (session, _, _) = session_with(None);
    let gw = guarded(&session);
    gw.transport().respond(Method::Get, "jobs/", 200, "[]");

    for token in ["abc123", "x.y.z", "tok with spaces"] {
        session.login(token);
        gw.execute(ApiRequest::get("jobs/")).await.unwrap();
        assert_eq!(auth_header(&gw, "jobs/"), Some(format!("Bearer {token}")));
    }
}

#[tokio::test]
async fn anonymous_requests_carry_no_authorization() {
    let (session, _, _) = session_with(None);
    let gw = guarded(&session);
    gw.transport().respond(Method::Get, "jobs/", 200, "[]");

    gw.execute(ApiRequest::get("jobs/")).await.unwrap();

    assert_eq!(auth_header(&gw, "jobs/"), None);
}

#[tokio::test]
async fn logout_stops_header_injection() {
    let (session, _, _) = session_with(Some("abc123"));
    let gw = guarded(&session);
    gw.transport().respond(Method::Get, "jobs/", 200, "[]");

    session.logout();
    gw.execute(ApiRequest::get("jobs/")).await.unwrap();

    assert_eq!(auth_header(&gw, "jobs/"), None);
}

// =============================================================================
// SessionExpiry
// =============================================================================

#[tokio::test]
async fn unauthorized_on_resource_expires_session_once() {
    let (session, store, navigator) = session_with(Some("abc123"));
    let gw = guarded(&session);
    gw.transport()
        .respond(Method::Get, "auth/me/", 200, CANDIDATE_JSON)
        .respond(Method::Get, "applications/", 401, r#"{"detail":"Token expired."}"#);
    session.load_user(&gw).await;
    assert_eq!(session.phase(), SessionPhase::Authenticated);

    let err = gw.get::<serde_json::Value>("applications/").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Token expired.");
    assert_eq!(store.load(), None);
    assert_eq!(navigator.visits(), vec![LOGIN_ROUTE.to_owned()]);
    assert_eq!(session.phase(), SessionPhase::Anonymous);
    assert_eq!(session.user(), None);
}

#[tokio::test]
async fn unauthorized_without_credential_still_redirects() {
    let (session, _, navigator) = session_with(None);
    let gw = guarded(&session);
    gw.transport().respond(Method::Get, "saved/", 401, "");

    let err = gw.get::<serde_json::Value>("saved/").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(navigator.visits(), vec![LOGIN_ROUTE.to_owned()]);
}

#[tokio::test]
async fn unauthorized_login_is_left_to_the_caller() {
    let (session, store, navigator) = session_with(None);
    let gw = guarded(&session);
    let body = r#"{"detail":"No active account found with the given credentials"}"#;
    gw.transport().respond(Method::Post, "auth/login/", 401, body);

    let err = gw
        .post::<_, serde_json::Value>("auth/login/", &serde_json::json!({"username": "a", "password": "b"}))
        .await
        .unwrap_err();

    assert_eq!(err, crate::error::ApiError::from_status(401, body));
    assert_eq!(store.peek(), None);
    assert!(navigator.visits().is_empty());
}

#[tokio::test]
async fn unauthorized_login_keeps_existing_credential() {
    let (session, store, navigator) = session_with(Some("abc123"));
    let gw = guarded(&session);
    gw.transport().respond(Method::Post, "auth/login/", 401, "{}");

    let _ = gw.post::<_, serde_json::Value>("auth/login/", &serde_json::json!({})).await;

    assert_eq!(store.peek().as_deref(), Some("abc123"));
    assert!(session.is_authenticated());
    assert!(navigator.visits().is_empty());
}

#[tokio::test]
async fn other_failures_do_not_touch_session() {
    let (session, store, navigator) = session_with(Some("abc123"));
    let gw = guarded(&session);
    gw.transport()
        .respond(Method::Get, "jobs/1/", 403, r#"{"detail":"Nope."}"#)
        .respond(Method::Get, "jobs/2/", 500, "boom")
        .fail(Method::Get, "jobs/3/", "connection refused");

    for path in ["jobs/1/", "jobs/2/", "jobs/3/"] {
        assert!(gw.get::<serde_json::Value>(path).await.is_err());
    }

    assert_eq!(store.peek().as_deref(), Some("abc123"));
    assert!(session.is_authenticated());
    assert!(navigator.visits().is_empty());
}

#[tokio::test]
async fn unauthorized_profile_fetch_redirects_exactly_once() {
    let (session, store, navigator) = session_with(Some("abc123"));
    let gw = guarded(&session);
    gw.transport().respond(Method::Get, "auth/me/", 401, "");

    let user: Option<SessionUser> = session.load_user(&gw).await;

    assert_eq!(user, None);
    assert_eq!(store.peek(), None);
    assert_eq!(navigator.visits(), vec![LOGIN_ROUTE.to_owned()]);
    assert_eq!(session.phase(), SessionPhase::Anonymous);
}

#[tokio::test]
async fn unauthorized_for_replaced_credential_is_ignored() {
    let (session, store, navigator) = session_with(Some("old"));
    let gw = guarded(&session);
    gw.transport().respond(Method::Get, "applications/", 401, "");

    let relogin = session.clone();
    gw.transport().on_send(move |_| relogin.login("new"));

    let err = gw.get::<serde_json::Value>("applications/").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(auth_header(&gw, "applications/").as_deref(), Some("Bearer old"));
    assert_eq!(store.peek().as_deref(), Some("new"));
    assert!(session.is_authenticated());
    assert!(navigator.visits().is_empty());
}

#[tokio::test]
async fn unauthorized_after_logout_does_not_redirect() {
    let (session, store, navigator) = session_with(Some("old"));
    let gw = guarded(&session);
    gw.transport().respond(Method::Get, "saved/", 401, "");

    let leaver = session.clone();
    gw.transport().on_send(move |_| leaver.logout());

    assert!(gw.get::<serde_json::Value>("saved/").await.is_err());

    assert_eq!(store.peek(), None);
    assert!(navigator.visits().is_empty());
}

#[tokio::test]
async fn anonymous_unauthorized_ignored_once_signed_in() {
    let (session, store, navigator) = session_with(None);
    let gw = guarded(&session);
    gw.transport().respond(Method::Get, "jobs/recommended/", 401, "");

    let relogin = session.clone();
    gw.transport().on_send(move |_| relogin.login("new"));

    assert!(gw.get::<serde_json::Value>("jobs/recommended/").await.is_err());

    assert_eq!(auth_header(&gw, "jobs/recommended/"), None);
    assert_eq!(store.peek().as_deref(), Some("new"));
    assert!(navigator.visits().is_empty());
}
