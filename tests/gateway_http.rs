//! End-to-end: `PortalClient` over `reqwest` against an in-process axum backend.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use jobportal::session::{LOGIN_ROUTE, MemoryStore, RecordingNavigator};
use jobportal::types::{JobFilters, Role};
use jobportal::{ClientConfig, PortalClient, SessionPhase, api, routes};
use serde_json::{Value, json};

const GOOD_TOKEN: &str = "good-token";

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["username"] == "ravi" && body["password"] == "secret" {
        (StatusCode::OK, Json(json!({ "access": GOOD_TOKEN, "refresh": "r" })))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "No active account found with the given credentials" })),
        )
    }
}

async fn me(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    match bearer(&headers) {
        Some(GOOD_TOKEN) => (
            StatusCode::OK,
            Json(json!({ "id": 9, "username": "ravi", "role": "recruiter" })),
        ),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Invalid token." }))),
    }
}

async fn jobs(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let title = params.get("search").cloned().unwrap_or_else(|| "any".to_owned());
    Json(json!({ "count": 1, "results": [{ "id": 1, "title": title, "salary_min": 1200.5 }] }))
}

async fn analytics(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    match bearer(&headers) {
        Some(GOOD_TOKEN) => (StatusCode::OK, Json(json!({ "total_jobs": 2 }))),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Token expired." }))),
    }
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/auth/login/", post(login))
        .route("/api/auth/me/", get(me))
        .route("/api/jobs/", get(jobs))
        .route("/api/recruiter/analytics/", get(analytics));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn client(base_url: &str, store: Arc<MemoryStore>, navigator: Arc<RecordingNavigator>) -> PortalClient<jobportal::gateway::ReqwestTransport> {
    let config = ClientConfig::default().with_base_url(base_url);
    PortalClient::connect(&config, store, navigator).unwrap()
}

#[tokio::test]
async fn sign_in_then_call_protected_endpoint() {
    let base = spawn_backend().await;
    let store = Arc::new(MemoryStore::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let client = client(&base, store.clone(), navigator.clone());

    let signed = client.sign_in("ravi", "secret").await.unwrap();
    assert_eq!(signed.landing, routes::RECRUITER_DASHBOARD);
    assert_eq!(signed.user.map(|u| u.role), Some(Role::Recruiter));

    let analytics = api::recruiter::analytics(client.gateway()).await.unwrap();
    assert_eq!(analytics.total_jobs, 2);
    assert!(navigator.visits().is_empty());
}

#[tokio::test]
async fn wrong_password_surfaces_without_redirect() {
    let base = spawn_backend().await;
    let store = Arc::new(MemoryStore::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let client = client(&base, store.clone(), navigator.clone());

    let err = client.sign_in("ravi", "nope").await.unwrap_err();

    assert_eq!(err.user_message(), "Invalid username or password.");
    assert!(navigator.visits().is_empty());
    assert_eq!(store.peek(), None);
}

#[tokio::test]
async fn stale_stored_token_is_expired_on_startup() {
    let base = spawn_backend().await;
    let store = Arc::new(MemoryStore::with_credential("stale"));
    let navigator = Arc::new(RecordingNavigator::default());
    let client = client(&base, store.clone(), navigator.clone());

    assert_eq!(client.start().await, None);

    assert_eq!(client.session().phase(), SessionPhase::Anonymous);
    assert_eq!(store.peek(), None);
    assert_eq!(navigator.visits(), vec![LOGIN_ROUTE.to_owned()]);
}

#[tokio::test]
async fn anonymous_search_passes_query_and_decodes_envelope() {
    let base = spawn_backend().await;
    let client = client(
        &base,
        Arc::new(MemoryStore::default()),
        Arc::new(RecordingNavigator::default()),
    );
    let filters = JobFilters {
        search: " rust ".into(),
        ..JobFilters::default()
    };

    let jobs = api::jobs::list(client.gateway(), &filters).await.unwrap();

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "rust");
    assert_eq!(jobs[0].salary_min.as_deref(), Some("1200.5"));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let client = client(
        "http://127.0.0.1:9/api",
        Arc::new(MemoryStore::default()),
        Arc::new(RecordingNavigator::default()),
    );

    let err = api::jobs::list(client.gateway(), &JobFilters::default())
        .await
        .unwrap_err();

    assert!(matches!(err, jobportal::ApiError::Network(_)));
}
