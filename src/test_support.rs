//! Shared fakes for unit tests. Only compiled under `cfg(test)`.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::gateway::{ApiResponse, HttpRequest, Method, Transport, TransportError};
use crate::session::{MemoryStore, RecordingNavigator, Session};

pub const BASE_URL: &str = "http://portal.test/api/";

type Hook = Box<dyn Fn(&HttpRequest) + Send + Sync>;

struct Route {
    method: Method,
    url: String,
    replies: VecDeque<Result<ApiResponse, TransportError>>,
    last: Option<Result<ApiResponse, TransportError>>,
}

/// Scripted in-memory transport that records every request it receives.
///
/// Each route replays its queued replies in order and then keeps repeating
/// the last one. Unscripted routes answer `404`.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<Vec<Route>>,
    sent: Mutex<Vec<HttpRequest>>,
    hook: Mutex<Option<Hook>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.push(method, path, Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(&self, method: Method, path: &str, message: &str) -> &Self {
        self.push(method, path, Err(TransportError(message.to_owned())));
        self
    }

    /// Run `hook` synchronously inside every `send`, before replying.
    pub fn on_send(&self, hook: impl Fn(&HttpRequest) + Send + Sync + 'static) {
        *self.hook.lock().unwrap() = Some(Box::new(hook));
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, path: &str) -> Vec<HttpRequest> {
        let url = format!("{BASE_URL}{path}");
        self.sent().into_iter().filter(|req| req.url == url).collect()
    }

    fn push(&self, method: Method, path: &str, reply: Result<ApiResponse, TransportError>) {
        let url = format!("{BASE_URL}{path}");
        let mut routes = self.routes.lock().unwrap();
        if let Some(route) = routes.iter_mut().find(|r| r.method == method && r.url == url) {
            route.replies.push_back(reply);
        } else {
            routes.push(Route {
                method,
                url,
                replies: VecDeque::from([reply]),
                last: None,
            });
        }
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, TransportError> {
        self.sent.lock().unwrap().push(request.clone());
        if let Some(hook) = self.hook.lock().unwrap().as_ref() {
            hook(&request);
        }

        let mut routes = self.routes.lock().unwrap();
        let Some(route) = routes
            .iter_mut()
            .find(|r| r.method == request.method && r.url == request.url)
        else {
            return Ok(ApiResponse::new(404, r#"{"detail":"Not found."}"#));
        };
        if let Some(next) = route.replies.pop_front() {
            route.last = Some(next.clone());
            next
        } else {
            route
                .last
                .clone()
                .unwrap_or_else(|| Ok(ApiResponse::new(404, "")))
        }
    }
}

impl Transport for Arc<FakeTransport> {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, TransportError> {
        self.as_ref().send(request).await
    }
}

pub const CANDIDATE_JSON: &str = r#"{"id":7,"username":"asha","email":"asha@example.com","role":"candidate"}"#;
pub const RECRUITER_JSON: &str = r#"{"id":9,"username":"ravi","email":"ravi@example.com","role":"recruiter"}"#;

/// Session over an in-memory store, optionally pre-seeded with a credential.
pub fn session_with(credential: Option<&str>) -> (Session, Arc<MemoryStore>, Arc<RecordingNavigator>) {
    let store = Arc::new(match credential {
        Some(token) => MemoryStore::with_credential(token),
        None => MemoryStore::default(),
    });
    let navigator = Arc::new(RecordingNavigator::default());
    let session = Session::restore(store.clone(), navigator.clone());
    (session, store, navigator)
}
