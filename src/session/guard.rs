//! Gateway stages that enforce the session policy.
//!
//! `BearerAuth` attaches the held credential to outgoing requests.
//! `SessionExpiry` turns an Unauthorized response into a forced logout,
//! except for the login request itself, whose 401 means "wrong password"
//! and must reach the login form untouched. A 401 for a request sent under
//! an older credential is ignored, so it cannot log out a newer session.

use tracing::debug;

use super::Session;
use crate::error::ApiError;
use crate::gateway::{AUTHORIZATION, ApiRequest, Interceptor};

/// Path of the credential exchange endpoint.
pub const LOGIN_PATH: &str = "auth/login/";

/// Whether `path` targets the login endpoint.
#[must_use]
pub fn is_login_path(path: &str) -> bool {
    path.trim_start_matches('/').trim_end_matches('/') == LOGIN_PATH.trim_end_matches('/')
}

#[derive(Clone, Debug)]
pub struct BearerAuth {
    session: Session,
}

impl BearerAuth {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Interceptor for BearerAuth {
    fn name(&self) -> &'static str {
        "bearer-auth"
    }

    fn on_request(&self, request: &mut ApiRequest) {
        if let Some(credential) = self.session.credential() {
            request.set_header(AUTHORIZATION, credential.bearer());
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionExpiry {
    session: Session,
}

impl SessionExpiry {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Interceptor for SessionExpiry {
    fn name(&self) -> &'static str {
        "session-expiry"
    }

    fn on_error(&self, request: &ApiRequest, error: &ApiError) {
        if !error.is_unauthorized() || is_login_path(&request.path) {
            return;
        }
        if !sent_under_current_credential(&self.session, request) {
            debug!(path = %request.path, "ignoring 401 for a superseded credential");
            return;
        }
        self.session.expire();
    }
}

/// The request's `Authorization` matches what the session holds now.
/// Both absent counts as a match.
fn sent_under_current_credential(session: &Session, request: &ApiRequest) -> bool {
    let held = session.credential().map(|credential| credential.bearer());
    request.header(AUTHORIZATION) == held.as_deref()
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;
