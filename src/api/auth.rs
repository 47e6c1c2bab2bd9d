//! `auth/` endpoints.

use crate::error::ApiError;
use crate::gateway::{Gateway, Transport};
use crate::session::LOGIN_PATH;
use crate::types::{Ack, LoginRequest, Registration, SessionUser, TokenPair};

/// Exchange username and password for a token pair.
///
/// # Errors
///
/// `ApiError::Unauthorized` when the credentials are rejected. The session
/// is not expired by this failure.
pub async fn login<T: Transport>(gateway: &Gateway<T>, request: &LoginRequest) -> Result<TokenPair, ApiError> {
    gateway.post(LOGIN_PATH, request).await
}

/// Create a new account.
///
/// # Errors
///
/// `ApiError::Rejected` with field errors on validation failure.
pub async fn register<T: Transport>(gateway: &Gateway<T>, registration: &Registration) -> Result<Ack, ApiError> {
    gateway.post("auth/register/", registration).await
}

/// Profile of the credential currently attached by the gateway.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn me<T: Transport>(gateway: &Gateway<T>) -> Result<SessionUser, ApiError> {
    gateway.get("auth/me/").await
}
