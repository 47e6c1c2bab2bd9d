//! Application-root wiring of session, gateway, and the standard stages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app and the CLI each build exactly one `PortalClient` at
//! startup and pass it down. Nothing else constructs a `Session` or a
//! `Gateway`, so every request carries the same policy.
//!
//! DESIGN
//! ======
//! Stage order is fixed: `RequestLog`, then `BearerAuth`, then
//! `SessionExpiry`. Logging sees the request before the credential is
//! attached, so the token never reaches the log.

use std::sync::Arc;

use tracing::info;

use crate::api;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::gateway::{Gateway, RequestLog, Transport};
use crate::routes::{self, landing_route};
use crate::session::{BearerAuth, CredentialStore, Navigator, Session, SessionExpiry};
use crate::types::{Ack, LoginRequest, Registration, SessionUser};

/// Failure of a sign-in or registration flow.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AuthFlowError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AuthFlowError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingFields(fields) => format!("Please fill in: {}.", fields.join(", ")),
            Self::InvalidCredentials => "Invalid username or password.".to_owned(),
            Self::Api(e) => e.user_message(),
        }
    }
}

/// Result of a successful sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignIn {
    /// `None` when the profile could not be loaded.
    pub user: Option<SessionUser>,
    /// Route to navigate to next.
    pub landing: &'static str,
}

#[derive(Debug)]
pub struct PortalClient<T> {
    session: Session,
    gateway: Gateway<T>,
}

impl<T: Transport> PortalClient<T> {
    /// Rehydrate the session from `store` and wire the standard chain.
    #[must_use]
    pub fn new(
        config: &ClientConfig,
        transport: T,
        store: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let session = Session::restore(store, navigator);
        let gateway = Gateway::new(config.base_url.clone(), transport)
            .with_interceptor(RequestLog)
            .with_interceptor(BearerAuth::new(session.clone()))
            .with_interceptor(SessionExpiry::new(session.clone()));
        Self { session, gateway }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn gateway(&self) -> &Gateway<T> {
        &self.gateway
    }

    /// Resolve the profile for a rehydrated credential. No-op when anonymous.
    pub async fn start(&self) -> Option<SessionUser> {
        self.session.load_user(&self.gateway).await
    }

    /// Exchange credentials, adopt the token, load the profile, and pick
    /// the landing route for the user's role.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` when the backend rejects the pair; the stored
    /// credential and navigation are left untouched in that case.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<SignIn, AuthFlowError> {
        let request = LoginRequest {
            username: username.trim().to_owned(),
            password: password.to_owned(),
        };
        let mut missing = Vec::new();
        if request.username.is_empty() {
            missing.push("username");
        }
        if request.password.is_empty() {
            missing.push("password");
        }
        if !missing.is_empty() {
            return Err(AuthFlowError::MissingFields(missing));
        }

        let tokens = match api::auth::login(&self.gateway, &request).await {
            Ok(tokens) => tokens,
            Err(e) if matches!(e.status(), Some(400 | 401)) => return Err(AuthFlowError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        };
        if tokens.access.trim().is_empty() {
            return Err(ApiError::Decode("login response carried no access token".to_owned()).into());
        }

        self.session.login(tokens.access);
        let user = self.session.load_user(&self.gateway).await;
        let landing = landing_route(user.as_ref().map(|user| user.role));
        info!(username = %request.username, landing, "signed in");
        Ok(SignIn { user, landing })
    }

    /// Create an account. Callers continue to the login screen on success.
    ///
    /// # Errors
    ///
    /// `MissingFields` before any request is made; otherwise the API error
    /// whose `user_message` carries the first field error.
    pub async fn register(&self, registration: &Registration) -> Result<Ack, AuthFlowError> {
        let missing = registration.missing_fields();
        if !missing.is_empty() {
            return Err(AuthFlowError::MissingFields(missing));
        }
        let ack = api::auth::register(&self.gateway, registration).await?;
        info!(username = %registration.username, "registered");
        Ok(ack)
    }

    /// Drop the session. Returns the route to show next.
    pub fn sign_out(&self) -> &'static str {
        self.session.logout();
        routes::HOME
    }
}

#[cfg(feature = "reqwest")]
impl PortalClient<crate::gateway::ReqwestTransport> {
    /// Native client over `reqwest` with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn connect(
        config: &ClientConfig,
        store: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, crate::gateway::TransportError> {
        let transport = crate::gateway::ReqwestTransport::new(config)?;
        Ok(Self::new(config, transport, store, navigator))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
