//! # jobportal
//!
//! Client core for the job portal: an authenticated API gateway, the
//! session context it enforces, typed endpoint wrappers, and the list and
//! routing helpers shared by the browser app (`web/`) and the CLI (`cli/`).
//!
//! Every backend call flows through one [`gateway::Gateway`] whose
//! interceptor chain attaches the bearer credential and turns an
//! Unauthorized response into a forced logout. The [`session::Session`]
//! owns the credential and is the only component that touches storage.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod listing;
pub mod routes;
pub mod session;
pub mod types;

#[cfg(test)]
mod test_support;

pub use client::{AuthFlowError, PortalClient, SignIn};
pub use config::ClientConfig;
pub use error::{ApiError, ErrorBody};
pub use gateway::{ApiRequest, ApiResponse, Gateway, Interceptor, Method, Transport, TransportError};
pub use session::{CredentialStore, Navigator, Session, SessionPhase, SessionSnapshot};
