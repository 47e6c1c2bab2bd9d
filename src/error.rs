//! Error taxonomy surfaced to every caller of the gateway.
//!
//! ERROR HANDLING
//! ==============
//! The gateway only reacts to `Unauthorized` (see `session::guard`); every
//! other variant is returned to the calling page or command, which renders
//! `user_message()` inline instead of failing the view.

use std::collections::BTreeMap;

use serde_json::Value;

/// Failure of a single gateway request.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No response was received (DNS, connect, timeout, CORS, ...).
    #[error("network unavailable: {0}")]
    Network(String),
    /// 401: expired, missing, or rejected credential.
    #[error("unauthorized")]
    Unauthorized { body: ErrorBody },
    /// 403: authenticated but not allowed.
    #[error("forbidden")]
    Forbidden { body: ErrorBody },
    /// Any other 4xx, typically validation errors.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, body: ErrorBody },
    /// 5xx.
    #[error("server error with status {status}")]
    Server { status: u16 },
    /// A success response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Classify a non-success HTTP status and its raw body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized {
                body: ErrorBody::parse(body),
            },
            403 => Self::Forbidden {
                body: ErrorBody::parse(body),
            },
            500.. => Self::Server { status },
            _ => Self::Rejected {
                status,
                body: ErrorBody::parse(body),
            },
        }
    }

    /// HTTP status carried by this error, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::Rejected { status, .. } | Self::Server { status } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Encode(_) => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Human-readable message suitable for inline page/form errors.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server. Check your connection and try again.".to_owned(),
            Self::Unauthorized { body } => body
                .detail
                .clone()
                .unwrap_or_else(|| "Your session has expired. Please log in again.".to_owned()),
            Self::Forbidden { body } => body
                .detail
                .clone()
                .unwrap_or_else(|| "You are not allowed to perform this action.".to_owned()),
            Self::Rejected { status, body } => body
                .summary()
                .unwrap_or_else(|| format!("The request was rejected (status {status}).")),
            Self::Server { .. } => "Something went wrong on the server. Please try again.".to_owned(),
            Self::Decode(_) => "Unexpected response from the server.".to_owned(),
            Self::Encode(_) => "The request could not be prepared.".to_owned(),
        }
    }
}

/// Parsed error payload in the backend's shape: either
/// `{"detail": "..."}` or a map of field name to messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: Option<String>,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ErrorBody {
    /// Parse a raw response body. Non-JSON bodies yield an empty value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) else {
            return Self::default();
        };

        let mut body = Self::default();
        for (key, value) in map {
            if key == "detail" || key == "message" {
                if body.detail.is_none() {
                    body.detail = value.as_str().map(str::to_owned);
                }
                continue;
            }
            let messages = match value {
                Value::String(text) => vec![text],
                Value::Array(items) => items
                    .into_iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect(),
                _ => continue,
            };
            if !messages.is_empty() {
                body.fields.insert(key, messages);
            }
        }
        body
    }

    /// `detail` if present, otherwise the first field error as `field: message`.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        if let Some(detail) = &self.detail {
            return Some(detail.clone());
        }
        self.fields
            .iter()
            .find_map(|(field, messages)| messages.first().map(|message| format!("{field}: {message}")))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.detail.is_none() && self.fields.is_empty()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
