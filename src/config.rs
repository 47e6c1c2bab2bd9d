//! Client configuration parsed from environment variables.

use std::time::Duration;

use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Name of the persisted slot holding the bearer credential.
pub const DEFAULT_CREDENTIAL_KEY: &str = "accessToken";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root URL every resource path is appended to.
    pub base_url: String,
    /// Upper bound for a single request on native transports.
    pub timeout: Duration,
    /// Storage key for the credential slot.
    pub credential_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            credential_key: DEFAULT_CREDENTIAL_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `JOBPORTAL_API_URL`: default `http://127.0.0.1:8000/api/`
    /// - `JOBPORTAL_TIMEOUT_SECS`: default 30
    /// - `JOBPORTAL_CREDENTIAL_KEY`: default `accessToken`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("JOBPORTAL_API_URL")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map_or(defaults.base_url, normalize_base_url);

        let timeout = match lookup("JOBPORTAL_TIMEOUT_SECS") {
            None => defaults.timeout,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(value = %raw, "invalid JOBPORTAL_TIMEOUT_SECS; using default");
                    defaults.timeout
                }
            },
        };

        let credential_key = lookup("JOBPORTAL_CREDENTIAL_KEY")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or(defaults.credential_key);

        Self {
            base_url,
            timeout,
            credential_key,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url.to_owned());
        self
    }
}

/// Ensure the base URL ends with exactly one `/`.
#[must_use]
pub fn normalize_base_url(raw: String) -> String {
    let trimmed = raw.trim_end_matches('/');
    format!("{trimmed}/")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
