//! `localStorage` credential slot and `window.location` navigation.
//!
//! Native builds (tests, `cargo check` without `csr`) have no browser:
//! the store reads as empty and rejects writes, navigation is a no-op.

use jobportal::session::{CredentialStore, StorageError};
use jobportal::Navigator;
use tracing::warn;

/// Credential slot in `window.localStorage` under a fixed key.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_owned()))
}

impl CredentialStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            match local_storage() {
                Ok(storage) => storage.get_item(&self.key).ok().flatten(),
                Err(e) => {
                    warn!(error = %e, "credential not restored");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, credential: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(&self.key, credential)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credential;
            Err(StorageError::Unavailable("localStorage needs a browser".to_owned()))
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(&self.key)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}

/// Hard navigation through `window.location`, reloading the app.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn redirect(&self, route: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                warn!(route, "no window to redirect");
                return;
            };
            if let Err(e) = window.location().set_href(route) {
                warn!(route, error = ?e, "redirect failed");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            warn!(route, "redirect skipped outside the browser");
        }
    }
}
