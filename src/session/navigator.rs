//! Navigation side effect used by forced logout.

use std::sync::{Mutex, PoisonError};

/// Route of the login screen.
pub const LOGIN_ROUTE: &str = "/login";

/// Performs a hard navigation (full page load in the browser).
pub trait Navigator: Send + Sync {
    fn redirect(&self, route: &str);
}

/// Records redirects instead of performing them.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.visits().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, route: &str) {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.to_owned());
    }
}
