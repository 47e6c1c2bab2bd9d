//! Session context: who is logged in, and with which credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Session` is constructed at the application root and handed to
//! everything that needs auth state, including the gateway's `BearerAuth`
//! and `SessionExpiry` stages. It is the only component that touches the
//! persisted credential slot.
//!
//! DESIGN
//! ======
//! Phases are derived from the state rather than stored:
//! no credential is `Anonymous`, a pending profile fetch is
//! `Authenticating`, anything else is `Authenticated`.
//!
//! Every credential change bumps a generation counter. A profile fetch
//! captures the generation when it starts, and its result is dropped if the
//! generation moved on in the meantime, so a slow fetch for an old
//! credential can never overwrite state for a newer one.
//!
//! The state mutex is never held across an `.await` or while listeners run.

pub mod guard;
pub mod navigator;
pub mod storage;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

pub use guard::{BearerAuth, LOGIN_PATH, SessionExpiry, is_login_path};
pub use navigator::{LOGIN_ROUTE, Navigator, RecordingNavigator};
pub use storage::{CredentialStore, MemoryStore, StorageError};

use crate::error::ApiError;
use crate::gateway::{Gateway, Transport};
use crate::types::{Role, SessionUser};

/// Opaque bearer token. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token; blank input is rejected.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(..)")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Point-in-time view of the session, handed to listeners and UI code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub user: Option<SessionUser>,
    /// True iff a credential is held, whether or not the profile is loaded.
    pub is_authenticated: bool,
    /// True only while the profile fetch is pending.
    pub loading_user: bool,
}

impl SessionSnapshot {
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            phase: SessionPhase::Anonymous,
            user: None,
            is_authenticated: false,
            loading_user: false,
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Proof that a profile fetch was started for one credential generation.
#[derive(Debug)]
pub struct ProfileTicket {
    generation: u64,
    credential: Credential,
}

impl ProfileTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}

#[derive(Default)]
struct State {
    credential: Option<Credential>,
    user: Option<SessionUser>,
    loading: bool,
    generation: u64,
}

impl State {
    fn phase(&self) -> SessionPhase {
        match (&self.credential, self.loading) {
            (None, _) => SessionPhase::Anonymous,
            (Some(_), true) => SessionPhase::Authenticating,
            (Some(_), false) => SessionPhase::Authenticated,
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase(),
            user: self.user.clone(),
            is_authenticated: self.credential.is_some(),
            loading_user: self.loading,
        }
    }

    fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.credential = None;
        self.user = None;
        self.loading = false;
    }
}

type Listener = Arc<dyn Fn(&SessionSnapshot) + Send + Sync>;

struct Inner {
    store: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
    state: Mutex<State>,
    listeners: Mutex<Vec<Listener>>,
}

enum Completion {
    Stale,
    Applied,
    Expired,
}

/// Cheaply cloneable handle to the shared session.
#[derive(Clone)]
pub struct Session {
    inner: Arc<Inner>,
}

impl Session {
    /// Build the session, rehydrating any persisted credential.
    ///
    /// With a stored credential the session starts in `Authenticating`;
    /// the caller is expected to follow up with [`Session::load_user`].
    #[must_use]
    pub fn restore(store: Arc<dyn CredentialStore>, navigator: Arc<dyn Navigator>) -> Self {
        let credential = store.load().and_then(Credential::new);
        let loading = credential.is_some();
        if loading {
            info!("restored persisted credential");
        }
        Self {
            inner: Arc::new(Inner {
                store,
                navigator,
                state: Mutex::new(State {
                    credential,
                    user: None,
                    loading,
                    generation: 0,
                }),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update<R>(&self, apply: impl FnOnce(&mut State) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state();
            let result = apply(&mut state);
            (result, state.snapshot())
        };
        self.notify(&snapshot);
        result
    }

    fn notify(&self, snapshot: &SessionSnapshot) {
        let listeners = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener(snapshot);
        }
    }

    /// Register a callback run after every state change.
    pub fn subscribe(&self, listener: impl Fn(&SessionSnapshot) + Send + Sync + 'static) {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    /// Adopt a new credential: persist it and enter `Authenticating`.
    ///
    /// `is_authenticated` is true as soon as this returns. Any profile
    /// fetch started for an earlier credential is superseded.
    pub fn login(&self, credential: impl Into<String>) {
        let Some(credential) = Credential::new(credential) else {
            warn!("ignoring blank credential");
            return;
        };
        if let Err(e) = self.inner.store.save(credential.as_str()) {
            warn!(error = %e, "failed to persist credential");
        }
        self.update(|state| {
            state.generation = state.generation.wrapping_add(1);
            state.credential = Some(credential);
            state.user = None;
            state.loading = true;
        });
        info!("session credential set");
    }

    /// Drop the credential and profile. No navigation is forced.
    pub fn logout(&self) {
        self.clear_all();
        info!("logged out");
    }

    /// Forced logout after an authorization failure: clear storage and
    /// state, then redirect to the login screen.
    pub fn expire(&self) {
        self.clear_all();
        warn!("session expired; redirecting to login");
        self.inner.navigator.redirect(LOGIN_ROUTE);
    }

    fn clear_all(&self) {
        if let Err(e) = self.inner.store.clear() {
            warn!(error = %e, "failed to clear persisted credential");
        }
        self.update(State::clear);
    }

    /// Start a profile fetch for the current credential.
    ///
    /// Returns `None` when anonymous.
    pub fn begin_profile_fetch(&self) -> Option<ProfileTicket> {
        let ticket = {
            let mut state = self.state();
            let credential = state.credential.clone()?;
            state.loading = true;
            ProfileTicket {
                generation: state.generation,
                credential,
            }
        };
        self.notify(&self.snapshot());
        Some(ticket)
    }

    /// Apply a profile fetch result if its ticket is still current.
    ///
    /// Returns `false` when the result was discarded as stale.
    pub fn complete_profile_fetch(&self, ticket: ProfileTicket, result: Result<SessionUser, ApiError>) -> bool {
        let completion = {
            let mut state = self.state();
            let current = state.generation == ticket.generation
                && state.credential.as_ref() == Some(&ticket.credential);
            if !current {
                Completion::Stale
            } else {
                match result {
                    Ok(user) => {
                        debug!(user_id = user.id, role = user.role.as_str(), "profile loaded");
                        state.user = Some(user);
                        state.loading = false;
                        Completion::Applied
                    }
                    Err(e) if e.is_unauthorized() => Completion::Expired,
                    Err(e) => {
                        warn!(error = %e, "profile fetch failed");
                        state.user = None;
                        state.loading = false;
                        Completion::Applied
                    }
                }
            }
        };

        match completion {
            Completion::Stale => {
                debug!(generation = ticket.generation, "discarding stale profile result");
                false
            }
            Completion::Applied => {
                self.notify(&self.snapshot());
                true
            }
            Completion::Expired => {
                self.expire();
                true
            }
        }
    }

    /// Fetch `auth/me/` for the current credential and apply the result.
    pub async fn load_user<T: Transport>(&self, gateway: &Gateway<T>) -> Option<SessionUser> {
        let ticket = self.begin_profile_fetch()?;
        let result = crate::api::auth::me(gateway).await;
        self.complete_profile_fetch(ticket, result);
        self.user()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state().credential.is_some()
    }

    #[must_use]
    pub fn loading_user(&self) -> bool {
        self.state().loading
    }

    #[must_use]
    pub fn user(&self) -> Option<SessionUser> {
        self.state().user.clone()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.state().user.as_ref().map(|user| user.role)
    }

    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        self.state().credential.clone()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state().phase()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state().snapshot()
    }

    /// Current credential generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.state().generation
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("Session")
            .field("phase", &state.phase())
            .field("generation", &state.generation)
            .field("user", &state.user)
            .finish_non_exhaustive()
    }
}
