//! Shared portal client and reactive session snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Portal` is created by `App` and provided as context. The session in
//! the core pushes every change to `session`, so components re-render on
//! login, logout, and forced expiry without polling.

use std::sync::Arc;

use jobportal::{ClientConfig, Gateway, PortalClient, SessionSnapshot};
use leptos::prelude::*;

use crate::net::FetchTransport;
use crate::util::browser::{LocalStorageStore, LocationNavigator};

pub type WebClient = PortalClient<FetchTransport>;

#[derive(Clone)]
pub struct Portal {
    client: Arc<WebClient>,
    session: RwSignal<SessionSnapshot>,
}

impl Portal {
    /// Restore the session from `localStorage` and mirror it into a signal.
    pub fn new(config: &ClientConfig) -> Self {
        let store = Arc::new(LocalStorageStore::new(config.credential_key.clone()));
        let client = PortalClient::new(config, FetchTransport, store, Arc::new(LocationNavigator));
        let session = RwSignal::new(client.session().snapshot());
        client.session().subscribe(move |snapshot| session.set(snapshot.clone()));
        Self {
            client: Arc::new(client),
            session,
        }
    }

    pub fn client(&self) -> &WebClient {
        &self.client
    }

    pub fn gateway(&self) -> &Gateway<FetchTransport> {
        self.client.gateway()
    }

    pub fn session(&self) -> ReadSignal<SessionSnapshot> {
        self.session.read_only()
    }
}

pub fn use_portal() -> Portal {
    expect_context::<Portal>()
}

/// Config baked in at build time; trunk passes `JOBPORTAL_API_URL` through.
pub fn web_config() -> ClientConfig {
    ClientConfig::from_vars(|name| match name {
        "JOBPORTAL_API_URL" => option_env!("JOBPORTAL_API_URL").map(str::to_owned),
        _ => None,
    })
}
