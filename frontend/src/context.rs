//! 门户上下文
//!
//! Holds the one [`Portal`] of the app and a reactive copy of the session for
//! the navigation bar. Pages read it with [`use_portal`].

use crate::web::{BrowserStorage, FetchHttpClient};
use grievance_client::{AppRoute, ClientConfig, Portal};
use grievance_shared::Session;
use leptos::prelude::*;

pub type AppPortal = Portal<FetchHttpClient>;

#[derive(Clone, Copy)]
pub struct PortalContext {
    portal: StoredValue<AppPortal, LocalStorage>,
    session: RwSignal<Option<Session>>,
}

impl PortalContext {
    pub fn new() -> Self {
        let config = ClientConfig::from_env().unwrap_or_else(|e| {
            web_sys::console::error_1(&format!("[Portal] {}, using default API URL", e).into());
            ClientConfig::default()
        });
        web_sys::console::log_1(&format!("[Portal] API at {}", config.api_url()).into());

        let portal = Portal::new(FetchHttpClient, &config, BrowserStorage);
        let session = RwSignal::new(portal.session().current());
        Self {
            portal: StoredValue::new_local(portal),
            session,
        }
    }

    /// A handle to move into async tasks.
    pub fn portal(&self) -> AppPortal {
        self.portal.get_value()
    }

    pub fn session(&self) -> ReadSignal<Option<Session>> {
        self.session.read_only()
    }

    /// Copies the persisted session into the reactive one.
    pub fn sync_session(&self) {
        let current = self.portal.with_value(|p| p.session().current());
        self.session.set(current);
    }

    pub fn logout(&self) -> AppRoute {
        let route = self.portal.with_value(|p| p.logout());
        self.sync_session();
        route
    }
}

impl Default for PortalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_portal() -> PortalContext {
    expect_context::<PortalContext>()
}
