//! Application facade: wires the store, session, API client, and inbox
//! together so a front end only carries one handle.

use std::sync::{Arc, Mutex};

use campus_api::ApiClient;
use campus_shared::FollowTarget;
use campus_store::Database;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::events::EventBus;
use crate::follow::FollowController;
use crate::inbox::NotificationInbox;
use crate::lifecycle::LifecycleHandle;
use crate::poller::{self, PollerHandle};
use crate::push::PushRegistrar;
use crate::session::AuthSession;

pub struct App {
    config: ClientConfig,
    store: Arc<Mutex<Database>>,
    session: Arc<AuthSession>,
    api: ApiClient,
    events: EventBus,
    lifecycle: LifecycleHandle,
    inbox: Arc<NotificationInbox>,
}

impl App {
    /// Open the platform database (or the configured path) and wire the
    /// engine up.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let database = match &config.db_path {
            Some(path) => Database::open_at(path)?,
            None => Database::new()?,
        };
        Self::with_database(config, database)
    }

    /// Build on an explicit database.  Used by tests and by front ends
    /// that opt into in-memory storage.
    pub fn with_database(config: ClientConfig, database: Database) -> Result<Self> {
        let store = Arc::new(Mutex::new(database));
        let session = Arc::new(AuthSession::restore(store.clone())?);
        let api = ApiClient::with_base_url(&config.api_url, session.clone());
        let events = EventBus::new();
        let inbox = Arc::new(NotificationInbox::new(
            api.clone(),
            config.page_size,
            events.clone(),
        ));

        Ok(Self {
            config,
            store,
            session,
            api,
            events,
            lifecycle: LifecycleHandle::new(),
            inbox,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<Mutex<Database>> {
        &self.store
    }

    pub fn session(&self) -> &Arc<AuthSession> {
        &self.session
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn lifecycle(&self) -> &LifecycleHandle {
        &self.lifecycle
    }

    pub fn inbox(&self) -> &Arc<NotificationInbox> {
        &self.inbox
    }

    /// A follow controller for one target.
    pub fn follow_controller(&self, target: FollowTarget) -> FollowController {
        FollowController::new(self.api.clone(), self.events.clone(), target)
    }

    pub fn push_registrar(&self) -> PushRegistrar {
        PushRegistrar::new(self.api.clone(), self.store.clone())
    }

    /// Start background notification polling with the configured period.
    ///
    /// Returns `None` when a poller is already running.
    pub fn start_polling(&self) -> Option<PollerHandle> {
        poller::spawn(
            self.inbox.clone(),
            self.lifecycle.subscribe(),
            self.config.poll_period,
        )
    }
}
