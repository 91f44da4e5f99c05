//! Composition utilities for building a `NotificationService` over the
//! in-memory adapters.
//!
//! Construction only; no notification logic lives here.

use std::sync::Arc;

use vault_notify_core::{
    LoginCipher, NotificationPorts, NotificationService, NotificationSettings, UriMatcher,
    VaultLockState,
};

use crate::adapters::{
    CeremonyTracker, InMemoryCipherStore, InMemoryFolders, InMemoryTasks, RecordingPopouts,
    RecordingTabMessenger, ScriptedReprompt, StaticSettings, WatchLockState,
};

/// Concrete adapters behind a set of ports.
///
/// Fields stay typed so callers can drive state (lock, settings, write
/// failures) and inspect what was recorded after running the service.
pub struct InMemoryBackend {
    pub lock_state: Arc<WatchLockState>,
    pub ciphers: Arc<InMemoryCipherStore>,
    pub folders: Arc<InMemoryFolders>,
    pub settings: Arc<StaticSettings>,
    pub tabs: Arc<RecordingTabMessenger>,
    pub reprompt: Arc<ScriptedReprompt>,
    pub tasks: Arc<InMemoryTasks>,
    pub popouts: Arc<RecordingPopouts>,
    pub ceremonies: Arc<CeremonyTracker>,
}

impl InMemoryBackend {
    /// Backend with the given lock state, settings and stored logins.
    pub fn new(
        lock_state: VaultLockState,
        settings: NotificationSettings,
        ciphers: Vec<LoginCipher>,
    ) -> Self {
        Self {
            lock_state: Arc::new(WatchLockState::new(lock_state)),
            ciphers: Arc::new(InMemoryCipherStore::with_ciphers(ciphers)),
            folders: Arc::new(InMemoryFolders::default()),
            settings: Arc::new(StaticSettings::new(settings)),
            tabs: Arc::new(RecordingTabMessenger::new()),
            reprompt: Arc::new(ScriptedReprompt::default()),
            tasks: Arc::new(InMemoryTasks::default()),
            popouts: Arc::new(RecordingPopouts::new()),
            ceremonies: Arc::new(CeremonyTracker::new()),
        }
    }

    #[must_use]
    pub fn with_folders(mut self, folders: InMemoryFolders) -> Self {
        self.folders = Arc::new(folders);
        self
    }

    #[must_use]
    pub fn with_tasks(mut self, tasks: InMemoryTasks) -> Self {
        self.tasks = Arc::new(tasks);
        self
    }

    /// Wrap the adapters as trait objects.
    ///
    /// The URI matcher uses the default match strategy from the current
    /// settings.
    pub fn ports(&self) -> NotificationPorts {
        let default_match = vault_notify_core::ports::NotificationSettingsPort::current(
            self.settings.as_ref(),
        )
        .default_uri_match;

        NotificationPorts {
            lock_state: self.lock_state.clone(),
            ciphers: self.ciphers.clone(),
            folders: self.folders.clone(),
            domain_match: Arc::new(UriMatcher::new(default_match)),
            reprompt: self.reprompt.clone(),
            settings: self.settings.clone(),
            tabs: self.tabs.clone(),
            ceremonies: self.ceremonies.clone(),
            tasks: self.tasks.clone(),
            popouts: self.popouts.clone(),
        }
    }
}

/// Factory for services backed by in-memory adapters.
pub struct StoreFactory;

impl StoreFactory {
    /// Build a backend with default settings and no stored logins.
    pub fn empty_backend(lock_state: VaultLockState) -> InMemoryBackend {
        InMemoryBackend::new(lock_state, NotificationSettings::with_defaults(), Vec::new())
    }

    /// Build the ports for a backend.
    pub fn build_ports(backend: &InMemoryBackend) -> NotificationPorts {
        backend.ports()
    }

    /// Build a shared service over a backend.
    pub fn build_service(backend: &InMemoryBackend) -> Arc<NotificationService> {
        Arc::new(NotificationService::new(backend.ports()))
    }
}
