use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use vault_notify_core::TabId;
use vault_notify_core::ports::CredentialCeremonyPort;

/// Tracks tabs with an in-flight passkey assertion.
#[derive(Debug, Default)]
pub struct CeremonyTracker {
    active: Mutex<HashSet<TabId>>,
}

impl CeremonyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, tab_id: TabId) {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(tab_id);
    }

    pub fn end(&self, tab_id: TabId) {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&tab_id);
    }
}

impl CredentialCeremonyPort for CeremonyTracker {
    fn is_assertion_in_progress(&self, tab_id: TabId) -> bool {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&tab_id)
    }
}
