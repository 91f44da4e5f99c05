use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use vault_notify_core::ports::{EditTarget, VaultPopoutPort};
use vault_notify_core::{TabId, TabRef};

/// First tab id handed out to popout windows.
const FIRST_POPOUT_TAB_ID: TabId = 10_000;

/// Records popout requests and assigns each window a fresh tab id.
#[derive(Debug)]
pub struct RecordingPopouts {
    next_id: AtomicI64,
    unlock_requests: Mutex<Vec<TabId>>,
    edits: Mutex<Vec<(TabId, EditTarget)>>,
}

impl RecordingPopouts {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(FIRST_POPOUT_TAB_ID),
            unlock_requests: Mutex::new(Vec::new()),
            edits: Mutex::new(Vec::new()),
        }
    }

    /// Tabs that asked for the unlock popout.
    pub fn unlock_requests(&self) -> Vec<TabId> {
        self.unlock_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Logins opened in the add/edit popout, with the requesting tab.
    pub fn edits(&self) -> Vec<(TabId, EditTarget)> {
        self.edits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for RecordingPopouts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VaultPopoutPort for RecordingPopouts {
    async fn open_unlock(&self, tab: &TabRef) -> Option<TabId> {
        self.unlock_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tab.id);
        Some(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    async fn open_add_edit(&self, tab: &TabRef, target: EditTarget) {
        self.edits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((tab.id, target));
    }
}
