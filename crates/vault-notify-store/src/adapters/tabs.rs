//! Tab messenger that records instead of delivering.

use std::sync::{Mutex, PoisonError};

use vault_notify_core::ports::TabMessengerPort;
use vault_notify_core::{RuntimeMessage, TabId, TabMessage, TabRef};

/// Records every message the service sends to tabs.
#[derive(Debug, Default)]
pub struct RecordingTabMessenger {
    sent: Mutex<Vec<(TabId, TabMessage)>>,
    broadcasts: Mutex<Vec<RuntimeMessage>>,
    active: Mutex<Option<TabRef>>,
}

impl RecordingTabMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tab reported as focused.
    pub fn set_active_tab(&self, tab: Option<TabRef>) {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = tab;
    }

    /// Messages sent so far, oldest first.
    pub fn sent(&self) -> Vec<(TabId, TabMessage)> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages sent to one tab.
    pub fn sent_to(&self, tab_id: TabId) -> Vec<TabMessage> {
        self.sent()
            .into_iter()
            .filter(|(id, _)| *id == tab_id)
            .map(|(_, message)| message)
            .collect()
    }

    /// Drain the recorded tab messages.
    pub fn take_sent(&self) -> Vec<(TabId, TabMessage)> {
        std::mem::take(&mut *self.sent.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn broadcasts(&self) -> Vec<RuntimeMessage> {
        self.broadcasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TabMessengerPort for RecordingTabMessenger {
    fn send_to_tab(&self, tab_id: TabId, message: TabMessage) {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((tab_id, message));
    }

    fn broadcast(&self, message: RuntimeMessage) {
        self.broadcasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }

    fn active_tab(&self) -> Option<TabRef> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
