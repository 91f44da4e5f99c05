use std::sync::RwLock;

use vault_notify_core::ports::NotificationSettingsPort;
use vault_notify_core::{
    NotificationSettings, NotificationSettingsUpdate, SettingsError, validate_settings,
};

/// Settings held in memory and changed through partial updates.
#[derive(Debug, Default)]
pub struct StaticSettings {
    inner: RwLock<NotificationSettings>,
}

impl StaticSettings {
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            inner: RwLock::new(settings),
        }
    }

    /// Merge a partial update, rejecting it if the result is invalid.
    pub fn apply(&self, update: &NotificationSettingsUpdate) -> Result<(), SettingsError> {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut next = guard.clone();
        next.merge(update);
        validate_settings(&next)?;
        *guard = next;
        Ok(())
    }
}

impl NotificationSettingsPort for StaticSettings {
    fn current(&self) -> NotificationSettings {
        self.inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}
