use crate::settings::NotificationSettings;

/// Source of the user's notification settings.
///
/// Read once per decision so a toggle takes effect on the next submission.
pub trait NotificationSettingsPort: Send + Sync {
    fn current(&self) -> NotificationSettings;
}
