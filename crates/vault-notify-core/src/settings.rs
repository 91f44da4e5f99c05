//! Notification settings and validation.
//!
//! These are pure domain types; where they are stored is an adapter concern.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::UriMatchStrategy;

/// Default lifetime of a queued notification.
pub const DEFAULT_NOTIFICATION_LIFESPAN_SECS: u64 = 150;

/// Upper bound accepted for `notification_lifespan_secs`.
const MAX_NOTIFICATION_LIFESPAN_SECS: u64 = 60 * 60;

/// User-facing switches that gate notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationSettings {
    /// Offer to save logins that are not in the vault yet.
    pub enable_added_login_prompt: bool,

    /// Offer to update stored logins when a password changes.
    pub enable_changed_password_prompt: bool,

    /// How long a queued notification stays actionable.
    pub notification_lifespan_secs: u64,

    /// Strategy for stored URIs that carry no explicit override.
    pub default_uri_match: UriMatchStrategy,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl NotificationSettings {
    /// Create settings with both prompts enabled.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            enable_added_login_prompt: true,
            enable_changed_password_prompt: true,
            notification_lifespan_secs: DEFAULT_NOTIFICATION_LIFESPAN_SECS,
            default_uri_match: UriMatchStrategy::Domain,
        }
    }

    /// Whether any prompt is enabled at all.
    pub const fn any_prompt_enabled(&self) -> bool {
        self.enable_added_login_prompt || self.enable_changed_password_prompt
    }

    /// Queue lifetime as a `chrono` duration.
    pub fn lifespan(&self) -> chrono::Duration {
        let secs = i64::try_from(self.notification_lifespan_secs).unwrap_or(i64::MAX);
        chrono::Duration::try_seconds(secs).unwrap_or(chrono::Duration::MAX)
    }

    /// Merge a partial update, only touching fields that are `Some`.
    pub fn merge(&mut self, update: &NotificationSettingsUpdate) {
        if let Some(enabled) = update.enable_added_login_prompt {
            self.enable_added_login_prompt = enabled;
        }
        if let Some(enabled) = update.enable_changed_password_prompt {
            self.enable_changed_password_prompt = enabled;
        }
        if let Some(secs) = update.notification_lifespan_secs {
            self.notification_lifespan_secs = secs;
        }
        if let Some(strategy) = update.default_uri_match {
            self.default_uri_match = strategy;
        }
    }
}

/// Partial settings update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationSettingsUpdate {
    pub enable_added_login_prompt: Option<bool>,
    pub enable_changed_password_prompt: Option<bool>,
    pub notification_lifespan_secs: Option<u64>,
    pub default_uri_match: Option<UriMatchStrategy>,
}

/// Errors raised by settings validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Notification lifespan must be between 1 and {max} seconds, got {value}")]
    InvalidLifespan { value: u64, max: u64 },

    #[error("`never` cannot be the default URI match strategy")]
    NeverAsDefaultMatch,
}

/// Validate settings before they are used to build a service.
pub fn validate_settings(settings: &NotificationSettings) -> Result<(), SettingsError> {
    let secs = settings.notification_lifespan_secs;
    if secs == 0 || secs > MAX_NOTIFICATION_LIFESPAN_SECS {
        return Err(SettingsError::InvalidLifespan {
            value: secs,
            max: MAX_NOTIFICATION_LIFESPAN_SECS,
        });
    }
    if matches!(settings.default_uri_match, UriMatchStrategy::Never) {
        return Err(SettingsError::NeverAsDefaultMatch);
    }
    Ok(())
}
