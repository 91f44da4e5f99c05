//! Notification error and outcome types.
//!
//! None of these cross the tab boundary: tabs only ever see a banner or a
//! `{ error }` payload. They exist so callers and tests can observe why a
//! message did or did not produce a notification.

use thiserror::Error;

use super::types::{NotificationId, NotificationKind};
use crate::ports::StoreError;

/// Failure taxonomy of the notification engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationError {
    /// Unparsable page URL or an empty submission.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The relevant notification setting is disabled.
    #[error("Notification disabled by setting: {0}")]
    PolicyGated(&'static str),

    /// No account is logged in.
    #[error("No authenticated account")]
    Unauthenticated,

    /// Creating or updating the login failed.
    #[error("Storage failure: {0}")]
    StorageFailure(#[from] StoreError),

    /// The user declined the master-password prompt.
    #[error("Master password reprompt declined")]
    RepromptDenied,
}

/// Why a message was a silent no-op.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SkipReason {
    #[error("credential assertion in progress")]
    CeremonyInProgress,
    #[error("no field was filled")]
    BlankSubmission,
    #[error("page URL has no domain")]
    InvalidUrl,
    #[error("logged out")]
    LoggedOut,
    #[error("all notification prompts disabled")]
    NotificationsDisabled,
    #[error("add-login prompt disabled")]
    AddLoginDisabled,
    #[error("changed-password prompt disabled")]
    ChangePasswordDisabled,
    #[error("password and new password are identical")]
    PasswordUnchanged,
    #[error("locked vault with no password to act on")]
    LockedWithoutPassword,
    #[error("stored logins already up to date")]
    NothingToChange,
    #[error("message has no sender tab")]
    NoSenderTab,
    #[error("no matching queue entry")]
    NoQueuedNotification,
    #[error("candidate lookup failed")]
    LookupFailed,
    #[error("command cannot be replayed after unlock")]
    NotReplayable,
}

impl SkipReason {
    /// Error category of this skip, if it maps onto the failure taxonomy.
    ///
    /// Skips that are simply "nothing to do" have no category.
    pub fn category(self) -> Option<NotificationError> {
        match self {
            Self::BlankSubmission | Self::InvalidUrl => {
                Some(NotificationError::InvalidInput(self.to_string()))
            }
            Self::LoggedOut => Some(NotificationError::Unauthenticated),
            Self::NotificationsDisabled => Some(NotificationError::PolicyGated("all")),
            Self::AddLoginDisabled => {
                Some(NotificationError::PolicyGated("enableAddedLoginPrompt"))
            }
            Self::ChangePasswordDisabled => {
                Some(NotificationError::PolicyGated("enableChangedPasswordPrompt"))
            }
            _ => None,
        }
    }
}

/// Result of a trigger message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A new entry was queued for the tab.
    Queued {
        id: NotificationId,
        kind: NotificationKind,
    },
    /// An equivalent entry was already queued for the tab and domain.
    AlreadyQueued,
    /// Nothing was queued.
    Skipped(SkipReason),
}

impl TriggerOutcome {
    pub const fn is_queued(&self) -> bool {
        matches!(self, Self::Queued { .. })
    }

    /// The queued payload, if any.
    pub const fn kind(&self) -> Option<&NotificationKind> {
        match self {
            Self::Queued { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The login was created or updated.
    Saved { cipher_id: String },
    /// The add/edit popout was opened instead of saving.
    Edited,
    /// The vault is locked; the save replays after unlock.
    Deferred,
    /// Nothing to save.
    Skipped(SkipReason),
    /// The save failed or was aborted.
    Failed(NotificationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_categories() {
        assert_eq!(
            SkipReason::LoggedOut.category(),
            Some(NotificationError::Unauthenticated)
        );
        assert!(matches!(
            SkipReason::InvalidUrl.category(),
            Some(NotificationError::InvalidInput(_))
        ));
        assert!(matches!(
            SkipReason::AddLoginDisabled.category(),
            Some(NotificationError::PolicyGated(_))
        ));
        assert_eq!(SkipReason::NothingToChange.category(), None);
    }

    #[test]
    fn test_storage_failure_from_store_error() {
        let err: NotificationError = StoreError::Storage("disk full".to_string()).into();
        assert_eq!(err.to_string(), "Storage failure: Storage error: disk full");
    }
}
