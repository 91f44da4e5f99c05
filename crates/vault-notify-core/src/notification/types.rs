//! Queued notification types.
//!
//! These are the entries the content script renders as a banner, so they
//! are serde-serializable in the extension's camelCase wire format.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{TabId, TabRef};
use crate::messages::RetryCommand;

/// Unique identifier of a queued notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Offer to save a login that is not in the vault yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLoginData {
    pub username: String,
    pub password: String,
    /// Page URL the login was submitted on.
    pub uri: String,
}

/// Offer to update the password of existing logins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordData {
    /// Logins the update applies to. `None` while the vault is locked and
    /// the candidates are not known yet.
    pub cipher_ids: Option<Vec<String>>,
    pub new_password: String,
}

/// What an unlock-deferred entry turns into once the vault unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FollowUp {
    AddLogin(AddLoginData),
    ChangePassword(ChangePasswordData),
}

/// A notification that is waiting for the vault to unlock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockVaultData {
    pub follow_up: FollowUp,
    /// The command replayed after unlock.
    pub retry: RetryCommand,
}

/// Payload of a queued notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NotificationKind {
    AddLogin(AddLoginData),
    ChangePassword(ChangePasswordData),
    UnlockVault(UnlockVaultData),
}

impl NotificationKind {
    /// Short name for logging.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AddLogin(_) => "add",
            Self::ChangePassword(_) => "change",
            Self::UnlockVault(_) => "unlock",
        }
    }

    /// Whether accepting this entry persists something.
    pub const fn is_savable(&self) -> bool {
        matches!(self, Self::AddLogin(_) | Self::ChangePassword(_))
    }

    /// Equality that ignores the replay payload of deferred entries.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UnlockVault(a), Self::UnlockVault(b)) => a.follow_up == b.follow_up,
            _ => self == other,
        }
    }
}

/// An entry in the notification queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedNotification {
    pub id: NotificationId,
    pub tab: TabRef,
    /// Domain the entry was raised for.
    pub domain: String,
    #[serde(flatten)]
    pub kind: NotificationKind,
    pub launched_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl QueuedNotification {
    /// Create an entry launched at `now` that lives for `lifespan`.
    pub fn new(
        tab: TabRef,
        domain: impl Into<String>,
        kind: NotificationKind,
        now: DateTime<Utc>,
        lifespan: Duration,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            tab,
            domain: domain.into(),
            kind,
            launched_at: now,
            expires_at: now + lifespan,
        }
    }

    pub const fn tab_id(&self) -> TabId {
        self.tab.id
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// The retry command of an unlock-deferred entry.
    pub const fn retry(&self) -> Option<&RetryCommand> {
        match &self.kind {
            NotificationKind::UnlockVault(data) => Some(&data.retry),
            _ => None,
        }
    }
}
