//! Notification decisions and queue state.
//!
//! Everything here is synchronous and side-effect free. The
//! [`NotificationService`](crate::services::NotificationService) drives it
//! and performs the I/O.

mod decision;
mod errors;
mod queue;
mod types;

pub use decision::{
    Decision, decide_add_login, decide_changed_password, decide_cipher_notification,
};
pub use errors::{NotificationError, SaveOutcome, SkipReason, TriggerOutcome};
pub use queue::NotificationQueue;
pub use types::{
    AddLoginData, ChangePasswordData, FollowUp, NotificationId, NotificationKind,
    QueuedNotification, UnlockVaultData,
};
