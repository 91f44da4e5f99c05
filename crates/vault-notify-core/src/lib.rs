//! Credential-save notification engine.
//!
//! Decides whether a submitted login form should prompt the user to save a
//! new login, update an existing one, or wait for the vault to unlock, and
//! runs the save/update once the user accepts.
//!
//! Infrastructure lives behind the traits in [`ports`]; [`services`] holds
//! the orchestration and [`notification`] the pure decision and queue logic.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod messages;
pub mod notification;
pub mod ports;
pub mod services;
pub mod settings;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    CredentialCandidate, FormSubmission, LoginCipher, LoginUri, NewLoginCipher, RepromptType,
    SecurityTask, TabId, TabRef, TaskSummary, UriMatchStrategy, VaultLockState,
};
pub use messages::{
    ExtensionMessage, MessageSender, RetryCommand, RuntimeMessage, SaveCompletion, SaveRequest,
    TabMessage,
};
pub use notification::{
    AddLoginData, ChangePasswordData, Decision, FollowUp, NotificationError, NotificationId,
    NotificationKind, NotificationQueue, QueuedNotification, SaveOutcome, SkipReason,
    TriggerOutcome, UnlockVaultData,
};
pub use ports::{
    CipherStorePort, CredentialCeremonyPort, EditTarget, FolderLookupPort, LockStatePort,
    NotificationPorts, NotificationSettingsPort, RepromptPort, SecurityTaskPort, StoreError,
    TabMessengerPort, VaultPopoutPort,
};
pub use services::{DispatchOutcome, NotificationService, watch_unlocks};
pub use settings::{
    DEFAULT_NOTIFICATION_LIFESPAN_SECS, NotificationSettings, NotificationSettingsUpdate,
    SettingsError, validate_settings,
};
pub use utils::domain::{UriMatcher, domain_of, item_name_for};
