//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define what the notification engine expects from the browser,
//! the vault and the authentication subsystem. They carry no
//! implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No browser API or storage types in any signature
//! - Async only where the collaborator may suspend (storage, prompts)
//! - Synchronous reads for state the engine samples per decision

pub mod cipher_store;
pub mod credential_ceremony;
pub mod domain_match;
pub mod folder_lookup;
pub mod lock_state;
pub mod notification_settings;
pub mod reprompt;
pub mod security_tasks;
pub mod tab_messenger;
pub mod vault_popout;

use std::sync::Arc;
use thiserror::Error;

pub use cipher_store::CipherStorePort;
pub use credential_ceremony::{CredentialCeremonyPort, NoCeremonies};
pub use domain_match::DomainMatchPolicy;
pub use folder_lookup::FolderLookupPort;
pub use lock_state::LockStatePort;
pub use notification_settings::NotificationSettingsPort;
pub use reprompt::RepromptPort;
pub use security_tasks::{NoSecurityTasks, SecurityTaskPort};
pub use tab_messenger::TabMessengerPort;
pub use vault_popout::{EditTarget, VaultPopoutPort};

/// Container for every collaborator the notification service talks to.
///
/// Lives in core so adapters can wire concrete implementations without the
/// service depending on them.
#[derive(Clone)]
pub struct NotificationPorts {
    /// Current vault lock state.
    pub lock_state: Arc<dyn LockStatePort>,
    /// Decrypted login storage.
    pub ciphers: Arc<dyn CipherStorePort>,
    /// Folder existence checks for new logins.
    pub folders: Arc<dyn FolderLookupPort>,
    /// Stored-URI to page-URL matching.
    pub domain_match: Arc<dyn DomainMatchPolicy>,
    /// Master-password re-entry.
    pub reprompt: Arc<dyn RepromptPort>,
    /// User notification switches.
    pub settings: Arc<dyn NotificationSettingsPort>,
    /// Messages to browser tabs.
    pub tabs: Arc<dyn TabMessengerPort>,
    /// In-flight passkey assertions per tab.
    pub ceremonies: Arc<dyn CredentialCeremonyPort>,
    /// Organization security tasks.
    pub tasks: Arc<dyn SecurityTaskPort>,
    /// Extension popout windows.
    pub popouts: Arc<dyn VaultPopoutPort>,
}

/// Errors raised by storage-backed ports.
///
/// Abstracts away transport and storage details so services only see
/// domain failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The requested login or folder was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Remote sync or network failure.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl StoreError {
    /// Message shown to the user in the notification banner.
    pub fn user_message(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::Storage(msg) | Self::Transport(msg) => msg,
        }
    }
}
