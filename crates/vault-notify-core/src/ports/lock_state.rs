//! Vault lock state trait definition.

use crate::domain::VaultLockState;

/// Read access to the active account's lock state.
///
/// Owned by the authentication subsystem. Adapters that expose the state as
/// a stream should also hand a `watch::Receiver` to
/// [`watch_unlocks`](crate::services::watch_unlocks) so deferred
/// notifications are replayed on unlock.
#[cfg_attr(test, mockall::automock)]
pub trait LockStatePort: Send + Sync {
    fn lock_state(&self) -> VaultLockState;
}
