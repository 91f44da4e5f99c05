//! Lock-state observer that replays deferred notifications.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use super::NotificationService;
use crate::domain::VaultLockState;

/// Replay deferred notifications every time the vault becomes unlocked.
///
/// Runs until the sending half of `lock_state` is dropped. Spawn it next to
/// the service at the composition root.
pub async fn watch_unlocks(
    service: Arc<NotificationService>,
    mut lock_state: watch::Receiver<VaultLockState>,
) {
    let mut previous = *lock_state.borrow_and_update();

    while lock_state.changed().await.is_ok() {
        let current = *lock_state.borrow_and_update();
        debug!(?previous, ?current, "Vault lock state changed");

        if current.is_unlocked() && !previous.is_unlocked() {
            service.handle_vault_unlocked().await;
        }
        previous = current;
    }
}
