//! Lock state backed by a `tokio::sync::watch` channel.

use tokio::sync::watch;
use tracing::info;

use vault_notify_core::ports::LockStatePort;
use vault_notify_core::VaultLockState;

/// Observable vault lock state.
///
/// Reads are synchronous; [`WatchLockState::subscribe`] hands out receivers
/// for [`watch_unlocks`](vault_notify_core::watch_unlocks).
#[derive(Debug)]
pub struct WatchLockState {
    tx: watch::Sender<VaultLockState>,
}

impl WatchLockState {
    pub fn new(initial: VaultLockState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Change the state; subscribers are notified only on an actual change.
    pub fn set(&self, state: VaultLockState) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
        if changed {
            info!(?state, "Vault lock state changed");
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<VaultLockState> {
        self.tx.subscribe()
    }
}

impl Default for WatchLockState {
    fn default() -> Self {
        Self::new(VaultLockState::default())
    }
}

impl LockStatePort for WatchLockState {
    fn lock_state(&self) -> VaultLockState {
        *self.tx.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_notifies_subscribers_on_change() {
        let state = WatchLockState::new(VaultLockState::Locked);
        let mut rx = state.subscribe();

        state.set(VaultLockState::Locked);
        assert!(!rx.has_changed().unwrap());

        state.set(VaultLockState::Unlocked);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), VaultLockState::Unlocked);
        assert_eq!(state.lock_state(), VaultLockState::Unlocked);
    }
}
