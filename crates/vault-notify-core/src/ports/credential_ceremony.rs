//! Passkey ceremony tracking.

use crate::domain::TabId;

/// Reports whether a passkey assertion is in progress for a tab.
///
/// Form submissions that happen during a ceremony belong to the passkey
/// flow and must not raise password notifications.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialCeremonyPort: Send + Sync {
    fn is_assertion_in_progress(&self, tab_id: TabId) -> bool;
}

/// Ceremony tracker for contexts without passkey support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCeremonies;

impl CredentialCeremonyPort for NoCeremonies {
    fn is_assertion_in_progress(&self, _tab_id: TabId) -> bool {
        false
    }
}
