//! Extension popout windows.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{LoginCipher, NewLoginCipher, TabId, TabRef};

/// Login handed to the add/edit popout when the user chooses "edit".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EditTarget {
    /// A login that would have been created.
    New { cipher: NewLoginCipher },
    /// An existing login with the new password applied but not saved.
    Existing { cipher: LoginCipher },
}

/// Opens extension popout windows on behalf of a tab.
#[async_trait]
pub trait VaultPopoutPort: Send + Sync {
    /// Open the unlock popout; returns the popout's own tab id when known.
    async fn open_unlock(&self, tab: &TabRef) -> Option<TabId>;

    /// Open the add/edit item popout prefilled with `target`.
    async fn open_add_edit(&self, tab: &TabRef, target: EditTarget);
}
