//! Tab messaging trait definition.
//!
//! Delivery is fire-and-forget: the engine never waits for a tab to answer
//! and a closed tab simply drops the message.

use crate::domain::{TabId, TabRef};
use crate::messages::{RuntimeMessage, TabMessage};

/// Outbound channel to browser tabs and the rest of the extension.
#[cfg_attr(test, mockall::automock)]
pub trait TabMessengerPort: Send + Sync {
    /// Deliver a message to one tab.
    fn send_to_tab(&self, tab_id: TabId, message: TabMessage);

    /// Broadcast a message to every extension context.
    fn broadcast(&self, message: RuntimeMessage);

    /// The focused tab of the current window, if any.
    fn active_tab(&self) -> Option<TabRef>;
}
