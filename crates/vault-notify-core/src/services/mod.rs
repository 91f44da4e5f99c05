//! Core services - orchestration over the ports.
//!
//! Services here are pure orchestrators: they know the ports, never the
//! concrete adapters behind them.

mod notification_service;
mod unlock_watch;

pub use notification_service::{Clock, DispatchOutcome, NotificationService};
pub use unlock_watch::watch_unlocks;
