//! In-memory adapters for every `vault-notify-core` port.
//!
//! Nothing here is persisted. The adapters back the CLI scenario runner and
//! the integration tests, and record what the service told the browser so
//! callers can inspect it afterwards.

#![deny(unsafe_code)]

pub mod adapters;
pub mod factory;

// Re-export factory for convenient access
pub use factory::{InMemoryBackend, StoreFactory};

// Re-export adapter implementations
pub use adapters::{
    CeremonyTracker, InMemoryCipherStore, InMemoryFolders, InMemoryTasks, RecordingPopouts,
    RecordingTabMessenger, ScriptedReprompt, StaticSettings, WatchLockState,
};
