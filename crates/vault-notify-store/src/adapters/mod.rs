//! Port implementations backed by process memory.
//!
//! Interior state sits behind `std::sync` locks for synchronous ports and
//! `tokio::sync` locks where the port is async.

mod ceremonies;
mod ciphers;
mod folders;
mod lock_state;
mod popouts;
mod reprompt;
mod settings;
mod tabs;
mod tasks;

pub use ceremonies::CeremonyTracker;
pub use ciphers::InMemoryCipherStore;
pub use folders::InMemoryFolders;
pub use lock_state::WatchLockState;
pub use popouts::RecordingPopouts;
pub use reprompt::ScriptedReprompt;
pub use settings::StaticSettings;
pub use tabs::RecordingTabMessenger;
pub use tasks::InMemoryTasks;
