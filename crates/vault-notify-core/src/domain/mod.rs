//! Domain types for the notification engine.
//!
//! These are pure data types with no infrastructure dependencies. Decryption,
//! storage and browser APIs are all behind ports.

mod cipher;
mod form;
mod task;

pub use cipher::{
    CredentialCandidate, LoginCipher, LoginUri, NewLoginCipher, RepromptType, UriMatchStrategy,
};
pub use form::{FormSubmission, TabId, TabRef, VaultLockState};
pub use task::{SecurityTask, TaskSummary};
