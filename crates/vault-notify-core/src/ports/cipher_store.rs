//! Cipher store trait definition.
//!
//! This port covers reading decrypted logins and persisting new or updated
//! ones. Encryption and sync are the implementation's concern.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::{LoginCipher, NewLoginCipher};

/// Decrypted login storage.
///
/// # Design Rules
///
/// - Returns decrypted domain records only
/// - `find_by_domain` may over-approximate; URI matching is applied by the caller
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CipherStorePort: Send + Sync {
    /// All logins that may belong to `domain`.
    async fn find_by_domain(&self, domain: &str) -> Result<Vec<LoginCipher>, StoreError>;

    /// Load a single login by id.
    async fn get(&self, id: &str) -> Result<Option<LoginCipher>, StoreError>;

    /// Persist a new login and return it with its assigned id.
    async fn create(&self, cipher: NewLoginCipher) -> Result<LoginCipher, StoreError>;

    /// Persist changes to an existing login.
    async fn update(&self, cipher: LoginCipher) -> Result<LoginCipher, StoreError>;

    /// Remember that the user never wants to save logins for `domain`.
    async fn save_never_domain(&self, domain: &str) -> Result<(), StoreError>;
}
