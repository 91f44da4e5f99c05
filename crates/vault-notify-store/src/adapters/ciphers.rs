//! In-memory cipher store.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use vault_notify_core::ports::{CipherStorePort, StoreError};
use vault_notify_core::{LoginCipher, NewLoginCipher, domain_of};

/// Decrypted logins held in memory.
///
/// `find_by_domain` returns every login with a URI on the same domain or a
/// parent/child domain; per-URI match strategies are left to the caller's
/// `DomainMatchPolicy`.
#[derive(Debug, Default)]
pub struct InMemoryCipherStore {
    ciphers: RwLock<Vec<LoginCipher>>,
    never_domains: RwLock<BTreeSet<String>>,
    fail_writes: AtomicBool,
}

impl InMemoryCipherStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with logins.
    pub fn with_ciphers(ciphers: Vec<LoginCipher>) -> Self {
        Self {
            ciphers: RwLock::new(ciphers),
            ..Self::default()
        }
    }

    /// Make every subsequent create/update fail with a storage error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Every stored login, in insertion order.
    pub async fn all(&self) -> Vec<LoginCipher> {
        self.ciphers.read().await.clone()
    }

    /// Domains the user never wants to save logins for.
    pub async fn never_domains(&self) -> Vec<String> {
        self.never_domains.read().await.iter().cloned().collect()
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(StoreError::Storage("vault is read-only".to_string()))
        } else {
            Ok(())
        }
    }
}

fn related_domain(stored: &str, domain: &str) -> bool {
    stored == domain
        || stored.ends_with(&format!(".{domain}"))
        || domain.ends_with(&format!(".{stored}"))
}

#[async_trait]
impl CipherStorePort for InMemoryCipherStore {
    async fn find_by_domain(&self, domain: &str) -> Result<Vec<LoginCipher>, StoreError> {
        let ciphers = self.ciphers.read().await;
        Ok(ciphers
            .iter()
            .filter(|cipher| {
                cipher.uris.iter().any(|uri| {
                    domain_of(&uri.uri).is_some_and(|stored| related_domain(&stored, domain))
                })
            })
            .cloned()
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Option<LoginCipher>, StoreError> {
        let ciphers = self.ciphers.read().await;
        Ok(ciphers.iter().find(|cipher| cipher.id == id).cloned())
    }

    async fn create(&self, cipher: NewLoginCipher) -> Result<LoginCipher, StoreError> {
        self.check_writable()?;

        let mut created = LoginCipher::new(Uuid::new_v4().to_string(), cipher.name)
            .with_credentials(cipher.username, cipher.password);
        created.uris = cipher.uris;
        created.folder_id = cipher.folder_id;

        self.ciphers.write().await.push(created.clone());
        debug!(cipher_id = %created.id, "Created login");
        Ok(created)
    }

    async fn update(&self, cipher: LoginCipher) -> Result<LoginCipher, StoreError> {
        self.check_writable()?;

        let mut ciphers = self.ciphers.write().await;
        let slot = ciphers
            .iter_mut()
            .find(|existing| existing.id == cipher.id)
            .ok_or_else(|| StoreError::NotFound(format!("login {}", cipher.id)))?;
        *slot = cipher.clone();
        debug!(cipher_id = %cipher.id, "Updated login");
        Ok(cipher)
    }

    async fn save_never_domain(&self, domain: &str) -> Result<(), StoreError> {
        self.never_domains.write().await.insert(domain.to_string());
        Ok(())
    }
}
