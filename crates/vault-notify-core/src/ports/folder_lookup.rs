use async_trait::async_trait;

use super::StoreError;

/// Folder existence checks for logins created from a notification.
#[async_trait]
pub trait FolderLookupPort: Send + Sync {
    async fn folder_exists(&self, folder_id: &str) -> Result<bool, StoreError>;
}
