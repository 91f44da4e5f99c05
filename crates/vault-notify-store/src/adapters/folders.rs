use std::collections::HashSet;

use async_trait::async_trait;

use vault_notify_core::ports::{FolderLookupPort, StoreError};

/// Fixed set of folder ids.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFolders {
    ids: HashSet<String>,
}

impl InMemoryFolders {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl FolderLookupPort for InMemoryFolders {
    async fn folder_exists(&self, folder_id: &str) -> Result<bool, StoreError> {
        Ok(self.ids.contains(folder_id))
    }
}
