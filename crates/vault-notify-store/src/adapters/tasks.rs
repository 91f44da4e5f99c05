//! In-memory organization security tasks.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use vault_notify_core::SecurityTask;
use vault_notify_core::ports::{SecurityTaskPort, StoreError};

/// Pending tasks and organization names held in memory.
#[derive(Debug, Default)]
pub struct InMemoryTasks {
    enabled: AtomicBool,
    pending: RwLock<Vec<SecurityTask>>,
    organizations: HashMap<String, String>,
}

impl InMemoryTasks {
    /// Task source with the feature enabled.
    pub fn new(tasks: Vec<SecurityTask>, organizations: HashMap<String, String>) -> Self {
        Self {
            enabled: AtomicBool::new(true),
            pending: RwLock::new(tasks),
            organizations,
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub async fn pending(&self) -> Vec<SecurityTask> {
        self.pending.read().await.clone()
    }
}

#[async_trait]
impl SecurityTaskPort for InMemoryTasks {
    async fn tasks_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    async fn pending_tasks(&self) -> Result<Vec<SecurityTask>, StoreError> {
        Ok(self.pending.read().await.clone())
    }

    async fn complete_task(&self, task_id: &str) -> Result<(), StoreError> {
        let mut pending = self.pending.write().await;
        let before = pending.len();
        pending.retain(|task| task.id != task_id);
        if pending.len() == before {
            return Err(StoreError::NotFound(format!("task {task_id}")));
        }
        debug!(task_id, "Completed security task");
        Ok(())
    }

    async fn organization_name(&self, organization_id: &str) -> Option<String> {
        self.organizations.get(organization_id).cloned()
    }
}
