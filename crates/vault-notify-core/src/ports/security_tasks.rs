//! Organization security task trait definition.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::SecurityTask;

/// Pending "change this password" tasks assigned by organizations.
#[async_trait]
pub trait SecurityTaskPort: Send + Sync {
    /// Whether the task feature is enabled for the active account.
    async fn tasks_enabled(&self) -> bool;

    /// All pending tasks for the active account.
    async fn pending_tasks(&self) -> Result<Vec<SecurityTask>, StoreError>;

    /// Mark a task as done after its login was updated.
    async fn complete_task(&self, task_id: &str) -> Result<(), StoreError>;

    /// Display name of an organization.
    async fn organization_name(&self, organization_id: &str) -> Option<String>;
}

/// Task source for accounts without organization tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSecurityTasks;

#[async_trait]
impl SecurityTaskPort for NoSecurityTasks {
    async fn tasks_enabled(&self) -> bool {
        false
    }

    async fn pending_tasks(&self) -> Result<Vec<SecurityTask>, StoreError> {
        Ok(Vec::new())
    }

    async fn complete_task(&self, _task_id: &str) -> Result<(), StoreError> {
        Ok(())
    }

    async fn organization_name(&self, _organization_id: &str) -> Option<String> {
        None
    }
}
