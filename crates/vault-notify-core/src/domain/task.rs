//! Security tasks attached to organization logins.

use serde::{Deserialize, Serialize};

/// A pending "update this password" task assigned by an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityTask {
    pub id: String,
    pub organization_id: String,
    pub cipher_id: String,
}

/// Summary surfaced in the banner after a task-bearing login is updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub org_name: String,
    pub remaining_tasks_count: usize,
}
