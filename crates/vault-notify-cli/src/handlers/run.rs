//! Run command handler.
//!
//! Replays a scenario's steps against the composed service and prints what
//! each step did, followed by the final vault and queue state.

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use vault_notify_core::{
    LoginCipher, MessageSender, QueuedNotification, RuntimeMessage, TabId, TabMessage,
    VaultLockState,
};

use crate::bootstrap::CliContext;
use crate::scenario::Step;

/// What one step did.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub label: String,
    pub detail: String,
}

/// A message the service sent to a tab.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveredMessage {
    pub tab_id: TabId,
    pub message: TabMessage,
}

/// State left behind once every step ran.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub queue: Vec<QueuedNotification>,
    pub ciphers: Vec<LoginCipher>,
    pub never_domains: Vec<String>,
    pub tab_messages: Vec<DeliveredMessage>,
    pub broadcasts: Vec<RuntimeMessage>,
    pub unlock_popouts: Vec<TabId>,
}

#[derive(Serialize)]
struct RunReport<'a> {
    steps: &'a [StepReport],
    summary: &'a RunSummary,
}

/// Execute the run command.
///
/// # Arguments
///
/// * `ctx` - The composed CLI context
/// * `steps` - Steps to replay, in order
/// * `json` - Print a single JSON document instead of text
pub async fn execute(ctx: &CliContext, steps: &[Step], json: bool) -> Result<()> {
    let reports = run_steps(ctx, steps).await;
    let summary = summarize(ctx).await;

    if json {
        let report = RunReport {
            steps: &reports,
            summary: &summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for report in &reports {
        println!("[{}] {}: {}", report.index, report.label, report.detail);
    }
    println!();
    println!("Queued notifications: {}", summary.queue.len());
    for entry in &summary.queue {
        println!(
            "  tab {} {} {} (expires {})",
            entry.tab.id,
            entry.domain,
            entry.kind.label(),
            entry.expires_at.to_rfc3339()
        );
    }
    println!("Stored logins: {}", summary.ciphers.len());
    for cipher in &summary.ciphers {
        println!("  {} {} {}", cipher.id, cipher.name, cipher.username);
    }
    if !summary.never_domains.is_empty() {
        println!("Never save: {}", summary.never_domains.join(", "));
    }
    println!("Tab messages:");
    for delivered in &summary.tab_messages {
        println!(
            "  tab {} <- {}",
            delivered.tab_id,
            serde_json::to_string(&delivered.message)?
        );
    }
    for broadcast in &summary.broadcasts {
        println!("Broadcast: {}", serde_json::to_string(broadcast)?);
    }

    Ok(())
}

/// Replay each step and describe its effect.
pub async fn run_steps(ctx: &CliContext, steps: &[Step]) -> Vec<StepReport> {
    let mut reports = Vec::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        let label = step.label();
        info!(step = index, label = %label, "Replaying step");
        let detail = run_step(ctx, step).await;
        reports.push(StepReport {
            index,
            label,
            detail,
        });
    }
    reports
}

async fn run_step(ctx: &CliContext, step: &Step) -> String {
    let backend = &ctx.backend;
    let service = ctx.service();

    match step {
        Step::Message { tab, message } => {
            let sender = tab
                .clone()
                .map_or_else(MessageSender::detached, MessageSender::from_tab);
            let outcome = service.handle_message(message.clone(), sender).await;
            format!("{outcome:?}")
        }
        Step::Unlock => {
            backend.lock_state.set(VaultLockState::Unlocked);
            let replayed = service.handle_vault_unlocked().await;
            format!("replayed {}: {replayed:?}", replayed.len())
        }
        Step::Lock => {
            backend.lock_state.set(VaultLockState::Locked);
            "locked".to_string()
        }
        Step::Logout => {
            backend.lock_state.set(VaultLockState::LoggedOut);
            "logged out".to_string()
        }
        Step::CloseTab { tab_id } => {
            let removed = service.handle_tab_removed(*tab_id).await;
            format!("removed {removed}")
        }
        Step::Navigate { tab } => {
            let removed = service.handle_tab_navigated(tab).await;
            format!("removed {removed}")
        }
        Step::ActivateTab { tab } => {
            backend.tabs.set_active_tab(Some(tab.clone()));
            "active".to_string()
        }
        Step::Wait { secs } => {
            ctx.advance_clock(*secs);
            format!("clock +{secs}s")
        }
        Step::FailWrites { fail } => {
            backend.ciphers.set_fail_writes(*fail);
            format!("fail writes: {fail}")
        }
        Step::Reprompt { accept } => {
            backend.reprompt.set_accept(*accept);
            format!("reprompt accepts: {accept}")
        }
    }
}

/// Final queue, vault and delivery state.
pub async fn summarize(ctx: &CliContext) -> RunSummary {
    let backend = &ctx.backend;
    RunSummary {
        queue: ctx.service().queue_snapshot().await,
        ciphers: backend.ciphers.all().await,
        never_domains: backend.ciphers.never_domains().await,
        tab_messages: backend
            .tabs
            .sent()
            .into_iter()
            .map(|(tab_id, message)| DeliveredMessage { tab_id, message })
            .collect(),
        broadcasts: backend.tabs.broadcasts(),
        unlock_popouts: backend.popouts.unlock_requests(),
    }
}
