//! Scenario and decision input files.
//!
//! A scenario describes the vault the engine starts from and the sequence
//! of browser events to replay against it. Both formats are JSON with
//! camelCase keys, matching the wire format of the messages they embed.

use std::path::Path;

use serde::Deserialize;
use vault_notify_core::{
    CredentialCandidate, ExtensionMessage, FormSubmission, LoginCipher, NotificationSettings, TabId,
    TabRef, VaultLockState,
};

use crate::error::CliError;

/// Starting state plus the events to replay.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scenario {
    pub lock_state: VaultLockState,
    pub settings: NotificationSettings,
    pub ciphers: Vec<LoginCipher>,
    pub folders: Vec<String>,
    pub steps: Vec<Step>,
}

/// One browser event.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Step {
    /// A runtime message, from a tab or from an extension page when `tab` is absent.
    Message {
        #[serde(default)]
        tab: Option<TabRef>,
        message: ExtensionMessage,
    },
    /// The user unlocked the vault.
    Unlock,
    /// The vault locked.
    Lock,
    /// The account logged out.
    Logout,
    /// A tab was closed.
    CloseTab { tab_id: TabId },
    /// A tab loaded a new URL.
    Navigate { tab: TabRef },
    /// Focus moved to a tab.
    ActivateTab { tab: TabRef },
    /// Wall-clock time passes.
    Wait { secs: u64 },
    /// Make the vault reject (or accept again) writes.
    FailWrites { fail: bool },
    /// How the next master-password prompts are answered.
    Reprompt { accept: bool },
}

impl Step {
    /// Short label for reports.
    pub fn label(&self) -> String {
        match self {
            Step::Message { message, .. } => message.command().to_string(),
            Step::Unlock => "unlock".to_string(),
            Step::Lock => "lock".to_string(),
            Step::Logout => "logout".to_string(),
            Step::CloseTab { tab_id } => format!("closeTab {tab_id}"),
            Step::Navigate { tab } => format!("navigate {} {}", tab.id, tab.url),
            Step::ActivateTab { tab } => format!("activateTab {}", tab.id),
            Step::Wait { secs } => format!("wait {secs}s"),
            Step::FailWrites { fail } => format!("failWrites {fail}"),
            Step::Reprompt { accept } => format!("reprompt {accept}"),
        }
    }
}

impl Scenario {
    /// Read a scenario from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Which decision procedure to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DecideMode {
    /// The unified form-submission procedure.
    #[default]
    Unified,
    /// The legacy add-login procedure.
    AddLogin,
    /// The legacy changed-password procedure.
    ChangedPassword,
}

/// A single decision to evaluate without any vault state.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecideInput {
    #[serde(default)]
    pub mode: DecideMode,
    pub form: FormSubmission,
    #[serde(default)]
    pub candidates: Vec<CredentialCandidate>,
}

impl DecideInput {
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
