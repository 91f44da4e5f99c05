//! Wire messages exchanged with content scripts and extension pages.
//!
//! Every message is a JSON object tagged by its `command` field, matching
//! what the browser runtime delivers.

use serde::{Deserialize, Serialize};

use crate::domain::{FormSubmission, TabRef, TaskSummary};
use crate::notification::QueuedNotification;

/// Who sent an extension message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSender {
    /// Originating tab; `None` for extension pages without a tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<TabRef>,
}

impl MessageSender {
    pub const fn from_tab(tab: TabRef) -> Self {
        Self { tab: Some(tab) }
    }

    pub const fn detached() -> Self {
        Self { tab: None }
    }
}

/// A command replayed once the vault unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryCommand {
    pub message: Box<ExtensionMessage>,
    pub sender: MessageSender,
}

impl RetryCommand {
    pub fn new(message: ExtensionMessage, sender: MessageSender) -> Self {
        Self {
            message: Box::new(message),
            sender,
        }
    }
}

/// Body of a `bgSaveCipher` request sent by the notification banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveRequest {
    /// Open the add/edit popout instead of saving directly.
    pub edit: bool,
    /// Folder for a newly created login.
    #[serde(rename = "folder", skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    /// Login to update when the banner offered several.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cipher_id: Option<String>,
}

/// Messages the notification engine accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum ExtensionMessage {
    /// Legacy "new login submitted" trigger.
    BgAddLogin { form: FormSubmission },
    /// Legacy "password changed" trigger.
    BgChangedPassword { form: FormSubmission },
    /// Unified form-submission trigger.
    BgTriggerCipherNotification { form: FormSubmission },
    /// User accepted the banner.
    BgSaveCipher(SaveRequest),
    /// User chose "never for this site".
    BgNeverSave,
    /// Drop every queued entry for the sender's tab.
    BgRemoveTabFromQueue,
    /// Ask the sender's tab to close its banner.
    BgCloseNotificationBar {
        #[serde(default, rename = "fadeOutNotification")]
        fade_out: bool,
    },
    /// Resize the sender's banner.
    BgAdjustNotificationBar { height: u32 },
    /// A tab asks whether it has anything to show.
    CheckNotificationQueue,
    /// The unlock popout finished unlocking on behalf of `retry`.
    UnlockCompleted { retry: RetryCommand },
    /// The tab asks to reopen the unlock popout.
    BgReopenUnlockPopout,
}

impl ExtensionMessage {
    /// Parse a message from its JSON form.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The command tag, for logging.
    pub const fn command(&self) -> &'static str {
        match self {
            Self::BgAddLogin { .. } => "bgAddLogin",
            Self::BgChangedPassword { .. } => "bgChangedPassword",
            Self::BgTriggerCipherNotification { .. } => "bgTriggerCipherNotification",
            Self::BgSaveCipher(_) => "bgSaveCipher",
            Self::BgNeverSave => "bgNeverSave",
            Self::BgRemoveTabFromQueue => "bgRemoveTabFromQueue",
            Self::BgCloseNotificationBar { .. } => "bgCloseNotificationBar",
            Self::BgAdjustNotificationBar { .. } => "bgAdjustNotificationBar",
            Self::CheckNotificationQueue => "checkNotificationQueue",
            Self::UnlockCompleted { .. } => "unlockCompleted",
            Self::BgReopenUnlockPopout => "bgReopenUnlockPopout",
        }
    }
}

/// Result payload of a save attempt shown by the banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SaveCompletion {
    #[serde(rename_all = "camelCase")]
    Success {
        cipher_id: String,
        item_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        task: Option<TaskSummary>,
    },
    Failure { error: String },
}

/// Messages sent to a tab's content script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum TabMessage {
    OpenNotificationBar { notification: QueuedNotification },
    CloseNotificationBar {
        #[serde(default, rename = "fadeOutNotification")]
        fade_out: bool,
    },
    AdjustNotificationBar { height: u32 },
    SaveCipherAttemptCompleted { result: SaveCompletion },
    AddedCipher,
    EditedCipher,
    AddToLockedVaultPendingNotifications { retry: RetryCommand },
}

/// Messages broadcast to every extension context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum RuntimeMessage {
    AbandonAutofillPendingNotifications,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trigger_message() {
        let msg = ExtensionMessage::from_json(
            r#"{"command":"bgTriggerCipherNotification","form":{"username":"alice","password":"pw","pageUrl":"https://example.com"}}"#,
        )
        .unwrap();

        match msg {
            ExtensionMessage::BgTriggerCipherNotification { form } => {
                assert_eq!(form.username, "alice");
                assert_eq!(form.password, "pw");
                assert!(form.new_password.is_empty());
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_parse_save_cipher_defaults() {
        let msg = ExtensionMessage::from_json(r#"{"command":"bgSaveCipher"}"#).unwrap();
        assert_eq!(msg, ExtensionMessage::BgSaveCipher(SaveRequest::default()));

        let msg = ExtensionMessage::from_json(
            r#"{"command":"bgSaveCipher","edit":true,"cipherId":"c-2"}"#,
        )
        .unwrap();
        assert_eq!(
            msg,
            ExtensionMessage::BgSaveCipher(SaveRequest {
                edit: true,
                folder_id: None,
                cipher_id: Some("c-2".to_string()),
            })
        );
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(ExtensionMessage::from_json(r#"{"command":"bgNope"}"#).is_err());
    }

    #[test]
    fn test_save_completion_wire_shape() {
        let ok = serde_json::to_value(TabMessage::SaveCipherAttemptCompleted {
            result: SaveCompletion::Success {
                cipher_id: "c-1".to_string(),
                item_name: "example.com".to_string(),
                task: None,
            },
        })
        .unwrap();
        assert_eq!(ok["command"], "saveCipherAttemptCompleted");
        assert_eq!(ok["result"]["cipherId"], "c-1");
        assert!(ok["result"].get("task").is_none());

        let err = serde_json::to_value(SaveCompletion::Failure {
            error: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(err, serde_json::json!({"error": "boom"}));
    }

    #[test]
    fn test_retry_command_nests_original_message() {
        let retry = RetryCommand::new(
            ExtensionMessage::BgSaveCipher(SaveRequest::default()),
            MessageSender::from_tab(TabRef::new(3, "https://example.com")),
        );
        let json = serde_json::to_string(&ExtensionMessage::UnlockCompleted { retry: retry.clone() })
            .unwrap();
        let back = ExtensionMessage::from_json(&json).unwrap();
        assert_eq!(back, ExtensionMessage::UnlockCompleted { retry });
    }
}
