//! Notification service - orchestrates decisions, the queue and the ports.
//!
//! The queue itself is a pure state machine; this service owns it behind a
//! mutex, reads lock state and settings per message, and performs every
//! side effect (candidate lookup, persistence, tab messages).
//!
//! The queue guard is never held across a port call.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::{
    CredentialCandidate, FormSubmission, LoginCipher, LoginUri, NewLoginCipher, TabId, TabRef,
    TaskSummary, VaultLockState,
};
use crate::messages::{
    ExtensionMessage, MessageSender, RetryCommand, RuntimeMessage, SaveCompletion, SaveRequest,
    TabMessage,
};
use crate::notification::{
    AddLoginData, ChangePasswordData, Decision, FollowUp, NotificationError, NotificationId,
    NotificationKind, NotificationQueue, QueuedNotification, SaveOutcome, SkipReason,
    TriggerOutcome, UnlockVaultData, decide_add_login, decide_changed_password,
    decide_cipher_notification,
};
use crate::ports::{EditTarget, NotificationPorts, StoreError};
use crate::settings::NotificationSettings;
use crate::utils::domain::{domain_of, item_name_for};

/// Source of the current time.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// What handling a single extension message did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A trigger message ran the decision procedure.
    Trigger(TriggerOutcome),
    /// A save request ran.
    Save(SaveOutcome),
    /// Entries were removed for the sender's tab.
    Dismissed { removed: usize },
    /// A banner was (re)opened for the given entry, or there was none.
    Shown(Option<NotificationId>),
    /// The message was relayed to the sender's tab or a popout.
    Forwarded,
    /// A retry command was replayed.
    Replayed(Box<DispatchOutcome>),
    /// The message did nothing.
    Ignored(SkipReason),
}

/// Drives the credential-save notification flow.
pub struct NotificationService {
    ports: NotificationPorts,
    queue: Mutex<NotificationQueue>,
    unlock_popout: Mutex<Option<TabId>>,
    clock: Clock,
}

impl NotificationService {
    /// Create a service over the given ports with an empty queue.
    pub fn new(ports: NotificationPorts) -> Self {
        Self {
            ports,
            queue: Mutex::new(NotificationQueue::new()),
            unlock_popout: Mutex::new(None),
            clock: Arc::new(Utc::now),
        }
    }

    /// Replace the wall clock, mainly for expiry tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Copy of the queue, oldest entry first.
    pub async fn queue_snapshot(&self) -> Vec<QueuedNotification> {
        self.queue.lock().await.snapshot()
    }

    /// Handle a message from a content script or extension page.
    pub async fn handle_message(
        &self,
        message: ExtensionMessage,
        sender: MessageSender,
    ) -> DispatchOutcome {
        debug!(
            command = message.command(),
            tab_id = sender.tab.as_ref().map(|t| t.id),
            "Handling extension message"
        );

        match message {
            ExtensionMessage::UnlockCompleted { retry } => {
                DispatchOutcome::Replayed(Box::new(self.replay(retry).await))
            }
            ExtensionMessage::BgNeverSave => self.never_save(&sender).await,
            ExtensionMessage::BgRemoveTabFromQueue => match &sender.tab {
                Some(tab) => {
                    let removed = self.queue.lock().await.remove_tab(tab.id);
                    DispatchOutcome::Dismissed { removed }
                }
                None => DispatchOutcome::Ignored(SkipReason::NoSenderTab),
            },
            ExtensionMessage::BgCloseNotificationBar { fade_out } => {
                self.forward(&sender, TabMessage::CloseNotificationBar { fade_out })
            }
            ExtensionMessage::BgAdjustNotificationBar { height } => {
                self.forward(&sender, TabMessage::AdjustNotificationBar { height })
            }
            ExtensionMessage::CheckNotificationQueue => self.check_notification_queue(&sender).await,
            ExtensionMessage::BgReopenUnlockPopout => match &sender.tab {
                Some(tab) => {
                    self.open_unlock_popout(tab).await;
                    DispatchOutcome::Forwarded
                }
                None => DispatchOutcome::Ignored(SkipReason::NoSenderTab),
            },
            replayable => self.dispatch_retry(replayable, sender).await,
        }
    }

    /// Run a command that may also be replayed after unlock.
    async fn dispatch_retry(
        &self,
        message: ExtensionMessage,
        sender: MessageSender,
    ) -> DispatchOutcome {
        match message {
            ExtensionMessage::BgAddLogin { form } => {
                DispatchOutcome::Trigger(self.trigger_add_login(form, sender).await)
            }
            ExtensionMessage::BgChangedPassword { form } => {
                DispatchOutcome::Trigger(self.trigger_changed_password(form, sender).await)
            }
            ExtensionMessage::BgTriggerCipherNotification { form } => {
                DispatchOutcome::Trigger(self.trigger_cipher_notification(form, sender).await)
            }
            ExtensionMessage::BgSaveCipher(request) => {
                DispatchOutcome::Save(self.save_cipher(request, sender).await)
            }
            other => {
                debug!(command = other.command(), "Command is not replayable");
                DispatchOutcome::Ignored(SkipReason::NotReplayable)
            }
        }
    }

    fn forward(&self, sender: &MessageSender, message: TabMessage) -> DispatchOutcome {
        match &sender.tab {
            Some(tab) => {
                self.ports.tabs.send_to_tab(tab.id, message);
                DispatchOutcome::Forwarded
            }
            None => DispatchOutcome::Ignored(SkipReason::NoSenderTab),
        }
    }

    // ------------------------------------------------------------------
    // Triggers
    // ------------------------------------------------------------------

    /// Decide what to offer for a submitted form and queue it.
    pub async fn trigger_cipher_notification(
        &self,
        form: FormSubmission,
        sender: MessageSender,
    ) -> TriggerOutcome {
        let Some(tab) = sender.tab.clone() else {
            return skipped(None, SkipReason::NoSenderTab);
        };
        if self.ports.ceremonies.is_assertion_in_progress(tab.id) {
            return skipped(Some(tab.id), SkipReason::CeremonyInProgress);
        }
        if form.is_blank() {
            return skipped(Some(tab.id), SkipReason::BlankSubmission);
        }
        let page_url = form.page_url.clone();
        let Some(domain) = domain_of(&page_url) else {
            return skipped(Some(tab.id), SkipReason::InvalidUrl);
        };

        let lock_state = self.ports.lock_state.lock_state();
        if lock_state == VaultLockState::LoggedOut {
            return skipped(Some(tab.id), SkipReason::LoggedOut);
        }
        let settings = self.ports.settings.current();
        if !settings.any_prompt_enabled() {
            return skipped(Some(tab.id), SkipReason::NotificationsDisabled);
        }
        if form.has_password() && form.has_new_password() && form.password == form.new_password {
            return skipped(Some(tab.id), SkipReason::PasswordUnchanged);
        }

        if lock_state == VaultLockState::Locked {
            if !form.has_password_field() {
                return skipped(Some(tab.id), SkipReason::LockedWithoutPassword);
            }
            let follow_up = FollowUp::ChangePassword(ChangePasswordData {
                cipher_ids: None,
                new_password: form.target_password().to_string(),
            });
            let retry = RetryCommand::new(
                ExtensionMessage::BgTriggerCipherNotification { form },
                sender,
            );
            let kind = NotificationKind::UnlockVault(UnlockVaultData { follow_up, retry });
            return self.enqueue(tab, domain, kind, &settings).await;
        }

        let candidates = match self.candidates(&domain, &page_url).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(tab_id = tab.id, domain = %domain, error = %e, "Candidate lookup failed");
                return TriggerOutcome::Skipped(SkipReason::LookupFailed);
            }
        };

        let decision = decide_cipher_notification(&form, &candidates);
        self.enqueue_decision(tab, domain, &page_url, decision, &settings)
            .await
    }

    /// Legacy trigger for a login form that may hold a new login.
    pub async fn trigger_add_login(
        &self,
        form: FormSubmission,
        sender: MessageSender,
    ) -> TriggerOutcome {
        let Some(tab) = sender.tab.clone() else {
            return skipped(None, SkipReason::NoSenderTab);
        };
        let lock_state = self.ports.lock_state.lock_state();
        if lock_state == VaultLockState::LoggedOut {
            return skipped(Some(tab.id), SkipReason::LoggedOut);
        }
        let page_url = form.page_url.clone();
        let Some(domain) = domain_of(&page_url) else {
            return skipped(Some(tab.id), SkipReason::InvalidUrl);
        };
        let settings = self.ports.settings.current();
        if !settings.enable_added_login_prompt {
            return skipped(Some(tab.id), SkipReason::AddLoginDisabled);
        }

        if lock_state == VaultLockState::Locked {
            let follow_up = FollowUp::AddLogin(AddLoginData {
                username: form.username.clone(),
                password: form.password.clone(),
                uri: page_url,
            });
            let retry = RetryCommand::new(ExtensionMessage::BgAddLogin { form }, sender);
            let kind = NotificationKind::UnlockVault(UnlockVaultData { follow_up, retry });
            return self.enqueue(tab, domain, kind, &settings).await;
        }

        let candidates = match self.candidates(&domain, &page_url).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(tab_id = tab.id, domain = %domain, error = %e, "Candidate lookup failed");
                return TriggerOutcome::Skipped(SkipReason::LookupFailed);
            }
        };

        let decision = decide_add_login(&form, &candidates);
        self.enqueue_decision(tab, domain, &page_url, decision, &settings)
            .await
    }

    /// Legacy trigger for a change-password form.
    pub async fn trigger_changed_password(
        &self,
        form: FormSubmission,
        sender: MessageSender,
    ) -> TriggerOutcome {
        let Some(tab) = sender.tab.clone() else {
            return skipped(None, SkipReason::NoSenderTab);
        };
        let lock_state = self.ports.lock_state.lock_state();
        if lock_state == VaultLockState::LoggedOut {
            return skipped(Some(tab.id), SkipReason::LoggedOut);
        }
        let page_url = form.page_url.clone();
        let Some(domain) = domain_of(&page_url) else {
            return skipped(Some(tab.id), SkipReason::InvalidUrl);
        };
        let settings = self.ports.settings.current();
        if !settings.enable_changed_password_prompt {
            return skipped(Some(tab.id), SkipReason::ChangePasswordDisabled);
        }

        if lock_state == VaultLockState::Locked {
            let follow_up = FollowUp::ChangePassword(ChangePasswordData {
                cipher_ids: None,
                new_password: form.new_password.clone(),
            });
            let retry = RetryCommand::new(ExtensionMessage::BgChangedPassword { form }, sender);
            let kind = NotificationKind::UnlockVault(UnlockVaultData { follow_up, retry });
            return self.enqueue(tab, domain, kind, &settings).await;
        }

        if !form.has_password_field() {
            return skipped(Some(tab.id), SkipReason::NothingToChange);
        }

        let candidates = match self.candidates(&domain, &page_url).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(tab_id = tab.id, domain = %domain, error = %e, "Candidate lookup failed");
                return TriggerOutcome::Skipped(SkipReason::LookupFailed);
            }
        };

        let decision = decide_changed_password(&form, &candidates);
        self.enqueue_decision(tab, domain, &page_url, decision, &settings)
            .await
    }

    /// Stored logins for the domain whose URIs match the page.
    async fn candidates(
        &self,
        domain: &str,
        page_url: &str,
    ) -> Result<Vec<CredentialCandidate>, StoreError> {
        let ciphers = self.ports.ciphers.find_by_domain(domain).await?;
        let policy = &self.ports.domain_match;

        Ok(ciphers
            .iter()
            .filter(|cipher| policy.matches_cipher(cipher, page_url))
            .map(LoginCipher::to_candidate)
            .collect())
    }

    /// Apply the setting gates to a decision and queue it.
    async fn enqueue_decision(
        &self,
        tab: TabRef,
        domain: String,
        page_url: &str,
        decision: Decision,
        settings: &NotificationSettings,
    ) -> TriggerOutcome {
        let gate = match &decision {
            Decision::NoChange => Some(SkipReason::NothingToChange),
            Decision::AddLogin { .. } if !settings.enable_added_login_prompt => {
                Some(SkipReason::AddLoginDisabled)
            }
            Decision::ChangePassword { .. } if !settings.enable_changed_password_prompt => {
                Some(SkipReason::ChangePasswordDisabled)
            }
            _ => None,
        };
        if let Some(reason) = gate {
            return skipped(Some(tab.id), reason);
        }

        match decision.into_kind(page_url) {
            Some(kind) => self.enqueue(tab, domain, kind, settings).await,
            None => skipped(Some(tab.id), SkipReason::NothingToChange),
        }
    }

    /// Push an entry for the tab and show its banner.
    async fn enqueue(
        &self,
        tab: TabRef,
        domain: String,
        kind: NotificationKind,
        settings: &NotificationSettings,
    ) -> TriggerOutcome {
        let now = self.now();
        let entry = {
            let mut queue = self.queue.lock().await;
            queue.prune_expired(now);
            if queue.has_equivalent(tab.id, &domain, &kind) {
                debug!(tab_id = tab.id, domain = %domain, "Equivalent notification already queued");
                return TriggerOutcome::AlreadyQueued;
            }
            let entry = QueuedNotification::new(tab, domain, kind, now, settings.lifespan());
            let replaced = queue.push(entry.clone());
            info!(
                tab_id = entry.tab.id,
                domain = %entry.domain,
                kind = entry.kind.label(),
                replaced,
                "Queued notification"
            );
            entry
        };

        let outcome = TriggerOutcome::Queued {
            id: entry.id,
            kind: entry.kind.clone(),
        };
        self.ports.tabs.send_to_tab(
            entry.tab.id,
            TabMessage::OpenNotificationBar {
                notification: entry,
            },
        );
        outcome
    }

    // ------------------------------------------------------------------
    // Save / update
    // ------------------------------------------------------------------

    /// Persist the login offered to the sender's tab.
    pub async fn save_cipher(&self, request: SaveRequest, sender: MessageSender) -> SaveOutcome {
        let Some(tab) = sender.tab.clone() else {
            return SaveOutcome::Skipped(SkipReason::NoSenderTab);
        };

        if !self.ports.lock_state.lock_state().is_unlocked() {
            let retry = RetryCommand::new(ExtensionMessage::BgSaveCipher(request), sender);
            self.ports.tabs.send_to_tab(
                tab.id,
                TabMessage::AddToLockedVaultPendingNotifications { retry },
            );
            self.open_unlock_popout(&tab).await;
            info!(tab_id = tab.id, "Save deferred until the vault unlocks");
            return SaveOutcome::Deferred;
        }

        let Some(domain) = tab.domain() else {
            return SaveOutcome::Skipped(SkipReason::InvalidUrl);
        };
        let entry = {
            let mut queue = self.queue.lock().await;
            queue.prune_expired(self.now());
            queue.find_savable(tab.id, &domain).cloned()
        };
        let Some(entry) = entry else {
            debug!(tab_id = tab.id, domain = %domain, "No savable notification for tab");
            return SaveOutcome::Skipped(SkipReason::NoQueuedNotification);
        };

        match &entry.kind {
            NotificationKind::ChangePassword(data) => {
                self.save_password_change(&tab, data, &request).await
            }
            NotificationKind::AddLogin(data) => {
                self.save_new_login(&tab, &entry.domain, data, &request)
                    .await
            }
            NotificationKind::UnlockVault(_) => {
                SaveOutcome::Skipped(SkipReason::NoQueuedNotification)
            }
        }
    }

    async fn save_password_change(
        &self,
        tab: &TabRef,
        data: &ChangePasswordData,
        request: &SaveRequest,
    ) -> SaveOutcome {
        let ids = data.cipher_ids.as_deref().unwrap_or_default();
        let cipher_id = match &request.cipher_id {
            Some(requested) if ids.contains(requested) => Some(requested.clone()),
            Some(requested) => {
                warn!(tab_id = tab.id, cipher_id = %requested, "Requested login is not part of the notification");
                None
            }
            None => ids.first().cloned(),
        };
        let Some(cipher_id) = cipher_id else {
            return SaveOutcome::Skipped(SkipReason::NoQueuedNotification);
        };

        let mut cipher = match self.ports.ciphers.get(&cipher_id).await {
            Ok(Some(cipher)) => cipher,
            Ok(None) => {
                return self.report_failure(tab, StoreError::NotFound(cipher_id));
            }
            Err(e) => return self.report_failure(tab, e),
        };

        if cipher.requires_reprompt() && !self.ports.reprompt.confirm(&cipher).await {
            debug!(tab_id = tab.id, cipher_id = %cipher.id, "Master password reprompt declined");
            return SaveOutcome::Failed(NotificationError::RepromptDenied);
        }

        cipher.password.clone_from(&data.new_password);

        if request.edit {
            self.ports
                .popouts
                .open_add_edit(tab, EditTarget::Existing { cipher })
                .await;
            self.close_for_edit(tab).await;
            self.ports.tabs.send_to_tab(tab.id, TabMessage::EditedCipher);
            return SaveOutcome::Edited;
        }

        match self.ports.ciphers.update(cipher).await {
            Ok(updated) => {
                let task = self.complete_security_task(&updated).await;
                self.report_success(tab, &updated, task).await;
                SaveOutcome::Saved {
                    cipher_id: updated.id,
                }
            }
            Err(e) => self.report_failure(tab, e),
        }
    }

    async fn save_new_login(
        &self,
        tab: &TabRef,
        domain: &str,
        data: &AddLoginData,
        request: &SaveRequest,
    ) -> SaveOutcome {
        let folder_id = match &request.folder_id {
            Some(folder_id) => match self.ports.folders.folder_exists(folder_id).await {
                Ok(true) => Some(folder_id.clone()),
                Ok(false) => None,
                Err(e) => {
                    warn!(folder_id = %folder_id, error = %e, "Folder lookup failed");
                    None
                }
            },
            None => None,
        };

        let cipher = NewLoginCipher {
            name: item_name_for(&data.uri, domain),
            username: data.username.clone(),
            password: data.password.clone(),
            uris: vec![LoginUri::new(data.uri.clone())],
            folder_id,
        };

        if request.edit {
            self.ports
                .popouts
                .open_add_edit(tab, EditTarget::New { cipher })
                .await;
            self.close_for_edit(tab).await;
            return SaveOutcome::Edited;
        }

        match self.ports.ciphers.create(cipher).await {
            Ok(created) => {
                self.report_success(tab, &created, None).await;
                self.ports.tabs.send_to_tab(tab.id, TabMessage::AddedCipher);
                SaveOutcome::Saved {
                    cipher_id: created.id,
                }
            }
            Err(e) => self.report_failure(tab, e),
        }
    }

    /// Complete the pending security task for an updated login, if any.
    async fn complete_security_task(&self, cipher: &LoginCipher) -> Option<TaskSummary> {
        let tasks = &self.ports.tasks;
        if !tasks.tasks_enabled().await {
            return None;
        }
        let pending = match tasks.pending_tasks().await {
            Ok(pending) => pending,
            Err(e) => {
                warn!(error = %e, "Could not load security tasks");
                return None;
            }
        };
        let task = pending.iter().find(|task| task.cipher_id == cipher.id)?;

        if let Err(e) = tasks.complete_task(&task.id).await {
            warn!(task_id = %task.id, error = %e, "Could not complete security task");
        }

        let remaining_tasks_count = pending
            .iter()
            .filter(|other| {
                other.organization_id == task.organization_id && other.cipher_id != cipher.id
            })
            .count();
        let org_name = tasks
            .organization_name(&task.organization_id)
            .await
            .unwrap_or_default();

        Some(TaskSummary {
            org_name,
            remaining_tasks_count,
        })
    }

    async fn report_success(&self, tab: &TabRef, cipher: &LoginCipher, task: Option<TaskSummary>) {
        let removed = self.queue.lock().await.remove_tab(tab.id);
        info!(tab_id = tab.id, cipher_id = %cipher.id, removed, "Saved login from notification");
        self.ports.tabs.send_to_tab(
            tab.id,
            TabMessage::SaveCipherAttemptCompleted {
                result: SaveCompletion::Success {
                    cipher_id: cipher.id.clone(),
                    item_name: cipher.name.clone(),
                    task,
                },
            },
        );
    }

    fn report_failure(&self, tab: &TabRef, error: StoreError) -> SaveOutcome {
        warn!(tab_id = tab.id, error = %error, "Saving login from notification failed");
        self.ports.tabs.send_to_tab(
            tab.id,
            TabMessage::SaveCipherAttemptCompleted {
                result: SaveCompletion::Failure {
                    error: error.user_message().to_string(),
                },
            },
        );
        SaveOutcome::Failed(NotificationError::StorageFailure(error))
    }

    async fn close_for_edit(&self, tab: &TabRef) {
        self.queue.lock().await.remove_tab(tab.id);
        self.ports
            .tabs
            .send_to_tab(tab.id, TabMessage::CloseNotificationBar { fade_out: false });
    }

    // ------------------------------------------------------------------
    // Queue maintenance
    // ------------------------------------------------------------------

    async fn never_save(&self, sender: &MessageSender) -> DispatchOutcome {
        let Some(tab) = &sender.tab else {
            return DispatchOutcome::Ignored(SkipReason::NoSenderTab);
        };
        let Some(domain) = tab.domain() else {
            return DispatchOutcome::Ignored(SkipReason::InvalidUrl);
        };

        let removed = {
            let mut queue = self.queue.lock().await;
            if queue.find_add_login(tab.id, &domain).is_none() {
                return DispatchOutcome::Ignored(SkipReason::NoQueuedNotification);
            }
            queue.remove_tab(tab.id)
        };

        self.ports
            .tabs
            .send_to_tab(tab.id, TabMessage::CloseNotificationBar { fade_out: false });
        if let Err(e) = self.ports.ciphers.save_never_domain(&domain).await {
            warn!(domain = %domain, error = %e, "Could not store never-save domain");
        }
        info!(tab_id = tab.id, domain = %domain, "Never save logins for domain");
        DispatchOutcome::Dismissed { removed }
    }

    async fn check_notification_queue(&self, sender: &MessageSender) -> DispatchOutcome {
        let tab = match sender.tab.clone() {
            Some(tab) => tab,
            None => match self.ports.tabs.active_tab() {
                Some(tab) => tab,
                None => return DispatchOutcome::Ignored(SkipReason::NoSenderTab),
            },
        };

        let entry = {
            let mut queue = self.queue.lock().await;
            queue.prune_expired(self.now());
            if queue.is_empty() {
                return DispatchOutcome::Shown(None);
            }
            tab.domain()
                .and_then(|domain| queue.first_for_tab_and_domain(tab.id, &domain).cloned())
        };

        match entry {
            Some(notification) => {
                let id = notification.id;
                self.ports
                    .tabs
                    .send_to_tab(tab.id, TabMessage::OpenNotificationBar { notification });
                DispatchOutcome::Shown(Some(id))
            }
            None => DispatchOutcome::Shown(None),
        }
    }

    async fn open_unlock_popout(&self, tab: &TabRef) {
        if let Some(popout_id) = self.ports.popouts.open_unlock(tab).await {
            *self.unlock_popout.lock().await = Some(popout_id);
        }
    }

    // ------------------------------------------------------------------
    // Unlock and tab lifecycle
    // ------------------------------------------------------------------

    /// Replay every unlock-deferred entry after the vault unlocked.
    pub async fn handle_vault_unlocked(&self) -> Vec<DispatchOutcome> {
        let deferred = self.queue.lock().await.take_unlock_deferred();
        info!(count = deferred.len(), "Vault unlocked, replaying deferred notifications");

        let mut outcomes = Vec::with_capacity(deferred.len());
        for entry in deferred {
            if let NotificationKind::UnlockVault(data) = entry.kind {
                outcomes.push(self.replay(data.retry).await);
            }
        }
        outcomes
    }

    /// Close the stale banner and re-run the original command.
    async fn replay(&self, retry: RetryCommand) -> DispatchOutcome {
        if let Some(tab) = &retry.sender.tab {
            self.ports
                .tabs
                .send_to_tab(tab.id, TabMessage::CloseNotificationBar { fade_out: false });
        }
        self.dispatch_retry(*retry.message, retry.sender).await
    }

    /// A tab was closed.
    pub async fn handle_tab_removed(&self, tab_id: TabId) -> usize {
        let removed = self.queue.lock().await.remove_tab(tab_id);

        let was_unlock_popout = {
            let mut popout = self.unlock_popout.lock().await;
            if *popout == Some(tab_id) {
                *popout = None;
                true
            } else {
                false
            }
        };
        if was_unlock_popout && self.ports.lock_state.lock_state() == VaultLockState::Locked {
            info!(tab_id, "Unlock popout closed while locked");
            self.ports
                .tabs
                .broadcast(RuntimeMessage::AbandonAutofillPendingNotifications);
        }
        removed
    }

    /// A tab navigated; drop entries raised for another domain.
    pub async fn handle_tab_navigated(&self, tab: &TabRef) -> usize {
        let domain = tab.domain();
        let removed = self
            .queue
            .lock()
            .await
            .remove_stale_for_tab(tab.id, domain.as_deref());
        if removed > 0 {
            debug!(tab_id = tab.id, removed, "Dropped notifications after navigation");
        }
        removed
    }
}

fn skipped(tab_id: Option<TabId>, reason: SkipReason) -> TriggerOutcome {
    debug!(tab_id, reason = %reason, "Notification skipped");
    TriggerOutcome::Skipped(reason)
}
