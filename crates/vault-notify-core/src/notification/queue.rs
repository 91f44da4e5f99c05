//! Notification queue state machine.
//!
//! Pure and synchronous: no I/O, no clocks, no tracing. Callers pass the
//! current time in and own all synchronization.
//!
//! # Invariants
//!
//! - At most one entry per tab: [`NotificationQueue::push`] removes the
//!   tab's older entries first
//! - Entries keep insertion order; lookups return the oldest match

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use super::types::{NotificationKind, QueuedNotification};
use crate::domain::TabId;

/// In-memory queue of pending notifications.
///
/// This is a sync type with no internal locking. The owning
/// `NotificationService` is responsible for synchronization.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    entries: VecDeque<QueuedNotification>,
}

impl NotificationQueue {
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an entry, replacing whatever the tab had queued.
    ///
    /// Returns how many older entries were dropped.
    pub fn push(&mut self, entry: QueuedNotification) -> usize {
        let removed = self.remove_tab(entry.tab_id());
        self.entries.push_back(entry);
        removed
    }

    /// Whether an equivalent entry is already queued for the tab and domain.
    pub fn has_equivalent(&self, tab_id: TabId, domain: &str, kind: &NotificationKind) -> bool {
        self.entries.iter().any(|entry| {
            entry.tab_id() == tab_id && entry.domain == domain && entry.kind.is_equivalent(kind)
        })
    }

    /// Remove every entry for a tab. Returns the number removed.
    pub fn remove_tab(&mut self, tab_id: TabId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.tab_id() != tab_id);
        before - self.entries.len()
    }

    /// Remove a tab's entries raised for a domain other than `current_domain`.
    ///
    /// A `None` domain (the tab left for a non-web page) drops them all.
    pub fn remove_stale_for_tab(&mut self, tab_id: TabId, current_domain: Option<&str>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| {
            entry.tab_id() != tab_id || Some(entry.domain.as_str()) == current_domain
        });
        before - self.entries.len()
    }

    /// Drop entries whose lifespan has elapsed.
    pub fn prune_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.is_expired(now));
        before - self.entries.len()
    }

    /// Oldest entry for a tab raised for `domain`.
    pub fn first_for_tab_and_domain(
        &self,
        tab_id: TabId,
        domain: &str,
    ) -> Option<&QueuedNotification> {
        self.entries
            .iter()
            .find(|entry| entry.tab_id() == tab_id && entry.domain == domain)
    }

    /// Entry a save request from the tab applies to.
    ///
    /// Only the tab's first entry for `domain` is considered; if that one is
    /// unlock-deferred there is nothing to save yet.
    pub fn find_savable(&self, tab_id: TabId, domain: &str) -> Option<&QueuedNotification> {
        self.first_for_tab_and_domain(tab_id, domain)
            .filter(|entry| entry.kind.is_savable())
    }

    /// The tab's add-login entry for `domain`, if it is the first one queued.
    pub fn find_add_login(&self, tab_id: TabId, domain: &str) -> Option<&QueuedNotification> {
        self.first_for_tab_and_domain(tab_id, domain)
            .filter(|entry| matches!(entry.kind, NotificationKind::AddLogin(_)))
    }

    /// Remove and return every unlock-deferred entry, oldest first.
    pub fn take_unlock_deferred(&mut self) -> Vec<QueuedNotification> {
        let (deferred, kept): (VecDeque<_>, VecDeque<_>) = self
            .entries
            .drain(..)
            .partition(|entry| matches!(entry.kind, NotificationKind::UnlockVault(_)));
        self.entries = kept;
        deferred.into()
    }

    /// Copy of the current entries, oldest first.
    pub fn snapshot(&self) -> Vec<QueuedNotification> {
        self.entries.iter().cloned().collect()
    }
}
