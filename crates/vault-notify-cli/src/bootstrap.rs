//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the notification service is wired
//! to concrete adapters for the CLI:
//! - In-memory vault, settings and tab messenger (via vault-notify-store)
//! - Notification service (via vault-notify-core)
//!
//! Command handlers receive the composed context and drive the service.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use vault_notify_core::services::Clock;
use vault_notify_core::{
    NotificationService, NotificationSettings, NotificationSettingsUpdate, validate_settings,
};
use vault_notify_store::{InMemoryBackend, InMemoryFolders};

use crate::error::CliError;
use crate::scenario::Scenario;

/// Environment variable overriding the notification lifespan.
pub const LIFESPAN_ENV: &str = "VAULT_NOTIFY_LIFESPAN_SECS";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Replaces the scenario's notification lifespan when set.
    pub lifespan_secs: Option<u64>,
}

/// Fully composed context for replaying a scenario.
pub struct CliContext {
    /// Concrete adapters, kept typed so steps can drive them.
    pub backend: InMemoryBackend,
    /// The service under test.
    pub service: Arc<NotificationService>,
    /// Seconds added to the wall clock by `wait` steps.
    clock_offset: Arc<AtomicI64>,
}

impl CliContext {
    /// Access the notification service.
    pub fn service(&self) -> &NotificationService {
        &self.service
    }

    /// Move the service clock forward.
    pub fn advance_clock(&self, secs: u64) {
        let secs = i64::try_from(secs).unwrap_or(i64::MAX);
        self.clock_offset.fetch_add(secs, Ordering::SeqCst);
    }
}

/// Effective settings: the scenario's, with CLI overrides applied.
pub fn resolve_settings(
    config: &CliConfig,
    scenario: &Scenario,
) -> Result<NotificationSettings, CliError> {
    let mut settings = scenario.settings.clone();
    settings.merge(&NotificationSettingsUpdate {
        notification_lifespan_secs: config.lifespan_secs,
        ..Default::default()
    });
    validate_settings(&settings)?;
    Ok(settings)
}

/// Bootstrap the CLI context from a scenario.
pub fn bootstrap(config: &CliConfig, scenario: &Scenario) -> Result<CliContext, CliError> {
    let settings = resolve_settings(config, scenario)?;

    let backend = InMemoryBackend::new(scenario.lock_state, settings, scenario.ciphers.clone())
        .with_folders(InMemoryFolders::new(scenario.folders.iter().cloned()));

    let clock_offset = Arc::new(AtomicI64::new(0));
    let offset = Arc::clone(&clock_offset);
    let clock: Clock = Arc::new(move || {
        chrono::Utc::now() + chrono::Duration::seconds(offset.load(Ordering::SeqCst))
    });

    let service = Arc::new(NotificationService::new(backend.ports()).with_clock(clock));

    tracing::debug!(
        lock_state = ?scenario.lock_state,
        ciphers = scenario.ciphers.len(),
        steps = scenario.steps.len(),
        "Bootstrapped scenario"
    );

    Ok(CliContext {
        backend,
        service,
        clock_offset,
    })
}
