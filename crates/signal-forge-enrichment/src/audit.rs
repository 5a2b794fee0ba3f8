// crates/signal-forge-enrichment/src/audit.rs
// ============================================================================
// Module: Enrichment Audit Logging
// Description: Structured audit events for enrichment fan-out.
// Purpose: Emit per-provider outcome events without hard dependencies.
// Dependencies: signal-forge-core, serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines audit event payloads and sinks for enrichment
//! logging. It is intentionally lightweight so deployments can route events
//! to their preferred logging pipeline without redesign. Sinks never fail
//! the fan-out: write errors are swallowed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use serde::Serialize;
use signal_forge_core::EntityScope;
use signal_forge_core::ProviderName;
use signal_forge_core::Timestamp;

// ============================================================================
// SECTION: Events
// ============================================================================

/// Outcome of one provider within an enrichment fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderOutcome {
    /// Fresh cached evidence was reused.
    CacheHit,
    /// New evidence was fetched and stored.
    Fetched,
    /// New evidence was fetched and flagged as anomalous.
    AnomalyFlagged,
    /// Provider has no data at the requested scope.
    SkippedUnsupported,
    /// Provider call failed; the reason is in `detail`.
    Failed,
}

/// Audit event recorded per provider during a fan-out.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichmentEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Provider the event describes.
    pub provider: ProviderName,
    /// Entity scope of the request.
    pub entity: EntityScope,
    /// Brand domain or product identifier requested.
    pub subject: String,
    /// Provider outcome.
    pub outcome: ProviderOutcome,
    /// Failure reason or other detail, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Instant the event was recorded.
    pub timestamp: Timestamp,
}

/// Event identifier stamped on enrichment events.
pub const ENRICHMENT_EVENT: &str = "enrichment_provider";

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink receiving enrichment events.
pub trait AuditSink: Send + Sync {
    /// Records one event. Implementations must not block the fan-out on
    /// failure; errors are swallowed.
    fn record(&self, event: &EnrichmentEvent);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAuditSink;

impl AuditSink for NullAuditSink {
    fn record(&self, _event: &EnrichmentEvent) {}
}

/// Sink that buffers events in memory for inspection.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    /// Buffered events in arrival order.
    events: Mutex<Vec<EnrichmentEvent>>,
}

impl MemoryAuditSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the buffered events.
    #[must_use]
    pub fn snapshot(&self) -> Vec<EnrichmentEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, event: &EnrichmentEvent) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event.clone());
        }
    }
}

/// Sink appending events as JSON lines to a file.
#[derive(Debug)]
pub struct JsonLinesAuditSink {
    /// Open log file protected by a mutex.
    file: Mutex<File>,
}

impl JsonLinesAuditSink {
    /// Opens (or creates) the log file for appending.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] when the file cannot be opened.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl AuditSink for JsonLinesAuditSink {
    fn record(&self, event: &EnrichmentEvent) {
        if let Ok(line) = serde_json::to_string(event)
            && let Ok(mut guard) = self.file.lock()
        {
            let _ = writeln!(guard, "{line}");
        }
    }
}
