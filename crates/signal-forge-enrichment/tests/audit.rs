// crates/signal-forge-enrichment/tests/audit.rs
// ============================================================================
// Module: Audit Sink Tests
// Description: Tests for the JSON-lines audit sink.
// ============================================================================
//! ## Overview
//! Validates events land in the log file as parseable JSON lines with the
//! expected fields.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use serde_json::Value;
use signal_forge_core::EntityScope;
use signal_forge_core::ProviderName;
use signal_forge_core::Timestamp;
use signal_forge_enrichment::AuditSink;
use signal_forge_enrichment::EnrichmentEvent;
use signal_forge_enrichment::JsonLinesAuditSink;
use signal_forge_enrichment::ProviderOutcome;
use time::macros::datetime;

// ============================================================================
// SECTION: JSON Lines Sink
// ============================================================================

/// Tests events append as one parseable JSON object per line.
#[test]
fn test_events_append_as_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("enrichment.log");
    let sink = JsonLinesAuditSink::open(&path).unwrap();

    let event = EnrichmentEvent {
        event: "enrichment_provider",
        provider: ProviderName::new("review_platform"),
        entity: EntityScope::Brand,
        subject: "demo.shop".to_string(),
        outcome: ProviderOutcome::Fetched,
        detail: None,
        timestamp: Timestamp::new(datetime!(2025-06-01 08:00:00 UTC)),
    };
    sink.record(&event);
    sink.record(&EnrichmentEvent {
        outcome: ProviderOutcome::Failed,
        detail: Some("scripted failure".to_string()),
        ..event.clone()
    });

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["event"], "enrichment_provider");
    assert_eq!(first["outcome"], "fetched");
    assert_eq!(first["provider"], "review_platform");
    assert!(first.get("detail").is_none());

    let second: Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["outcome"], "failed");
    assert_eq!(second["detail"], "scripted failure");
}
