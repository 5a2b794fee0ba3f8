// crates/signal-forge-verify/tests/credential.rs
// ============================================================================
// Module: Credential Verification Tests
// Description: Tests for credential structure, expiry, and trust checks.
// ============================================================================
//! ## Overview
//! Validates structural collapse, per-anomaly confidence decay, revocation
//! handling, and the issue-then-verify round trip.

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

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::Map;
use serde_json::json;
use signal_forge_core::EntityScope;
use signal_forge_core::Evidence;
use signal_forge_core::FixedClock;
use signal_forge_core::IssuerId;
use signal_forge_core::ProviderName;
use signal_forge_core::SourceId;
use signal_forge_core::Timestamp;
use signal_forge_core::VerificationMethod;
use signal_forge_enrichment::issue_credential;
use signal_forge_verify::TrustVerifier;
use signal_forge_verify::TrustVerifierConfig;
use time::macros::datetime;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Issuer accepted by the test trust registry.
const TRUSTED_ISSUER: &str = "did:web:aggregator.example.com";

/// Fixed verification instant.
fn now() -> Timestamp {
    Timestamp::new(datetime!(2025-10-01 12:00:00 UTC))
}

/// Builds a verifier trusting the test issuer.
fn verifier() -> TrustVerifier {
    let config = TrustVerifierConfig {
        trusted_issuers: BTreeSet::from([TRUSTED_ISSUER.to_string()]),
        ..TrustVerifierConfig::default()
    };
    TrustVerifier::new(config, Arc::new(FixedClock::new(now())))
}

/// Builds evidence to issue a credential over.
fn sample_evidence() -> Evidence {
    let mut data = Map::new();
    data.insert("avg_rating".to_string(), json!(4.6));
    Evidence {
        source: ProviderName::new("review_platform"),
        entity: EntityScope::Brand,
        source_id: SourceId::namespaced("review_platform", "domain", "demo.shop"),
        retrieved_at: now(),
        evidence_url: "https://www.review-platform.example/review/demo.shop".to_string(),
        data,
        signature: None,
        ttl_hours: 24,
    }
}

// ============================================================================
// SECTION: Round Trip
// ============================================================================

/// Tests issue-then-verify is clean for a trusted, unexpired credential.
#[test]
fn test_issue_verify_round_trip() {
    let credential =
        issue_credential(&sample_evidence(), &IssuerId::new(TRUSTED_ISSUER), now()).unwrap();
    let document = serde_json::to_value(&credential).unwrap();

    let result = verifier().verify_credential(&document);

    assert_eq!(result.method, VerificationMethod::VerifiableCredential);
    assert!(result.anomalies.is_empty(), "unexpected anomalies: {:?}", result.anomalies);
    assert!(result.confidence >= 0.75);
}

// ============================================================================
// SECTION: Structural Failures
// ============================================================================

/// Tests missing required fields collapse confidence to the floor.
#[test]
fn test_missing_fields_collapse_confidence() {
    let document = json!({
        "@context": ["https://www.w3.org/2018/credentials/v1"],
        "type": ["VerifiableCredential"],
    });

    let result = verifier().verify_credential(&document);

    assert!((result.confidence - 0.1).abs() < 1e-9);
    assert!(result.anomalies.iter().any(|entry| entry.contains("issuer")));
    assert!(result.anomalies.iter().any(|entry| entry.contains("proof")));
}

/// Tests a non-object document collapses confidence to the floor.
#[test]
fn test_non_object_document() {
    let result = verifier().verify_credential(&json!("not a credential"));

    assert!((result.confidence - 0.1).abs() < 1e-9);
}

// ============================================================================
// SECTION: Registry and Expiry
// ============================================================================

/// Tests an untrusted issuer costs one anomaly step.
#[test]
fn test_untrusted_issuer() {
    let credential = issue_credential(
        &sample_evidence(),
        &IssuerId::new("did:web:unknown.example.org"),
        now(),
    )
    .unwrap();
    let document = serde_json::to_value(&credential).unwrap();

    let result = verifier().verify_credential(&document);

    assert!(result.anomalies.iter().any(|entry| entry.contains("trust registry")));
    assert!((result.confidence - 0.75).abs() < 1e-9);
}

/// Tests an expired credential is flagged.
#[test]
fn test_expired_credential() {
    let issued_at = Timestamp::new(datetime!(2025-01-01 00:00:00 UTC));
    let credential =
        issue_credential(&sample_evidence(), &IssuerId::new(TRUSTED_ISSUER), issued_at).unwrap();
    let document = serde_json::to_value(&credential).unwrap();

    let result = verifier().verify_credential(&document);

    assert!(result.anomalies.iter().any(|entry| entry.contains("expired")));
    assert!(result.confidence < 0.95);
}

/// Tests a revoked status entry is flagged.
#[test]
fn test_revoked_credential() {
    let config = TrustVerifierConfig {
        trusted_issuers: BTreeSet::from([TRUSTED_ISSUER.to_string()]),
        revoked_credentials: BTreeSet::from(["urn:status:42".to_string()]),
        ..TrustVerifierConfig::default()
    };
    let verifier = TrustVerifier::new(config, Arc::new(FixedClock::new(now())));

    let credential =
        issue_credential(&sample_evidence(), &IssuerId::new(TRUSTED_ISSUER), now()).unwrap();
    let mut document = serde_json::to_value(&credential).unwrap();
    document["credentialStatus"] = json!({"id": "urn:status:42", "type": "StatusList2021Entry"});

    let result = verifier.verify_credential(&document);

    assert!(result.anomalies.iter().any(|entry| entry.contains("revoked")));
}

/// Tests anomaly count keeps lowering confidence down to the floor.
#[test]
fn test_confidence_floor() {
    let config = TrustVerifierConfig::default();
    let verifier = TrustVerifier::new(config, Arc::new(FixedClock::new(now())));

    let issued_at = Timestamp::new(datetime!(2024-01-01 00:00:00 UTC));
    let credential = issue_credential(
        &sample_evidence(),
        &IssuerId::new("did:web:unknown.example.org"),
        issued_at,
    )
    .unwrap();
    let mut document = serde_json::to_value(&credential).unwrap();
    document["proof"] = json!({});

    let result = verifier.verify_credential(&document);

    // Broken proof, expired, and untrusted issuer: three anomalies.
    assert_eq!(result.anomalies.len(), 3);
    assert!(result.confidence >= 0.2);
    assert!((result.confidence - 0.35).abs() < 1e-9);
}
