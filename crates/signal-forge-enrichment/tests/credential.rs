// crates/signal-forge-enrichment/tests/credential.rs
// ============================================================================
// Module: Credential Issuance Tests
// Description: Tests for verifiable-credential issuance over evidence.
// ============================================================================
//! ## Overview
//! Validates the issued JSON-LD document: context, types, subject binding,
//! expiry derived from the evidence TTL, and the unsigned proof envelope.

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

use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use signal_forge_core::EntityScope;
use signal_forge_core::Evidence;
use signal_forge_core::IssuerId;
use signal_forge_core::ProviderName;
use signal_forge_core::SourceId;
use signal_forge_core::Timestamp;
use signal_forge_enrichment::credential::PROOF_PURPOSE;
use signal_forge_enrichment::credential::PROOF_TYPE;
use signal_forge_enrichment::issue_credential;
use time::macros::datetime;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a brand evidence envelope with a 24 hour TTL.
fn sample_evidence() -> Evidence {
    let mut data = Map::new();
    data.insert("avg_rating".to_string(), json!(4.6));
    Evidence {
        source: ProviderName::new("review_platform"),
        entity: EntityScope::Brand,
        source_id: SourceId::namespaced("review_platform", "domain", "demo.shop"),
        retrieved_at: Timestamp::new(datetime!(2025-06-01 08:00:00 UTC)),
        evidence_url: "https://www.review-platform.example/review/demo.shop".to_string(),
        data,
        signature: None,
        ttl_hours: 24,
    }
}

// ============================================================================
// SECTION: Issuance
// ============================================================================

/// Tests every credential field except the signature value is populated.
#[test]
fn test_issued_credential_fields() {
    let evidence = sample_evidence();
    let issuer = IssuerId::new("did:web:aggregator.example.com");
    let now = Timestamp::new(datetime!(2025-06-01 09:00:00 UTC));

    let credential = issue_credential(&evidence, &issuer, now).unwrap();

    assert_eq!(credential.context[0], "https://www.w3.org/2018/credentials/v1");
    assert_eq!(credential.credential_type, vec!["VerifiableCredential", "ThirdPartyEvidence"]);
    assert_eq!(credential.issuer, issuer);
    assert_eq!(credential.issuance_date, now);
    assert_eq!(credential.expiration_date, now.plus_hours(24));
    assert_eq!(credential.credential_subject.id, evidence.source_id);
    assert_eq!(credential.credential_subject.evidence_hash, evidence.content_hash().unwrap());
    assert_eq!(credential.proof.proof_type, PROOF_TYPE);
    assert_eq!(credential.proof.proof_purpose, PROOF_PURPOSE);
    assert_eq!(
        credential.proof.verification_method,
        "did:web:aggregator.example.com#key-1"
    );
    assert!(credential.proof.proof_value.is_none());
}

/// Tests the serialized document uses JSON-LD field names.
#[test]
fn test_credential_serializes_as_json_ld() {
    let evidence = sample_evidence();
    let issuer = IssuerId::new("did:web:aggregator.example.com");
    let now = Timestamp::new(datetime!(2025-06-01 09:00:00 UTC));

    let credential = issue_credential(&evidence, &issuer, now).unwrap();
    let document = serde_json::to_value(&credential).unwrap();

    assert!(document.get("@context").is_some());
    assert!(document.get("issuanceDate").and_then(Value::as_str).unwrap().ends_with('Z'));
    assert!(document.get("credentialSubject").is_some());
    assert_eq!(
        document.pointer("/proof/proofPurpose").and_then(Value::as_str),
        Some("assertionMethod")
    );
}
