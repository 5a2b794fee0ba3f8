// crates/signal-forge-verify/src/credential.rs
// ============================================================================
// Module: Credential Verification
// Description: Structural and registry checks for verifiable credentials.
// Purpose: Grade credential documents without performing cryptography.
// Dependencies: signal-forge-core, serde_json
// ============================================================================

//! ## Overview
//! Credential documents are checked for structure (all six required JSON-LD
//! fields), a usable proof envelope, expiry, optional revocation status,
//! and issuer membership in the trust registry. Cryptographic proof
//! verification is delegated to the host's key infrastructure; an unsigned
//! but well-formed envelope passes the structural check.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde_json::Value;
use signal_forge_core::Timestamp;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// JSON-LD fields every credential must carry.
pub const REQUIRED_FIELDS: [&str; 6] =
    ["@context", "type", "issuer", "issuanceDate", "credentialSubject", "proof"];

/// Confidence assigned to structurally broken documents.
pub const STRUCTURAL_FAILURE_CONFIDENCE: f64 = 0.1;

/// Confidence of a clean credential.
const CLEAN_CONFIDENCE: f64 = 0.95;

/// Confidence lost per anomaly.
const ANOMALY_PENALTY: f64 = 0.2;

/// Confidence floor for structurally sound credentials.
const CONFIDENCE_FLOOR: f64 = 0.2;

// ============================================================================
// SECTION: Checks
// ============================================================================

/// Outcome of grading one credential document.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CredentialCheck {
    /// Document carries every required field.
    pub structurally_sound: bool,
    /// Anomalies found, in detection order.
    pub anomalies: Vec<String>,
    /// Detached signature value, when the proof carries one.
    pub signature: Option<String>,
}

/// Grades a credential document against structure, expiry, revocation, and
/// the issuer trust registry.
pub(crate) fn check_credential(
    document: &Value,
    trusted_issuers: &BTreeSet<String>,
    revoked_credentials: &BTreeSet<String>,
    now: Timestamp,
) -> CredentialCheck {
    let mut anomalies = Vec::new();

    let Some(object) = document.as_object() else {
        return CredentialCheck {
            structurally_sound: false,
            anomalies: vec!["credential must be a json object".to_string()],
            signature: None,
        };
    };

    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            anomalies.push(format!("missing required field: {field}"));
        }
    }
    if !anomalies.is_empty() {
        return CredentialCheck {
            structurally_sound: false,
            anomalies,
            signature: None,
        };
    }

    let proof = &object["proof"];
    if !proof.as_object().is_some_and(|envelope| envelope.contains_key("type")) {
        anomalies.push("proof verification failed".to_string());
    }
    let signature = proof
        .get("proofValue")
        .or_else(|| proof.get("jws"))
        .and_then(Value::as_str)
        .map(ToString::to_string);

    if let Some(expiration) = object.get("expirationDate").and_then(Value::as_str) {
        match Timestamp::parse_rfc3339(expiration) {
            Ok(expiry) if expiry < now => anomalies.push("credential expired".to_string()),
            Ok(_) => {}
            Err(_) => anomalies.push("invalid expiration date".to_string()),
        }
    }

    if let Some(status) = object.get("credentialStatus")
        && status
            .get("id")
            .and_then(Value::as_str)
            .is_some_and(|id| revoked_credentials.contains(id))
    {
        anomalies.push("credential revoked".to_string());
    }

    let issuer_trusted = object
        .get("issuer")
        .and_then(Value::as_str)
        .is_some_and(|issuer| trusted_issuers.contains(issuer));
    if !issuer_trusted {
        anomalies.push("issuer not in trust registry".to_string());
    }

    CredentialCheck {
        structurally_sound: true,
        anomalies,
        signature,
    }
}

/// Computes the confidence of a structurally sound credential.
pub(crate) fn credential_confidence(anomaly_count: usize) -> f64 {
    let penalty = ANOMALY_PENALTY * anomaly_count as f64;
    (CLEAN_CONFIDENCE - penalty).max(CONFIDENCE_FLOOR)
}
