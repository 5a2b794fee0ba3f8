// crates/signal-forge-core/src/core/verification.rs
// ============================================================================
// Module: Signal Forge Verification Model
// Description: Verification outcomes for reviews, certifications, and domains.
// Purpose: Provide the result contracts emitted by the trust verifier.
// Dependencies: crate::core::{hashing, time}, serde, serde_json
// ============================================================================

//! ## Overview
//! Verification results record how a trust signal was checked, how much the
//! check is worth, and every anomaly found along the way. Confidence is
//! bounded to `[0.1, 1.0]` and never increases when anomalies are added.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::core::hashing::ContentHash;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Verification Method
// ============================================================================

/// Mechanism a trust signal was verified through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    /// Fetched through the source's official API.
    Api,
    /// Public snapshot captured and hashed.
    Snapshot,
    /// Attested by the merchant without external backing.
    Attested,
    /// Verified W3C verifiable credential.
    VerifiableCredential,
    /// Delivered through a registered webhook.
    Webhook,
    /// Signed file published by the source.
    SignedFile,
}

// ============================================================================
// SECTION: Confidence Bounds
// ============================================================================

/// Lower bound on verification confidence.
pub const MIN_VERIFICATION_CONFIDENCE: f64 = 0.1;

/// Upper bound on verification confidence.
pub const MAX_VERIFICATION_CONFIDENCE: f64 = 1.0;

/// Clamps a confidence value into the verification bounds.
#[must_use]
pub fn clamp_confidence(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MIN_VERIFICATION_CONFIDENCE, MAX_VERIFICATION_CONFIDENCE)
    } else {
        MIN_VERIFICATION_CONFIDENCE
    }
}

// ============================================================================
// SECTION: Verification Result
// ============================================================================

/// Outcome of verifying one external trust signal.
///
/// # Invariants
/// - `confidence` is within `[0.1, 1.0]`.
/// - Adding anomalies never raises confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Verification mechanism used.
    pub method: VerificationMethod,
    /// Bounded confidence in the signal.
    pub confidence: f64,
    /// Instant the check ran.
    pub last_checked: Timestamp,
    /// Signature over the source response, when one was produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_signature: Option<String>,
    /// Canonical hash of the captured snapshot, when one was taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_hash: Option<ContentHash>,
    /// Anomalies detected during verification.
    pub anomalies: Vec<String>,
    /// Raw source data retained for audit, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<Map<String, Value>>,
}

// ============================================================================
// SECTION: Domain Age
// ============================================================================

/// Multi-source domain age attestation.
///
/// # Invariants
/// - `age_days` is non-negative.
/// - `age_score` is within `[0, 0.6]` and `confidence` within `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAgeResult {
    /// Domain the attestation describes.
    pub domain: String,
    /// Earliest sighting across all successful sources, when any succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earliest_date: Option<Timestamp>,
    /// Whole days since the earliest sighting.
    pub age_days: i64,
    /// Saturating age score capped at 0.6.
    pub age_score: f64,
    /// Confidence from the number of corroborating sources.
    pub confidence: f64,
    /// Names of the sources that returned a date.
    pub sources: Vec<String>,
}
