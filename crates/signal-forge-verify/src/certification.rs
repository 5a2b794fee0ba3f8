// crates/signal-forge-verify/src/certification.rs
// ============================================================================
// Module: Certification Verification
// Description: Typed certification validators and the record contract.
// Purpose: Validate certifications against registries, expiry, and revocation.
// Dependencies: signal-forge-core, serde, serde_json
// ============================================================================

//! ## Overview
//! Known certification families (ISO, organic, fairtrade, B-Corp) dispatch
//! to a typed validator backed by a registry of known-valid certificates.
//! Families without a validator fall back to snapshot verification with
//! expiry and revocation-list checks.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use signal_forge_core::Timestamp;
use signal_forge_core::canonical_json_bytes;
use signal_forge_core::sha256_hex;

// ============================================================================
// SECTION: Certification Record
// ============================================================================

/// One certification claim to verify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationRecord {
    /// Certification family (`iso`, `organic`, `fairtrade`, `bcorp`, ...).
    pub cert_type: String,
    /// Certificate identifier.
    pub cert_id: String,
    /// Issuing body.
    pub issuer: String,
    /// Expiry instant, when the certificate carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<Timestamp>,
    /// Free-form attributes published with the certificate.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
}

// ============================================================================
// SECTION: Validator Capability
// ============================================================================

/// Assessment returned by a typed validator.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificationAssessment {
    /// Certificate is valid per the validator's registry.
    pub valid: bool,
    /// Attestation signature over the lookup, when produced.
    pub signature: Option<String>,
    /// Structured validation details for audit.
    pub details: Map<String, Value>,
}

/// Typed validator for one certification family.
pub trait CertificationValidator: Send + Sync {
    /// Assesses a certificate against the family's registry.
    fn assess(&self, cert_id: &str, issuer: &str) -> CertificationAssessment;
}

// ============================================================================
// SECTION: Registry Validator
// ============================================================================

/// Validator backed by a static registry of known-valid certificate ids.
#[derive(Debug, Clone, Default)]
pub struct RegistryCertificationValidator {
    /// Label stamped into assessment details.
    label: String,
    /// Known-valid certificate identifiers.
    known: BTreeSet<String>,
}

impl RegistryCertificationValidator {
    /// Creates a validator for one family with its known certificates.
    #[must_use]
    pub fn new(label: impl Into<String>, known: BTreeSet<String>) -> Self {
        Self {
            label: label.into(),
            known,
        }
    }
}

impl CertificationValidator for RegistryCertificationValidator {
    fn assess(&self, cert_id: &str, issuer: &str) -> CertificationAssessment {
        let valid = self.known.contains(cert_id);
        let signature = canonical_json_bytes(&json!({
            "cert_id": cert_id,
            "issuer": issuer,
            "registry": self.label,
        }))
        .ok()
        .map(|bytes| sha256_hex(&bytes)[..16].to_string());

        let mut details = Map::new();
        details.insert("registry".to_string(), Value::String(self.label.clone()));
        details.insert("cert_id".to_string(), Value::String(cert_id.to_string()));
        details.insert("issuer".to_string(), Value::String(issuer.to_string()));
        details.insert("found".to_string(), Value::Bool(valid));

        CertificationAssessment {
            valid,
            signature,
            details,
        }
    }
}
