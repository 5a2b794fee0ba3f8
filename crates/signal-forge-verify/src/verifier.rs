// crates/signal-forge-verify/src/verifier.rs
// ============================================================================
// Module: Trust Verifier
// Description: Review, certification, and credential verification entry point.
// Purpose: Grade external trust signals and never fail to return a result.
// Dependencies: signal-forge-core, crate::{certification, credential, review, sources}
// ============================================================================

//! ## Overview
//! The verifier prefers official APIs, falls back to hashed snapshots, and
//! runs every applicable anomaly detector on the way. Validation failures
//! grow the anomaly list and drop confidence; the result is always
//! returned so downstream consumers can audit what was checked.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::Value;
use signal_forge_core::Clock;
use signal_forge_core::MIN_VERIFICATION_CONFIDENCE;
use signal_forge_core::Timestamp;
use signal_forge_core::VerificationMethod;
use signal_forge_core::VerificationResult;
use signal_forge_core::canonical_json_bytes;
use signal_forge_core::hash_canonical_json;
use signal_forge_core::sha256_hex;

use crate::certification::CertificationRecord;
use crate::certification::CertificationValidator;
use crate::credential::STRUCTURAL_FAILURE_CONFIDENCE;
use crate::credential::check_credential;
use crate::credential::credential_confidence;
use crate::review::ReviewStats;
use crate::review::distribution_anomalies;
use crate::review::review_confidence;
use crate::review::review_stat_anomalies;
use crate::review::temporal_anomalies;
use crate::sources::ReviewSource;
use crate::sources::SourceError;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Confidence of an anomaly-free API verification.
const API_CLEAN_CONFIDENCE: f64 = 0.95;

/// Confidence of an API verification with anomalies.
const API_ANOMALOUS_CONFIDENCE: f64 = 0.7;

/// Confidence of a clean typed-validator pass.
const VALIDATOR_CLEAN_CONFIDENCE: f64 = 0.95;

/// Confidence of a failed typed-validator pass.
const VALIDATOR_FAILED_CONFIDENCE: f64 = 0.2;

/// Confidence of a clean certification snapshot.
const CERT_SNAPSHOT_CLEAN_CONFIDENCE: f64 = 0.7;

/// Confidence of an expired or revoked certification.
const CERT_SNAPSHOT_ANOMALOUS_CONFIDENCE: f64 = 0.3;

/// Trust registries consulted by the verifier.
#[derive(Debug, Clone, Default)]
pub struct TrustVerifierConfig {
    /// Issuer identifiers accepted for credentials.
    pub trusted_issuers: BTreeSet<String>,
    /// Revoked credential status identifiers.
    pub revoked_credentials: BTreeSet<String>,
    /// Revoked certification identifiers.
    pub revoked_certifications: BTreeSet<String>,
}

// ============================================================================
// SECTION: Verifier
// ============================================================================

/// Trust signal verifier over pluggable sources and registries.
pub struct TrustVerifier {
    /// Trust registries.
    config: TrustVerifierConfig,
    /// Review sources with a trusted API, keyed by platform name.
    review_sources: BTreeMap<String, Arc<dyn ReviewSource>>,
    /// Typed certification validators keyed by family (`iso`, `organic`,
    /// `fairtrade`, `bcorp`, ...).
    certification_validators: BTreeMap<String, Arc<dyn CertificationValidator>>,
    /// Clock stamping verification instants.
    clock: Arc<dyn Clock>,
}

impl TrustVerifier {
    /// Creates a verifier with no registered sources or validators.
    #[must_use]
    pub fn new(config: TrustVerifierConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            review_sources: BTreeMap::new(),
            certification_validators: BTreeMap::new(),
            clock,
        }
    }

    /// Registers a review source under its platform name.
    pub fn register_review_source(&mut self, name: impl Into<String>, source: Arc<dyn ReviewSource>) {
        self.review_sources.insert(name.into().to_lowercase(), source);
    }

    /// Registers a typed certification validator for a family.
    pub fn register_certification_validator(
        &mut self,
        family: impl Into<String>,
        validator: Arc<dyn CertificationValidator>,
    ) {
        self.certification_validators.insert(family.into().to_lowercase(), validator);
    }

    // ------------------------------------------------------------------
    // Review verification
    // ------------------------------------------------------------------

    /// Verifies review statistics for a business against expected values.
    ///
    /// The API path is tried first; on failure or absence the snapshot path
    /// runs all three anomaly detector families.
    #[must_use]
    pub fn verify_review_source(
        &self,
        source: &str,
        business_id: &str,
        expected: &ReviewStats,
    ) -> VerificationResult {
        let now = self.clock.now();
        let mut anomalies = Vec::new();

        let Some(platform) = self.review_sources.get(&source.to_lowercase()) else {
            return unavailable_result(
                VerificationMethod::Snapshot,
                now,
                vec![format!("review source not registered: {source}")],
            );
        };

        match platform.fetch_api(business_id) {
            Ok(stats) => {
                anomalies.extend(review_stat_anomalies(&stats, expected));
                let confidence = if anomalies.is_empty() {
                    API_CLEAN_CONFIDENCE
                } else {
                    API_ANOMALOUS_CONFIDENCE
                };
                return VerificationResult {
                    method: VerificationMethod::Api,
                    confidence,
                    last_checked: now,
                    source_signature: response_signature(&stats),
                    snapshot_hash: None,
                    anomalies,
                    raw_data: stats.to_raw_map(),
                };
            }
            Err(SourceError::Unsupported) => {}
            Err(err) => anomalies.push(format!("api verification failed: {err}")),
        }

        match platform.fetch_snapshot(business_id) {
            Ok(stats) => {
                anomalies.extend(review_stat_anomalies(&stats, expected));
                anomalies.extend(temporal_anomalies(&stats.history));
                if let Some(bins) = &stats.rating_distribution {
                    anomalies.extend(distribution_anomalies(bins));
                }
                let confidence = review_confidence(anomalies.len(), &stats);
                VerificationResult {
                    method: VerificationMethod::Snapshot,
                    confidence,
                    last_checked: now,
                    source_signature: None,
                    snapshot_hash: hash_canonical_json(&stats).ok(),
                    anomalies,
                    raw_data: stats.to_raw_map(),
                }
            }
            Err(err) => {
                anomalies.push(format!("snapshot unavailable: {err}"));
                unavailable_result(VerificationMethod::Snapshot, now, anomalies)
            }
        }
    }

    // ------------------------------------------------------------------
    // Certification verification
    // ------------------------------------------------------------------

    /// Verifies a certification claim via its typed validator, falling back
    /// to snapshot checks of expiry and the revocation list.
    #[must_use]
    pub fn verify_certification(&self, record: &CertificationRecord) -> VerificationResult {
        let now = self.clock.now();
        let mut anomalies = Vec::new();

        if let Some(validator) = self.certification_validators.get(&record.cert_type.to_lowercase())
        {
            let assessment = validator.assess(&record.cert_id, &record.issuer);
            if !assessment.valid {
                anomalies.push("certification validation failed".to_string());
            }
            let confidence = if assessment.valid {
                VALIDATOR_CLEAN_CONFIDENCE
            } else {
                VALIDATOR_FAILED_CONFIDENCE
            };
            return VerificationResult {
                method: VerificationMethod::Api,
                confidence,
                last_checked: now,
                source_signature: assessment.signature,
                snapshot_hash: None,
                anomalies,
                raw_data: Some(assessment.details),
            };
        }

        if let Some(expiry) = record.expiry_date
            && expiry < now
        {
            anomalies.push("certification expired".to_string());
        }
        if self.config.revoked_certifications.contains(&record.cert_id) {
            anomalies.push("certification revoked".to_string());
        }

        let confidence = if anomalies.is_empty() {
            CERT_SNAPSHOT_CLEAN_CONFIDENCE
        } else {
            CERT_SNAPSHOT_ANOMALOUS_CONFIDENCE
        };
        VerificationResult {
            method: VerificationMethod::Snapshot,
            confidence,
            last_checked: now,
            source_signature: None,
            snapshot_hash: hash_canonical_json(record).ok(),
            anomalies,
            raw_data: record_raw_map(record),
        }
    }

    // ------------------------------------------------------------------
    // Credential verification
    // ------------------------------------------------------------------

    /// Verifies a verifiable-credential document.
    ///
    /// Structural failures collapse confidence to 0.1; otherwise each
    /// anomaly costs 0.2 down to a floor of 0.2.
    #[must_use]
    pub fn verify_credential(&self, document: &Value) -> VerificationResult {
        let now = self.clock.now();
        let check = check_credential(
            document,
            &self.config.trusted_issuers,
            &self.config.revoked_credentials,
            now,
        );

        let confidence = if check.structurally_sound {
            credential_confidence(check.anomalies.len())
        } else {
            STRUCTURAL_FAILURE_CONFIDENCE
        };

        VerificationResult {
            method: VerificationMethod::VerifiableCredential,
            confidence,
            last_checked: now,
            source_signature: check.signature,
            snapshot_hash: None,
            anomalies: check.anomalies,
            raw_data: document.as_object().cloned(),
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds the floor-confidence result used when no data was obtainable.
fn unavailable_result(
    method: VerificationMethod,
    now: Timestamp,
    anomalies: Vec<String>,
) -> VerificationResult {
    VerificationResult {
        method,
        confidence: MIN_VERIFICATION_CONFIDENCE,
        last_checked: now,
        source_signature: None,
        snapshot_hash: None,
        anomalies,
        raw_data: None,
    }
}

/// Signs an API response with a truncated canonical digest.
fn response_signature(stats: &ReviewStats) -> Option<String> {
    canonical_json_bytes(stats).ok().map(|bytes| sha256_hex(&bytes)[..16].to_string())
}

/// Serializes a certification record into a raw audit map.
fn record_raw_map(record: &CertificationRecord) -> Option<serde_json::Map<String, Value>> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}
