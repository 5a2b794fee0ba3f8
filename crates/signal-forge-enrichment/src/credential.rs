// crates/signal-forge-enrichment/src/credential.rs
// ============================================================================
// Module: Credential Issuance
// Description: Verifiable-credential issuance over cached evidence.
// Purpose: Fill every credential field except the cryptographic proof value.
// Dependencies: signal-forge-core, thiserror
// ============================================================================

//! ## Overview
//! Issuance binds an evidence payload to its canonical content hash under an
//! issuer identifier. The proof envelope is fully populated except for the
//! detached signature value, which the host's signing service appends.

// ============================================================================
// SECTION: Imports
// ============================================================================

use signal_forge_core::CREDENTIAL_CONTEXT;
use signal_forge_core::CREDENTIAL_TYPES;
use signal_forge_core::CredentialProof;
use signal_forge_core::CredentialSubject;
use signal_forge_core::Evidence;
use signal_forge_core::HashError;
use signal_forge_core::IssuerId;
use signal_forge_core::Timestamp;
use signal_forge_core::VerifiableCredential;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Proof suite stamped on issued credentials.
pub const PROOF_TYPE: &str = "Ed25519Signature2020";

/// Proof purpose stamped on issued credentials.
pub const PROOF_PURPOSE: &str = "assertionMethod";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised during credential issuance.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Evidence payload could not be hashed.
    #[error("evidence hash failed: {0}")]
    Hash(#[from] HashError),
}

// ============================================================================
// SECTION: Issuance
// ============================================================================

/// Issues a verifiable credential over an evidence payload.
///
/// The credential expires when the evidence TTL elapses; signing is
/// delegated, so `proof.proof_value` is left empty.
///
/// # Errors
///
/// Returns [`CredentialError::Hash`] when the payload cannot be
/// canonicalized.
pub fn issue_credential(
    evidence: &Evidence,
    issuer: &IssuerId,
    now: Timestamp,
) -> Result<VerifiableCredential, CredentialError> {
    let evidence_hash = evidence.content_hash()?;
    Ok(VerifiableCredential {
        context: CREDENTIAL_CONTEXT.iter().map(ToString::to_string).collect(),
        credential_type: CREDENTIAL_TYPES.iter().map(ToString::to_string).collect(),
        issuer: issuer.clone(),
        issuance_date: now,
        expiration_date: now.plus_hours(evidence.ttl_hours),
        credential_subject: CredentialSubject {
            id: evidence.source_id.clone(),
            source: evidence.source.clone(),
            entity: evidence.entity,
            data: evidence.data.clone(),
            evidence_hash,
            evidence_url: evidence.evidence_url.clone(),
        },
        credential_status: None,
        proof: CredentialProof {
            proof_type: PROOF_TYPE.to_string(),
            created: now,
            verification_method: format!("{issuer}#key-1"),
            proof_purpose: PROOF_PURPOSE.to_string(),
            proof_value: None,
        },
    })
}
