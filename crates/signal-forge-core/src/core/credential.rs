// crates/signal-forge-core/src/core/credential.rs
// ============================================================================
// Module: Signal Forge Verifiable Credentials
// Description: Typed W3C verifiable-credential documents for evidence.
// Purpose: Provide the JSON-LD contract produced at issuance and checked on verify.
// Dependencies: crate::core::{evidence, hashing, identifiers, time}, serde
// ============================================================================

//! ## Overview
//! A verifiable credential binds an evidence payload to its content hash
//! under an issuer's key. Issuance fills every field except the cryptographic
//! proof value, which is delegated to the host's signing service. The
//! serialized form is JSON-LD with the W3C credentials context.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::core::evidence::EntityScope;
use crate::core::hashing::ContentHash;
use crate::core::identifiers::IssuerId;
use crate::core::identifiers::ProviderName;
use crate::core::identifiers::SourceId;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// JSON-LD context of every issued credential.
pub const CREDENTIAL_CONTEXT: [&str; 2] = [
    "https://www.w3.org/2018/credentials/v1",
    "https://agentic-commerce.org/axp/v0.1/context",
];

/// Type array of every issued credential.
pub const CREDENTIAL_TYPES: [&str; 2] = ["VerifiableCredential", "ThirdPartyEvidence"];

// ============================================================================
// SECTION: Credential Document
// ============================================================================

/// W3C verifiable credential wrapping one evidence payload.
///
/// # Invariants
/// - `credential_subject.evidence_hash` is the canonical hash of
///   `credential_subject.data`.
/// - `expiration_date` is `issuance_date` plus the evidence TTL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiableCredential {
    /// JSON-LD context array.
    #[serde(rename = "@context")]
    pub context: Vec<String>,
    /// Credential type array.
    #[serde(rename = "type")]
    pub credential_type: Vec<String>,
    /// Issuer identifier.
    pub issuer: IssuerId,
    /// Issuance instant.
    #[serde(rename = "issuanceDate")]
    pub issuance_date: Timestamp,
    /// Expiration instant.
    #[serde(rename = "expirationDate")]
    pub expiration_date: Timestamp,
    /// Subject binding the evidence payload to its hash.
    #[serde(rename = "credentialSubject")]
    pub credential_subject: CredentialSubject,
    /// Optional revocation status entry.
    #[serde(
        rename = "credentialStatus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub credential_status: Option<CredentialStatus>,
    /// Proof envelope; the cryptographic value is filled by the signer.
    pub proof: CredentialProof,
}

/// Subject section of an evidence credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialSubject {
    /// Namespaced source identifier of the evidence.
    pub id: SourceId,
    /// Provider the evidence came from.
    pub source: ProviderName,
    /// Entity level of the evidence.
    pub entity: EntityScope,
    /// Evidence payload map.
    pub data: Map<String, Value>,
    /// Canonical hash of the payload map.
    pub evidence_hash: ContentHash,
    /// Public URL where the datum can be inspected.
    pub evidence_url: String,
}

/// Revocation status entry of a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialStatus {
    /// Status entry identifier checked against revocation registries.
    pub id: String,
    /// Status entry type.
    #[serde(rename = "type")]
    pub status_type: String,
}

/// Proof envelope of a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialProof {
    /// Proof suite identifier.
    #[serde(rename = "type")]
    pub proof_type: String,
    /// Proof creation instant.
    pub created: Timestamp,
    /// Verification method reference (`<issuer>#key-1`).
    #[serde(rename = "verificationMethod")]
    pub verification_method: String,
    /// Proof purpose.
    #[serde(rename = "proofPurpose")]
    pub proof_purpose: String,
    /// Detached signature value, filled by the signing service.
    #[serde(rename = "proofValue", default, skip_serializing_if = "Option::is_none")]
    pub proof_value: Option<String>,
}
