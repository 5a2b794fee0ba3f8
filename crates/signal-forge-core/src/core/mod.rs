// crates/signal-forge-core/src/core/mod.rs
// ============================================================================
// Module: Signal Forge Core Types
// Description: Canonical data model for trust and intent signals.
// Purpose: Provide stable, serializable types shared by every pipeline stage.
// Dependencies: serde, serde_jcs, sha2, time
// ============================================================================

//! ## Overview
//! Core types define evidence envelopes, the closed intent taxonomy, soft
//! signal bundles, verification results, and verifiable-credential documents.
//! These types are the canonical source of truth for any derived API
//! surfaces (HTTP, MCP, or SDKs).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod credential;
pub mod evidence;
pub mod hashing;
pub mod identifiers;
pub mod intent;
pub mod signals;
pub mod time;
pub mod verification;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use credential::CREDENTIAL_CONTEXT;
pub use credential::CREDENTIAL_TYPES;
pub use credential::CredentialProof;
pub use credential::CredentialStatus;
pub use credential::CredentialSubject;
pub use credential::VerifiableCredential;
pub use evidence::ANOMALY_TTL_HOURS;
pub use evidence::CacheKey;
pub use evidence::EntityScope;
pub use evidence::Evidence;
pub use hashing::ContentHash;
pub use hashing::HashError;
pub use hashing::canonical_json_bytes;
pub use hashing::canonical_json_string;
pub use hashing::hash_canonical_json;
pub use hashing::sha256_hex;
pub use identifiers::BrandDomain;
pub use identifiers::IssuerId;
pub use identifiers::ProductId;
pub use identifiers::ProviderName;
pub use identifiers::SourceId;
pub use intent::INTENT_TAXONOMY;
pub use intent::Intent;
pub use intent::IntentSignal;
pub use signals::KpiEvidence;
pub use signals::SoftSignals;
pub use signals::clamp_unit;
pub use signals::round_score;
pub use time::Clock;
pub use time::FixedClock;
pub use time::SystemClock;
pub use time::TimeError;
pub use time::Timestamp;
pub use verification::DomainAgeResult;
pub use verification::MAX_VERIFICATION_CONFIDENCE;
pub use verification::MIN_VERIFICATION_CONFIDENCE;
pub use verification::VerificationMethod;
pub use verification::VerificationResult;
pub use verification::clamp_confidence;
