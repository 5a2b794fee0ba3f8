// crates/signal-forge-core/src/core/evidence.rs
// ============================================================================
// Module: Signal Forge Evidence Model
// Description: Canonical envelope for third-party data with hash and TTL.
// Purpose: Provide the evidence contract shared by adapters, cache, and issuance.
// Dependencies: crate::core::{hashing, identifiers, time}, serde, serde_json
// ============================================================================

//! ## Overview
//! Evidence wraps one datum retrieved from one external source: the opaque
//! payload map, where it came from, when it was retrieved, and how long it
//! may be trusted. The payload is content-hashable through the canonical
//! JSON routine; the hash participates in credential issuance. Evidence is
//! owned by the cache while live; clones are handed to callers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::core::hashing::ContentHash;
use crate::core::hashing::HashError;
use crate::core::hashing::hash_canonical_json;
use crate::core::identifiers::ProviderName;
use crate::core::identifiers::SourceId;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Entity Scope
// ============================================================================

/// Entity level an evidence payload describes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityScope {
    /// Brand-level evidence keyed by shop domain or merchant id.
    Brand,
    /// Product-level evidence keyed by SKU or catalog id.
    Product,
}

impl EntityScope {
    /// Returns the stable string form of the scope.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Product => "product",
        }
    }
}

impl fmt::Display for EntityScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Evidence Envelope
// ============================================================================

/// TTL stamped onto evidence replaced after an anomaly was detected.
pub const ANOMALY_TTL_HOURS: u32 = 1;

/// Payload key set when anomaly detection flagged the evidence.
pub const ANOMALY_FLAG_KEY: &str = "anomaly_detected";

/// Canonical envelope for one datum from one external source.
///
/// # Invariants
/// - `source_id` is namespaced as `<source>:<scope>:<id>`.
/// - `data` is content-hashable via the canonical JSON form.
/// - Serialized `retrieved_at` is RFC 3339 with a trailing `Z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Provider the datum was retrieved from.
    pub source: ProviderName,
    /// Entity level the payload describes.
    pub entity: EntityScope,
    /// Namespaced source identifier.
    pub source_id: SourceId,
    /// Retrieval instant.
    pub retrieved_at: Timestamp,
    /// Public URL where the datum can be inspected.
    pub evidence_url: String,
    /// Opaque payload map, fully serializable.
    pub data: Map<String, Value>,
    /// Optional upstream signature over the payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Hours the payload may be served from cache.
    pub ttl_hours: u32,
}

impl Evidence {
    /// Computes the content hash of the payload map.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when the payload cannot be canonicalized.
    pub fn content_hash(&self) -> Result<ContentHash, HashError> {
        hash_canonical_json(&self.data)
    }

    /// Returns true while the evidence is within its TTL at `now`.
    #[must_use]
    pub fn is_fresh(&self, now: Timestamp) -> bool {
        now.hours_since(self.retrieved_at) < f64::from(self.ttl_hours)
    }

    /// Marks the payload as anomalous and shortens the TTL to one hour.
    pub fn flag_anomalous(&mut self) {
        self.data.insert(ANOMALY_FLAG_KEY.to_string(), Value::Bool(true));
        self.ttl_hours = ANOMALY_TTL_HOURS;
    }

    /// Returns true when the payload carries the anomaly flag.
    #[must_use]
    pub fn is_anomalous(&self) -> bool {
        matches!(self.data.get(ANOMALY_FLAG_KEY), Some(Value::Bool(true)))
    }
}

// ============================================================================
// SECTION: Cache Key
// ============================================================================

/// Cache key identifying one `(provider, entity, id)` evidence slot.
///
/// # Invariants
/// - Two keys compare equal exactly when they address the same slot.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CacheKey {
    /// Provider the slot belongs to.
    pub provider: ProviderName,
    /// Entity level of the slot.
    pub entity: EntityScope,
    /// Brand domain or product identifier addressed by the slot.
    pub subject: String,
}

impl CacheKey {
    /// Creates a cache key for the given slot.
    #[must_use]
    pub fn new(provider: ProviderName, entity: EntityScope, subject: impl Into<String>) -> Self {
        Self {
            provider,
            entity,
            subject: subject.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.provider, self.entity, self.subject)
    }
}
