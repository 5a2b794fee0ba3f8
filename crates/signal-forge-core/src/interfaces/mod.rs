// crates/signal-forge-core/src/interfaces/mod.rs
// ============================================================================
// Module: Signal Forge Interfaces
// Description: Capability contracts for adapters and the evidence cache.
// Purpose: Define the seams the enrichment orchestrator integrates through.
// Dependencies: crate::core, async-trait, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how Signal Forge integrates with external systems
//! without embedding backend-specific details. Provider adapters communicate
//! unsupported operations through a dedicated error tag rather than a
//! failure, keeping orchestrator control flow linear. The cache contract
//! covers live evidence and the historical payloads used by anomaly
//! detection; external persistence plugs in behind it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::core::evidence::CacheKey;
use crate::core::evidence::EntityScope;
use crate::core::evidence::Evidence;
use crate::core::identifiers::BrandDomain;
use crate::core::identifiers::ProductId;
use crate::core::identifiers::ProviderName;

// ============================================================================
// SECTION: Provider Adapter
// ============================================================================

/// Provider adapter errors.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The adapter has no data at this entity scope; callers skip silently.
    #[error("provider does not support {scope} scope")]
    Unsupported {
        /// Scope the adapter was asked for.
        scope: EntityScope,
    },
    /// Adapter construction failed.
    #[error("adapter configuration invalid: {0}")]
    Config(String),
    /// Transient fetch failure (transport, status, or timeout).
    #[error("fetch failed: {0}")]
    Fetch(String),
    /// Upstream responded with a payload the adapter cannot use.
    #[error("adapter response invalid: {0}")]
    InvalidResponse(String),
}

impl AdapterError {
    /// Returns true for the unsupported-operation tag.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Per-source fetcher producing evidence at brand and/or product scope.
///
/// Adapters are stateless after construction; API keys and endpoints are
/// immutable once built.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Returns the registered provider name.
    fn name(&self) -> ProviderName;

    /// Returns true when the adapter can serve the given scope.
    fn supports(&self, scope: EntityScope) -> bool;

    /// Fetches brand-level evidence for a domain.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Unsupported`] when the adapter has no brand
    /// scope, and [`AdapterError::Fetch`] or
    /// [`AdapterError::InvalidResponse`] on transient failures.
    async fn fetch_brand(&self, domain: &BrandDomain) -> Result<Evidence, AdapterError>;

    /// Fetches product-level evidence for a product identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Unsupported`] when the adapter has no product
    /// scope, and [`AdapterError::Fetch`] or
    /// [`AdapterError::InvalidResponse`] on transient failures.
    async fn fetch_product(&self, product_id: &ProductId) -> Result<Evidence, AdapterError>;
}

// ============================================================================
// SECTION: Evidence Cache
// ============================================================================

/// Evidence cache errors.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Cache backend reported an error.
    #[error("evidence cache error: {0}")]
    Store(String),
}

/// Evidence cache with per-key history for anomaly detection.
///
/// Implementations serialize all reads and writes per key; the in-process
/// store is the default and external persistence is pluggable behind this
/// contract.
pub trait EvidenceCache: Send + Sync {
    /// Returns the cached evidence for a key, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend fails.
    fn get(&self, key: &CacheKey) -> Result<Option<Evidence>, CacheError>;

    /// Stores evidence under a key, retiring the previous payload into the
    /// key's history.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend fails.
    fn put(&self, key: &CacheKey, evidence: &Evidence) -> Result<(), CacheError>;

    /// Returns the historical payloads for a key, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend fails.
    fn history(&self, key: &CacheKey) -> Result<Vec<Map<String, Value>>, CacheError>;

    /// Drops every cached entry and its history.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend fails.
    fn clear(&self) -> Result<(), CacheError>;
}
