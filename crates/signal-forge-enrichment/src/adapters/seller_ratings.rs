// crates/signal-forge-enrichment/src/adapters/seller_ratings.rs
// ============================================================================
// Module: Seller Ratings Adapter
// Description: Aggregated seller ratings at brand and product scope.
// Purpose: Produce cross-platform rating evidence with a daily TTL.
// Dependencies: signal-forge-core, reqwest, serde_json
// ============================================================================

//! ## Overview
//! The aggregator merges seller ratings from multiple review platforms into
//! one merchant-level view (aggregated rating, per-source counts, aspect
//! scores, badges) and carries per-product rating and price-history data.
//! Aggregates refresh daily; both scopes use a 24 hour TTL.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::Url;
use signal_forge_core::AdapterError;
use signal_forge_core::BrandDomain;
use signal_forge_core::Clock;
use signal_forge_core::EntityScope;
use signal_forge_core::Evidence;
use signal_forge_core::ProductId;
use signal_forge_core::ProviderAdapter;
use signal_forge_core::ProviderName;
use signal_forge_core::SourceId;
use signal_forge_core::SystemClock;

use crate::adapters::DEFAULT_REQUEST_TIMEOUT_MS;
use crate::adapters::DEFAULT_USER_AGENT;
use crate::adapters::build_client;
use crate::adapters::fetch_json_map;
use crate::adapters::parse_endpoint;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Registered provider name of the seller ratings aggregator.
pub const PROVIDER_NAME: &str = "seller_ratings";

/// Configuration for the seller ratings adapter.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct SellerRatingsConfig {
    /// API key for authenticated endpoints.
    pub api_key: Option<String>,
    /// API base URL.
    pub base_url: String,
    /// Public portal URL used for evidence links.
    pub portal_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
    /// TTL stamped on evidence at both scopes, in hours.
    pub ttl_hours: u32,
}

impl Default for SellerRatingsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.seller-ratings.example/v1".to_string(),
            portal_url: "https://www.seller-ratings.example".to_string(),
            timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            ttl_hours: 24,
        }
    }
}

// ============================================================================
// SECTION: Adapter Implementation
// ============================================================================

/// Brand and product scope adapter for the seller ratings aggregator.
pub struct SellerRatingsAdapter {
    /// Adapter configuration, including endpoint and TTL.
    config: SellerRatingsConfig,
    /// Validated API base URL.
    base: Url,
    /// HTTP client used for outbound requests.
    client: Client,
    /// Clock stamping retrieval instants.
    clock: Arc<dyn Clock>,
}

impl SellerRatingsAdapter {
    /// Creates a new adapter with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Config`] when the endpoint or HTTP client is
    /// invalid.
    pub fn new(config: SellerRatingsConfig) -> Result<Self, AdapterError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new adapter with an explicit clock.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Config`] when the endpoint or HTTP client is
    /// invalid.
    pub fn with_clock(
        config: SellerRatingsConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AdapterError> {
        let base = parse_endpoint(&config.base_url)?;
        let client = build_client(config.timeout_ms, &config.user_agent)?;
        Ok(Self {
            config,
            base,
            client,
            clock,
        })
    }

    /// Joins a relative path onto the API base URL.
    fn endpoint(&self, path: &str) -> Result<Url, AdapterError> {
        self.base
            .join(path)
            .map_err(|err| AdapterError::Config(format!("invalid request url: {err}")))
    }
}

#[async_trait]
impl ProviderAdapter for SellerRatingsAdapter {
    fn name(&self) -> ProviderName {
        ProviderName::new(PROVIDER_NAME)
    }

    fn supports(&self, _scope: EntityScope) -> bool {
        true
    }

    async fn fetch_brand(&self, domain: &BrandDomain) -> Result<Evidence, AdapterError> {
        let url = self.endpoint(&format!("merchants/{domain}"))?;
        let data = fetch_json_map(&self.client, url, self.config.api_key.as_deref()).await?;
        Ok(Evidence {
            source: self.name(),
            entity: EntityScope::Brand,
            source_id: SourceId::namespaced(PROVIDER_NAME, "merchant", domain.as_str()),
            retrieved_at: self.clock.now(),
            evidence_url: format!("{}/seller?id={}", self.config.portal_url, domain),
            data,
            signature: None,
            ttl_hours: self.config.ttl_hours,
        })
    }

    async fn fetch_product(&self, product_id: &ProductId) -> Result<Evidence, AdapterError> {
        let url = self.endpoint(&format!("products/{product_id}"))?;
        let data = fetch_json_map(&self.client, url, self.config.api_key.as_deref()).await?;
        Ok(Evidence {
            source: self.name(),
            entity: EntityScope::Product,
            source_id: SourceId::namespaced(PROVIDER_NAME, "product", product_id.as_str()),
            retrieved_at: self.clock.now(),
            evidence_url: format!("{}/product/{}", self.config.portal_url, product_id),
            data,
            signature: None,
            ttl_hours: self.config.ttl_hours,
        })
    }
}
