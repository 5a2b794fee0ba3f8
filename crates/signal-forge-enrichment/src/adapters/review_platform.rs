// crates/signal-forge-enrichment/src/adapters/review_platform.rs
// ============================================================================
// Module: Review Platform Adapter
// Description: Brand-level review statistics from a high-churn review platform.
// Purpose: Produce review evidence with a short TTL matching platform churn.
// Dependencies: signal-forge-core, reqwest, serde_json
// ============================================================================

//! ## Overview
//! The review platform publishes brand-level review aggregates (average
//! rating, totals, rating breakdown, recent reviews). Ratings move daily, so
//! brand evidence carries a 24 hour TTL. The platform has no product scope;
//! product fetches report the unsupported tag.

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

/// Registered provider name of the review platform.
pub const PROVIDER_NAME: &str = "review_platform";

/// Configuration for the review platform adapter.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ReviewPlatformConfig {
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
    /// TTL stamped on brand evidence, in hours.
    pub brand_ttl_hours: u32,
}

impl Default for ReviewPlatformConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.review-platform.example/v1".to_string(),
            portal_url: "https://www.review-platform.example".to_string(),
            timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            brand_ttl_hours: 24,
        }
    }
}

// ============================================================================
// SECTION: Adapter Implementation
// ============================================================================

/// Brand-scope adapter for the review platform.
pub struct ReviewPlatformAdapter {
    /// Adapter configuration, including endpoint and TTL.
    config: ReviewPlatformConfig,
    /// Validated API base URL.
    base: Url,
    /// HTTP client used for outbound requests.
    client: Client,
    /// Clock stamping retrieval instants.
    clock: Arc<dyn Clock>,
}

impl ReviewPlatformAdapter {
    /// Creates a new adapter with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Config`] when the endpoint or HTTP client is
    /// invalid.
    pub fn new(config: ReviewPlatformConfig) -> Result<Self, AdapterError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new adapter with an explicit clock.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Config`] when the endpoint or HTTP client is
    /// invalid.
    pub fn with_clock(
        config: ReviewPlatformConfig,
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

    /// Builds the business-unit lookup URL for a domain.
    fn brand_url(&self, domain: &BrandDomain) -> Result<Url, AdapterError> {
        let mut url = self
            .base
            .join("business-units/find")
            .map_err(|err| AdapterError::Config(format!("invalid request url: {err}")))?;
        url.query_pairs_mut().append_pair("domain", domain.as_str());
        Ok(url)
    }
}

#[async_trait]
impl ProviderAdapter for ReviewPlatformAdapter {
    fn name(&self) -> ProviderName {
        ProviderName::new(PROVIDER_NAME)
    }

    fn supports(&self, scope: EntityScope) -> bool {
        scope == EntityScope::Brand
    }

    async fn fetch_brand(&self, domain: &BrandDomain) -> Result<Evidence, AdapterError> {
        let url = self.brand_url(domain)?;
        let data = fetch_json_map(&self.client, url, self.config.api_key.as_deref()).await?;
        Ok(Evidence {
            source: self.name(),
            entity: EntityScope::Brand,
            source_id: SourceId::namespaced(PROVIDER_NAME, "domain", domain.as_str()),
            retrieved_at: self.clock.now(),
            evidence_url: format!("{}/review/{}", self.config.portal_url, domain),
            data,
            signature: None,
            ttl_hours: self.config.brand_ttl_hours,
        })
    }

    async fn fetch_product(&self, _product_id: &ProductId) -> Result<Evidence, AdapterError> {
        Err(AdapterError::Unsupported {
            scope: EntityScope::Product,
        })
    }
}
