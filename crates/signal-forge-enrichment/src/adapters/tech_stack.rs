// crates/signal-forge-enrichment/src/adapters/tech_stack.rs
// ============================================================================
// Module: Tech Stack Adapter
// Description: Technology stack detection for brand domains.
// Purpose: Produce slow-moving infrastructure evidence with a monthly TTL.
// Dependencies: signal-forge-core, reqwest, serde_json
// ============================================================================

//! ## Overview
//! The detector reports the technologies running on a domain (platform, CDN,
//! analytics, payment), capability and security posture, and a spend
//! estimate. Tech stacks change slowly, so brand evidence carries a 720 hour
//! TTL. The detector is domain-level only; product fetches report the
//! unsupported tag.

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

/// Registered provider name of the tech stack detector.
pub const PROVIDER_NAME: &str = "tech_stack";

/// Configuration for the tech stack adapter.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct TechStackConfig {
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

impl Default for TechStackConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.tech-stack.example/v20".to_string(),
            portal_url: "https://www.tech-stack.example".to_string(),
            timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            brand_ttl_hours: 720,
        }
    }
}

// ============================================================================
// SECTION: Adapter Implementation
// ============================================================================

/// Brand-scope adapter for the tech stack detector.
pub struct TechStackAdapter {
    /// Adapter configuration, including endpoint and TTL.
    config: TechStackConfig,
    /// Validated API base URL.
    base: Url,
    /// HTTP client used for outbound requests.
    client: Client,
    /// Clock stamping retrieval instants.
    clock: Arc<dyn Clock>,
}

impl TechStackAdapter {
    /// Creates a new adapter with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Config`] when the endpoint or HTTP client is
    /// invalid.
    pub fn new(config: TechStackConfig) -> Result<Self, AdapterError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new adapter with an explicit clock.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Config`] when the endpoint or HTTP client is
    /// invalid.
    pub fn with_clock(
        config: TechStackConfig,
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
}

#[async_trait]
impl ProviderAdapter for TechStackAdapter {
    fn name(&self) -> ProviderName {
        ProviderName::new(PROVIDER_NAME)
    }

    fn supports(&self, scope: EntityScope) -> bool {
        scope == EntityScope::Brand
    }

    async fn fetch_brand(&self, domain: &BrandDomain) -> Result<Evidence, AdapterError> {
        let mut url = self
            .base
            .join("lookup")
            .map_err(|err| AdapterError::Config(format!("invalid request url: {err}")))?;
        url.query_pairs_mut().append_pair("domain", domain.as_str());
        let data = fetch_json_map(&self.client, url, self.config.api_key.as_deref()).await?;
        Ok(Evidence {
            source: self.name(),
            entity: EntityScope::Brand,
            source_id: SourceId::namespaced(PROVIDER_NAME, "domain", domain.as_str()),
            retrieved_at: self.clock.now(),
            evidence_url: format!("{}/{}", self.config.portal_url, domain),
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
