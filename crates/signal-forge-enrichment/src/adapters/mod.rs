// crates/signal-forge-enrichment/src/adapters/mod.rs
// ============================================================================
// Module: Provider Adapters
// Description: Per-source fetchers producing canonical evidence envelopes.
// Purpose: Wrap third-party trust APIs behind the adapter capability.
// Dependencies: signal-forge-core, reqwest, serde_json
// ============================================================================

//! ## Overview
//! Each adapter wraps one external trust source and produces [`Evidence`]
//! at brand and/or product scope. Adapters hold a single configured HTTP
//! client built at construction; API keys and endpoints are immutable
//! afterwards. An adapter with no data at a scope reports the dedicated
//! unsupported tag so the orchestrator can skip it without treating the
//! provider as failed.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod review_platform;
pub mod seller_ratings;
pub mod shop_certification;
pub mod tech_stack;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use review_platform::ReviewPlatformAdapter;
pub use review_platform::ReviewPlatformConfig;
pub use seller_ratings::SellerRatingsAdapter;
pub use seller_ratings::SellerRatingsConfig;
pub use shop_certification::ShopCertificationAdapter;
pub use shop_certification::ShopCertificationConfig;
pub use tech_stack::TechStackAdapter;
pub use tech_stack::TechStackConfig;

// ============================================================================
// SECTION: Shared Client Helpers
// ============================================================================

use std::time::Duration;

use reqwest::Client;
use reqwest::Url;
use serde_json::Map;
use serde_json::Value;
use signal_forge_core::AdapterError;

/// Default wall-clock timeout for one adapter request, in milliseconds.
pub(crate) const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Default user agent stamped on outbound requests.
pub(crate) const DEFAULT_USER_AGENT: &str = "signal-forge/0.1";

/// Builds the shared HTTP client for an adapter.
pub(crate) fn build_client(timeout_ms: u64, user_agent: &str) -> Result<Client, AdapterError> {
    Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .user_agent(user_agent.to_string())
        .build()
        .map_err(|err| AdapterError::Config(format!("http client build failed: {err}")))
}

/// Parses an endpoint string into a base URL.
///
/// A trailing slash is ensured so joining relative paths keeps the full
/// endpoint prefix.
pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url, AdapterError> {
    let normalized = if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{endpoint}/")
    };
    Url::parse(&normalized).map_err(|err| AdapterError::Config(format!("invalid endpoint: {err}")))
}

/// Issues a GET request and decodes the body as a JSON object.
pub(crate) async fn fetch_json_map(
    client: &Client,
    url: Url,
    api_key: Option<&str>,
) -> Result<Map<String, Value>, AdapterError> {
    let mut request = client.get(url);
    if let Some(key) = api_key {
        request = request.bearer_auth(key);
    }
    let response =
        request.send().await.map_err(|err| AdapterError::Fetch(err.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(AdapterError::Fetch(format!("unexpected status {status}")));
    }
    let body: Value = response
        .json()
        .await
        .map_err(|err| AdapterError::InvalidResponse(err.to_string()))?;
    let Value::Object(map) = body else {
        return Err(AdapterError::InvalidResponse("response body must be a json object".to_string()));
    };
    Ok(map)
}
