// crates/signal-forge-enrichment/tests/adapters.rs
// ============================================================================
// Module: Adapter Tests
// Description: Tests for provider adapters against a local fixture server.
// ============================================================================
//! ## Overview
//! Validates envelope stamping (source id, TTL, evidence URL) and scope
//! handling using a local HTTP fixture server.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::sync::Arc;

use signal_forge_core::AdapterError;
use signal_forge_core::BrandDomain;
use signal_forge_core::EntityScope;
use signal_forge_core::FixedClock;
use signal_forge_core::ProductId;
use signal_forge_core::ProviderAdapter;
use signal_forge_core::SourceId;
use signal_forge_core::Timestamp;
use signal_forge_enrichment::ReviewPlatformAdapter;
use signal_forge_enrichment::ReviewPlatformConfig;
use signal_forge_enrichment::SellerRatingsAdapter;
use signal_forge_enrichment::SellerRatingsConfig;
use signal_forge_enrichment::TechStackAdapter;
use signal_forge_enrichment::TechStackConfig;
use time::macros::datetime;

// ============================================================================
// SECTION: Fixture Server
// ============================================================================

/// Serves a fixed JSON body for every request and returns the base URL.
fn spawn_fixture_server(body: &'static str) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let header: tiny_http::Header =
                "Content-Type: application/json".parse().unwrap();
            let response = tiny_http::Response::from_string(body).with_header(header);
            let _ = request.respond(response);
        }
    });
    format!("http://{addr}/v1")
}

/// Fixed clock shared by the adapter tests.
fn fixture_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(Timestamp::new(datetime!(2025-06-01 08:00:00 UTC))))
}

// ============================================================================
// SECTION: Review Platform
// ============================================================================

/// Tests brand evidence stamping from the review platform.
#[tokio::test]
async fn test_review_platform_brand_evidence() {
    let base_url = spawn_fixture_server(r#"{"avg_rating": 4.6, "count_total": 12873}"#);
    let config = ReviewPlatformConfig {
        base_url,
        ..ReviewPlatformConfig::default()
    };
    let adapter = ReviewPlatformAdapter::with_clock(config, fixture_clock()).unwrap();
    let domain = BrandDomain::new("demo.shop");

    let evidence = adapter.fetch_brand(&domain).await.unwrap();

    assert_eq!(evidence.entity, EntityScope::Brand);
    assert_eq!(
        evidence.source_id,
        SourceId::namespaced("review_platform", "domain", "demo.shop")
    );
    assert_eq!(evidence.ttl_hours, 24);
    assert!(evidence.evidence_url.ends_with("/review/demo.shop"));
    assert_eq!(evidence.data.get("avg_rating").and_then(serde_json::Value::as_f64), Some(4.6));
}

/// Tests the review platform reports product scope as unsupported.
#[tokio::test]
async fn test_review_platform_product_unsupported() {
    let config = ReviewPlatformConfig::default();
    let adapter = ReviewPlatformAdapter::with_clock(config, fixture_clock()).unwrap();
    let product = ProductId::new("sku_123");

    let result = adapter.fetch_product(&product).await;

    assert!(matches!(result, Err(AdapterError::Unsupported { .. })));
    assert!(!adapter.supports(EntityScope::Product));
}

// ============================================================================
// SECTION: Seller Ratings
// ============================================================================

/// Tests product evidence stamping from the seller ratings aggregator.
#[tokio::test]
async fn test_seller_ratings_product_evidence() {
    let base_url = spawn_fixture_server(r#"{"avg_rating": 4.5, "review_count": 342}"#);
    let config = SellerRatingsConfig {
        base_url,
        ..SellerRatingsConfig::default()
    };
    let adapter = SellerRatingsAdapter::with_clock(config, fixture_clock()).unwrap();
    let product = ProductId::new("sku_123");

    let evidence = adapter.fetch_product(&product).await.unwrap();

    assert_eq!(evidence.entity, EntityScope::Product);
    assert_eq!(
        evidence.source_id,
        SourceId::namespaced("seller_ratings", "product", "sku_123")
    );
    assert_eq!(evidence.ttl_hours, 24);
}

// ============================================================================
// SECTION: Tech Stack
// ============================================================================

/// Tests the tech stack detector stamps the slow-refresh TTL.
#[tokio::test]
async fn test_tech_stack_brand_ttl() {
    let base_url = spawn_fixture_server(r#"{"detected": [], "capabilities": {}}"#);
    let config = TechStackConfig {
        base_url,
        ..TechStackConfig::default()
    };
    let adapter = TechStackAdapter::with_clock(config, fixture_clock()).unwrap();
    let domain = BrandDomain::new("demo.shop");

    let evidence = adapter.fetch_brand(&domain).await.unwrap();

    assert_eq!(evidence.ttl_hours, 720);
    assert_eq!(
        evidence.source_id,
        SourceId::namespaced("tech_stack", "domain", "demo.shop")
    );
}

/// Tests a non-2xx upstream status surfaces as a fetch failure.
#[tokio::test]
async fn test_upstream_error_status_is_fetch_failure() {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let response = tiny_http::Response::from_string("unavailable").with_status_code(503);
            let _ = request.respond(response);
        }
    });
    let config = ReviewPlatformConfig {
        base_url: format!("http://{addr}/v1"),
        ..ReviewPlatformConfig::default()
    };
    let adapter = ReviewPlatformAdapter::with_clock(config, fixture_clock()).unwrap();
    let domain = BrandDomain::new("demo.shop");

    let result = adapter.fetch_brand(&domain).await;

    assert!(matches!(result, Err(AdapterError::Fetch(_))));
}
