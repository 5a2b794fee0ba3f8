// system-tests/tests/scenarios.rs
// ============================================================================
// Module: End-to-End Scenario Tests
// Description: Cross-crate scenarios covering the full signal pipeline.
// ============================================================================
//! ## Overview
//! Exercises the documented end-to-end scenarios: gift intent ordering,
//! review rating anomalies, the reliability score, domain age composition,
//! TTL and anomaly TTL behavior, uniform smoothing on empty inputs, and the
//! credential issue-verify round trip.

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

use std::collections::BTreeSet;
use std::sync::Arc;

use signal_forge_core::BrandDomain;
use signal_forge_core::FixedClock;
use signal_forge_core::INTENT_TAXONOMY;
use signal_forge_core::Intent;
use signal_forge_core::IssuerId;
use signal_forge_core::Timestamp;
use signal_forge_core::VerificationMethod;
use signal_forge_enrichment::EnrichmentOrchestrator;
use signal_forge_enrichment::InMemoryEvidenceCache;
use signal_forge_enrichment::NullAuditSink;
use signal_forge_enrichment::OrchestratorConfig;
use signal_forge_pipeline::IntentMixer;
use signal_forge_pipeline::KpiCalculator;
use signal_forge_pipeline::OrderItem;
use signal_forge_pipeline::OrderRecord;
use signal_forge_pipeline::ProductActivity;
use signal_forge_pipeline::ProductCategory;
use signal_forge_pipeline::ProductMetrics;
use signal_forge_verify::DomainAgeEstimator;
use signal_forge_verify::DomainHistorySource;
use signal_forge_verify::ReviewSource;
use signal_forge_verify::ReviewStats;
use signal_forge_verify::SourceError;
use signal_forge_verify::TrustVerifier;
use signal_forge_verify::TrustVerifierConfig;
use system_tests::ScriptedBrandAdapter;
use system_tests::review_metrics_payload;
use time::macros::datetime;

// ============================================================================
// SECTION: Scenario 1 - Gift Intent Bundle
// ============================================================================

/// A gift-wrapped December order plus a running bundle puts gift, running,
/// and sport on top, in that order.
#[test]
fn test_gift_intent_bundle_ordering() {
    let activity = ProductActivity {
        orders: vec![
            OrderRecord {
                created_at: Timestamp::parse_rfc3339("2025-12-20T10:00:00Z").unwrap(),
                gift_wrap: true,
                gift_message: None,
                items: Vec::new(),
            },
            OrderRecord {
                created_at: Timestamp::parse_rfc3339("2025-09-15T10:00:00Z").unwrap(),
                gift_wrap: false,
                gift_message: None,
                items: vec![
                    OrderItem {
                        category: "running_shoes".to_string(),
                    },
                    OrderItem {
                        category: "running_socks".to_string(),
                    },
                ],
            },
        ],
        ..ProductActivity::default()
    };
    let now = Timestamp::new(datetime!(2025-12-21 12:00:00 UTC));

    let signals = IntentMixer::default().compute(&activity, 30.0, now);

    assert_eq!(signals[0].intent, Intent::Gift);
    assert_eq!(signals[1].intent, Intent::Running);
    assert_eq!(signals[2].intent, Intent::Sport);
    let total: f64 = signals.iter().map(|signal| signal.share).sum();
    assert!((total - 1.0).abs() < 1e-6);
}

// ============================================================================
// SECTION: Scenario 2 - Rating Anomaly
// ============================================================================

/// Review source with public snapshots but no official API.
struct SnapshotOnlySource {
    /// Snapshot statistics served for every lookup.
    stats: ReviewStats,
}

impl ReviewSource for SnapshotOnlySource {
    fn fetch_api(&self, _business_id: &str) -> Result<ReviewStats, SourceError> {
        Err(SourceError::Unsupported)
    }

    fn fetch_snapshot(&self, _business_id: &str) -> Result<ReviewStats, SourceError> {
        Ok(self.stats.clone())
    }
}

/// Inflated snapshot statistics trigger the rating, count, and verified
/// anomalies and drop confidence below one half.
#[test]
fn test_rating_anomaly_detection() {
    let clock = Arc::new(FixedClock::new(Timestamp::new(datetime!(2025-10-01 12:00:00 UTC))));
    let mut verifier = TrustVerifier::new(TrustVerifierConfig::default(), clock);
    verifier.register_review_source(
        "review_platform",
        Arc::new(SnapshotOnlySource {
            stats: ReviewStats {
                avg_rating: Some(4.9),
                total_reviews: Some(2400.0),
                verified_ratio: Some(0.25),
                ..ReviewStats::default()
            },
        }),
    );
    let expected = ReviewStats {
        avg_rating: Some(4.5),
        total_reviews: Some(1200.0),
        ..ReviewStats::default()
    };

    let result = verifier.verify_review_source("review_platform", "demo.shop", &expected);

    assert_eq!(result.method, VerificationMethod::Snapshot);
    assert!(result.anomalies.iter().any(|entry| entry.contains("rating discrepancy")));
    assert!(result.anomalies.iter().any(|entry| entry.contains("review count increase")));
    assert!(result.anomalies.iter().any(|entry| entry.contains("verified review ratio")));
    assert!(result.confidence <= 0.5);
}

// ============================================================================
// SECTION: Scenario 3 - Reliability Score
// ============================================================================

/// A solid warranty record lands near the documented reliability level.
#[test]
fn test_reliability_score_level() {
    let metrics = ProductMetrics {
        rma_count: 2.0,
        units_sold: 1000.0,
        category_rma_avg: 5.0,
        avg_days_to_claim: 600.0,
        reviews_durability_avg: 0.8,
        ..ProductMetrics::default()
    };
    let now = Timestamp::new(datetime!(2025-10-01 12:00:00 UTC));

    let signals = KpiCalculator::new().calculate(&metrics, ProductCategory::Generic, now);

    assert!((signals.reliability_score - 0.63).abs() < 0.05);
}

// ============================================================================
// SECTION: Scenario 4 - Domain Age
// ============================================================================

/// History source answering with a fixed date.
struct FixedHistorySource {
    /// Source name recorded in attestations.
    name: &'static str,
    /// Date reported for every domain.
    date: Timestamp,
}

impl DomainHistorySource for FixedHistorySource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn earliest_seen(&self, _domain: &str) -> Result<Option<Timestamp>, SourceError> {
        Ok(Some(self.date))
    }
}

/// Two corroborating sources yield full confidence and the capped score.
#[test]
fn test_domain_age_composition() {
    let clock = Arc::new(FixedClock::new(Timestamp::new(datetime!(2025-01-01 10:00:00 UTC))));
    let mut estimator = DomainAgeEstimator::new(clock);
    estimator.register_source(Arc::new(FixedHistorySource {
        name: "whois",
        date: Timestamp::new(datetime!(2019-06-01 00:00:00 UTC)),
    }));
    estimator.register_source(Arc::new(FixedHistorySource {
        name: "web_archive",
        date: Timestamp::new(datetime!(2019-03-15 12:00:00 UTC)),
    }));

    let result = estimator.estimate("demo.shop");

    assert_eq!(result.age_days, 2118);
    assert!((result.age_score - 0.6).abs() < 1e-9);
    assert!((result.confidence - 1.0).abs() < 1e-9);
    assert_eq!(result.sources.len(), 2);
}

// ============================================================================
// SECTION: Scenario 5 - TTL and Anomaly TTL
// ============================================================================

/// A second fetch inside the TTL reuses the cache; a 20x count explosion on
/// refresh flags the payload and shortens the TTL to one hour.
#[tokio::test]
async fn test_ttl_reuse_and_anomaly_override() {
    let clock = Arc::new(FixedClock::new(Timestamp::new(datetime!(2025-06-01 08:00:00 UTC))));
    let adapter = Arc::new(ScriptedBrandAdapter::new(
        "review_platform",
        24,
        clock.clone(),
        vec![review_metrics_payload(4.5, 100), review_metrics_payload(4.5, 2000)],
    ));
    let mut orchestrator = EnrichmentOrchestrator::new(
        Arc::new(InMemoryEvidenceCache::new()),
        clock.clone(),
        Arc::new(NullAuditSink),
        OrchestratorConfig::default(),
    );
    orchestrator.register_provider(adapter.clone());
    let orchestrator = Arc::new(orchestrator);
    let domain = BrandDomain::new("demo.shop");

    let first = orchestrator.enrich_brand(&domain, None).await;
    let cached = orchestrator.enrich_brand(&domain, None).await;
    assert_eq!(adapter.call_count(), 1);
    assert_eq!(first.evidence.len(), 1);
    assert_eq!(cached.evidence.len(), 1);

    clock.advance_hours(25);
    let refreshed = orchestrator.enrich_brand(&domain, None).await;
    let evidence = refreshed.evidence.values().next().unwrap();

    assert_eq!(adapter.call_count(), 2);
    assert!(evidence.is_anomalous());
    assert_eq!(evidence.ttl_hours, 1);
}

// ============================================================================
// SECTION: Scenario 6 - Dirichlet Smoothing
// ============================================================================

/// Empty inputs yield the uniform distribution at zero confidence.
#[test]
fn test_empty_inputs_uniform_distribution() {
    let now = Timestamp::new(datetime!(2025-10-01 12:00:00 UTC));

    let signals = IntentMixer::default().compute(&ProductActivity::default(), 30.0, now);

    let uniform = 1.0 / INTENT_TAXONOMY.len() as f64;
    assert_eq!(signals.len(), INTENT_TAXONOMY.len());
    for signal in &signals {
        assert!((signal.share - uniform).abs() < 1e-9);
        assert!((signal.confidence - 0.0).abs() < f64::EPSILON);
    }
}

// ============================================================================
// SECTION: Credential Round Trip
// ============================================================================

/// Issued credentials verify cleanly while trusted and unexpired.
#[tokio::test]
async fn test_credential_round_trip() {
    let clock = Arc::new(FixedClock::new(Timestamp::new(datetime!(2025-06-01 08:00:00 UTC))));
    let adapter = Arc::new(ScriptedBrandAdapter::new(
        "review_platform",
        24,
        clock.clone(),
        vec![review_metrics_payload(4.6, 12_873)],
    ));
    let mut orchestrator = EnrichmentOrchestrator::new(
        Arc::new(InMemoryEvidenceCache::new()),
        clock.clone(),
        Arc::new(NullAuditSink),
        OrchestratorConfig::default(),
    );
    orchestrator.register_provider(adapter);
    let orchestrator = Arc::new(orchestrator);
    let domain = BrandDomain::new("demo.shop");
    let issuer = IssuerId::new("did:web:aggregator.example.com");

    let outcome = orchestrator.enrich_brand(&domain, None).await;
    let evidence = outcome.evidence.values().next().unwrap();
    let credential = orchestrator.issue_credential(evidence, &issuer).unwrap();
    let document = serde_json::to_value(&credential).unwrap();

    let config = TrustVerifierConfig {
        trusted_issuers: BTreeSet::from([issuer.as_str().to_string()]),
        ..TrustVerifierConfig::default()
    };
    let verifier = TrustVerifier::new(config, clock);

    let result = verifier.verify_credential(&document);

    assert!(result.anomalies.is_empty(), "unexpected anomalies: {:?}", result.anomalies);
    assert!(result.confidence >= 0.75);
    assert_eq!(
        document.pointer("/credentialSubject/evidence_hash").and_then(serde_json::Value::as_str),
        Some(evidence.content_hash().unwrap().as_str())
    );
}
