// crates/signal-forge-pipeline/tests/kpi.rs
// ============================================================================
// Module: KPI Calculator Tests
// Description: Tests for the eight soft-signal scores and their evidence.
// ============================================================================
//! ## Overview
//! Validates score bounds, determinism, factor direction, category
//! dispatch, and evidence emission.

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

use signal_forge_core::SoftSignals;
use signal_forge_core::Timestamp;
use signal_forge_pipeline::KpiCalculator;
use signal_forge_pipeline::ProductCategory;
use signal_forge_pipeline::ProductMetrics;
use time::macros::datetime;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Fixed computation instant for the KPI tests.
fn now() -> Timestamp {
    Timestamp::new(datetime!(2025-10-01 12:00:00 UTC))
}

/// Returns every score of a bundle.
fn all_scores(signals: &SoftSignals) -> [f64; 8] {
    [
        signals.fit_hint_score,
        signals.reliability_score,
        signals.performance_score,
        signals.owner_satisfaction_score,
        signals.uniqueness_score,
        signals.craftsmanship_score,
        signals.sustainability_score,
        signals.innovation_score,
    ]
}

// ============================================================================
// SECTION: Bounds and Determinism
// ============================================================================

/// Tests default metrics produce bounded, three-decimal scores.
#[test]
fn test_default_metrics_bounded() {
    let calculator = KpiCalculator::new();

    let signals = calculator.calculate(&ProductMetrics::default(), ProductCategory::Generic, now());

    for score in all_scores(&signals) {
        assert!((0.0..=1.0).contains(&score), "score out of range: {score}");
        assert!(((score * 1000.0).round() - score * 1000.0).abs() < 1e-9);
    }
}

/// Tests identical inputs produce identical bundles.
#[test]
fn test_deterministic_for_identical_inputs() {
    let calculator = KpiCalculator::new();
    let metrics = ProductMetrics {
        avg_rating: 4.4,
        review_count_total: 250.0,
        review_count_verified: 200.0,
        ..ProductMetrics::default()
    };

    let first = calculator.calculate(&metrics, ProductCategory::Footwear, now());
    let second = calculator.calculate(&metrics, ProductCategory::Footwear, now());

    assert_eq!(first, second);
}

// ============================================================================
// SECTION: Reliability
// ============================================================================

/// Tests the reliability score for a solid warranty record.
#[test]
fn test_reliability_solid_record() {
    let calculator = KpiCalculator::new();
    let metrics = ProductMetrics {
        rma_count: 2.0,
        units_sold: 1000.0,
        category_rma_avg: 5.0,
        avg_days_to_claim: 600.0,
        reviews_durability_avg: 0.8,
        ..ProductMetrics::default()
    };

    let signals = calculator.calculate(&metrics, ProductCategory::Generic, now());

    assert!((signals.reliability_score - 0.63).abs() < 0.05);
}

/// Tests more RMAs always lower reliability.
#[test]
fn test_reliability_monotonic_in_rma() {
    let calculator = KpiCalculator::new();
    let low = ProductMetrics {
        rma_count: 1.0,
        ..ProductMetrics::default()
    };
    let high = ProductMetrics {
        rma_count: 40.0,
        ..low.clone()
    };

    let low_score =
        calculator.calculate(&low, ProductCategory::Generic, now()).reliability_score;
    let high_score =
        calculator.calculate(&high, ProductCategory::Generic, now()).reliability_score;

    assert!(low_score > high_score);
}

// ============================================================================
// SECTION: Fit and Satisfaction
// ============================================================================

/// Tests size-issue returns lower the fit hint.
#[test]
fn test_fit_hint_penalizes_size_returns() {
    let calculator = KpiCalculator::new();
    let clean = ProductMetrics {
        purchases_total: 100.0,
        purchases_with_advisor: 60.0,
        ..ProductMetrics::default()
    };
    let sizing_trouble = ProductMetrics {
        returns_total: 50.0,
        returns_size: 45.0,
        exchanges_size: 30.0,
        ..clean.clone()
    };

    let clean_score =
        calculator.calculate(&clean, ProductCategory::Footwear, now()).fit_hint_score;
    let trouble_score = calculator
        .calculate(&sizing_trouble, ProductCategory::Footwear, now())
        .fit_hint_score;

    assert!(clean_score > trouble_score);
}

/// Tests better ratings raise owner satisfaction.
#[test]
fn test_satisfaction_follows_rating() {
    let calculator = KpiCalculator::new();
    let poor = ProductMetrics {
        avg_rating: 2.0,
        review_count_total: 200.0,
        ..ProductMetrics::default()
    };
    let great = ProductMetrics {
        avg_rating: 4.9,
        ..poor.clone()
    };

    let poor_score = calculator
        .calculate(&poor, ProductCategory::Generic, now())
        .owner_satisfaction_score;
    let great_score = calculator
        .calculate(&great, ProductCategory::Generic, now())
        .owner_satisfaction_score;

    assert!(great_score > poor_score);
}

// ============================================================================
// SECTION: Category Dispatch
// ============================================================================

/// Tests electronics scoring follows the benchmark percentile.
#[test]
fn test_performance_electronics_benchmark() {
    let calculator = KpiCalculator::new();
    let slow = ProductMetrics {
        benchmark_percentile: 10.0,
        ..ProductMetrics::default()
    };
    let fast = ProductMetrics {
        benchmark_percentile: 95.0,
        ..slow.clone()
    };

    let slow_score = calculator
        .calculate(&slow, ProductCategory::Electronics, now())
        .performance_score;
    let fast_score = calculator
        .calculate(&fast, ProductCategory::Electronics, now())
        .performance_score;

    assert!(fast_score > slow_score);
}

/// Tests stack height only counts for running footwear.
#[test]
fn test_performance_stack_height_running_only() {
    let calculator = KpiCalculator::new();
    let metrics = ProductMetrics {
        stack_height_mm: 38.0,
        ..ProductMetrics::default()
    };

    let running = calculator
        .calculate(&metrics, ProductCategory::RunningFootwear, now())
        .performance_score;
    let generic_footwear =
        calculator.calculate(&metrics, ProductCategory::Footwear, now()).performance_score;

    assert!(running > generic_footwear);
}

// ============================================================================
// SECTION: Sustainability and Evidence
// ============================================================================

/// Tests a product with no sustainability factors scores zero.
#[test]
fn test_sustainability_floor() {
    let calculator = KpiCalculator::new();

    let signals = calculator.calculate(&ProductMetrics::default(), ProductCategory::Generic, now());

    assert!((signals.sustainability_score - 0.0).abs() < f64::EPSILON);
}

/// Tests certifications and recycled content raise sustainability.
#[test]
fn test_sustainability_rewards_certifications() {
    let calculator = KpiCalculator::new();
    let metrics = ProductMetrics {
        sustainability_certifications: vec![
            "gots".to_string(),
            "fair_trade".to_string(),
            "cradle".to_string(),
        ],
        recycled_content_percent: 80.0,
        sustainable_packaging: true,
        ..ProductMetrics::default()
    };

    let signals = calculator.calculate(&metrics, ProductCategory::Generic, now());

    assert!(signals.sustainability_score > 0.5);
}

/// Tests the bundle carries evidence for every signal family.
#[test]
fn test_evidence_emission() {
    let calculator = KpiCalculator::new();

    let signals = calculator.calculate(&ProductMetrics::default(), ProductCategory::Generic, now());

    assert_eq!(signals.evidence.len(), 13);
    assert!(signals.evidence.iter().any(|item| item.factor == "return_size_rate"));
    assert!(signals.evidence.iter().any(|item| item.factor == "weighted_rating"));
    assert!(signals.evidence.iter().any(|item| item.factor == "patent_count"));
    assert_eq!(signals.calculation_method, "weighted_factors_sigmoid_normalized");
}
