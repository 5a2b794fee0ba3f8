// crates/signal-forge-pipeline/src/kpi/performance.rs
// ============================================================================
// Module: Performance Signal
// Description: Category-dispatched measured performance scoring.
// Purpose: Score lab-measured performance per product category.
// Dependencies: signal-forge-core, crate::kpi::metrics
// ============================================================================

//! ## Overview
//! Performance factors differ per category: footwear scores energy return,
//! weight, cushioning, and stack height; electronics score benchmarks,
//! efficiency, and latency; everything else falls back to the review
//! performance aspect against the category average, capped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use signal_forge_core::KpiEvidence;
use signal_forge_core::Timestamp;

use crate::kpi::metrics::ProductCategory;
use crate::kpi::metrics::ProductMetrics;
use crate::kpi::sigmoid;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Grams below which footwear weight stops improving the score.
const WEIGHT_FLOOR_GRAMS: f64 = 200.0;

/// Gram range over which footwear weight decays to zero.
const WEIGHT_RANGE_GRAMS: f64 = 300.0;

/// Stack height in millimeters treated as full score for running shoes.
const STACK_SATURATION_MM: f64 = 40.0;

/// Stack score for footwear without a running positioning.
const STACK_NEUTRAL_SCORE: f64 = 0.5;

/// Latency in milliseconds at which the latency score reaches zero.
const LATENCY_CEILING_MS: f64 = 200.0;

// ============================================================================
// SECTION: Scoring
// ============================================================================

/// Scores performance for the given category and emits factor evidence.
pub(crate) fn score(
    metrics: &ProductMetrics,
    category: ProductCategory,
    now: Timestamp,
) -> (f64, Vec<KpiEvidence>) {
    let mut evidence = Vec::new();

    let raw = if category.is_footwear() {
        let energy_return = metrics.energy_return_percent / 100.0;
        let weight_score =
            1.0 - ((metrics.weight_grams - WEIGHT_FLOOR_GRAMS).max(0.0) / WEIGHT_RANGE_GRAMS).min(1.0);
        let cushioning = metrics.cushioning_index / 10.0;
        let stack_score = if category == ProductCategory::RunningFootwear {
            (metrics.stack_height_mm / STACK_SATURATION_MM).min(1.0)
        } else {
            STACK_NEUTRAL_SCORE
        };

        evidence.push(KpiEvidence {
            factor: "energy_return".to_string(),
            value: energy_return,
            source: "lab_test".to_string(),
            confidence: 0.95,
            timestamp: now,
        });
        evidence.push(KpiEvidence {
            factor: "weight_score".to_string(),
            value: weight_score,
            source: "product_specs".to_string(),
            confidence: 1.0,
            timestamp: now,
        });

        0.4 * energy_return + 0.2 * weight_score + 0.2 * cushioning + 0.2 * stack_score
    } else if category == ProductCategory::Electronics {
        let benchmark = metrics.benchmark_percentile / 100.0;
        let efficiency = metrics.efficiency_rating / 5.0;
        let latency_score = 1.0 - (metrics.latency_ms / LATENCY_CEILING_MS).min(1.0);

        evidence.push(KpiEvidence {
            factor: "benchmark_percentile".to_string(),
            value: benchmark,
            source: "benchmark_suite".to_string(),
            confidence: 0.9,
            timestamp: now,
        });

        0.5 * benchmark + 0.3 * efficiency + 0.2 * latency_score
    } else {
        metrics.reviews_performance_avg / metrics.category_performance_avg.max(0.1)
    };

    (sigmoid(raw).min(1.0), evidence)
}
