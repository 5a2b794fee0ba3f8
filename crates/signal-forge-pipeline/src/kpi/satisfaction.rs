// crates/signal-forge-pipeline/src/kpi/satisfaction.rs
// ============================================================================
// Module: Owner Satisfaction Signal
// Description: Satisfaction from ratings, surveys, sentiment, and loyalty.
// Purpose: Score how happy owners stay after the purchase.
// Dependencies: signal-forge-core, crate::kpi::metrics
// ============================================================================

//! ## Overview
//! Verified reviews carry 1.5x mass in the weighted rating, which is then
//! normalized from the 1-5 scale onto the unit interval. CSAT, the recent
//! sentiment level plus its trend, and the repeat-purchase rate complete
//! the factor mix.

// ============================================================================
// SECTION: Imports
// ============================================================================

use signal_forge_core::KpiEvidence;
use signal_forge_core::Timestamp;

use crate::kpi::metrics::ProductMetrics;
use crate::kpi::sigmoid;

// ============================================================================
// SECTION: Weights
// ============================================================================

/// Weight of the normalized weighted rating.
const RATING_WEIGHT: f64 = 0.4;

/// Weight of the product CSAT score.
const CSAT_WEIGHT: f64 = 0.3;

/// Weight of recent sentiment plus its trend.
const SENTIMENT_WEIGHT: f64 = 0.2;

/// Weight of the repeat-purchase rate.
const REPEAT_WEIGHT: f64 = 0.1;

/// Extra mass granted to verified review ratings.
const VERIFIED_MASS: f64 = 1.5;

// ============================================================================
// SECTION: Scoring
// ============================================================================

/// Scores owner satisfaction and emits its factor evidence.
pub(crate) fn score(metrics: &ProductMetrics, now: Timestamp) -> (f64, Vec<KpiEvidence>) {
    let total = metrics.review_count_total.max(1.0);
    let verified = metrics.review_count_verified.clamp(0.0, total);
    let other = total - verified;
    let rating_all = metrics.avg_rating;
    let rating_verified = metrics.avg_rating_verified.unwrap_or(rating_all);

    let weighted_rating = (rating_verified * verified * VERIFIED_MASS + rating_all * other)
        / (verified * VERIFIED_MASS + other);
    let rating_normalized = (weighted_rating - 1.0) / 4.0;

    let sentiment_trend = metrics.sentiment_90d - metrics.sentiment_prev_90d;

    let evidence = vec![
        KpiEvidence {
            factor: "weighted_rating".to_string(),
            value: weighted_rating,
            source: "review_system".to_string(),
            confidence: (total / 100.0).min(1.0),
            timestamp: now,
        },
        KpiEvidence {
            factor: "csat_score".to_string(),
            value: metrics.csat_product,
            source: "survey_system".to_string(),
            confidence: (metrics.csat_responses / 50.0).min(1.0),
            timestamp: now,
        },
        KpiEvidence {
            factor: "sentiment_trend".to_string(),
            value: sentiment_trend,
            source: "sentiment_analysis".to_string(),
            confidence: 0.8,
            timestamp: now,
        },
    ];

    let raw = RATING_WEIGHT * rating_normalized
        + CSAT_WEIGHT * metrics.csat_product
        + SENTIMENT_WEIGHT * (metrics.sentiment_90d + sentiment_trend)
        + REPEAT_WEIGHT * metrics.repeat_purchase_rate;

    (sigmoid(raw).min(1.0), evidence)
}
