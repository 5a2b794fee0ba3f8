// crates/signal-forge-pipeline/src/kpi/fit.rs
// ============================================================================
// Module: Fit Hint Signal
// Description: Sizing-accuracy score from return and advisor data.
// Purpose: Score how reliably the product fits as sized.
// Dependencies: signal-forge-core, crate::kpi::metrics
// ============================================================================

//! ## Overview
//! Size-driven returns and exchanges pull the score down; size-advisor
//! usage and positive fit mentions pull it up. The raw sum is shifted by
//! +0.5 before the sigmoid so a neutral product centers near the middle of
//! the scale.

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

/// Weight of the size-return rate.
const RETURN_SIZE_WEIGHT: f64 = -0.4;

/// Weight of the size-exchange rate.
const EXCHANGE_SIZE_WEIGHT: f64 = -0.2;

/// Weight of the advisor-usage rate.
const ADVISOR_USAGE_WEIGHT: f64 = 0.2;

/// Weight of the positive-fit review rate.
const FIT_POSITIVE_WEIGHT: f64 = 0.2;

/// Shift centering a neutral product near 0.5 after the sigmoid.
const CENTER_SHIFT: f64 = 0.5;

// ============================================================================
// SECTION: Scoring
// ============================================================================

/// Scores the fit hint and emits its factor evidence.
pub(crate) fn score(metrics: &ProductMetrics, now: Timestamp) -> (f64, Vec<KpiEvidence>) {
    let returns_total = metrics.returns_total.max(0.0);
    let purchases_total = metrics.purchases_total.max(1.0);
    let reviews_with_fit = metrics.reviews_with_fit.max(1.0);

    let return_size_rate = metrics.returns_size / returns_total.max(1.0);
    let exchange_size_rate = metrics.exchanges_size / purchases_total;
    let advisor_usage_rate = metrics.purchases_with_advisor / purchases_total;
    let fit_positive_rate = metrics.reviews_fit_positive / reviews_with_fit;

    let evidence = vec![
        KpiEvidence {
            factor: "return_size_rate".to_string(),
            value: return_size_rate,
            source: "returns_data".to_string(),
            confidence: (returns_total / 10.0).min(1.0),
            timestamp: now,
        },
        KpiEvidence {
            factor: "advisor_usage_rate".to_string(),
            value: advisor_usage_rate,
            source: "purchase_behavior".to_string(),
            confidence: (purchases_total / 50.0).min(1.0),
            timestamp: now,
        },
        KpiEvidence {
            factor: "fit_positive_rate".to_string(),
            value: fit_positive_rate,
            source: "review_analysis".to_string(),
            confidence: (reviews_with_fit / 20.0).min(1.0),
            timestamp: now,
        },
    ];

    let raw = RETURN_SIZE_WEIGHT * return_size_rate
        + EXCHANGE_SIZE_WEIGHT * exchange_size_rate
        + ADVISOR_USAGE_WEIGHT * advisor_usage_rate
        + FIT_POSITIVE_WEIGHT * fit_positive_rate;

    (sigmoid(raw + CENTER_SHIFT), evidence)
}
