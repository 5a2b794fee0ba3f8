// crates/signal-forge-pipeline/src/kpi/reliability.rs
// ============================================================================
// Module: Reliability Signal
// Description: Defect and warranty reliability against the category baseline.
// Purpose: Score how rarely the product comes back broken.
// Dependencies: signal-forge-core, crate::kpi::metrics
// ============================================================================

//! ## Overview
//! RMA, claim, and warranty counts are normalized per thousand units and
//! compared against the category baseline; time-to-claim acts as an MTBF
//! proxy saturating at two years. Normalized factor scores are combined
//! under signed weights and pass through the sigmoid.

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

/// Weight of the category-normalized RMA score.
const RMA_WEIGHT: f64 = 0.3;

/// Weight of the category-normalized claim score.
const CLAIM_WEIGHT: f64 = 0.3;

/// Weight of the MTBF proxy.
const MTBF_WEIGHT: f64 = 0.2;

/// Penalty weight of the warranty-claim score.
const WARRANTY_WEIGHT: f64 = -0.1;

/// Weight of the review durability aspect.
const DURABILITY_WEIGHT: f64 = 0.1;

/// Days-to-claim value treated as full MTBF saturation (two years).
const MTBF_SATURATION_DAYS: f64 = 730.0;

/// Warranty claims per thousand units treated as the ceiling.
const WARRANTY_RATE_CEILING: f64 = 10.0;

// ============================================================================
// SECTION: Scoring
// ============================================================================

/// Scores reliability and emits its factor evidence.
pub(crate) fn score(metrics: &ProductMetrics, now: Timestamp) -> (f64, Vec<KpiEvidence>) {
    let units_sold = metrics.units_sold.max(1.0);
    let category_avg = metrics.category_rma_avg.max(0.1);

    let rma_rate = metrics.rma_count / units_sold * 1000.0;
    let claim_rate = metrics.claim_count / units_sold * 1000.0;
    let warranty_rate = metrics.warranty_claims / units_sold * 1000.0;
    let mtbf_score = (metrics.avg_days_to_claim / MTBF_SATURATION_DAYS).min(1.0);

    let evidence = vec![
        KpiEvidence {
            factor: "rma_per_1000".to_string(),
            value: rma_rate,
            source: "warranty_system".to_string(),
            confidence: (units_sold / 1000.0).min(1.0),
            timestamp: now,
        },
        KpiEvidence {
            factor: "mtbf_days".to_string(),
            value: metrics.avg_days_to_claim,
            source: "warranty_system".to_string(),
            confidence: if metrics.claim_count > 0.0 {
                (metrics.claim_count / 10.0).min(1.0)
            } else {
                0.1
            },
            timestamp: now,
        },
    ];

    let rma_score = 1.0 - (rma_rate / category_avg).min(1.0);
    let claim_score = 1.0 - (claim_rate / (category_avg * 2.0)).min(1.0);
    let warranty_score = 1.0 - (warranty_rate / WARRANTY_RATE_CEILING).min(1.0);

    let raw = RMA_WEIGHT * rma_score
        + CLAIM_WEIGHT * claim_score
        + MTBF_WEIGHT * mtbf_score
        + WARRANTY_WEIGHT * warranty_score
        + DURABILITY_WEIGHT * metrics.reviews_durability_avg;

    (sigmoid(raw), evidence)
}
