// crates/signal-forge-pipeline/src/kpi/mod.rs
// ============================================================================
// Module: Soft-KPI Calculator
// Description: Deterministic factor-to-score computation for soft signals.
// Purpose: Derive the eight soft-signal scores with factor evidence.
// Dependencies: signal-forge-core, crate::kpi submodules
// ============================================================================

//! ## Overview
//! Each soft signal has a fixed factor list, a signed weight vector, and an
//! evidence emission policy with sample-size confidence. Bounded weighted
//! sums pass through a sigmoid (or a linear clamp where the factor mix is
//! already unit-scaled), so every score lands in `[0, 1]`. Missing input
//! fields default to documented baselines; the calculator never fails.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod fit;
pub mod market;
pub mod metrics;
pub mod performance;
pub mod reliability;
pub mod satisfaction;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use metrics::MaterialGrade;
pub use metrics::ProductCategory;
pub use metrics::ProductMetrics;

// ============================================================================
// SECTION: Calculator
// ============================================================================

use signal_forge_core::SoftSignals;
use signal_forge_core::Timestamp;
use signal_forge_core::clamp_unit;
use signal_forge_core::round_score;

/// Method tag stamped on every bundle.
pub const CALCULATION_METHOD: &str = "weighted_factors_sigmoid_normalized";

/// Deterministic soft-KPI calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct KpiCalculator;

impl KpiCalculator {
    /// Creates a calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Calculates the full soft-signal bundle for one product.
    #[must_use]
    pub fn calculate(
        &self,
        metrics: &ProductMetrics,
        category: ProductCategory,
        now: Timestamp,
    ) -> SoftSignals {
        let mut evidence = Vec::new();

        let (fit_hint, items) = fit::score(metrics, now);
        evidence.extend(items);
        let (reliability, items) = reliability::score(metrics, now);
        evidence.extend(items);
        let (performance, items) = performance::score(metrics, category, now);
        evidence.extend(items);
        let (owner_satisfaction, items) = satisfaction::score(metrics, now);
        evidence.extend(items);
        let (uniqueness, items) = market::uniqueness_score(metrics, now);
        evidence.extend(items);
        let (craftsmanship, items) = market::craftsmanship_score(metrics, now);
        evidence.extend(items);
        let (sustainability, items) = market::sustainability_score(metrics, now);
        evidence.extend(items);
        let (innovation, items) = market::innovation_score(metrics, now);
        evidence.extend(items);

        SoftSignals {
            fit_hint_score: finish(fit_hint),
            reliability_score: finish(reliability),
            performance_score: finish(performance),
            owner_satisfaction_score: finish(owner_satisfaction),
            uniqueness_score: finish(uniqueness),
            craftsmanship_score: finish(craftsmanship),
            sustainability_score: finish(sustainability),
            innovation_score: finish(innovation),
            evidence,
            calculation_method: CALCULATION_METHOD.to_string(),
            last_updated: now,
        }
    }
}

// ============================================================================
// SECTION: Shared Math
// ============================================================================

/// Logistic sigmoid mapping any finite value into `(0, 1)`.
pub(crate) fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Clamps a raw score into the unit interval and rounds for output.
fn finish(score: f64) -> f64 {
    round_score(clamp_unit(score))
}
