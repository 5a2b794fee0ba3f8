// crates/signal-forge-core/src/core/signals.rs
// ============================================================================
// Module: Signal Forge Soft Signals
// Description: Soft-KPI score bundle and per-factor evidence records.
// Purpose: Provide the deterministic output contract of the KPI calculator.
// Dependencies: crate::core::time, serde
// ============================================================================

//! ## Overview
//! Soft signals are 0-1 scores derived from measurable sub-factors rather
//! than direct user ratings. Every score is accompanied by the factor
//! evidence that produced it; evidence is never discarded without being
//! attached to a bundle. No NaN or out-of-range value ever leaves the
//! calculator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::time::Timestamp;

// ============================================================================
// SECTION: KPI Evidence
// ============================================================================

/// Evidence for one factor that entered a soft-signal score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiEvidence {
    /// Factor name (`return_size_rate`, `mtbf_days`, ...).
    pub factor: String,
    /// Raw factor value before weighting.
    pub value: f64,
    /// System the factor was measured in.
    pub source: String,
    /// Confidence in the factor, derived from sample size.
    pub confidence: f64,
    /// Instant the factor was extracted.
    pub timestamp: Timestamp,
}

// ============================================================================
// SECTION: Soft Signal Bundle
// ============================================================================

/// Complete soft-signal bundle for one product.
///
/// # Invariants
/// - Every score is within `[0, 1]` and rounded to three decimals.
/// - Identical inputs produce identical bundles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftSignals {
    /// Sizing-accuracy hint derived from return and advisor data.
    pub fit_hint_score: f64,
    /// Defect and warranty reliability.
    pub reliability_score: f64,
    /// Category-specific measured performance.
    pub performance_score: f64,
    /// Owner satisfaction from ratings, surveys, and sentiment.
    pub owner_satisfaction_score: f64,
    /// Market uniqueness from feature rarity and positioning.
    pub uniqueness_score: f64,
    /// Craftsmanship from materials, origin, and warranty posture.
    pub craftsmanship_score: f64,
    /// Sustainability from certifications, materials, and footprint.
    pub sustainability_score: f64,
    /// Innovation from features, patents, and recognition.
    pub innovation_score: f64,
    /// Ordered factor evidence backing the scores.
    pub evidence: Vec<KpiEvidence>,
    /// Calculation method tag.
    pub calculation_method: String,
    /// Instant the bundle was computed.
    pub last_updated: Timestamp,
}

// ============================================================================
// SECTION: Score Helpers
// ============================================================================

/// Rounds a score to three decimals for output.
#[must_use]
pub fn round_score(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Clamps a value into `[0, 1]`, mapping non-finite inputs to zero.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 }
}
