// crates/signal-forge-pipeline/src/kpi/market.rs
// ============================================================================
// Module: Market Position Signals
// Description: Uniqueness, craftsmanship, sustainability, and innovation.
// Purpose: Score the product's market positioning factors.
// Dependencies: signal-forge-core, crate::kpi::metrics
// ============================================================================

//! ## Overview
//! Four positioning signals share this module. Uniqueness, craftsmanship,
//! and innovation combine saturating factor scores under a sigmoid;
//! sustainability's factor mix is already unit-scaled, so it uses a linear
//! clamp instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use signal_forge_core::KpiEvidence;
use signal_forge_core::Timestamp;

use crate::kpi::metrics::ProductMetrics;
use crate::kpi::sigmoid;

// ============================================================================
// SECTION: Uniqueness
// ============================================================================

/// Scores market uniqueness and emits its factor evidence.
pub(crate) fn uniqueness_score(
    metrics: &ProductMetrics,
    now: Timestamp,
) -> (f64, Vec<KpiEvidence>) {
    let feature_rarity = metrics.rare_feature_count / metrics.total_feature_count.max(1.0);
    let limited = if metrics.is_limited_edition { 1.0 } else { 0.0 };
    let price_position = metrics.price_percentile_category / 100.0;

    let evidence = vec![KpiEvidence {
        factor: "feature_rarity".to_string(),
        value: feature_rarity,
        source: "market_analysis".to_string(),
        confidence: 0.7,
        timestamp: now,
    }];

    let raw = 0.4 * feature_rarity
        + 0.2 * limited
        + 0.2 * metrics.stock_scarcity_score
        + 0.2 * price_position;

    (sigmoid(raw), evidence)
}

// ============================================================================
// SECTION: Craftsmanship
// ============================================================================

/// Warranty length in days treated as full craftsmanship backing.
const WARRANTY_SATURATION_DAYS: f64 = 730.0;

/// Scores craftsmanship and emits its factor evidence.
pub(crate) fn craftsmanship_score(
    metrics: &ProductMetrics,
    now: Timestamp,
) -> (f64, Vec<KpiEvidence>) {
    let material = metrics.material_grade.score();
    let warranty = (metrics.warranty_days / WARRANTY_SATURATION_DAYS).min(1.0);

    let evidence = vec![KpiEvidence {
        factor: "material_grade".to_string(),
        value: material,
        source: "product_specs".to_string(),
        confidence: 0.9,
        timestamp: now,
    }];

    let raw = 0.3 * material
        + 0.2 * metrics.origin_reputation_score
        + 0.2 * warranty
        + 0.2 * metrics.review_aspect_quality
        + 0.1 * metrics.craftsmanship_mention_rate;

    (sigmoid(raw), evidence)
}

// ============================================================================
// SECTION: Sustainability
// ============================================================================

/// Certifications treated as full certification coverage.
const CERTIFICATION_SATURATION: f64 = 3.0;

/// Scores sustainability and emits its factor evidence. The factor mix is
/// unit-scaled, so the result is clamped linearly instead of squashed.
pub(crate) fn sustainability_score(
    metrics: &ProductMetrics,
    now: Timestamp,
) -> (f64, Vec<KpiEvidence>) {
    let certification =
        (metrics.sustainability_certifications.len() as f64 / CERTIFICATION_SATURATION).min(1.0);
    let recycled = metrics.recycled_content_percent / 100.0;
    let carbon = (1.0 - metrics.carbon_footprint_kg / metrics.category_avg_carbon_kg.max(0.1))
        .max(0.0);
    let packaging = if metrics.sustainable_packaging { 1.0 } else { 0.0 };

    let evidence = vec![
        KpiEvidence {
            factor: "recycled_content".to_string(),
            value: recycled,
            source: "product_specs".to_string(),
            confidence: 0.95,
            timestamp: now,
        },
        KpiEvidence {
            factor: "carbon_footprint_relative".to_string(),
            value: carbon,
            source: "lca_analysis".to_string(),
            confidence: 0.8,
            timestamp: now,
        },
    ];

    let raw = 0.3 * certification
        + 0.25 * recycled
        + 0.2 * carbon
        + 0.1 * packaging
        + 0.15 * metrics.supply_chain_transparency;

    (raw.min(1.0), evidence)
}

// ============================================================================
// SECTION: Innovation
// ============================================================================

/// Scores innovation and emits its factor evidence.
pub(crate) fn innovation_score(
    metrics: &ProductMetrics,
    now: Timestamp,
) -> (f64, Vec<KpiEvidence>) {
    let features = (metrics.new_feature_count / 3.0).min(1.0);
    let patents = (metrics.patent_count / 2.0).min(1.0);
    let awards = (metrics.award_count / 2.0).min(1.0);
    let press = (metrics.press_mention_count / 10.0).min(1.0);
    let new_tech = if metrics.uses_cutting_edge_tech { 1.0 } else { 0.0 };
    let first_mover = if metrics.is_first_in_category { 1.0 } else { 0.0 };

    let evidence = vec![KpiEvidence {
        factor: "patent_count".to_string(),
        value: metrics.patent_count,
        source: "patent_database".to_string(),
        confidence: 1.0,
        timestamp: now,
    }];

    let raw = 0.25 * features
        + 0.2 * patents
        + 0.15 * awards
        + 0.1 * press
        + 0.15 * new_tech
        + 0.1 * (metrics.tech_generation - 1.0)
        + 0.05 * first_mover;

    (sigmoid(raw), evidence)
}
