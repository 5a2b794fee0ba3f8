// crates/signal-forge-pipeline/src/kpi/metrics.rs
// ============================================================================
// Module: KPI Input Metrics
// Description: Per-product metric catalog consumed by the KPI calculator.
// Purpose: Provide typed inputs with documented defaults for missing fields.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The metric catalog covers every factor the calculator reads. Missing
//! fields deserialize to the documented defaults (zero for event counts and
//! rates, category baselines for comparative factors), so a sparse export
//! still yields a deterministic bundle.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Category
// ============================================================================

/// Category dispatch for the performance signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// General footwear.
    Footwear,
    /// Footwear positioned for running; stack height counts toward
    /// performance.
    RunningFootwear,
    /// Consumer electronics.
    Electronics,
    /// Anything without category-specific lab metrics.
    #[default]
    Generic,
}

impl ProductCategory {
    /// Returns true for the footwear family.
    #[must_use]
    pub const fn is_footwear(self) -> bool {
        matches!(self, Self::Footwear | Self::RunningFootwear)
    }
}

// ============================================================================
// SECTION: Material Grade
// ============================================================================

/// Material quality grade from the product specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialGrade {
    /// Premium materials.
    Premium,
    /// High-grade materials.
    High,
    /// Standard materials.
    #[default]
    Standard,
    /// Basic materials.
    Basic,
}

impl MaterialGrade {
    /// Returns the unit-scaled quality score of the grade.
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Premium => 0.9,
            Self::High => 0.7,
            Self::Standard => 0.5,
            Self::Basic => 0.3,
        }
    }
}

// ============================================================================
// SECTION: Metric Catalog
// ============================================================================

/// Per-product metric catalog with documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductMetrics {
    // --- fit ---
    /// Total returns in the analysis window.
    pub returns_total: f64,
    /// Returns citing a size issue.
    pub returns_size: f64,
    /// Size-issue returns exchanged for another size.
    pub exchanges_size: f64,
    /// Purchases preceded by size-advisor usage.
    pub purchases_with_advisor: f64,
    /// Total purchases in the analysis window.
    pub purchases_total: f64,
    /// Reviews with a positive fit aspect.
    pub reviews_fit_positive: f64,
    /// Reviews mentioning fit at all.
    pub reviews_with_fit: f64,

    // --- reliability ---
    /// Return-merchandise authorizations.
    pub rma_count: f64,
    /// Warranty claims of any type.
    pub claim_count: f64,
    /// Units sold in the analysis window.
    pub units_sold: f64,
    /// Average days from purchase to first claim.
    pub avg_days_to_claim: f64,
    /// Warranty claims counted separately for the penalty term.
    pub warranty_claims: f64,
    /// Average durability aspect across reviews, unit-scaled.
    pub reviews_durability_avg: f64,
    /// Category baseline for RMA per thousand units.
    pub category_rma_avg: f64,

    // --- performance ---
    /// Measured energy return, percent.
    pub energy_return_percent: f64,
    /// Product weight in grams.
    pub weight_grams: f64,
    /// Cushioning index on a ten-point scale.
    pub cushioning_index: f64,
    /// Stack height in millimeters.
    pub stack_height_mm: f64,
    /// Benchmark percentile within the category.
    pub benchmark_percentile: f64,
    /// Efficiency rating on a five-point scale.
    pub efficiency_rating: f64,
    /// Measured latency in milliseconds.
    pub latency_ms: f64,
    /// Average performance aspect across reviews, unit-scaled.
    pub reviews_performance_avg: f64,
    /// Category baseline for the review performance aspect.
    pub category_performance_avg: f64,

    // --- owner satisfaction ---
    /// Average rating across all reviews, on the 1-5 scale.
    pub avg_rating: f64,
    /// Average rating across verified reviews, when measured separately.
    pub avg_rating_verified: Option<f64>,
    /// Verified review count.
    pub review_count_verified: f64,
    /// Total review count.
    pub review_count_total: f64,
    /// Product-level CSAT score, unit-scaled.
    pub csat_product: f64,
    /// CSAT survey responses.
    pub csat_responses: f64,
    /// Average sentiment over the last 90 days, unit-scaled.
    pub sentiment_90d: f64,
    /// Average sentiment over the 90 days before that, unit-scaled.
    pub sentiment_prev_90d: f64,
    /// Share of customers purchasing the product again.
    pub repeat_purchase_rate: f64,

    // --- uniqueness ---
    /// Features rare within the category.
    pub rare_feature_count: f64,
    /// Total catalogued features.
    pub total_feature_count: f64,
    /// Product is a limited edition.
    pub is_limited_edition: bool,
    /// Stock scarcity score, unit-scaled.
    pub stock_scarcity_score: f64,
    /// Price percentile within the category.
    pub price_percentile_category: f64,

    // --- craftsmanship ---
    /// Material quality grade.
    pub material_grade: MaterialGrade,
    /// Manufacturing origin reputation, unit-scaled.
    pub origin_reputation_score: f64,
    /// Warranty length in days.
    pub warranty_days: f64,
    /// Average quality aspect across reviews, unit-scaled.
    pub review_aspect_quality: f64,
    /// Share of reviews mentioning craftsmanship.
    pub craftsmanship_mention_rate: f64,

    // --- sustainability ---
    /// Sustainability certifications held.
    pub sustainability_certifications: Vec<String>,
    /// Recycled material content, percent.
    pub recycled_content_percent: f64,
    /// Carbon footprint in kilograms.
    pub carbon_footprint_kg: f64,
    /// Category average carbon footprint in kilograms.
    pub category_avg_carbon_kg: f64,
    /// Packaging is certified sustainable.
    pub sustainable_packaging: bool,
    /// Supply chain transparency, unit-scaled.
    pub supply_chain_transparency: f64,

    // --- innovation ---
    /// Features new to the market.
    pub new_feature_count: f64,
    /// Patents covering the product.
    pub patent_count: f64,
    /// Industry awards received.
    pub award_count: f64,
    /// Press mentions counted.
    pub press_mention_count: f64,
    /// Product uses cutting-edge technology.
    pub uses_cutting_edge_tech: bool,
    /// Technology generation (1 current, 2 next-gen).
    pub tech_generation: f64,
    /// Product was first in its category.
    pub is_first_in_category: bool,
}

impl Default for ProductMetrics {
    fn default() -> Self {
        Self {
            returns_total: 0.0,
            returns_size: 0.0,
            exchanges_size: 0.0,
            purchases_with_advisor: 0.0,
            purchases_total: 0.0,
            reviews_fit_positive: 0.0,
            reviews_with_fit: 0.0,
            rma_count: 0.0,
            claim_count: 0.0,
            units_sold: 1000.0,
            avg_days_to_claim: 365.0,
            warranty_claims: 0.0,
            reviews_durability_avg: 0.5,
            category_rma_avg: 5.0,
            energy_return_percent: 50.0,
            weight_grams: 300.0,
            cushioning_index: 5.0,
            stack_height_mm: 25.0,
            benchmark_percentile: 50.0,
            efficiency_rating: 3.0,
            latency_ms: 100.0,
            reviews_performance_avg: 0.5,
            category_performance_avg: 0.5,
            avg_rating: 3.0,
            avg_rating_verified: None,
            review_count_verified: 0.0,
            review_count_total: 0.0,
            csat_product: 0.7,
            csat_responses: 0.0,
            sentiment_90d: 0.5,
            sentiment_prev_90d: 0.5,
            repeat_purchase_rate: 0.1,
            rare_feature_count: 0.0,
            total_feature_count: 10.0,
            is_limited_edition: false,
            stock_scarcity_score: 0.0,
            price_percentile_category: 50.0,
            material_grade: MaterialGrade::Standard,
            origin_reputation_score: 0.5,
            warranty_days: 90.0,
            review_aspect_quality: 0.5,
            craftsmanship_mention_rate: 0.0,
            sustainability_certifications: Vec::new(),
            recycled_content_percent: 0.0,
            carbon_footprint_kg: 10.0,
            category_avg_carbon_kg: 10.0,
            sustainable_packaging: false,
            supply_chain_transparency: 0.0,
            new_feature_count: 0.0,
            patent_count: 0.0,
            award_count: 0.0,
            press_mention_count: 0.0,
            uses_cutting_edge_tech: false,
            tech_generation: 1.0,
            is_first_in_category: false,
        }
    }
}
