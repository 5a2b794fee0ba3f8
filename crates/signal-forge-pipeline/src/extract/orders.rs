// crates/signal-forge-pipeline/src/extract/orders.rs
// ============================================================================
// Module: Order Intent Extraction
// Description: Gift and bundle intent signals from order context.
// Purpose: Derive intent weights from gift flags, seasonality, and bundles.
// Dependencies: signal-forge-core, crate::records
// ============================================================================

//! ## Overview
//! Orders signal gifting through explicit flags and seasonal timing, and
//! signal activity-specific intent through what was bought together. The
//! result is divided by the order count so frequently ordered products are
//! not overweighted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use signal_forge_core::Intent;
use signal_forge_core::Timestamp;

use crate::extract::IntentWeights;
use crate::extract::bump;
use crate::records::OrderItem;
use crate::records::OrderRecord;

// ============================================================================
// SECTION: Weights
// ============================================================================

/// Weight added for an explicit gift flag or message.
const GIFT_FLAG_WEIGHT: f64 = 1.0;

/// Weight added when the order date falls in a gift-giving season.
const HOLIDAY_SEASON_WEIGHT: f64 = 0.3;

/// Bundle bonus for running shoes bought with running socks.
const RUNNING_BUNDLE_WEIGHT: f64 = 0.8;

/// Sport-side bonus for the running bundle.
const RUNNING_BUNDLE_SPORT_WEIGHT: f64 = 0.5;

/// Bundle bonus for dress shoes bought with a dress shirt.
const DRESS_BUNDLE_WEIGHT: f64 = 0.7;

// ============================================================================
// SECTION: Extraction
// ============================================================================

/// Extracts intent weights from order context, averaged over the orders.
#[must_use]
pub fn extract_from_orders(orders: &[OrderRecord]) -> IntentWeights {
    let mut weights = IntentWeights::new();
    if orders.is_empty() {
        return weights;
    }

    for order in orders {
        if order.gift_wrap || order.gift_message.is_some() {
            bump(&mut weights, Intent::Gift, GIFT_FLAG_WEIGHT);
        }
        if is_holiday_season(order.created_at) {
            bump(&mut weights, Intent::Gift, HOLIDAY_SEASON_WEIGHT);
        }
        analyze_bundle(&order.items, &mut weights);
    }

    let total_orders = orders.len() as f64;
    for value in weights.values_mut() {
        *value /= total_orders;
    }
    weights
}

/// Adds fixed bonuses for known category co-occurrences.
fn analyze_bundle(items: &[OrderItem], weights: &mut IntentWeights) {
    let has = |category: &str| items.iter().any(|item| item.category == category);

    if has("running_shoes") && has("running_socks") {
        bump(weights, Intent::Running, RUNNING_BUNDLE_WEIGHT);
        bump(weights, Intent::Sport, RUNNING_BUNDLE_SPORT_WEIGHT);
    }
    if has("dress_shoes") && has("dress_shirt") {
        bump(weights, Intent::ProfessionalUse, DRESS_BUNDLE_WEIGHT);
    }
}

/// Returns true when the date falls in a typical gift-giving season:
/// Nov 15 - Dec 31, Feb 1 - Feb 14, or May 1 - Jun 20.
fn is_holiday_season(instant: Timestamp) -> bool {
    let month_day = instant.month_day();
    ((11, 15)..=(12, 31)).contains(&month_day)
        || ((2, 1)..=(2, 14)).contains(&month_day)
        || ((5, 1)..=(6, 20)).contains(&month_day)
}
