// crates/signal-forge-pipeline/src/extract/behavior.rs
// ============================================================================
// Module: Behavior Intent Extraction
// Description: Intent weights from on-site tool usage and guide reading.
// Purpose: Derive intent from which shopping tools a visitor reaches for.
// Dependencies: signal-forge-core, crate::records
// ============================================================================

//! ## Overview
//! Specific tool usage reveals intent: size guides point at fit-sensitive
//! categories, configurators at professional or hobby usage, comparisons at
//! value seeking, and guide topics at concrete sports. The final weights
//! are divided by the square root of the event count, which dampens
//! high-activity outliers without erasing them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use signal_forge_core::Intent;

use crate::extract::IntentWeights;
use crate::extract::bump;
use crate::records::BehaviorEvent;

// ============================================================================
// SECTION: Weights
// ============================================================================

/// Fashion weight for viewing the size guide.
const SIZE_GUIDE_FASHION_WEIGHT: f64 = 0.3;

/// Sport weight for viewing the size guide.
const SIZE_GUIDE_SPORT_WEIGHT: f64 = 0.2;

/// Fashion weight for opening the 3D view.
const VIEW_3D_FASHION_WEIGHT: f64 = 0.2;

/// Luxury weight for opening the 3D view.
const VIEW_3D_LUXURY_WEIGHT: f64 = 0.1;

/// Professional-use weight for using the configurator.
const CONFIGURATOR_PROFESSIONAL_WEIGHT: f64 = 0.3;

/// Hobby weight for using the configurator.
const CONFIGURATOR_HOBBY_WEIGHT: f64 = 0.2;

/// Value weight for comparing products.
const COMPARE_VALUE_WEIGHT: f64 = 0.2;

/// Weight for reading a guide matching a concrete sport.
const GUIDE_TOPIC_WEIGHT: f64 = 0.5;

// ============================================================================
// SECTION: Extraction
// ============================================================================

/// Extracts intent weights from behavior events, dampened by activity.
#[must_use]
pub fn extract_from_behavior(events: &[BehaviorEvent]) -> IntentWeights {
    let mut weights = IntentWeights::new();

    for event in events {
        match event.event_type.as_str() {
            "view_size_guide" => {
                bump(&mut weights, Intent::Fashion, SIZE_GUIDE_FASHION_WEIGHT);
                bump(&mut weights, Intent::Sport, SIZE_GUIDE_SPORT_WEIGHT);
            }
            "view_3d" => {
                bump(&mut weights, Intent::Fashion, VIEW_3D_FASHION_WEIGHT);
                bump(&mut weights, Intent::Luxury, VIEW_3D_LUXURY_WEIGHT);
            }
            "use_configurator" => {
                bump(&mut weights, Intent::ProfessionalUse, CONFIGURATOR_PROFESSIONAL_WEIGHT);
                bump(&mut weights, Intent::Hobby, CONFIGURATOR_HOBBY_WEIGHT);
            }
            "compare_products" => {
                bump(&mut weights, Intent::Value, COMPARE_VALUE_WEIGHT);
            }
            "read_guide" => {
                if let Some(guide) = &event.guide_type {
                    let guide = guide.to_lowercase();
                    if guide.contains("running") {
                        bump(&mut weights, Intent::Running, GUIDE_TOPIC_WEIGHT);
                    } else if guide.contains("basketball") {
                        bump(&mut weights, Intent::Basketball, GUIDE_TOPIC_WEIGHT);
                    }
                }
            }
            _ => {}
        }
    }

    let total_events = events.len() as f64;
    if total_events > 0.0 {
        let damper = total_events.sqrt();
        for value in weights.values_mut() {
            *value /= damper;
        }
    }
    weights
}
