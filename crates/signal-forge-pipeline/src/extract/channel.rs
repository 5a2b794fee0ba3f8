// crates/signal-forge-pipeline/src/extract/channel.rs
// ============================================================================
// Module: Channel Intent Extraction
// Description: Intent weights from acquisition campaigns and search terms.
// Purpose: Derive intent from how the visitor arrived at the product.
// Dependencies: signal-forge-core, crate::records
// ============================================================================

//! ## Overview
//! Campaign labels carry explicit intent (gift pushes, sport sales,
//! business lines); paid search terms that spell out a taxonomy label carry
//! a weaker signal. The result is divided by the acquisition count.

// ============================================================================
// SECTION: Imports
// ============================================================================

use signal_forge_core::INTENT_TAXONOMY;
use signal_forge_core::Intent;

use crate::extract::IntentWeights;
use crate::extract::bump;
use crate::records::AcquisitionRecord;

// ============================================================================
// SECTION: Weights
// ============================================================================

/// Weight per campaign label match.
const CAMPAIGN_MATCH_WEIGHT: f64 = 1.0;

/// Weight per search-term substring match.
const SEARCH_TERM_WEIGHT: f64 = 0.5;

// ============================================================================
// SECTION: Extraction
// ============================================================================

/// Extracts intent weights from acquisition channels, averaged over the
/// acquisitions.
#[must_use]
pub fn extract_from_channel(acquisitions: &[AcquisitionRecord]) -> IntentWeights {
    let mut weights = IntentWeights::new();
    if acquisitions.is_empty() {
        return weights;
    }

    for acquisition in acquisitions {
        let campaign = acquisition.utm_campaign.to_lowercase();
        let term = acquisition.utm_term.to_lowercase();

        if campaign.contains("gift") || campaign.contains("holiday") {
            bump(&mut weights, Intent::Gift, CAMPAIGN_MATCH_WEIGHT);
        } else if campaign.contains("sport") || campaign.contains("athletic") {
            bump(&mut weights, Intent::Sport, CAMPAIGN_MATCH_WEIGHT);
        } else if campaign.contains("professional") || campaign.contains("business") {
            bump(&mut weights, Intent::ProfessionalUse, CAMPAIGN_MATCH_WEIGHT);
        }

        if !term.is_empty() {
            for intent in INTENT_TAXONOMY {
                let spoken = intent.as_str().replace('_', " ");
                if term.contains(&spoken) {
                    bump(&mut weights, intent, SEARCH_TERM_WEIGHT);
                }
            }
        }
    }

    let total = acquisitions.len() as f64;
    for value in weights.values_mut() {
        *value /= total;
    }
    weights
}
