// crates/signal-forge-pipeline/src/extract/returns.rs
// ============================================================================
// Module: Return Intent Extraction
// Description: Negative-signal mapping from return reasons to intents.
// Purpose: Derive weak intent hints from why customers send products back.
// Dependencies: signal-forge-core, crate::records
// ============================================================================

//! ## Overview
//! Returns are a negative signal mapped to the intents they hint at: size
//! issues suggest fit-sensitive fashion or sport usage, quality complaints
//! suggest professional expectations, and changed minds correlate with
//! impulse fashion buys. The mixer admits these weights at half cart
//! weight; the map is intentionally not normalized.

// ============================================================================
// SECTION: Imports
// ============================================================================

use signal_forge_core::Intent;

use crate::extract::IntentWeights;
use crate::extract::bump;
use crate::records::ReturnReason;
use crate::records::ReturnRecord;

// ============================================================================
// SECTION: Weights
// ============================================================================

/// Fashion and sport hint per size-issue return.
const SIZE_ISSUE_WEIGHT: f64 = 0.1;

/// Professional-use hint per quality-expectation return.
const QUALITY_EXPECTATION_WEIGHT: f64 = 0.2;

/// Fashion hint per changed-mind return.
const CHANGED_MIND_WEIGHT: f64 = 0.15;

// ============================================================================
// SECTION: Extraction
// ============================================================================

/// Extracts unnormalized intent hints from return reasons.
#[must_use]
pub fn extract_from_returns(returns: &[ReturnRecord]) -> IntentWeights {
    let mut weights = IntentWeights::new();

    for record in returns {
        match record.reason {
            ReturnReason::SizeIssue => {
                bump(&mut weights, Intent::Fashion, SIZE_ISSUE_WEIGHT);
                bump(&mut weights, Intent::Sport, SIZE_ISSUE_WEIGHT);
            }
            ReturnReason::QualityExpectation => {
                bump(&mut weights, Intent::ProfessionalUse, QUALITY_EXPECTATION_WEIGHT);
            }
            ReturnReason::ChangedMind => {
                bump(&mut weights, Intent::Fashion, CHANGED_MIND_WEIGHT);
            }
            ReturnReason::Damaged | ReturnReason::ColorMismatch | ReturnReason::ShippingDelay => {}
        }
    }

    weights
}
