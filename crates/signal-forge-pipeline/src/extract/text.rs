// crates/signal-forge-pipeline/src/extract/text.rs
// ============================================================================
// Module: Text Intent Extraction
// Description: Keyword and classifier-based intent weights from texts.
// Purpose: Derive intent from reviews, Q&A entries, and support tickets.
// Dependencies: signal-forge-core, crate::records
// ============================================================================

//! ## Overview
//! Texts are matched against per-intent keyword lists; items carrying
//! pre-computed classifier probabilities contribute those as well. Each item
//! is weighted by provenance: verified purchases count 1.5x, Q&A entries
//! 1.1x, support tickets 0.8x. The result is divided by the total text
//! weight. Keyword matching is the fallback path; classifier training is
//! out of scope.

// ============================================================================
// SECTION: Imports
// ============================================================================

use signal_forge_core::Intent;

use crate::extract::IntentWeights;
use crate::extract::bump;
use crate::records::TextRecord;
use crate::records::TextSource;

// ============================================================================
// SECTION: Weights
// ============================================================================

/// Base weight of one text item.
const BASE_TEXT_WEIGHT: f64 = 1.0;

/// Multiplier for verified purchases.
const VERIFIED_MULTIPLIER: f64 = 1.5;

/// Multiplier for Q&A entries.
const Q_AND_A_MULTIPLIER: f64 = 1.1;

/// Multiplier for support tickets.
const SUPPORT_TICKET_MULTIPLIER: f64 = 0.8;

/// Per-intent keyword lists used for the fallback classification.
const INTENT_KEYWORDS: [(Intent, &[&str]); 6] = [
    (Intent::Gift, &["gift", "present", "birthday", "christmas", "anniversary"]),
    (Intent::Sport, &["running", "training", "workout", "gym", "athletic"]),
    (Intent::ProfessionalUse, &["work", "professional", "office", "business", "daily"]),
    (Intent::Travel, &["travel", "trip", "vacation", "flight", "luggage"]),
    (Intent::Fashion, &["style", "look", "outfit", "trendy", "fashion"]),
    (Intent::DailyCommute, &["commute", "daily", "everyday", "walking", "comfortable"]),
];

// ============================================================================
// SECTION: Extraction
// ============================================================================

/// Extracts intent weights from texts, normalized by total text weight.
#[must_use]
pub fn extract_from_text(texts: &[TextRecord]) -> IntentWeights {
    let mut weights = IntentWeights::new();

    for item in texts {
        let content = item.text.to_lowercase();
        let item_weight = text_weight(item);

        for (intent, keywords) in INTENT_KEYWORDS {
            let matches = keywords.iter().filter(|keyword| content.contains(**keyword)).count();
            if matches > 0 {
                bump(&mut weights, intent, matches as f64 * item_weight);
            }
        }

        if let Some(probs) = &item.intent_probs {
            for (label, probability) in probs {
                if let Some(intent) = Intent::from_label(label) {
                    bump(&mut weights, intent, probability * item_weight);
                }
            }
        }
    }

    let total_weight: f64 = texts.iter().map(text_weight).sum();
    if total_weight > 0.0 {
        for value in weights.values_mut() {
            *value /= total_weight;
        }
    }
    weights
}

/// Weights one text item by source and verification status.
fn text_weight(item: &TextRecord) -> f64 {
    let mut weight = BASE_TEXT_WEIGHT;
    if item.verified_purchase {
        weight *= VERIFIED_MULTIPLIER;
    }
    match item.source {
        TextSource::SupportTicket => weight *= SUPPORT_TICKET_MULTIPLIER,
        TextSource::QAndA => weight *= Q_AND_A_MULTIPLIER,
        TextSource::Review => {}
    }
    weight
}
