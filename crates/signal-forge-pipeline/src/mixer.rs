// crates/signal-forge-pipeline/src/mixer.rs
// ============================================================================
// Module: Intent Mixer
// Description: Weighted mixing, decay, and Dirichlet smoothing of intents.
// Purpose: Turn per-source weights into a smoothed probability distribution.
// Dependencies: signal-forge-core, crate::{extract, records}
// ============================================================================

//! ## Overview
//! The mixer combines the five extractor outputs under configurable source
//! weights, applies exponential time decay over the analysis window, and
//! regularizes the result with Dirichlet smoothing over the full taxonomy
//! so sparse data never produces degenerate distributions. Returns enter at
//! half cart weight. The emitted bundle sums to one within `1e-6` and is
//! sorted by share descending.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use signal_forge_core::INTENT_TAXONOMY;
use signal_forge_core::Intent;
use signal_forge_core::IntentSignal;
use signal_forge_core::Timestamp;

use crate::extract::IntentWeights;
use crate::extract::extract_from_behavior;
use crate::extract::extract_from_channel;
use crate::extract::extract_from_orders;
use crate::extract::extract_from_returns;
use crate::extract::extract_from_text;
use crate::records::ProductActivity;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Multiplier admitting returns below full cart weight.
const RETURNS_CART_FACTOR: f64 = 0.5;

/// Scale from mixed weights to Dirichlet pseudo-counts.
const PSEUDO_COUNT_SCALE: f64 = 100.0;

/// Record count at which one source reaches full confidence.
const CONFIDENCE_SATURATION: f64 = 100.0;

/// Source mixing weights.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct MixerWeights {
    /// Weight of the text extractor.
    pub text: f64,
    /// Weight of the behavior extractor.
    pub behavior: f64,
    /// Weight of the cart extractors (orders, and returns at half).
    pub cart: f64,
    /// Weight of the channel extractor.
    pub channel: f64,
}

impl Default for MixerWeights {
    fn default() -> Self {
        Self {
            text: 0.40,
            behavior: 0.25,
            cart: 0.25,
            channel: 0.10,
        }
    }
}

// ============================================================================
// SECTION: Mixer
// ============================================================================

/// Multi-source intent mixer with decay and smoothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntentMixer {
    /// Source mixing weights.
    weights: MixerWeights,
    /// Half-life of the exponential time decay, in days.
    half_life_days: f64,
    /// Dirichlet concentration parameter.
    dirichlet_alpha: f64,
}

impl Default for IntentMixer {
    fn default() -> Self {
        Self::new(MixerWeights::default())
    }
}

impl IntentMixer {
    /// Creates a mixer with the given source weights and default decay and
    /// smoothing parameters.
    #[must_use]
    pub const fn new(weights: MixerWeights) -> Self {
        Self {
            weights,
            half_life_days: 90.0,
            dirichlet_alpha: 0.5,
        }
    }

    /// Computes the smoothed intent signal bundle for one product.
    ///
    /// `since_days` is the age of the analysis window and drives the time
    /// decay; `now` stamps the emitted signals.
    #[must_use]
    pub fn compute(
        &self,
        activity: &ProductActivity,
        since_days: f64,
        now: Timestamp,
    ) -> Vec<IntentSignal> {
        let order_weights = extract_from_orders(&activity.orders);
        let return_weights = extract_from_returns(&activity.returns);
        let behavior_weights = extract_from_behavior(&activity.events);
        let text_weights = extract_from_text(&activity.texts);
        let channel_weights = extract_from_channel(&activity.acquisitions);

        let mut observed: BTreeSet<Intent> = BTreeSet::new();
        observed.extend(order_weights.keys());
        observed.extend(return_weights.keys());
        observed.extend(behavior_weights.keys());
        observed.extend(text_weights.keys());
        observed.extend(channel_weights.keys());

        let decay = (-since_days / self.half_life_days).exp();
        let mut mixed = IntentWeights::new();
        for intent in observed {
            let value = self.weights.cart * weight_of(&order_weights, intent)
                + self.weights.cart * RETURNS_CART_FACTOR * weight_of(&return_weights, intent)
                + self.weights.behavior * weight_of(&behavior_weights, intent)
                + self.weights.text * weight_of(&text_weights, intent)
                + self.weights.channel * weight_of(&channel_weights, intent);
            mixed.insert(intent, value * decay);
        }

        let shares = self.dirichlet_smooth(&mixed);
        let confidence = compute_confidence(activity);
        let method = format!(
            "mixed_weights:text={:.2},behavior={:.2},cart={:.2},channel={:.2}",
            self.weights.text, self.weights.behavior, self.weights.cart, self.weights.channel
        );

        let mut signals: Vec<IntentSignal> = shares
            .into_iter()
            .map(|(intent, share)| {
                let mut evidence = Vec::new();
                push_evidence(&mut evidence, "orders", &order_weights, intent);
                push_evidence(&mut evidence, "returns", &return_weights, intent);
                push_evidence(&mut evidence, "behavior", &behavior_weights, intent);
                push_evidence(&mut evidence, "text", &text_weights, intent);
                push_evidence(&mut evidence, "channel", &channel_weights, intent);
                IntentSignal {
                    intent,
                    share,
                    confidence,
                    method: method.clone(),
                    evidence,
                    last_updated: now,
                }
            })
            .collect();
        signals.sort_by(|a, b| b.share.total_cmp(&a.share));
        signals
    }

    /// Applies Dirichlet smoothing over the full taxonomy and renormalizes
    /// the shares to sum to one.
    fn dirichlet_smooth(&self, mixed: &IntentWeights) -> Vec<(Intent, f64)> {
        let alpha = self.dirichlet_alpha;
        let total_counts: f64 = mixed.values().map(|value| value * PSEUDO_COUNT_SCALE).sum();
        let denominator = total_counts + INTENT_TAXONOMY.len() as f64 * alpha;

        let mut shares: Vec<(Intent, f64)> = INTENT_TAXONOMY
            .iter()
            .map(|intent| {
                let count = mixed.get(intent).map_or(0.0, |value| value * PSEUDO_COUNT_SCALE);
                (*intent, (count + alpha) / denominator)
            })
            .collect();

        let total_share: f64 = shares.iter().map(|(_, share)| share).sum();
        if total_share > 0.0 {
            for (_, share) in &mut shares {
                *share /= total_share;
            }
        }
        shares
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads one intent weight, defaulting to zero.
fn weight_of(weights: &IntentWeights, intent: Intent) -> f64 {
    weights.get(&intent).copied().unwrap_or(0.0)
}

/// Appends a `source:value` evidence string when the source contributed.
fn push_evidence(evidence: &mut Vec<String>, source: &str, weights: &IntentWeights, intent: Intent) {
    let value = weight_of(weights, intent);
    if value > 0.0 {
        evidence.push(format!("{source}:{value:.2}"));
    }
}

/// Computes bundle confidence from per-source record counts with
/// diminishing returns. Weights: orders 0.3, events 0.2, texts 0.3,
/// returns 0.1, acquisitions 0.1.
fn compute_confidence(activity: &ProductActivity) -> f64 {
    let sources = [
        (activity.orders.len(), 0.3),
        (activity.events.len(), 0.2),
        (activity.texts.len(), 0.3),
        (activity.returns.len(), 0.1),
        (activity.acquisitions.len(), 0.1),
    ];
    let mut confidence = 0.0;
    for (count, weight) in sources {
        if count > 0 {
            let saturation = ((count as f64 + 1.0).ln() / CONFIDENCE_SATURATION.ln()).min(1.0);
            confidence += weight * saturation;
        }
    }
    confidence.min(1.0)
}
