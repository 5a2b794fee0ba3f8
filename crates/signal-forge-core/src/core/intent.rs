// crates/signal-forge-core/src/core/intent.rs
// ============================================================================
// Module: Signal Forge Intent Taxonomy
// Description: Closed purchase-intent taxonomy and intent signal records.
// Purpose: Provide the stable intent vocabulary shared by extractors and mixer.
// Dependencies: crate::core::time, serde
// ============================================================================

//! ## Overview
//! The intent taxonomy is closed: labels outside the set are dropped at the
//! boundary rather than carried as free-form strings. Intent signals assign
//! probability mass over the taxonomy; a bundle for one product sums to one
//! after smoothing and is sorted by share descending.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Intent Taxonomy
// ============================================================================

/// Canonical purchase-intent taxonomy.
///
/// # Invariants
/// - Variants are stable for serialization and evidence strings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Bought as a present for someone else.
    Gift,
    /// Everyday commute usage.
    DailyCommute,
    /// Hobby or recreational usage.
    Hobby,
    /// Professional or business usage.
    ProfessionalUse,
    /// Travel and trips.
    Travel,
    /// Style-driven purchase.
    Fashion,
    /// General sports usage.
    Sport,
    /// Basketball-specific usage.
    Basketball,
    /// Running-specific usage.
    Running,
    /// Outdoor activities.
    Outdoor,
    /// Luxury positioning.
    Luxury,
    /// Price-conscious purchase.
    Value,
}

/// Every member of the closed taxonomy, in canonical order.
pub const INTENT_TAXONOMY: [Intent; 12] = [
    Intent::Gift,
    Intent::DailyCommute,
    Intent::Hobby,
    Intent::ProfessionalUse,
    Intent::Travel,
    Intent::Fashion,
    Intent::Sport,
    Intent::Basketball,
    Intent::Running,
    Intent::Outdoor,
    Intent::Luxury,
    Intent::Value,
];

impl Intent {
    /// Returns the stable snake_case label of the intent.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gift => "gift",
            Self::DailyCommute => "daily_commute",
            Self::Hobby => "hobby",
            Self::ProfessionalUse => "professional_use",
            Self::Travel => "travel",
            Self::Fashion => "fashion",
            Self::Sport => "sport",
            Self::Basketball => "basketball",
            Self::Running => "running",
            Self::Outdoor => "outdoor",
            Self::Luxury => "luxury",
            Self::Value => "value",
        }
    }

    /// Resolves a label to a taxonomy member; labels outside the set yield
    /// `None` and are dropped by callers.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        INTENT_TAXONOMY.iter().copied().find(|intent| intent.as_str() == label)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Intent Signals
// ============================================================================

/// Probability mass assigned to one intent for one product.
///
/// # Invariants
/// - `share` and `confidence` are within `[0, 1]`.
/// - Across one product's bundle, shares sum to one within `1e-6`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentSignal {
    /// Taxonomy member the mass is assigned to.
    pub intent: Intent,
    /// Probability mass after smoothing and normalization.
    pub share: f64,
    /// Confidence derived from source data volume.
    pub confidence: f64,
    /// Mixing method tag describing the weights used.
    pub method: String,
    /// Per-source contribution strings of the form `source:value`.
    pub evidence: Vec<String>,
    /// Instant the signal was computed.
    pub last_updated: Timestamp,
}
