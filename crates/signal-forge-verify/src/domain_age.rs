// crates/signal-forge-verify/src/domain_age.rs
// ============================================================================
// Module: Domain Age Attestation
// Description: Multi-source domain age composition and scoring.
// Purpose: Estimate how long a shop domain has existed, with corroboration.
// Dependencies: signal-forge-core, crate::sources
// ============================================================================

//! ## Overview
//! Domain age is composed from WHOIS, certificate-transparency, DNS
//! history, and web-archive sources queried in registration order. Each
//! lookup failure is isolated; the earliest successful date wins. The age
//! score saturates toward one year and caps at 0.6 so domain age alone can
//! never dominate a trust decision. Confidence counts corroborating
//! sources, saturating at two.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use signal_forge_core::Clock;
use signal_forge_core::DomainAgeResult;

use crate::sources::DomainHistorySource;

// ============================================================================
// SECTION: Scoring
// ============================================================================

/// Upper bound of the age score.
pub const MAX_AGE_SCORE: f64 = 0.6;

/// Days over which the age score saturates.
const AGE_SATURATION_DAYS: f64 = 365.0;

/// Sources at which confidence reaches one.
const CONFIDENCE_SATURATION_SOURCES: f64 = 2.0;

/// Computes the capped, saturating age score for an age in days.
#[must_use]
pub fn domain_age_score(age_days: f64) -> f64 {
    (1.0 - (-age_days.max(0.0) / AGE_SATURATION_DAYS).exp()).min(MAX_AGE_SCORE)
}

// ============================================================================
// SECTION: Estimator
// ============================================================================

/// Multi-source domain age estimator.
pub struct DomainAgeEstimator {
    /// History sources in query order.
    sources: Vec<Arc<dyn DomainHistorySource>>,
    /// Clock providing the reference instant.
    clock: Arc<dyn Clock>,
}

impl DomainAgeEstimator {
    /// Creates an estimator with no registered sources.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            sources: Vec::new(),
            clock,
        }
    }

    /// Registers a history source; sources are queried in registration
    /// order.
    pub fn register_source(&mut self, source: Arc<dyn DomainHistorySource>) {
        self.sources.push(source);
    }

    /// Estimates the age of a domain across every registered source.
    #[must_use]
    pub fn estimate(&self, domain: &str) -> DomainAgeResult {
        let now = self.clock.now();
        let mut earliest = None;
        let mut corroborating = Vec::new();

        for source in &self.sources {
            match source.earliest_seen(domain) {
                Ok(Some(date)) => {
                    corroborating.push(source.name().to_string());
                    if earliest.is_none_or(|current| date < current) {
                        earliest = Some(date);
                    }
                }
                Ok(None) | Err(_) => {}
            }
        }

        match earliest {
            Some(date) => {
                let age_days = now.whole_days_since(date).max(0);
                DomainAgeResult {
                    domain: domain.to_string(),
                    earliest_date: Some(date),
                    age_days,
                    age_score: domain_age_score(age_days as f64),
                    confidence: (corroborating.len() as f64 / CONFIDENCE_SATURATION_SOURCES)
                        .min(1.0),
                    sources: corroborating,
                }
            }
            None => DomainAgeResult {
                domain: domain.to_string(),
                earliest_date: None,
                age_days: 0,
                age_score: 0.0,
                confidence: 0.0,
                sources: corroborating,
            },
        }
    }
}
