// crates/signal-forge-verify/src/sources.rs
// ============================================================================
// Module: Verification Source Seams
// Description: Capability traits for review and domain-history lookups.
// Purpose: Keep the verifier transport-agnostic behind thin source traits.
// Dependencies: signal-forge-core, crate::review, thiserror
// ============================================================================

//! ## Overview
//! The verifier reads external data through these seams. HTTP-backed
//! implementations are thin adapters owned by the host; tests plug in
//! scripted sources. Every lookup failure is isolated to its source.

// ============================================================================
// SECTION: Imports
// ============================================================================

use signal_forge_core::Timestamp;
use thiserror::Error;

use crate::review::ReviewStats;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by verification sources.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Source has no such lookup path; callers skip it silently.
    #[error("lookup not supported by this source")]
    Unsupported,
    /// Source could not be reached or answered unusably.
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

// ============================================================================
// SECTION: Review Source
// ============================================================================

/// Review platform lookup seam.
pub trait ReviewSource: Send + Sync {
    /// Fetches review statistics through the platform's official API.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the API path is unavailable.
    fn fetch_api(&self, business_id: &str) -> Result<ReviewStats, SourceError>;

    /// Captures a snapshot of the platform's public statistics.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when no snapshot can be captured.
    fn fetch_snapshot(&self, business_id: &str) -> Result<ReviewStats, SourceError>;
}

// ============================================================================
// SECTION: Domain History Source
// ============================================================================

/// Domain history lookup seam (WHOIS, CT logs, DNS history, web archive).
pub trait DomainHistorySource: Send + Sync {
    /// Returns the stable source name recorded in attestations.
    fn name(&self) -> &'static str;

    /// Returns the earliest sighting of the domain, if the source knows it.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the lookup fails; failures are isolated
    /// per source.
    fn earliest_seen(&self, domain: &str) -> Result<Option<Timestamp>, SourceError>;
}
