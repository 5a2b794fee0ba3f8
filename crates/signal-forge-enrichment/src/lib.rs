// crates/signal-forge-enrichment/src/lib.rs
// ============================================================================
// Module: Signal Forge Enrichment Library
// Description: Multi-provider evidence enrichment with caching and issuance.
// Purpose: Expose adapters, the evidence cache, and the orchestrator.
// Dependencies: signal-forge-core, reqwest, tokio
// ============================================================================

//! ## Overview
//! The enrichment crate fans out to third-party trust sources, caches the
//! resulting evidence with per-provider TTLs, shortens TTLs when anomaly
//! detection flags a payload, and issues verifiable credentials over cached
//! evidence. One failing provider never blocks the others; the outcome
//! records which sources succeeded, which were skipped, and what was
//! flagged.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod adapters;
pub mod anomaly;
pub mod audit;
pub mod cache;
pub mod credential;
pub mod orchestrator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use adapters::ReviewPlatformAdapter;
pub use adapters::ReviewPlatformConfig;
pub use adapters::SellerRatingsAdapter;
pub use adapters::SellerRatingsConfig;
pub use adapters::ShopCertificationAdapter;
pub use adapters::ShopCertificationConfig;
pub use adapters::TechStackAdapter;
pub use adapters::TechStackConfig;
pub use anomaly::detect_metric_anomaly;
pub use audit::AuditSink;
pub use audit::EnrichmentEvent;
pub use audit::JsonLinesAuditSink;
pub use audit::MemoryAuditSink;
pub use audit::NullAuditSink;
pub use audit::ProviderOutcome;
pub use cache::InMemoryEvidenceCache;
pub use credential::CredentialError;
pub use credential::issue_credential;
pub use orchestrator::EnrichmentOrchestrator;
pub use orchestrator::EnrichmentOutcome;
pub use orchestrator::OrchestratorConfig;
pub use orchestrator::ProviderFailure;
