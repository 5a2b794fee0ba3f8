// crates/signal-forge-pipeline/src/lib.rs
// ============================================================================
// Module: Signal Forge Pipeline Library
// Description: Intent extraction, mixing, and soft-KPI calculation.
// Purpose: Expose the CPU-bound signal pipeline over typed shop records.
// Dependencies: signal-forge-core, serde
// ============================================================================

//! ## Overview
//! The pipeline crate turns raw shop records into signals: five per-source
//! extractors produce unnormalized intent weights, the mixer combines them
//! into a smoothed probability distribution over the closed taxonomy, and
//! the KPI calculator derives the eight soft-signal scores with factor
//! evidence. Everything here is synchronous and deterministic for identical
//! inputs.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod extract;
pub mod kpi;
pub mod mixer;
pub mod records;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use extract::IntentWeights;
pub use extract::extract_from_behavior;
pub use extract::extract_from_channel;
pub use extract::extract_from_orders;
pub use extract::extract_from_returns;
pub use extract::extract_from_text;
pub use kpi::KpiCalculator;
pub use kpi::MaterialGrade;
pub use kpi::ProductCategory;
pub use kpi::ProductMetrics;
pub use mixer::IntentMixer;
pub use mixer::MixerWeights;
pub use records::AcquisitionRecord;
pub use records::BehaviorEvent;
pub use records::OrderItem;
pub use records::OrderRecord;
pub use records::ProductActivity;
pub use records::ReturnReason;
pub use records::ReturnRecord;
pub use records::TextRecord;
pub use records::TextSource;
