// crates/signal-forge-pipeline/src/records.rs
// ============================================================================
// Module: Pipeline Input Records
// Description: Typed per-source records consumed by the intent extractors.
// Purpose: Provide the stable input contracts for orders, returns, events,
//          texts, and acquisition channels.
// Dependencies: signal-forge-core, serde
// ============================================================================

//! ## Overview
//! Extractor inputs arrive as per-source record lists. Unknown enum labels
//! and missing optional fields deserialize into safe defaults so a partial
//! export never fails the pipeline.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use signal_forge_core::Timestamp;

// ============================================================================
// SECTION: Orders
// ============================================================================

/// One line item inside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Category label of the purchased product.
    #[serde(default)]
    pub category: String,
}

/// One order touching the product under analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order creation instant.
    pub created_at: Timestamp,
    /// Gift wrap was requested.
    #[serde(default)]
    pub gift_wrap: bool,
    /// Gift message attached to the order.
    #[serde(default)]
    pub gift_message: Option<String>,
    /// Items bought together in the order.
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

// ============================================================================
// SECTION: Returns
// ============================================================================

/// Stated reason of a product return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnReason {
    /// Product did not fit.
    SizeIssue,
    /// Product arrived damaged.
    Damaged,
    /// Color did not match expectations.
    ColorMismatch,
    /// Quality fell short of expectations.
    QualityExpectation,
    /// Customer changed their mind.
    ChangedMind,
    /// Shipping took too long.
    ShippingDelay,
}

/// One return of the product under analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnRecord {
    /// Stated return reason.
    pub reason: ReturnReason,
    /// Return creation instant.
    pub created_at: Timestamp,
}

// ============================================================================
// SECTION: Behavior Events
// ============================================================================

/// One on-site behavior event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorEvent {
    /// Event type label (`view_size_guide`, `use_configurator`, ...).
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event instant.
    pub timestamp: Timestamp,
    /// Guide label for `read_guide` events.
    #[serde(default)]
    pub guide_type: Option<String>,
    /// Session the event occurred in.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Product the event targeted.
    #[serde(default)]
    pub product_id: Option<String>,
}

// ============================================================================
// SECTION: Texts
// ============================================================================

/// Channel a text item was captured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Product review.
    #[default]
    Review,
    /// Customer support ticket.
    SupportTicket,
    /// Question-and-answer entry.
    QAndA,
}

/// One customer text mentioning the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRecord {
    /// Raw text content.
    pub text: String,
    /// Author verifiably purchased the product.
    #[serde(default)]
    pub verified_purchase: bool,
    /// Capture channel.
    #[serde(default)]
    pub source: TextSource,
    /// Pre-computed per-intent probabilities from an upstream classifier.
    #[serde(default)]
    pub intent_probs: Option<BTreeMap<String, f64>>,
}

// ============================================================================
// SECTION: Acquisition Channels
// ============================================================================

/// One acquisition session that led to a purchase.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AcquisitionRecord {
    /// Campaign label.
    #[serde(default)]
    pub utm_campaign: String,
    /// Traffic source label.
    #[serde(default)]
    pub utm_source: String,
    /// Paid search term.
    #[serde(default)]
    pub utm_term: String,
    /// Landing page path.
    #[serde(default)]
    pub landing_page: String,
}

// ============================================================================
// SECTION: Activity Bundle
// ============================================================================

/// Every per-source record list for one product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductActivity {
    /// Orders touching the product.
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    /// Returns of the product.
    #[serde(default)]
    pub returns: Vec<ReturnRecord>,
    /// On-site behavior events.
    #[serde(default)]
    pub events: Vec<BehaviorEvent>,
    /// Customer texts.
    #[serde(default)]
    pub texts: Vec<TextRecord>,
    /// Acquisition sessions.
    #[serde(default)]
    pub acquisitions: Vec<AcquisitionRecord>,
}
