// crates/signal-forge-enrichment/src/anomaly.rs
// ============================================================================
// Module: Provider Metric Anomaly Detection
// Description: Jump detection on provider payload metrics across refreshes.
// Purpose: Flag suspicious metric movement so the TTL can be shortened.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! A refreshed payload is compared against the most recent prior payload in
//! the caller-supplied window (the orchestrator passes the expiring cached
//! envelope plus its retired history). A rating that jumps by more than 1.5
//! stars or a review count that grows more than tenfold marks the payload
//! as anomalous; the orchestrator then stores it with a one hour TTL.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;

// ============================================================================
// SECTION: Thresholds
// ============================================================================

/// Absolute rating movement that counts as a jump.
const RATING_JUMP_THRESHOLD: f64 = 1.5;

/// Review-count growth factor that counts as an explosion.
const COUNT_GROWTH_FACTOR: f64 = 10.0;

// ============================================================================
// SECTION: Detection
// ============================================================================

/// Reads a numeric metric from a payload map.
fn metric(data: &Map<String, Value>, key: &str) -> Option<f64> {
    data.get(key).and_then(Value::as_f64)
}

/// Returns true when the refreshed payload moved suspiciously against the
/// latest historical payload. An empty history never flags.
#[must_use]
pub fn detect_metric_anomaly(data: &Map<String, Value>, history: &[Map<String, Value>]) -> bool {
    let Some(last) = history.last() else {
        return false;
    };

    if let (Some(rating), Some(previous)) = (metric(data, "avg_rating"), metric(last, "avg_rating"))
        && (rating - previous).abs() > RATING_JUMP_THRESHOLD
    {
        return true;
    }

    if let (Some(count), Some(previous)) = (metric(data, "count_total"), metric(last, "count_total"))
        && previous > 0.0
        && (count - previous) / previous > COUNT_GROWTH_FACTOR
    {
        return true;
    }

    false
}
