// crates/signal-forge-verify/src/review.rs
// ============================================================================
// Module: Review Verification
// Description: Review statistics model and the three anomaly detectors.
// Purpose: Detect gamed review data across rating, time, and distribution.
// Dependencies: signal-forge-core, serde, serde_json
// ============================================================================

//! ## Overview
//! Review statistics are checked three ways: against the caller's expected
//! values, across the per-day posting series, and across the 1-5 star
//! distribution shape. Confidence starts at 0.8, shrinks 10% per anomaly,
//! and is adjusted for the verified-purchase ratio and sample size, clamped
//! into the verification bounds.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use signal_forge_core::clamp_confidence;

// ============================================================================
// SECTION: Review Statistics
// ============================================================================

/// One day of review posting activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReviewCount {
    /// Calendar day label.
    pub day: String,
    /// Reviews posted that day.
    pub count: f64,
}

/// Review statistics captured from a platform or supplied as expectation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewStats {
    /// Average rating on the 1-5 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_rating: Option<f64>,
    /// Total review count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<f64>,
    /// Share of reviews from verified purchases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_ratio: Option<f64>,
    /// Review counts per star bin, index zero holding one star.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_distribution: Option<[f64; 5]>,
    /// Per-day posting series, oldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<DailyReviewCount>,
}

impl ReviewStats {
    /// Serializes the statistics into a raw audit map.
    #[must_use]
    pub fn to_raw_map(&self) -> Option<Map<String, Value>> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Thresholds
// ============================================================================

/// Rating delta against expectation that counts as a discrepancy.
const RATING_DELTA_THRESHOLD: f64 = 0.3;

/// Count ratio against expectation that counts as suspicious growth.
const COUNT_RATIO_THRESHOLD: f64 = 1.5;

/// Verified ratio below which the data is suspect.
const VERIFIED_RATIO_FLOOR: f64 = 0.3;

/// Z-score above which a daily count is a spike.
const SPIKE_Z_SCORE: f64 = 3.0;

/// Multiple of the series mean that makes a day a cluster day.
const CLUSTER_MEAN_FACTOR: f64 = 3.0;

/// Share of cluster days that makes the series clustered.
const CLUSTER_SHARE_THRESHOLD: f64 = 0.1;

/// Proportion spread below which the distribution is unnaturally uniform.
const UNIFORMITY_STDEV_FLOOR: f64 = 0.05;

/// Five-star share above which the distribution is suspect.
const FIVE_STAR_DOMINANCE: f64 = 0.7;

// ============================================================================
// SECTION: Anomaly Detectors
// ============================================================================

/// Compares captured statistics against expected values.
#[must_use]
pub fn review_stat_anomalies(actual: &ReviewStats, expected: &ReviewStats) -> Vec<String> {
    let mut anomalies = Vec::new();

    if let (Some(actual_rating), Some(expected_rating)) = (actual.avg_rating, expected.avg_rating) {
        let delta = (actual_rating - expected_rating).abs();
        if delta > RATING_DELTA_THRESHOLD {
            anomalies.push(format!("rating discrepancy: {delta:.1}"));
        }
    }

    if let (Some(actual_count), Some(expected_count)) = (actual.total_reviews, expected.total_reviews)
        && actual_count > expected_count * COUNT_RATIO_THRESHOLD
    {
        let increase = actual_count - expected_count;
        anomalies.push(format!("suspicious review count increase: {increase:.0}"));
    }

    if let Some(verified) = actual.verified_ratio
        && verified < VERIFIED_RATIO_FLOOR
    {
        anomalies.push(format!("low verified review ratio: {:.1}%", verified * 100.0));
    }

    anomalies
}

/// Flags spikes and clustering in the per-day posting series. Series
/// shorter than three days carry too little signal and pass clean.
#[must_use]
pub fn temporal_anomalies(history: &[DailyReviewCount]) -> Vec<String> {
    let mut anomalies = Vec::new();
    if history.len() < 3 {
        return anomalies;
    }

    let counts: Vec<f64> = history.iter().map(|entry| entry.count).collect();
    let mean = mean(&counts);
    let stdev = sample_stdev(&counts);

    if stdev > 0.0 {
        for (day, count) in counts.iter().enumerate() {
            if *count > mean + SPIKE_Z_SCORE * stdev {
                anomalies.push(format!(
                    "review spike on day {day}: {count:.0} reviews (mean: {mean:.1})"
                ));
            }
        }
    }

    let cluster_days =
        counts.iter().filter(|count| **count > mean * CLUSTER_MEAN_FACTOR).count();
    if cluster_days as f64 > counts.len() as f64 * CLUSTER_SHARE_THRESHOLD {
        anomalies.push(format!("review clustering detected: {cluster_days} high-activity days"));
    }

    anomalies
}

/// Flags unnatural shapes in the star distribution.
#[must_use]
pub fn distribution_anomalies(bins: &[f64; 5]) -> Vec<String> {
    let mut anomalies = Vec::new();
    let total: f64 = bins.iter().sum();
    if total <= 0.0 {
        return anomalies;
    }

    let proportions: Vec<f64> = bins.iter().map(|count| count / total).collect();
    if sample_stdev(&proportions) < UNIFORMITY_STDEV_FLOOR {
        anomalies.push("unnaturally uniform rating distribution".to_string());
    }

    if bins[2] < bins[0] * 0.5 && bins[2] < bins[4] * 0.5 {
        anomalies.push("bimodal distribution suggests manipulation".to_string());
    }

    if bins[4] > total * FIVE_STAR_DOMINANCE {
        anomalies.push(format!(
            "excessive 5-star ratings: {:.1}%",
            bins[4] / total * 100.0
        ));
    }

    anomalies
}

// ============================================================================
// SECTION: Confidence
// ============================================================================

/// Base confidence before adjustments.
const BASE_CONFIDENCE: f64 = 0.8;

/// Shrink factor applied once per anomaly.
const ANOMALY_SHRINK: f64 = 0.9;

/// Computes snapshot-verification confidence from anomalies and data
/// quality, clamped into the verification bounds.
#[must_use]
pub fn review_confidence(anomaly_count: usize, stats: &ReviewStats) -> f64 {
    let shrink_power = i32::try_from(anomaly_count).unwrap_or(i32::MAX);
    let mut confidence = BASE_CONFIDENCE * ANOMALY_SHRINK.powi(shrink_power);

    if let Some(verified) = stats.verified_ratio {
        confidence *= 0.7 + 0.3 * verified;
    }
    if let Some(total) = stats.total_reviews {
        let sample_factor = ((total + 1.0).ln() / 1000.0_f64.ln()).clamp(0.0, 1.0);
        confidence *= 0.8 + 0.2 * sample_factor;
    }

    clamp_confidence(confidence)
}

// ============================================================================
// SECTION: Series Statistics
// ============================================================================

/// Arithmetic mean of a series (zero when empty).
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation of a series (zero below two points).
fn sample_stdev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let center = mean(values);
    let variance = values.iter().map(|value| (value - center).powi(2)).sum::<f64>()
        / (values.len() as f64 - 1.0);
    variance.sqrt()
}
