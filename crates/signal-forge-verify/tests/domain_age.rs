// crates/signal-forge-verify/tests/domain_age.rs
// ============================================================================
// Module: Domain Age Tests
// Description: Tests for multi-source domain age composition.
// ============================================================================
//! ## Overview
//! Validates earliest-date composition, failure isolation, the capped age
//! score, and corroboration-based confidence.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::sync::Arc;

use signal_forge_core::FixedClock;
use signal_forge_core::Timestamp;
use signal_forge_verify::DomainAgeEstimator;
use signal_forge_verify::DomainHistorySource;
use signal_forge_verify::SourceError;
use signal_forge_verify::domain_age_score;
use time::macros::datetime;

// ============================================================================
// SECTION: Scripted Sources
// ============================================================================

/// History source returning a fixed date or a scripted failure.
struct ScriptedHistorySource {
    /// Source name recorded in attestations.
    name: &'static str,
    /// Date to report; `None` simulates no record.
    date: Option<Timestamp>,
    /// Forces the lookup to fail when set.
    fail: bool,
}

impl DomainHistorySource for ScriptedHistorySource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn earliest_seen(&self, _domain: &str) -> Result<Option<Timestamp>, SourceError> {
        if self.fail {
            return Err(SourceError::Unavailable("lookup failed".to_string()));
        }
        Ok(self.date)
    }
}

/// Builds an estimator pinned to the reference instant.
fn estimator(sources: Vec<ScriptedHistorySource>) -> DomainAgeEstimator {
    let clock =
        Arc::new(FixedClock::new(Timestamp::new(datetime!(2025-01-01 10:00:00 UTC))));
    let mut estimator = DomainAgeEstimator::new(clock);
    for source in sources {
        estimator.register_source(Arc::new(source));
    }
    estimator
}

// ============================================================================
// SECTION: Composition
// ============================================================================

/// Tests the earliest date across sources wins and both corroborate.
#[test]
fn test_earliest_date_wins() {
    let estimator = estimator(vec![
        ScriptedHistorySource {
            name: "whois",
            date: Some(Timestamp::new(datetime!(2020-01-01 00:00:00 UTC))),
            fail: false,
        },
        ScriptedHistorySource {
            name: "web_archive",
            date: Some(Timestamp::new(datetime!(2019-03-15 12:00:00 UTC))),
            fail: false,
        },
    ]);

    let result = estimator.estimate("demo.shop");

    assert_eq!(result.age_days, 2118);
    assert_eq!(result.sources, vec!["whois".to_string(), "web_archive".to_string()]);
    assert!((result.confidence - 1.0).abs() < 1e-9);
    assert!((result.age_score - 0.6).abs() < 1e-9);
}

/// Tests one failing source never blocks the rest.
#[test]
fn test_source_failure_isolated() {
    let estimator = estimator(vec![
        ScriptedHistorySource {
            name: "whois",
            date: None,
            fail: true,
        },
        ScriptedHistorySource {
            name: "certificate_transparency",
            date: Some(Timestamp::new(datetime!(2024-06-01 00:00:00 UTC))),
            fail: false,
        },
    ]);

    let result = estimator.estimate("demo.shop");

    assert_eq!(result.sources, vec!["certificate_transparency".to_string()]);
    assert!((result.confidence - 0.5).abs() < 1e-9);
    assert!(result.age_days > 0);
}

/// Tests the no-data case yields a zeroed attestation.
#[test]
fn test_no_data() {
    let estimator = estimator(vec![ScriptedHistorySource {
        name: "whois",
        date: None,
        fail: false,
    }]);

    let result = estimator.estimate("brand-new.shop");

    assert!(result.earliest_date.is_none());
    assert_eq!(result.age_days, 0);
    assert!((result.age_score - 0.0).abs() < f64::EPSILON);
    assert!((result.confidence - 0.0).abs() < f64::EPSILON);
}

// ============================================================================
// SECTION: Scoring
// ============================================================================

/// Tests the age score saturates and caps at 0.6.
#[test]
fn test_age_score_cap() {
    assert!((domain_age_score(0.0) - 0.0).abs() < f64::EPSILON);
    assert!(domain_age_score(180.0) < 0.6);
    assert!((domain_age_score(2118.0) - 0.6).abs() < 1e-9);
    assert!((domain_age_score(100_000.0) - 0.6).abs() < 1e-9);
}

/// Tests the score is monotone in age.
#[test]
fn test_age_score_monotone() {
    let mut previous = 0.0;
    for age in [0.0, 30.0, 90.0, 180.0, 365.0, 730.0, 2118.0] {
        let score = domain_age_score(age);
        assert!(score >= previous);
        previous = score;
    }
}
