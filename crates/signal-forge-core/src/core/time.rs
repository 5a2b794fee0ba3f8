// crates/signal-forge-core/src/core/time.rs
// ============================================================================
// Module: Signal Forge Time Model
// Description: Canonical timestamps and the wall-clock capability.
// Purpose: Provide deterministic, replayable time values across signal records.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Signal Forge serializes every timestamp as RFC 3339 with a trailing `Z`.
//! Calculators take explicit timestamps so outputs replay deterministically;
//! wall-clock access is confined to the [`Clock`] capability, which hosts
//! implement with [`SystemClock`] in production and [`FixedClock`] in tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;
use time::Duration;
use time::OffsetDateTime;
use time::UtcOffset;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when formatting or parsing timestamps.
#[derive(Debug, Error)]
pub enum TimeError {
    /// Timestamp could not be formatted as RFC 3339.
    #[error("failed to format timestamp: {0}")]
    Format(String),
    /// Timestamp string could not be parsed as RFC 3339.
    #[error("failed to parse timestamp: {0}")]
    Parse(String),
}

// ============================================================================
// SECTION: Timestamp
// ============================================================================

/// Canonical UTC timestamp used in evidence, signals, and credentials.
///
/// # Invariants
/// - Serialized forms are RFC 3339 with a trailing `Z`.
/// - Ordering follows the underlying instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    /// Wraps an [`OffsetDateTime`] instant.
    #[must_use]
    pub const fn new(instant: OffsetDateTime) -> Self {
        Self(instant)
    }

    /// Returns the underlying instant.
    #[must_use]
    pub const fn as_datetime(&self) -> OffsetDateTime {
        self.0
    }

    /// Formats the timestamp as RFC 3339 with a trailing `Z`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::Format`] when the instant cannot be formatted.
    pub fn to_rfc3339_z(&self) -> Result<String, TimeError> {
        let formatted = self
            .0
            .to_offset(UtcOffset::UTC)
            .format(&Rfc3339)
            .map_err(|err| TimeError::Format(err.to_string()))?;
        // Invariant: serialized timestamps end in `Z`, never `+00:00`.
        Ok(match formatted.strip_suffix("+00:00") {
            Some(prefix) => format!("{prefix}Z"),
            None => formatted,
        })
    }

    /// Parses an RFC 3339 timestamp string.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::Parse`] when the string is not valid RFC 3339.
    pub fn parse_rfc3339(value: &str) -> Result<Self, TimeError> {
        OffsetDateTime::parse(value, &Rfc3339)
            .map(Self)
            .map_err(|err| TimeError::Parse(err.to_string()))
    }

    /// Returns the elapsed hours since an earlier timestamp (negative when
    /// `earlier` is in the future).
    #[must_use]
    pub fn hours_since(&self, earlier: Self) -> f64 {
        (self.0 - earlier.0).as_seconds_f64() / 3600.0
    }

    /// Returns the whole elapsed days since an earlier timestamp.
    #[must_use]
    pub fn whole_days_since(&self, earlier: Self) -> i64 {
        (self.0 - earlier.0).whole_days()
    }

    /// Returns this timestamp advanced by the given number of hours.
    #[must_use]
    pub fn plus_hours(&self, hours: u32) -> Self {
        Self(self.0 + Duration::hours(i64::from(hours)))
    }

    /// Returns the calendar `(month, day)` pair of the timestamp.
    #[must_use]
    pub fn month_day(&self) -> (u8, u8) {
        (u8::from(self.0.month()), self.0.day())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = self.to_rfc3339_z().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse_rfc3339(&value).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// SECTION: Clock Capability
// ============================================================================

/// Wall-clock capability implemented by hosts.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}

/// Clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(OffsetDateTime::now_utc())
    }
}

/// Clock pinned to an explicit instant, adjustable for tests.
#[derive(Debug)]
pub struct FixedClock {
    /// Instant returned by `now`.
    current: Mutex<Timestamp>,
}

impl FixedClock {
    /// Creates a clock pinned to the given instant.
    #[must_use]
    pub fn new(instant: Timestamp) -> Self {
        Self {
            current: Mutex::new(instant),
        }
    }

    /// Re-pins the clock to a new instant.
    pub fn set(&self, instant: Timestamp) {
        match self.current.lock() {
            Ok(mut guard) => *guard = instant,
            Err(poisoned) => *poisoned.into_inner() = instant,
        }
    }

    /// Advances the clock by the given number of hours.
    pub fn advance_hours(&self, hours: u32) {
        let next = self.now().plus_hours(hours);
        self.set(next);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        match self.current.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
