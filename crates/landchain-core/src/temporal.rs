//! # Temporal Types
//!
//! UTC timestamp type for ledger records. A record's timestamp feeds its
//! digest, so the type fixes two string forms and never lets them drift:
//!
//! - the **hash form** (`2026-01-15 12:00:00.123456`), which is what the
//!   digest consumes, and
//! - the **ISO-8601 form** (`2026-01-15T12:00:00.123456Z`), which is what
//!   every JSON response carries.
//!
//! Both are derived from the same microsecond-precision instant, so a
//! record exported as JSON and loaded back recomputes to the same hash.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// A UTC instant with microsecond precision.
///
/// Sub-microsecond precision is discarded on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Capture the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(6))
    }

    /// Wrap a `chrono::DateTime<Utc>`, truncating to microseconds.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(6))
    }

    /// Access the underlying `chrono::DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Parse a timestamp from RFC 3339, offset-less ISO-8601, or hash form.
    ///
    /// Offset-less inputs are interpreted as UTC.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self::from_datetime(dt.with_timezone(&Utc)));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(Self::from_datetime(naive.and_utc()));
            }
        }
        Err(ValidationError::InvalidField {
            field: "timestamp",
            reason: format!("not an ISO-8601 timestamp: {input:?}"),
        })
    }

    /// The string form consumed by the record digest.
    ///
    /// `YYYY-MM-DD HH:MM:SS.ffffff`, with the fractional part omitted when
    /// the microsecond component is zero.
    pub fn hash_form(&self) -> String {
        let base = self.0.format("%Y-%m-%d %H:%M:%S");
        match self.0.timestamp_subsec_micros() {
            0 => base.to_string(),
            micros => format!("{base}.{micros:06}"),
        }
    }

    /// ISO-8601 with six fractional digits and a `Z` suffix.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
