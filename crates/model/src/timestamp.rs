//! Second-resolution timestamps.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Seconds since the Unix epoch. Zero means "not set".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "TimestampRepr", into = "TimestampRepr")]
pub struct Timestamp(u32);

/// Accepted JSON forms: an integer number of seconds or an ISO-8601 string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum TimestampRepr {
    Seconds(u32),
    Iso(String),
}

impl Timestamp {
    pub const fn new(seconds: u32) -> Self {
        Self(seconds)
    }

    pub fn seconds_since_epoch(&self) -> u32 {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0 != 0
    }

    /// ISO-8601 form, or an empty string if the timestamp is not set.
    pub fn to_iso(&self) -> String {
        if self.is_set() {
            self.to_iso_all()
        } else {
            String::new()
        }
    }

    /// ISO-8601 form, also for an unset timestamp (`1970-01-01T00:00:00Z`).
    pub fn to_iso_all(&self) -> String {
        DateTime::<Utc>::from_timestamp(i64::from(self.0), 0)
            .map(|dt| dt.format(ISO_FORMAT).to_string())
            .unwrap_or_default()
    }
}

impl From<u32> for Timestamp {
    fn from(seconds: u32) -> Self {
        Self(seconds)
    }
}

impl FromStr for Timestamp {
    type Err = ModelError;

    /// Parses any RFC 3339 date-time. Offsets are applied and fractional
    /// seconds are dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidTimestamp(s.to_string());
        let parsed = DateTime::parse_from_rfc3339(s).map_err(|_| invalid())?;
        let seconds = u32::try_from(parsed.timestamp()).map_err(|_| invalid())?;
        Ok(Self(seconds))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl TryFrom<TimestampRepr> for Timestamp {
    type Error = ModelError;

    fn try_from(repr: TimestampRepr) -> Result<Self, Self::Error> {
        match repr {
            TimestampRepr::Seconds(seconds) => Ok(Self(seconds)),
            TimestampRepr::Iso(s) if s.is_empty() => Ok(Self::default()),
            TimestampRepr::Iso(s) => s.parse(),
        }
    }
}

impl From<Timestamp> for TimestampRepr {
    fn from(timestamp: Timestamp) -> Self {
        TimestampRepr::Iso(timestamp.to_iso())
    }
}
