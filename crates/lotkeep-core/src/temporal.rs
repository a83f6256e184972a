//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only timestamp truncated to seconds precision.
//! Tickets are stamped when issued and when redeemed; a gate log only ever
//! needs second resolution, and a single timezone keeps reports comparable
//! across hosts.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// A UTC-only timestamp, truncated to seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> Timestamp {
        Timestamp(Utc.with_ymd_and_hms(2026, 1, 15, h, m, s).unwrap())
    }

    #[test]
    fn test_now_has_no_subseconds() {
        assert_eq!(Timestamp::now().0.nanosecond(), 0);
    }

    #[test]
    fn test_truncation_drops_nanoseconds() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 45).unwrap();
        let ts = Timestamp(truncate_to_seconds(dt.with_nanosecond(123_456_789).unwrap()));
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:30:45Z");
    }

    #[test]
    fn test_display_matches_iso8601() {
        assert_eq!(format!("{}", at(23, 59, 59)), "2026-01-15T23:59:59Z");
    }

    #[test]
    fn test_ordering() {
        assert!(at(12, 0, 0) < at(12, 0, 1));
    }

    #[test]
    fn test_serde_uses_rfc3339() {
        let json = serde_json::to_string(&at(12, 0, 0)).unwrap();
        assert_eq!(json, "\"2026-01-15T12:00:00Z\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, at(12, 0, 0));
    }
}
