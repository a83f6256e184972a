//! # Size Class — Lot and Client Compatibility Tag
//!
//! Defines the `SizeClass` enum. Every lot carries exactly one size class,
//! fixed at construction, and every client carries one as well. A client
//! may only occupy a lot of the identical size class: a small client never
//! spills into a medium lot, and a large client never takes two small ones.
//!
//! Every `match` on `SizeClass` must be exhaustive, so adding a class forces
//! every dispatcher and report to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// The closed set of slot size classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    /// Bikes and other small clients.
    Small,
    /// Cars.
    Medium,
    /// Trucks.
    Large,
}

/// Number of size classes. Dispatchers hold one pool per class.
pub const SIZE_CLASS_COUNT: usize = 3;

impl SizeClass {
    /// Returns every size class in canonical order (small to large).
    pub fn all() -> &'static [SizeClass; SIZE_CLASS_COUNT] {
        &[Self::Small, Self::Medium, Self::Large]
    }

    /// Position of this class within [`SizeClass::all()`].
    ///
    /// Dispatchers use this to index their per-class pool arrays.
    pub fn ordinal(&self) -> usize {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
        }
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeClass {
    type Err = CoreError;

    /// Parse a size class from its snake_case identifier (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(CoreError::UnknownSizeClass(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_canonical_order() {
        assert_eq!(
            SizeClass::all(),
            &[SizeClass::Small, SizeClass::Medium, SizeClass::Large]
        );
    }

    #[test]
    fn test_ordinal_matches_position_in_all() {
        for (i, size) in SizeClass::all().iter().enumerate() {
            assert_eq!(size.ordinal(), i);
        }
    }

    #[test]
    fn test_as_str_roundtrip() {
        for size in SizeClass::all() {
            let parsed: SizeClass = size.as_str().parse().unwrap();
            assert_eq!(*size, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("SMALL".parse::<SizeClass>().is_err()); // case-sensitive
        assert!("huge".parse::<SizeClass>().is_err());
        assert!("".parse::<SizeClass>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for size in SizeClass::all() {
            let json = serde_json::to_string(size).unwrap();
            assert_eq!(json, format!("\"{}\"", size.as_str()));
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for size in SizeClass::all() {
            assert_eq!(size.to_string(), size.as_str());
        }
    }

    #[test]
    fn test_distinct_classes_are_not_equal() {
        assert_ne!(SizeClass::Small, SizeClass::Medium);
        assert_ne!(SizeClass::Medium, SizeClass::Large);
        assert_ne!(SizeClass::Small, SizeClass::Large);
    }
}
