//! # Identity Newtypes
//!
//! Newtype wrappers for the identifiers lotkeep passes around. These
//! prevent accidental identifier confusion: a `LotId` cannot be passed
//! where a `TicketId` is expected, and a client identity is never a bare
//! `String`.
//!
//! ## Invariant
//!
//! A `ClientId` always contains at least one non-whitespace character.
//! The check runs in [`ClientId::new()`] and in deserialization, so every
//! `ClientId` in the process has passed it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Identity of the client occupying a lot (e.g. a licence plate).
///
/// Compared by exact string equality. The string is stored as given;
/// surrounding whitespace is not trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientId(String);

/// Index of a lot within its pool, `0..capacity`.
///
/// The index doubles as the lot's public identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LotId(pub usize);

/// Unique identifier assigned to a ticket at issuance.
///
/// Hosts use it to key the tickets they hold. It plays no part in
/// deciding whether a release is legitimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(pub Uuid);

impl ClientId {
    /// Validate and wrap a client identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::BlankClientId`] if `id` is empty or contains
    /// only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoreError::BlankClientId);
        }
        Ok(Self(id))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ClientId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClientId> for String {
    fn from(id: ClientId) -> Self {
        id.0
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl LotId {
    /// The lot's index within its pool.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl TicketId {
    /// Generate a new random ticket identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::str::FromStr for TicketId {
    type Err = uuid::Error;

    /// Parse either the bare UUID or the `ticket:<uuid>` display form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("ticket:").unwrap_or(s);
        Uuid::parse_str(raw).map(Self)
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for LotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lot:{}", self.0)
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ticket:{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Whitespace-only identifiers are always rejected.
        #[test]
        fn blank_ids_rejected(id in "[ \t\n\r]{0,12}") {
            prop_assert_eq!(ClientId::new(id), Err(CoreError::BlankClientId));
        }

        /// Any identifier with visible content is kept verbatim.
        #[test]
        fn visible_ids_kept_verbatim(pad in "[ \t]{0,3}", body in "[A-Za-z0-9-]{1,16}") {
            let raw = format!("{pad}{body}{pad}");
            let id = ClientId::new(raw.clone()).unwrap();
            prop_assert_eq!(id.as_str(), raw.as_str());
        }
    }
}
