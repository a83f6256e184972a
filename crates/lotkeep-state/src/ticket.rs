//! # Ticket Lifecycle State Machine
//!
//! A ticket is the capability proving that a client legitimately occupies
//! a particular lot. Presenting it is the only way to free that lot.
//!
//! ## States
//!
//! ```text
//! Valid ──redeem──▶ Redeemed (terminal)
//! ```
//!
//! Redemption is one-way. No method moves a ticket back to `Valid`, and
//! only [`crate::Lot::release`] redeems, in the same call that frees the
//! lot. A caller therefore never observes a freed lot whose ticket is still
//! valid.
//!
//! `Ticket` is neither `Clone` nor `Deserialize`. The value held by the
//! caller *is* the capability; duplicating it would let a stale copy be
//! presented after the lot has been freed and handed to the same client
//! again.

use serde::{Deserialize, Serialize};

use lotkeep_core::{ClientId, CoreError, LotId, SizeClass, TicketId, Timestamp};

// ─── Ticket Status ───────────────────────────────────────────────────

/// Redemption state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TicketStatus {
    /// The ticket may still be presented to release its lot.
    Valid,
    /// The ticket released its lot and is permanently spent.
    Redeemed {
        /// When the lot was released.
        at: Timestamp,
    },
}

impl TicketStatus {
    /// Whether the ticket can still release its lot.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => f.write_str("VALID"),
            Self::Redeemed { .. } => f.write_str("REDEEMED"),
        }
    }
}

// ─── Ticket ──────────────────────────────────────────────────────────

/// A single-use release capability for one lot.
///
/// Everything except the status is fixed at issuance.
#[derive(Debug, Serialize)]
pub struct Ticket {
    id: TicketId,
    lot_id: LotId,
    client_id: ClientId,
    size_class: SizeClass,
    issued_at: Timestamp,
    status: TicketStatus,
}

impl Ticket {
    /// Issue a valid ticket for `client_id` occupying `lot_id`.
    ///
    /// The identity has already been validated by [`ClientId::new`], so a
    /// blank identity cannot reach this point.
    pub fn new(lot_id: LotId, client_id: ClientId, size_class: SizeClass) -> Self {
        Self {
            id: TicketId::new(),
            lot_id,
            client_id,
            size_class,
            issued_at: Timestamp::now(),
            status: TicketStatus::Valid,
        }
    }

    /// Issue a ticket from a raw client identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::BlankClientId`] if `client_id` is empty or
    /// whitespace-only.
    pub fn issue(
        lot_id: LotId,
        client_id: impl Into<String>,
        size_class: SizeClass,
    ) -> Result<Self, CoreError> {
        Ok(Self::new(lot_id, ClientId::new(client_id)?, size_class))
    }

    /// Unique identifier of this ticket.
    pub fn id(&self) -> TicketId {
        self.id
    }

    /// The lot this ticket authorizes releasing.
    pub fn lot_id(&self) -> LotId {
        self.lot_id
    }

    /// Identity of the client the ticket was issued to.
    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Size class of the lot at issuance.
    pub fn size_class(&self) -> SizeClass {
        self.size_class
    }

    /// When the ticket was issued.
    pub fn issued_at(&self) -> Timestamp {
        self.issued_at
    }

    /// Current redemption state.
    pub fn status(&self) -> TicketStatus {
        self.status
    }

    /// Whether the ticket can still release its lot.
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }

    /// When the ticket was redeemed, if it has been.
    pub fn redeemed_at(&self) -> Option<Timestamp> {
        match self.status {
            TicketStatus::Valid => None,
            TicketStatus::Redeemed { at } => Some(at),
        }
    }

    /// Spend the ticket (VALID → REDEEMED).
    ///
    /// Returns `false`, leaving the original redemption time untouched, if
    /// the ticket was already spent.
    pub(crate) fn redeem(&mut self) -> bool {
        if !self.is_valid() {
            return false;
        }
        self.status = TicketStatus::Redeemed {
            at: Timestamp::now(),
        };
        true
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_rejects_blank_client() {
        for size in SizeClass::all() {
            for blank in ["", " ", "   ", "\t", "\n"] {
                assert_eq!(
                    Ticket::issue(LotId(1), blank, *size).unwrap_err(),
                    CoreError::BlankClientId
                );
            }
        }
    }

    #[test]
    fn test_ticket_fields() {
        for size in SizeClass::all() {
            let ticket = Ticket::issue(LotId(1), "Vehicle1", *size).unwrap();
            assert_eq!(ticket.lot_id(), LotId(1));
            assert_eq!(ticket.client_id().as_str(), "Vehicle1");
            assert_eq!(ticket.size_class(), *size);
            assert!(ticket.is_valid());
            assert_eq!(ticket.redeemed_at(), None);
        }
    }

    #[test]
    fn test_redeem_is_one_way() {
        let mut ticket = Ticket::issue(LotId(1), "Vehicle1", SizeClass::Large).unwrap();
        assert!(ticket.redeem());
        assert!(!ticket.is_valid());
        let at = ticket.redeemed_at().unwrap();

        assert!(!ticket.redeem());
        assert!(!ticket.is_valid());
        assert_eq!(ticket.redeemed_at(), Some(at));
    }

    #[test]
    fn test_redeemed_not_before_issued() {
        let mut ticket = Ticket::issue(LotId(0), "bike-1", SizeClass::Small).unwrap();
        ticket.redeem();
        assert!(ticket.redeemed_at().unwrap() >= ticket.issued_at());
    }

    #[test]
    fn test_each_ticket_gets_a_fresh_id() {
        let a = Ticket::issue(LotId(0), "x", SizeClass::Small).unwrap();
        let b = Ticket::issue(LotId(0), "x", SizeClass::Small).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(TicketStatus::Valid.to_string(), "VALID");
        let at = Timestamp::now();
        assert_eq!(TicketStatus::Redeemed { at }.to_string(), "REDEEMED");
    }

    #[test]
    fn test_serialization_shape() {
        let ticket = Ticket::issue(LotId(3), "car-7", SizeClass::Medium).unwrap();
        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["lot_id"], 3);
        assert_eq!(json["client_id"], "car-7");
        assert_eq!(json["size_class"], "medium");
        assert_eq!(json["status"]["status"], "valid");
    }
}
