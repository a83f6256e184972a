//! # Clients and Vehicle Kinds
//!
//! A [`Client`] is whatever asks for a lot: an identity plus the size class
//! it needs. The allocator never looks past those two fields, so there is
//! one concrete client type rather than a family of vehicle types.
//!
//! [`VehicleKind`] keeps the everyday vocabulary (bike, car, truck) as a
//! closed set that maps each kind onto its size class.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;
use crate::identity::ClientId;
use crate::size::SizeClass;

/// The kinds of vehicle a facility admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    /// Occupies a small lot.
    Bike,
    /// Occupies a medium lot.
    Car,
    /// Occupies a large lot.
    Truck,
}

impl VehicleKind {
    /// Every vehicle kind, ordered by the size class it occupies.
    pub fn all() -> &'static [VehicleKind] {
        &[Self::Bike, Self::Car, Self::Truck]
    }

    /// The size class of lot this kind of vehicle occupies.
    pub fn size_class(&self) -> SizeClass {
        match self {
            Self::Bike => SizeClass::Small,
            Self::Car => SizeClass::Medium,
            Self::Truck => SizeClass::Large,
        }
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bike => "bike",
            Self::Car => "car",
            Self::Truck => "truck",
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bike" => Ok(Self::Bike),
            "car" => Ok(Self::Car),
            "truck" => Ok(Self::Truck),
            other => Err(CoreError::UnknownVehicleKind(other.to_string())),
        }
    }
}

/// A client requesting a lot: an identity tagged with a size class.
///
/// Two clients are equal only if both identity and size class match, so
/// a car `"1"` and a truck `"1"` are different clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    size_class: SizeClass,
}

impl Client {
    /// Create a client from an already validated identity.
    pub fn new(id: ClientId, size_class: SizeClass) -> Self {
        Self { id, size_class }
    }

    /// Validate `id` and create a client of the given size class.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::BlankClientId`] if `id` is blank.
    pub fn parse(id: impl Into<String>, size_class: SizeClass) -> Result<Self, CoreError> {
        Ok(Self::new(ClientId::new(id)?, size_class))
    }

    /// Create a client for a vehicle of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::BlankClientId`] if `id` is blank.
    pub fn vehicle(kind: VehicleKind, id: impl Into<String>) -> Result<Self, CoreError> {
        Self::parse(id, kind.size_class())
    }

    /// The client's identity.
    pub fn id(&self) -> &ClientId {
        &self.id
    }

    /// The size class of lot this client needs.
    pub fn size_class(&self) -> SizeClass {
        self.size_class
    }
}
