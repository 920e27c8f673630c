//! Trucks carrying pallets through the pipeline.

use crate::pallet::Pallet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a truck within a batch.
pub type TruckId = u32;

/// Reserved id marking the final truck of a batch.
///
/// Receiving a truck with this id triggers the repack; every batch is
/// expected to carry it at most once.
pub const FINAL_TRUCK_ID: TruckId = 0;

/// A truck carrying an ordered collection of pallets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Truck {
    /// Truck identifier; [`FINAL_TRUCK_ID`] marks the final truck.
    pub id: TruckId,
    /// The pallets on board, in loading order.
    pub pallets: Vec<Pallet>,
}

impl Truck {
    /// Creates a truck with no pallets.
    ///
    /// Also serves as the acknowledgment placeholder the coordinator emits
    /// for non-final trucks.
    pub fn new(id: TruckId) -> Self {
        Self {
            id,
            pallets: Vec::new(),
        }
    }

    /// Sets the pallets on board.
    pub fn with_pallets(mut self, pallets: Vec<Pallet>) -> Self {
        self.pallets = pallets;
        self
    }

    /// Returns true if this truck closes its batch.
    pub fn is_final(&self) -> bool {
        self.id == FINAL_TRUCK_ID
    }

    /// Number of pallets on board.
    pub fn pallet_count(&self) -> usize {
        self.pallets.len()
    }

    /// Total boxes across all pallets on board.
    pub fn box_count(&self) -> usize {
        self.pallets.iter().map(Pallet::box_count).sum()
    }
}
