//! Pallet surface holding placed boxes.

use crate::grid::GRID;
use crate::item::PlacedBox;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fixed 4×4-unit pallet holding non-overlapping boxes.
///
/// The packer emits pallets fully populated; there is no mutation API
/// beyond construction, so an emitted pallet is effectively immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pallet {
    boxes: Vec<PlacedBox>,
}

impl Pallet {
    /// Creates an empty pallet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pallet from already-placed boxes.
    pub fn with_boxes(boxes: Vec<PlacedBox>) -> Self {
        Self { boxes }
    }

    /// Adds a placed box to the pallet.
    pub fn push(&mut self, placed: PlacedBox) {
        self.boxes.push(placed);
    }

    /// The placed boxes, in placement order.
    pub fn boxes(&self) -> &[PlacedBox] {
        &self.boxes
    }

    /// Number of boxes on the pallet.
    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true if the pallet holds no boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Total grid cells covered by the boxes.
    pub fn used_area(&self) -> u32 {
        self.boxes.iter().map(|b| u32::from(b.item.area())).sum()
    }

    /// Fraction of the grid covered, in `0.0..=1.0`.
    pub fn utilization(&self) -> f64 {
        f64::from(self.used_area()) / f64::from(u32::from(GRID) * u32::from(GRID))
    }

    /// Checks the pallet invariant: every footprint within the grid and no
    /// two footprints overlapping.
    pub fn is_valid(&self) -> bool {
        let footprints: Vec<_> = self.boxes.iter().map(PlacedBox::footprint).collect();

        if !footprints.iter().all(|fp| fp.in_grid()) {
            return false;
        }

        for (i, a) in footprints.iter().enumerate() {
            for b in &footprints[i + 1..] {
                if a.intersects(b) {
                    return false;
                }
            }
        }

        true
    }
}
