//! Box items and their placements on a pallet.

use crate::error::Result;
use crate::grid::Footprint;
use crate::shape::Shape;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular box with normalized dimensions.
///
/// Width and length are integers in `1..=4`; the constructor swaps them
/// when needed so `width >= length` always holds. A box carries no
/// position — see [`PlacedBox`] for a box assigned to a pallet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxItem {
    width: u8,
    length: u8,
}

impl BoxItem {
    /// Creates a box, normalizing orientation so `width >= length`.
    ///
    /// Dimensions are not validated here; classification is the single
    /// validation point and rejects anything outside the ten known shapes.
    pub fn new(width: u8, length: u8) -> Self {
        if width < length {
            Self {
                width: length,
                length: width,
            }
        } else {
            Self { width, length }
        }
    }

    /// Returns the normalized width (the longer side).
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Returns the normalized length (the shorter side).
    pub fn length(&self) -> u8 {
        self.length
    }

    /// The shape bucket for this box, derived from its dimensions.
    pub fn shape(&self) -> Result<Shape> {
        Shape::classify(self.width, self.length)
    }

    /// Grid cells this box covers wherever it is placed.
    pub fn area(&self) -> u8 {
        self.width * self.length
    }
}

/// A box assigned a position on a pallet grid.
///
/// An upright placement at `(x, y)` occupies `[x, x + length) ×
/// [y, y + width)`; a flipped placement (a filler laid on its side) swaps
/// the two extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedBox {
    /// The box geometry.
    pub item: BoxItem,
    /// Grid x coordinate of the footprint's minimum corner.
    pub x: u8,
    /// Grid y coordinate of the footprint's minimum corner.
    pub y: u8,
    /// Whether the box was rotated onto its side when placed.
    pub flipped: bool,
}

impl PlacedBox {
    /// Places a box upright at the given grid position.
    pub fn new(item: BoxItem, x: u8, y: u8) -> Self {
        Self {
            item,
            x,
            y,
            flipped: false,
        }
    }

    /// Sets the flipped flag.
    pub fn with_flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }

    /// The grid cells occupied by this placement.
    pub fn footprint(&self) -> Footprint {
        let (x_extent, y_extent) = if self.flipped {
            (self.item.width(), self.item.length())
        } else {
            (self.item.length(), self.item.width())
        };
        Footprint::new(self.x, self.y, self.x + x_extent, self.y + y_extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_orientation() {
        let b = BoxItem::new(1, 3);
        assert_eq!(b.width(), 3);
        assert_eq!(b.length(), 1);

        let already = BoxItem::new(4, 2);
        assert_eq!(already.width(), 4);
        assert_eq!(already.length(), 2);
    }

    #[test]
    fn test_shape_is_derived() {
        assert_eq!(BoxItem::new(2, 3).shape().unwrap(), Shape::ThreeByTwo);
        assert!(BoxItem::new(5, 1).shape().is_err());
    }

    #[test]
    fn test_upright_footprint() {
        // A 4x3 at the origin spans 3 cells along x and 4 along y.
        let placed = PlacedBox::new(BoxItem::new(4, 3), 0, 0);
        assert_eq!(placed.footprint(), Footprint::new(0, 0, 3, 4));
    }

    #[test]
    fn test_flipped_footprint() {
        // A flipped 4x1 at (0, 3) covers the whole y = 3 row.
        let placed = PlacedBox::new(BoxItem::new(4, 1), 0, 3).with_flipped(true);
        assert_eq!(placed.footprint(), Footprint::new(0, 3, 4, 4));
    }
}
