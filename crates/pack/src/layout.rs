//! Fixed layout tables for the shape-priority packer.
//!
//! Each group-packed shape has a table of slot positions within one
//! pallet; the packer cycles through the slots, starting a fresh pallet
//! whenever the table is exhausted. Single-per-pallet shapes (4×4, 4×3,
//! 3×3) sit at the origin and are handled together with their gap fillers
//! in the packer itself.

use palletize_core::Shape;

/// Packer phase order: largest footprint first, with the filler shapes
/// falling through to their own group step after their last consumer
/// (the 3×1 phase is the last to draw 4×1 fillers).
pub const PHASE_ORDER: [Shape; Shape::COUNT] = [
    Shape::FourByFour,
    Shape::FourByTwo,
    Shape::TwoByTwo,
    Shape::FourByThree,
    Shape::ThreeByThree,
    Shape::ThreeByTwo,
    Shape::ThreeByOne,
    Shape::FourByOne,
    Shape::TwoByOne,
    Shape::OneByOne,
];

/// Two 4×2 boxes side by side.
pub const SLOTS_4X2: [(u8, u8); 2] = [(0, 0), (2, 0)];

/// Four 2×2 boxes in the grid quadrants.
pub const SLOTS_2X2: [(u8, u8); 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];

/// Two 3×2 boxes side by side, leaving the y = 3 row open.
pub const SLOTS_3X2: [(u8, u8); 2] = [(0, 0), (2, 0)];

/// Four 3×1 boxes in consecutive rows, leaving the y = 3 row open.
pub const SLOTS_3X1: [(u8, u8); 4] = [(0, 0), (1, 0), (2, 0), (3, 0)];

/// Four 4×1 boxes in consecutive rows, covering the grid completely.
pub const SLOTS_4X1: [(u8, u8); 4] = [(0, 0), (1, 0), (2, 0), (3, 0)];

/// Eight 2×1 boxes, two half-rows per grid row.
pub const SLOTS_2X1: [(u8, u8); 8] = [
    (0, 0),
    (0, 2),
    (1, 0),
    (1, 2),
    (2, 0),
    (2, 2),
    (3, 0),
    (3, 2),
];

/// Sixteen 1×1 boxes, one per cell, row-major.
pub const SLOTS_1X1: [(u8, u8); 16] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 0),
    (1, 1),
    (1, 2),
    (1, 3),
    (2, 0),
    (2, 1),
    (2, 2),
    (2, 3),
    (3, 0),
    (3, 1),
    (3, 2),
    (3, 3),
];

/// Position of the row filler: a flipped 4×1 (or, on 3×3 pallets, a
/// flipped 3×1) covering the open y = 3 row.
pub const ROW_FILLER_POS: (u8, u8) = (0, 3);

/// Position of the column filler: an upright 4×1 covering the open x = 3
/// column next to a single large box.
pub const COLUMN_FILLER_POS: (u8, u8) = (3, 0);
