//! Canonical box shapes and classification.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the ten canonical box shapes.
///
/// A shape is a normalized `(width, length)` pair with `width >= length`
/// and both sides in `1..=4`. The set is closed: any other pair is a fatal
/// input error, not a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    /// 1×1 unit box.
    OneByOne,
    /// 2×1 box.
    TwoByOne,
    /// 2×2 box.
    TwoByTwo,
    /// 3×1 box.
    ThreeByOne,
    /// 3×2 box.
    ThreeByTwo,
    /// 3×3 box.
    ThreeByThree,
    /// 4×1 box.
    FourByOne,
    /// 4×2 box.
    FourByTwo,
    /// 4×3 box.
    FourByThree,
    /// 4×4 box, filling a pallet on its own.
    FourByFour,
}

impl Shape {
    /// Number of distinct shapes.
    pub const COUNT: usize = 10;

    /// All shapes in ascending dimension order.
    pub const ALL: [Shape; Shape::COUNT] = [
        Shape::OneByOne,
        Shape::TwoByOne,
        Shape::TwoByTwo,
        Shape::ThreeByOne,
        Shape::ThreeByTwo,
        Shape::ThreeByThree,
        Shape::FourByOne,
        Shape::FourByTwo,
        Shape::FourByThree,
        Shape::FourByFour,
    ];

    /// Classifies normalized dimensions into a shape.
    ///
    /// Expects `width >= length`. The caller is responsible for having
    /// produced valid box dimensions; anything outside the ten known
    /// shapes is reported as [`Error::InvalidBoxSize`].
    pub fn classify(width: u8, length: u8) -> Result<Shape> {
        match (width, length) {
            (1, 1) => Ok(Shape::OneByOne),
            (2, 1) => Ok(Shape::TwoByOne),
            (2, 2) => Ok(Shape::TwoByTwo),
            (3, 1) => Ok(Shape::ThreeByOne),
            (3, 2) => Ok(Shape::ThreeByTwo),
            (3, 3) => Ok(Shape::ThreeByThree),
            (4, 1) => Ok(Shape::FourByOne),
            (4, 2) => Ok(Shape::FourByTwo),
            (4, 3) => Ok(Shape::FourByThree),
            (4, 4) => Ok(Shape::FourByFour),
            _ => Err(Error::InvalidBoxSize { width, length }),
        }
    }

    /// Returns the shape's width (the longer side).
    pub const fn width(self) -> u8 {
        match self {
            Shape::OneByOne => 1,
            Shape::TwoByOne | Shape::TwoByTwo => 2,
            Shape::ThreeByOne | Shape::ThreeByTwo | Shape::ThreeByThree => 3,
            Shape::FourByOne | Shape::FourByTwo | Shape::FourByThree | Shape::FourByFour => 4,
        }
    }

    /// Returns the shape's length (the shorter side).
    pub const fn length(self) -> u8 {
        match self {
            Shape::OneByOne | Shape::TwoByOne | Shape::ThreeByOne | Shape::FourByOne => 1,
            Shape::TwoByTwo | Shape::ThreeByTwo | Shape::FourByTwo => 2,
            Shape::ThreeByThree | Shape::FourByThree => 3,
            Shape::FourByFour => 4,
        }
    }

    /// Grid cells covered by one box of this shape.
    pub const fn area(self) -> u8 {
        self.width() * self.length()
    }

    /// Stable index into per-shape collections.
    pub const fn index(self) -> usize {
        self as usize
    }
}
