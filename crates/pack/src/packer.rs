//! The shape-priority pallet packer.

use palletize_core::{Pallet, PlacedBox, Shape};

use crate::aggregator::ShapeBins;
use crate::layout;
use crate::result::PackResult;

/// A gap filler patched onto a pallet dominated by larger boxes.
///
/// Fillers pop destructively from their own bin, so a consumed filler is
/// never placed twice; whatever remains falls through to the ordinary
/// group phases.
#[derive(Debug, Clone, Copy)]
enum Filler {
    /// Upright 4×1 covering the open x = 3 column.
    Column4x1,
    /// Flipped 4×1 covering the open y = 3 row.
    Row4x1,
    /// Flipped 3×1 covering the open y = 3 row on a 3×3 pallet.
    Row3x1,
}

impl Filler {
    fn shape(self) -> Shape {
        match self {
            Filler::Column4x1 | Filler::Row4x1 => Shape::FourByOne,
            Filler::Row3x1 => Shape::ThreeByOne,
        }
    }

    /// Consumes one box from the filler's bin and places it over its gap,
    /// if any box is available.
    fn take(self, bins: &mut ShapeBins) -> Option<PlacedBox> {
        let item = bins.pop(self.shape())?;
        let placed = match self {
            Filler::Column4x1 => {
                let (x, y) = layout::COLUMN_FILLER_POS;
                PlacedBox::new(item, x, y)
            }
            Filler::Row4x1 | Filler::Row3x1 => {
                let (x, y) = layout::ROW_FILLER_POS;
                PlacedBox::new(item, x, y).with_flipped(true)
            }
        };
        Some(placed)
    }
}

/// Greedy shape-priority packer over the fixed 4×4 pallet grid.
///
/// Shapes are processed in [`layout::PHASE_ORDER`], each bin drained in
/// FIFO order before the next begins. The layout is fixed per shape; the
/// packer never searches, so output is deterministic for a given input
/// sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct PalletPacker;

impl PalletPacker {
    /// Creates a new packer.
    pub fn new() -> Self {
        Self
    }

    /// Packs every box in `bins` onto fresh pallets, consuming the bins.
    pub fn pack(&self, mut bins: ShapeBins) -> PackResult {
        let mut pallets = Vec::new();
        let mut fillers_used = 0;

        for shape in layout::PHASE_ORDER {
            match shape {
                Shape::FourByFour => {
                    self.pack_single(&mut bins, shape, &[], &mut pallets, &mut fillers_used)
                }
                Shape::FourByThree => self.pack_single(
                    &mut bins,
                    shape,
                    &[Filler::Column4x1],
                    &mut pallets,
                    &mut fillers_used,
                ),
                Shape::ThreeByThree => self.pack_single(
                    &mut bins,
                    shape,
                    &[Filler::Column4x1, Filler::Row3x1],
                    &mut pallets,
                    &mut fillers_used,
                ),
                Shape::FourByTwo => self.pack_group(
                    &mut bins,
                    shape,
                    &layout::SLOTS_4X2,
                    false,
                    &mut pallets,
                    &mut fillers_used,
                ),
                Shape::TwoByTwo => self.pack_group(
                    &mut bins,
                    shape,
                    &layout::SLOTS_2X2,
                    false,
                    &mut pallets,
                    &mut fillers_used,
                ),
                Shape::ThreeByTwo => self.pack_group(
                    &mut bins,
                    shape,
                    &layout::SLOTS_3X2,
                    true,
                    &mut pallets,
                    &mut fillers_used,
                ),
                Shape::ThreeByOne => self.pack_group(
                    &mut bins,
                    shape,
                    &layout::SLOTS_3X1,
                    true,
                    &mut pallets,
                    &mut fillers_used,
                ),
                Shape::FourByOne => self.pack_group(
                    &mut bins,
                    shape,
                    &layout::SLOTS_4X1,
                    false,
                    &mut pallets,
                    &mut fillers_used,
                ),
                Shape::TwoByOne => self.pack_group(
                    &mut bins,
                    shape,
                    &layout::SLOTS_2X1,
                    false,
                    &mut pallets,
                    &mut fillers_used,
                ),
                Shape::OneByOne => self.pack_group(
                    &mut bins,
                    shape,
                    &layout::SLOTS_1X1,
                    false,
                    &mut pallets,
                    &mut fillers_used,
                ),
            }
        }

        debug_assert!(bins.is_empty(), "every bin must be drained");

        let boxes_packed = pallets.iter().map(Pallet::box_count).sum();
        log::debug!(
            "packed {boxes_packed} boxes onto {} pallets ({fillers_used} fillers consumed)",
            pallets.len()
        );

        PackResult {
            pallets,
            boxes_packed,
            fillers_used,
        }
    }

    /// Packs a single-per-pallet shape at the origin, patching its gaps
    /// with the given fillers where available.
    fn pack_single(
        &self,
        bins: &mut ShapeBins,
        shape: Shape,
        fillers: &[Filler],
        pallets: &mut Vec<Pallet>,
        fillers_used: &mut usize,
    ) {
        while let Some(item) = bins.pop(shape) {
            let mut pallet = Pallet::new();
            pallet.push(PlacedBox::new(item, 0, 0));

            for &filler in fillers {
                if let Some(placed) = filler.take(bins) {
                    pallet.push(placed);
                    *fillers_used += 1;
                }
            }

            pallets.push(pallet);
        }
    }

    /// Packs a group shape by cycling through its slot table, starting a
    /// fresh pallet per completed group. When `row_filler` is set, each
    /// completed group's open y = 3 row is patched with a flipped 4×1 if
    /// one is available; partial trailing groups never attempt a filler.
    fn pack_group(
        &self,
        bins: &mut ShapeBins,
        shape: Shape,
        slots: &[(u8, u8)],
        row_filler: bool,
        pallets: &mut Vec<Pallet>,
        fillers_used: &mut usize,
    ) {
        let mut current = Pallet::new();
        let mut slot = 0;

        while let Some(item) = bins.pop(shape) {
            let (x, y) = slots[slot];
            current.push(PlacedBox::new(item, x, y));
            slot += 1;

            if slot == slots.len() {
                if row_filler {
                    if let Some(placed) = Filler::Row4x1.take(bins) {
                        current.push(placed);
                        *fillers_used += 1;
                    }
                }
                pallets.push(std::mem::take(&mut current));
                slot = 0;
            }
        }

        if !current.is_empty() {
            pallets.push(current);
        }
    }
}
