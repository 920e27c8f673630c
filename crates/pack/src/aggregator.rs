//! Flattening received pallets into per-shape bins.

use std::collections::VecDeque;

use palletize_core::{BoxItem, Pallet, Result, Shape};

/// Per-shape FIFO bins of boxes awaiting packing.
///
/// Bins preserve the order boxes were encountered in; the packer consumes
/// them destructively from the front, which keeps filler accounting
/// correct and the output deterministic.
#[derive(Debug, Clone, Default)]
pub struct ShapeBins {
    bins: [VecDeque<BoxItem>; Shape::COUNT],
}

impl ShapeBins {
    /// Creates empty bins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a box to its shape's bin.
    pub fn push(&mut self, shape: Shape, item: BoxItem) {
        self.bins[shape.index()].push_back(item);
    }

    /// Removes and returns the oldest box of the given shape.
    pub fn pop(&mut self, shape: Shape) -> Option<BoxItem> {
        self.bins[shape.index()].pop_front()
    }

    /// Number of boxes waiting in the given shape's bin.
    pub fn len(&self, shape: Shape) -> usize {
        self.bins[shape.index()].len()
    }

    /// Total boxes across all bins.
    pub fn total_boxes(&self) -> usize {
        self.bins.iter().map(VecDeque::len).sum()
    }

    /// Returns true if every bin is empty.
    pub fn is_empty(&self) -> bool {
        self.bins.iter().all(VecDeque::is_empty)
    }
}

/// Flattens every box from the given pallets into per-shape bins.
///
/// Boxes are appended in encounter order (pallet order, then box order
/// within each pallet), with orientation normalized and prior positions
/// discarded. The input is read-only; classification failures propagate as
/// the fatal [`palletize_core::Error::InvalidBoxSize`].
pub fn aggregate<'a, I>(pallets: I) -> Result<ShapeBins>
where
    I: IntoIterator<Item = &'a Pallet>,
{
    let mut bins = ShapeBins::new();

    for pallet in pallets {
        for placed in pallet.boxes() {
            // BoxItem is normalized on construction, so the item can be
            // reused as-is; only the position is dropped.
            let item = placed.item;
            bins.push(item.shape()?, item);
        }
    }

    Ok(bins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use palletize_core::PlacedBox;

    fn pallet_of(dims: &[(u8, u8)]) -> Pallet {
        // Positions are irrelevant to aggregation; stack everything at the
        // origin.
        Pallet::with_boxes(
            dims.iter()
                .map(|&(w, l)| PlacedBox::new(BoxItem::new(w, l), 0, 0))
                .collect(),
        )
    }

    #[test]
    fn test_aggregate_discards_grouping() {
        let pallets = vec![pallet_of(&[(4, 4), (2, 1)]), pallet_of(&[(2, 1)])];
        let bins = aggregate(&pallets).unwrap();

        assert_eq!(bins.len(Shape::FourByFour), 1);
        assert_eq!(bins.len(Shape::TwoByOne), 2);
        assert_eq!(bins.total_boxes(), 3);
    }

    #[test]
    fn test_aggregate_preserves_encounter_order() {
        // Two distinguishable 3x2 boxes: one arrives rotated, both
        // normalize to the same shape but keep their bin order.
        let pallets = vec![pallet_of(&[(3, 2)]), pallet_of(&[(2, 3), (3, 2)])];
        let mut bins = aggregate(&pallets).unwrap();

        assert_eq!(bins.len(Shape::ThreeByTwo), 3);
        let first = bins.pop(Shape::ThreeByTwo).unwrap();
        assert_eq!((first.width(), first.length()), (3, 2));
    }

    #[test]
    fn test_aggregate_rejects_invalid_dimensions() {
        let pallets = vec![pallet_of(&[(5, 1)])];
        assert!(aggregate(&pallets).is_err());
    }

    #[test]
    fn test_aggregate_empty_input() {
        let bins = aggregate(&[]).unwrap();
        assert!(bins.is_empty());
        assert_eq!(bins.total_boxes(), 0);
    }
}
