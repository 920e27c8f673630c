//! Pack result representation.

use palletize_core::{Pallet, GRID};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of packing the aggregated bins onto fresh pallets.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// Newly packed pallets, in emission order.
    pub pallets: Vec<Pallet>,

    /// Total boxes placed across all pallets.
    pub boxes_packed: usize,

    /// Filler boxes consumed while patching gaps on larger-box pallets.
    pub fillers_used: usize,
}

impl PackResult {
    /// Number of pallets produced.
    pub fn pallet_count(&self) -> usize {
        self.pallets.len()
    }

    /// Returns true if nothing was packed.
    pub fn is_empty(&self) -> bool {
        self.pallets.is_empty()
    }

    /// Mean grid utilization across the produced pallets, in `0.0..=1.0`
    /// (zero when no pallets were produced).
    pub fn utilization(&self) -> f64 {
        if self.pallets.is_empty() {
            return 0.0;
        }
        let used: u32 = self.pallets.iter().map(Pallet::used_area).sum();
        let capacity = self.pallets.len() as u32 * u32::from(GRID) * u32::from(GRID);
        f64::from(used) / f64::from(capacity)
    }

    /// Consumes the result, yielding the pallets.
    pub fn into_pallets(self) -> Vec<Pallet> {
        self.pallets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palletize_core::{BoxItem, PlacedBox};

    #[test]
    fn test_empty_result() {
        let result = PackResult::default();
        assert!(result.is_empty());
        assert_eq!(result.pallet_count(), 0);
        assert_eq!(result.utilization(), 0.0);
    }

    #[test]
    fn test_utilization_averages_over_pallets() {
        let full = Pallet::with_boxes(vec![PlacedBox::new(BoxItem::new(4, 4), 0, 0)]);
        let half = Pallet::with_boxes(vec![PlacedBox::new(BoxItem::new(4, 2), 0, 0)]);
        let result = PackResult {
            pallets: vec![full, half],
            boxes_packed: 2,
            fillers_used: 0,
        };
        assert!((result.utilization() - 0.75).abs() < 1e-12);
    }
}
