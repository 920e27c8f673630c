//! Integration tests for palletize-core.

use palletize_core::{BoxItem, Error, Footprint, Pallet, PlacedBox, Shape, Truck, GRID};

mod shape_tests {
    use super::*;

    #[test]
    fn test_ten_shapes_cover_all_normalized_pairs() {
        let mut count = 0;
        for width in 1..=GRID {
            for length in 1..=width {
                assert!(
                    Shape::classify(width, length).is_ok(),
                    "({width}, {length}) should classify"
                );
                count += 1;
            }
        }
        assert_eq!(count, Shape::COUNT);
    }

    #[test]
    fn test_classification_error_reports_dimensions() {
        let err = Shape::classify(6, 2).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidBoxSize {
                width: 6,
                length: 2
            }
        );
        assert_eq!(err.to_string(), "invalid box size: w=6 l=2");
    }

    #[test]
    fn test_shape_matches_normalized_box() {
        // The shape bucket is derived from the box, never stored: any
        // orientation of the same dimensions lands in the same bucket.
        let a = BoxItem::new(3, 2).shape().unwrap();
        let b = BoxItem::new(2, 3).shape().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Shape::ThreeByTwo);
    }
}

mod footprint_tests {
    use super::*;

    #[test]
    fn test_grid_corner_placements() {
        let corner = PlacedBox::new(BoxItem::new(1, 1), 3, 3);
        assert_eq!(corner.footprint(), Footprint::new(3, 3, 4, 4));
        assert!(corner.footprint().in_grid());
    }

    #[test]
    fn test_flip_swaps_extents() {
        let upright = PlacedBox::new(BoxItem::new(3, 1), 0, 0);
        let flipped = upright.with_flipped(true);
        assert_eq!(upright.footprint(), Footprint::new(0, 0, 1, 3));
        assert_eq!(flipped.footprint(), Footprint::new(0, 0, 3, 1));
        assert_eq!(upright.footprint().area(), flipped.footprint().area());
    }
}

mod pallet_tests {
    use super::*;

    #[test]
    fn test_sixteen_units_fill_the_grid() {
        let mut pallet = Pallet::new();
        for x in 0..GRID {
            for y in 0..GRID {
                pallet.push(PlacedBox::new(BoxItem::new(1, 1), x, y));
            }
        }
        assert!(pallet.is_valid());
        assert_eq!(pallet.used_area(), 16);
        assert!((pallet.utilization() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mixed_pallet_with_filler_is_valid() {
        // A 3x3 with both gap fillers: the layout the packer emits.
        let pallet = Pallet::with_boxes(vec![
            PlacedBox::new(BoxItem::new(3, 3), 0, 0),
            PlacedBox::new(BoxItem::new(4, 1), 3, 0),
            PlacedBox::new(BoxItem::new(3, 1), 0, 3).with_flipped(true),
        ]);
        assert!(pallet.is_valid());
        assert_eq!(pallet.used_area(), 16);
    }
}

mod truck_tests {
    use super::*;

    #[test]
    fn test_truck_carries_pallets_in_order() {
        let first = Pallet::with_boxes(vec![PlacedBox::new(BoxItem::new(2, 2), 0, 0)]);
        let second = Pallet::with_boxes(vec![PlacedBox::new(BoxItem::new(1, 1), 0, 0)]);
        let truck = Truck::new(3).with_pallets(vec![first.clone(), second.clone()]);

        assert_eq!(truck.pallets[0], first);
        assert_eq!(truck.pallets[1], second);
        assert_eq!(truck.box_count(), 2);
    }
}
