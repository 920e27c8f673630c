//! Random truck-stream generation.

use palletize_core::{BoxItem, Pallet, PlacedBox, Truck, TruckId, FINAL_TRUCK_ID, GRID};
use rand::prelude::*;

/// Configuration for the random truck source.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of trucks to generate; the last one carries the final id.
    pub trucks: usize,

    /// Pallets per truck.
    pub pallets_per_truck: usize,

    /// Maximum boxes per generated pallet.
    pub max_boxes_per_pallet: usize,

    /// RNG seed, for reproducible streams.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            trucks: 10,
            pallets_per_truck: 4,
            max_boxes_per_pallet: 6,
            seed: 42,
        }
    }
}

/// Generates a reproducible truck stream ending with the final truck.
///
/// Every generated pallet satisfies the pallet invariant, the way real
/// inbound freight would: boxes are dropped at random free positions and
/// crowded pallets simply stay partially filled.
pub fn generate_trucks(config: &GeneratorConfig) -> Vec<Truck> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut trucks = Vec::with_capacity(config.trucks);

    for i in 0..config.trucks {
        let id = if i + 1 == config.trucks {
            FINAL_TRUCK_ID
        } else {
            i as TruckId + 1
        };

        let pallets = (0..config.pallets_per_truck)
            .map(|_| random_pallet(&mut rng, config.max_boxes_per_pallet))
            .collect();

        trucks.push(Truck::new(id).with_pallets(pallets));
    }

    trucks
}

fn random_pallet(rng: &mut StdRng, max_boxes: usize) -> Pallet {
    let target = rng.gen_range(1..=max_boxes.max(1));
    let mut pallet = Pallet::new();

    for _ in 0..target {
        let item = BoxItem::new(rng.gen_range(1..=4), rng.gen_range(1..=4));

        // A few placement attempts per box; give up when the pallet is
        // too crowded.
        for _ in 0..8 {
            let candidate = PlacedBox::new(item, rng.gen_range(0..GRID), rng.gen_range(0..GRID));
            let footprint = candidate.footprint();

            let free = footprint.in_grid()
                && pallet
                    .boxes()
                    .iter()
                    .all(|b| !b.footprint().intersects(&footprint));
            if free {
                pallet.push(candidate);
                break;
            }
        }
    }

    pallet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_pallets_are_valid() {
        let config = GeneratorConfig {
            trucks: 5,
            pallets_per_truck: 3,
            max_boxes_per_pallet: 8,
            seed: 7,
        };
        for truck in generate_trucks(&config) {
            assert!(truck.pallets.iter().all(Pallet::is_valid));
        }
    }

    #[test]
    fn test_last_truck_is_final() {
        let trucks = generate_trucks(&GeneratorConfig::default());
        assert_eq!(trucks.len(), 10);
        assert!(trucks.last().unwrap().is_final());
        assert!(trucks[..9].iter().all(|t| !t.is_final()));
    }

    #[test]
    fn test_streams_are_reproducible() {
        let config = GeneratorConfig::default();
        assert_eq!(generate_trucks(&config), generate_trucks(&config));
    }
}
