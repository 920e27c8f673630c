//! Stream statistics reporting.

use std::fmt;

use palletize_core::{Pallet, Truck, GRID};

/// Statistics comparing a truck stream before and after repacking.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Trucks sent into the pipeline.
    pub trucks_in: usize,
    /// Trucks received from the pipeline.
    pub trucks_out: usize,
    /// Pallets across all input trucks.
    pub pallets_in: usize,
    /// Pallets across all output trucks.
    pub pallets_out: usize,
    /// Boxes across all input trucks.
    pub boxes_in: usize,
    /// Boxes across all output trucks.
    pub boxes_out: usize,
    /// Mean pallet utilization on input, in `0.0..=1.0`.
    pub utilization_in: f64,
    /// Mean pallet utilization on output, in `0.0..=1.0`.
    pub utilization_out: f64,
    /// Output pallets violating the bounds/overlap invariant.
    pub invalid_pallets: usize,
}

impl Report {
    /// Computes the statistics for an input stream and its outputs.
    pub fn from_streams(input: &[Truck], output: &[Truck]) -> Self {
        let input_pallets: Vec<&Pallet> = input.iter().flat_map(|t| &t.pallets).collect();
        let output_pallets: Vec<&Pallet> = output.iter().flat_map(|t| &t.pallets).collect();

        Self {
            trucks_in: input.len(),
            trucks_out: output.len(),
            pallets_in: input_pallets.len(),
            pallets_out: output_pallets.len(),
            boxes_in: input.iter().map(Truck::box_count).sum(),
            boxes_out: output.iter().map(Truck::box_count).sum(),
            utilization_in: mean_utilization(&input_pallets),
            utilization_out: mean_utilization(&output_pallets),
            invalid_pallets: output_pallets.iter().filter(|p| !p.is_valid()).count(),
        }
    }

    /// Returns true if no boxes were lost or duplicated.
    pub fn conserved(&self) -> bool {
        self.boxes_in == self.boxes_out
    }

    /// Returns true if every output pallet satisfies the invariant.
    pub fn all_valid(&self) -> bool {
        self.invalid_pallets == 0
    }
}

fn mean_utilization(pallets: &[&Pallet]) -> f64 {
    if pallets.is_empty() {
        return 0.0;
    }
    let used: u32 = pallets.iter().map(|p| p.used_area()).sum();
    let capacity = pallets.len() as u32 * u32::from(GRID) * u32::from(GRID);
    f64::from(used) / f64::from(capacity)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "trucks:      {} in, {} out", self.trucks_in, self.trucks_out)?;
        writeln!(
            f,
            "pallets:     {} in ({:.1}% full), {} out ({:.1}% full)",
            self.pallets_in,
            self.utilization_in * 100.0,
            self.pallets_out,
            self.utilization_out * 100.0
        )?;
        writeln!(f, "boxes:       {} in, {} out", self.boxes_in, self.boxes_out)?;
        write!(
            f,
            "invariants:  {}, {}",
            if self.conserved() {
                "conserved"
            } else {
                "NOT CONSERVED"
            },
            if self.all_valid() {
                "all pallets valid"
            } else {
                "INVALID PALLETS"
            }
        )
    }
}
