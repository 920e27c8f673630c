//! # Palletize
//!
//! Pallet consolidation engine.
//!
//! Palletize takes partially-filled shipping pallets arriving on multiple
//! trucks and repacks their boxes onto a minimal set of fully-packed
//! pallets on one outgoing truck:
//!
//! - **Classification**: boxes are bucketed into ten canonical shapes
//! - **Packing**: a deterministic shape-priority packer lays shapes out on
//!   the fixed 4×4 pallet grid, patching gaps with filler boxes
//! - **Coordination**: a worker accumulates trucks until the final one
//!   arrives, then ships the repacked batch
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use palletize::{pipeline, CoordinatorConfig, Truck, FINAL_TRUCK_ID};
//!
//! let (tx, rx, worker) = pipeline(CoordinatorConfig::default())?;
//!
//! tx.send(Truck::new(1).with_pallets(incoming_pallets))?;
//! tx.send(Truck::new(FINAL_TRUCK_ID))?;
//! drop(tx);
//!
//! for truck in rx {
//!     // one acknowledgment per truck; the final one carries the repack
//! }
//! worker.join().unwrap()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `pack` (default): the packing algorithm
//! - `flow` (default): the coordinator and channel pipeline
//! - `serde`: serialization support

/// Core types.
pub use palletize_core as core;

/// The packing algorithm.
#[cfg(feature = "pack")]
pub use palletize_pack as pack;

/// The coordinator and channel pipeline.
#[cfg(feature = "flow")]
pub use palletize_flow as flow;

// Re-export commonly used types at root level
pub use palletize_core::{
    BoxItem, Error, Footprint, Pallet, PlacedBox, Result, Shape, Truck, TruckId, FINAL_TRUCK_ID,
    GRID,
};

#[cfg(feature = "pack")]
pub use palletize_pack::{aggregate, PackResult, PalletPacker, ShapeBins};

#[cfg(feature = "flow")]
pub use palletize_flow::{pipeline, CoordinatorConfig, RepackCoordinator};
