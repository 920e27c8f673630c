//! # Palletize Pack
//!
//! The packing algorithm of the Palletize engine: classifying boxes into
//! per-shape bins and laying them out on fresh 4×4 pallets.
//!
//! ## Components
//!
//! - **Aggregator**: [`aggregate`], [`ShapeBins`] - flattens received
//!   pallets into per-shape FIFO bins
//! - **Layout tables**: [`layout`] - the fixed slot positions per shape
//! - **Packer**: [`PalletPacker`] - the greedy shape-priority packer
//! - **Result**: [`PackResult`] - pallets plus summary statistics
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod aggregator;
pub mod layout;
pub mod packer;
pub mod result;

// Re-exports
pub use aggregator::{aggregate, ShapeBins};
pub use packer::PalletPacker;
pub use result::PackResult;
