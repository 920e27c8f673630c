//! # Palletize Core
//!
//! Core types for the Palletize pallet consolidation engine.
//!
//! This crate provides the foundational types shared between the packing
//! algorithm and the pipeline crates.
//!
//! ## Core Components
//!
//! - **Shapes**: [`Shape`] - the ten canonical box shapes and their
//!   classifier
//! - **Boxes**: [`BoxItem`], [`PlacedBox`] - box geometry and grid
//!   placements
//! - **Grid**: [`Footprint`], [`GRID`] - pallet grid geometry
//! - **Carriers**: [`Pallet`], [`Truck`] - the surfaces and vehicles boxes
//!   travel on
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod grid;
pub mod item;
pub mod pallet;
pub mod shape;
pub mod truck;

// Re-exports
pub use error::{Error, Result};
pub use grid::{Footprint, GRID};
pub use item::{BoxItem, PlacedBox};
pub use pallet::Pallet;
pub use shape::Shape;
pub use truck::{Truck, TruckId, FINAL_TRUCK_ID};
