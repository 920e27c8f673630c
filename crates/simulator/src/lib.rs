//! Truck-stream simulation for Palletize
//!
//! This crate provides:
//! - A random truck source producing valid, partially-filled pallets
//! - A statistics report comparing the stream before and after repacking

mod generator;
mod report;

pub use generator::{generate_trucks, GeneratorConfig};
pub use report::Report;
