//! Error types for Palletize.

use thiserror::Error;

/// Result type alias for Palletize operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during repacking operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A box's normalized dimensions match none of the ten known shapes.
    ///
    /// This is a contract violation by whatever produced the box data and
    /// aborts the repack run; it is never recovered inside the engine.
    #[error("invalid box size: w={width} l={length}")]
    InvalidBoxSize {
        /// Normalized width of the offending box.
        width: u8,
        /// Normalized length of the offending box.
        length: u8,
    },
}
