//! # Palletize Flow
//!
//! The pipeline layer of the Palletize engine: a long-lived coordinator
//! worker that receives trucks over a channel, accumulates their pallets,
//! repacks the batch when the final truck arrives, and acknowledges every
//! truck downstream in arrival order.
//!
//! The coordinator is strictly sequential: one dedicated worker thread,
//! one truck in flight, blocking hand-offs on both channel ends. Stream
//! termination is explicit - when the incoming channel disconnects, the
//! coordinator drops its outgoing sender so consumers observe the end of
//! the stream.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod coordinator;

// Re-exports
pub use coordinator::{
    pipeline, CoordinatorConfig, RepackCoordinator, DEFAULT_CHANNEL_CAPACITY,
};
