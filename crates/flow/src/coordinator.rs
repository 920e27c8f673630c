//! The repack coordinator worker.

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use palletize_core::{Pallet, Result, Truck, TruckId, FINAL_TRUCK_ID};
use palletize_pack::{aggregate, PalletPacker};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Channel capacity used by [`pipeline`] unless overridden.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// Configuration for the repack coordinator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordinatorConfig {
    /// Truck id that triggers the repack and marks the batch as final.
    pub final_truck_id: TruckId,

    /// Capacity of the channels created by [`pipeline`].
    pub channel_capacity: usize,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            final_truck_id: FINAL_TRUCK_ID,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl CoordinatorConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the final truck id.
    pub fn with_final_truck_id(mut self, id: TruckId) -> Self {
        self.final_truck_id = id;
        self
    }

    /// Sets the channel capacity used by [`pipeline`].
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }
}

/// Coordinator state: accumulating pallets, or done after the final truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Accumulating,
    Finished,
}

/// Long-lived worker that accumulates incoming trucks' pallets and
/// repacks the whole batch when the final truck arrives.
///
/// The coordinator owns its accumulated pallet set exclusively; it is the
/// only reader and writer, so no locking is involved. Trucks are
/// processed strictly sequentially, one acknowledgment per truck, in
/// arrival order.
#[derive(Debug)]
pub struct RepackCoordinator {
    config: CoordinatorConfig,
    packer: PalletPacker,
    accumulated: Vec<Pallet>,
    state: State,
}

impl RepackCoordinator {
    /// Creates a coordinator with the given configuration.
    pub fn new(config: CoordinatorConfig) -> Self {
        Self {
            config,
            packer: PalletPacker::new(),
            accumulated: Vec::new(),
            state: State::Accumulating,
        }
    }

    /// Creates a coordinator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(CoordinatorConfig::default())
    }

    /// Returns true once the final truck has been processed.
    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    /// Processes one incoming truck, returning the truck to send
    /// downstream.
    ///
    /// The truck's pallets join the accumulated set. A non-final truck is
    /// acknowledged with an empty truck under the same id; the final truck
    /// drains the accumulator through the aggregator and packer and
    /// carries the repacked pallets out under its id.
    pub fn process(&mut self, truck: Truck) -> Result<Truck> {
        let id = truck.id;
        self.accumulated.extend(truck.pallets);

        if id != self.config.final_truck_id {
            log::debug!(
                "truck {id} unloaded, {} pallets accumulated",
                self.accumulated.len()
            );
            return Ok(Truck::new(id));
        }

        // Draining the accumulator keeps each repack self-contained: a
        // reused final id flushes only what arrived since the last flush.
        let pallets = std::mem::take(&mut self.accumulated);
        let incoming_count = pallets.len();
        let bins = aggregate(&pallets)?;
        let result = self.packer.pack(bins);

        log::info!(
            "final truck {id}: repacked {} boxes from {incoming_count} pallets onto {}",
            result.boxes_packed,
            result.pallet_count()
        );

        self.state = State::Finished;
        Ok(Truck::new(id).with_pallets(result.into_pallets()))
    }

    /// Runs the coordinator over the given channels until the inbound
    /// stream ends.
    ///
    /// Trucks are received and acknowledged strictly one at a time; both
    /// channel ends are ordinary blocking hand-offs. The outbound sender
    /// is dropped on every exit path, so downstream consumers always see
    /// the stream close — even when no final truck ever arrived. A
    /// classification error aborts the run and is returned after logging
    /// the offending dimensions.
    pub fn run(mut self, inbound: Receiver<Truck>, outbound: Sender<Truck>) -> Result<()> {
        for truck in inbound.iter() {
            let reply = match self.process(truck) {
                Ok(reply) => reply,
                Err(err) => {
                    log::error!("aborting repack run: {err}");
                    return Err(err);
                }
            };

            if outbound.send(reply).is_err() {
                log::warn!("output consumer disconnected, stopping early");
                break;
            }
        }

        if !self.is_finished() {
            log::debug!(
                "input exhausted without a final truck; {} pallets left unshipped",
                self.accumulated.len()
            );
        }

        // `outbound` drops here, closing the outgoing stream.
        Ok(())
    }

    /// Spawns the coordinator on a dedicated worker thread.
    pub fn spawn(
        self,
        inbound: Receiver<Truck>,
        outbound: Sender<Truck>,
    ) -> io::Result<JoinHandle<Result<()>>> {
        thread::Builder::new()
            .name("repack-coordinator".into())
            .spawn(move || self.run(inbound, outbound))
    }
}

/// Creates a bounded channel pipeline with a spawned coordinator.
///
/// Returns the sender for incoming trucks, the receiver for outgoing
/// trucks, and the worker's join handle. Dropping the sender ends the
/// incoming stream; the coordinator then closes the outgoing side.
pub fn pipeline(
    config: CoordinatorConfig,
) -> io::Result<(Sender<Truck>, Receiver<Truck>, JoinHandle<Result<()>>)> {
    let (in_tx, in_rx) = crossbeam_channel::bounded(config.channel_capacity);
    let (out_tx, out_rx) = crossbeam_channel::bounded(config.channel_capacity);

    let handle = RepackCoordinator::new(config).spawn(in_rx, out_tx)?;
    Ok((in_tx, out_rx, handle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use palletize_core::{BoxItem, PlacedBox};

    fn pallet_of(dims: &[(u8, u8)]) -> Pallet {
        Pallet::with_boxes(
            dims.iter()
                .map(|&(w, l)| PlacedBox::new(BoxItem::new(w, l), 0, 0))
                .collect(),
        )
    }

    #[test]
    fn test_non_final_truck_gets_empty_ack() {
        let mut coordinator = RepackCoordinator::with_defaults();
        let ack = coordinator
            .process(Truck::new(5).with_pallets(vec![pallet_of(&[(2, 2)])]))
            .unwrap();

        assert_eq!(ack.id, 5);
        assert_eq!(ack.pallet_count(), 0);
        assert!(!coordinator.is_finished());
    }

    #[test]
    fn test_final_truck_carries_the_repack() {
        let mut coordinator = RepackCoordinator::with_defaults();
        coordinator
            .process(Truck::new(1).with_pallets(vec![pallet_of(&[(4, 4)])]))
            .unwrap();
        let out = coordinator
            .process(Truck::new(FINAL_TRUCK_ID).with_pallets(vec![pallet_of(&[(4, 2), (4, 2)])]))
            .unwrap();

        assert_eq!(out.id, FINAL_TRUCK_ID);
        assert_eq!(out.box_count(), 3);
        assert_eq!(out.pallet_count(), 2);
        assert!(coordinator.is_finished());
    }

    #[test]
    fn test_accumulator_drains_on_repack() {
        let mut coordinator = RepackCoordinator::with_defaults();
        coordinator
            .process(Truck::new(FINAL_TRUCK_ID).with_pallets(vec![pallet_of(&[(1, 1)])]))
            .unwrap();

        // A reused final id repacks only what arrived since.
        let out = coordinator
            .process(Truck::new(FINAL_TRUCK_ID))
            .unwrap();
        assert_eq!(out.box_count(), 0);
    }

    #[test]
    fn test_invalid_box_aborts_processing() {
        let mut coordinator = RepackCoordinator::with_defaults();
        let err = coordinator
            .process(Truck::new(FINAL_TRUCK_ID).with_pallets(vec![pallet_of(&[(5, 1)])]))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid box size: w=5 l=1");
    }

    #[test]
    fn test_custom_final_id() {
        let config = CoordinatorConfig::new().with_final_truck_id(9);
        let mut coordinator = RepackCoordinator::new(config);

        let ack = coordinator.process(Truck::new(FINAL_TRUCK_ID)).unwrap();
        assert_eq!(ack.pallet_count(), 0);
        assert!(!coordinator.is_finished());

        coordinator.process(Truck::new(9)).unwrap();
        assert!(coordinator.is_finished());
    }
}
