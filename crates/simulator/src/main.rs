//! Palletize truck-stream simulator CLI.

use std::thread;

use clap::Parser;
use palletize_core::Truck;
use palletize_flow::{pipeline, CoordinatorConfig, DEFAULT_CHANNEL_CAPACITY};
use palletize_simulator::{generate_trucks, GeneratorConfig, Report};

#[derive(Parser)]
#[command(name = "palletize-sim")]
#[command(about = "Random truck-stream driver for the Palletize engine")]
#[command(version)]
struct Cli {
    /// Number of trucks to send; the last one is the final truck
    #[arg(short, long, default_value = "10")]
    trucks: usize,

    /// Pallets per truck
    #[arg(short, long, default_value = "4")]
    pallets_per_truck: usize,

    /// Maximum boxes per generated pallet
    #[arg(short = 'b', long, default_value = "6")]
    max_boxes_per_pallet: usize,

    /// RNG seed for a reproducible stream
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Channel capacity of the pipeline
    #[arg(short, long, default_value_t = DEFAULT_CHANNEL_CAPACITY)]
    capacity: usize,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let generator = GeneratorConfig {
        trucks: cli.trucks,
        pallets_per_truck: cli.pallets_per_truck,
        max_boxes_per_pallet: cli.max_boxes_per_pallet,
        seed: cli.seed,
    };
    let input = generate_trucks(&generator);
    log::info!(
        "sending {} trucks, {} boxes total",
        input.len(),
        input.iter().map(Truck::box_count).sum::<usize>()
    );

    let config = CoordinatorConfig::new().with_channel_capacity(cli.capacity);
    let (tx, rx, worker) = pipeline(config)?;

    // Feed from a separate thread so the bounded channels keep flowing
    // while we collect acknowledgments here.
    let feed = input.clone();
    let feeder = thread::spawn(move || {
        for truck in feed {
            if tx.send(truck).is_err() {
                break;
            }
        }
    });

    let output: Vec<Truck> = rx.iter().collect();

    feeder.join().expect("feeder thread panicked");
    worker.join().expect("coordinator thread panicked")?;

    let report = Report::from_streams(&input, &output);
    println!("{report}");

    if !report.conserved() {
        return Err("box conservation violated".into());
    }
    if !report.all_valid() {
        return Err("invalid output pallets".into());
    }
    Ok(())
}
