//! Octopus flash tally: total flashes over a hundred steps and the
//! first step where the whole grid flashes at once.
//!
//! Run: cargo run --bin octopus [-- path/to/input]

use std::error::Error;

use stride_demos::{input, octopus};

const DEFAULT_INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/octopus.txt");

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let grid = octopus::parse(&input::read_to_string(path)?)?;

    println!(
        "flashes after 100 steps: {}",
        octopus::flashes_after(grid.clone(), 100)
    );
    println!(
        "first synchronized step: {}",
        octopus::first_synchronized_step(grid)
    );
    Ok(())
}

fn main() {
    env_logger::init();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());
    if let Err(e) = run(&path) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
