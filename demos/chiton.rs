//! Lowest-risk route through the chiton cave, then through the cave
//! tiled five times in each direction.
//!
//! Run: cargo run --bin chiton [-- path/to/input]

use std::error::Error;

use stride_demos::{chiton, input};

const DEFAULT_INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/chiton.txt");

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let grid = chiton::parse(&input::read_to_string(path)?)?;
    log::info!("cave is {}x{}", grid.width(), grid.height());

    let risk = chiton::lowest_total_risk(&grid).ok_or("no route to the exit")?;
    println!("lowest total risk: {risk}");

    let full = chiton::expand(&grid, 5);
    let risk = chiton::lowest_total_risk(&full).ok_or("no route to the exit")?;
    println!("lowest total risk, full cave: {risk}");
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
