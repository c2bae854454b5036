//! Smoke-basin survey: risk levels of the low points and the product
//! of the three largest basins.
//!
//! Run: cargo run --bin basins [-- path/to/input]

use std::error::Error;

use stride_demos::{basins, input};

const DEFAULT_INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/basins.txt");

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let grid = basins::parse(&input::read_to_string(path)?)?;
    log::info!(
        "{} low points on a {}x{} floor",
        basins::low_points(&grid).len(),
        grid.width(),
        grid.height()
    );

    println!("risk level sum: {}", basins::risk_level_sum(&grid));
    println!(
        "three largest basins: {}",
        basins::largest_basins_product(&grid)
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
