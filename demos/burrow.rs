//! Least energy to organize the amphipod burrow, as given and with the
//! folded rows unfolded.
//!
//! Run: cargo run --bin burrow [-- path/to/input]

use std::error::Error;

use stride_demos::{burrow, input};

const DEFAULT_INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/burrow.txt");

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let (start, depth) = burrow::Burrow::parse(&input::read_to_string(path)?)?;
    log::info!("rooms are {depth} deep");

    let energy = burrow::least_energy(&start, depth).ok_or("the burrow cannot be organized")?;
    println!("least energy: {energy}");

    // The unfolded variant only applies to the standard two-row diagram.
    if depth == 2 {
        let full = start.unfold();
        let energy =
            burrow::least_energy(&full, 4).ok_or("the unfolded burrow cannot be organized")?;
        println!("least energy, unfolded: {energy}");
    }
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
