//! Trench-map enhancement: lit pixels after two rounds, then after
//! fifty.
//!
//! Run: cargo run --bin trench [-- path/to/input]

use std::error::Error;

use stride_demos::{input, trench};

const DEFAULT_INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/trench.txt");

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let mut map = trench::TrenchMap::parse(&input::read_to_string(path)?)?;
    log::info!(
        "input image is {}x{}",
        map.image().width(),
        map.image().height()
    );

    for _ in 0..2 {
        map.enhance();
    }
    log::debug!(
        "after 2 rounds:\n{}",
        map.image().display_with(|&lit| if lit { '#' } else { '.' })
    );
    println!(
        "lit after 2 rounds: {}",
        map.lit().ok_or("infinitely many pixels are lit")?
    );

    for _ in 2..50 {
        map.enhance();
    }
    println!(
        "lit after 50 rounds: {}",
        map.lit().ok_or("infinitely many pixels are lit")?
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
