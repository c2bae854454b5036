//! Reactor reboot: cells left on in the initialization region after
//! replaying every instruction.
//!
//! Run: cargo run --bin reactor [-- path/to/input]

use std::error::Error;

use stride_demos::{input, reactor};

const DEFAULT_INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/reactor.txt");

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let steps: Vec<reactor::Step> = input::read_records(path)?;
    log::info!("{} reboot steps", steps.len());

    let on = reactor::active_count(&steps, reactor::init_region());
    println!("cells on in the initialization region: {on}");
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
