//! Runnable drivers exercising the stride grid and search crates.
//!
//! Each workload is a small, self-contained solver with a binary of the
//! same name; the logic lives here so the sample-answer tests under
//! `tests/` can call it. Sample inputs sit in `data/`.

pub mod basins;
pub mod burrow;
pub mod chiton;
pub mod input;
pub mod octopus;
pub mod reactor;
pub mod trench;
