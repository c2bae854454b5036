//! **stride-core** — flat-buffer grids, geometry and lattice regions.
//!
//! This crate provides the container types the rest of the *stride*
//! ecosystem is built on: a signed 2D [`Point`], the dense row-major
//! [`Grid`] (text-constructed or dimension-constructed), and the
//! N-dimensional [`Region`] lattice box for brute-force scans.

pub mod geom;
pub mod grid;
pub mod region;

pub use geom::Point;
pub use grid::{valid_indices, Grid, GridDisplay, GridError};
pub use region::{Points, Region};
