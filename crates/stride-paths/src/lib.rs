//! Generic shortest-path and traversal algorithms.
//!
//! This crate provides the search half of the *stride* toolkit:
//!
//! - **A\*** / **Dijkstra** shortest paths ([`Pathfinder::shortest_path`])
//! - **Dijkstra** multi-source cost maps ([`Pathfinder::dijkstra_map`])
//! - **BFS** unweighted distance maps ([`Pathfinder::bfs_map`])
//! - **Flood fill** connected-component collection ([`Pathfinder::flood_fill`])
//!
//! All queries run through [`Pathfinder`], which owns and reuses internal
//! storage so that repeated queries allocate only for returned paths.
//!
//! Nothing here assumes a grid: a state is any `Clone + Eq + Hash` value,
//! and a problem is described by [`StateSpace`] (unweighted adjacency) or
//! [`WeightedSpace`] (weighted moves plus an optional admissible estimate).
//! Flat grid indices, points and whole combinatorial records all work.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`StateSpace`] | BFS, flood fill |
//! | [`WeightedSpace`] | Dijkstra, A* |

mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod flood;
mod pathfinder;
mod traits;

/// Cumulative search cost. Step costs and estimates must be non-negative.
pub type Cost = i64;

pub use distance::{chebyshev, manhattan};
pub use pathfinder::{Path, PathNode, Pathfinder};
pub use traits::{StateSpace, WeightedSpace};
