use std::hash::Hash;

use crate::Cost;

/// Minimal search interface — unweighted neighbor enumeration.
///
/// States are arbitrary: flat grid indices, points, or whole composite
/// records, as long as they can be cloned, compared and hashed.
pub trait StateSpace {
    /// The node type being searched over.
    type State: Clone + Eq + Hash;

    /// Append the neighbors of `s` into `buf`. The engine clears `buf`
    /// before calling.
    fn neighbors(&self, s: &Self::State, buf: &mut Vec<Self::State>);
}

/// Search interface with weighted moves and an optional goal estimate.
pub trait WeightedSpace {
    /// The node type being searched over.
    type State: Clone + Eq + Hash;

    /// Append `(successor, step cost)` pairs for `s` into `buf`. Step costs
    /// must be >= 0. The engine clears `buf` before calling.
    fn moves(&self, s: &Self::State, buf: &mut Vec<(Self::State, Cost)>);

    /// Estimated remaining cost from `s` to the nearest goal.
    /// Must never overestimate the true cost (admissible). The default of 0
    /// turns every query into plain Dijkstra.
    fn estimate(&self, _s: &Self::State) -> Cost {
        0
    }
}
