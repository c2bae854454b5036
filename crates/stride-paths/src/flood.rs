//! Flood fill over arbitrary state spaces.

use std::hash::Hash;
use std::mem;

use crate::pathfinder::Pathfinder;
use crate::traits::StateSpace;

impl<S: Clone + Eq + Hash> Pathfinder<S> {
    /// Collect every state connected to `seed`, seed first.
    ///
    /// Connectivity is whatever [`StateSpace::neighbors`] says it is. The
    /// traversal is an iterative depth-first fill; states are recorded at
    /// discovery, so the order past the seed is unspecified.
    pub fn flood_fill<P>(&mut self, space: &P, seed: S) -> Vec<S>
    where
        P: StateSpace<State = S>,
    {
        self.flood_seen.clear();
        self.flood_stack.clear();

        let mut result = Vec::new();
        self.flood_seen.insert(seed.clone());
        self.flood_stack.push(seed.clone());
        result.push(seed);

        let mut stack = mem::take(&mut self.flood_stack);
        let mut nbuf = mem::take(&mut self.nbuf);

        while let Some(cur) = stack.pop() {
            nbuf.clear();
            space.neighbors(&cur, &mut nbuf);

            for next in nbuf.drain(..) {
                if self.flood_seen.insert(next.clone()) {
                    result.push(next.clone());
                    stack.push(next);
                }
            }
        }

        self.flood_stack = stack;
        self.nbuf = nbuf;
        result
    }
}
