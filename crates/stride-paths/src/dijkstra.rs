use std::hash::Hash;
use std::mem;

use crate::Cost;
use crate::pathfinder::{FrontierEntry, PathNode, Pathfinder};
use crate::traits::WeightedSpace;

impl<S: Clone + Eq + Hash> Pathfinder<S> {
    /// Compute a multi-source Dijkstra cost map.
    ///
    /// Every source starts at cost 0. Expansion is pruned where the
    /// cumulative cost would exceed `max_cost`. The returned slice holds
    /// every settled state in ascending cost order and stays queryable
    /// through [`dijkstra_at`](Self::dijkstra_at) until the next map call.
    pub fn dijkstra_map<W>(&mut self, space: &W, sources: &[S], max_cost: Cost) -> &[PathNode<S>]
    where
        W: WeightedSpace<State = S>,
    {
        self.dijkstra_map.clear();
        self.dijkstra_results.clear();
        self.frontier.clear();

        for src in sources {
            if self.dijkstra_map.contains_key(src) {
                continue;
            }
            self.dijkstra_map.insert(src.clone(), 0);
            self.frontier.push(FrontierEntry {
                priority: 0,
                cost: 0,
                state: src.clone(),
            });
        }

        let mut frontier = mem::take(&mut self.frontier);
        let mut mbuf = mem::take(&mut self.mbuf);

        while let Some(entry) = frontier.pop() {
            // Skip entries superseded by a cheaper rediscovery.
            if self
                .dijkstra_map
                .get(&entry.state)
                .is_some_and(|&g| g < entry.cost)
            {
                continue;
            }
            self.dijkstra_results.push(PathNode {
                state: entry.state.clone(),
                cost: entry.cost,
            });

            mbuf.clear();
            space.moves(&entry.state, &mut mbuf);

            for (next, step) in mbuf.drain(..) {
                debug_assert!(step >= 0, "negative step cost");
                let tentative = entry.cost + step;
                if tentative > max_cost {
                    continue;
                }
                if self.dijkstra_map.get(&next).is_some_and(|&g| g <= tentative) {
                    continue;
                }
                self.dijkstra_map.insert(next.clone(), tentative);
                frontier.push(FrontierEntry {
                    priority: tentative,
                    cost: tentative,
                    state: next,
                });
            }
        }

        self.frontier = frontier;
        self.mbuf = mbuf;
        &self.dijkstra_results
    }

    /// Cost of `state` in the last [`dijkstra_map`](Self::dijkstra_map)
    /// call, or `None` if it was not reached.
    pub fn dijkstra_at(&self, state: &S) -> Option<Cost> {
        self.dijkstra_map.get(state).copied()
    }
}
