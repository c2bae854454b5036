use std::hash::Hash;
use std::mem;

use crate::Cost;
use crate::pathfinder::{PathNode, Pathfinder};
use crate::traits::StateSpace;

impl<S: Clone + Eq + Hash> Pathfinder<S> {
    /// Compute a multi-source breadth-first distance map.
    ///
    /// Each step costs one hop. Expansion stops where the distance would
    /// exceed `max_depth`. The returned slice holds every reached state in
    /// discovery order (non-decreasing depth) and stays queryable through
    /// [`bfs_at`](Self::bfs_at) until the next map call.
    pub fn bfs_map<P>(&mut self, space: &P, sources: &[S], max_depth: Cost) -> &[PathNode<S>]
    where
        P: StateSpace<State = S>,
    {
        self.bfs_map.clear();
        self.bfs_results.clear();
        self.bfs_queue.clear();

        for src in sources {
            if self.bfs_map.contains_key(src) {
                continue;
            }
            self.bfs_map.insert(src.clone(), 0);
            self.bfs_queue.push_back(src.clone());
            self.bfs_results.push(PathNode {
                state: src.clone(),
                cost: 0,
            });
        }

        let mut queue = mem::take(&mut self.bfs_queue);
        let mut nbuf = mem::take(&mut self.nbuf);

        while let Some(cur) = queue.pop_front() {
            let depth = self.bfs_map[&cur];

            nbuf.clear();
            space.neighbors(&cur, &mut nbuf);

            for next in nbuf.drain(..) {
                if self.bfs_map.contains_key(&next) {
                    continue;
                }
                let nd = depth + 1;
                if nd > max_depth {
                    continue;
                }
                self.bfs_map.insert(next.clone(), nd);
                self.bfs_results.push(PathNode {
                    state: next.clone(),
                    cost: nd,
                });
                queue.push_back(next);
            }
        }

        self.bfs_queue = queue;
        self.nbuf = nbuf;
        &self.bfs_results
    }

    /// Distance of `state` in the last [`bfs_map`](Self::bfs_map) call, or
    /// `None` if it was not reached.
    pub fn bfs_at(&self, state: &S) -> Option<Cost> {
        self.bfs_map.get(state).copied()
    }
}
