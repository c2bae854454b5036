use std::hash::Hash;
use std::mem;

use crate::pathfinder::{FrontierEntry, Path, PathNode, Pathfinder};
use crate::traits::WeightedSpace;
use crate::Cost;

impl<S: Clone + Eq + Hash> Pathfinder<S> {
    /// Compute a cheapest path from `start` to the first popped state
    /// satisfying `is_goal`.
    ///
    /// Runs A* when the space supplies a nonzero
    /// [`estimate`](WeightedSpace::estimate), plain Dijkstra otherwise.
    /// Returns the full path (both endpoints included, cumulative costs
    /// attached) or `None` if the frontier drains without reaching a goal.
    pub fn shortest_path<W, G>(&mut self, space: &W, start: S, mut is_goal: G) -> Option<Path<S>>
    where
        W: WeightedSpace<State = S>,
        G: FnMut(&S) -> bool,
    {
        self.best.clear();
        self.parent.clear();
        self.frontier.clear();

        self.best.insert(start.clone(), 0);
        self.frontier.push(FrontierEntry {
            priority: space.estimate(&start),
            cost: 0,
            state: start,
        });

        let mut frontier = mem::take(&mut self.frontier);
        let mut mbuf = mem::take(&mut self.mbuf);

        let mut found = None;
        'search: while let Some(entry) = frontier.pop() {
            // Skip entries superseded by a cheaper rediscovery.
            if self.best.get(&entry.state).is_some_and(|&g| g < entry.cost) {
                continue;
            }
            if is_goal(&entry.state) {
                found = Some((entry.state, entry.cost));
                break 'search;
            }

            mbuf.clear();
            space.moves(&entry.state, &mut mbuf);

            for (next, step) in mbuf.drain(..) {
                debug_assert!(step >= 0, "negative step cost");
                let tentative = entry.cost + step;
                // Record only strict improvements; every queued entry for a
                // state therefore carries a distinct cost.
                if self.best.get(&next).is_some_and(|&g| g <= tentative) {
                    continue;
                }
                self.best.insert(next.clone(), tentative);
                self.parent.insert(next.clone(), entry.state.clone());
                frontier.push(FrontierEntry {
                    priority: tentative + space.estimate(&next),
                    cost: tentative,
                    state: next,
                });
            }
        }

        self.frontier = frontier;
        self.mbuf = mbuf;

        let (goal, total) = found?;
        Some(self.reconstruct(goal, total))
    }

    /// Compute a cheapest path from `start` to the state equal to `goal`.
    pub fn shortest_path_to<W>(&mut self, space: &W, start: S, goal: S) -> Option<Path<S>>
    where
        W: WeightedSpace<State = S>,
    {
        self.shortest_path(space, start, |s| *s == goal)
    }

    /// Walk the parent map backward from `goal` and reverse into a path.
    fn reconstruct(&self, goal: S, total: Cost) -> Path<S> {
        let mut nodes = Vec::new();
        let mut cur = goal;
        loop {
            let cost = self.best[&cur];
            let parent = self.parent.get(&cur).cloned();
            nodes.push(PathNode { state: cur, cost });
            match parent {
                Some(p) => cur = p,
                None => break,
            }
        }
        nodes.reverse();
        Path {
            nodes,
            total_cost: total,
        }
    }
}
