use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::Cost;

/// A state with its cumulative cost from the search origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode<S> {
    pub state: S,
    pub cost: Cost,
}

/// A start-to-goal path as returned by [`Pathfinder::shortest_path`].
///
/// `nodes` runs from the start (cumulative cost 0) to the goal (cumulative
/// cost equal to `total_cost`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<S> {
    pub nodes: Vec<PathNode<S>>,
    pub total_cost: Cost,
}

impl<S> Path<S> {
    /// The visited states in order, without their costs.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.nodes.iter().map(|n| &n.state)
    }
}

// ---------------------------------------------------------------------------
// Internal frontier entry for A*/Dijkstra priority-queue searches
// ---------------------------------------------------------------------------

/// Heap entry ordered by `priority` (then `cost`), reversed so the max-heap
/// pops the smallest first. The carried state takes no part in the ordering.
#[derive(Clone)]
pub(crate) struct FrontierEntry<S> {
    pub(crate) priority: Cost,
    pub(crate) cost: Cost,
    pub(crate) state: S,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.cost == other.cost
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then(other.cost.cmp(&self.cost))
    }
}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Central coordinator for search queries over one state type.
///
/// `Pathfinder` owns all internal storage (the heap frontier, best-cost and
/// parent maps, BFS queue, flood-fill bookkeeping, neighbor scratch buffers)
/// so that repeated queries reuse allocations instead of rebuilding them.
/// Query methods borrow the searched space; the same `Pathfinder` can serve
/// any number of spaces of the same state type, one query at a time.
///
/// Map queries ([`dijkstra_map`](Self::dijkstra_map),
/// [`bfs_map`](Self::bfs_map)) keep their output readable through
/// [`dijkstra_at`](Self::dijkstra_at) / [`bfs_at`](Self::bfs_at) until the
/// next query of the same kind; the two kinds do not disturb each other.
pub struct Pathfinder<S> {
    // shortest-path caches
    pub(crate) frontier: BinaryHeap<FrontierEntry<S>>,
    pub(crate) best: HashMap<S, Cost>,
    pub(crate) parent: HashMap<S, S>,
    // Dijkstra map caches
    pub(crate) dijkstra_map: HashMap<S, Cost>,
    pub(crate) dijkstra_results: Vec<PathNode<S>>,
    // BFS caches
    pub(crate) bfs_map: HashMap<S, Cost>,
    pub(crate) bfs_queue: VecDeque<S>,
    pub(crate) bfs_results: Vec<PathNode<S>>,
    // flood-fill caches
    pub(crate) flood_seen: HashSet<S>,
    pub(crate) flood_stack: Vec<S>,
    // shared scratch buffers for neighbor/move generation
    pub(crate) nbuf: Vec<S>,
    pub(crate) mbuf: Vec<(S, Cost)>,
}

impl<S> Pathfinder<S> {
    /// Create an empty coordinator. Storage grows with the first queries
    /// and is reused afterwards.
    pub fn new() -> Self {
        Self {
            frontier: BinaryHeap::new(),
            best: HashMap::new(),
            parent: HashMap::new(),
            dijkstra_map: HashMap::new(),
            dijkstra_results: Vec::new(),
            bfs_map: HashMap::new(),
            bfs_queue: VecDeque::new(),
            bfs_results: Vec::new(),
            flood_seen: HashSet::new(),
            flood_stack: Vec::new(),
            nbuf: Vec::with_capacity(8),
            mbuf: Vec::with_capacity(8),
        }
    }
}

impl<S> Default for Pathfinder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{StateSpace, WeightedSpace};
    use crate::{Cost, manhattan};
    use stride_core::{Grid, Point, valid_indices};

    // The classic risk-grid fixture: moving into a cell costs its digit.
    const RISKS: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581";

    struct RiskGrid {
        grid: Grid<u32>,
        goal: Point,
        guided: bool,
    }

    impl RiskGrid {
        fn new(text: &str, guided: bool) -> Self {
            let grid = Grid::parse(text, |c| c.to_digit(10).unwrap()).unwrap();
            let goal = Point::new(grid.width() as i32 - 1, grid.height() as i32 - 1);
            Self { grid, goal, guided }
        }

        fn goal_index(&self) -> usize {
            self.grid.index_of(self.goal).unwrap()
        }
    }

    impl WeightedSpace for RiskGrid {
        type State = usize;

        fn moves(&self, &i: &usize, buf: &mut Vec<(usize, Cost)>) {
            for n in valid_indices(self.grid.cardinal_neighbors(i)) {
                buf.push((n, self.grid[n] as Cost));
            }
        }

        fn estimate(&self, &i: &usize) -> Cost {
            if self.guided {
                manhattan(self.grid.point_of(i), self.goal)
            } else {
                0
            }
        }
    }

    // Boolean floor plan: `.` is open, `#` is wall.
    struct Floor {
        grid: Grid<bool>,
    }

    impl Floor {
        fn new(text: &str) -> Self {
            Self {
                grid: Grid::parse(text, |c| c == '.').unwrap(),
            }
        }
    }

    impl StateSpace for Floor {
        type State = usize;

        fn neighbors(&self, &i: &usize, buf: &mut Vec<usize>) {
            buf.extend(valid_indices(self.grid.cardinal_neighbors(i)).filter(|&n| self.grid[n]));
        }
    }

    impl WeightedSpace for Floor {
        type State = usize;

        fn moves(&self, &i: &usize, buf: &mut Vec<(usize, Cost)>) {
            buf.extend(
                valid_indices(self.grid.cardinal_neighbors(i))
                    .filter(|&n| self.grid[n])
                    .map(|n| (n, 1)),
            );
        }
    }

    #[test]
    fn shortest_path_total_and_endpoints() {
        let space = RiskGrid::new(RISKS, false);
        let mut pf = Pathfinder::new();
        let path = pf.shortest_path_to(&space, 0, space.goal_index()).unwrap();

        assert_eq!(path.total_cost, 40);
        assert_eq!(path.nodes.first().unwrap().state, 0);
        assert_eq!(path.nodes.first().unwrap().cost, 0);
        assert_eq!(path.nodes.last().unwrap().state, space.goal_index());
        assert_eq!(path.nodes.last().unwrap().cost, 40);

        // Cumulative costs never decrease and consecutive states stay adjacent.
        for pair in path.nodes.windows(2) {
            assert!(pair[0].cost <= pair[1].cost);
            let a = space.grid.point_of(pair[0].state);
            let b = space.grid.point_of(pair[1].state);
            assert_eq!(manhattan(a, b), 1, "{a} -> {b} is not a cardinal step");
        }
    }

    #[test]
    fn guided_search_finds_the_same_cost() {
        let blind = RiskGrid::new(RISKS, false);
        let guided = RiskGrid::new(RISKS, true);
        let mut pf = Pathfinder::new();
        let plain = pf.shortest_path_to(&blind, 0, blind.goal_index()).unwrap();
        let astar = pf.shortest_path_to(&guided, 0, guided.goal_index()).unwrap();
        assert_eq!(plain.total_cost, astar.total_cost);
    }

    #[test]
    fn start_satisfying_goal_returns_immediately() {
        let space = RiskGrid::new(RISKS, false);
        let mut pf = Pathfinder::new();
        let path = pf.shortest_path(&space, 17, |_| true).unwrap();
        assert_eq!(path.total_cost, 0);
        assert_eq!(path.nodes.len(), 1);
        assert_eq!(path.nodes[0].state, 17);
    }

    #[test]
    fn predicate_goal_takes_the_cheapest_match() {
        // Right costs 9, down costs 1; both cells satisfy the goal.
        let space = RiskGrid::new("19\n11", false);
        let mut pf = Pathfinder::new();
        let path = pf.shortest_path(&space, 0, |&i| i == 1 || i == 2).unwrap();
        assert_eq!(path.total_cost, 1);
        assert_eq!(path.nodes.last().unwrap().state, 2);
    }

    #[test]
    fn unreachable_goal_returns_none() {
        let space = Floor::new("..#..\n..#..\n..#..");
        let mut pf = Pathfinder::new();
        assert!(pf.shortest_path_to(&space, 0, 4).is_none());
        // Still reachable things keep working on the same coordinator.
        assert!(pf.shortest_path_to(&space, 0, 11).is_some());
    }

    #[test]
    fn zero_cost_steps_are_legal() {
        struct Conveyor;
        impl WeightedSpace for Conveyor {
            type State = u8;
            fn moves(&self, &s: &u8, buf: &mut Vec<(u8, Cost)>) {
                if s < 3 {
                    buf.push((s + 1, 0));
                }
            }
        }
        let mut pf = Pathfinder::new();
        let path = pf.shortest_path_to(&Conveyor, 0u8, 3u8).unwrap();
        assert_eq!(path.total_cost, 0);
        assert_eq!(path.nodes.len(), 4);
    }

    #[test]
    fn implicit_space_increment_or_double() {
        struct Machine;
        impl WeightedSpace for Machine {
            type State = u64;
            fn moves(&self, &s: &u64, buf: &mut Vec<(u64, Cost)>) {
                buf.push((s + 1, 1));
                buf.push((s * 2, 1));
            }
        }
        let mut pf = Pathfinder::new();
        let path = pf.shortest_path_to(&Machine, 1u64, 17u64).unwrap();
        assert_eq!(path.total_cost, 5);
        let states: Vec<u64> = path.states().copied().collect();
        assert_eq!(states, vec![1, 2, 4, 8, 16, 17]);
    }

    #[test]
    fn dijkstra_map_settles_in_cost_order() {
        let space = RiskGrid::new(RISKS, false);
        let mut pf = Pathfinder::new();
        let nodes = pf.dijkstra_map(&space, &[0], Cost::MAX);

        assert_eq!(nodes[0].state, 0);
        assert_eq!(nodes[0].cost, 0);
        assert_eq!(nodes.len(), space.grid.len());
        for pair in nodes.windows(2) {
            assert!(pair[0].cost <= pair[1].cost, "map not settled in order");
        }
        assert_eq!(pf.dijkstra_at(&space.goal_index()), Some(40));
    }

    #[test]
    fn dijkstra_map_budget_prunes() {
        let space = RiskGrid::new(RISKS, false);
        let mut pf = Pathfinder::new();
        let nodes = pf.dijkstra_map(&space, &[0], 10);
        assert!(nodes.iter().all(|n| n.cost <= 10));
        assert!(nodes.len() < space.grid.len());
        assert_eq!(pf.dijkstra_at(&space.goal_index()), None);
    }

    #[test]
    fn dijkstra_map_multiple_sources() {
        let space = RiskGrid::new("111\n111\n111", false);
        let mut pf = Pathfinder::new();
        pf.dijkstra_map(&space, &[0, 8], Cost::MAX);
        assert_eq!(pf.dijkstra_at(&0), Some(0));
        assert_eq!(pf.dijkstra_at(&8), Some(0));
        // The middle cell is two unit steps from either corner.
        assert_eq!(pf.dijkstra_at(&4), Some(2));
    }

    #[test]
    fn bfs_map_counts_hops() {
        let space = Floor::new(".....\n.....\n.....\n.....\n.....");
        let center = 12;
        let mut pf = Pathfinder::new();
        let nodes = pf.bfs_map(&space, &[center], Cost::MAX).to_vec();
        assert_eq!(nodes.len(), 25);
        assert_eq!(pf.bfs_at(&center), Some(0));
        assert_eq!(pf.bfs_at(&0), Some(4));
        assert_eq!(pf.bfs_at(&24), Some(4));
        for pair in nodes.windows(2) {
            assert!(pair[0].cost <= pair[1].cost);
        }
    }

    #[test]
    fn bfs_map_depth_budget() {
        let space = Floor::new(".....\n.....\n.....\n.....\n.....");
        let mut pf = Pathfinder::new();
        let nodes = pf.bfs_map(&space, &[12], 1);
        // The center plus its four cardinal neighbors.
        assert_eq!(nodes.len(), 5);
        assert_eq!(pf.bfs_at(&0), None);
    }

    #[test]
    fn bfs_sources_deduplicate() {
        let space = Floor::new("...\n...");
        let mut pf = Pathfinder::new();
        let nodes = pf.bfs_map(&space, &[0, 0, 0], Cost::MAX);
        assert_eq!(nodes.iter().filter(|n| n.state == 0).count(), 1);
        assert_eq!(nodes.len(), 6);
    }

    #[test]
    fn bfs_agrees_with_unit_cost_dijkstra() {
        use rand::{rngs::StdRng, RngExt, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::filled(20, 20, true);
        for cell in grid.cells_mut() {
            *cell = rng.random_bool(0.75);
        }
        grid[0] = true;
        let space = Floor { grid };

        let mut pf = Pathfinder::new();
        let bfs: Vec<_> = pf.bfs_map(&space, &[0], Cost::MAX).to_vec();
        pf.dijkstra_map(&space, &[0], Cost::MAX);

        for node in &bfs {
            assert_eq!(
                pf.dijkstra_at(&node.state),
                Some(node.cost),
                "hop count and unit-cost distance disagree at {}",
                node.state
            );
        }
        assert_eq!(bfs.len(), pf.dijkstra_results.len());
    }

    #[test]
    fn flood_fill_collects_the_component() {
        let space = Floor::new("..#.\n..#.\n####");
        let mut pf = Pathfinder::new();
        let left = pf.flood_fill(&space, 0);
        assert_eq!(left[0], 0);
        let mut sorted = left.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 4, 5]);
        // The right-hand component is separate.
        let right = pf.flood_fill(&space, 3);
        assert_eq!(right.len(), 2);
    }

    #[test]
    fn flood_fill_isolated_seed() {
        let space = Floor::new(".#.\n###");
        let mut pf = Pathfinder::new();
        assert_eq!(pf.flood_fill(&space, 0), vec![0]);
    }

    #[test]
    fn queries_reuse_the_coordinator() {
        let risks = RiskGrid::new(RISKS, false);
        let floor = Floor::new(".....\n.....\n.....");
        let mut pf = Pathfinder::new();

        let first = pf.shortest_path_to(&risks, 0, risks.goal_index()).unwrap();
        pf.dijkstra_map(&risks, &[0], Cost::MAX);
        pf.bfs_map(&floor, &[0], Cost::MAX);
        let again = pf.shortest_path_to(&risks, 0, risks.goal_index()).unwrap();

        assert_eq!(first, again);
        // Earlier map outputs survive unrelated path queries.
        assert_eq!(pf.dijkstra_at(&risks.goal_index()), Some(40));
        assert_eq!(pf.bfs_at(&14), Some(14 % 5 + 14 / 5));
    }
}
