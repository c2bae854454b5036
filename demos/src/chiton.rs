//! Lowest-total-risk walk across a cave of digit risk levels.
//!
//! Entering a cell costs its digit; the walk goes from the top-left corner
//! to the bottom-right one, moving cardinally. The full map tiles the
//! scanned grid five times in each direction with risks wrapping 9 -> 1.

use stride_core::{Grid, GridError, Point, valid_indices};
use stride_paths::{Cost, Pathfinder, WeightedSpace, manhattan};

pub fn parse(text: &str) -> Result<Grid<u32>, GridError> {
    Grid::parse(text, |c| c.to_digit(10).unwrap_or(0))
}

/// The cave as a weighted space over flat indices, guided toward the
/// bottom-right corner by a manhattan estimate.
pub struct RiskMap<'a> {
    grid: &'a Grid<u32>,
    goal: Point,
}

impl<'a> RiskMap<'a> {
    pub fn new(grid: &'a Grid<u32>) -> Self {
        let goal = Point::new(grid.width() as i32 - 1, grid.height() as i32 - 1);
        Self { grid, goal }
    }
}

impl WeightedSpace for RiskMap<'_> {
    type State = usize;

    fn moves(&self, &i: &usize, buf: &mut Vec<(usize, Cost)>) {
        buf.extend(
            valid_indices(self.grid.cardinal_neighbors(i)).map(|n| (n, Cost::from(self.grid[n]))),
        );
    }

    fn estimate(&self, &i: &usize) -> Cost {
        manhattan(self.grid.point_of(i), self.goal)
    }
}

/// Cheapest total risk from the top-left cell to the bottom-right one.
pub fn lowest_total_risk(grid: &Grid<u32>) -> Option<Cost> {
    let space = RiskMap::new(grid);
    let mut pf = Pathfinder::new();
    let path = pf.shortest_path_to(&space, 0, grid.len() - 1)?;
    Some(path.total_cost)
}

/// Tile `grid` `factor` times right and down; each tile adds its tile
/// distance to every risk, wrapping past 9 back to 1.
pub fn expand(grid: &Grid<u32>, factor: usize) -> Grid<u32> {
    let (w, h) = grid.dimensions();
    let mut full = Grid::new(w * factor, h * factor);
    for (p, cell) in full.iter_mut() {
        let (x, y) = (p.x as usize, p.y as usize);
        let base = grid[(y % h) * w + x % w];
        let bump = (x / w + y / h) as u32;
        *cell = (base - 1 + bump) % 9 + 1;
    }
    full
}
