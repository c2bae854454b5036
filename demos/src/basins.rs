//! Smoke basins on a height map.
//!
//! A low point is strictly lower than every cardinal neighbor; a basin is
//! the flood fill of non-9 cells around one.

use stride_core::{Grid, GridError, valid_indices};
use stride_paths::{Pathfinder, StateSpace};

pub fn parse(text: &str) -> Result<Grid<u32>, GridError> {
    Grid::parse(text, |c| c.to_digit(10).unwrap_or(0))
}

/// Flat indices of every low point.
pub fn low_points(grid: &Grid<u32>) -> Vec<usize> {
    (0..grid.len())
        .filter(|&i| valid_indices(grid.cardinal_neighbors(i)).all(|n| grid[n] > grid[i]))
        .collect()
}

/// Sum of `1 + height` over the low points.
pub fn risk_level_sum(grid: &Grid<u32>) -> u64 {
    low_points(grid)
        .iter()
        .map(|&i| u64::from(grid[i] + 1))
        .sum()
}

/// The height map as a state space whose cells connect cardinally except
/// through height-9 ridges.
struct Basin<'a> {
    grid: &'a Grid<u32>,
}

impl StateSpace for Basin<'_> {
    type State = usize;

    fn neighbors(&self, &i: &usize, buf: &mut Vec<usize>) {
        buf.extend(valid_indices(self.grid.cardinal_neighbors(i)).filter(|&n| self.grid[n] != 9));
    }
}

/// Product of the sizes of the three largest basins.
pub fn largest_basins_product(grid: &Grid<u32>) -> u64 {
    let space = Basin { grid };
    let mut pf = Pathfinder::new();
    let mut sizes: Vec<u64> = low_points(grid)
        .into_iter()
        .map(|i| pf.flood_fill(&space, i).len() as u64)
        .collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.iter().take(3).product()
}
