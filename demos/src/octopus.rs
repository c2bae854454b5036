//! Bioluminescent octopus energy cascade.
//!
//! Every step increments every cell; cells past 9 flash once, bumping all
//! eight neighbors and cascading, and every flashed cell resets to 0.

use stride_core::{Grid, GridError, valid_indices};

pub fn parse(text: &str) -> Result<Grid<u32>, GridError> {
    Grid::parse(text, |c| c.to_digit(10).unwrap_or(0))
}

/// Advance one step in place; returns how many cells flashed.
pub fn step(grid: &mut Grid<u32>) -> usize {
    let mut pending: Vec<usize> = Vec::new();
    for i in 0..grid.len() {
        grid[i] += 1;
        if grid[i] > 9 {
            pending.push(i);
        }
    }

    let mut flashed = vec![false; grid.len()];
    let mut count = 0;
    while let Some(i) = pending.pop() {
        if flashed[i] {
            continue;
        }
        flashed[i] = true;
        count += 1;
        for n in valid_indices(grid.full_neighbors(i)) {
            grid[n] += 1;
            if grid[n] > 9 && !flashed[n] {
                pending.push(n);
            }
        }
    }

    for (i, &f) in flashed.iter().enumerate() {
        if f {
            grid[i] = 0;
        }
    }
    count
}

/// Total flashes over the first `steps` steps.
pub fn flashes_after(mut grid: Grid<u32>, steps: usize) -> usize {
    (0..steps).map(|_| step(&mut grid)).sum()
}

/// First step on which every cell flashes at once.
pub fn first_synchronized_step(mut grid: Grid<u32>) -> usize {
    let all = grid.len();
    let mut n = 0;
    loop {
        n += 1;
        if step(&mut grid) == all {
            return n;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The small cascade demo: the ring of 9s flashes as one.
    const SMALL: &str = "\
11111
19991
19191
19991
11111";

    #[test]
    fn cascade_flashes_the_ring() {
        let mut grid = parse(SMALL).unwrap();
        assert_eq!(step(&mut grid), 9);
        let after: String = grid
            .display_with(|&d| char::from_digit(d, 10).unwrap_or('?'))
            .to_string();
        assert_eq!(after, "34543\n40004\n50005\n40004\n34543");
        // Everything is still charging, so the next step stays quiet.
        assert_eq!(step(&mut grid), 0);
    }

    #[test]
    fn flash_resets_to_zero_once() {
        // A flashing cell absorbs neighbor bumps without flashing twice.
        let mut grid = parse("99\n99").unwrap();
        assert_eq!(step(&mut grid), 4);
        assert!(grid.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn synchronization_detected() {
        let grid = parse("99\n99").unwrap();
        assert_eq!(first_synchronized_step(grid), 1);
        let grid = parse("88\n88").unwrap();
        assert_eq!(first_synchronized_step(grid), 2);
    }

    #[test]
    fn flashes_accumulate() {
        let grid = parse(SMALL).unwrap();
        assert_eq!(flashes_after(grid, 2), 9);
    }
}
