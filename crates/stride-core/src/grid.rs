//! A dense 2D grid stored as a single row-major buffer.
//!
//! [`Grid`] is the workhorse container for map-shaped puzzle input: it is
//! built either from equal-width text rows (one character per cell) or from
//! explicit dimensions, and hands out flat `usize` indices that step and
//! compose cheaply. Traversal code works in indices; coordinate access goes
//! through [`Point`] so off-grid probes stay representable.

use std::fmt::{self, Write as _};
use std::ops::{Index, IndexMut};
use std::slice::ChunksExact;

use crate::geom::Point;

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors from grid construction and checked access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A checked coordinate access fell outside the grid.
    OutOfBounds {
        pos: Point,
        width: usize,
        height: usize,
    },
    /// A text row did not match the width established by the first row.
    MalformedInput {
        row: usize,
        len: usize,
        width: usize,
    },
    /// The input had no rows, or a first row with no cells.
    EmptyInput,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "position {pos} out of bounds for {width}x{height} grid")
            }
            Self::MalformedInput { row, len, width } => {
                write!(f, "row {row} has {len} cells, expected {width}")
            }
            Self::EmptyInput => write!(f, "grid input has no cells"),
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A fixed-width 2D container over a flat row-major buffer.
///
/// Flat index `i` corresponds to coordinates `(i % width, i / width)`.
/// The width is set at construction and never changes; the cell count is
/// always an exact multiple of it. The grid exclusively owns its cells:
/// there are no interior views, and mutation goes through `&mut self`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    width: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from text rows, mapping each character to a cell.
    ///
    /// The first row establishes the width (which must be at least 1);
    /// every following row must have the same number of characters or the
    /// whole construction fails with [`GridError::MalformedInput`].
    pub fn from_lines<I, F>(lines: I, mut to_cell: F) -> Result<Self, GridError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        F: FnMut(char) -> T,
    {
        let mut width = 0;
        let mut cells = Vec::new();
        for (row, line) in lines.into_iter().enumerate() {
            let start = cells.len();
            cells.extend(line.as_ref().chars().map(&mut to_cell));
            let len = cells.len() - start;
            if row == 0 {
                if len == 0 {
                    return Err(GridError::EmptyInput);
                }
                width = len;
            } else if len != width {
                return Err(GridError::MalformedInput { row, len, width });
            }
        }
        if cells.is_empty() {
            return Err(GridError::EmptyInput);
        }
        Ok(Self { width, cells })
    }

    /// Build a grid from a newline-separated block of text.
    ///
    /// Convenience over [`from_lines`](Self::from_lines); handles `\r\n`
    /// and a trailing newline the way [`str::lines`] does.
    pub fn parse<F>(text: &str, to_cell: F) -> Result<Self, GridError>
    where
        F: FnMut(char) -> T,
    {
        Self::from_lines(text.lines(), to_cell)
    }

    /// Create a grid of the given dimensions with every cell set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    pub fn filled(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        assert!(width > 0, "grid width must be at least 1");
        Self {
            width,
            cells: vec![value; width * height],
        }
    }

    /// Create a grid of the given dimensions with default-valued cells.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    pub fn new(width: usize, height: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::filled(width, height, T::default())
    }

    /// Width in cells (always at least 1).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    /// (width, height).
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height())
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells (zero height).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` falls inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height()
    }

    /// Flat index of `p`, or `None` if `p` is off-grid.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Coordinates of flat index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is past the end of the grid.
    #[inline]
    pub fn point_of(&self, i: usize) -> Point {
        assert!(i < self.cells.len(), "index {i} past grid end");
        Point::new((i % self.width) as i32, (i / self.width) as i32)
    }

    /// Checked access: the cell at `p`, or [`GridError::OutOfBounds`].
    pub fn get(&self, p: Point) -> Result<&T, GridError> {
        match self.index_of(p) {
            Some(i) => Ok(&self.cells[i]),
            None => Err(self.out_of_bounds(p)),
        }
    }

    /// Checked mutable access: the cell at `p`, or [`GridError::OutOfBounds`].
    pub fn get_mut(&mut self, p: Point) -> Result<&mut T, GridError> {
        match self.index_of(p) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(self.out_of_bounds(p)),
        }
    }

    /// The cell at `p`, or `None` off-grid.
    ///
    /// For callers that treat everything beyond the edge as an implicit
    /// default: `grid.get_opt(p).copied().unwrap_or(background)`.
    #[inline]
    pub fn get_opt(&self, p: Point) -> Option<&T> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    fn out_of_bounds(&self, pos: Point) -> GridError {
        GridError::OutOfBounds {
            pos,
            width: self.width,
            height: self.height(),
        }
    }

    // -- single-step index moves ---------------------------------------------

    /// Index one row up from `i`, or `None` at the top edge.
    ///
    /// The four steps return `None` for indices past the end, so they
    /// compose: a diagonal is `g.up(i).and_then(|j| g.left(j))`.
    #[inline]
    pub fn up(&self, i: usize) -> Option<usize> {
        if i < self.cells.len() && i >= self.width {
            Some(i - self.width)
        } else {
            None
        }
    }

    /// Index one row down from `i`, or `None` at the bottom edge.
    #[inline]
    pub fn down(&self, i: usize) -> Option<usize> {
        if i < self.cells.len() && i + self.width < self.cells.len() {
            Some(i + self.width)
        } else {
            None
        }
    }

    /// Index one column left from `i`, or `None` at the left edge.
    #[inline]
    pub fn left(&self, i: usize) -> Option<usize> {
        if i < self.cells.len() && i % self.width != 0 {
            Some(i - 1)
        } else {
            None
        }
    }

    /// Index one column right from `i`, or `None` at the right edge.
    #[inline]
    pub fn right(&self, i: usize) -> Option<usize> {
        if i < self.cells.len() && (i + 1) % self.width != 0 {
            Some(i + 1)
        } else {
            None
        }
    }

    /// The four cardinal neighbor indices of `i`: up, left, right, down.
    ///
    /// Edge positions yield `None` in the corresponding slots; the order is
    /// the same every call. A 1x1 grid has no valid neighbors at all.
    #[inline]
    pub fn cardinal_neighbors(&self, i: usize) -> [Option<usize>; 4] {
        [self.up(i), self.left(i), self.right(i), self.down(i)]
    }

    /// All eight neighbor indices of `i`, in row-major scan order:
    /// up-left, up, up-right, left, right, down-left, down, down-right.
    #[inline]
    pub fn full_neighbors(&self, i: usize) -> [Option<usize>; 8] {
        let up = self.up(i);
        let down = self.down(i);
        [
            up.and_then(|j| self.left(j)),
            up,
            up.and_then(|j| self.right(j)),
            self.left(i),
            self.right(i),
            down.and_then(|j| self.left(j)),
            down,
            down.and_then(|j| self.right(j)),
        ]
    }

    // -- whole-grid views ----------------------------------------------------

    /// The raw cell buffer in row-major order.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// The raw cell buffer, mutable.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterator over the rows as width-sized slices.
    #[inline]
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.cells.chunks_exact(self.width)
    }

    /// Row-major iterator over `(position, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (Point::new((i % w) as i32, (i / w) as i32), c))
    }

    /// Row-major iterator over `(position, &mut cell)`.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Point, &mut T)> {
        let w = self.width;
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(i, c)| (Point::new((i % w) as i32, (i / w) as i32), c))
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(value);
    }

    /// Row-major walk calling `visit` per cell and `row_end` after each row.
    ///
    /// Rendering and other row-oriented scans hang off this; `row_end` fires
    /// after the last row too.
    pub fn for_each_row_major(&self, mut visit: impl FnMut(Point, &T), mut row_end: impl FnMut()) {
        for (y, row) in self.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                visit(Point::new(x as i32, y as i32), cell);
            }
            row_end();
        }
    }

    /// Display adapter rendering each cell through `to_char`, one text line
    /// per row (no trailing newline).
    pub fn display_with<F>(&self, to_char: F) -> GridDisplay<'_, T, F>
    where
        F: Fn(&T) -> char,
    {
        GridDisplay { grid: self, to_char }
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = T;

    /// Flat-index access with slice semantics (panics past the end).
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.cells[i]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.cells[i]
    }
}

/// Keep only the in-bounds indices from a neighbor array.
///
/// `valid_indices(g.cardinal_neighbors(i))` yields just the neighbors that
/// exist, in the array's order.
#[inline]
pub fn valid_indices<const N: usize>(candidates: [Option<usize>; N]) -> impl Iterator<Item = usize> {
    candidates.into_iter().flatten()
}

// ---------------------------------------------------------------------------
// GridDisplay
// ---------------------------------------------------------------------------

/// Displays a [`Grid`] through a cell-to-char transform.
///
/// Built by [`Grid::display_with`].
pub struct GridDisplay<'a, T, F> {
    grid: &'a Grid<T>,
    to_char: F,
}

impl<T, F> fmt::Display for GridDisplay<'_, T, F>
where
    F: Fn(&T) -> char,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.grid.rows().enumerate() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char((self.to_char)(cell))?;
            }
        }
        Ok(())
    }
}
