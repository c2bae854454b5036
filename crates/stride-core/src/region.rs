//! Axis-aligned integer boxes in N dimensions.
//!
//! A [`Region`] names a half-open lattice box and knows how to enumerate
//! every cell in it through a flat index, which is all a brute-force scan
//! needs. The optional `rayon` feature adds a parallel counting scan; the
//! result is identical to the serial one, the work just fans out.

use std::fmt;

/// A half-open N-dimensional box `[min, max)` over the integer lattice.
///
/// Canonicalized per axis at construction so `min[k] <= max[k]`. Cells are
/// addressed by a flat `u64` index in row-major order with the last axis
/// fastest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region<const N: usize> {
    pub min: [i64; N],
    pub max: [i64; N],
}

impl<const N: usize> Region<N> {
    /// Create a region from two corners, canonicalizing each axis.
    #[inline]
    pub fn new(a: [i64; N], b: [i64; N]) -> Self {
        let mut min = [0; N];
        let mut max = [0; N];
        for k in 0..N {
            min[k] = a[k].min(b[k]);
            max[k] = a[k].max(b[k]);
        }
        Self { min, max }
    }

    /// A region spanning `[lo, hi)` on every axis.
    #[inline]
    pub fn cube(lo: i64, hi: i64) -> Self {
        Self::new([lo; N], [hi; N])
    }

    /// Cell count along one axis.
    #[inline]
    pub fn extent(&self, axis: usize) -> u64 {
        (self.max[axis] - self.min[axis]).max(0) as u64
    }

    /// Total number of cells (product of the extents).
    #[inline]
    pub fn len(&self) -> u64 {
        let mut n = 1u64;
        for k in 0..N {
            n = n.saturating_mul(self.extent(k));
        }
        n
    }

    /// Whether the region contains no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        (0..N).any(|k| self.min[k] >= self.max[k])
    }

    /// Whether `p` falls inside the half-open box.
    #[inline]
    pub fn contains(&self, p: [i64; N]) -> bool {
        (0..N).all(|k| p[k] >= self.min[k] && p[k] < self.max[k])
    }

    /// Decode flat index `i` to lattice coordinates, last axis fastest.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn point_at(&self, i: u64) -> [i64; N] {
        assert!(i < self.len(), "index {i} past region end");
        let mut p = [0; N];
        let mut rem = i;
        for k in (0..N).rev() {
            let ext = self.extent(k);
            p[k] = self.min[k] + (rem % ext) as i64;
            rem /= ext;
        }
        p
    }

    /// Iterator over every cell, in flat-index order.
    #[inline]
    pub fn points(&self) -> Points<N> {
        Points {
            region: *self,
            cur: 0,
            len: self.len(),
        }
    }

    /// Count the cells satisfying `pred` with a serial scan.
    pub fn count_where<P>(&self, mut pred: P) -> u64
    where
        P: FnMut([i64; N]) -> bool,
    {
        self.points().fold(0, |acc, p| acc + u64::from(pred(p)))
    }

    /// Count the cells satisfying `pred`, fanning the scan out over worker
    /// threads. Same result as [`count_where`](Self::count_where); the
    /// predicate only needs shared read access.
    #[cfg(feature = "rayon")]
    pub fn par_count_where<P>(&self, pred: P) -> u64
    where
        P: Fn([i64; N]) -> bool + Sync,
    {
        use rayon::prelude::*;

        let r = *self;
        (0..self.len())
            .into_par_iter()
            .map(|i| u64::from(pred(r.point_at(i))))
            .sum()
    }
}

impl<const N: usize> fmt::Display for Region<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}-{:?})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// Points
// ---------------------------------------------------------------------------

/// Flat-index-order iterator over the cells of a [`Region`].
#[derive(Clone, Debug)]
pub struct Points<const N: usize> {
    region: Region<N>,
    cur: u64,
    len: u64,
}

impl<const N: usize> Iterator for Points<N> {
    type Item = [i64; N];

    #[inline]
    fn next(&mut self) -> Option<[i64; N]> {
        if self.cur >= self.len {
            return None;
        }
        let p = self.region.point_at(self.cur);
        self.cur += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.len - self.cur) {
            Ok(n) => (n, Some(n)),
            // More cells than usize can count; still a valid lower bound.
            Err(_) => (usize::MAX, None),
        }
    }
}


#[cfg(all(test, feature = "rayon"))]
mod rayon_tests {
    use super::*;

    #[test]
    fn parallel_count_matches_serial() {
        let r: Region<3> = Region::cube(-6, 7);
        let pred = |p: [i64; 3]| p.iter().map(|v| v * v).sum::<i64>() <= 25;
        assert_eq!(r.par_count_where(pred), r.count_where(pred));
    }
}
