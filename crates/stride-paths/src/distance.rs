use stride_core::Point;

use crate::Cost;

/// Manhattan (L1) distance between two points.
///
/// Admissible for 4-directional movement with unit (or greater) step costs.
#[inline]
pub fn manhattan(a: Point, b: Point) -> Cost {
    (Cost::from(a.x) - Cost::from(b.x)).abs() + (Cost::from(a.y) - Cost::from(b.y)).abs()
}

/// Chebyshev (L∞) distance between two points.
///
/// Admissible for 8-directional movement with unit (or greater) step costs.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> Cost {
    (Cost::from(a.x) - Cost::from(b.x))
        .abs()
        .max((Cost::from(a.y) - Cost::from(b.y)).abs())
}
