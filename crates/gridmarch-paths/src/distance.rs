use gridmarch_core::Coord;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Straight-line distance factor for one step between adjacent cells:
/// 1 for an orthogonal step, `sqrt(2)` for a diagonal one.
///
/// Only meaningful for 8-connected adjacency; callers pass coordinates that
/// differ by at most 1 on each axis.
#[inline]
pub fn step_distance(a: Coord, b: Coord) -> f32 {
    if a.x != b.x && a.y != b.y {
        std::f32::consts::SQRT_2
    } else {
        1.0
    }
}
