use bevy_math::IVec2;

/// The `√2` constant used by octile distance, truncated to three decimal
/// places to match the source algorithm. This slightly under-approximates
/// true `√2 ≈ 1.41421`, so optimality is guaranteed against this constant,
/// not against the true Euclidean octile metric.
pub const SQRT2: f64 = 1.414;

/// The octile distance between two grid points: the cost metric used for
/// both edge weights and the search heuristic on an 8-connected grid.
#[inline]
#[must_use]
pub fn octile(a: IVec2, b: IVec2) -> f64 {
    let dx = (a.x - b.x).unsigned_abs() as f64;
    let dy = (a.y - b.y).unsigned_abs() as f64;
    SQRT2 * dx.min(dy) + (dx - dy).abs()
}
