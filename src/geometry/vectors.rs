use nalgebra::{Vector2, Vector3};

/// Tolerance for half-space membership tests.
pub const GEOM_EPS: f64 = 1e-9;

/// Tolerance below which a direction, determinant or norm counts as
/// degenerate.
pub const DEGENERATE_EPS: f64 = 1e-12;

/// Scalar z-component of the 2D cross product a × b.
pub fn cross_2d(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Normalize `v`, returning the zero vector when the norm is below
/// [`DEGENERATE_EPS`].
pub fn safe_normalize_2d(v: &Vector2<f64>) -> Vector2<f64> {
    let norm = v.norm();
    if norm < DEGENERATE_EPS {
        Vector2::zeros()
    } else {
        v / norm
    }
}

/// Normalize `v`, returning the zero vector when the norm is below
/// [`DEGENERATE_EPS`].
pub fn safe_normalize_3d(v: &Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm < DEGENERATE_EPS {
        Vector3::zeros()
    } else {
        v / norm
    }
}

/// Intersection of the lines `p1 + t·d1` and `p2 + s·d2`.
///
/// Returns `None` when the directions are parallel within
/// [`DEGENERATE_EPS`], i.e. no unique solution exists.
pub fn line_intersection_2d(
    p1: &Vector2<f64>,
    d1: &Vector2<f64>,
    p2: &Vector2<f64>,
    d2: &Vector2<f64>,
) -> Option<Vector2<f64>> {
    let det = cross_2d(d1, d2);
    if det.abs() < DEGENERATE_EPS {
        return None;
    }
    let delta = p2 - p1;
    let t = cross_2d(&delta, d2) / det;
    Some(p1 + d1 * t)
}
