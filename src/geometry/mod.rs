// Geometry module: vector primitives and the convex clipping engine used by
// zone construction.

// ======================== MODULE DECLARATIONS ========================
pub mod polygon;
pub mod polyhedron;
pub mod vectors;

mod _tests_polyhedron;

// ======================== VECTOR PRIMITIVES ========================
pub use vectors::{
    cross_2d,              // fn(a, b) -> f64 - scalar 2D cross product
    line_intersection_2d,  // fn(p1, d1, p2, d2) -> Option<Vector2<f64>> - None for (near-)parallel lines
    safe_normalize_2d,     // fn(v) -> Vector2<f64> - zero vector below DEGENERATE_EPS
    safe_normalize_3d,     // fn(v) -> Vector3<f64> - zero vector below DEGENERATE_EPS
    DEGENERATE_EPS,        // degenerate-direction / determinant tolerance
    GEOM_EPS,              // half-space membership tolerance
};

// ======================== CONVEX SHAPES ========================
pub use polygon::ConvexPolygon; // CCW polygon with Sutherland-Hodgman clipping and 2D measures
pub use polyhedron::{ConvexPolyhedron, Face}; // face-list polyhedron with half-space clipping
