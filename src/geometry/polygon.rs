use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::geometry::vectors::{DEGENERATE_EPS, GEOM_EPS};

/// A convex polygon as an ordered, implicitly closed CCW vertex loop.
///
/// The loop stays CCW and convex under [`clip_half_plane`](Self::clip_half_plane);
/// a polygon with fewer than 3 vertices is degenerate ("fully clipped away").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvexPolygon {
    pub vertices: Vec<Vector2<f64>>,
}

impl ConvexPolygon {
    pub fn new(vertices: Vec<Vector2<f64>>) -> Self {
        Self { vertices }
    }

    pub fn empty() -> Self {
        Self { vertices: Vec::new() }
    }

    /// Axis-aligned CCW square of the given half-width, centered at the
    /// origin. Seed shape for zone clipping.
    pub fn bounding_square(half_width: f64) -> Self {
        let w = half_width;
        Self {
            vertices: vec![
                Vector2::new(-w, -w),
                Vector2::new(w, -w),
                Vector2::new(w, w),
                Vector2::new(-w, w),
            ],
        }
    }

    /// A polygon below 3 vertices no longer bounds an area.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Sutherland-Hodgman clip keeping the half-plane `normal · x <= offset`.
    ///
    /// A vertex is kept when its signed distance is at most [`GEOM_EPS`];
    /// a crossing edge inserts the interpolated boundary point at
    /// `t = dc / (dc - dn)`. CCW order is preserved. An empty input stays
    /// empty and the output may degenerate below 3 vertices.
    pub fn clip_half_plane(&self, normal: &Vector2<f64>, offset: f64) -> ConvexPolygon {
        if self.vertices.is_empty() {
            return ConvexPolygon::empty();
        }

        let count = self.vertices.len();
        let mut kept = Vec::with_capacity(count + 1);

        for i in 0..count {
            let current = self.vertices[i];
            let next = self.vertices[(i + 1) % count];
            let dc = normal.dot(&current) - offset;
            let dn = normal.dot(&next) - offset;
            let current_inside = dc <= GEOM_EPS;
            let next_inside = dn <= GEOM_EPS;

            if current_inside {
                kept.push(current);
            }
            // Edge crosses the boundary
            if current_inside != next_inside {
                let t = dc / (dc - dn);
                kept.push(current.lerp(&next, t));
            }
        }

        ConvexPolygon { vertices: kept }
    }

    /// Area by the shoelace formula.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn signed_area(&self) -> f64 {
        let count = self.vertices.len();
        if count < 3 {
            return 0.0;
        }
        let mut twice_area = 0.0;
        for i in 0..count {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % count];
            twice_area += p.x * q.y - q.x * p.y;
        }
        0.5 * twice_area
    }

    /// Area-weighted centroid, falling back to the vertex mean for
    /// (near-)zero-area polygons.
    pub fn centroid(&self) -> Vector2<f64> {
        let count = self.vertices.len();
        if count == 0 {
            return Vector2::zeros();
        }

        let signed_area = self.signed_area();
        if signed_area.abs() < DEGENERATE_EPS {
            return self.vertex_mean();
        }

        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..count {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % count];
            let w = p.x * q.y - q.x * p.y;
            cx += (p.x + q.x) * w;
            cy += (p.y + q.y) * w;
        }
        Vector2::new(cx, cy) / (6.0 * signed_area)
    }

    fn vertex_mean(&self) -> Vector2<f64> {
        let sum = self
            .vertices
            .iter()
            .fold(Vector2::zeros(), |acc, v| acc + v);
        sum / self.vertices.len() as f64
    }

    /// Point-in-polygon test by ray casting. Points on the boundary may
    /// land on either side; zone classification only ever queries interior
    /// centroids.
    pub fn contains(&self, point: &Vector2<f64>) -> bool {
        let count = self.vertices.len();
        if count < 3 {
            return false;
        }

        let mut inside = false;
        let (px, py) = (point.x, point.y);
        for i in 0..count {
            let j = (i + 1) % count;
            let (xi, yi) = (self.vertices[i].x, self.vertices[i].y);
            let (xj, yj) = (self.vertices[j].x, self.vertices[j].y);
            if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
                inside = !inside;
            }
        }
        inside
    }

    /// Vertices re-sorted CCW by angle around the vertex mean.
    pub fn sorted_ccw(&self) -> ConvexPolygon {
        if self.vertices.len() < 3 {
            return self.clone();
        }
        let center = self.vertex_mean();
        let mut vertices = self.vertices.clone();
        vertices.sort_by(|a, b| {
            let angle_a = (a.y - center.y).atan2(a.x - center.x);
            let angle_b = (b.y - center.y).atan2(b.x - center.x);
            angle_a.total_cmp(&angle_b)
        });
        ConvexPolygon { vertices }
    }

    /// Largest vertex distance from the origin.
    pub fn bounding_radius(&self) -> f64 {
        self.vertices.iter().map(|v| v.norm()).fold(0.0, f64::max)
    }

    /// Edges as ordered vertex pairs, following the loop.
    pub fn edges(&self) -> Vec<(Vector2<f64>, Vector2<f64>)> {
        let count = self.vertices.len();
        (0..count)
            .map(|i| (self.vertices[i], self.vertices[(i + 1) % count]))
            .collect()
    }
}
