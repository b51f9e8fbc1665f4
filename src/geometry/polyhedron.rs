use std::collections::HashSet;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::geometry::vectors::{safe_normalize_3d, GEOM_EPS};

// Squared-distance threshold for merging coincident intersection vertices.
const MERGE_EPS_SQ: f64 = 1e-14;

// Faces below this area are collapsed loops left by tangential cuts.
const MIN_FACE_AREA: f64 = 1e-12;

/// One planar face of a convex polyhedron: an ordered CCW vertex loop
/// (viewed from outside) plus the outward unit normal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    pub vertices: Vec<Vector3<f64>>,
    pub normal: Vector3<f64>,
}

impl Face {
    pub fn new(vertices: Vec<Vector3<f64>>, normal: Vector3<f64>) -> Self {
        Self { vertices, normal }
    }

    /// Face area by triangle fan from the first vertex.
    pub fn area(&self) -> f64 {
        if self.vertices.len() < 3 {
            return 0.0;
        }
        let origin = self.vertices[0];
        let mut twice_area = 0.0;
        for i in 1..self.vertices.len() - 1 {
            let a = self.vertices[i] - origin;
            let b = self.vertices[i + 1] - origin;
            twice_area += a.cross(&b).norm();
        }
        0.5 * twice_area
    }

    /// Arithmetic mean of the face vertices.
    pub fn centroid(&self) -> Vector3<f64> {
        if self.vertices.is_empty() {
            return Vector3::zeros();
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v);
        sum / self.vertices.len() as f64
    }
}

/// A closed convex polyhedron as a face list.
///
/// Invariant: faces are planar with consistently outward normals, and every
/// edge is shared by exactly two faces. [`clip_half_space`](Self::clip_half_space)
/// preserves closure by sealing each cut with a cap face.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvexPolyhedron {
    pub faces: Vec<Face>,
}

impl ConvexPolyhedron {
    pub fn new(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    /// Axis-aligned cube of the given half-width centered at the origin,
    /// with outward unit normals. Seed shape for 3D zone clipping.
    pub fn axis_aligned_cube(half_width: f64) -> Self {
        let w = half_width;
        let corner = |x: f64, y: f64, z: f64| Vector3::new(x * w, y * w, z * w);
        let faces = vec![
            Face::new(
                vec![corner(1.0, -1.0, -1.0), corner(1.0, 1.0, -1.0), corner(1.0, 1.0, 1.0), corner(1.0, -1.0, 1.0)],
                Vector3::x(),
            ),
            Face::new(
                vec![corner(-1.0, -1.0, -1.0), corner(-1.0, -1.0, 1.0), corner(-1.0, 1.0, 1.0), corner(-1.0, 1.0, -1.0)],
                -Vector3::x(),
            ),
            Face::new(
                vec![corner(-1.0, 1.0, -1.0), corner(-1.0, 1.0, 1.0), corner(1.0, 1.0, 1.0), corner(1.0, 1.0, -1.0)],
                Vector3::y(),
            ),
            Face::new(
                vec![corner(-1.0, -1.0, -1.0), corner(1.0, -1.0, -1.0), corner(1.0, -1.0, 1.0), corner(-1.0, -1.0, 1.0)],
                -Vector3::y(),
            ),
            Face::new(
                vec![corner(-1.0, -1.0, 1.0), corner(1.0, -1.0, 1.0), corner(1.0, 1.0, 1.0), corner(-1.0, 1.0, 1.0)],
                Vector3::z(),
            ),
            Face::new(
                vec![corner(-1.0, -1.0, -1.0), corner(-1.0, 1.0, -1.0), corner(1.0, 1.0, -1.0), corner(1.0, -1.0, -1.0)],
                -Vector3::z(),
            ),
        ];
        Self { faces }
    }

    /// A polyhedron without faces no longer bounds a volume.
    pub fn is_degenerate(&self) -> bool {
        self.faces.is_empty()
    }

    /// Clip against the half-space `normal · x <= offset`.
    ///
    /// Each face loop is clipped with the same two-sided segment logic as
    /// the 2D polygon clipper. All boundary crossing points are collected,
    /// deduplicated, sorted CCW around the cutting-plane normal and sealed
    /// into a new cap face, so the result stays closed. Faces reduced below
    /// 3 vertices are dropped.
    pub fn clip_half_space(&self, normal: &Vector3<f64>, offset: f64) -> ConvexPolyhedron {
        let mut kept_faces = Vec::with_capacity(self.faces.len() + 1);
        let mut cap_vertices: Vec<Vector3<f64>> = Vec::new();

        for face in &self.faces {
            let count = face.vertices.len();
            if count == 0 {
                continue;
            }
            let mut kept = Vec::with_capacity(count + 2);
            for i in 0..count {
                let current = face.vertices[i];
                let next = face.vertices[(i + 1) % count];
                let dc = normal.dot(&current) - offset;
                let dn = normal.dot(&next) - offset;
                let current_inside = dc <= GEOM_EPS;
                let next_inside = dn <= GEOM_EPS;

                if current_inside {
                    kept.push(current);
                }
                if current_inside != next_inside {
                    let t = dc / (dc - dn);
                    let crossing = current.lerp(&next, t);
                    kept.push(crossing);
                    push_merged(&mut cap_vertices, crossing);
                }
            }
            if kept.len() >= 3 {
                let clipped = Face::new(kept, face.normal);
                // A tangential cut along a face edge or diagonal can leave a
                // loop of duplicated vertices; such faces bound no area.
                if clipped.area() > MIN_FACE_AREA {
                    kept_faces.push(clipped);
                }
            }
        }

        // Fewer than 3 distinct crossings cannot form a cap; the cut was
        // tangential or missed entirely.
        if cap_vertices.len() >= 3 {
            let cap_normal = safe_normalize_3d(normal);
            let (u, v) = in_plane_basis(&cap_normal);
            let center = cap_vertices
                .iter()
                .fold(Vector3::zeros(), |acc, p| acc + p)
                / cap_vertices.len() as f64;
            cap_vertices.sort_by(|a, b| {
                let da = a - center;
                let db = b - center;
                let angle_a = da.dot(&v).atan2(da.dot(&u));
                let angle_b = db.dot(&v).atan2(db.dot(&u));
                angle_a.total_cmp(&angle_b)
            });
            kept_faces.push(Face::new(cap_vertices, cap_normal));
        }

        ConvexPolyhedron { faces: kept_faces }
    }

    /// Volume by the divergence theorem over triangulated faces.
    pub fn volume(&self) -> f64 {
        let mut six_volume = 0.0;
        for face in &self.faces {
            if face.vertices.len() < 3 {
                continue;
            }
            let origin = face.vertices[0];
            for i in 1..face.vertices.len() - 1 {
                let a = face.vertices[i];
                let b = face.vertices[i + 1];
                six_volume += origin.dot(&a.cross(&b));
            }
        }
        (six_volume / 6.0).abs()
    }

    /// True when `point` satisfies every face half-space within [`GEOM_EPS`].
    pub fn contains(&self, point: &Vector3<f64>) -> bool {
        if self.faces.is_empty() {
            return false;
        }
        for face in &self.faces {
            if face.vertices.len() < 3 {
                continue;
            }
            if face.normal.dot(&(point - face.vertices[0])) > GEOM_EPS {
                return false;
            }
        }
        true
    }

    /// Distinct vertices across all faces, merged within tolerance.
    pub fn vertices(&self) -> Vec<Vector3<f64>> {
        let mut unique: Vec<Vector3<f64>> = Vec::new();
        for face in &self.faces {
            for vertex in &face.vertices {
                push_merged(&mut unique, *vertex);
            }
        }
        unique
    }

    /// Distinct edges as index pairs into [`vertices`](Self::vertices).
    /// In a well-formed closed polyhedron every edge is shared by exactly
    /// two faces and appears once here.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let unique = self.vertices();
        let index_of = |p: &Vector3<f64>| {
            unique
                .iter()
                .position(|q| (p - q).norm_squared() < MERGE_EPS_SQ)
        };

        let mut edges: HashSet<(usize, usize)> = HashSet::new();
        for face in &self.faces {
            let count = face.vertices.len();
            for i in 0..count {
                let a = index_of(&face.vertices[i]);
                let b = index_of(&face.vertices[(i + 1) % count]);
                if let (Some(a), Some(b)) = (a, b) {
                    if a != b {
                        edges.insert((a.min(b), a.max(b)));
                    }
                }
            }
        }
        edges.into_iter().collect()
    }

    /// Largest vertex distance from the origin.
    pub fn bounding_radius(&self) -> f64 {
        self.faces
            .iter()
            .flat_map(|f| f.vertices.iter())
            .map(|v| v.norm())
            .fold(0.0, f64::max)
    }
}

// Append `point` unless an equal vertex (within tolerance) is present.
fn push_merged(points: &mut Vec<Vector3<f64>>, point: Vector3<f64>) {
    let duplicate = points
        .iter()
        .any(|p| (p - point).norm_squared() < MERGE_EPS_SQ);
    if !duplicate {
        points.push(point);
    }
}

// Right-handed in-plane basis (u, v) with u x v = normal, built from the
// coordinate axis least aligned with the normal.
fn in_plane_basis(normal: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    let abs = normal.map(f64::abs);
    let reference = if abs.x <= abs.y && abs.x <= abs.z {
        Vector3::x()
    } else if abs.y <= abs.z {
        Vector3::y()
    } else {
        Vector3::z()
    };
    let u = safe_normalize_3d(&normal.cross(&reference));
    let v = normal.cross(&u);
    (u, v)
}
