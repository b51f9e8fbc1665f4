use std::f64::consts::PI;

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::LatticeError;
use crate::geometry::vectors::{cross_2d, GEOM_EPS};
use crate::lattice::construction::{LatticeBasis2D, LatticeBasis3D};
use crate::Result;

/// Reciprocal basis of a 2D lattice, satisfying `b_i . a_j = 2*pi*delta_ij`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReciprocalBasis2D {
    pub b1: Vector2<f64>,
    pub b2: Vector2<f64>,
}

/// Reciprocal basis of a 3D lattice, satisfying `b_i . a_j = 2*pi*delta_ij`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReciprocalBasis3D {
    pub b1: Vector3<f64>,
    pub b2: Vector3<f64>,
    pub b3: Vector3<f64>,
}

/// A reciprocal lattice point `G = h*b1 + k*b2`, excluding the origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReciprocalPoint2D {
    pub h: i32,
    pub k: i32,
    pub g: Vector2<f64>,
}

/// A reciprocal lattice point `G = h*b1 + k*b2 + l*b3`, excluding the origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReciprocalPoint3D {
    pub h: i32,
    pub k: i32,
    pub l: i32,
    pub g: Vector3<f64>,
}

/// The half-space constraint `G . k <= |G|^2 / 2` derived from a reciprocal
/// point: the perpendicular bisector plane of `G`. Never mutated after
/// creation; the originating point is kept for auditability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BraggPlane2D {
    pub point: ReciprocalPoint2D,
    pub normal: Vector2<f64>,
    pub offset: f64,
}

/// 3D analogue of [`BraggPlane2D`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BraggPlane3D {
    pub point: ReciprocalPoint3D,
    pub normal: Vector3<f64>,
    pub offset: f64,
}

impl BraggPlane2D {
    pub fn new(point: ReciprocalPoint2D) -> Self {
        Self {
            point,
            normal: point.g,
            offset: 0.5 * point.g.norm_squared(),
        }
    }

    /// Distance of the plane from the origin, `|G| / 2`.
    pub fn distance(&self) -> f64 {
        0.5 * self.point.g.norm()
    }
}

impl BraggPlane3D {
    pub fn new(point: ReciprocalPoint3D) -> Self {
        Self {
            point,
            normal: point.g,
            offset: 0.5 * point.g.norm_squared(),
        }
    }

    /// Distance of the plane from the origin, `|G| / 2`.
    pub fn distance(&self) -> f64 {
        0.5 * self.point.g.norm()
    }
}

/// Derive the 2D reciprocal basis via the dual-basis formula with the
/// `2*pi / det` factor. Fails before any clipping when the real-space basis
/// is (near-)singular.
pub fn reciprocal_basis_2d(basis: &LatticeBasis2D) -> Result<ReciprocalBasis2D> {
    let det = cross_2d(&basis.a1, &basis.a2);
    if det.abs() < GEOM_EPS {
        return Err(LatticeError::DegenerateBasis(format!(
            "2D basis determinant {det:.3e} is below tolerance"
        )));
    }
    let factor = 2.0 * PI / det;
    Ok(ReciprocalBasis2D {
        b1: Vector2::new(basis.a2.y, -basis.a2.x) * factor,
        b2: Vector2::new(-basis.a1.y, basis.a1.x) * factor,
    })
}

/// Derive the 3D reciprocal basis `b_i = 2*pi * (a_j x a_k) / vol`.
pub fn reciprocal_basis_3d(basis: &LatticeBasis3D) -> Result<ReciprocalBasis3D> {
    let volume = basis.a1.dot(&basis.a2.cross(&basis.a3));
    if volume.abs() < GEOM_EPS {
        return Err(LatticeError::DegenerateBasis(format!(
            "3D basis cell volume {volume:.3e} is below tolerance"
        )));
    }
    let factor = 2.0 * PI / volume;
    Ok(ReciprocalBasis3D {
        b1: basis.a2.cross(&basis.a3) * factor,
        b2: basis.a3.cross(&basis.a1) * factor,
        b3: basis.a1.cross(&basis.a2) * factor,
    })
}

/// Enumerate every reciprocal point with Miller indices in
/// `[-max_index, max_index]^2`, excluding the origin: exactly
/// `(2*max_index + 1)^2 - 1` points, sorted ascending by norm. The sort is
/// stable, so equal-norm points keep enumeration order and zone
/// construction stays deterministic.
///
/// Choosing `max_index` large enough to bound the requested zone order is
/// the caller's responsibility; zone construction reports
/// [`LatticeError::InsufficientReciprocalCoverage`] when it was not.
pub fn generate_reciprocal_points_2d(
    basis: &ReciprocalBasis2D,
    max_index: i32,
) -> Vec<ReciprocalPoint2D> {
    let mut points = Vec::with_capacity(((2 * max_index + 1).pow(2) - 1) as usize);
    for h in -max_index..=max_index {
        for k in -max_index..=max_index {
            if h == 0 && k == 0 {
                continue;
            }
            let g = basis.b1 * h as f64 + basis.b2 * k as f64;
            points.push(ReciprocalPoint2D { h, k, g });
        }
    }
    points.sort_by(|p, q| p.g.norm_squared().total_cmp(&q.g.norm_squared()));
    points
}

/// 3D analogue of [`generate_reciprocal_points_2d`]:
/// `(2*max_index + 1)^3 - 1` points, ascending by norm.
pub fn generate_reciprocal_points_3d(
    basis: &ReciprocalBasis3D,
    max_index: i32,
) -> Vec<ReciprocalPoint3D> {
    let mut points = Vec::with_capacity(((2 * max_index + 1).pow(3) - 1) as usize);
    for h in -max_index..=max_index {
        for k in -max_index..=max_index {
            for l in -max_index..=max_index {
                if h == 0 && k == 0 && l == 0 {
                    continue;
                }
                let g = basis.b1 * h as f64 + basis.b2 * k as f64 + basis.b3 * l as f64;
                points.push(ReciprocalPoint3D { h, k, l, g });
            }
        }
    }
    points.sort_by(|p, q| p.g.norm_squared().total_cmp(&q.g.norm_squared()));
    points
}

/// One Bragg plane per reciprocal point, preserving point order.
pub fn bragg_planes_2d(points: &[ReciprocalPoint2D]) -> Vec<BraggPlane2D> {
    points.iter().copied().map(BraggPlane2D::new).collect()
}

/// One Bragg plane per reciprocal point, preserving point order.
pub fn bragg_planes_3d(points: &[ReciprocalPoint3D]) -> Vec<BraggPlane3D> {
    points.iter().copied().map(BraggPlane3D::new).collect()
}
