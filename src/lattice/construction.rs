use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::LatticeError;
use crate::lattice::lattice_types::{LatticeType2D, LatticeType3D};
use crate::Result;

/// A named 2D real-space basis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatticeBasis2D {
    pub name: String,
    pub a1: Vector2<f64>,
    pub a2: Vector2<f64>,
}

/// A named 3D real-space basis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatticeBasis3D {
    pub name: String,
    pub a1: Vector3<f64>,
    pub a2: Vector3<f64>,
    pub a3: Vector3<f64>,
}

fn check_scale(value: f64, label: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LatticeError::DegenerateBasis(format!(
            "lattice constant {label} must be positive and finite, got {value}"
        )));
    }
    Ok(())
}

/// Square lattice: a1 = (a, 0), a2 = (0, a).
pub fn square_basis(a: f64) -> Result<LatticeBasis2D> {
    check_scale(a, "a")?;
    Ok(LatticeBasis2D {
        name: "Square".to_string(),
        a1: Vector2::new(a, 0.0),
        a2: Vector2::new(0.0, a),
    })
}

/// Rectangular lattice: a1 = (a, 0), a2 = (0, b).
pub fn rectangular_basis(a: f64, b: f64) -> Result<LatticeBasis2D> {
    check_scale(a, "a")?;
    check_scale(b, "b")?;
    Ok(LatticeBasis2D {
        name: "Rectangular".to_string(),
        a1: Vector2::new(a, 0.0),
        a2: Vector2::new(0.0, b),
    })
}

/// Hexagonal lattice with 60 degrees between the primitive vectors:
/// a1 = (a, 0), a2 = (a/2, a*sqrt(3)/2).
pub fn hexagonal_basis(a: f64) -> Result<LatticeBasis2D> {
    check_scale(a, "a")?;
    Ok(LatticeBasis2D {
        name: "Hexagonal".to_string(),
        a1: Vector2::new(a, 0.0),
        a2: Vector2::new(0.5 * a, 0.5 * 3.0_f64.sqrt() * a),
    })
}

/// Simple cubic lattice: conventional cube axes.
pub fn cubic_basis(a: f64) -> Result<LatticeBasis3D> {
    check_scale(a, "a")?;
    Ok(LatticeBasis3D {
        name: "Simple cubic".to_string(),
        a1: Vector3::new(a, 0.0, 0.0),
        a2: Vector3::new(0.0, a, 0.0),
        a3: Vector3::new(0.0, 0.0, a),
    })
}

/// Face-centered cubic lattice: primitive half-face diagonals.
pub fn fcc_basis(a: f64) -> Result<LatticeBasis3D> {
    check_scale(a, "a")?;
    let h = 0.5 * a;
    Ok(LatticeBasis3D {
        name: "Face-centered cubic".to_string(),
        a1: Vector3::new(0.0, h, h),
        a2: Vector3::new(h, 0.0, h),
        a3: Vector3::new(h, h, 0.0),
    })
}

/// Body-centered cubic lattice: primitive half-body diagonals.
pub fn bcc_basis(a: f64) -> Result<LatticeBasis3D> {
    check_scale(a, "a")?;
    let h = 0.5 * a;
    Ok(LatticeBasis3D {
        name: "Body-centered cubic".to_string(),
        a1: Vector3::new(-h, h, h),
        a2: Vector3::new(h, -h, h),
        a3: Vector3::new(h, h, -h),
    })
}

/// Catalog dispatch for 2D lattices. The second constant `b` is only used
/// by the rectangular lattice; square and hexagonal ignore it.
pub fn basis_2d(lattice_type: LatticeType2D, a: f64, b: f64) -> Result<LatticeBasis2D> {
    match lattice_type {
        LatticeType2D::Square => square_basis(a),
        LatticeType2D::Rectangular => rectangular_basis(a, b),
        LatticeType2D::Hexagonal => hexagonal_basis(a),
    }
}

/// Catalog dispatch for 3D lattices (all cubic variants take one constant).
pub fn basis_3d(lattice_type: LatticeType3D, a: f64) -> Result<LatticeBasis3D> {
    match lattice_type {
        LatticeType3D::Cubic => cubic_basis(a),
        LatticeType3D::Fcc => fcc_basis(a),
        LatticeType3D::Bcc => bcc_basis(a),
    }
}
