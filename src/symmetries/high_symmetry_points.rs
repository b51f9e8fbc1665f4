use std::collections::HashMap;

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::lattice::lattice_types::{LatticeType2D, LatticeType3D};
use crate::lattice::reciprocal::{ReciprocalBasis2D, ReciprocalBasis3D};

/// Standard labels for high symmetry points in the Brillouin zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymmetryPointLabel {
    Gamma, // Center of BZ
    X,     // Face/edge center
    Y,     // Edge center (rectangular)
    S,     // Corner (rectangular)
    M,     // Edge midpoint / corner
    K,     // Corner of hexagonal BZ
    R,     // Corner of cubic BZ
    L,     // Center of hexagonal face (fcc)
    W,     // Corner point (fcc)
    H,     // Corner (bcc)
    N,     // Face center (bcc)
    P,     // Corner point (bcc)
}

impl SymmetryPointLabel {
    /// Conventional glyph for display and labeling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gamma => "Γ",
            Self::X => "X",
            Self::Y => "Y",
            Self::S => "S",
            Self::M => "M",
            Self::K => "K",
            Self::R => "R",
            Self::L => "L",
            Self::W => "W",
            Self::H => "H",
            Self::N => "N",
            Self::P => "P",
        }
    }
}

/// A high symmetry k-point of a 2D lattice: fixed fractional coefficients
/// of the reciprocal basis plus the derived Cartesian position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighSymmetryPoint2D {
    pub label: SymmetryPointLabel,
    pub fractional: Vector2<f64>,
    pub cartesian: Vector2<f64>,
    pub description: String,
}

/// 3D analogue of [`HighSymmetryPoint2D`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighSymmetryPoint3D {
    pub label: SymmetryPointLabel,
    pub fractional: Vector3<f64>,
    pub cartesian: Vector3<f64>,
    pub description: String,
}

/// High symmetry points and the standard band-structure path for a 2D
/// lattice. Recomputed whenever the basis changes, never mutated otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighSymmetryData2D {
    pub points: HashMap<SymmetryPointLabel, HighSymmetryPoint2D>,
    pub standard_path: Vec<SymmetryPointLabel>,
}

/// 3D analogue of [`HighSymmetryData2D`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighSymmetryData3D {
    pub points: HashMap<SymmetryPointLabel, HighSymmetryPoint3D>,
    pub standard_path: Vec<SymmetryPointLabel>,
}

impl HighSymmetryData2D {
    pub fn get_point(&self, label: &SymmetryPointLabel) -> Option<&HighSymmetryPoint2D> {
        self.points.get(label)
    }

    /// Points along the standard path, in path order.
    pub fn standard_path_points(&self) -> Vec<&HighSymmetryPoint2D> {
        self.standard_path
            .iter()
            .filter_map(|label| self.points.get(label))
            .collect()
    }
}

impl HighSymmetryData3D {
    pub fn get_point(&self, label: &SymmetryPointLabel) -> Option<&HighSymmetryPoint3D> {
        self.points.get(label)
    }

    pub fn standard_path_points(&self) -> Vec<&HighSymmetryPoint3D> {
        self.standard_path
            .iter()
            .filter_map(|label| self.points.get(label))
            .collect()
    }
}

/// Derive the named high symmetry points of a 2D lattice from its
/// reciprocal basis. Purely declarative: each point is a fixed linear
/// combination of the reciprocal vectors.
pub fn generate_2d_high_symmetry_points(
    lattice_type: LatticeType2D,
    basis: &ReciprocalBasis2D,
) -> HighSymmetryData2D {
    use SymmetryPointLabel::*;

    let mut points = HashMap::new();
    let mut add = |label: SymmetryPointLabel, frac: Vector2<f64>, description: &str| {
        let cartesian = basis.b1 * frac.x + basis.b2 * frac.y;
        points.insert(
            label,
            HighSymmetryPoint2D {
                label,
                fractional: frac,
                cartesian,
                description: description.to_string(),
            },
        );
    };

    add(Gamma, Vector2::zeros(), "Center of Brillouin zone");

    let standard_path = match lattice_type {
        LatticeType2D::Square => {
            add(X, Vector2::new(0.5, 0.0), "Center of square edge");
            add(M, Vector2::new(0.5, 0.5), "Corner of square BZ");
            vec![Gamma, X, M, Gamma]
        }
        LatticeType2D::Rectangular => {
            add(X, Vector2::new(0.5, 0.0), "Center of edge along b1");
            add(Y, Vector2::new(0.0, 0.5), "Center of edge along b2");
            add(S, Vector2::new(0.5, 0.5), "Corner of rectangular BZ");
            vec![Gamma, X, S, Y, Gamma]
        }
        LatticeType2D::Hexagonal => {
            add(M, Vector2::new(0.5, 0.0), "Middle of hexagon edge");
            add(K, Vector2::new(2.0 / 3.0, 1.0 / 3.0), "Corner of hexagonal BZ");
            vec![Gamma, M, K, Gamma]
        }
    };

    HighSymmetryData2D { points, standard_path }
}

/// Derive the named high symmetry points of a 3D lattice from its
/// reciprocal basis.
pub fn generate_3d_high_symmetry_points(
    lattice_type: LatticeType3D,
    basis: &ReciprocalBasis3D,
) -> HighSymmetryData3D {
    use SymmetryPointLabel::*;

    let mut points = HashMap::new();
    let mut add = |label: SymmetryPointLabel, frac: Vector3<f64>, description: &str| {
        let cartesian = basis.b1 * frac.x + basis.b2 * frac.y + basis.b3 * frac.z;
        points.insert(
            label,
            HighSymmetryPoint3D {
                label,
                fractional: frac,
                cartesian,
                description: description.to_string(),
            },
        );
    };

    add(Gamma, Vector3::zeros(), "Center of Brillouin zone");

    let standard_path = match lattice_type {
        LatticeType3D::Cubic => {
            add(X, Vector3::new(0.0, 0.5, 0.0), "Face center");
            add(M, Vector3::new(0.5, 0.5, 0.0), "Edge center");
            add(R, Vector3::new(0.5, 0.5, 0.5), "Corner of cubic BZ");
            vec![Gamma, X, M, Gamma, R, X]
        }
        LatticeType3D::Fcc => {
            add(X, Vector3::new(0.5, 0.0, 0.5), "Center of square face");
            add(L, Vector3::new(0.5, 0.5, 0.5), "Center of hexagonal face");
            add(W, Vector3::new(0.5, 0.25, 0.75), "Corner point");
            add(K, Vector3::new(0.375, 0.375, 0.75), "Middle of hexagonal edge");
            vec![Gamma, X, W, K, Gamma, L]
        }
        LatticeType3D::Bcc => {
            add(H, Vector3::new(0.5, -0.5, 0.5), "Corner of BZ");
            add(N, Vector3::new(0.0, 0.0, 0.5), "Face center");
            add(P, Vector3::new(0.25, 0.25, 0.25), "Corner point");
            vec![Gamma, H, N, Gamma, P, H]
        }
    };

    HighSymmetryData3D { points, standard_path }
}

/// Interpolate k-points along the standard path of a 2D lattice,
/// `n_per_segment` points per leg plus the final endpoint.
pub fn interpolate_path_2d(
    data: &HighSymmetryData2D,
    n_per_segment: usize,
) -> Vec<Vector2<f64>> {
    let path = data.standard_path_points();
    let mut k_points = Vec::new();
    if path.is_empty() || n_per_segment == 0 {
        return k_points;
    }
    for pair in path.windows(2) {
        let start = pair[0].cartesian;
        let end = pair[1].cartesian;
        for j in 0..n_per_segment {
            let t = j as f64 / n_per_segment as f64;
            k_points.push(start.lerp(&end, t));
        }
    }
    if let Some(last) = path.last() {
        k_points.push(last.cartesian);
    }
    k_points
}

/// 3D analogue of [`interpolate_path_2d`].
pub fn interpolate_path_3d(
    data: &HighSymmetryData3D,
    n_per_segment: usize,
) -> Vec<Vector3<f64>> {
    let path = data.standard_path_points();
    let mut k_points = Vec::new();
    if path.is_empty() || n_per_segment == 0 {
        return k_points;
    }
    for pair in path.windows(2) {
        let start = pair[0].cartesian;
        let end = pair[1].cartesian;
        for j in 0..n_per_segment {
            let t = j as f64 / n_per_segment as f64;
            k_points.push(start.lerp(&end, t));
        }
    }
    if let Some(last) = path.last() {
        k_points.push(last.cartesian);
    }
    k_points
}
