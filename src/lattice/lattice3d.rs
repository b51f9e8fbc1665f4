use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::geometry::ConvexPolyhedron;
use crate::lattice::construction::{basis_3d, LatticeBasis3D};
use crate::lattice::lattice_types::LatticeType3D;
use crate::lattice::reciprocal::{
    bragg_planes_3d, generate_reciprocal_points_3d, reciprocal_basis_3d, BraggPlane3D,
    ReciprocalBasis3D, ReciprocalPoint3D,
};
use crate::lattice::zones::compute_first_zone_3d;
use crate::symmetries::high_symmetry_points::{
    generate_3d_high_symmetry_points, interpolate_path_3d, HighSymmetryData3D,
};
use crate::Result;

// Index bound for the first-zone construction; the binding planes of every
// supported 3D lattice sit within the first two index shells.
const FIRST_ZONE_MAX_INDEX: i32 = 3;

/// A 3D Bravais lattice with its derived reciprocal-space data.
///
/// Only the first Brillouin zone is constructed in 3D.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lattice3D {
    /// Catalog type this lattice was built from.
    pub lattice_type: LatticeType3D,
    /// Real-space basis vectors and display name.
    pub basis: LatticeBasis3D,
    /// Reciprocal basis (2-pi convention).
    pub reciprocal: ReciprocalBasis3D,
    /// Unit cell volume.
    pub cell_volume: f64,
    /// First Brillouin zone.
    pub brillouin_zone: ConvexPolyhedron,
    /// High symmetry points and the standard path.
    pub high_symmetry: HighSymmetryData3D,
}

impl Lattice3D {
    pub fn new(lattice_type: LatticeType3D, a: f64) -> Result<Self> {
        Self::from_basis(lattice_type, basis_3d(lattice_type, a)?)
    }

    pub fn from_basis(lattice_type: LatticeType3D, basis: LatticeBasis3D) -> Result<Self> {
        let reciprocal = reciprocal_basis_3d(&basis)?;
        let cell_volume = basis.a1.dot(&basis.a2.cross(&basis.a3)).abs();
        let brillouin_zone = compute_first_zone_3d(&reciprocal, FIRST_ZONE_MAX_INDEX)?;
        let high_symmetry = generate_3d_high_symmetry_points(lattice_type, &reciprocal);
        Ok(Self {
            lattice_type,
            basis,
            reciprocal,
            cell_volume,
            brillouin_zone,
            high_symmetry,
        })
    }

    /// Convert fractional reciprocal coordinates to a Cartesian k-vector.
    pub fn frac_to_cart(&self, frac: Vector3<f64>) -> Vector3<f64> {
        self.reciprocal.b1 * frac.x + self.reciprocal.b2 * frac.y + self.reciprocal.b3 * frac.z
    }

    /// Convert a Cartesian k-vector to fractional reciprocal coordinates,
    /// via the triple-product form of the basis inverse (the basis is
    /// non-degenerate by construction).
    pub fn cart_to_frac(&self, k: Vector3<f64>) -> Vector3<f64> {
        let b = &self.reciprocal;
        let volume = b.b1.dot(&b.b2.cross(&b.b3));
        Vector3::new(
            k.dot(&b.b2.cross(&b.b3)) / volume,
            k.dot(&b.b3.cross(&b.b1)) / volume,
            k.dot(&b.b1.cross(&b.b2)) / volume,
        )
    }

    /// Check whether a k-point lies in the first Brillouin zone.
    pub fn in_brillouin_zone(&self, k: Vector3<f64>) -> bool {
        self.brillouin_zone.contains(&k)
    }

    /// Translate a k-point by reciprocal lattice vectors into the central
    /// cell (fractional coordinates in [-1/2, 1/2)).
    pub fn reduce_to_central_cell(&self, k: Vector3<f64>) -> Vector3<f64> {
        let frac = self.cart_to_frac(k);
        self.frac_to_cart(Vector3::new(
            frac.x - frac.x.round(),
            frac.y - frac.y.round(),
            frac.z - frac.z.round(),
        ))
    }

    /// Reciprocal lattice points within the index bound, ascending by norm.
    pub fn reciprocal_points(&self, max_index: i32) -> Vec<ReciprocalPoint3D> {
        generate_reciprocal_points_3d(&self.reciprocal, max_index)
    }

    /// Bragg planes for overlay rendering, ascending by distance.
    pub fn bragg_planes(&self, max_index: i32) -> Vec<BraggPlane3D> {
        bragg_planes_3d(&self.reciprocal_points(max_index))
    }

    /// k-points along the standard high symmetry path.
    pub fn k_path(&self, n_per_segment: usize) -> Vec<Vector3<f64>> {
        interpolate_path_3d(&self.high_symmetry, n_per_segment)
    }
}
