use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::geometry::vectors::cross_2d;
use crate::geometry::ConvexPolygon;
use crate::lattice::construction::{basis_2d, LatticeBasis2D};
use crate::lattice::lattice_types::LatticeType2D;
use crate::lattice::reciprocal::{
    bragg_planes_2d, generate_reciprocal_points_2d, reciprocal_basis_2d, BraggPlane2D,
    ReciprocalBasis2D, ReciprocalPoint2D,
};
use crate::lattice::zones::{
    compute_first_zone_2d, compute_zone_2d, compute_zones_2d, suggested_max_index,
    FragmentBudget, Zone2D,
};
use crate::symmetries::high_symmetry_points::{
    generate_2d_high_symmetry_points, interpolate_path_2d, HighSymmetryData2D,
};
use crate::Result;

/// A 2D Bravais lattice with its derived reciprocal-space data.
///
/// Everything is computed once at construction: the reciprocal basis, the
/// first Brillouin zone and the high symmetry points. Higher zones are
/// derived on demand through [`zone`](Self::zone) since they depend on
/// caller-chosen bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lattice2D {
    /// Catalog type this lattice was built from.
    pub lattice_type: LatticeType2D,
    /// Real-space basis vectors and display name.
    pub basis: LatticeBasis2D,
    /// Reciprocal basis (2-pi convention).
    pub reciprocal: ReciprocalBasis2D,
    /// Unit cell area.
    pub cell_area: f64,
    /// First Brillouin zone.
    pub brillouin_zone: ConvexPolygon,
    /// High symmetry points and the standard path.
    pub high_symmetry: HighSymmetryData2D,
}

impl Lattice2D {
    /// Construct a lattice from the catalog. The second constant `b` is
    /// only used by the rectangular lattice.
    pub fn new(lattice_type: LatticeType2D, a: f64, b: f64) -> Result<Self> {
        Self::from_basis(lattice_type, basis_2d(lattice_type, a, b)?)
    }

    pub fn from_basis(lattice_type: LatticeType2D, basis: LatticeBasis2D) -> Result<Self> {
        let reciprocal = reciprocal_basis_2d(&basis)?;
        let cell_area = cross_2d(&basis.a1, &basis.a2).abs();
        let brillouin_zone = compute_first_zone_2d(&reciprocal, suggested_max_index(1))?;
        let high_symmetry = generate_2d_high_symmetry_points(lattice_type, &reciprocal);
        Ok(Self {
            lattice_type,
            basis,
            reciprocal,
            cell_area,
            brillouin_zone,
            high_symmetry,
        })
    }

    /// Convert fractional reciprocal coordinates to a Cartesian k-vector.
    pub fn frac_to_cart(&self, frac: Vector2<f64>) -> Vector2<f64> {
        self.reciprocal.b1 * frac.x + self.reciprocal.b2 * frac.y
    }

    /// Convert a Cartesian k-vector to fractional reciprocal coordinates.
    pub fn cart_to_frac(&self, k: Vector2<f64>) -> Vector2<f64> {
        // The reciprocal basis is non-degenerate by construction.
        let det = cross_2d(&self.reciprocal.b1, &self.reciprocal.b2);
        Vector2::new(
            cross_2d(&k, &self.reciprocal.b2) / det,
            cross_2d(&self.reciprocal.b1, &k) / det,
        )
    }

    /// Check whether a k-point lies in the first Brillouin zone.
    pub fn in_brillouin_zone(&self, k: Vector2<f64>) -> bool {
        self.brillouin_zone.contains(&k)
    }

    /// Translate a k-point by reciprocal lattice vectors into the central
    /// cell (fractional coordinates in [-1/2, 1/2)).
    pub fn reduce_to_central_cell(&self, k: Vector2<f64>) -> Vector2<f64> {
        let frac = self.cart_to_frac(k);
        self.frac_to_cart(Vector2::new(frac.x - frac.x.round(), frac.y - frac.y.round()))
    }

    /// Reciprocal lattice points within the index bound, ascending by norm.
    pub fn reciprocal_points(&self, max_index: i32) -> Vec<ReciprocalPoint2D> {
        generate_reciprocal_points_2d(&self.reciprocal, max_index)
    }

    /// Bragg planes for overlay rendering, ascending by distance.
    pub fn bragg_planes(&self, max_index: i32) -> Vec<BraggPlane2D> {
        bragg_planes_2d(&self.reciprocal_points(max_index))
    }

    /// The nth Brillouin zone.
    pub fn zone(&self, order: usize, max_index: i32, budget: FragmentBudget) -> Result<Zone2D> {
        compute_zone_2d(&self.reciprocal, order, max_index, budget)
    }

    /// All zones 1..=max_zone.
    pub fn zones(
        &self,
        max_zone: usize,
        max_index: i32,
        budget: FragmentBudget,
    ) -> Result<Vec<Zone2D>> {
        compute_zones_2d(&self.reciprocal, max_zone, max_index, budget)
    }

    /// k-points along the standard high symmetry path.
    pub fn k_path(&self, n_per_segment: usize) -> Vec<Vector2<f64>> {
        interpolate_path_2d(&self.high_symmetry, n_per_segment)
    }
}
