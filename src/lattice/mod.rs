// Lattice module: catalog bases, reciprocal-lattice derivation and
// Brillouin-zone construction.

// ======================== MODULE DECLARATIONS ========================
pub mod construction;
pub mod lattice2d;
pub mod lattice3d;
pub mod lattice_types;
pub mod reciprocal;
pub mod zones;

mod _tests_lattice2d;
mod _tests_lattice3d;

// ======================== LATTICE TYPES & CATALOG ========================
pub use lattice_types::{LatticeTag, LatticeType2D, LatticeType3D};

pub use construction::{
    basis_2d,           // fn(LatticeType2D, a, b) -> Result<LatticeBasis2D>
    basis_3d,           // fn(LatticeType3D, a) -> Result<LatticeBasis3D>
    bcc_basis,          // fn(a) -> Result<LatticeBasis3D> - half-body diagonals
    cubic_basis,        // fn(a) -> Result<LatticeBasis3D> - conventional cube axes
    fcc_basis,          // fn(a) -> Result<LatticeBasis3D> - half-face diagonals
    hexagonal_basis,    // fn(a) -> Result<LatticeBasis2D> - 60 degree convention
    rectangular_basis,  // fn(a, b) -> Result<LatticeBasis2D>
    square_basis,       // fn(a) -> Result<LatticeBasis2D>
    LatticeBasis2D,
    LatticeBasis3D,
};

// ======================== RECIPROCAL TRANSFORM ========================
pub use reciprocal::{
    bragg_planes_2d,                // one plane per reciprocal point, order preserved
    bragg_planes_3d,
    generate_reciprocal_points_2d,  // (2m+1)^2 - 1 points, ascending by norm
    generate_reciprocal_points_3d,  // (2m+1)^3 - 1 points, ascending by norm
    reciprocal_basis_2d,            // 2D dual-basis formula, 2-pi convention
    reciprocal_basis_3d,            // b_i = 2*pi * (a_j x a_k) / vol
    BraggPlane2D,
    BraggPlane3D,
    ReciprocalBasis2D,
    ReciprocalBasis3D,
    ReciprocalPoint2D,
    ReciprocalPoint3D,
};

// ======================== ZONE CONSTRUCTION ========================
pub use zones::{
    compute_accumulated_zone_2d,  // convex region of the first n plane shells
    compute_first_zone_2d,        // Wigner-Seitz cell of the 2D reciprocal lattice
    compute_first_zone_3d,        // Wigner-Seitz cell of the 3D reciprocal lattice
    compute_zone_2d,              // nth zone as disjoint convex fragments
    compute_zones_2d,             // zones 1..=max_zone, shared plane enumeration
    plane_shells_2d,              // group planes by equal distance from origin
    suggested_max_index,          // caller heuristic for the index bound
    zone_index_of_2d,             // crossing-count classification
    zone_index_of_3d,
    FragmentBudget,
    Zone2D,
    SEED_HALF_WIDTH_2D,
    SEED_HALF_WIDTH_3D,
    SHELL_EPS,
};

// ======================== LATTICE AGGREGATES ========================
pub use lattice2d::Lattice2D;
pub use lattice3d::Lattice3D;
