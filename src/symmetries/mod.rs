// Symmetries module: high symmetry points and band-structure paths.

// ======================== MODULE DECLARATIONS ========================
pub mod high_symmetry_points;

// Test modules
mod _tests_high_symmetry_points;

// ======================== HIGH SYMMETRY POINTS & PATHS ========================
pub use high_symmetry_points::{
    generate_2d_high_symmetry_points, // fn(LatticeType2D, &ReciprocalBasis2D) -> HighSymmetryData2D
    generate_3d_high_symmetry_points, // fn(LatticeType3D, &ReciprocalBasis3D) -> HighSymmetryData3D
    interpolate_path_2d,              // k-points along the standard path
    interpolate_path_3d,
    HighSymmetryData2D,
    HighSymmetryData3D,
    HighSymmetryPoint2D,
    HighSymmetryPoint3D,
    SymmetryPointLabel,
};
