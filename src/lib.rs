//! Brillouin-zone construction library
//!
//! This library derives reciprocal lattices from 2D and 3D Bravais lattice
//! bases and constructs the convex cells bounding their Brillouin zones:
//! the first zone (Wigner-Seitz cell of the reciprocal lattice) in 2D and
//! 3D, and higher-order zones in 2D via half-plane subdivision and
//! crossing-count classification.
//!
//! The geometric engine is intentionally small: Sutherland-Hodgman clipping
//! of convex polygons, face-based half-space clipping of convex polyhedra,
//! and the measures (area, centroid, volume, containment) that zone
//! construction needs. Rendering, input handling, and export live outside
//! this crate; everything here is plain serializable data.

pub mod error;
pub mod geometry;
pub mod lattice;
pub mod symmetries;

pub use error::LatticeError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, error::LatticeError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
