use thiserror::Error;

/// Errors surfaced by lattice and zone construction.
///
/// Every failure is deterministic for a given input and is reported to the
/// caller; nothing is retried or swallowed. Geometric edge cases that are
/// expected outcomes of clipping (empty polygons, dropped faces, zero-area
/// fragments) are not errors and yield empty/degenerate values instead.
#[derive(Debug, Error)]
pub enum LatticeError {
    /// The caller supplied a lattice tag outside the supported catalog.
    #[error("unknown lattice type `{0}` (expected square, rectangular, hexagonal, cubic, fcc or bcc)")]
    InvalidLatticeType(String),

    /// The real-space basis is singular or near-singular; no reciprocal
    /// basis exists and no clipping is attempted.
    #[error("degenerate lattice basis: {0}")]
    DegenerateBasis(String),

    /// Too few reciprocal points were generated to bound the requested
    /// region: after applying every Bragg plane the clipped shape still
    /// touches the initial oversized bounding shape.
    #[error("insufficient reciprocal coverage: {0}")]
    InsufficientReciprocalCoverage(String),
}
