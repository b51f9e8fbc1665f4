use log::{debug, warn};
use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::LatticeError;
use crate::geometry::{ConvexPolygon, ConvexPolyhedron};
use crate::lattice::reciprocal::{
    bragg_planes_2d, bragg_planes_3d, generate_reciprocal_points_2d,
    generate_reciprocal_points_3d, BraggPlane2D, BraggPlane3D, ReciprocalBasis2D,
    ReciprocalBasis3D,
};
use crate::Result;

/// Half-width of the oversized seed square for 2D zone clipping.
pub const SEED_HALF_WIDTH_2D: f64 = 100.0;

/// Half-width of the oversized seed cube for 3D zone clipping.
pub const SEED_HALF_WIDTH_3D: f64 = 50.0;

/// Tolerance for grouping Bragg planes into equal-distance shells.
pub const SHELL_EPS: f64 = 1e-9;

// Fragments below this area are clipping residue, not zone pieces.
const MIN_FRAGMENT_AREA: f64 = 1e-9;

// Relative Chebyshev margin under which a vertex counts as touching the
// seed shape, i.e. the Bragg planes never cut that region away.
const SEED_CONTACT_MARGIN: f64 = 1e-6;

/// Cap on the fragment count during nth-zone subdivision. Exceeding it
/// stops subdivision and marks the zone as truncated instead of crashing
/// or running unbounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FragmentBudget {
    pub max_fragments: usize,
}

impl FragmentBudget {
    pub fn new(max_fragments: usize) -> Self {
        Self { max_fragments }
    }
}

impl Default for FragmentBudget {
    fn default() -> Self {
        Self { max_fragments: 500 }
    }
}

/// One 2D Brillouin zone: the zone index, its disjoint convex fragments in
/// CCW order, and whether subdivision ran out of budget before the
/// fragment set was complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone2D {
    pub index: usize,
    pub fragments: Vec<ConvexPolygon>,
    pub truncated: bool,
}

impl Zone2D {
    /// Total area over all fragments.
    pub fn area(&self) -> f64 {
        self.fragments.iter().map(|f| f.area()).sum()
    }
}

/// Caller heuristic for the reciprocal index bound needed to bound zones
/// up to `max_zone`.
pub fn suggested_max_index(max_zone: usize) -> i32 {
    (max_zone as f64).sqrt().ceil() as i32 + 5
}

/// Zone index of a k-point by exact half-space crossing count:
/// `1 + |{G : G.k > |G|^2 / 2}|`.
pub fn zone_index_of_2d(planes: &[BraggPlane2D], k: &Vector2<f64>) -> usize {
    1 + planes.iter().filter(|p| p.normal.dot(k) > p.offset).count()
}

/// 3D analogue of [`zone_index_of_2d`].
pub fn zone_index_of_3d(planes: &[BraggPlane3D], k: &Vector3<f64>) -> usize {
    1 + planes.iter().filter(|p| p.normal.dot(k) > p.offset).count()
}

/// Group Bragg planes into shells of equal distance from the origin
/// (within [`SHELL_EPS`]), so that lattice-symmetry degeneracies are
/// treated as one shell. Expects planes ascending by distance, as produced
/// by [`bragg_planes_2d`] from a sorted point set.
pub fn plane_shells_2d(planes: &[BraggPlane2D]) -> Vec<Vec<BraggPlane2D>> {
    let mut shells: Vec<Vec<BraggPlane2D>> = Vec::new();
    let mut shell_distance = f64::NEG_INFINITY;
    for plane in planes {
        let distance = plane.distance();
        if (distance - shell_distance).abs() > SHELL_EPS {
            shells.push(Vec::new());
            shell_distance = distance;
        }
        if let Some(shell) = shells.last_mut() {
            shell.push(*plane);
        }
    }
    shells
}

/// First Brillouin zone (Wigner-Seitz cell of the reciprocal lattice) in 2D.
///
/// Clips the oversized seed square by every Bragg plane in ascending
/// distance order. Nearer planes are the likelier binding constraints, so
/// this keeps intermediate polygons small; the final shape is
/// order-independent.
pub fn compute_first_zone_2d(
    basis: &ReciprocalBasis2D,
    max_index: i32,
) -> Result<ConvexPolygon> {
    let planes = bragg_planes_2d(&generate_reciprocal_points_2d(basis, max_index));
    first_zone_from_planes_2d(&planes)
}

fn first_zone_from_planes_2d(planes: &[BraggPlane2D]) -> Result<ConvexPolygon> {
    let mut polygon = ConvexPolygon::bounding_square(SEED_HALF_WIDTH_2D);
    for plane in planes {
        polygon = polygon.clip_half_plane(&plane.normal, plane.offset);
        if polygon.is_degenerate() {
            break;
        }
    }
    ensure_bounded_2d(&polygon)?;
    Ok(polygon)
}

/// First Brillouin zone in 3D, by half-space clipping of the seed cube.
/// Higher 3D zones are not constructed.
pub fn compute_first_zone_3d(
    basis: &ReciprocalBasis3D,
    max_index: i32,
) -> Result<ConvexPolyhedron> {
    let planes = bragg_planes_3d(&generate_reciprocal_points_3d(basis, max_index));
    let mut cell = ConvexPolyhedron::axis_aligned_cube(SEED_HALF_WIDTH_3D);
    for plane in &planes {
        cell = cell.clip_half_space(&plane.normal, plane.offset);
        if cell.is_degenerate() {
            break;
        }
    }
    ensure_bounded_3d(&cell)?;
    Ok(cell)
}

/// Convex region enclosed by the first `order` Bragg-plane shells.
///
/// This is the accumulation overlay exposed to rendering collaborators. It
/// equals the union of zones 1..=order exactly when that union is convex;
/// see [`compute_zone_2d`] for the exact per-zone decomposition.
pub fn compute_accumulated_zone_2d(
    basis: &ReciprocalBasis2D,
    order: usize,
    max_index: i32,
) -> Result<ConvexPolygon> {
    let planes = bragg_planes_2d(&generate_reciprocal_points_2d(basis, max_index));
    let shells = plane_shells_2d(&planes);
    accumulated_from_shells(&shells, order)
}

fn accumulated_from_shells(
    shells: &[Vec<BraggPlane2D>],
    order: usize,
) -> Result<ConvexPolygon> {
    if order > shells.len() {
        return Err(LatticeError::InsufficientReciprocalCoverage(format!(
            "only {} plane shells available for accumulation order {order}; increase max_index",
            shells.len()
        )));
    }
    let mut polygon = ConvexPolygon::bounding_square(SEED_HALF_WIDTH_2D);
    for plane in shells[..order].iter().flatten() {
        polygon = polygon.clip_half_plane(&plane.normal, plane.offset);
        if polygon.is_degenerate() {
            break;
        }
    }
    ensure_bounded_2d(&polygon)?;
    Ok(polygon)
}

/// The nth Brillouin zone in 2D as a set of disjoint convex fragments.
///
/// The zone is carved out of its convex envelope (the seed clipped by
/// every plane at `order` times its offset: any point outside that region
/// has crossed the planes of G, 2G, ..., order*G and lies in a higher
/// zone). The envelope is subdivided by every Bragg plane that can reach
/// it, both half-spaces at a time, and a fragment belongs to the zone iff
/// the crossing count at its centroid matches the zone index. Fragments
/// are re-sorted CCW before being returned.
pub fn compute_zone_2d(
    basis: &ReciprocalBasis2D,
    order: usize,
    max_index: i32,
    budget: FragmentBudget,
) -> Result<Zone2D> {
    let planes = bragg_planes_2d(&generate_reciprocal_points_2d(basis, max_index));
    zone_from_planes(&planes, order, budget)
}

/// All zones 1..=max_zone for one configuration, sharing a single plane
/// enumeration.
pub fn compute_zones_2d(
    basis: &ReciprocalBasis2D,
    max_zone: usize,
    max_index: i32,
    budget: FragmentBudget,
) -> Result<Vec<Zone2D>> {
    let planes = bragg_planes_2d(&generate_reciprocal_points_2d(basis, max_index));
    (1..=max_zone)
        .map(|order| zone_from_planes(&planes, order, budget))
        .collect()
}

fn zone_from_planes(
    planes: &[BraggPlane2D],
    order: usize,
    budget: FragmentBudget,
) -> Result<Zone2D> {
    if order == 0 {
        return Ok(Zone2D { index: 0, fragments: Vec::new(), truncated: false });
    }
    if order == 1 {
        let first = first_zone_from_planes_2d(planes)?;
        let fragments = if first.is_degenerate() { Vec::new() } else { vec![first] };
        return Ok(Zone2D { index: 1, fragments, truncated: false });
    }

    // Fewer plane shells than the zone order cannot resolve the zone.
    let shells = plane_shells_2d(planes);
    if shells.len() < order {
        return Err(LatticeError::InsufficientReciprocalCoverage(format!(
            "only {} plane shells available to resolve zone {order}; increase max_index",
            shells.len()
        )));
    }

    let envelope = zone_envelope_2d(planes, order)?;
    if envelope.is_degenerate() {
        return Ok(Zone2D { index: order, fragments: Vec::new(), truncated: false });
    }

    // Planes farther from the origin than the envelope reaches cannot
    // cross it and are skipped during subdivision. They cannot affect
    // crossing counts inside the envelope either.
    let reach = envelope.bounding_radius();
    let active: Vec<BraggPlane2D> = planes
        .iter()
        .filter(|p| p.distance() <= reach)
        .copied()
        .collect();

    let (pieces, truncated) = subdivide_by_planes(envelope, &active, budget);
    if truncated {
        warn!(
            "zone {order} subdivision stopped at the {}-fragment budget; result is incomplete",
            budget.max_fragments
        );
    }

    let fragments: Vec<ConvexPolygon> = pieces
        .into_iter()
        .filter(|f| !f.is_degenerate() && f.area() > MIN_FRAGMENT_AREA)
        .filter(|f| zone_index_of_2d(planes, &f.centroid()) == order)
        .map(|f| f.sorted_ccw())
        .collect();
    debug!("zone {order}: {} fragments", fragments.len());

    Ok(Zone2D { index: order, fragments, truncated })
}

// Seed clipped by every plane with its offset inflated by `order`; the
// result is the `order`-fold dilation of the first zone and encloses every
// zone up to `order`.
fn zone_envelope_2d(planes: &[BraggPlane2D], order: usize) -> Result<ConvexPolygon> {
    let factor = order as f64;
    let mut polygon = ConvexPolygon::bounding_square(SEED_HALF_WIDTH_2D);
    for plane in planes {
        polygon = polygon.clip_half_plane(&plane.normal, factor * plane.offset);
        if polygon.is_degenerate() {
            break;
        }
    }
    ensure_bounded_2d(&polygon)?;
    Ok(polygon)
}

fn subdivide_by_planes(
    region: ConvexPolygon,
    planes: &[BraggPlane2D],
    budget: FragmentBudget,
) -> (Vec<ConvexPolygon>, bool) {
    let mut fragments = vec![region];
    for plane in planes {
        if fragments.len() >= budget.max_fragments {
            return (fragments, true);
        }
        let mut next = Vec::with_capacity(fragments.len());
        for fragment in &fragments {
            let below = fragment.clip_half_plane(&plane.normal, plane.offset);
            let flipped = -plane.normal;
            let above = fragment.clip_half_plane(&flipped, -plane.offset);
            let below_real = !below.is_degenerate() && below.area() > MIN_FRAGMENT_AREA;
            let above_real = !above.is_degenerate() && above.area() > MIN_FRAGMENT_AREA;
            if below_real && above_real {
                next.push(below);
                next.push(above);
            } else {
                // The plane misses this fragment; keep it untouched rather
                // than accumulating boundary vertices.
                next.push(fragment.clone());
            }
        }
        fragments = next;
    }
    (fragments, false)
}

fn ensure_bounded_2d(polygon: &ConvexPolygon) -> Result<()> {
    let limit = SEED_HALF_WIDTH_2D * (1.0 - SEED_CONTACT_MARGIN);
    let touching = polygon
        .vertices
        .iter()
        .any(|v| v.x.abs() >= limit || v.y.abs() >= limit);
    if touching {
        return Err(LatticeError::InsufficientReciprocalCoverage(
            "clipped region still touches the seed square; increase max_index".to_string(),
        ));
    }
    Ok(())
}

fn ensure_bounded_3d(cell: &ConvexPolyhedron) -> Result<()> {
    let limit = SEED_HALF_WIDTH_3D * (1.0 - SEED_CONTACT_MARGIN);
    let touching = cell
        .faces
        .iter()
        .flat_map(|f| f.vertices.iter())
        .any(|v| v.x.abs() >= limit || v.y.abs() >= limit || v.z.abs() >= limit);
    if touching {
        return Err(LatticeError::InsufficientReciprocalCoverage(
            "clipped region still touches the seed cube; increase max_index".to_string(),
        ));
    }
    Ok(())
}
