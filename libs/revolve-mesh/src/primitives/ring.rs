//! # Ring Primitive
//!
//! Flat annulus in the plane `z = const`, built with the same slice pairing
//! and wrap-around tiling as the tube. Each slice pairs an inner and an
//! outer point instead of a top and a bottom one.

use super::{check_slices, revolve_band, Facing};
use crate::angular::{AngularRange, SliceSpacing};
use crate::error::MeshResult;
use crate::mesh::Mesh;
use glam::DVec2;
use log::debug;

/// Creates a flat ring between `inner_radius` and `outer_radius` at height
/// `z`.
///
/// `Facing::Up` stores each slice as `(inner, outer)` so front faces point
/// towards +Z for a counter-clockwise range; `Facing::Down` stores
/// `(outer, inner)`. The facing assumes `inner_radius <= outer_radius`;
/// swapping the radii flips it.
///
/// # Errors
///
/// Returns [`MeshError::InvalidArgument`](crate::MeshError::InvalidArgument)
/// when `slices` is zero, and
/// [`MeshError::TooManyVertices`](crate::MeshError::TooManyVertices) when
/// the mesh would exceed [`MAX_MESH_VERTICES`](config::constants::MAX_MESH_VERTICES)
/// vertices.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::{create_ring, AngularRange, Facing};
///
/// let ring = create_ring(AngularRange::full(), 0.7, 0.9, 1.0, 8, Facing::Up).unwrap();
/// assert_eq!(ring.vertex_count(), 16);
/// assert!(ring.triangle_normal(0).z > 0.0);
/// ```
pub fn create_ring(
    range: AngularRange,
    inner_radius: f64,
    outer_radius: f64,
    z: f64,
    slices: u32,
    facing: Facing,
) -> MeshResult<Mesh> {
    check_slices(slices, 2 * slices as u64, "ring")?;

    let inner = DVec2::new(inner_radius, z);
    let outer = DVec2::new(outer_radius, z);
    let (first, second) = match facing {
        Facing::Up => (inner, outer),
        Facing::Down => (outer, inner),
    };

    let mesh = revolve_band(range, SliceSpacing::Subdivide, slices, first, second);

    debug!(
        "ring r=[{}, {}] z={} slices={} {:?}: {} vertices",
        inner_radius,
        outer_radius,
        z,
        slices,
        facing,
        mesh.vertex_count()
    );

    Ok(mesh)
}
