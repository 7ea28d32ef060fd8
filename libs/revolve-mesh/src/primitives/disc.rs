//! # Disc Primitive
//!
//! Flat circular cap: a centre vertex and a fan of rim vertices.

use super::{check_slices, Facing};
use crate::angular::{AngularRange, SliceSpacing};
use crate::error::MeshResult;
use crate::mesh::Mesh;
use glam::DVec3;
use log::debug;

/// Creates a fan-triangulated disc of `radius` at height `z`.
///
/// Vertex 0 is the centre `(0, 0, z)`; vertex `1 + i` is the rim point of
/// slice `i`. Triangle `i` joins the centre to rim points `i` and
/// `(i + 1) mod slices`, so the fan closes back onto the first rim vertex.
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
/// use revolve_mesh::{create_disc, AngularRange, Facing};
///
/// let disc = create_disc(AngularRange::full(), 1.0, 1.0, 8, Facing::Down).unwrap();
/// assert_eq!(disc.vertex_count(), 9);
/// assert_eq!(disc.triangles()[7], [0, 1, 8]);
/// ```
pub fn create_disc(
    range: AngularRange,
    radius: f64,
    z: f64,
    slices: u32,
    facing: Facing,
) -> MeshResult<Mesh> {
    check_slices(slices, slices as u64 + 1, "disc")?;

    let mut mesh = Mesh::with_capacity(slices as usize + 1, slices as usize);
    let center = mesh.add_vertex(DVec3::new(0.0, 0.0, z));

    for i in 0..slices {
        let theta = SliceSpacing::Subdivide.angle(range, slices, i);
        let (sin, cos) = theta.sin_cos();
        mesh.add_vertex(DVec3::new(radius * cos, radius * sin, z));
    }

    for i in 0..slices {
        let current = 1 + i;
        let next = 1 + (i + 1) % slices;
        match facing {
            Facing::Up => mesh.add_triangle(center, current, next),
            Facing::Down => mesh.add_triangle(center, next, current),
        }
    }

    debug!(
        "disc r={} z={} slices={} {:?}: {} vertices",
        radius,
        z,
        slices,
        facing,
        mesh.vertex_count()
    );

    Ok(mesh)
}
