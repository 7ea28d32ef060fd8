//! # Primitives
//!
//! Mesh generation for revolved primitives (tube, ring, disc).
//!
//! Tubes and rings share one construction: every slice contributes a pair
//! of points taken from a two-point profile swept around the Z axis, and
//! each pair of consecutive slices is joined by a quad. Discs fan out from
//! a single centre vertex instead.

pub mod disc;
pub mod ring;
pub mod tube;

pub use disc::create_disc;
pub use ring::create_ring;
pub use tube::{create_tube, generate, TubeParams};

use crate::angular::{AngularRange, SliceSpacing};
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::MAX_MESH_VERTICES;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Which side of a flat primitive (ring or disc) its triangles face, for a
/// counter-clockwise sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    /// Front faces point towards +Z.
    #[default]
    Up,
    /// Front faces point towards -Z.
    Down,
}

/// Local index pattern of the quad joining slice `i` to slice `i + 1`,
/// relative to `2 * i`: `first(i), second(i), second(i+1)` and
/// `first(i), second(i+1), first(i+1)`.
const QUAD_PATTERN: [u32; 6] = [0, 1, 3, 0, 3, 2];

/// Rejects slice counts the generators refuse to run on.
///
/// `vertex_count` is the number of vertices the primitive would need; it
/// must not exceed [`MAX_MESH_VERTICES`]. The check runs before any buffer
/// is allocated.
fn check_slices(slices: u32, vertex_count: u64, what: &str) -> MeshResult<()> {
    if slices == 0 {
        return Err(MeshError::invalid_argument(format!(
            "{what} slices must be >= 1, got 0"
        )));
    }
    if vertex_count > MAX_MESH_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: vertex_count as usize,
            max: MAX_MESH_VERTICES as usize,
        });
    }
    Ok(())
}

/// The two triangles joining slice `slice` to the next one.
///
/// Every index is reduced modulo `2 * slices`, so the last slice folds back
/// onto vertices 0 and 1 and closes the band.
pub(crate) fn quad_triangles(slice: u32, slices: u32) -> [[u32; 3]; 2] {
    let vertex_count = 2 * slices;
    let base = 2 * slice;
    let at = |k: usize| (base + QUAD_PATTERN[k]) % vertex_count;
    [[at(0), at(1), at(2)], [at(3), at(4), at(5)]]
}

/// Sweeps a two-point profile `(radius, z)` around the Z axis.
///
/// Vertex `2i` is `first` at slice `i`, vertex `2i + 1` is `second`.
fn revolve_band(
    range: AngularRange,
    spacing: SliceSpacing,
    slices: u32,
    first: DVec2,
    second: DVec2,
) -> Mesh {
    let mut mesh = Mesh::with_capacity(2 * slices as usize, 2 * slices as usize);

    for i in 0..slices {
        let theta = spacing.angle(range, slices, i);
        let (sin, cos) = theta.sin_cos();
        mesh.add_vertex(DVec3::new(first.x * cos, first.x * sin, first.y));
        mesh.add_vertex(DVec3::new(second.x * cos, second.x * sin, second.y));
    }

    for i in 0..slices {
        for [a, b, c] in quad_triangles(i, slices) {
            mesh.add_triangle(a, b, c);
        }
    }

    mesh
}
