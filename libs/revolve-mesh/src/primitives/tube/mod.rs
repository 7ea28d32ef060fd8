//! # Tube Primitive
//!
//! Open cylindrical shell around the Z axis: two rings of points at
//! `z = +height` and `z = -height`, joined slice by slice, with no end caps.

use super::{check_slices, revolve_band};
use crate::angular::{AngularRange, SliceSpacing};
use crate::error::MeshResult;
use crate::mesh::Mesh;
use config::constants::{GeneratorConfig, MAX_SLICES};
use glam::DVec2;
use log::debug;
use serde::{Deserialize, Serialize};

/// Parameters of an open tube.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::{AngularRange, TubeParams};
/// use std::f64::consts::PI;
///
/// let mesh = TubeParams::new(0.5, 2.0)
///     .with_range(AngularRange::new(0.0, PI))
///     .with_slices(2)
///     .generate()
///     .unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TubeParams {
    /// Angular sweep of the shell.
    pub range: AngularRange,
    /// Distance of every vertex from the Z axis. Zero is allowed and
    /// collapses the shell onto the axis.
    pub radius: f64,
    /// Top ring sits at `+half_height`, bottom ring at `-half_height`.
    pub half_height: f64,
    /// Number of slices; must be at least 1.
    pub slices: u32,
    /// How slice angles are derived from `range`.
    pub spacing: SliceSpacing,
}

impl TubeParams {
    /// A full-revolution tube at the default resolution of
    /// [`MAX_SLICES`] slices.
    pub fn new(radius: f64, half_height: f64) -> Self {
        Self {
            range: AngularRange::full(),
            radius,
            half_height,
            slices: MAX_SLICES,
            spacing: SliceSpacing::Subdivide,
        }
    }

    /// A tube whose slice count is derived from `range` at the
    /// configuration's resolution.
    ///
    /// # Errors
    ///
    /// Fails when the range rounds to fewer than one slice.
    pub fn derived(
        range: AngularRange,
        radius: f64,
        half_height: f64,
        config: &GeneratorConfig,
    ) -> MeshResult<Self> {
        let slices = range.derive_slices_with(config)?;
        Ok(Self::new(radius, half_height)
            .with_range(range)
            .with_slices(slices))
    }

    /// Sets the angular sweep.
    pub fn with_range(mut self, range: AngularRange) -> Self {
        self.range = range;
        self
    }

    /// Sets the slice count.
    pub fn with_slices(mut self, slices: u32) -> Self {
        self.slices = slices;
        self
    }

    /// Sets the slice spacing rule.
    pub fn with_spacing(mut self, spacing: SliceSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Generates the tube mesh. See [`create_tube`].
    pub fn generate(&self) -> MeshResult<Mesh> {
        create_tube(self)
    }
}

/// Generates an open tube spanning `angle_from..angle_to` with `slices`
/// uniform subdivisions.
///
/// For slice `i`, `θ = angle_from + i · (angle_to - angle_from) / slices`;
/// vertex `2i` is `(r cos θ, r sin θ, +height)` and vertex `2i + 1` is
/// `(r cos θ, r sin θ, -height)`. Each slice is joined to the next by the
/// triangles `{0,1,3, 0,3,2}` offset by `2i`, all indices taken modulo
/// `2 · slices` so the last slice closes back onto the first.
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
/// use revolve_mesh::generate;
/// use std::f64::consts::TAU;
///
/// let mesh = generate(0.0, TAU, 1.0, 1.0, 4).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangles()[7], [6, 1, 0]);
///
/// assert!(generate(0.0, TAU, 1.0, 1.0, 0).is_err());
/// ```
pub fn generate(
    angle_from: f64,
    angle_to: f64,
    radius: f64,
    height: f64,
    slices: u32,
) -> MeshResult<Mesh> {
    TubeParams::new(radius, height)
        .with_range(AngularRange::new(angle_from, angle_to))
        .with_slices(slices)
        .generate()
}

/// Generates an open tube from its parameters.
///
/// # Errors
///
/// Returns [`MeshError::InvalidArgument`](crate::MeshError::InvalidArgument)
/// when `params.slices` is zero, and
/// [`MeshError::TooManyVertices`](crate::MeshError::TooManyVertices) when
/// the mesh would exceed [`MAX_MESH_VERTICES`](config::constants::MAX_MESH_VERTICES)
/// vertices.
pub fn create_tube(params: &TubeParams) -> MeshResult<Mesh> {
    check_slices(params.slices, 2 * params.slices as u64, "tube")?;

    let mesh = revolve_band(
        params.range,
        params.spacing,
        params.slices,
        DVec2::new(params.radius, params.half_height),
        DVec2::new(params.radius, -params.half_height),
    );

    debug!(
        "tube r={} h=±{} range=[{}, {}] slices={} ({:?}): {} vertices, {} triangles",
        params.radius,
        params.half_height,
        params.range.start,
        params.range.end,
        params.slices,
        params.spacing,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests;
