//! # Mesh Parts
//!
//! Turns a [`ShapeNode`] into its independent meshes. Every part is a
//! self-contained [`Mesh`] with its own vertex numbering; nothing is
//! welded or merged between parts.

use crate::error::{ShapeError, ShapeResult};
use crate::node::ShapeNode;
use log::trace;
use revolve_mesh::{
    create_disc, create_ring, create_tube, AngularRange, Facing, Mesh, SliceSpacing, TubeParams,
};
use serde::{Deserialize, Serialize};

/// Role of a part within its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    /// The only wall of a tube or capped cylinder.
    Wall,
    /// Outer wall of a pipe.
    OuterWall,
    /// Inner wall of a pipe, facing the axis.
    InnerWall,
    /// Cap at `+half_height`.
    TopCap,
    /// Cap at `-half_height`.
    BottomCap,
    /// A standalone ring or disc.
    Face,
}

/// One independent mesh of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPart {
    /// Role of the part.
    pub kind: PartKind,
    /// Geometry of the part.
    pub mesh: Mesh,
}

impl MeshPart {
    fn new(kind: PartKind, mesh: Mesh) -> Self {
        Self { kind, mesh }
    }
}

/// Builds the meshes of a shape, in drawing order.
///
/// | Shape | Parts |
/// |-------|-------|
/// | `Tube` | `Wall` |
/// | `Ring`, `Disc` | `Face` |
/// | `CappedCylinder` | `Wall`, `TopCap`, `BottomCap` |
/// | `Pipe` | `OuterWall`, `InnerWall`, then `TopCap`, `BottomCap` when capped |
///
/// # Errors
///
/// - [`ShapeError::Mesh`] when a part has zero slices.
/// - [`ShapeError::InvalidDimensions`] when a pipe's inner radius exceeds
///   its outer radius.
///
/// # Example
///
/// ```rust
/// use revolve_shapes::{build_parts, PartKind, ShapeNode};
///
/// let parts = build_parts(&ShapeNode::pipe(0.7, 0.9, 1.0)).unwrap();
/// assert_eq!(parts.len(), 4);
/// assert_eq!(parts[1].kind, PartKind::InnerWall);
/// ```
pub fn build_parts(node: &ShapeNode) -> ShapeResult<Vec<MeshPart>> {
    let parts = match *node {
        ShapeNode::Tube {
            range,
            radius,
            half_height,
            slices,
            spacing,
        } => {
            let params = TubeParams {
                range,
                radius,
                half_height,
                slices,
                spacing,
            };
            vec![MeshPart::new(PartKind::Wall, create_tube(&params)?)]
        }

        ShapeNode::Ring {
            range,
            inner_radius,
            outer_radius,
            z,
            slices,
            facing,
        } => vec![MeshPart::new(
            PartKind::Face,
            create_ring(range, inner_radius, outer_radius, z, slices, facing)?,
        )],

        ShapeNode::Disc {
            range,
            radius,
            z,
            slices,
            facing,
        } => vec![MeshPart::new(
            PartKind::Face,
            create_disc(range, radius, z, slices, facing)?,
        )],

        ShapeNode::CappedCylinder {
            range,
            radius,
            half_height,
            slices,
        } => capped_cylinder_parts(range, radius, half_height, slices)?,

        ShapeNode::Pipe {
            range,
            inner_radius,
            outer_radius,
            half_height,
            slices,
            spacing,
            capped,
        } => pipe_parts(
            range,
            inner_radius,
            outer_radius,
            half_height,
            slices,
            spacing,
            capped,
        )?,
    };

    trace!("{} -> {} parts", node.kind(), parts.len());
    Ok(parts)
}

fn capped_cylinder_parts(
    range: AngularRange,
    radius: f64,
    half_height: f64,
    slices: u32,
) -> ShapeResult<Vec<MeshPart>> {
    let wall = TubeParams::new(radius, half_height)
        .with_range(range)
        .with_slices(slices);

    Ok(vec![
        MeshPart::new(PartKind::Wall, create_tube(&wall)?),
        MeshPart::new(
            PartKind::TopCap,
            create_disc(range, radius, half_height, slices, Facing::Up)?,
        ),
        MeshPart::new(
            PartKind::BottomCap,
            create_disc(range, radius, -half_height, slices, Facing::Down)?,
        ),
    ])
}

fn pipe_parts(
    range: AngularRange,
    inner_radius: f64,
    outer_radius: f64,
    half_height: f64,
    slices: u32,
    spacing: SliceSpacing,
    capped: bool,
) -> ShapeResult<Vec<MeshPart>> {
    if inner_radius > outer_radius {
        return Err(ShapeError::invalid_dimensions(format!(
            "pipe inner radius {inner_radius} exceeds outer radius {outer_radius}"
        )));
    }

    let outer = TubeParams {
        range,
        radius: outer_radius,
        half_height,
        slices,
        spacing,
    };
    let outer_wall = create_tube(&outer)?;

    // Inner wall visits the outer wall's angles in reverse so it faces the axis
    let (back_range, back_spacing) = spacing.walk_back(range, slices);
    let inner = TubeParams {
        range: back_range,
        radius: inner_radius,
        half_height,
        slices,
        spacing: back_spacing,
    };

    let mut parts = vec![
        MeshPart::new(PartKind::OuterWall, outer_wall),
        MeshPart::new(PartKind::InnerWall, create_tube(&inner)?),
    ];

    if capped {
        // Subdividing the swept range lands on the walls' angles
        let swept = spacing.swept_range(range, slices);
        parts.push(MeshPart::new(
            PartKind::TopCap,
            create_ring(swept, inner_radius, outer_radius, half_height, slices, Facing::Up)?,
        ));
        parts.push(MeshPart::new(
            PartKind::BottomCap,
            create_ring(swept, inner_radius, outer_radius, -half_height, slices, Facing::Down)?,
        ));
    }

    Ok(parts)
}
