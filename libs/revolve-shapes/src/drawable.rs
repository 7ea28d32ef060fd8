//! # Drawable Shapes
//!
//! A shape ready for drawing: every part already exported to the flat
//! `f32` positions and `u16` indices a renderer uploads, with one flat
//! color per part and a model transform for the whole shape.

use crate::color::Color;
use crate::error::ShapeResult;
use crate::node::ShapeNode;
use crate::parts::{build_parts, MeshPart, PartKind};
use crate::renderer::{DrawCall, Renderer};
use glam::DMat4;
use log::{debug, trace};

/// Upload buffers of one part.
#[derive(Debug, Clone, PartialEq)]
struct PartBuffers {
    kind: PartKind,
    positions: Vec<f32>,
    indices: Vec<u16>,
    color: Color,
}

/// A shape whose parts are exported and colored, drawn as-is each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    parts: Vec<PartBuffers>,
    transform: DMat4,
}

impl Drawable {
    /// Builds and exports every part of `node`, all in `color`.
    ///
    /// # Errors
    ///
    /// Fails when a part cannot be generated, or when a part has more
    /// vertices than 16-bit indices can address.
    pub fn new(node: &ShapeNode, color: Color) -> ShapeResult<Self> {
        Self::from_parts(build_parts(node)?, color)
    }

    /// Exports already built parts, all in `color`.
    ///
    /// # Errors
    ///
    /// Fails when a part has more vertices than 16-bit indices can address.
    pub fn from_parts(parts: Vec<MeshPart>, color: Color) -> ShapeResult<Self> {
        let parts = parts
            .into_iter()
            .map(|part| -> ShapeResult<PartBuffers> {
                Ok(PartBuffers {
                    kind: part.kind,
                    positions: part.mesh.to_position_buffer(),
                    indices: part.mesh.to_index_buffer_u16()?,
                    color,
                })
            })
            .collect::<ShapeResult<Vec<_>>>()?;

        debug!("drawable with {} parts", parts.len());
        Ok(Self {
            parts,
            transform: DMat4::IDENTITY,
        })
    }

    /// Sets the model transform applied to every part.
    pub fn with_transform(mut self, transform: DMat4) -> Self {
        self.transform = transform;
        self
    }

    /// Recolors every part of the given kind.
    pub fn with_part_color(mut self, kind: PartKind, color: Color) -> Self {
        for part in self.parts.iter_mut().filter(|p| p.kind == kind) {
            part.color = color;
        }
        self
    }

    /// Number of parts, and so of draw calls per frame.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Model transform of the shape.
    pub fn transform(&self) -> DMat4 {
        self.transform
    }

    /// Issues one indexed draw per part, in part order.
    ///
    /// Each call carries `view_projection * transform`, converted to a
    /// column-major `f32` matrix. The buffers are passed unchanged, so
    /// drawing twice produces identical calls.
    ///
    /// # Errors
    ///
    /// Stops at the first part the renderer fails on and returns
    /// [`ShapeError::Render`](crate::ShapeError::Render).
    pub fn draw<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        view_projection: &DMat4,
    ) -> ShapeResult<()> {
        let transform = (*view_projection * self.transform)
            .as_mat4()
            .to_cols_array();

        for part in &self.parts {
            trace!(
                "draw {:?}: {} positions, {} indices",
                part.kind,
                part.positions.len(),
                part.indices.len()
            );
            renderer.draw_indexed(DrawCall {
                positions: &part.positions,
                indices: &part.indices,
                color: part.color,
                transform,
            })?;
        }
        Ok(())
    }
}
