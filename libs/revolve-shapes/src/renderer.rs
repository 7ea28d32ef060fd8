//! # Renderer Contract
//!
//! The drawing side is an external collaborator. It owns shader programs,
//! GPU buffers and the graphics context; this crate only hands it vertex
//! and index data together with a flat color and a transform.
//!
//! A conforming renderer compiles and links a shader pair taking a uniform
//! 4×4 transform, a uniform flat color and a per-vertex position, binds the
//! buffers of each call, and issues one indexed triangle-list draw.

use crate::color::Color;
use thiserror::Error;

/// One indexed triangle-list draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall<'a> {
    /// Flat `x, y, z` positions, three floats per vertex.
    pub positions: &'a [f32],
    /// Triangle list indices into `positions`.
    pub indices: &'a [u16],
    /// Flat color for every fragment.
    pub color: Color,
    /// Column-major model-view-projection matrix.
    pub transform: [f32; 16],
}

impl DrawCall<'_> {
    /// Number of vertices in the position buffer.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / config::constants::COORDS_PER_VERTEX
    }
}

/// Failure status reported by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A shader stage failed to compile.
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),
    /// The shader program failed to link.
    #[error("shader program link failed: {0}")]
    ShaderLink(String),
    /// Any other failure of the graphics backend.
    #[error("backend failure: {0}")]
    Backend(String),
}

/// An external renderer able to draw indexed triangle lists.
///
/// Drawing happens on one thread; implementations are not required to be
/// `Send` or `Sync`.
pub trait Renderer {
    /// Draws one indexed triangle list.
    ///
    /// # Errors
    ///
    /// Returns the renderer's failure status, e.g. a shader program that
    /// did not compile or link.
    fn draw_indexed(&mut self, call: DrawCall<'_>) -> Result<(), RenderError>;
}
