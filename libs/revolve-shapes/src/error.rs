//! # Shape Errors
//!
//! Error types for shape composition and drawing.

use crate::renderer::RenderError;
use revolve_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while building or drawing a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A part's mesh could not be generated or exported.
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    /// The shape's dimensions contradict each other.
    #[error("Invalid dimensions: {message}")]
    InvalidDimensions {
        /// What was inconsistent.
        message: String,
    },

    /// The renderer reported a failure.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

impl ShapeError {
    /// Creates an invalid dimensions error.
    pub fn invalid_dimensions(message: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            message: message.into(),
        }
    }
}

/// Result type alias for shape operations.
pub type ShapeResult<T> = Result<T, ShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShapeError::invalid_dimensions("inner radius 2 exceeds outer radius 1");
        assert!(err.to_string().starts_with("Invalid dimensions"));

        let err: ShapeError = MeshError::invalid_argument("tube slices must be >= 1, got 0").into();
        assert!(err.to_string().contains("tube slices"));

        let err: ShapeError = RenderError::ShaderLink("missing vColor".into()).into();
        assert!(err.to_string().contains("vColor"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShapeError>();
    }
}
