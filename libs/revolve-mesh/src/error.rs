//! # Mesh Errors
//!
//! Error types for mesh generation. Degenerate geometry (a zero radius, an
//! empty angular range) is not an error: those inputs produce well-formed
//! meshes with zero surface area.

use thiserror::Error;

/// Errors that can occur during mesh generation or buffer export.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A generator was called with parameters it refuses to run on,
    /// such as a slice count of zero.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument.
        message: String,
    },

    /// The mesh has more vertices than the target index type can address.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Number of vertices requested or present.
        count: usize,
        /// Largest supported vertex count.
        max: usize,
    },
}

impl MeshError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_argument("slices must be >= 1, got 0");
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("slices"));

        let err = MeshError::TooManyVertices {
            count: 70_000,
            max: 65_536,
        };
        assert_eq!(err.to_string(), "Too many vertices: 70000 (max: 65536)");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
