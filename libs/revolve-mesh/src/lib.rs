//! # Revolve Mesh
//!
//! Pure mesh generators for revolved surfaces: open cylindrical shells
//! (tubes), flat annuli (rings) and fan-triangulated caps (discs).
//!
//! ## Architecture
//!
//! ```text
//! AngularRange + slice count (explicit, or derived from MAX_SLICES)
//!       ↓
//! primitives::{tube, ring, disc}
//!       ↓
//! Mesh (vertices, triangles) → position / index upload buffers
//! ```
//!
//! Every generator is a pure function: it holds no state between calls,
//! allocates its own buffers and never touches a previously returned mesh.
//! Generators may run concurrently from any number of threads.
//!
//! ## Usage
//!
//! ```rust
//! use revolve_mesh::generate;
//! use std::f64::consts::TAU;
//!
//! let mesh = generate(0.0, TAU, 1.0, 1.0, 4).unwrap();
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.index_count(), 24);
//! ```

pub mod angular;
pub mod batch;
pub mod error;
pub mod mesh;
pub mod primitives;

pub use angular::{AngularRange, SliceSpacing};
pub use batch::generate_batch;
pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use primitives::{create_disc, create_ring, create_tube, generate, Facing, TubeParams};
