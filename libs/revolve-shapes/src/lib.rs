//! # Revolve Shapes
//!
//! Composite revolved shapes built from independent meshes, and the
//! contract of the external renderer that draws them.
//!
//! ## Architecture
//!
//! ```text
//! ShapeNode (data) → parts::build_parts → Vec<MeshPart>
//!       ↓
//! Drawable (buffers + colors + transform)
//!       ↓
//! Renderer::draw_indexed, once per part
//! ```
//!
//! Parts never reference each other: a capped cylinder is a wall and two
//! caps, each drawn on its own.
//!
//! ## Usage
//!
//! ```rust
//! use revolve_shapes::{Color, Drawable, ShapeNode};
//!
//! let node = ShapeNode::capped_cylinder(1.0, 1.0);
//! let drawable = Drawable::new(&node, Color::RED).unwrap();
//! assert_eq!(drawable.part_count(), 3);
//! ```

pub mod color;
pub mod drawable;
pub mod error;
pub mod node;
pub mod parts;
pub mod renderer;

pub use color::Color;
pub use drawable::Drawable;
pub use error::{ShapeError, ShapeResult};
pub use node::ShapeNode;
pub use parts::{build_parts, MeshPart, PartKind};
pub use renderer::{DrawCall, RenderError, Renderer};
