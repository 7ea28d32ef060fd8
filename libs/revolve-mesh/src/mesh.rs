//! # Mesh Data Structure
//!
//! Vertex positions plus a triangle list, as produced by the generators.

use crate::error::{MeshError, MeshResult};
use config::constants::{COORDS_PER_VERTEX, MAX_U16_VERTICES};
use glam::DVec3;
use serde::Serialize;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens when buffers are prepared for upload to a renderer.
///
/// A mesh is built once by a generator and is immutable afterwards: the
/// only mutating methods are private to this crate.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::generate;
///
/// let mesh = generate(0.0, std::f64::consts::TAU, 1.0, 0.5, 8).unwrap();
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.triangle_count(), 16);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates a mesh with pre-allocated capacity.
    pub(crate) fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Adds a vertex and returns its index.
    pub(crate) fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub(crate) fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of indices (three per triangle).
    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Iterates over the flattened index list in draw order.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.triangles.iter().flatten().copied()
    }

    /// Returns the vertex at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`vertex_count`](Self::vertex_count).
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the (unnormalized) face normal of a triangle, following its
    /// winding with the right-hand rule.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below
    /// [`triangle_count`](Self::triangle_count).
    pub fn triangle_normal(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.triangles[index];
        let v0 = self.vertex(a);
        (self.vertex(b) - v0).cross(self.vertex(c) - v0)
    }

    /// Checks that every triangle references an existing vertex.
    pub fn validate(&self) -> bool {
        let count = self.vertices.len();
        self.indices().all(|i| (i as usize) < count)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Flattens positions into an `x, y, z, x, y, z, ...` f32 buffer.
    pub fn to_position_buffer(&self) -> Vec<f32> {
        let mut buffer = Vec::with_capacity(self.vertices.len() * COORDS_PER_VERTEX);
        for v in &self.vertices {
            buffer.extend_from_slice(&[v.x as f32, v.y as f32, v.z as f32]);
        }
        buffer
    }

    /// Flattens triangles into a 32-bit index buffer.
    pub fn to_index_buffer_u32(&self) -> Vec<u32> {
        self.indices().collect()
    }

    /// Flattens triangles into a 16-bit index buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::TooManyVertices`] when the mesh has more vertices
    /// than a 16-bit index can address.
    pub fn to_index_buffer_u16(&self) -> MeshResult<Vec<u16>> {
        if self.vertices.len() > MAX_U16_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: self.vertices.len(),
                max: MAX_U16_VERTICES,
            });
        }
        Ok(self.indices().map(|i| i as u16).collect())
    }
}
