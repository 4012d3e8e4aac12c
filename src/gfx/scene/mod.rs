//! # Scene Module
//!
//! GPU-side mesh data for a single cortical surface.
//!
//! - [`SurfaceVertex`] - position, normal and color, laid out for the vertex stage
//! - [`SurfaceMesh`] - vertex and index buffers, with in-place color updates
//! - [`DrawMesh`] - render pass extension that binds and draws a mesh

pub mod mesh;
pub mod vertex;

// Re-export main types
pub use mesh::{DrawMesh, SurfaceMesh};
pub use vertex::SurfaceVertex;
