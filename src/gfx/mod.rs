//! # Graphics Module
//!
//! wgpu rendering for a single cortical surface.
//!
//! ## Architecture Overview
//!
//! - **Camera** ([`camera`]) - fixed camera framing the surface's bounding sphere
//! - **Rendering** ([`rendering`]) - swapchain, depth buffer and the surface pipeline
//! - **Scene** ([`scene`]) - vertex format and mesh buffers
//! - **Resources** ([`resources`]) - global uniforms and depth textures
//!
//! [`SurfaceViewer`] ties these to the headless
//! [`SurfaceState`](crate::surface::SurfaceState) and implements
//! [`Viewer`](crate::surface::Viewer).

pub mod camera;
pub mod rendering;
pub mod resources;
pub mod scene;
pub mod surface_viewer;

// Re-export commonly used types
pub use camera::SurfaceCamera;
pub use rendering::render_engine::RenderEngine;
pub use surface_viewer::SurfaceViewer;
