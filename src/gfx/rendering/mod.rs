// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! Builds the surface pipeline and owns the swapchain surface and frame
//! rendering.

pub mod render_engine;
pub mod surface_pipeline;

// Re-export main types
pub use render_engine::RenderEngine;
