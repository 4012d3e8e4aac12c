// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Depth buffers and the global uniform bind group.

pub mod global_bindings;
pub mod texture_resource;

// Re-export main types
pub use global_bindings::{GlobalBindings, GlobalUBO, GlobalUBOContent};
pub use texture_resource::TextureResource;
