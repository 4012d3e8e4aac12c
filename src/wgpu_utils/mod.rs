// src/wgpu_utils/mod.rs
//! WGPU utility functions and helpers
//!
//! Small wrappers for the uniform buffers and bind group entries the surface
//! renderer needs.

pub mod binding_types;
pub mod uniform_buffer;

pub use uniform_buffer::UniformBuffer;
