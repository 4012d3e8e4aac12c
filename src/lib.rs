// src/lib.rs
//! surfview
//!
//! An interactive viewer for cortical surface meshes with color-mapped
//! per-vertex data, built on wgpu, winit and Dear ImGui.
//!
//! The [`widget`] module holds the renderer-agnostic core: the lifecycle
//! state machine, pointer-to-rotation adapter and control panel binder,
//! driven through the [`surface::Viewer`] trait. [`gfx`] implements that trait
//! on the GPU and [`app`] hosts a widget in a desktop window.

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod surface;
pub mod ui;
pub mod wgpu_utils;
pub mod widget;

// Re-export main types for convenience
pub use app::SurfViewApp;
pub use config::AppConfig;
pub use error::{Error, Result};
pub use surface::SurfacePayload;
pub use widget::Widget;
