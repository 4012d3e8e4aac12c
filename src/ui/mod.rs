//! # User Interface Module
//!
//! Dear ImGui integration for the surface viewer.
//!
//! - [`UiManager`] owns the imgui context, the winit platform glue and the
//!   wgpu renderer, and reports whether the UI is capturing input.
//! - [`panel`] draws a [`ControlPanel`](crate::widget::ControlPanel) and turns
//!   edits into widget [`Command`](crate::widget::Command)s.
//!
//! The UI sees events before the widget: while it captures the mouse, pointer
//! presses do not start a drag.

pub mod manager;
pub mod panel;

// Re-export main types
pub use manager::UiManager;
pub use panel::{draw_control_panel, panel_layout, PanelLayout};
