//! # Surface Module
//!
//! The data side of the viewer: the render-value payload, the validated
//! [`NeuroSurface`], the color-map registry, view presets, and the headless
//! [`SurfaceState`] that turns data, threshold and contrast into vertex colors.
//!
//! The [`Viewer`] and [`Oriented`] traits are the seam between the widget
//! logic and whatever draws the surface.

pub mod color_map;
pub mod neuro_surface;
pub mod payload;
pub mod state;
pub mod view;
pub mod viewer;

pub use color_map::{ColorMap, ColorMapName};
pub use neuro_surface::NeuroSurface;
pub use payload::SurfacePayload;
pub use state::SurfaceState;
pub use view::{Hemisphere, View};
pub use viewer::{Oriented, Viewer};
