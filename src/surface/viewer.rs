//! Collaborator traits
//!
//! The widget drives its renderer only through these traits, which is what
//! lets the lifecycle and control logic run against a recording viewer in
//! tests and against [`SurfaceViewer`](crate::gfx::SurfaceViewer) in the app.

use cgmath::Quaternion;

use crate::error::Result;
use crate::surface::color_map::ColorMap;
use crate::surface::view::View;

/// An object with a composable orientation.
pub trait Oriented {
    fn orientation(&self) -> Quaternion<f32>;

    fn set_orientation(&mut self, orientation: Quaternion<f32>);

    /// Left-multiplies the current orientation: `new = increment * old`.
    fn rotate(&mut self, increment: Quaternion<f32>) {
        let current = self.orientation();
        self.set_orientation(increment * current);
    }
}

/// The rendering collaborator a widget owns once rendered.
pub trait Viewer: Oriented {
    fn set_view(&mut self, view: View);

    fn set_color_map(&mut self, map: ColorMap);

    /// Hides data strictly inside `(lo, hi)`.
    fn set_threshold(&mut self, lo: f32, hi: f32);

    /// Contrast as a fraction in `[0, 1]`.
    fn set_contrast(&mut self, fraction: f32);

    fn render(&mut self) -> Result<()>;

    fn set_size(&mut self, width: u32, height: u32);

    /// `(min, max)` of the displayed per-vertex data.
    fn intensity_range(&self) -> (f32, f32);
}
