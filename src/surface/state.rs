//! Headless display state of a surface viewer
//!
//! Everything a viewer shows that is not GPU plumbing lives here: the object
//! orientation, the active color map, the threshold band and contrast, and the
//! per-vertex colors derived from them.

use cgmath::Quaternion;

use crate::surface::color_map::ColorMap;
use crate::surface::neuro_surface::NeuroSurface;
use crate::surface::view::View;
use crate::surface::viewer::Oriented;

/// Gray used on convex (positive curvature) regions.
const SULCAL_SHADE: f32 = 0.35;
/// Gray used on concave or flat regions.
const GYRAL_SHADE: f32 = 0.65;
/// Gray used when no curvature is supplied.
const FLAT_SHADE: f32 = 0.5;
/// At full contrast the color window shrinks to this fraction of the range.
const MAX_CONTRAST_SQUEEZE: f32 = 0.95;

pub struct SurfaceState {
    surface: NeuroSurface,
    orientation: Quaternion<f32>,
    view: View,
    color_map: ColorMap,
    threshold: (f32, f32),
    contrast: f32,
    size: (u32, u32),
    intensity_range: (f32, f32),
    colors_dirty: bool,
}

impl SurfaceState {
    pub fn new(surface: NeuroSurface, width: u32, height: u32) -> Self {
        let view = View::default();
        let orientation = view.orientation(surface.hemisphere());
        let color_map = surface.color_map().color_map();
        let intensity_range = surface.intensity_range();

        Self {
            surface,
            orientation,
            view,
            color_map,
            threshold: (0.0, 0.0),
            contrast: 0.0,
            size: (width, height),
            intensity_range,
            colors_dirty: true,
        }
    }

    pub fn surface(&self) -> &NeuroSurface {
        &self.surface
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Replaces the orientation with the preset for `view`.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
        self.orientation = view.orientation(self.surface.hemisphere());
    }

    pub fn color_map(&self) -> ColorMap {
        self.color_map
    }

    pub fn set_color_map(&mut self, map: ColorMap) {
        if self.color_map != map {
            self.color_map = map;
            self.colors_dirty = true;
        }
    }

    pub fn threshold(&self) -> (f32, f32) {
        self.threshold
    }

    pub fn set_threshold(&mut self, lo: f32, hi: f32) {
        if self.threshold != (lo, hi) {
            self.threshold = (lo, hi);
            self.colors_dirty = true;
        }
    }

    pub fn contrast(&self) -> f32 {
        self.contrast
    }

    pub fn set_contrast(&mut self, fraction: f32) {
        if self.contrast != fraction {
            self.contrast = fraction;
            self.colors_dirty = true;
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    pub fn intensity_range(&self) -> (f32, f32) {
        self.intensity_range
    }

    /// Returns fresh vertex colors if anything affecting them changed since
    /// the last call.
    pub fn take_dirty_colors(&mut self) -> Option<Vec<[f32; 3]>> {
        if !self.colors_dirty {
            return None;
        }
        self.colors_dirty = false;
        Some(self.vertex_colors())
    }

    pub fn vertex_colors(&self) -> Vec<[f32; 3]> {
        let data = self.surface.data();
        let curvature = self.surface.curvature();

        (0..self.surface.vertex_count())
            .map(|i| {
                let shade = match curvature.get(i) {
                    Some(&c) if c > 0.0 => SULCAL_SHADE,
                    Some(_) => GYRAL_SHADE,
                    None => FLAT_SHADE,
                };

                match data.get(i) {
                    Some(&v) if v.is_finite() && !self.is_thresholded(v) => {
                        self.color_map.sample(self.normalise(v))
                    }
                    _ => [shade; 3],
                }
            })
            .collect()
    }

    fn is_thresholded(&self, value: f32) -> bool {
        let (lo, hi) = self.threshold;
        lo < value && value < hi
    }

    /// Maps `value` into `[0, 1]` over the intensity range, with the window
    /// narrowed around its center as contrast rises.
    fn normalise(&self, value: f32) -> f32 {
        let (min, max) = self.intensity_range;
        let span = max - min;
        if span <= f32::EPSILON {
            return 0.5;
        }

        let t = (value - min) / span;
        let window = 1.0 - MAX_CONTRAST_SQUEEZE * self.contrast.clamp(0.0, 1.0);
        (0.5 + (t - 0.5) / window).clamp(0.0, 1.0)
    }
}

impl Oriented for SurfaceState {
    fn orientation(&self) -> Quaternion<f32> {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Quaternion<f32>) {
        self.orientation = orientation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::color_map::ColorMapName;
    use crate::surface::payload::SurfacePayload;
    use crate::surface::view::Hemisphere;
    use cgmath::{Deg, Rotation3};

    fn state_with_data(data: Vec<f32>, curvature: Vec<f32>) -> SurfaceState {
        let n = data.len().max(curvature.len());
        let payload = SurfacePayload {
            vertices: (0..n * 3).map(|i| i as f32).collect(),
            indices: Vec::new(),
            data,
            color_map: "bluered".to_string(),
            curvature,
            hemisphere: Hemisphere::Left,
        };
        SurfaceState::new(NeuroSurface::from_payload(payload).unwrap(), 640, 480)
    }

    #[test]
    fn test_initial_state() {
        let state = state_with_data(vec![-2.0, 0.0, 2.0], vec![]);
        assert_eq!(state.view(), View::Lateral);
        assert_eq!(state.orientation(), View::Lateral.orientation(Hemisphere::Left));
        assert_eq!(state.threshold(), (0.0, 0.0));
        assert_eq!(state.contrast(), 0.0);
        assert_eq!(state.intensity_range(), (-2.0, 2.0));
        assert_eq!(state.color_map().name(), ColorMapName::BlueRed);
    }

    #[test]
    fn test_colors_span_the_map() {
        let state = state_with_data(vec![-2.0, 0.0, 2.0], vec![]);
        let colors = state.vertex_colors();
        assert_eq!(colors[0], [0.0, 0.0, 1.0]);
        assert_eq!(colors[1], [1.0, 1.0, 1.0]);
        assert_eq!(colors[2], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_threshold_band_shows_curvature() {
        let mut state = state_with_data(vec![-2.0, 0.5, 2.0], vec![1.0, 1.0, -1.0]);
        state.set_threshold(-1.0, 1.0);
        let colors = state.vertex_colors();
        assert_eq!(colors[0], [0.0, 0.0, 1.0]);
        assert_eq!(colors[1], [SULCAL_SHADE; 3]);
        assert_eq!(colors[2], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_band_edges_stay_colored() {
        let mut state = state_with_data(vec![-1.0, 1.0], vec![]);
        state.set_threshold(-1.0, 1.0);
        let colors = state.vertex_colors();
        assert_ne!(colors[0], [FLAT_SHADE; 3]);
        assert_ne!(colors[1], [FLAT_SHADE; 3]);
    }

    #[test]
    fn test_contrast_saturates_sooner() {
        let mut state = state_with_data(vec![-2.0, 1.0, 2.0], vec![]);
        let before = state.vertex_colors()[1];
        state.set_contrast(1.0);
        let after = state.vertex_colors()[1];
        // 0.75 of the way up with no contrast; pushed to the red end at full.
        assert!(after[1] < before[1]);
        assert_eq!(after, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_dirty_tracking() {
        let mut state = state_with_data(vec![0.0, 1.0], vec![]);
        assert!(state.take_dirty_colors().is_some());
        assert!(state.take_dirty_colors().is_none());

        state.set_threshold(0.0, 0.0);
        assert!(state.take_dirty_colors().is_none());

        state.set_color_map(ColorMapName::Hot.color_map());
        assert!(state.take_dirty_colors().is_some());
    }

    #[test]
    fn test_set_view_replaces_rotation() {
        let mut state = state_with_data(vec![0.0], vec![]);
        state.rotate(Quaternion::from_angle_z(Deg(30.0)));
        state.set_view(View::Anterior);
        assert_eq!(state.orientation(), View::Anterior.orientation(Hemisphere::Left));
    }

    #[test]
    fn test_missing_data_uses_background() {
        let state = state_with_data(vec![], vec![-0.5, 0.5]);
        assert_eq!(state.vertex_colors(), vec![[GYRAL_SHADE; 3], [SULCAL_SHADE; 3]]);
    }
}
