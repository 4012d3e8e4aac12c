//! GPU-backed [`Viewer`]
//!
//! Couples the renderer-agnostic [`SurfaceState`] with a [`RenderEngine`],
//! a framing camera and the uploaded mesh. Every setter only touches the
//! state; colors and uniforms are pushed to the GPU when a frame is drawn.

use cgmath::{EuclideanSpace, Quaternion, Vector3};

use crate::error::Result;
use crate::gfx::camera::SurfaceCamera;
use crate::gfx::rendering::RenderEngine;
use crate::gfx::resources::GlobalUBOContent;
use crate::gfx::scene::SurfaceMesh;
use crate::surface::{ColorMap, NeuroSurface, Oriented, SurfaceState, View, Viewer};

pub struct SurfaceViewer {
    state: SurfaceState,
    engine: RenderEngine,
    camera: SurfaceCamera,
    mesh: SurfaceMesh,
    center: Vector3<f32>,
}

impl SurfaceViewer {
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        surface: NeuroSurface,
        width: u32,
        height: u32,
        clear_color: [f64; 3],
    ) -> Result<Self> {
        let engine = RenderEngine::new(window, width, height, clear_color).await?;

        let (center, radius) = surface.bounding_sphere();
        let camera = SurfaceCamera::new(radius, width, height);

        let mut state = SurfaceState::new(surface, width, height);
        let colors = state.take_dirty_colors().unwrap_or_else(|| state.vertex_colors());
        let mesh = SurfaceMesh::new(engine.device(), state.surface(), &colors);

        log::info!(
            "Surface viewer ready: {} vertices, bounding radius {:.2}",
            state.surface().vertex_count(),
            radius
        );

        Ok(Self {
            state,
            engine,
            camera,
            mesh,
            center: center.to_vec(),
        })
    }

    pub fn engine(&self) -> &RenderEngine {
        &self.engine
    }

    /// Draws one frame, running `ui_callback` as an overlay pass after the
    /// surface.
    pub fn render_with_ui<F>(&mut self, ui_callback: Option<F>) -> Result<()>
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        if let Some(colors) = self.state.take_dirty_colors() {
            self.mesh.update_colors(self.engine.queue(), &colors);
        }

        let globals =
            GlobalUBOContent::new(self.camera.uniform, self.state.orientation(), self.center);
        self.engine.update(globals);
        self.engine.render_frame(&self.mesh, ui_callback)
    }
}

impl Oriented for SurfaceViewer {
    fn orientation(&self) -> Quaternion<f32> {
        self.state.orientation()
    }

    fn set_orientation(&mut self, orientation: Quaternion<f32>) {
        self.state.set_orientation(orientation);
    }
}

impl Viewer for SurfaceViewer {
    fn set_view(&mut self, view: View) {
        self.state.set_view(view);
    }

    fn set_color_map(&mut self, map: ColorMap) {
        self.state.set_color_map(map);
    }

    fn set_threshold(&mut self, lo: f32, hi: f32) {
        self.state.set_threshold(lo, hi);
    }

    fn set_contrast(&mut self, fraction: f32) {
        self.state.set_contrast(fraction);
    }

    fn render(&mut self) -> Result<()> {
        self.render_with_ui(
            None::<fn(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView)>,
        )
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.state.set_size(width, height);
        self.engine.resize(width, height);
        self.camera.resize_projection(width, height);
    }

    fn intensity_range(&self) -> (f32, f32) {
        self.state.intensity_range()
    }
}
