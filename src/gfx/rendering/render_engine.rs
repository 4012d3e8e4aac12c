//! WGPU-based rendering engine for the surface viewer
//!
//! Owns the swapchain surface, device and queue, the depth buffer and the
//! single surface pipeline, and renders one mesh per frame with an optional
//! UI overlay pass on top.

use std::sync::Arc;
use wgpu::{Device, TextureFormat};

use crate::error::{Error, Result};
use crate::gfx::{
    resources::{
        global_bindings::{GlobalBindings, GlobalUBO, GlobalUBOContent},
        texture_resource::TextureResource,
    },
    scene::mesh::{DrawMesh, SurfaceMesh},
};

use super::surface_pipeline::create_surface_pipeline;

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    format: TextureFormat,
    surface_pipeline: wgpu::RenderPipeline,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
    clear_color: wgpu::Color,
}

impl RenderEngine {
    /// Creates a new render engine for the given window.
    ///
    /// Zero dimensions are bumped to one pixel so the surface can always be
    /// configured.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        clear_color: [f64; 3],
    ) -> Result<RenderEngine> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .map_err(|e| Error::Gpu(format!("failed to create surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| Error::Gpu(format!("failed to request adapter: {}", e)))?;

        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits {
                    max_texture_dimension_2d: 4096,
                    ..wgpu::Limits::downlevel_defaults()
                },
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| Error::Gpu(format!("failed to request device: {}", e)))?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or_else(|| Error::Gpu("surface reports no texture formats".to_string()))?;
        let alpha_mode = surface_capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let global_ubo = GlobalUBO::new(&device);
        let global_bindings = GlobalBindings::new(&device, &global_ubo);

        let surface_pipeline = create_surface_pipeline(
            &device,
            format,
            TextureResource::DEPTH_FORMAT,
            global_bindings.bind_group_layout(),
        );

        let device_handle: Arc<Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();

        let [r, g, b] = clear_color;

        Ok(RenderEngine {
            surface,
            device: device_handle,
            queue: queue_handle,
            config,
            depth_texture,
            format,
            surface_pipeline,
            global_ubo,
            global_bindings,
            clear_color: wgpu::Color { r, g, b, a: 1.0 },
        })
    }

    /// Renders `mesh` and then the optional UI overlay into the next frame.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render_frame<F>(&mut self, mesh: &SurfaceMesh, ui_callback: Option<F>) -> Result<()>
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Timed out acquiring surface texture, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(Error::Gpu(format!("failed to acquire frame: {}", e))),
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Surface Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.surface_pipeline);
            render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);
            render_pass.draw_mesh(mesh);
        }

        if let Some(ui_callback) = ui_callback {
            ui_callback(
                &self.device,
                &self.queue,
                &mut encoder,
                &surface_texture_view,
            );
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    /// Uploads this frame's camera, model and light uniforms.
    pub fn update(&mut self, globals: GlobalUBOContent) {
        self.global_ubo.update_content(&self.queue, globals);
    }

    /// Reconfigures the surface and recreates the depth buffer.
    ///
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }
}
