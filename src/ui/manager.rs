// src/ui/manager.rs
//! ImGui UI manager
//!
//! Handles ImGui integration with wgpu and winit: frame timing, input
//! forwarding, theming and the overlay render pass.

use imgui::{Context, FontConfig, FontSource, MouseCursor};
use imgui_wgpu::{Renderer, RendererConfig};
use imgui_winit_support::{HiDpiMode, WinitPlatform};
use std::time::Instant;
use wgpu::{CommandEncoder, Device, Queue, TextureFormat, TextureView};
use winit::{
    event::{Event, WindowEvent},
    window::Window,
};

use crate::error::{Error, Result};
use crate::widget::controls::Theme;

pub struct UiManager {
    pub context: Context,
    platform: WinitPlatform,
    renderer: Renderer,
    last_frame: Instant,
    last_cursor: Option<MouseCursor>,
}

impl UiManager {
    /// Creates a new UI manager rendering into `output_color_format`.
    ///
    /// Uses locked DPI mode so panel widths are in physical pixels.
    pub fn new(
        device: &Device,
        queue: &Queue,
        output_color_format: TextureFormat,
        window: &Window,
        theme: Theme,
    ) -> Self {
        let mut context = Context::create();
        context.set_ini_filename(None);

        let mut platform = WinitPlatform::new(&mut context);
        platform.attach_window(context.io_mut(), window, HiDpiMode::Locked(1.0));

        let font_size = 18.0;
        context.fonts().add_font(&[FontSource::DefaultFontData {
            config: Some(FontConfig {
                oversample_h: 1,
                pixel_snap_h: true,
                size_pixels: font_size,
                ..Default::default()
            }),
        }]);

        Self::apply_theme(&mut context, theme);

        let renderer_config = RendererConfig {
            texture_format: output_color_format,
            ..Default::default()
        };
        let renderer = Renderer::new(&mut context, device, queue, renderer_config);

        Self {
            context,
            platform,
            renderer,
            last_frame: Instant::now(),
            last_cursor: None,
        }
    }

    fn apply_theme(context: &mut Context, theme: Theme) {
        let style = context.style_mut();
        match theme {
            Theme::Dark => style.use_dark_colors(),
            Theme::Light => style.use_light_colors(),
            Theme::Yorha => style.use_classic_colors(),
        };
        log::debug!("Applied {:?} UI theme", theme);
    }

    /// Forwards an event to imgui and returns whether the UI captured it.
    ///
    /// Resize and scale events are forwarded to keep the display size in
    /// sync but never count as captured.
    pub fn handle_input<T>(&mut self, window: &Window, event: &Event<T>) -> bool {
        let Event::WindowEvent {
            event: window_event,
            ..
        } = event
        else {
            return false;
        };

        match window_event {
            WindowEvent::CursorMoved { .. }
            | WindowEvent::MouseInput { .. }
            | WindowEvent::MouseWheel { .. }
            | WindowEvent::KeyboardInput { .. }
            | WindowEvent::Focused(_) => {
                self.platform
                    .handle_event(self.context.io_mut(), window, event);
                self.wants_input()
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.platform
                    .handle_event(self.context.io_mut(), window, event);
                false
            }
            _ => false,
        }
    }

    pub fn wants_input(&self) -> bool {
        let io = self.context.io();
        io.want_capture_mouse || io.want_capture_keyboard
    }

    /// Builds a new frame with `run_ui`.
    pub fn update_logic<F>(&mut self, window: &Window, run_ui: F) -> Result<()>
    where
        F: FnOnce(&imgui::Ui),
    {
        let now = Instant::now();
        self.context
            .io_mut()
            .update_delta_time(now - self.last_frame);
        self.last_frame = now;

        self.platform
            .prepare_frame(self.context.io_mut(), window)
            .map_err(|e| Error::Gpu(format!("failed to prepare UI frame: {}", e)))?;

        let ui = self.context.frame();
        run_ui(ui);

        if self.last_cursor != ui.mouse_cursor() {
            self.last_cursor = ui.mouse_cursor();
            self.platform.prepare_render(ui, window);
        }

        Ok(())
    }

    /// Renders the frame built by the last [`update_logic`](Self::update_logic)
    /// on top of `color_attachment`.
    pub fn render_display_only(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        color_attachment: &TextureView,
    ) -> Result<()> {
        let draw_data = self.context.render();

        if draw_data.display_size[0] <= 0.0 || draw_data.display_size[1] <= 0.0 {
            return Ok(());
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("imgui_render_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_attachment,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        self.renderer
            .render(draw_data, queue, device, &mut render_pass)
            .map_err(|e| Error::Gpu(format!("failed to render UI: {:?}", e)))
    }

    /// [`update_logic`](Self::update_logic) followed by
    /// [`render_display_only`](Self::render_display_only).
    pub fn draw<F>(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        window: &Window,
        color_attachment: &TextureView,
        run_ui: F,
    ) -> Result<()>
    where
        F: FnOnce(&imgui::Ui),
    {
        self.update_logic(window, run_ui)?;
        self.render_display_only(device, queue, encoder, color_attachment)
    }
}
