use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

use crate::config::AppConfig;
use crate::error::Result;
use crate::gfx::SurfaceViewer;
use crate::surface::{NeuroSurface, SurfacePayload};
use crate::ui::{draw_control_panel, UiManager};
use crate::widget::{Command, Rendered, ViewerFactory, Widget};

/// Builds GPU viewers attached to the application window.
pub struct GpuViewerFactory {
    window: Arc<Window>,
    clear_color: [f64; 3],
}

impl GpuViewerFactory {
    pub fn new(window: Arc<Window>, clear_color: [f64; 3]) -> Self {
        Self {
            window,
            clear_color,
        }
    }
}

impl ViewerFactory for GpuViewerFactory {
    type Viewer = SurfaceViewer;

    fn create(&mut self, surface: NeuroSurface, width: u32, height: u32) -> Result<SurfaceViewer> {
        let window = self.window.clone();
        let clear_color = self.clear_color;
        pollster::block_on(async move {
            SurfaceViewer::new(window, surface, width, height, clear_color).await
        })
    }
}

/// Maps a pointer event to a widget command.
///
/// Cursor positions arrive in physical pixels and are converted to logical
/// pixels so one logical pixel of drag is one degree at any scale factor.
/// Presses the UI captured start no drag; releases always end one.
pub fn command_for(event: &WindowEvent, ui_captured: bool, scale_factor: f64) -> Option<Command> {
    match event {
        WindowEvent::MouseInput {
            state,
            button: MouseButton::Left,
            ..
        } => match state {
            ElementState::Pressed if !ui_captured => Some(Command::PointerDown),
            ElementState::Released => Some(Command::PointerUp),
            ElementState::Pressed => None,
        },
        WindowEvent::CursorMoved { position, .. } => {
            let position = position.to_logical::<f32>(scale_factor);
            Some(Command::PointerMove {
                x: position.x,
                y: position.y,
            })
        }
        _ => None,
    }
}

/// Input the panel reacts to without producing a widget command.
fn redraws_panel(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::MouseInput { .. } | WindowEvent::MouseWheel { .. } | WindowEvent::Focused(_)
    )
}

/// Desktop host for a single surface widget.
///
/// The configured width and height request a logical window size. The
/// widget itself is sized in physical pixels of the drawing surface, taken
/// from the window once it exists.
pub struct SurfViewApp {
    config: AppConfig,
    payload: Option<SurfacePayload>,
    window: Option<Arc<Window>>,
    widget: Widget<SurfaceViewer>,
    ui_manager: Option<UiManager>,
}

impl SurfViewApp {
    pub fn new(config: AppConfig, payload: SurfacePayload) -> Self {
        let widget = Widget::new(config.width, config.height, config.panel.clone());
        Self {
            config,
            payload: Some(payload),
            window: None,
            widget,
            ui_manager: None,
        }
    }

    /// Runs the event loop until the window closes.
    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn dispatch(&mut self, command: Command) {
        if let Err(e) = self.widget.dispatch(command) {
            log::error!("Failed to dispatch {:?}: {}", command, e);
        }
    }

    fn initialize(&mut self, window: Arc<Window>) -> Result<()> {
        let Some(payload) = self.payload.take() else {
            return Ok(());
        };

        let PhysicalSize { width, height } = window.inner_size();
        self.widget = Widget::new(width as f64, height as f64, self.config.panel.clone());

        let mut factory = GpuViewerFactory::new(window.clone(), self.config.clear_color);
        self.widget.render_value(payload, &mut factory)?;

        if let Some(viewer) = self.widget.viewer() {
            let engine = viewer.engine();
            self.ui_manager = Some(UiManager::new(
                engine.device(),
                engine.queue(),
                engine.surface_format(),
                &window,
                self.config.panel.theme,
            ));
        }
        Ok(())
    }

    fn redraw(&mut self) {
        let (Some(window), Some(ui_manager)) = (self.window.as_ref(), self.ui_manager.as_mut())
        else {
            return;
        };
        let Some(Rendered { viewer, panel, .. }) = self.widget.rendered_mut() else {
            return;
        };

        let mut commands = Vec::new();
        let result = viewer.render_with_ui(Some(
            |device: &wgpu::Device,
             queue: &wgpu::Queue,
             encoder: &mut wgpu::CommandEncoder,
             color_attachment: &wgpu::TextureView| {
                let drawn = ui_manager.draw(device, queue, encoder, window, color_attachment, |ui| {
                    commands = draw_control_panel(ui, panel);
                });
                if let Err(e) = drawn {
                    log::error!("{}", e);
                }
            },
        ));
        if let Err(e) = result {
            log::error!("Render failed: {}", e);
        }

        let redraw = !commands.is_empty();
        for command in commands {
            self.dispatch(command);
        }
        if redraw {
            if let Some(window) = self.window.as_ref() {
                window.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for SurfViewApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        if let Err(e) = self.initialize(window.clone()) {
            log::error!("Failed to render surface: {}", e);
            event_loop.exit();
            return;
        }
        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // UI sees input first.
        let mut ui_captured = false;
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            ui_captured = ui_manager.handle_input(&window, &ui_event);
        }

        if let Some(command) = command_for(&event, ui_captured, window.scale_factor()) {
            if self.widget.is_rendered() {
                self.dispatch(command);
            }
            window.request_redraw();
            return;
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: winit::keyboard::PhysicalKey::Code(key_code),
                        ..
                    },
                ..
            } => {
                if !ui_captured && matches!(key_code, winit::keyboard::KeyCode::Escape) {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Err(e) = self.widget.resize(width, height) {
                    log::warn!("Ignoring resize: {}", e);
                }
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                return;
            }
            _ if redraws_panel(&event) => {}
            _ => return,
        }

        window.request_redraw();
    }
}
