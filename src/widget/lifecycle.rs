//! Widget lifecycle
//!
//! A [`Widget`] starts `Uninitialized`. `render_value` builds the viewer
//! through a [`ViewerFactory`], renders once, and binds the control panel,
//! moving it to `Rendered`. From then on `resize`, `dispatch` and
//! `change_control` drive the viewer. Calling them earlier is an
//! [`Error::NotRendered`].

use crate::error::{Error, Result};
use crate::surface::neuro_surface::NeuroSurface;
use crate::surface::payload::SurfacePayload;
use crate::surface::viewer::Viewer;
use crate::widget::command::{update, Command};
use crate::widget::controls::{setup_controls, ControlPanel, ControlValue, PanelOptions};
use crate::widget::pointer::DragState;

/// Creates viewers for a widget. This is where the render surface gets
/// attached to the host.
pub trait ViewerFactory {
    type Viewer: Viewer;

    fn create(&mut self, surface: NeuroSurface, width: u32, height: u32)
        -> Result<Self::Viewer>;
}

/// Everything a rendered widget owns.
pub struct Rendered<V> {
    pub viewer: V,
    pub panel: ControlPanel,
    pub drag: DragState,
}

pub enum WidgetState<V> {
    Uninitialized,
    Rendered(Rendered<V>),
}

pub struct Widget<V> {
    width: u32,
    height: u32,
    options: PanelOptions,
    state: WidgetState<V>,
}

/// Truncates a host-supplied size toward zero; negatives and NaN become 0.
pub fn coerce_size(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.trunc().min(u32::MAX as f64) as u32
    }
}

impl<V: Viewer> Widget<V> {
    pub fn new(width: f64, height: f64, options: PanelOptions) -> Self {
        Self {
            width: coerce_size(width),
            height: coerce_size(height),
            options,
            state: WidgetState::Uninitialized,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn state(&self) -> &WidgetState<V> {
        &self.state
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self.state, WidgetState::Rendered(_))
    }

    pub fn rendered(&self) -> Option<&Rendered<V>> {
        match &self.state {
            WidgetState::Rendered(rendered) => Some(rendered),
            WidgetState::Uninitialized => None,
        }
    }

    pub fn rendered_mut(&mut self) -> Option<&mut Rendered<V>> {
        match &mut self.state {
            WidgetState::Rendered(rendered) => Some(rendered),
            WidgetState::Uninitialized => None,
        }
    }

    pub fn viewer(&self) -> Option<&V> {
        self.rendered().map(|r| &r.viewer)
    }

    /// Builds the viewer for `payload`, renders it, and binds the controls.
    ///
    /// On an already rendered widget the previous viewer and panel are
    /// replaced. On error the widget keeps its previous state.
    pub fn render_value<F>(&mut self, payload: SurfacePayload, factory: &mut F) -> Result<()>
    where
        F: ViewerFactory<Viewer = V>,
    {
        log::debug!(
            "render_value: {} curvature values, color map '{}'",
            payload.curvature.len(),
            payload.color_map
        );

        let surface = NeuroSurface::from_payload(payload)?;
        log::info!(
            "Building viewer for {} vertices / {} triangles at {}x{}",
            surface.vertex_count(),
            surface.triangle_count(),
            self.width,
            self.height
        );

        let mut viewer = factory.create(surface, self.width, self.height)?;
        viewer.render()?;

        let intensity_range = viewer.intensity_range();
        let panel = setup_controls(self.options.clone(), intensity_range);

        self.state = WidgetState::Rendered(Rendered {
            viewer,
            panel,
            drag: DragState::default(),
        });
        Ok(())
    }

    /// Forwards the new size to the viewer unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        log::debug!("Resizing to {}x{}", width, height);
        self.dispatch_as("resize", Command::Resize { width, height })?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        self.dispatch_as("dispatch", command)
    }

    /// Feeds a control edit through the panel and dispatches its command.
    pub fn change_control(&mut self, index: usize, value: ControlValue) -> Result<()> {
        let rendered = self
            .rendered_mut()
            .ok_or(Error::NotRendered("change_control"))?;
        if let Some(command) = rendered.panel.change(index, value) {
            self.dispatch(command)?;
        }
        Ok(())
    }

    fn dispatch_as(&mut self, operation: &'static str, command: Command) -> Result<()> {
        let rendered = self.rendered_mut().ok_or(Error::NotRendered(operation))?;

        let (drag, call) = update(rendered.drag, command);
        rendered.drag = drag;
        if let Some(call) = call {
            call.apply(&mut rendered.viewer);
        }
        Ok(())
    }
}
