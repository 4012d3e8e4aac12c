//! # Widget Module
//!
//! The surface viewer widget: a lifecycle state machine around one viewer,
//! the pointer-to-rotation adapter, and the control panel binder.
//!
//! ## Flow
//!
//! 1. The host creates a [`Widget`] with its size and panel options.
//! 2. `render_value` builds the viewer through a [`ViewerFactory`], renders
//!    once, reads the intensity range, and binds the four standard controls.
//! 3. Pointer events and control edits arrive as [`Command`]s; [`update`]
//!    turns each into at most one [`ViewerCall`].
//! 4. The host forwards size changes through `resize`.

pub mod command;
pub mod controls;
pub mod lifecycle;
pub mod pointer;

pub use command::{update, Command, ViewerCall};
pub use controls::{
    setup_controls, ControlDescriptor, ControlKind, ControlPanel, ControlValue, PanelOptions,
};
pub use lifecycle::{Rendered, ViewerFactory, Widget, WidgetState};
pub use pointer::{rotation_increment, DragState};
