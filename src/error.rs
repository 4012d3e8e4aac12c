//! Error types for surfview
//!
//! Library code returns [`Result`] and propagates with `?`; the binary wraps
//! these in `anyhow` for context at the top level.

use thiserror::Error;

/// Errors raised by the widget, the surface model, and the renderer.
#[derive(Debug, Error)]
pub enum Error {
    /// A lifecycle operation ran before `render_value` bound a viewer.
    #[error("widget is not rendered yet; `{0}` requires a prior render_value call")]
    NotRendered(&'static str),

    /// The payload geometry or per-vertex arrays are inconsistent.
    #[error("invalid surface: {0}")]
    InvalidSurface(String),

    #[error("unknown color map `{0}`")]
    UnknownColorMap(String),

    #[error("unknown view `{0}`")]
    UnknownView(String),

    #[error("unknown hemisphere `{0}`")]
    UnknownHemisphere(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to load OBJ mesh: {0}")]
    Obj(#[from] tobj::LoadError),

    /// Adapter, device or surface setup failed.
    #[error("gpu error: {0}")]
    Gpu(String),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

pub type Result<T> = std::result::Result<T, Error>;
