pub mod camera_utils;
pub mod surface_camera;

// Re-export main types
pub use camera_utils::{Camera, CameraUniform};
pub use surface_camera::SurfaceCamera;
