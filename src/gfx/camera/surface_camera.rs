use super::camera_utils::{Camera, CameraUniform, OPENGL_TO_WGPU_MATRIX};
use cgmath::*;

/// Fixed camera on the +z axis looking at the origin with +y up.
///
/// The surface is rotated in front of it rather than the camera orbiting, so
/// the camera only needs to frame the mesh's bounding sphere.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceCamera {
    pub distance: f32,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl Camera for SurfaceCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(self.eye(), Point3::origin(), Vector3::unit_y());
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

impl SurfaceCamera {
    /// Margin left around the bounding sphere.
    const PADDING: f32 = 1.1;

    pub fn new(radius: f32, width: u32, height: u32) -> Self {
        let mut camera = Self {
            distance: 1.0,
            aspect: 1.0,
            fovy: Rad(std::f32::consts::PI / 4.0),
            znear: 0.1,
            zfar: 1000.0,
            uniform: CameraUniform::default(),
        };
        camera.frame(radius);
        camera.resize_projection(width, height);
        camera
    }

    pub fn eye(&self) -> Point3<f32> {
        Point3::new(0.0, 0.0, self.distance)
    }

    /// Moves the camera so a sphere of `radius` at the origin fills the view.
    pub fn frame(&mut self, radius: f32) {
        let half_fov = self.fovy.0 * 0.5;
        self.distance = radius * Self::PADDING / half_fov.sin();
        self.znear = (self.distance - radius * 2.0).max(self.distance * 0.01);
        self.zfar = self.distance + radius * 2.0;
        self.update_view_proj();
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
        self.update_view_proj();
    }

    pub fn update_view_proj(&mut self) {
        let eye = self.eye();
        self.uniform.view_position = [eye.x, eye.y, eye.z, 1.0];
        self.uniform.view_proj = self.build_view_projection_matrix().into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_bounding_sphere() {
        let camera = SurfaceCamera::new(50.0, 800, 600);
        assert!(camera.distance > 50.0);
        assert!(camera.znear > 0.0 && camera.znear < camera.distance - 50.0);
        assert!(camera.zfar >= camera.distance + 50.0);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_size_keeps_aspect() {
        let mut camera = SurfaceCamera::new(1.0, 400, 200);
        camera.resize_projection(0, 0);
        assert_eq!(camera.aspect, 2.0);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let camera = SurfaceCamera::new(10.0, 640, 480);
        let clip = camera.build_view_projection_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((clip.x / clip.w).abs() < 1e-6);
        assert!((clip.y / clip.w).abs() < 1e-6);
        let depth = clip.z / clip.w;
        assert!(depth > 0.0 && depth < 1.0);
    }
}
