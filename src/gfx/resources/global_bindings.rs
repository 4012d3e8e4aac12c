//! Global uniform bindings for camera, model and lighting data
//!
//! One uniform block bound at group 0 carries everything the surface shader
//! needs per frame.

use cgmath::{Matrix4, Quaternion, Vector3};

use crate::{
    gfx::camera::camera_utils::CameraUniform,
    wgpu_utils::{binding_types, uniform_buffer::UniformBuffer},
};

/// Global uniform buffer content.
///
/// MUST match the `Globals` struct in `surface.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    // Rotation only, for transforming normals.
    normal_matrix: [[f32; 4]; 4],
    light_direction: [f32; 4],
}

impl GlobalUBOContent {
    /// Places the surface centered at the origin and rotated by `orientation`.
    pub fn new(camera: CameraUniform, orientation: Quaternion<f32>, center: Vector3<f32>) -> Self {
        let rotation = Matrix4::from(orientation);
        let model = rotation * Matrix4::from_translation(-center);
        Self {
            view_position: camera.view_position,
            view_proj: camera.view_proj,
            model: model.into(),
            normal_matrix: rotation.into(),
            // Headlight from the camera side.
            light_direction: [0.0, 0.0, 1.0, 0.0],
        }
    }

    pub fn model(&self) -> Matrix4<f32> {
        Matrix4::from(self.model)
    }
}

pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Bind group layout and bind group for [`GlobalUBO`], bound at slot 0.
pub struct GlobalBindings {
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device, ubo: &GlobalUBO) -> Self {
        let layout = binding_types::uniform_layout(device, "Globals Bind Group Layout");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        });

        GlobalBindings { layout, bind_group }
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, Point3, Rotation3, Transform};

    #[test]
    fn test_uniform_size_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<GlobalUBOContent>() % 16, 0);
        assert_eq!(std::mem::size_of::<GlobalUBOContent>(), 224);
    }

    #[test]
    fn test_model_centers_then_rotates() {
        let center = Vector3::new(10.0, 0.0, 0.0);
        let orientation = Quaternion::from_angle_y(Deg(90.0f32));
        let content = GlobalUBOContent::new(CameraUniform::default(), orientation, center);

        let p = content.model().transform_point(Point3::new(10.0, 0.0, 0.0));
        assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5 && p.z.abs() < 1e-5);

        let q = content.model().transform_point(Point3::new(11.0, 0.0, 0.0));
        assert!((q.z - -1.0).abs() < 1e-5);
    }
}
