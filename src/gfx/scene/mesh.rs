//! Surface mesh GPU buffers

use wgpu::util::DeviceExt;

use crate::gfx::scene::vertex::{interleave, SurfaceVertex};
use crate::surface::NeuroSurface;

pub struct SurfaceMesh {
    vertices: Vec<SurfaceVertex>,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl SurfaceMesh {
    pub fn new(device: &wgpu::Device, surface: &NeuroSurface, colors: &[[f32; 3]]) -> Self {
        let vertices = interleave(surface.positions(), surface.normals(), colors);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Surface Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Surface Index Buffer"),
            contents: bytemuck::cast_slice(surface.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "Uploaded surface mesh: {} vertices, {} triangles",
            vertices.len(),
            surface.triangle_count()
        );

        Self {
            vertices,
            vertex_buffer,
            index_buffer,
            index_count: surface.indices().len() as u32,
        }
    }

    /// Replaces vertex colors and re-uploads the vertex buffer.
    pub fn update_colors(&mut self, queue: &wgpu::Queue, colors: &[[f32; 3]]) {
        for (vertex, &color) in self.vertices.iter_mut().zip(colors) {
            vertex.color = color;
        }
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.vertices));
    }
}

pub trait DrawMesh<'a> {
    fn draw_mesh(&mut self, mesh: &'a SurfaceMesh);
}

impl<'a, 'b> DrawMesh<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b SurfaceMesh) {
        if mesh.index_count == 0 {
            return;
        }
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}
