//! # Vertex Data Structures
//!
//! GPU-compatible vertex format for surface rendering.

/// A surface vertex with position, normal and color.
///
/// Colors live in the vertex buffer rather than a lookup texture so a
/// threshold or contrast change is a single buffer write.
///
/// # Examples
///
/// ```no_run
/// use surfview::gfx::scene::vertex::SurfaceVertex;
///
/// let vertex = SurfaceVertex {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
///     color: [0.5, 0.5, 0.5],
/// };
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SurfaceVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl SurfaceVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x3];

    /// Byte offset of `color` within a vertex.
    pub const COLOR_OFFSET: wgpu::BufferAddress =
        (2 * std::mem::size_of::<[f32; 3]>()) as wgpu::BufferAddress;

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// - Attribute 0: Position (Float32x3)
    /// - Attribute 1: Normal (Float32x3)
    /// - Attribute 2: Color (Float32x3)
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SurfaceVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Interleaves per-vertex attributes into vertex structs.
pub fn interleave(
    positions: &[[f32; 3]],
    normals: &[[f32; 3]],
    colors: &[[f32; 3]],
) -> Vec<SurfaceVertex> {
    positions
        .iter()
        .zip(normals)
        .zip(colors)
        .map(|((&position, &normal), &color)| SurfaceVertex {
            position,
            normal,
            color,
        })
        .collect()
}
