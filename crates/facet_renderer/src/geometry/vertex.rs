/// Vertex buffer layout for [`facet_core::Vertex`].
///
/// Must stay in sync with both the `Vertex` field order and the attribute
/// locations declared in `shaders/scene.wgsl`.
use facet_core::Vertex;

/// Returns the `VertexBufferLayout` matching `Vertex`'s memory layout.
/// Pass this to `wgpu::VertexState::buffers` when building a pipeline.
pub fn vertex_layout<'a>() -> wgpu::VertexBufferLayout<'a> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // @location(0) position
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // @location(1) normal
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                shader_location: 1,
            },
            // @location(2) uv
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                shader_location: 2,
            },
        ],
    }
}
