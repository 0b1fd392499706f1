/// Shared bind-group layouts plus the two compiled variants of the scene
/// pipeline.
///
/// The depth-biased variant exists because polygon offset is pipeline
/// state under wgpu, not a dynamic toggle: `DepthBias` appearance nodes
/// switch between the two pre-compiled variants through
/// [`RenderState::set_depth_bias`](crate::state::RenderState::set_depth_bias).
use std::sync::Arc;

use facet_core::Color;

use crate::geometry::vertex_layout;
use crate::resources::buffer;

/// Depth-stencil format every scene pass attaches.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Bias applied by [`ScenePipelines::new`]: positive values push the
/// biased subtree's fragments away from the camera, the wgpu rendition of
/// classic polygon-offset fill.
pub const DEFAULT_DEPTH_BIAS: wgpu::DepthBiasState = wgpu::DepthBiasState {
    constant: 2,
    slope_scale: 1.0,
    clamp: 0.0,
};

// ── Layouts ───────────────────────────────────────────────────────────────────

/// All bind-group layouts used by the scene pipelines.
///
/// Created once and shared via `Arc` so appearance nodes and the external
/// traversal can build bind groups without owning the whole struct.
#[derive(Clone)]
pub struct Layouts {
    /// group(0) — camera view-projection matrix.
    pub camera: Arc<wgpu::BindGroupLayout>,
    /// group(1) — per-node model matrix through a **dynamic** uniform
    /// buffer: one large buffer bound once, a different byte offset per
    /// draw call (see [`crate::resources::transform_buffer::TransformBuffer`]).
    pub model: Arc<wgpu::BindGroupLayout>,
    /// group(2) — material color.
    pub material: Arc<wgpu::BindGroupLayout>,
}

impl Layouts {
    pub fn new(device: &wgpu::Device) -> Self {
        let camera = Arc::new(
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Camera"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            }),
        );

        let model = Arc::new(
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Model (dynamic)"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        // Each element is a mat4x4<f32> = 64 bytes.
                        min_binding_size: wgpu::BufferSize::new(64),
                    },
                    count: None,
                }],
            }),
        );

        let material = Arc::new(
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Material"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            }),
        );

        Self {
            camera,
            model,
            material,
        }
    }
}

// ── ScenePipelines ────────────────────────────────────────────────────────────

/// The compiled scene pipeline in its two variants, plus the fallback
/// material every frame starts with.
pub struct ScenePipelines {
    pub standard: Arc<wgpu::RenderPipeline>,
    /// Same pipeline with a constant + slope-scaled depth bias.
    pub biased: Arc<wgpu::RenderPipeline>,
    pub layouts: Layouts,
    /// Opaque white, bound at group(2) until a `FlatColor` node loads.
    pub default_material: wgpu::BindGroup,
}

impl ScenePipelines {
    /// Compiles both variants for `target_format` using [`DEFAULT_DEPTH_BIAS`].
    pub fn new(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        sample_count: u32,
        layouts: Layouts,
    ) -> Self {
        Self::with_bias(device, target_format, sample_count, layouts, DEFAULT_DEPTH_BIAS)
    }

    /// Compiles both variants, with the biased one using `bias`.
    pub fn with_bias(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        sample_count: u32,
        layouts: Layouts,
        bias: wgpu::DepthBiasState,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::include_wgsl!("shaders/scene.wgsl"));

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&layouts.camera, &layouts.model, &layouts.material],
            push_constant_ranges: &[],
        });

        let compile = |label: &str, bias: wgpu::DepthBiasState| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[vertex_layout()],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: target_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias,
                }),
                multisample: wgpu::MultisampleState {
                    count: sample_count,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            })
        };

        let standard = Arc::new(compile("Scene Pipeline", wgpu::DepthBiasState::default()));
        let biased = Arc::new(compile("Scene Pipeline (depth bias)", bias));

        let default_material_buf =
            buffer::create_uniform(device, "Default Material", &Color::WHITE.to_array());
        let default_material = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Default Material BindGroup"),
            layout: &layouts.material,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: default_material_buf.as_entire_binding(),
            }],
        });

        Self {
            standard,
            biased,
            layouts,
            default_material,
        }
    }
}
