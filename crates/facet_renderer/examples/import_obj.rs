// Headless end-to-end demo: imports the OBJ given on the command line
// (falling back to a generated cube), uploads it, and draws one frame into
// an off-screen texture through the full load/draw/unload contract. No
// window required, so it also runs on headless CI machines.

use std::path::PathBuf;

use facet_renderer::glam::{Mat4, Vec3};
use facet_renderer::{
    geometry::primitives, pipeline, resources::buffer, Color, Drawable, EngineContext, FlatColor,
    GpuMesh, Layouts, RenderState, ScenePipelines, TransformBuffer,
};

const SIZE: u32 = 512;
const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let context = pollster::block_on(EngineContext::new())?;
    let device = &context.device;

    let layouts = Layouts::new(device);
    let pipelines = ScenePipelines::new(device, FORMAT, 1, layouts.clone());

    // Import the requested mesh, or fall back to the procedural cube so the
    // demo draws something out of the box.
    let mesh = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => GpuMesh::from_file(device, &path)?,
        None => GpuMesh::new(device, &primitives::cube()),
    };
    log::info!(
        "mesh ready: {} vertices, {} triangles{}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        if mesh.is_empty() { " (empty: draw will be a no-op)" } else { "" },
    );

    // Camera: fixed perspective looking at the origin.
    let view = Mat4::look_at_rh(Vec3::new(0.0, 1.5, 4.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(45f32.to_radians(), 1.0, 0.1, 100.0);
    let camera_buf = buffer::create_uniform(device, "Camera", &(proj * view).to_cols_array());
    let camera = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Camera BindGroup"),
        layout: &layouts.camera,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: camera_buf.as_entire_binding(),
        }],
    });

    // One transform slot, identity.
    let transforms = TransformBuffer::new(device, &layouts.model, 1);
    transforms.write(&context.queue, 0, &Mat4::IDENTITY);

    let tint = FlatColor::new(device, &layouts, Color::rgb(0.8, 0.3, 0.2));

    // Off-screen color + depth targets.
    let extent = wgpu::Extent3d {
        width: SIZE,
        height: SIZE,
        depth_or_array_layers: 1,
    };
    let color = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Demo Color"),
        size: extent,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let depth = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Demo Depth"),
        size: extent,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: pipeline::DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let color_view = color.create_view(&wgpu::TextureViewDescriptor::default());
    let depth_view = depth.create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("Demo Encoder"),
    });
    {
        let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Demo Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: 0.1,
                        g: 0.2,
                        b: 0.3,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        // The load/draw/unload sequence the scene traversal would issue.
        let mut state = RenderState::new(pass, &context.queue, &pipelines, &camera);
        state.set_transform(&transforms, 0);
        tint.load(&mut state);
        mesh.draw(&mut state);
        tint.unload(&mut state);
    }

    context.queue.submit(std::iter::once(encoder.finish()));
    context.device.poll(wgpu::Maintain::Wait);

    log::info!("frame submitted");
    Ok(())
}
