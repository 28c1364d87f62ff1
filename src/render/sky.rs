use wgpu;

use super::helpers::{self, DepthMode, MeshBuffers, PipelineDesc};
use crate::core::materials::SkyUniforms;
use crate::core::mesh::Mesh;

pub(crate) struct SkyResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) mesh: MeshBuffers,
}

pub(crate) fn create_sky_resources(
    device: &wgpu::Device,
    scene_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    dome: &Mesh,
) -> SkyResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("sky_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SKY_WGSL.into()),
    });
    let uniform_buffer = helpers::uniform_buffer(device, "sky_uniforms", &SkyUniforms::default());
    let (bgl, bind_group) = helpers::uniform_only_group(device, "sky_bg", &uniform_buffer);
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("sky_pl"),
        bind_group_layouts: &[scene_bgl, &bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_scene_pipeline(
        device,
        &pl,
        PipelineDesc {
            label: "sky_pipeline",
            shader: &shader,
            vs_entry: "vs_sky",
            fs_entry: "fs_sky",
            buffers: &[helpers::mesh_vertex_layout()],
            color_format,
            blend: None,
            depth: DepthMode::Backdrop,
        },
    );

    SkyResources {
        pipeline,
        uniform_buffer,
        bind_group,
        mesh: MeshBuffers::upload(device, "sky_mesh", dome, false),
    }
}

impl SkyResources {
    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &SkyUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(1, &self.bind_group, &[]);
        self.mesh.draw(pass);
    }
}
