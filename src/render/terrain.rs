use wgpu;

use super::helpers::{self, DepthMode, MeshBuffers, PipelineDesc};
use crate::core::materials::TerrainUniforms;
use crate::core::mesh::Mesh;

pub(crate) struct TerrainResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) mesh: MeshBuffers,
}

pub(crate) fn create_terrain_resources(
    device: &wgpu::Device,
    scene_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    grid: &Mesh,
) -> TerrainResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("terrain_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::TERRAIN_WGSL.into()),
    });
    let uniform_buffer =
        helpers::uniform_buffer(device, "terrain_uniforms", &TerrainUniforms::default());
    let (bgl, bind_group) = helpers::uniform_only_group(device, "terrain_bg", &uniform_buffer);
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("terrain_pl"),
        bind_group_layouts: &[scene_bgl, &bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_scene_pipeline(
        device,
        &pl,
        PipelineDesc {
            label: "terrain_pipeline",
            shader: &shader,
            vs_entry: "vs_terrain",
            fs_entry: "fs_terrain",
            buffers: &[helpers::mesh_vertex_layout()],
            color_format,
            blend: None,
            depth: DepthMode::Opaque,
        },
    );

    TerrainResources {
        pipeline,
        uniform_buffer,
        bind_group,
        mesh: MeshBuffers::upload(device, "terrain_mesh", grid, false),
    }
}

impl TerrainResources {
    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &TerrainUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(1, &self.bind_group, &[]);
        self.mesh.draw(pass);
    }
}
