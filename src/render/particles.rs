use wgpu;
use wgpu::util::DeviceExt;

use super::helpers::{self, DepthMode, PipelineDesc};
use crate::core::materials::ParticleUniforms;
use crate::core::particles::ParticleAttributes;

const MOTE_ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32,
    2 => Float32,
    3 => Float32
];

// Six corners per mote, expanded in the vertex stage.
const QUAD_VERTICES: u32 = 6;

pub(crate) struct ParticleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) instances: wgpu::Buffer,
    pub(crate) count: u32,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    scene_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    motes: &[ParticleAttributes],
) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
    });
    let uniform_buffer =
        helpers::uniform_buffer(device, "particle_uniforms", &ParticleUniforms::default());
    let (bgl, bind_group) = helpers::uniform_only_group(device, "particles_bg", &uniform_buffer);
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particles_pl"),
        bind_group_layouts: &[scene_bgl, &bgl],
        push_constant_ranges: &[],
    });
    let instance_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ParticleAttributes>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &MOTE_ATTRIBUTES,
    };
    let pipeline = helpers::make_scene_pipeline(
        device,
        &pl,
        PipelineDesc {
            label: "particles_pipeline",
            shader: &shader,
            vs_entry: "vs_mote",
            fs_entry: "fs_mote",
            buffers: &[instance_layout],
            color_format,
            blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
            depth: DepthMode::Translucent,
        },
    );
    let instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle_instances"),
        contents: bytemuck::cast_slice(motes),
        usage: wgpu::BufferUsages::VERTEX,
    });

    ParticleResources {
        pipeline,
        uniform_buffer,
        bind_group,
        instances,
        count: motes.len() as u32,
    }
}

impl ParticleResources {
    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &ParticleUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.instances.slice(..));
        pass.draw(0..QUAD_VERTICES, 0..self.count);
    }
}
