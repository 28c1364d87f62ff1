use wgpu;
use wgpu::util::DeviceExt;

use super::helpers::{self, DepthMode, MeshBuffers, PipelineDesc};
use crate::constants::DOT_TEXTURE_SIZE;
use crate::core::materials::FigureUniforms;
use crate::core::mesh::{Mesh, Vertex};

/// Body and skirt share one program and one bind group; only the skirt's
/// vertex buffer is rewritten per frame.
pub(crate) struct FigureResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) body: MeshBuffers,
    pub(crate) skirt: MeshBuffers,
}

pub(crate) fn create_figure_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    scene_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    body: &Mesh,
    skirt: &Mesh,
    dot_texels: &[u8],
) -> FigureResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("figure_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::FIGURE_WGSL.into()),
    });

    let dot_tex = device.create_texture_with_data(
        queue,
        &wgpu::TextureDescriptor {
            label: Some("dot_tex"),
            size: wgpu::Extent3d {
                width: DOT_TEXTURE_SIZE,
                height: DOT_TEXTURE_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        },
        wgpu::util::TextureDataOrder::LayerMajor,
        dot_texels,
    );
    let dot_view = dot_tex.create_view(&wgpu::TextureViewDescriptor::default());
    let repeat_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("dot_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });

    let uniform_buffer =
        helpers::uniform_buffer(device, "figure_uniforms", &FigureUniforms::default());
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("figure_bgl"),
        entries: &[
            helpers::uniform_entry(0),
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("figure_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&dot_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(&repeat_sampler),
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("figure_pl"),
        bind_group_layouts: &[scene_bgl, &bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_scene_pipeline(
        device,
        &pl,
        PipelineDesc {
            label: "figure_pipeline",
            shader: &shader,
            vs_entry: "vs_figure",
            fs_entry: "fs_figure",
            buffers: &[helpers::mesh_vertex_layout()],
            color_format,
            blend: None,
            depth: DepthMode::Opaque,
        },
    );

    FigureResources {
        pipeline,
        uniform_buffer,
        bind_group,
        body: MeshBuffers::upload(device, "figure_body", body, false),
        skirt: MeshBuffers::upload(device, "figure_skirt", skirt, true),
    }
}

impl FigureResources {
    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &FigureUniforms, skirt: &[Vertex]) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
        queue.write_buffer(&self.skirt.vertex, 0, bytemuck::cast_slice(skirt));
    }

    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(1, &self.bind_group, &[]);
        self.body.draw(pass);
        self.skirt.draw(pass);
    }
}
