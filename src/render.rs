//! WebGPU state for the hero scene: one surface, one depth buffer, and one
//! pipeline per visual element, all fed from [`Scene`] each frame.

use std::future::Future;

use web_sys as web;
use wgpu;

use crate::core::materials::SceneUniforms;
use crate::core::{ElementKind, Scene, SceneError};

pub mod figure;
pub mod helpers;
pub mod particles;
pub mod sky;
pub mod terrain;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    #[allow(dead_code)]
    depth_tex: wgpu::Texture, // owns the storage behind depth_view
    depth_view: wgpu::TextureView,

    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,

    sky: sky::SkyResources,
    terrain: terrain::TerrainResources,
    figure: figure::FigureResources,
    particles: particles::ParticleResources,

    clear_color: wgpu::Color,
}

/// Surface and device, before any scene resources exist.
pub struct GpuDevice {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl GpuDevice {
    pub async fn request(
        canvas: web::HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<Self, SceneError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| SceneError::Surface(e.to_string()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(SceneError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: Some("hero_scene_device"),
                },
                None,
            )
            .await
            .map_err(|e| SceneError::Device(e.to_string()))?;
        device.on_uncaptured_error(Box::new(|e| {
            log::error!("[scene] uncaptured GPU error: {}", e);
        }));

        let caps = surface.get_capabilities(&adapter);
        // Shaders emit display-ready values, so prefer a non-sRGB target.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| SceneError::Surface("no supported surface format".into()))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }
}

impl GpuState {
    /// Creates every scene resource inside a validation error scope. The
    /// returned future resolves that scope; a `Some` means the state is unusable.
    pub fn build(
        gpu: GpuDevice,
        scene: &Scene,
    ) -> Result<(Self, impl Future<Output = Option<wgpu::Error>>), SceneError> {
        let GpuDevice {
            surface,
            device,
            queue,
            config,
        } = gpu;
        let format = config.format;
        let dome = scene.mesh(ElementKind::Sky).ok_or_else(|| missing(ElementKind::Sky))?;
        let grid = scene
            .mesh(ElementKind::Terrain)
            .ok_or_else(|| missing(ElementKind::Terrain))?;
        let body = scene
            .mesh(ElementKind::Figure)
            .ok_or_else(|| missing(ElementKind::Figure))?;

        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let (depth_tex, depth_view) =
            helpers::create_depth_texture(&device, config.width, config.height);
        let scene_uniform_buffer =
            helpers::uniform_buffer(&device, "scene_uniforms", &SceneUniforms::default());
        let (scene_bgl, scene_bind_group) =
            helpers::uniform_only_group(&device, "scene_bg", &scene_uniform_buffer);

        let sky = sky::create_sky_resources(&device, &scene_bgl, format, dome);
        let terrain = terrain::create_terrain_resources(&device, &scene_bgl, format, grid);
        let figure = figure::create_figure_resources(
            &device,
            &queue,
            &scene_bgl,
            format,
            body,
            scene.skirt(),
            scene.dot_texture(),
        );
        let particles =
            particles::create_particle_resources(&device, &scene_bgl, format, scene.particles());

        let validation = device.pop_error_scope();

        let [r, g, b] = scene.config().clear_color;
        log::info!(
            "[scene] gpu ready: {}x{} {:?}, {} motes",
            config.width,
            config.height,
            format,
            particles.count
        );

        let state = Self {
            surface,
            device,
            queue,
            config,
            depth_tex,
            depth_view,
            scene_uniform_buffer,
            scene_bind_group,
            sky,
            terrain,
            figure,
            particles,
            clear_color: wgpu::Color { r, g, b, a: 1.0 },
        };
        Ok((state, validation))
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if self.config.width == width && self.config.height == height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        let (tex, view) = helpers::create_depth_texture(&self.device, width, height);
        self.depth_tex = tex;
        self.depth_view = view;
        log::debug!("[scene] surface resized to {}x{}", width, height);
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), SceneError> {
        let m = scene.materials();
        self.queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&m.scene));
        self.sky.write(&self.queue, &m.sky);
        self.terrain.write(&self.queue, &m.terrain);
        self.figure
            .write(&self.queue, &m.figure, &scene.skirt().vertices);
        self.particles.write(&self.queue, &m.particles);

        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(e) => return Err(SceneError::Frame(e.to_string())),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene_encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            pass.set_bind_group(0, &self.scene_bind_group, &[]);
            for kind in ElementKind::DRAW_ORDER {
                match kind {
                    ElementKind::Sky => self.sky.draw(&mut pass),
                    ElementKind::Terrain => self.terrain.draw(&mut pass),
                    ElementKind::Figure => self.figure.draw(&mut pass),
                    ElementKind::Particles => self.particles.draw(&mut pass),
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn missing(kind: ElementKind) -> SceneError {
    SceneError::Geometry(format!("no mesh for {:?}", kind))
}
