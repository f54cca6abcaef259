use crate::constants::*;
use gallery_core::{Camera, ElementKind, Floor, GalleryLayout, SpotLight};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;
use web_sys as web;

mod helpers;
mod mesh;

use mesh::InstanceRaw;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    spot_pos_range: [f32; 4],
    spot_dir_cos_outer: [f32; 4],
    spot_params: [f32; 4],
}

impl SceneUniforms {
    fn new(camera: &Camera, spot: &SpotLight) -> Self {
        let dir = spot.direction();
        let cos_outer = spot.angle.cos();
        let cos_inner = (spot.angle * (1.0 - spot.penumbra)).cos();
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            spot_pos_range: spot.position.extend(spot.distance).to_array(),
            spot_dir_cos_outer: dir.extend(cos_outer).to_array(),
            spot_params: [cos_inner, spot.intensity, AMBIENT_LIGHT, 0.0],
        }
    }
}

fn element_color(kind: &ElementKind) -> [f32; 4] {
    let rgb = match *kind {
        ElementKind::Artwork { index } => ARTWORK_PALETTE[index % ARTWORK_PALETTE.len()],
        ElementKind::Border { .. } => BORDER_COLOR,
        ElementKind::Arrow(_) => ARROW_COLOR,
    };
    [rgb[0], rgb[1], rgb[2], 1.0]
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instances: Vec<InstanceRaw>,

    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    camera: Camera,
    spot: SpotLight,
    floor: Floor,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, layout: &GalleryLayout) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_scene_pipeline(
            &device,
            &pl,
            &shader,
            &[mesh::vertex_layout(), mesh::instance_layout()],
            format,
        );

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let (vertices, indices) = mesh::unit_cube();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        // One instance per layout element plus the floor disk
        let instance_capacity = layout.elements().len() + 1;
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instances"),
            size: (instance_capacity * std::mem::size_of::<InstanceRaw>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let mut camera = Camera::gallery(1.0);
        camera.set_aspect_from_size(width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            instance_buffer,
            instance_capacity,
            instances: Vec::with_capacity(instance_capacity),
            depth_tex,
            depth_view,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
            camera,
            spot: SpotLight::default(),
            floor: Floor::default(),
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.camera.set_aspect_from_size(width, height);

            let (tex, view) = helpers::create_depth_texture(&self.device, width, height);
            self.depth_tex.destroy();
            self.depth_tex = tex;
            self.depth_view = view;
        }
    }

    fn fill_instances(&mut self, layout: &GalleryLayout, rotation: f32) {
        self.instances.clear();
        for e in layout.elements() {
            let model = e.world_matrix(rotation) * Mat4::from_scale(e.size());
            self.instances.push(InstanceRaw {
                model: model.to_cols_array_2d(),
                color: element_color(&e.kind),
                flags: [0.0; 4],
            });
        }
        let diameter = self.floor.radius * 2.0;
        let floor = Mat4::from_translation(Vec3::new(0.0, self.floor.y - FLOOR_THICKNESS * 0.5, 0.0))
            * Mat4::from_scale(Vec3::new(diameter, FLOOR_THICKNESS, diameter));
        self.instances.push(InstanceRaw {
            model: floor.to_cols_array_2d(),
            color: [FLOOR_COLOR[0], FLOOR_COLOR[1], FLOOR_COLOR[2], 1.0],
            flags: [1.0, 0.0, 0.0, 0.0],
        });
        self.instances.truncate(self.instance_capacity);
    }

    pub fn render(&mut self, layout: &GalleryLayout, rotation: f32) -> Result<(), wgpu::SurfaceError> {
        self.fill_instances(layout, rotation);
        let uniforms = SceneUniforms::new(&self.camera, &self.spot);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.instances));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
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
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..self.index_count, 0, 0..self.instances.len() as u32);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
