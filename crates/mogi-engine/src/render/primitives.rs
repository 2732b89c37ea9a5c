use std::collections::HashMap;

use wgpu::util::DeviceExt;

use crate::backend::TextureId;
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{Batches, Brush, DrawList, IndexKind};

use super::common::{
    brush_mode, clear_color, premul_alpha_blend, GpuVertex, ProjectionUniform, PROJECTION_UBO_SIZE,
};

/// A texture uploaded to the GPU with its bind group.
struct BoundTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// Renders a [`DrawList`] with two pipelines (triangle list and line list)
/// sharing one shader.
///
/// Geometry is provided as logical pixels, converted to clip space in the
/// vertex shader using the projection uniform. Colors are linear premultiplied
/// RGBA.
#[derive(Default)]
pub struct PrimitiveRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    triangles: Option<wgpu::RenderPipeline>,
    lines: Option<wgpu::RenderPipeline>,

    globals_layout: Option<wgpu::BindGroupLayout>,
    texture_layout: Option<wgpu::BindGroupLayout>,
    globals: Option<wgpu::BindGroup>,
    projection_ubo: Option<wgpu::Buffer>,
    sampler: Option<wgpu::Sampler>,

    /// 1×1 white texture bound for solid batches.
    white: Option<BoundTexture>,
    textures: HashMap<TextureId, BoundTexture>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
    ibo: Option<wgpu::Buffer>,
    ibo_capacity: usize,

    vertices: Vec<GpuVertex>,
    batches: Batches,

    warned_missing_texture: bool,
}

impl PrimitiveRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an uploaded texture under `id`.
    pub fn insert_texture(&mut self, ctx: &RenderCtx<'_>, id: TextureId, texture: wgpu::Texture, view: wgpu::TextureView) {
        self.ensure_pipeline(ctx);
        let Some(bind_group) = self.texture_bind_group(ctx, &view, "mogi texture bind group") else { return };
        self.textures.insert(id, BoundTexture { _texture: texture, bind_group });
    }

    /// Drops the GPU texture registered under `id`.
    pub fn remove_texture(&mut self, id: TextureId) -> bool {
        self.textures.remove(&id).is_some()
    }

    /// Clears `target` to `clear` and draws `draw_list` on top.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, clear: Color, draw_list: &DrawList) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.write_projection_uniform(ctx);

        self.vertices.clear();
        for prim in draw_list.primitives() {
            let mode = brush_mode(prim.brush);
            self.vertices
                .extend(draw_list.vertices_of(prim).iter().map(|v| GpuVertex::new(v, mode)));
        }
        self.batches.rebuild(draw_list);

        let has_geometry = !self.batches.batches.is_empty();
        if has_geometry {
            self.ensure_vertex_capacity(ctx, self.vertices.len());
            self.ensure_index_capacity(ctx, self.batches.indices.len());
            if let (Some(vbo), Some(ibo)) = (self.vbo.as_ref(), self.ibo.as_ref()) {
                ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.vertices));
                ctx.queue.write_buffer(ibo, 0, bytemuck::cast_slice(&self.batches.indices));
            }
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("mogi primitive pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color(clear)),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if !has_geometry {
            return;
        }

        let (Some(triangles), Some(lines), Some(globals), Some(white), Some(vbo), Some(ibo)) = (
            self.triangles.as_ref(),
            self.lines.as_ref(),
            self.globals.as_ref(),
            self.white.as_ref(),
            self.vbo.as_ref(),
            self.ibo.as_ref(),
        ) else {
            return;
        };

        rpass.set_bind_group(0, globals, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);

        for batch in &self.batches.batches {
            let pipeline = match batch.kind {
                IndexKind::Triangles => triangles,
                IndexKind::Lines => lines,
            };
            let texture = match batch.brush {
                Brush::Solid => white,
                Brush::Glyphs(id) | Brush::Image(id) => match self.textures.get(&id) {
                    Some(t) => t,
                    None => {
                        if !self.warned_missing_texture {
                            log::warn!(target: "mogi", "draw references unknown texture {id:?}; skipped");
                            self.warned_missing_texture = true;
                        }
                        continue;
                    }
                },
            };

            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(1, &texture.bind_group, &[]);
            rpass.draw_indexed(batch.indices.clone(), 0, 0..1);
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.triangles.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mogi primitive shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/primitive.wgsl").into()),
        });

        let globals_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mogi globals bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: Some(PROJECTION_UBO_SIZE),
                },
                count: None,
            }],
        });

        let texture_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mogi texture bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mogi primitive pipeline layout"),
            bind_group_layouts: &[&globals_layout, &texture_layout],
            immediate_size: 0,
        });

        let make = |label: &str, topology: wgpu::PrimitiveTopology| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[GpuVertex::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(premul_alpha_blend()),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        self.triangles = Some(make("mogi triangle pipeline", wgpu::PrimitiveTopology::TriangleList));
        self.lines = Some(make("mogi line pipeline", wgpu::PrimitiveTopology::LineList));
        self.pipeline_format = Some(ctx.surface_format);

        // Layouts changed; everything bound against the old ones is stale.
        let rebind = self.globals_layout.is_some();
        self.globals_layout = Some(globals_layout);
        self.texture_layout = Some(texture_layout);
        self.globals = None;
        self.projection_ubo = None;
        self.white = None;
        if rebind && !self.textures.is_empty() {
            log::warn!(target: "mogi", "surface format changed; {} textures must be re-uploaded", self.textures.len());
            self.textures.clear();
        }
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.globals.is_none() || self.projection_ubo.is_none() {
            let Some(layout) = self.globals_layout.as_ref() else { return };

            let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("mogi projection ubo"),
                size: PROJECTION_UBO_SIZE.get(),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });

            let globals = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("mogi globals bind group"),
                layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: ubo.as_entire_binding(),
                }],
            });

            self.projection_ubo = Some(ubo);
            self.globals = Some(globals);
        }

        if self.white.is_none() {
            let texture = ctx.device.create_texture_with_data(
                ctx.queue,
                &wgpu::TextureDescriptor {
                    label: Some("mogi white texture"),
                    size: wgpu::Extent3d { width: 1, height: 1, depth_or_array_layers: 1 },
                    mip_level_count: 1,
                    sample_count: 1,
                    dimension: wgpu::TextureDimension::D2,
                    format: wgpu::TextureFormat::Rgba8Unorm,
                    usage: wgpu::TextureUsages::TEXTURE_BINDING,
                    view_formats: &[],
                },
                wgpu::util::TextureDataOrder::LayerMajor,
                &[255, 255, 255, 255],
            );
            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
            if let Some(bind_group) = self.texture_bind_group(ctx, &view, "mogi white bind group") {
                self.white = Some(BoundTexture { _texture: texture, bind_group });
            }
        }
    }

    fn texture_bind_group(&mut self, ctx: &RenderCtx<'_>, view: &wgpu::TextureView, label: &str) -> Option<wgpu::BindGroup> {
        let layout = self.texture_layout.as_ref()?;
        let sampler = self.sampler.get_or_insert_with(|| {
            ctx.device.create_sampler(&wgpu::SamplerDescriptor {
                label: Some("mogi sampler"),
                address_mode_u: wgpu::AddressMode::ClampToEdge,
                address_mode_v: wgpu::AddressMode::ClampToEdge,
                address_mode_w: wgpu::AddressMode::ClampToEdge,
                mag_filter: wgpu::FilterMode::Linear,
                min_filter: wgpu::FilterMode::Linear,
                mipmap_filter: wgpu::MipmapFilterMode::Nearest,
                ..Default::default()
            })
        });

        Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        }))
    }

    fn write_projection_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.projection_ubo.as_ref() else { return };
        let u = ProjectionUniform::from(ctx.projection);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(1024);
        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mogi vertex buffer"),
            size: (new_cap * std::mem::size_of::<GpuVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }

    fn ensure_index_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.ibo_capacity && self.ibo.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(2048);
        self.ibo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mogi index buffer"),
            size: (new_cap * std::mem::size_of::<u32>()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.ibo_capacity = new_cap;
    }
}
