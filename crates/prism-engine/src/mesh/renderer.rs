use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::device::DEPTH_FORMAT;
use crate::render::{RenderCtx, RenderTarget};

/// Vertex format for mesh geometry.
///
/// Positions are in model space; the transform matrix maps them to clip space.
/// Colors are linear RGB and interpolate across a face between its vertices'
/// values.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// One draw over the shared vertex buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshDraw {
    /// Draws the vertex range as a non-indexed triangle list.
    Triangles(Range<u32>),
    /// Draws four vertices starting at `base_vertex` as two triangles via the
    /// shared quad index buffer.
    Quad { base_vertex: i32 },
}

/// Transform uniform, column-major as produced by `Mat4::to_cols_array_2d`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MatrixUniform {
    matrix: [[f32; 4]; 4],
}

/// Depth-tested mesh renderer driven by runtime-loaded WGSL sources.
///
/// The vertex and fragment stages are separate files compiled lazily on first
/// render, each under a validation error scope. A stage that fails to compile
/// logs the error once and permanently disables the renderer; the rest of the
/// frame (2D passes) is unaffected. Missing sources disable the renderer the
/// same way, without logging here (the caller reports the load failure).
pub struct MeshRenderer {
    vertex_source: Option<String>,
    fragment_source: Option<String>,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    matrix_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
    quad_ibo: Option<wgpu::Buffer>,

    failed: bool,
}

impl MeshRenderer {
    pub fn new(vertex_source: Option<String>, fragment_source: Option<String>) -> Self {
        Self {
            vertex_source,
            fragment_source,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            matrix_ubo: None,
            vbo: None,
            vbo_capacity: 0,
            quad_ibo: None,
            failed: false,
        }
    }

    /// Draws `vertices` with `draws` under the given transform.
    ///
    /// Does nothing when the shader sources are missing or failed to compile.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        matrix: Mat4,
        vertices: &[MeshVertex],
        draws: &[MeshDraw],
    ) {
        if vertices.is_empty() || draws.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        if self.failed {
            return;
        }
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);
        self.ensure_vertex_capacity(ctx, vertices.len());

        let Some(vbo) = self.vbo.as_ref() else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(vertices));

        let Some(ubo) = self.matrix_ubo.as_ref() else { return };
        let u = MatrixUniform { matrix: matrix.to_cols_array_2d() };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("prism mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            // The frame's clear pass has already reset depth to 1.0.
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);

        for draw in draws {
            match draw {
                MeshDraw::Triangles(range) => rpass.draw(range.clone(), 0..1),
                MeshDraw::Quad { base_vertex } => rpass.draw_indexed(0..6, *base_vertex, 0..1),
            }
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.failed {
            return;
        }
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let (Some(vs_src), Some(fs_src)) =
            (self.vertex_source.as_deref(), self.fragment_source.as_deref())
        else {
            self.failed = true;
            return;
        };

        let Some(vs_module) = compile_shader(ctx.device, "prism mesh vertex shader", vs_src)
        else {
            self.failed = true;
            return;
        };
        let Some(fs_module) = compile_shader(ctx.device, "prism mesh fragment shader", fs_src)
        else {
            self.failed = true;
            return;
        };

        // Pipeline creation validates the stage interfaces; capture that too
        // so a mismatched pair of shaders cannot take the device down.
        let error_scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("prism mesh bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(matrix_ubo_min_binding_size()),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("prism mesh pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("prism mesh pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[MeshVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &fs_module,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(error_scope.pop()) {
            log::error!("prism mesh pipeline failed validation; mesh rendering disabled: {err}");
            self.failed = true;
            return;
        }

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.matrix_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.matrix_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let matrix_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("prism mesh matrix ubo"),
            size: std::mem::size_of::<MatrixUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("prism mesh bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: matrix_ubo.as_entire_binding(),
            }],
        });

        self.matrix_ubo = Some(matrix_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_ibo.is_some() {
            return;
        }
        let indices: [u16; 6] = [0, 1, 2, 0, 2, 3];
        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prism mesh quad ibo"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(64);
        let new_size = (new_cap * std::mem::size_of::<MeshVertex>()) as u64;
        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("prism mesh vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

/// Compiles a WGSL module under a validation error scope.
///
/// Returns `None` after logging when the source does not compile. The error
/// scope confines the failure to this module, so an invalid shader never
/// reaches the device's uncaptured-error handler.
fn compile_shader(device: &wgpu::Device, label: &str, source: &str) -> Option<wgpu::ShaderModule> {
    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    match pollster::block_on(error_scope.pop()) {
        None => Some(module),
        Some(err) => {
            log::error!("{label} failed to compile; mesh rendering disabled: {err}");
            None
        }
    }
}

fn matrix_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<MatrixUniform>() as u64)
        .expect("MatrixUniform has non-zero size by construction")
}
