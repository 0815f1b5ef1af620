use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use wgpu::util::DeviceExt;

use crate::coords::{model_translation, world_projection};
use crate::render::{RenderCtx, RenderTarget};

/// Half the side length of the square, in world units.
pub const DEFAULT_HALF_EXTENT: f32 = 0.1;

/// What to draw this frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SquareDraw {
    /// Center of the square in world units.
    pub position: Vec2,
    /// RGB multiplier applied to the (white) vertex colors.
    pub color: Vec3,
}

/// Draws one axis-aligned square.
///
/// Geometry is static (four white vertices at `±half_extent`); placement and
/// color are fed per frame through a single uniform block.
pub struct SquareRenderer {
    half_extent: f32,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_buffer: Option<wgpu::Buffer>,

    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
}

impl Default for SquareRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_HALF_EXTENT)
    }
}

impl SquareRenderer {
    pub fn new(half_extent: f32) -> Self {
        Self {
            half_extent,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            uniform_buffer: None,
            vertex_buffer: None,
            index_buffer: None,
        }
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Renders the square into `target` on top of whatever is already there.
    ///
    /// Does nothing while the viewport has no area.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw: &SquareDraw,
    ) {
        let Some(aspect) = ctx.aspect_ratio() else { return };

        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        let Some(ubo) = self.uniform_buffer.as_ref() else { return };
        let uniforms = SquareUniforms::new(aspect, draw.position, draw.color);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&uniforms));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vertex_buffer.as_ref() else { return };
        let Some(ibo) = self.index_buffer.as_ref() else { return };

        let mut rpass = target.load_pass("squarely square pass");

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..SQUARE_INDICES.len() as u32, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("squarely square shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/square.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("squarely square bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(SquareUniforms::SIZE),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("squarely square pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("squarely square pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[SquareVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
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
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("square pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // Bindings belong to the old layout.
        self.bind_group = None;
        self.uniform_buffer = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.uniform_buffer.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let uniform_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("squarely square ubo"),
            size: SquareUniforms::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("squarely square bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        self.uniform_buffer = Some(uniform_buffer);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.vertex_buffer.is_some() && self.index_buffer.is_some() {
            return;
        }

        let vertices = square_vertices(self.half_extent);

        self.vertex_buffer = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("squarely square vbo"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.index_buffer = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("squarely square ibo"),
            contents: bytemuck::cast_slice(&SQUARE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

// ── GPU data ──────────────────────────────────────────────────────────────

/// Uniform block matching `Uniforms` in `square.wgsl`.
///
/// WGSL aligns `vec3<f32>` to 16 bytes, so the color carries one float of
/// padding and the block is 144 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(crate) struct SquareUniforms {
    pub projection: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub custom_color: [f32; 3],
    pub _pad: f32,
}

impl SquareUniforms {
    const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    pub(crate) fn new(aspect_ratio: f32, position: Vec2, color: Vec3) -> Self {
        Self {
            projection: world_projection(aspect_ratio).to_cols_array_2d(),
            model: model_translation(position).to_cols_array_2d(),
            custom_color: color.to_array(),
            _pad: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct SquareVertex {
    position: [f32; 3],
    color: [f32; 3],
}

impl SquareVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    /// White corner at `(x, y)` on the z = 0 plane.
    const fn white(x: f32, y: f32) -> Self {
        Self {
            position: [x, y, 0.0],
            color: [1.0, 1.0, 1.0],
        }
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SquareVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Corners in order: top-right, bottom-right, bottom-left, top-left.
fn square_vertices(h: f32) -> [SquareVertex; 4] {
    [
        SquareVertex::white(h, h),
        SquareVertex::white(h, -h),
        SquareVertex::white(-h, -h),
        SquareVertex::white(-h, h),
    ]
}

const SQUARE_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];
