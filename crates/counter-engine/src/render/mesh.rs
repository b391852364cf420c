use wgpu::util::DeviceExt;

use crate::render::shader::LinkError;
use crate::render::{RenderCtx, RenderTarget, ShaderProgram};
use crate::scene::{MeshData, PrimitiveMode};

// ── vertex layouts ────────────────────────────────────────────────────────

/// Location 0: homogeneous position, one `vec4<f32>` per vertex (buffer slot 0).
const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x4];

/// Location 1: RGBA color, one `vec4<f32>` per vertex (buffer slot 1).
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x4];

fn vec4_layout(attributes: &'static [wgpu::VertexAttribute]) -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 4]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}

fn topology(mode: PrimitiveMode) -> (wgpu::PrimitiveTopology, Option<wgpu::IndexFormat>) {
    match mode {
        PrimitiveMode::TriangleStrip => {
            (wgpu::PrimitiveTopology::TriangleStrip, Some(wgpu::IndexFormat::Uint16))
        }
        PrimitiveMode::TriangleList => (wgpu::PrimitiveTopology::TriangleList, None),
    }
}

// ── mesh ──────────────────────────────────────────────────────────────────

/// GPU-resident mesh: the draw descriptor for one indexed draw call.
///
/// Owns its buffers; dropping a `Mesh` releases them.
pub struct Mesh {
    positions: wgpu::Buffer,
    colors: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
    mode: PrimitiveMode,
}

impl Mesh {
    /// Uploads CPU geometry into freshly allocated vertex/index buffers.
    pub fn upload(device: &wgpu::Device, data: &MeshData) -> Self {
        debug_assert_eq!(data.positions.len(), data.colors.len());
        debug_assert!(data.indices_in_bounds());

        let positions = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("counter mesh positions"),
            contents: bytemuck::cast_slice(&data.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let colors = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("counter mesh colors"),
            contents: bytemuck::cast_slice(&data.colors),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("counter mesh indices"),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            positions,
            colors,
            indices,
            index_count: data.indices.len() as u32,
            mode: data.mode,
        }
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    #[inline]
    pub fn mode(&self) -> PrimitiveMode {
        self.mode
    }
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Draws `Mesh` values with the compiled shader program.
///
/// Holds one pipeline per `PrimitiveMode`, since topology is fixed per pipeline.
/// Pipelines are linked lazily for the current surface format. Without a program
/// (compilation or linking failed) every draw is a no-op and the frame only
/// shows the clear color.
pub struct MeshRenderer {
    program: Option<ShaderProgram>,
    pipelines: Option<Pipelines>,
}

struct Pipelines {
    format: wgpu::TextureFormat,
    strip: wgpu::RenderPipeline,
    list: wgpu::RenderPipeline,
}

impl Pipelines {
    fn get(&self, mode: PrimitiveMode) -> &wgpu::RenderPipeline {
        match mode {
            PrimitiveMode::TriangleStrip => &self.strip,
            PrimitiveMode::TriangleList => &self.list,
        }
    }
}

impl MeshRenderer {
    pub fn new(program: Option<ShaderProgram>) -> Self {
        Self {
            program,
            pipelines: None,
        }
    }

    /// Returns `true` while a usable shader program is attached.
    pub fn has_program(&self) -> bool {
        self.program.is_some()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, meshes: &[Mesh]) {
        if meshes.iter().all(|m| m.index_count == 0) {
            return;
        }

        self.ensure_pipelines(ctx);
        let Some(pipelines) = self.pipelines.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("counter mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for mesh in meshes.iter().filter(|m| m.index_count > 0) {
            rpass.set_pipeline(pipelines.get(mesh.mode));
            rpass.set_vertex_buffer(0, mesh.positions.slice(..));
            rpass.set_vertex_buffer(1, mesh.colors.slice(..));
            rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipelines.as_ref().is_some_and(|p| p.format == ctx.surface_format) {
            return;
        }
        self.pipelines = None;
        let Some(program) = self.program.as_ref() else { return };

        match link(ctx, program) {
            Ok(pipelines) => {
                log::debug!("mesh pipelines linked for {:?}", ctx.surface_format);
                self.pipelines = Some(pipelines);
            }
            Err(err) => {
                log::error!("{err}");
                log::error!("shader program unusable; continuing without drawing geometry");
                self.program = None;
            }
        }
    }
}

/// Builds both pipelines inside a validation error scope, so interface
/// mismatches between the stages come back as a `LinkError`.
fn link(ctx: &RenderCtx<'_>, program: &ShaderProgram) -> Result<Pipelines, LinkError> {
    let scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

    let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("counter mesh pipeline layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });
    let strip = create_pipeline(ctx, program, &layout, PrimitiveMode::TriangleStrip);
    let list = create_pipeline(ctx, program, &layout, PrimitiveMode::TriangleList);

    match pollster::block_on(scope.pop()) {
        Some(err) => Err(LinkError::new(err.to_string())),
        None => Ok(Pipelines {
            format: ctx.surface_format,
            strip,
            list,
        }),
    }
}

fn create_pipeline(
    ctx: &RenderCtx<'_>,
    program: &ShaderProgram,
    layout: &wgpu::PipelineLayout,
    mode: PrimitiveMode,
) -> wgpu::RenderPipeline {
    let (topology, strip_index_format) = topology(mode);
    let label = format!("counter mesh pipeline ({mode:?})");

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &program.vertex,
            entry_point: Some(super::shader::VERTEX_ENTRY),
            compilation_options: Default::default(),
            buffers: &[vec4_layout(&POSITION_ATTRS), vec4_layout(&COLOR_ATTRS)],
        },
        fragment: Some(wgpu::FragmentState {
            module: &program.fragment,
            entry_point: Some(super::shader::FRAGMENT_ENTRY),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format,
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
}
