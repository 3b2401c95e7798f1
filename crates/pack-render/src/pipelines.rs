use pack_core::mesh::{LineVertex, Vertex};
use pack_core::InstanceRaw;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

const MESH_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 8] = wgpu::vertex_attr_array![
    2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4,
    6 => Float32x4, 7 => Float32x4, 8 => Float32x4,
    9 => Float32x4,
];
const LINE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

pub(crate) struct Pipelines {
    pub bind_group_layout: wgpu::BindGroupLayout,
    // rolls and cores
    pub solid: wgpu::RenderPipeline,
    // translucent pack box, drawn last without depth writes
    pub glass: wgpu::RenderPipeline,
    pub edges: wgpu::RenderPipeline,
    pub grid: wgpu::RenderPipeline,
}

fn mesh_buffers() -> [wgpu::VertexBufferLayout<'static>; 2] {
    [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &MESH_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ]
}

fn line_buffers() -> [wgpu::VertexBufferLayout<'static>; 1] {
    [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &LINE_ATTRS,
    }]
}

fn depth_state(write: bool) -> Option<wgpu::DepthStencilState> {
    Some(wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: write,
        depth_compare: wgpu::CompareFunction::LessEqual,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    })
}

struct PipelineSpec<'a> {
    label: &'a str,
    module: &'a wgpu::ShaderModule,
    vs_entry: &'a str,
    buffers: &'a [wgpu::VertexBufferLayout<'a>],
    primitive: wgpu::PrimitiveState,
    depth_write: bool,
    blend: wgpu::BlendState,
}

fn build(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    format: wgpu::TextureFormat,
    spec: PipelineSpec<'_>,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(spec.label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: spec.module,
            entry_point: Some(spec.vs_entry),
            buffers: spec.buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: spec.primitive,
        depth_stencil: depth_state(spec.depth_write),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: spec.module,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(spec.blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

impl Pipelines {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(pack_core::SCENE_WGSL.into()),
        });
        let lines_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lines_shader"),
            source: wgpu::ShaderSource::Wgsl(pack_core::LINES_WGSL.into()),
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
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
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("frame_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let mesh = mesh_buffers();
        let lines = line_buffers();
        let triangles = wgpu::PrimitiveState {
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        };
        let line_list = wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            ..Default::default()
        };

        let solid = build(
            device,
            &layout,
            format,
            PipelineSpec {
                label: "solid_pipeline",
                module: &scene_shader,
                vs_entry: "vs_main",
                buffers: &mesh,
                primitive: triangles,
                depth_write: true,
                blend: wgpu::BlendState::REPLACE,
            },
        );
        let glass = build(
            device,
            &layout,
            format,
            PipelineSpec {
                label: "glass_pipeline",
                module: &scene_shader,
                vs_entry: "vs_main",
                buffers: &mesh,
                primitive: wgpu::PrimitiveState::default(),
                depth_write: false,
                blend: wgpu::BlendState::ALPHA_BLENDING,
            },
        );
        let edges = build(
            device,
            &layout,
            format,
            PipelineSpec {
                label: "edges_pipeline",
                module: &lines_shader,
                vs_entry: "vs_grouped",
                buffers: &lines,
                primitive: line_list,
                depth_write: true,
                blend: wgpu::BlendState::REPLACE,
            },
        );
        let grid = build(
            device,
            &layout,
            format,
            PipelineSpec {
                label: "grid_pipeline",
                module: &lines_shader,
                vs_entry: "vs_world",
                buffers: &lines,
                primitive: line_list,
                depth_write: true,
                blend: wgpu::BlendState::REPLACE,
            },
        );

        Self {
            bind_group_layout,
            solid,
            glass,
            edges,
            grid,
        }
    }
}
