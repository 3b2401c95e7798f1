use crate::pipelines::Pipelines;
use crate::targets::DepthTarget;
use crate::uniforms::{clear_color, FrameUniforms};
use pack_core::constants::{
    BACKGROUND_COLOR, CORE_RADIAL_SEGMENTS, GRID_CENTER_COLOR, GRID_DIVISIONS, GRID_LINE_COLOR,
    GRID_SIZE, GRID_Y, ROLL_RADIAL_SEGMENTS,
};
use pack_core::mesh::{ground_grid, unit_cube, unit_cylinder, MeshData};
use pack_core::{FrameView, InstanceRaw, PackScene};
use wgpu::util::DeviceExt;

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        log::debug!("[render] {}: {} triangles", label, mesh.triangle_count());
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }

    fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, instances: &InstanceBuffer) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_vertex_buffer(1, instances.buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..instances.count);
    }
}

struct InstanceBuffer {
    buffer: wgpu::Buffer,
    count: u32,
}

impl InstanceBuffer {
    // empty slices cannot be bound, so an empty list yields no buffer
    fn upload(device: &wgpu::Device, label: &str, instances: &[InstanceRaw]) -> Option<Self> {
        if instances.is_empty() {
            return None;
        }
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(instances),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Some(Self {
            buffer,
            count: instances.len() as u32,
        })
    }
}

/// GPU buffers for one materialized layout.
pub struct PackBuffers {
    rolls: Option<InstanceBuffer>,
    cores: Option<InstanceBuffer>,
    box_fill: Option<InstanceBuffer>,
    box_edges: wgpu::Buffer,
    edge_vertex_count: u32,
}

impl PackBuffers {
    pub fn roll_count(&self) -> u32 {
        self.rolls.as_ref().map_or(0, |b| b.count)
    }

    /// Free the GPU memory now rather than when the handles drop.
    pub fn destroy(self) {
        for instances in [self.rolls, self.cores, self.box_fill].into_iter().flatten() {
            instances.buffer.destroy();
        }
        self.box_edges.destroy();
    }
}

/// Static meshes, pipelines and per-frame uniforms for the pack preview.
pub struct SceneRenderer {
    format: wgpu::TextureFormat,
    pipelines: Pipelines,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    roll_mesh: GpuMesh,
    core_mesh: GpuMesh,
    cube_mesh: GpuMesh,
    grid: wgpu::Buffer,
    grid_vertex_count: u32,
    depth: DepthTarget,
    decode_gamma: f32,
    clear_color: wgpu::Color,
}

impl SceneRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, width: u32, height: u32) -> Self {
        let pipelines = Pipelines::new(device, format);
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &pipelines.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let grid_lines = ground_grid(
            GRID_SIZE,
            GRID_DIVISIONS,
            GRID_Y,
            GRID_CENTER_COLOR,
            GRID_LINE_COLOR,
        );
        let grid = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("grid_vb"),
            contents: bytemuck::cast_slice(&grid_lines),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let decode_gamma = if format.is_srgb() { 2.2 } else { 1.0 };
        log::info!("[render] target format {:?}", format);

        Self {
            format,
            pipelines,
            uniform_buffer,
            bind_group,
            roll_mesh: GpuMesh::upload(device, "roll_mesh", &unit_cylinder(ROLL_RADIAL_SEGMENTS)),
            core_mesh: GpuMesh::upload(device, "core_mesh", &unit_cylinder(CORE_RADIAL_SEGMENTS)),
            cube_mesh: GpuMesh::upload(device, "cube_mesh", &unit_cube()),
            grid,
            grid_vertex_count: grid_lines.len() as u32,
            depth: DepthTarget::new(device, width, height),
            decode_gamma,
            clear_color: clear_color(BACKGROUND_COLOR, decode_gamma),
        }
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    pub fn size(&self) -> (u32, u32) {
        (self.depth.width, self.depth.height)
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth.recreate(device, width, height);
    }

    pub fn materialize(&self, device: &wgpu::Device, scene: &PackScene) -> PackBuffers {
        let box_edges = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("box_edges_vb"),
            contents: bytemuck::cast_slice(&scene.box_edges),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let buffers = PackBuffers {
            rolls: InstanceBuffer::upload(device, "roll_instances", &scene.rolls),
            cores: InstanceBuffer::upload(device, "core_instances", &scene.cores),
            box_fill: InstanceBuffer::upload(
                device,
                "box_instance",
                std::slice::from_ref(&scene.box_fill),
            ),
            box_edges,
            edge_vertex_count: scene.box_edges.len() as u32,
        };
        log::debug!("[render] materialized {} rolls", buffers.roll_count());
        buffers
    }

    /// Record one full frame into `target`, which must match [`Self::size`].
    pub fn encode(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        resources: Option<&PackBuffers>,
        view: &FrameView,
    ) {
        let (width, height) = self.size();
        let uniforms = FrameUniforms::new(view, width as f32 / height as f32, self.decode_gamma);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("pack_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_bind_group(0, &self.bind_group, &[]);

        rpass.set_pipeline(&self.pipelines.grid);
        rpass.set_vertex_buffer(0, self.grid.slice(..));
        rpass.draw(0..self.grid_vertex_count, 0..1);

        let Some(pack) = resources else {
            return;
        };
        rpass.set_pipeline(&self.pipelines.solid);
        if let Some(rolls) = &pack.rolls {
            self.roll_mesh.draw(&mut rpass, rolls);
        }
        if let Some(cores) = &pack.cores {
            self.core_mesh.draw(&mut rpass, cores);
        }

        rpass.set_pipeline(&self.pipelines.edges);
        rpass.set_vertex_buffer(0, pack.box_edges.slice(..));
        rpass.draw(0..pack.edge_vertex_count, 0..1);

        if let Some(fill) = &pack.box_fill {
            rpass.set_pipeline(&self.pipelines.glass);
            self.cube_mesh.draw(&mut rpass, fill);
        }
    }
}
