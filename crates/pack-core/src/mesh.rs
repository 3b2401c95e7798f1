//! CPU-side geometry for the preview: unit primitives scaled per instance.

use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Closed cylinder of radius 1 and height 1, axis along Y, centred on the origin.
///
/// Side, top and bottom caps use separate vertices so normals stay sharp at
/// the rims.
pub fn unit_cylinder(radial_segments: u32) -> MeshData {
    let segments = radial_segments.max(3);
    let mut mesh = MeshData::default();
    let ring = |i: u32| {
        let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
        theta.sin_cos()
    };

    // side
    for i in 0..=segments {
        let (s, c) = ring(i);
        let normal = [s, 0.0, c];
        mesh.vertices.push(Vertex {
            position: [s, 0.5, c],
            normal,
        });
        mesh.vertices.push(Vertex {
            position: [s, -0.5, c],
            normal,
        });
    }
    for i in 0..segments {
        let top = i * 2;
        let bottom = top + 1;
        let next_top = top + 2;
        let next_bottom = top + 3;
        mesh.indices
            .extend_from_slice(&[top, bottom, next_bottom, top, next_bottom, next_top]);
    }

    // caps
    for (y, ny) in [(0.5_f32, 1.0_f32), (-0.5, -1.0)] {
        let center = mesh.vertices.len() as u32;
        mesh.vertices.push(Vertex {
            position: [0.0, y, 0.0],
            normal: [0.0, ny, 0.0],
        });
        for i in 0..=segments {
            let (s, c) = ring(i);
            mesh.vertices.push(Vertex {
                position: [s, y, c],
                normal: [0.0, ny, 0.0],
            });
        }
        for i in 0..segments {
            let a = center + 1 + i;
            let b = a + 1;
            if ny > 0.0 {
                mesh.indices.extend_from_slice(&[center, a, b]);
            } else {
                mesh.indices.extend_from_slice(&[center, b, a]);
            }
        }
    }
    mesh
}

// (normal, u, v) with u × v == normal so (−u−v, +u−v, +u+v, −u+v) winds CCW from outside
const CUBE_FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

/// Cube with edge length 1 centred on the origin, four vertices per face.
pub fn unit_cube() -> MeshData {
    let mut mesh = MeshData::default();
    for (n, u, v) in CUBE_FACES {
        let (n, u, v) = (Vec3::from(n), Vec3::from(u), Vec3::from(v));
        let c = n * 0.5;
        let base = mesh.vertices.len() as u32;
        for corner in [-u - v, u - v, u + v, -u + v] {
            mesh.vertices.push(Vertex {
                position: (c + corner * 0.5).to_array(),
                normal: n.to_array(),
            });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// The 12 edges of the unit cube as a line list (24 points).
pub fn unit_cube_edges() -> Vec<Vec3> {
    let corner = |i: u32| {
        Vec3::new(
            if i & 1 == 0 { -0.5 } else { 0.5 },
            if i & 2 == 0 { -0.5 } else { 0.5 },
            if i & 4 == 0 { -0.5 } else { 0.5 },
        )
    };
    let mut points = Vec::with_capacity(24);
    for a in 0..8u32 {
        for bit in [1u32, 2, 4] {
            if a & bit == 0 {
                points.push(corner(a));
                points.push(corner(a | bit));
            }
        }
    }
    points
}

/// Square ground grid on the XZ plane at height `y`, as a coloured line list.
///
/// The two lines through the origin use `center_color`, the rest `line_color`.
pub fn ground_grid(
    size: f32,
    divisions: u32,
    y: f32,
    center_color: [f32; 4],
    line_color: [f32; 4],
) -> Vec<LineVertex> {
    let divisions = divisions.max(1);
    let half = size / 2.0;
    let step = size / divisions as f32;
    let mut lines = Vec::with_capacity((divisions as usize + 1) * 4);
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let color = if i * 2 == divisions {
            center_color
        } else {
            line_color
        };
        for (a, b) in [
            ([-half, y, k], [half, y, k]),
            ([k, y, -half], [k, y, half]),
        ] {
            lines.push(LineVertex { position: a, color });
            lines.push(LineVertex { position: b, color });
        }
    }
    lines
}
