use glam::Vec3;
use pack_core::{Camera, FrameView};

/// Mirror of the `Frame` struct declared in both WGSL shaders.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub group: [[f32; 4]; 4],
    pub eye: [f32; 4],
    pub light_dir: [f32; 4],
    pub sky: [f32; 4],
    pub ground: [f32; 4],
}

impl FrameUniforms {
    /// `decode_gamma` is 2.2 on sRGB targets and 1.0 otherwise.
    pub fn new(view: &FrameView, aspect: f32, decode_gamma: f32) -> Self {
        let camera = Camera::from_pose(&view.pose, aspect);
        let light = &view.lighting;
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            group: view.group.to_cols_array_2d(),
            eye: camera.eye.extend(decode_gamma).to_array(),
            light_dir: light.dir_to_light.extend(light.dir_intensity).to_array(),
            sky: light.sky_color.extend(light.hemi_intensity).to_array(),
            ground: light.ground_color.extend(light.shininess).to_array(),
        }
    }
}

/// Clear colour for a target, undoing the sRGB encode the target applies.
pub fn clear_color(srgb: [f32; 3], decode_gamma: f32) -> wgpu::Color {
    let c = Vec3::from(srgb).powf(decode_gamma);
    wgpu::Color {
        r: c.x as f64,
        g: c.y as f64,
        b: c.z as f64,
        a: 1.0,
    }
}
