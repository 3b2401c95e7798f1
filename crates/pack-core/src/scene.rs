//! Drawable description of a built layout, independent of any GPU API.
//!
//! Instances are expressed in the pack group's local space; the orientation
//! rotation is applied per frame so turning the pack never re-uploads them.

use crate::camera::CameraPose;
use crate::constants::{
    BOX_EDGE_COLOR, BOX_FILL_COLOR, CORE_COLOR, CORE_HEIGHT_EXTRA, DIR_LIGHT_INTENSITY,
    DIR_LIGHT_POSITION, HEMI_GROUND_COLOR, HEMI_INTENSITY, HEMI_SKY_COLOR, ROLL_COLOR,
    SPECULAR_SHININESS,
};
use crate::layout::PackLayout;
use crate::mesh::{unit_cube_edges, LineVertex};
use glam::{Mat3, Mat4, Vec3};

/// Per-instance data as laid out in the instance vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    // inverse-transpose of the model's upper 3x3, columns padded to vec4
    pub normal: [[f32; 4]; 3],
    pub color: [f32; 4],
}

impl InstanceRaw {
    pub fn new(model: Mat4, color: [f32; 4]) -> Self {
        let n = normal_matrix(model);
        Self {
            model: model.to_cols_array_2d(),
            normal: [
                n.x_axis.extend(0.0).to_array(),
                n.y_axis.extend(0.0).to_array(),
                n.z_axis.extend(0.0).to_array(),
            ],
            color,
        }
    }
}

/// Matrix that maps object-space normals to world space.
///
/// Degenerate (zero-scale) models fall back to identity so shading never
/// sees NaNs.
pub fn normal_matrix(model: Mat4) -> Mat3 {
    let m = Mat3::from_mat4(model);
    if m.determinant().abs() <= f32::EPSILON {
        Mat3::IDENTITY
    } else {
        m.inverse().transpose()
    }
}

/// Scale/translate a unit cylinder into a roll-sized one at `center`.
pub fn cylinder_model(center: Vec3, radius: f32, height: f32) -> Mat4 {
    Mat4::from_translation(center) * Mat4::from_scale(Vec3::new(radius, height, radius))
}

#[derive(Clone, Debug)]
pub struct PackScene {
    pub rolls: Vec<InstanceRaw>,
    pub cores: Vec<InstanceRaw>,
    pub box_fill: InstanceRaw,
    pub box_edges: Vec<LineVertex>,
}

impl PackScene {
    pub fn from_layout(layout: &PackLayout) -> Self {
        let params = &layout.params;
        let roll_radius = params.roll_diameter / 2.0;
        let core_radius = params.core_diameter / 2.0;
        let core_height = params.roll_height + CORE_HEIGHT_EXTRA;

        let rolls = layout
            .centers()
            .map(|c| InstanceRaw::new(cylinder_model(c, roll_radius, params.roll_height), ROLL_COLOR))
            .collect();
        let cores = layout
            .centers()
            .map(|c| InstanceRaw::new(cylinder_model(c, core_radius, core_height), CORE_COLOR))
            .collect();

        let envelope = layout.envelope;
        let box_model = Mat4::from_translation(envelope.center()) * Mat4::from_scale(envelope.size);
        let box_edges = unit_cube_edges()
            .into_iter()
            .map(|p| LineVertex {
                position: box_model.transform_point3(p).to_array(),
                color: BOX_EDGE_COLOR,
            })
            .collect();

        Self {
            rolls,
            cores,
            box_fill: InstanceRaw::new(box_model, BOX_FILL_COLOR),
            box_edges,
        }
    }

    pub fn instance_count(&self) -> usize {
        self.rolls.len() + self.cores.len() + 1
    }
}

/// Hemisphere + directional lighting, Phong-style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub sky_color: Vec3,
    pub ground_color: Vec3,
    pub hemi_intensity: f32,
    /// Unit vector pointing from the scene towards the light.
    pub dir_to_light: Vec3,
    pub dir_intensity: f32,
    pub shininess: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            sky_color: Vec3::from(HEMI_SKY_COLOR),
            ground_color: Vec3::from(HEMI_GROUND_COLOR),
            hemi_intensity: HEMI_INTENSITY,
            dir_to_light: Vec3::from(DIR_LIGHT_POSITION).normalize(),
            dir_intensity: DIR_LIGHT_INTENSITY,
            shininess: SPECULAR_SHININESS,
        }
    }
}

/// Everything a backend needs to draw one frame besides the materialized layout.
#[derive(Clone, Copy, Debug)]
pub struct FrameView {
    pub pose: CameraPose,
    pub group: Mat4,
    pub lighting: Lighting,
}
