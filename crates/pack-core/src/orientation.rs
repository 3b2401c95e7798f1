//! Presentation-only rotation of the whole pack.

use crate::params::parse_finite;
use glam::{EulerRot, Mat4, Quat};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PackOrientation {
    pub rot_x_deg: f32,
    pub rot_y_deg: f32,
}

impl PackOrientation {
    /// Read the two orientation sliders; unparsable values count as 0°.
    pub fn from_raw(rot_x: &str, rot_y: &str) -> Self {
        Self {
            rot_x_deg: parse_finite(rot_x).unwrap_or(0.0),
            rot_y_deg: parse_finite(rot_y).unwrap_or(0.0),
        }
    }

    /// Rotation applied X then Y, Z fixed at 0 (`Rx * Ry`).
    pub fn rotation(&self) -> Quat {
        apply_orientation(self.rot_x_deg, self.rot_y_deg)
    }

    /// Rigid transform of the pack group around its local origin.
    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.rotation())
    }
}

pub fn apply_orientation(rot_x_deg: f32, rot_y_deg: f32) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        rot_x_deg.to_radians(),
        rot_y_deg.to_radians(),
        0.0,
    )
}
