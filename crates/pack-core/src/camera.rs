//! Slider-driven camera placement.
//!
//! The camera sits on a sphere around a (panned) look-at point. Azimuth turns
//! around the vertical axis, elevation tilts up/down, both in degrees.

use crate::constants::{
    DEFAULT_CAMERA_DISTANCE, FOVY_DEG, INITIAL_AZIMUTH_DEG, INITIAL_DISTANCE,
    INITIAL_ELEVATION_DEG, ZFAR, ZNEAR,
};
use crate::params::parse_finite;
use glam::{Mat4, Vec3};

/// Raw text of the five camera sliders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawCameraInput {
    pub azimuth_deg: String,
    pub elevation_deg: String,
    pub distance: String,
    pub pan_x: String,
    pub pan_y: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraControls {
    pub azimuth_deg: f32,
    pub elevation_deg: f32,
    pub distance: f32,
    pub pan_x: f32,
    pub pan_y: f32,
}

impl Default for CameraControls {
    fn default() -> Self {
        Self {
            azimuth_deg: INITIAL_AZIMUTH_DEG,
            elevation_deg: INITIAL_ELEVATION_DEG,
            distance: INITIAL_DISTANCE,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl CameraControls {
    /// Read slider text. Unparsable values fall back to 0, distance to 400
    /// when it is unparsable or not positive.
    pub fn from_raw(raw: &RawCameraInput) -> Self {
        let distance = parse_finite(&raw.distance)
            .filter(|d| *d > 0.0)
            .unwrap_or(DEFAULT_CAMERA_DISTANCE);
        Self {
            azimuth_deg: parse_finite(&raw.azimuth_deg).unwrap_or(0.0),
            elevation_deg: parse_finite(&raw.elevation_deg).unwrap_or(0.0),
            distance,
            pan_x: parse_finite(&raw.pan_x).unwrap_or(0.0),
            pan_y: parse_finite(&raw.pan_y).unwrap_or(0.0),
        }
    }
}

/// Camera placement in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
}

pub fn compute_camera_pose(controls: &CameraControls, target_center: Vec3) -> CameraPose {
    let look_at = target_center + Vec3::new(controls.pan_x, controls.pan_y, 0.0);
    let (sin_t, cos_t) = controls.azimuth_deg.to_radians().sin_cos();
    let (sin_p, cos_p) = controls.elevation_deg.to_radians().sin_cos();
    let d = controls.distance;
    let offset = Vec3::new(d * cos_p * sin_t, d * sin_p, d * cos_p * cos_t);
    // d(offset)/d(elevation); stays orthogonal to the view direction overhead
    let up = Vec3::new(-sin_p * sin_t, cos_p, -sin_p * cos_t);
    CameraPose {
        position: look_at + offset,
        look_at,
        up,
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_pose(pose: &CameraPose, aspect: f32) -> Self {
        Self {
            eye: pose.position,
            target: pose.look_at,
            up: pose.up,
            aspect: if aspect.is_finite() && aspect > 0.0 {
                aspect
            } else {
                1.0
            },
            fovy_radians: FOVY_DEG.to_radians(),
            znear: ZNEAR,
            zfar: ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
