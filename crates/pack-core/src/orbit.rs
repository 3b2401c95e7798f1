//! Pointer-driven orbit, pan and zoom on top of [`CameraControls`].
//!
//! The controller edits the same values the camera sliders hold, so the
//! sliders, readouts and pose never disagree.

use crate::camera::CameraControls;
use crate::constants::{
    MAX_DISTANCE, MIN_DISTANCE, ORBIT_DAMPING_FACTOR, ORBIT_PAN_PER_PX,
    ORBIT_REST_VELOCITY, ORBIT_ROTATE_DEG_PER_PX, ORBIT_ZOOM_PER_WHEEL_UNIT,
};

const MAX_ORBIT_ELEVATION_DEG: f32 = 89.0;
const FRAME_RATE_REF: f32 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

#[derive(Clone, Copy, Debug, Default)]
struct DragState {
    mode: Option<DragMode>,
    last_x: f32,
    last_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct OrbitController {
    drag: DragState,
    // degrees per 60 Hz frame
    velocity_azimuth: f32,
    velocity_elevation: f32,
}

impl OrbitController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.mode.is_some()
    }

    pub fn is_gliding(&self) -> bool {
        !self.is_dragging() && (self.velocity_azimuth != 0.0 || self.velocity_elevation != 0.0)
    }

    pub fn begin(&mut self, mode: DragMode, x: f32, y: f32) {
        self.drag = DragState {
            mode: Some(mode),
            last_x: x,
            last_y: y,
        };
        self.velocity_azimuth = 0.0;
        self.velocity_elevation = 0.0;
    }

    /// Apply pointer motion; returns true when `controls` changed.
    pub fn drag_to(&mut self, x: f32, y: f32, controls: &mut CameraControls) -> bool {
        let Some(mode) = self.drag.mode else {
            return false;
        };
        let dx = x - self.drag.last_x;
        let dy = y - self.drag.last_y;
        self.drag.last_x = x;
        self.drag.last_y = y;
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        match mode {
            DragMode::Rotate => {
                let d_az = -dx * ORBIT_ROTATE_DEG_PER_PX;
                let d_el = dy * ORBIT_ROTATE_DEG_PER_PX;
                rotate_camera(controls, d_az, d_el);
                self.velocity_azimuth = d_az;
                self.velocity_elevation = d_el;
            }
            DragMode::Pan => {
                let k = ORBIT_PAN_PER_PX * controls.distance;
                controls.pan_x -= dx * k;
                controls.pan_y += dy * k;
            }
        }
        true
    }

    pub fn end(&mut self) {
        if self.drag.mode != Some(DragMode::Rotate) {
            self.velocity_azimuth = 0.0;
            self.velocity_elevation = 0.0;
        }
        self.drag.mode = None;
    }

    /// Zoom by wheel delta (positive = away). Returns true when changed.
    pub fn wheel(&mut self, delta_y: f32, controls: &mut CameraControls) -> bool {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return false;
        }
        let factor = (delta_y * ORBIT_ZOOM_PER_WHEEL_UNIT).exp();
        let next = (controls.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
        let changed = next != controls.distance;
        controls.distance = next;
        changed
    }

    /// Advance the post-release glide by `dt_sec`. Returns true when changed.
    ///
    /// Velocity also decays while a drag is held, so a pointer that stops
    /// before release leaves nothing to glide.
    pub fn step(&mut self, dt_sec: f32, controls: &mut CameraControls) -> bool {
        let moving = self.velocity_azimuth != 0.0 || self.velocity_elevation != 0.0;
        if !moving || dt_sec <= 0.0 {
            return false;
        }
        let frames = dt_sec * FRAME_RATE_REF;
        let keep = (1.0 - ORBIT_DAMPING_FACTOR).powf(frames);
        self.velocity_azimuth *= keep;
        self.velocity_elevation *= keep;
        if self.velocity_azimuth.abs() < ORBIT_REST_VELOCITY
            && self.velocity_elevation.abs() < ORBIT_REST_VELOCITY
        {
            self.velocity_azimuth = 0.0;
            self.velocity_elevation = 0.0;
            return false;
        }
        if self.is_dragging() {
            return false;
        }
        rotate_camera(
            controls,
            self.velocity_azimuth * frames,
            self.velocity_elevation * frames,
        );
        true
    }
}

/// Orbit by the given angles, wrapping azimuth and clamping elevation.
pub fn rotate_camera(controls: &mut CameraControls, d_azimuth: f32, d_elevation: f32) {
    let mut az = controls.azimuth_deg + d_azimuth;
    // keep azimuth in (-180, 180] so slider readouts stay readable
    if az > 180.0 {
        az -= 360.0;
    } else if az <= -180.0 {
        az += 360.0;
    }
    controls.azimuth_deg = az;
    controls.elevation_deg = (controls.elevation_deg + d_elevation)
        .clamp(-MAX_ORBIT_ELEVATION_DEG, MAX_ORBIT_ELEVATION_DEG);
}
