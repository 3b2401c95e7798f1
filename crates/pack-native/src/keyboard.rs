//! Keyboard-driven stand-in for the web form.
//!
//! | keys      | action                         |
//! |-----------|--------------------------------|
//! | R / F     | rows ±1                        |
//! | T / G     | rolls per row ±1               |
//! | Y / H     | layers ±1                      |
//! | Enter     | generate                       |
//! | arrows    | orbit the camera               |
//! | + / -     | zoom                           |
//! | W A S D   | pan                            |
//! | Q / E     | pack rotation about X          |
//! | Z / X     | pack rotation about Y          |
//! | P         | export PNG                     |
//! | Esc       | quit                           |

use pack_core::{
    rotate_camera, CameraControls, ControlSignal, ControlsBinding, MetricsReadout,
    PackOrientation, PackParameters, ParamField, PointerInput, RawPackInput,
};
use winit::keyboard::KeyCode;

const ORBIT_STEP_DEG: f32 = 5.0;
const ORIENTATION_STEP_DEG: f32 = 15.0;
const ZOOM_WHEEL_STEP: f32 = 120.0; // same path as one mouse wheel notch
const PAN_STEP_FRACTION: f32 = 0.02; // of the camera distance
const MIN_COUNT: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    Count { field: ParamField, delta: f32 },
    Generate,
    Orbit { d_azimuth: f32, d_elevation: f32 },
    Zoom { wheel: f32 },
    Pan { dx: f32, dy: f32 },
    Orient { d_rot_x: f32, d_rot_y: f32 },
    Export,
    Quit,
}

pub fn action_for_key(key: KeyCode) -> Option<KeyAction> {
    use KeyAction::*;
    let count = |field, delta| Some(Count { field, delta });
    match key {
        KeyCode::KeyR => count(ParamField::Rows, 1.0),
        KeyCode::KeyF => count(ParamField::Rows, -1.0),
        KeyCode::KeyT => count(ParamField::RollsPerRow, 1.0),
        KeyCode::KeyG => count(ParamField::RollsPerRow, -1.0),
        KeyCode::KeyY => count(ParamField::Layers, 1.0),
        KeyCode::KeyH => count(ParamField::Layers, -1.0),
        KeyCode::Enter | KeyCode::NumpadEnter => Some(Generate),
        KeyCode::ArrowLeft => Some(Orbit {
            d_azimuth: -ORBIT_STEP_DEG,
            d_elevation: 0.0,
        }),
        KeyCode::ArrowRight => Some(Orbit {
            d_azimuth: ORBIT_STEP_DEG,
            d_elevation: 0.0,
        }),
        KeyCode::ArrowUp => Some(Orbit {
            d_azimuth: 0.0,
            d_elevation: ORBIT_STEP_DEG,
        }),
        KeyCode::ArrowDown => Some(Orbit {
            d_azimuth: 0.0,
            d_elevation: -ORBIT_STEP_DEG,
        }),
        KeyCode::Equal | KeyCode::NumpadAdd => Some(Zoom {
            wheel: -ZOOM_WHEEL_STEP,
        }),
        KeyCode::Minus | KeyCode::NumpadSubtract => Some(Zoom {
            wheel: ZOOM_WHEEL_STEP,
        }),
        KeyCode::KeyW => Some(Pan { dx: 0.0, dy: 1.0 }),
        KeyCode::KeyS => Some(Pan { dx: 0.0, dy: -1.0 }),
        KeyCode::KeyA => Some(Pan { dx: -1.0, dy: 0.0 }),
        KeyCode::KeyD => Some(Pan { dx: 1.0, dy: 0.0 }),
        KeyCode::KeyQ => Some(Orient {
            d_rot_x: -ORIENTATION_STEP_DEG,
            d_rot_y: 0.0,
        }),
        KeyCode::KeyE => Some(Orient {
            d_rot_x: ORIENTATION_STEP_DEG,
            d_rot_y: 0.0,
        }),
        KeyCode::KeyZ => Some(Orient {
            d_rot_x: 0.0,
            d_rot_y: -ORIENTATION_STEP_DEG,
        }),
        KeyCode::KeyX => Some(Orient {
            d_rot_x: 0.0,
            d_rot_y: ORIENTATION_STEP_DEG,
        }),
        KeyCode::KeyP => Some(Export),
        KeyCode::Escape => Some(Quit),
        _ => None,
    }
}

/// Control state edited from the keyboard; readouts end up in the window title.
#[derive(Clone, Debug, Default)]
pub struct KeyboardControls {
    params: PackParameters,
    orientation: PackOrientation,
    camera: CameraControls,
    metrics: MetricsReadout,
    title_dirty: bool,
}

impl KeyboardControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update local state for `action` and say what the viewer should do.
    ///
    /// `Quit` is left to the caller and yields `None`.
    pub fn apply(&mut self, action: KeyAction) -> Option<ControlSignal> {
        match action {
            KeyAction::Count { field, delta } => {
                let count = match field {
                    ParamField::Rows => &mut self.params.rows,
                    ParamField::RollsPerRow => &mut self.params.rolls_per_row,
                    ParamField::Layers => &mut self.params.layers,
                    _ => return None,
                };
                *count = (count.round() + delta).max(MIN_COUNT);
                Some(ControlSignal::ParameterChanged)
            }
            KeyAction::Generate => Some(ControlSignal::GenerateRequested),
            KeyAction::Orbit {
                d_azimuth,
                d_elevation,
            } => {
                rotate_camera(&mut self.camera, d_azimuth, d_elevation);
                Some(ControlSignal::CameraChanged)
            }
            KeyAction::Zoom { wheel } => Some(ControlSignal::Pointer(PointerInput::Wheel {
                delta_y: wheel,
            })),
            KeyAction::Pan { dx, dy } => {
                let step = PAN_STEP_FRACTION * self.camera.distance;
                self.camera.pan_x += dx * step;
                self.camera.pan_y += dy * step;
                Some(ControlSignal::CameraChanged)
            }
            KeyAction::Orient { d_rot_x, d_rot_y } => {
                self.orientation.rot_x_deg = wrap_degrees(self.orientation.rot_x_deg + d_rot_x);
                self.orientation.rot_y_deg = wrap_degrees(self.orientation.rot_y_deg + d_rot_y);
                Some(ControlSignal::OrientationChanged)
            }
            KeyAction::Export => Some(ControlSignal::ExportRequested),
            KeyAction::Quit => None,
        }
    }

    /// Window title for the current readout, once per change.
    pub fn take_title(&mut self) -> Option<String> {
        if !self.title_dirty {
            return None;
        }
        self.title_dirty = false;
        Some(self.title())
    }

    pub fn title(&self) -> String {
        if self.metrics.is_error() {
            format!("Roll Pack - {}", self.metrics.total_rolls)
        } else {
            format!(
                "Roll Pack - {} - {}",
                self.metrics.total_rolls, self.metrics.footprint
            )
        }
    }
}

// matches the -180..180 range of the web sliders
fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

impl ControlsBinding for KeyboardControls {
    fn read_parameters(&self) -> RawPackInput {
        RawPackInput::from(&self.params)
    }

    fn read_orientation(&self) -> PackOrientation {
        self.orientation
    }

    fn read_camera(&self) -> CameraControls {
        self.camera
    }

    fn show_metrics(&mut self, readout: &MetricsReadout) {
        if self.metrics != *readout {
            self.metrics = readout.clone();
            self.title_dirty = true;
        }
    }

    fn show_orientation(&mut self, orientation: &PackOrientation) {
        log::debug!(
            "[orientation] x {} y {}",
            pack_core::angle_readout(orientation.rot_x_deg),
            pack_core::angle_readout(orientation.rot_y_deg)
        );
    }

    fn show_camera(&mut self, _camera: &CameraControls) {}

    fn sync_camera_inputs(&mut self, camera: &CameraControls) {
        self.camera = *camera;
    }
}
