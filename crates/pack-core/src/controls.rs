//! The seam between a front-end's input widgets and the viewer.

use crate::camera::CameraControls;
use crate::orbit::DragMode;
use crate::orientation::PackOrientation;
use crate::params::RawPackInput;
use crate::readout::MetricsReadout;

/// One user intent, queued by a front-end and consumed by the viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlSignal {
    ParameterChanged,
    GenerateRequested,
    OrientationChanged,
    CameraChanged,
    ExportRequested,
    Pointer(PointerInput),
}

/// Pointer gesture on the preview surface, in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down { mode: DragMode, x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Wheel { delta_y: f32 },
}

/// Read access to the control surface plus write access to its readouts.
///
/// Implemented by the DOM form on the web and by keyboard state natively.
pub trait ControlsBinding {
    fn read_parameters(&self) -> RawPackInput;
    fn read_orientation(&self) -> PackOrientation;
    fn read_camera(&self) -> CameraControls;

    fn show_metrics(&mut self, readout: &MetricsReadout);
    fn show_orientation(&mut self, orientation: &PackOrientation);
    fn show_camera(&mut self, camera: &CameraControls);

    /// Move the camera inputs themselves after an orbit gesture changed the
    /// values behind them.
    fn sync_camera_inputs(&mut self, _camera: &CameraControls) {}
}
