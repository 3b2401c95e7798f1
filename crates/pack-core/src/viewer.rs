//! Owns everything the preview needs between frames and applies control
//! signals to it.
//!
//! A `Viewer` holds at most one materialized layout at a time. Rebuilding
//! installs the new resources first and releases the old ones immediately
//! after, so two generations are never both alive past a single call.

use crate::camera::{compute_camera_pose, CameraControls, CameraPose};
use crate::constants::{EXPORT_FILE_NAME, MAX_RENDERED_ROLLS};
use crate::controls::{ControlSignal, ControlsBinding, PointerInput};
use crate::layout::{build_layout, compute_metrics, PackLayout};
use crate::orbit::OrbitController;
use crate::orientation::PackOrientation;
use crate::params::{validate, RawPackInput, ValidationError};
use crate::readout::{preview_readout, MetricsReadout};
use crate::scene::{FrameView, Lighting, PackScene};
use glam::Vec3;
use std::fmt;
use thiserror::Error;

/// GPU (or fake) side of the preview.
pub trait RenderBackend {
    /// Buffers holding one materialized layout.
    type Resources;
    type Error: fmt::Debug + fmt::Display;

    fn materialize(&mut self, scene: &PackScene) -> Result<Self::Resources, Self::Error>;
    fn release(&mut self, resources: Self::Resources);
    fn render_frame(
        &mut self,
        resources: Option<&Self::Resources>,
        view: &FrameView,
    ) -> Result<(), Self::Error>;
    /// Save the frame most recently rendered as a PNG named `file_name`.
    fn export_still(
        &mut self,
        resources: Option<&Self::Resources>,
        view: &FrameView,
        file_name: &str,
    ) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum RebuildError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{total} rolls is more than the preview can draw (limit {limit})")]
    TooManyRolls { total: u64, limit: u64 },
    #[error("could not upload the pack: {0}")]
    Backend(String),
}

/// Mutable state shared by rebuild, camera and orientation handling.
#[derive(Clone, Debug)]
pub struct ViewerState {
    pub layout: Option<PackLayout>,
    pub readout: MetricsReadout,
    pub orientation: PackOrientation,
    pub camera: CameraControls,
    pub target_center: Vec3,
    pub pose: CameraPose,
    pub lighting: Lighting,
    pub export_pending: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        let camera = CameraControls::default();
        Self {
            layout: None,
            readout: MetricsReadout::default(),
            orientation: PackOrientation::default(),
            camera,
            target_center: Vec3::ZERO,
            pose: compute_camera_pose(&camera, Vec3::ZERO),
            lighting: Lighting::default(),
            export_pending: false,
        }
    }
}

impl ViewerState {
    pub fn frame_view(&self) -> FrameView {
        FrameView {
            pose: self.pose,
            group: self.orientation.group_matrix(),
            lighting: self.lighting,
        }
    }

    fn refresh_pose(&mut self) {
        self.pose = compute_camera_pose(&self.camera, self.target_center);
    }
}

pub struct Viewer<B: RenderBackend> {
    backend: B,
    state: ViewerState,
    resources: Option<B::Resources>,
    orbit: OrbitController,
    generation: u64,
    running: bool,
}

impl<B: RenderBackend> Viewer<B> {
    /// Read the initial controls, build the first pack and place the camera.
    pub fn init(backend: B, controls: &mut impl ControlsBinding) -> Self {
        let mut viewer = Self {
            backend,
            state: ViewerState::default(),
            resources: None,
            orbit: OrbitController::new(),
            generation: 0,
            running: true,
        };
        viewer.state.orientation = controls.read_orientation();
        viewer.state.camera = controls.read_camera();
        controls.show_orientation(&viewer.state.orientation);
        controls.show_camera(&viewer.state.camera);
        viewer.generate(controls);
        viewer
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn resources(&self) -> Option<&B::Resources> {
        self.resources.as_ref()
    }

    /// Number of successful rebuilds so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply one signal. Errors are reported through the readouts and the log.
    pub fn handle(&mut self, signal: ControlSignal, controls: &mut impl ControlsBinding) {
        if !self.running {
            return;
        }
        match signal {
            ControlSignal::ParameterChanged => {
                self.state.readout = preview_readout(&controls.read_parameters());
                controls.show_metrics(&self.state.readout);
            }
            ControlSignal::GenerateRequested => self.generate(controls),
            ControlSignal::OrientationChanged => {
                self.state.orientation = controls.read_orientation();
                log::debug!("[orientation] {:?}", self.state.orientation);
                controls.show_orientation(&self.state.orientation);
            }
            ControlSignal::CameraChanged => {
                self.set_camera(controls.read_camera());
                log::debug!("[camera] {:?}", self.state.camera);
                controls.show_camera(&self.state.camera);
            }
            ControlSignal::ExportRequested => {
                log::info!("[export] queued {}", EXPORT_FILE_NAME);
                self.state.export_pending = true;
            }
            ControlSignal::Pointer(input) => {
                if self.pointer(input) {
                    controls.sync_camera_inputs(&self.state.camera);
                    controls.show_camera(&self.state.camera);
                }
            }
        }
    }

    fn generate(&mut self, controls: &mut impl ControlsBinding) {
        self.state.orientation = controls.read_orientation();
        let raw = controls.read_parameters();
        if let Err(e) = self.rebuild(&raw) {
            log::warn!("[rebuild] {}", e);
        }
        controls.show_metrics(&self.state.readout);
    }

    /// Validate `raw`, lay the pack out and swap in freshly uploaded resources.
    ///
    /// On any error the previous layout and resources stay in place.
    pub fn rebuild(&mut self, raw: &RawPackInput) -> Result<&PackLayout, RebuildError> {
        let params = match validate(raw) {
            Ok(p) => p,
            Err(e) => {
                self.state.readout = MetricsReadout::from_error(&e);
                return Err(e.into());
            }
        };
        let metrics = compute_metrics(&params);
        self.state.readout = MetricsReadout::from_metrics(&metrics);
        let total = metrics.total_rolls;
        if total > MAX_RENDERED_ROLLS {
            return Err(RebuildError::TooManyRolls {
                total,
                limit: MAX_RENDERED_ROLLS,
            });
        }

        let layout = build_layout(&params);
        let scene = PackScene::from_layout(&layout);
        let fresh = self
            .backend
            .materialize(&scene)
            .map_err(|e| RebuildError::Backend(e.to_string()))?;
        if let Some(old) = self.resources.replace(fresh) {
            self.backend.release(old);
        }
        self.generation += 1;
        log::info!(
            "[rebuild] {} (generation {}, {} instances)",
            self.state.readout.total_rolls,
            self.generation,
            scene.instance_count()
        );
        self.state.target_center = layout.metrics.target_center();
        self.state.refresh_pose();
        Ok(self.state.layout.insert(layout))
    }

    pub fn set_camera(&mut self, camera: CameraControls) {
        self.state.camera = camera;
        self.state.refresh_pose();
    }

    /// Feed a pointer gesture to the orbit controller. Returns true when the
    /// camera moved.
    pub fn pointer(&mut self, input: PointerInput) -> bool {
        let camera = &mut self.state.camera;
        let changed = match input {
            PointerInput::Down { mode, x, y } => {
                self.orbit.begin(mode, x, y);
                false
            }
            PointerInput::Move { x, y } => self.orbit.drag_to(x, y, camera),
            PointerInput::Up => {
                self.orbit.end();
                false
            }
            PointerInput::Wheel { delta_y } => self.orbit.wheel(delta_y, camera),
        };
        if changed {
            self.state.refresh_pose();
        }
        changed
    }

    /// Per-frame work: orbit glide, draw, then any pending export.
    pub fn frame(&mut self, dt_sec: f32, controls: &mut impl ControlsBinding) -> Result<(), B::Error> {
        if !self.running {
            return Ok(());
        }
        if self.orbit.step(dt_sec, &mut self.state.camera) {
            self.state.refresh_pose();
            controls.sync_camera_inputs(&self.state.camera);
            controls.show_camera(&self.state.camera);
        }

        let view = self.state.frame_view();
        self.backend.render_frame(self.resources.as_ref(), &view)?;

        if self.state.export_pending {
            self.state.export_pending = false;
            match self
                .backend
                .export_still(self.resources.as_ref(), &view, EXPORT_FILE_NAME)
            {
                Ok(()) => log::info!("[export] saved {}", EXPORT_FILE_NAME),
                Err(e) => log::error!("[export] failed: {}", e),
            }
        }
        Ok(())
    }

    /// Release the live resources and stop rendering.
    pub fn teardown(&mut self) {
        if let Some(old) = self.resources.take() {
            self.backend.release(old);
        }
        self.state.layout = None;
        self.running = false;
        log::info!("[viewer] torn down after {} rebuilds", self.generation);
    }
}
