//! The HTML form as a [`ControlsBinding`].

use crate::constants::{
    CAMERA_SLIDERS, CAM_ANGLE_X, CAM_ANGLE_Y, CAM_DISTANCE, CAM_PAN_X, CAM_PAN_Y, FOOTPRINT_ID,
    ORIENTATION_SLIDERS, PACK_DIMENSIONS_ID, PACK_ROT_X, PACK_ROT_Y, PARAM_INPUT_IDS,
    TOTAL_ROLLS_ID,
};
use crate::dom::element_by_id;
use crate::input::slider_text;
use fnv::FnvHashMap;
use pack_core::{
    angle_readout, whole_readout, CameraControls, ControlsBinding, MetricsReadout, PackOrientation,
    ParamField, RawCameraInput, RawPackInput,
};
use web_sys as web;

pub struct DomControls {
    inputs: FnvHashMap<&'static str, web::HtmlInputElement>,
    outputs: FnvHashMap<&'static str, web::HtmlElement>,
}

impl DomControls {
    /// Resolve every form element up front so a broken page fails at startup.
    pub fn bind(document: &web::Document) -> anyhow::Result<Self> {
        let mut inputs = FnvHashMap::default();
        let mut outputs = FnvHashMap::default();
        for id in PARAM_INPUT_IDS {
            inputs.insert(id, element_by_id(document, id)?);
        }
        for (slider, readout) in ORIENTATION_SLIDERS.into_iter().chain(CAMERA_SLIDERS) {
            inputs.insert(slider, element_by_id(document, slider)?);
            outputs.insert(readout, element_by_id(document, readout)?);
        }
        for id in [TOTAL_ROLLS_ID, PACK_DIMENSIONS_ID, FOOTPRINT_ID] {
            outputs.insert(id, element_by_id(document, id)?);
        }
        Ok(Self { inputs, outputs })
    }

    fn value(&self, id: &str) -> String {
        self.inputs.get(id).map(|el| el.value()).unwrap_or_default()
    }

    fn set_value(&self, id: &str, value: f32) {
        if let Some(el) = self.inputs.get(id) {
            el.set_value(&slider_text(value));
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.outputs.get(id) {
            el.set_text_content(Some(text));
        }
    }
}

impl ControlsBinding for DomControls {
    fn read_parameters(&self) -> RawPackInput {
        let mut raw = RawPackInput::default();
        for (field, id) in ParamField::ALL.into_iter().zip(PARAM_INPUT_IDS) {
            *raw.field_mut(field) = self.value(id);
        }
        raw
    }

    fn read_orientation(&self) -> PackOrientation {
        PackOrientation::from_raw(&self.value(PACK_ROT_X.0), &self.value(PACK_ROT_Y.0))
    }

    fn read_camera(&self) -> CameraControls {
        CameraControls::from_raw(&RawCameraInput {
            azimuth_deg: self.value(CAM_ANGLE_X.0),
            elevation_deg: self.value(CAM_ANGLE_Y.0),
            distance: self.value(CAM_DISTANCE.0),
            pan_x: self.value(CAM_PAN_X.0),
            pan_y: self.value(CAM_PAN_Y.0),
        })
    }

    fn show_metrics(&mut self, readout: &MetricsReadout) {
        self.set_text(TOTAL_ROLLS_ID, &readout.total_rolls);
        self.set_text(PACK_DIMENSIONS_ID, &readout.dimensions);
        self.set_text(FOOTPRINT_ID, &readout.footprint);
    }

    fn show_orientation(&mut self, orientation: &PackOrientation) {
        self.set_text(PACK_ROT_X.1, &angle_readout(orientation.rot_x_deg));
        self.set_text(PACK_ROT_Y.1, &angle_readout(orientation.rot_y_deg));
    }

    fn show_camera(&mut self, camera: &CameraControls) {
        self.set_text(CAM_ANGLE_X.1, &angle_readout(camera.azimuth_deg));
        self.set_text(CAM_ANGLE_Y.1, &angle_readout(camera.elevation_deg));
        self.set_text(CAM_DISTANCE.1, &whole_readout(camera.distance));
        self.set_text(CAM_PAN_X.1, &whole_readout(camera.pan_x));
        self.set_text(CAM_PAN_Y.1, &whole_readout(camera.pan_y));
    }

    fn sync_camera_inputs(&mut self, camera: &CameraControls) {
        self.set_value(CAM_ANGLE_X.0, camera.azimuth_deg);
        self.set_value(CAM_ANGLE_Y.0, camera.elevation_deg);
        self.set_value(CAM_DISTANCE.0, camera.distance);
        self.set_value(CAM_PAN_X.0, camera.pan_x);
        self.set_value(CAM_PAN_Y.0, camera.pan_y);
    }
}
