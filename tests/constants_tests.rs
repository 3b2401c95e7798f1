// Host-side checks that the page ids stay consistent.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;

use constants::*;
use std::collections::HashSet;

#[test]
fn element_ids_are_unique() {
    let mut ids: Vec<&str> = vec![
        CANVAS_ID,
        TOTAL_ROLLS_ID,
        PACK_DIMENSIONS_ID,
        FOOTPRINT_ID,
        GENERATE_BUTTON_ID,
        EXPORT_BUTTON_ID,
    ];
    ids.extend(PARAM_INPUT_IDS);
    for (slider, readout) in ORIENTATION_SLIDERS.into_iter().chain(CAMERA_SLIDERS) {
        ids.push(slider);
        ids.push(readout);
    }
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn readouts_follow_the_slider_naming() {
    for (slider, readout) in ORIENTATION_SLIDERS.into_iter().chain(CAMERA_SLIDERS) {
        assert_eq!(readout, format!("{}Val", slider));
    }
}

#[test]
fn every_param_field_has_an_input() {
    assert_eq!(PARAM_INPUT_IDS.len(), pack_core::ParamField::ALL.len());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wheel_scales_are_positive() {
    assert!(WHEEL_LINE_PX > 0.0);
    assert!(WHEEL_PAGE_PX > WHEEL_LINE_PX);
}
