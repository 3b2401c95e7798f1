// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/input.rs"]
mod input;

use input::*;
use pack_core::DragMode;

#[test]
fn primary_button_orbits() {
    assert_eq!(drag_mode_for(BUTTON_PRIMARY, false), Some(DragMode::Rotate));
}

#[test]
fn shift_or_other_buttons_pan() {
    assert_eq!(drag_mode_for(BUTTON_PRIMARY, true), Some(DragMode::Pan));
    assert_eq!(drag_mode_for(BUTTON_SECONDARY, false), Some(DragMode::Pan));
    assert_eq!(drag_mode_for(BUTTON_MIDDLE, true), Some(DragMode::Pan));
}

#[test]
fn back_and_forward_buttons_are_ignored() {
    assert_eq!(drag_mode_for(3, false), None);
    assert_eq!(drag_mode_for(4, false), None);
}

#[test]
fn wheel_delta_scales_by_mode() {
    assert_eq!(wheel_delta_px(-3.0, 0, 16.0, 800.0), -3.0);
    assert_eq!(wheel_delta_px(3.0, 1, 16.0, 800.0), 48.0);
    assert_eq!(wheel_delta_px(1.0, 2, 16.0, 800.0), 800.0);
}

#[test]
fn slider_text_keeps_one_decimal() {
    assert_eq!(slider_text(45.0), "45");
    assert_eq!(slider_text(12.34), "12.3");
    assert_eq!(slider_text(-0.01), "0");
}

#[test]
fn cached_pages_keep_the_viewer() {
    assert!(!teardown_on_pagehide(true));
    assert!(teardown_on_pagehide(false));
}
