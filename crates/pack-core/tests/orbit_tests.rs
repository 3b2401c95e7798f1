// Pointer orbit, pan, zoom and glide.

use pack_core::constants::{MAX_DISTANCE, MIN_DISTANCE};
use pack_core::{CameraControls, DragMode, OrbitController};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn rotate_drag_turns_azimuth_and_elevation() {
    let mut orbit = OrbitController::new();
    let mut c = CameraControls::default();
    orbit.begin(DragMode::Rotate, 100.0, 100.0);
    assert!(orbit.is_dragging());
    assert!(orbit.drag_to(110.0, 90.0, &mut c));
    assert!(close(c.azimuth_deg, 42.0), "{}", c.azimuth_deg);
    assert!(close(c.elevation_deg, 27.0), "{}", c.elevation_deg);
    assert_eq!(c.distance, CameraControls::default().distance);
}

#[test]
fn motion_without_a_drag_is_ignored() {
    let mut orbit = OrbitController::new();
    let mut c = CameraControls::default();
    assert!(!orbit.drag_to(50.0, 50.0, &mut c));
    assert_eq!(c, CameraControls::default());
}

#[test]
fn pan_drag_scales_with_distance() {
    let mut orbit = OrbitController::new();
    let mut c = CameraControls::default();
    orbit.begin(DragMode::Pan, 0.0, 0.0);
    assert!(orbit.drag_to(10.0, 0.0, &mut c));
    assert!(close(c.pan_x, -13.5), "{}", c.pan_x);
    assert_eq!(c.pan_y, 0.0);
    orbit.end();
    assert!(!orbit.is_gliding());
}

#[test]
fn elevation_is_clamped_and_azimuth_wraps() {
    let mut orbit = OrbitController::new();
    let mut c = CameraControls {
        azimuth_deg: 179.0,
        ..CameraControls::default()
    };
    orbit.begin(DragMode::Rotate, 0.0, 0.0);
    orbit.drag_to(-10.0, 1000.0, &mut c);
    assert_eq!(c.elevation_deg, 89.0);
    assert!(close(c.azimuth_deg, -178.0), "{}", c.azimuth_deg);
}

#[test]
fn wheel_zoom_keeps_distance_in_range() {
    let mut orbit = OrbitController::new();
    let mut c = CameraControls::default();
    assert!(orbit.wheel(100.0, &mut c));
    assert!(c.distance > 900.0);
    orbit.wheel(1.0e6, &mut c);
    assert_eq!(c.distance, MAX_DISTANCE);
    orbit.wheel(-1.0e6, &mut c);
    assert_eq!(c.distance, MIN_DISTANCE);
    assert!(!orbit.wheel(-10.0, &mut c));
    assert!(!orbit.wheel(0.0, &mut c));
    assert!(!orbit.wheel(f32::NAN, &mut c));
    assert!(c.distance > 0.0);
}

#[test]
fn released_rotation_glides_then_stops() {
    let mut orbit = OrbitController::new();
    let mut c = CameraControls::default();
    orbit.begin(DragMode::Rotate, 0.0, 0.0);
    orbit.drag_to(-10.0, 0.0, &mut c);
    assert!(!orbit.step(1.0 / 60.0, &mut c), "no glide while the button is held");
    orbit.end();
    assert!(orbit.is_gliding());

    let after_drag = c.azimuth_deg;
    assert!(orbit.step(1.0 / 60.0, &mut c));
    assert!(c.azimuth_deg > after_drag);

    for _ in 0..1000 {
        orbit.step(1.0 / 60.0, &mut c);
    }
    assert!(!orbit.is_gliding());
    let settled = c.azimuth_deg;
    assert!(!orbit.step(1.0 / 60.0, &mut c));
    assert_eq!(c.azimuth_deg, settled);
}

#[test]
fn new_drag_cancels_glide() {
    let mut orbit = OrbitController::new();
    let mut c = CameraControls::default();
    orbit.begin(DragMode::Rotate, 0.0, 0.0);
    orbit.drag_to(30.0, 0.0, &mut c);
    orbit.end();
    orbit.begin(DragMode::Pan, 5.0, 5.0);
    orbit.end();
    assert!(!orbit.is_gliding());
}

#[test]
fn held_drag_loses_its_momentum() {
    let mut orbit = OrbitController::new();
    let mut c = CameraControls::default();
    orbit.begin(DragMode::Rotate, 0.0, 0.0);
    orbit.drag_to(-20.0, 0.0, &mut c);
    let held_at = c.azimuth_deg;
    // two seconds without pointer motion
    for _ in 0..120 {
        assert!(!orbit.step(1.0 / 60.0, &mut c));
    }
    assert_eq!(c.azimuth_deg, held_at);
    orbit.end();
    assert!(!orbit.is_gliding());
    for _ in 0..60 {
        orbit.step(1.0 / 60.0, &mut c);
    }
    assert_eq!(c.azimuth_deg, held_at);
}
