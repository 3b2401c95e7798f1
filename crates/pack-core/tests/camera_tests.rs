// Camera pose from slider values.

use glam::Vec3;
use pack_core::{compute_camera_pose, Camera, CameraControls, RawCameraInput};

fn controls(azimuth_deg: f32, elevation_deg: f32, distance: f32) -> CameraControls {
    CameraControls {
        azimuth_deg,
        elevation_deg,
        distance,
        pan_x: 0.0,
        pan_y: 0.0,
    }
}

#[test]
fn straight_ahead_pose() {
    let pose = compute_camera_pose(&controls(0.0, 0.0, 400.0), Vec3::new(0.0, 50.0, 0.0));
    assert_eq!(pose.position, Vec3::new(0.0, 50.0, 400.0));
    assert_eq!(pose.look_at, Vec3::new(0.0, 50.0, 0.0));
    assert_eq!(pose.up, Vec3::Y);
}

#[test]
fn zero_elevation_stays_level_at_distance() {
    let target = Vec3::new(0.0, 120.0, 0.0);
    for az in [-170.0, -45.0, 10.0, 90.0, 135.0] {
        let pose = compute_camera_pose(&controls(az, 0.0, 650.0), target);
        assert_eq!(pose.position.y, target.y);
        assert!((pose.position.distance(target) - 650.0).abs() < 1e-2);
    }
}

#[test]
fn overhead_camera_has_usable_up_vector() {
    let target = Vec3::new(0.0, 150.0, 0.0);
    for az in [0.0, 37.0, 180.0] {
        let pose = compute_camera_pose(&controls(az, 90.0, 500.0), target);
        assert!((pose.position.y - (target.y + 500.0)).abs() < 1e-3);
        let forward = (pose.look_at - pose.position).normalize();
        assert!(forward.dot(pose.up).abs() < 1e-4);
        assert!(pose.up.length() > 0.99);
        let view = Camera::from_pose(&pose, 1.5).view_matrix();
        assert!(view.is_finite());
    }
}

#[test]
fn pan_offsets_look_at() {
    let mut c = controls(0.0, 0.0, 400.0);
    c.pan_x = 30.0;
    c.pan_y = -20.0;
    let pose = compute_camera_pose(&c, Vec3::new(0.0, 50.0, 0.0));
    assert_eq!(pose.look_at, Vec3::new(30.0, 30.0, 0.0));
    assert_eq!(pose.position, Vec3::new(30.0, 30.0, 400.0));
}

#[test]
fn slider_text_falls_back_to_defaults() {
    let raw = RawCameraInput {
        azimuth_deg: "abc".into(),
        elevation_deg: "".into(),
        distance: "0".into(),
        pan_x: "12".into(),
        pan_y: "-4.5".into(),
    };
    let c = CameraControls::from_raw(&raw);
    assert_eq!(c.azimuth_deg, 0.0);
    assert_eq!(c.elevation_deg, 0.0);
    assert_eq!(c.distance, 400.0);
    assert_eq!((c.pan_x, c.pan_y), (12.0, -4.5));

    let negative = RawCameraInput {
        distance: "-50".into(),
        ..raw
    };
    assert_eq!(CameraControls::from_raw(&negative).distance, 400.0);
}

#[test]
fn projection_handles_bad_aspect() {
    let pose = compute_camera_pose(&CameraControls::default(), Vec3::ZERO);
    let camera = Camera::from_pose(&pose, 0.0);
    assert_eq!(camera.aspect, 1.0);
    assert!(camera.view_proj().is_finite());
}
