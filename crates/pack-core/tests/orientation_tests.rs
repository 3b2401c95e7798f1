// Pack group rotation.

use glam::{Quat, Vec3};
use pack_core::{apply_orientation, PackOrientation};

#[test]
fn zero_angles_are_identity() {
    assert!(apply_orientation(0.0, 0.0).abs_diff_eq(Quat::IDENTITY, 1e-6));
}

#[test]
fn rotation_is_x_then_y() {
    let (a, b) = (25.0_f32, -70.0_f32);
    let expected = Quat::from_rotation_x(a.to_radians()) * Quat::from_rotation_y(b.to_radians());
    assert!(apply_orientation(a, b).abs_diff_eq(expected, 1e-6));
}

#[test]
fn quarter_turn_about_x_tips_up_onto_z() {
    let m = PackOrientation {
        rot_x_deg: 90.0,
        rot_y_deg: 0.0,
    }
    .group_matrix();
    assert!(m.transform_vector3(Vec3::Y).abs_diff_eq(Vec3::Z, 1e-6));
}

#[test]
fn unparsable_slider_text_counts_as_zero() {
    assert_eq!(PackOrientation::from_raw("x", ""), PackOrientation::default());
    assert_eq!(
        PackOrientation::from_raw("15", "-30"),
        PackOrientation {
            rot_x_deg: 15.0,
            rot_y_deg: -30.0
        }
    );
}
