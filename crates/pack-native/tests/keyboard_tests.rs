use pack_core::{
    ControlSignal, ControlsBinding, MetricsReadout, PackParameters, ParamField, PointerInput,
    RawPackInput,
};
use pack_native::{action_for_key, KeyAction, KeyboardControls};
use winit::keyboard::KeyCode;

fn press(controls: &mut KeyboardControls, key: KeyCode) -> Option<ControlSignal> {
    action_for_key(key).and_then(|a| controls.apply(a))
}

#[test]
fn count_keys_step_by_one() {
    let mut controls = KeyboardControls::new();
    assert_eq!(
        press(&mut controls, KeyCode::KeyR),
        Some(ControlSignal::ParameterChanged)
    );
    press(&mut controls, KeyCode::KeyG);
    press(&mut controls, KeyCode::KeyY);
    press(&mut controls, KeyCode::KeyY);
    let raw = controls.read_parameters();
    assert_eq!(raw.rows, "3");
    assert_eq!(raw.rolls_per_row, "3");
    assert_eq!(raw.layers, "5");
}

#[test]
fn counts_never_drop_below_one() {
    let mut controls = KeyboardControls::new();
    for _ in 0..10 {
        press(&mut controls, KeyCode::KeyF);
    }
    assert_eq!(controls.read_parameters().rows, "1");
    assert!(pack_core::validate(&controls.read_parameters()).is_ok());
}

#[test]
fn count_action_ignores_non_count_fields() {
    let mut controls = KeyboardControls::new();
    let signal = controls.apply(KeyAction::Count {
        field: ParamField::RollDiameter,
        delta: 1.0,
    });
    assert_eq!(signal, None);
    assert_eq!(
        controls.read_parameters(),
        RawPackInput::from(&PackParameters::default())
    );
}

#[test]
fn arrows_orbit_and_clamp_elevation() {
    let mut controls = KeyboardControls::new();
    let start = controls.read_camera();
    assert_eq!(
        press(&mut controls, KeyCode::ArrowRight),
        Some(ControlSignal::CameraChanged)
    );
    assert_eq!(controls.read_camera().azimuth_deg, start.azimuth_deg + 5.0);
    for _ in 0..40 {
        press(&mut controls, KeyCode::ArrowUp);
    }
    assert_eq!(controls.read_camera().elevation_deg, 89.0);
}

#[test]
fn zoom_keys_go_through_the_wheel_path() {
    let mut controls = KeyboardControls::new();
    match press(&mut controls, KeyCode::Equal) {
        Some(ControlSignal::Pointer(PointerInput::Wheel { delta_y })) => assert!(delta_y < 0.0),
        other => panic!("unexpected {:?}", other),
    }
    match press(&mut controls, KeyCode::Minus) {
        Some(ControlSignal::Pointer(PointerInput::Wheel { delta_y })) => assert!(delta_y > 0.0),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn pan_scales_with_distance() {
    let mut controls = KeyboardControls::new();
    press(&mut controls, KeyCode::KeyD);
    press(&mut controls, KeyCode::KeyW);
    let cam = controls.read_camera();
    let step = 0.02 * cam.distance;
    assert!((cam.pan_x - step).abs() < 1e-4);
    assert!((cam.pan_y - step).abs() < 1e-4);
}

#[test]
fn orientation_keys_wrap_at_180() {
    let mut controls = KeyboardControls::new();
    for _ in 0..13 {
        press(&mut controls, KeyCode::KeyE);
    }
    // 13 * 15 = 195 wraps to -165
    assert!((controls.read_orientation().rot_x_deg + 165.0).abs() < 1e-4);
    assert_eq!(
        press(&mut controls, KeyCode::KeyX),
        Some(ControlSignal::OrientationChanged)
    );
    assert_eq!(controls.read_orientation().rot_y_deg, 15.0);
}

#[test]
fn quit_and_unbound_keys() {
    assert_eq!(action_for_key(KeyCode::Escape), Some(KeyAction::Quit));
    assert_eq!(action_for_key(KeyCode::KeyM), None);
    let mut controls = KeyboardControls::new();
    assert_eq!(controls.apply(KeyAction::Quit), None);
    assert_eq!(
        press(&mut controls, KeyCode::KeyP),
        Some(ControlSignal::ExportRequested)
    );
    assert_eq!(
        press(&mut controls, KeyCode::Enter),
        Some(ControlSignal::GenerateRequested)
    );
}

#[test]
fn title_updates_once_per_readout_change() {
    let mut controls = KeyboardControls::new();
    assert_eq!(controls.take_title(), None);

    let readout = pack_core::preview_readout(&controls.read_parameters());
    controls.show_metrics(&readout);
    assert_eq!(
        controls.take_title().as_deref(),
        Some("Roll Pack - 24 rolls (2 × 4 × 3) - 240.0 mm × 480.0 mm")
    );
    controls.show_metrics(&readout);
    assert_eq!(controls.take_title(), None);

    let err = MetricsReadout::from_error(&pack_core::ValidationError::CoreTooLarge);
    controls.show_metrics(&err);
    assert_eq!(
        controls.take_title().as_deref(),
        Some("Roll Pack - Error: Core diameter must be smaller than roll diameter.")
    );
}
