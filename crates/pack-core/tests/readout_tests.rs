// Readout strings shown next to the form and sliders.

use pack_core::constants::{CORE_TOO_LARGE_MESSAGE, INVALID_NUMBER_MESSAGE};
use pack_core::{
    angle_readout, compute_metrics, preview_readout, whole_readout, MetricsReadout,
    PackParameters, RawPackInput,
};

#[test]
fn metrics_readout_for_default_pack() {
    let r = MetricsReadout::from_metrics(&compute_metrics(&PackParameters::default()));
    assert_eq!(r.total_rolls, "24 rolls (2 × 4 × 3)");
    assert_eq!(r.dimensions, "Width: 240.0 mm, Depth: 480.0 mm, Height: 300.0 mm");
    assert_eq!(r.footprint, "240.0 mm × 480.0 mm");
    assert!(!r.is_error());
}

#[test]
fn fractional_sizes_keep_one_decimal() {
    let params = PackParameters {
        roll_diameter: 105.3,
        roll_height: 98.5,
        rows: 1.0,
        rolls_per_row: 2.0,
        layers: 1.0,
        ..PackParameters::default()
    };
    let r = MetricsReadout::from_metrics(&compute_metrics(&params));
    assert_eq!(r.total_rolls, "2 rolls (1 × 2 × 1)");
    assert_eq!(r.dimensions, "Width: 105.3 mm, Depth: 210.6 mm, Height: 98.5 mm");
}

#[test]
fn invalid_input_shows_message_and_placeholders() {
    let mut raw = RawPackInput::from(&PackParameters::default());
    raw.roll_height = "tall".into();
    let r = preview_readout(&raw);
    assert_eq!(r.total_rolls, INVALID_NUMBER_MESSAGE);
    assert_eq!(r.dimensions, "–");
    assert_eq!(r.footprint, "–");
    assert!(r.is_error());

    raw.roll_height = "100".into();
    raw.core_diameter = "130".into();
    assert_eq!(preview_readout(&raw).total_rolls, CORE_TOO_LARGE_MESSAGE);
}

#[test]
fn slider_readouts() {
    assert_eq!(angle_readout(30.0), "30°");
    assert_eq!(angle_readout(-12.5), "-12.5°");
    assert_eq!(angle_readout(-0.0), "0°");
    assert_eq!(angle_readout(47.26), "47.3°");
    assert_eq!(whole_readout(899.6), "900");
    assert_eq!(whole_readout(-0.4), "0");
    assert_eq!(whole_readout(-13.5), "-14");
}
