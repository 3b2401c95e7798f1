// Grid layout and metrics.

use glam::Vec3;
use pack_core::{build_layout, compute_metrics, round_count, GridCounts, PackParameters};

fn params(rows: f32, rolls_per_row: f32, layers: f32) -> PackParameters {
    PackParameters {
        rows,
        rolls_per_row,
        layers,
        ..PackParameters::default()
    }
}

#[test]
fn default_pack_metrics() {
    let m = compute_metrics(&PackParameters::default());
    assert_eq!(m.total_rolls, 24);
    assert_eq!(m.pack_width, 240.0);
    assert_eq!(m.pack_depth, 480.0);
    assert_eq!(m.pack_height, 300.0);
    assert_eq!(m.footprint(), (240.0, 480.0));
    assert_eq!(m.target_center(), Vec3::new(0.0, 150.0, 0.0));
}

#[test]
fn default_pack_placements() {
    let layout = build_layout(&PackParameters::default());
    assert_eq!(layout.placements.len(), 24);
    assert_eq!(layout.placements[0].center, Vec3::new(-60.0, 50.0, -180.0));
    assert_eq!(layout.placements[23].center, Vec3::new(60.0, 250.0, 180.0));
    assert_eq!(layout.envelope.size, Vec3::new(240.0, 300.0, 480.0));
    assert_eq!(layout.envelope.center(), Vec3::new(0.0, 150.0, 0.0));
}

#[test]
fn placements_enumerate_layer_then_row_then_column() {
    let layout = build_layout(&PackParameters::default());
    let counts = layout.metrics.counts;
    for (i, p) in layout.placements.iter().enumerate() {
        assert_eq!(counts.unravel(i), (p.layer, p.row, p.column));
    }
    assert_eq!(
        (layout.placements[1].layer, layout.placements[1].row, layout.placements[1].column),
        (0, 0, 1)
    );
    assert_eq!(layout.placements[4].row, 1);
    assert_eq!(layout.placements[8].layer, 1);
}

#[test]
fn placements_stay_inside_envelope() {
    let layout = build_layout(&params(3.0, 5.0, 2.0));
    let r = layout.params.roll_diameter / 2.0;
    let half_h = layout.params.roll_height / 2.0;
    let (min, max) = (layout.envelope.min(), layout.envelope.max());
    for c in layout.centers() {
        assert!(c.x - r >= min.x - 1e-3 && c.x + r <= max.x + 1e-3);
        assert!(c.z - r >= min.z - 1e-3 && c.z + r <= max.z + 1e-3);
        assert!(c.y - half_h >= min.y - 1e-3 && c.y + half_h <= max.y + 1e-3);
    }
}

#[test]
fn counts_round_half_away_from_zero() {
    assert_eq!(round_count(2.5), 3);
    assert_eq!(round_count(2.49), 2);
    assert_eq!(round_count(0.4), 0);
    let m = compute_metrics(&params(2.5, 1.2, 0.6));
    assert_eq!(
        m.counts,
        GridCounts {
            rows: 3,
            rolls_per_row: 1,
            layers: 1
        }
    );
    assert_eq!(m.total_rolls, 3);
    assert_eq!(m.pack_width, 360.0);
}

#[test]
fn counts_rounding_to_zero_give_an_empty_pack() {
    let layout = build_layout(&params(0.4, 4.0, 3.0));
    assert_eq!(layout.metrics.total_rolls, 0);
    assert!(layout.placements.is_empty());
    assert_eq!(layout.metrics.pack_width, 0.0);
}

#[test]
fn building_twice_gives_identical_layouts() {
    let p = params(4.0, 2.0, 5.0);
    assert_eq!(build_layout(&p), build_layout(&p));
}
