// Unit meshes and the drawable pack description.

use glam::{Mat3, Mat4, Vec3};
use pack_core::constants::{BOX_EDGE_COLOR, GRID_CENTER_COLOR, GRID_LINE_COLOR};
use pack_core::mesh::{ground_grid, unit_cube, unit_cube_edges, unit_cylinder};
use pack_core::{build_layout, normal_matrix, InstanceRaw, PackParameters, PackScene};

#[test]
fn cylinder_has_side_and_two_caps() {
    let mesh = unit_cylinder(32);
    assert_eq!(mesh.vertices.len(), 2 * 33 + 2 * 34);
    assert_eq!(mesh.triangle_count(), 32 * 2 + 32 * 2);
    for v in &mesh.vertices {
        let p = Vec3::from(v.position);
        assert!(p.y.abs() <= 0.5 + 1e-6);
        assert!(Vec3::new(p.x, 0.0, p.z).length() <= 1.0 + 1e-5);
        assert!((Vec3::from(v.normal).length() - 1.0).abs() < 1e-5);
    }
    assert!(mesh
        .indices
        .iter()
        .all(|&i| (i as usize) < mesh.vertices.len()));
}

#[test]
fn cylinder_triangles_face_outwards() {
    let mesh = unit_cylinder(12);
    for tri in mesh.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(mesh.vertices[i as usize].position));
        let face_normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(face_normal.dot(centroid) > 0.0);
    }
}

#[test]
fn cube_faces_wind_outwards() {
    let mesh = unit_cube();
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    for tri in mesh.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(mesh.vertices[i as usize].position));
        let n = Vec3::from(mesh.vertices[tri[0] as usize].normal);
        assert!((b - a).cross(c - a).dot(n) > 0.0);
    }
}

#[test]
fn cube_edges_are_twelve_unit_segments() {
    let points = unit_cube_edges();
    assert_eq!(points.len(), 24);
    for pair in points.chunks(2) {
        assert!((pair[0].distance(pair[1]) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn grid_marks_centre_lines() {
    let lines = ground_grid(2000.0, 40, -0.1, GRID_CENTER_COLOR, GRID_LINE_COLOR);
    assert_eq!(lines.len(), 41 * 4);
    let centre = lines.iter().filter(|v| v.color == GRID_CENTER_COLOR).count();
    assert_eq!(centre, 4);
    assert!(lines.iter().all(|v| v.position[1] == -0.1));
    assert!(lines
        .iter()
        .all(|v| v.position[0].abs() <= 1000.0 && v.position[2].abs() <= 1000.0));
}

fn translation(instance: &InstanceRaw) -> Vec3 {
    Vec3::from_slice(&instance.model[3][..3])
}

#[test]
fn scene_mirrors_layout() {
    let layout = build_layout(&PackParameters::default());
    let scene = PackScene::from_layout(&layout);
    assert_eq!(scene.rolls.len(), 24);
    assert_eq!(scene.cores.len(), 24);
    assert_eq!(scene.instance_count(), 49);
    assert_eq!(translation(&scene.rolls[0]), Vec3::new(-60.0, 50.0, -180.0));
    assert_eq!(translation(&scene.cores[23]), Vec3::new(60.0, 250.0, 180.0));
    assert_eq!(translation(&scene.box_fill), Vec3::new(0.0, 150.0, 0.0));
    // roll radius 60, height 100; core radius 20, height 101
    assert_eq!(scene.rolls[0].model[0][0], 60.0);
    assert_eq!(scene.rolls[0].model[1][1], 100.0);
    assert_eq!(scene.cores[0].model[0][0], 20.0);
    assert_eq!(scene.cores[0].model[1][1], 101.0);
}

#[test]
fn box_edges_trace_the_envelope() {
    let layout = build_layout(&PackParameters::default());
    let scene = PackScene::from_layout(&layout);
    assert_eq!(scene.box_edges.len(), 24);
    let (min, max) = (layout.envelope.min(), layout.envelope.max());
    for v in &scene.box_edges {
        let p = Vec3::from(v.position);
        assert!(p.abs_diff_eq(p.clamp(min, max), 1e-3));
        assert_eq!(v.color, BOX_EDGE_COLOR);
    }
}

#[test]
fn normal_matrix_undoes_scale() {
    let n = normal_matrix(Mat4::from_scale(Vec3::new(60.0, 100.0, 60.0)));
    let expected = Mat3::from_diagonal(Vec3::new(1.0 / 60.0, 1.0 / 100.0, 1.0 / 60.0));
    assert!(n.abs_diff_eq(expected, 1e-6));
    assert_eq!(normal_matrix(Mat4::from_scale(Vec3::ZERO)), Mat3::IDENTITY);
}

#[test]
fn empty_layout_still_has_a_box() {
    let layout = build_layout(&PackParameters {
        rows: 0.2,
        ..PackParameters::default()
    });
    let scene = PackScene::from_layout(&layout);
    assert!(scene.rolls.is_empty());
    assert_eq!(scene.instance_count(), 1);
}
