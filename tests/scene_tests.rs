// Host-side tests for the static scenery builders.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod scene {
    include!("../src/core/scene.rs");
}

use glam::Vec3;
use scene::*;

#[test]
fn room_has_shell_stage_and_stairs() {
    let boxes = room_boxes();
    // floor + ceiling + 2 walls + 2 gates + stage slab + 5 steps
    assert_eq!(boxes.len(), 12);

    let translucent = boxes.iter().filter(|b| b.color[3] < 1.0).count();
    assert_eq!(translucent, 2);
}

#[test]
fn stage_slab_sits_at_the_front() {
    let boxes = stage_boxes(STAGE_POSITION);
    assert_eq!(boxes.len(), 6);
    let slab = &boxes[0];
    assert_eq!(slab.center, Vec3::new(0.0, 0.2, 5.0));
    assert_eq!(slab.size, Vec3::new(5.0, 0.5, 2.0));
    // Steps descend toward the floor.
    for pair in boxes[1..].windows(2) {
        assert!(pair[1].center.y <= pair[0].center.y);
    }
}

#[test]
fn chair_is_six_boxes_with_symmetric_legs() {
    let pos = Vec3::new(1.0, 2.0, 3.0);
    let parts = chair_boxes(pos, 0.2, false);
    assert_eq!(parts.len(), 6);
    assert_eq!(parts[0].center, pos);
    assert_eq!(parts[0].color, COLOR_SEAT_BODY);

    let legs = &parts[1..5];
    for leg in legs {
        assert_eq!(leg.color, COLOR_SEAT_LEG);
        assert!((leg.center.y - (pos.y - 0.05)).abs() < 1e-6);
        assert!(((leg.center.x - pos.x).abs() - 0.04).abs() < 1e-6);
        assert!(((leg.center.z - pos.z).abs() - 0.04).abs() < 1e-6);
    }
}

#[test]
fn selected_chair_is_all_white() {
    let parts = chair_boxes(Vec3::ZERO, 0.2, true);
    for part in parts {
        assert_eq!(part.color, COLOR_SEAT_SELECTED);
    }
}

#[test]
fn screen_mesh_is_an_open_cylinder_segment() {
    let mesh = screen_mesh();
    assert_eq!(mesh.vertices.len(), (SCREEN_RADIAL_SEGMENTS + 1) * 2);
    assert_eq!(mesh.indices.len(), SCREEN_RADIAL_SEGMENTS * 6);

    for v in &mesh.vertices {
        let dx = v[0] - SCREEN_POSITION.x;
        let dz = v[2] - SCREEN_POSITION.z;
        let radial = (dx * dx + dz * dz).sqrt();
        assert!((radial - SCREEN_RADIUS).abs() < 1e-4);
        assert!((v[1] - SCREEN_POSITION.y).abs() <= SCREEN_HEIGHT * 0.5 + 1e-6);
        // UVs stay inside the unit square.
        assert!((0.0..=1.0).contains(&v[3]));
        assert!((0.0..=1.0).contains(&v[4]));
    }

    for &i in &mesh.indices {
        assert!((i as usize) < mesh.vertices.len());
    }
}
