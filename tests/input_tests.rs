// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec3;
use input::*;

#[test]
fn ray_sphere_intersection_basic() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);
    let center = Vec3::new(0.0, 0.0, 5.0);

    let t = ray_sphere(ray_origin, ray_dir, center, 2.0).unwrap();
    assert!(t > 0.0);
    assert!((t - 3.0).abs() < 1e-4); // front of the sphere
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(1.0, 0.0, 0.0);
    let center = Vec3::new(0.0, 0.0, 5.0);

    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn ray_sphere_intersection_behind_origin() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);
    let center = Vec3::new(0.0, 0.0, -5.0);

    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn pick_seat_prefers_the_nearest_hit() {
    // Two seats stacked along the ray; the closer one wins.
    let positions = vec![
        Vec3::new(0.0, 0.0, 8.0),
        Vec3::new(0.0, 0.0, 3.0),
        Vec3::new(5.0, 0.0, 3.0),
    ];
    let picked = pick_seat(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &positions, 0.5);
    assert_eq!(picked, Some(1));
}

#[test]
fn pick_seat_returns_none_when_nothing_is_hit() {
    let positions = vec![Vec3::new(0.0, 5.0, 3.0), Vec3::new(0.0, -5.0, 3.0)];
    let picked = pick_seat(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &positions, 0.5);
    assert_eq!(picked, None);
}

#[test]
fn pick_seat_respects_radius() {
    let positions = vec![Vec3::new(0.3, 0.0, 3.0)];
    let ro = Vec3::ZERO;
    let rd = Vec3::new(0.0, 0.0, 1.0);
    assert_eq!(pick_seat(ro, rd, &positions, 0.1), None);
    assert_eq!(pick_seat(ro, rd, &positions, 0.5), Some(0));
}

#[test]
fn drag_state_defaults_to_idle() {
    let ds = DragState::default();
    assert!(!ds.active);
    assert_eq!(ds.travel_px, 0.0);
}
