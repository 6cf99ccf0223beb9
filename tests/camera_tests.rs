// Host-side tests for the orbit camera math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use glam::Vec3;

#[test]
fn eye_sits_on_the_orbit_sphere() {
    let cam = OrbitCamera::new(Vec3::new(0.0, 1.0, 1.5), 1.2, 0.4, 6.0);
    let dist = (cam.eye() - cam.target).length();
    assert!((dist - 6.0).abs() < 1e-4);
}

#[test]
fn zero_yaw_zero_pitch_looks_down_negative_z() {
    let cam = OrbitCamera::new(Vec3::ZERO, 0.0, 0.0, 4.0);
    let eye = cam.eye();
    assert!((eye.x - 0.0).abs() < 1e-5);
    assert!((eye.y - 0.0).abs() < 1e-5);
    assert!((eye.z - 4.0).abs() < 1e-5);
}

#[test]
fn yaw_pi_places_eye_behind_the_target() {
    let cam = OrbitCamera::new(Vec3::new(0.0, 1.0, 1.5), std::f32::consts::PI, 0.0, 6.0);
    let eye = cam.eye();
    assert!(eye.z < cam.target.z);
    assert!(eye.x.abs() < 1e-4);
}

#[test]
fn positive_pitch_raises_the_eye() {
    let flat = OrbitCamera::new(Vec3::ZERO, 0.7, 0.0, 5.0);
    let tilted = OrbitCamera::new(Vec3::ZERO, 0.7, 0.5, 5.0);
    assert!(tilted.eye().y > flat.eye().y);
}

#[test]
fn center_screen_ray_points_at_the_target() {
    let cam = OrbitCamera::new(Vec3::new(0.0, 1.0, 1.5), 2.1, 0.3, 6.0);
    let (ro, rd) = cam.screen_to_world_ray(400.0, 300.0, 800.0, 600.0);
    assert!((ro - cam.eye()).length() < 1e-4);

    let expected = (cam.target - cam.eye()).normalize();
    assert!((rd - expected).length() < 1e-3);
}

#[test]
fn screen_corners_produce_distinct_rays() {
    let cam = OrbitCamera::new(Vec3::ZERO, 0.0, 0.0, 5.0);
    let (_, top_left) = cam.screen_to_world_ray(0.0, 0.0, 800.0, 600.0);
    let (_, bottom_right) = cam.screen_to_world_ray(800.0, 600.0, 800.0, 600.0);
    assert!(top_left.x < bottom_right.x);
    assert!(top_left.y > bottom_right.y);
    assert!((top_left.length() - 1.0).abs() < 1e-4);
}
