// Host-side tests for interaction constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(PICK_RADIUS_PER_SCALE > 0.0);
    assert!(CLICK_DRAG_THRESHOLD_PX > 0.0);
    assert!(ORBIT_SENSITIVITY > 0.0);
    assert!(ORBIT_KEY_NUDGE > 0.0);
    assert!(ORBIT_ZOOM_PER_WHEEL_LINE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(ORBIT_PITCH_MIN < ORBIT_PITCH_MAX);
    assert!(ORBIT_DISTANCE_MIN < ORBIT_DISTANCE_MAX);
    assert!(
        ORBIT_DISTANCE_MIN <= ORBIT_INITIAL_DISTANCE && ORBIT_INITIAL_DISTANCE <= ORBIT_DISTANCE_MAX
    );
    assert!(
        ORBIT_PITCH_MIN <= ORBIT_INITIAL_PITCH && ORBIT_INITIAL_PITCH <= ORBIT_PITCH_MAX
    );
    // Hovering must brighten, never darken.
    assert!(HOVER_BRIGHTEN > 1.0);
}
