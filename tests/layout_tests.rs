// Host-side tests for the seat layout generator.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod layout {
    include!("../src/core/layout.rs");
}

use layout::*;

#[test]
fn default_layout_covers_full_grid() {
    let params = LayoutParams::default();
    let seats = generate_seats(&params).unwrap();
    assert_eq!(seats.len(), 11 * 25);

    for row in 0..11 {
        for col in 0..25 {
            let seat = &seats[row * 25 + col];
            assert_eq!(seat.id, format!("{row}-{col}"));
            assert_eq!(
                seat.label,
                format!("{}{}", (b'A' + row as u8) as char, col)
            );
        }
    }
}

#[test]
fn labels_and_ids_are_unique() {
    let seats = generate_seats(&LayoutParams::default()).unwrap();
    let mut labels: Vec<&str> = seats.iter().map(|s| s.label.as_str()).collect();
    let mut ids: Vec<&str> = seats.iter().map(|s| s.id.as_str()).collect();
    labels.sort();
    labels.dedup();
    ids.sort();
    ids.dedup();
    assert_eq!(labels.len(), seats.len());
    assert_eq!(ids.len(), seats.len());
}

#[test]
fn generation_is_deterministic() {
    let params = LayoutParams {
        rows: 7,
        seats_per_row: 13,
        chair_scale: 0.35,
    };
    let a = generate_seats(&params).unwrap();
    let b = generate_seats(&params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn two_by_three_scenario() {
    // Front row A is at the floor plane, back row B rises less and sits deeper.
    let params = LayoutParams {
        rows: 2,
        seats_per_row: 3,
        chair_scale: 1.0,
    };
    let seats = generate_seats(&params).unwrap();
    let labels: Vec<&str> = seats.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["A0", "A1", "A2", "B0", "B1", "B2"]);

    let a0 = &seats[0];
    let b0 = &seats[3];
    assert!((a0.position.z - 0.0).abs() < 1e-6);
    assert!((b0.position.z - 1.5).abs() < 1e-6);
    // Elevation counts down from the fixed top constant, not the row count.
    assert!((a0.position.y - 5.5).abs() < 1e-6);
    assert!((b0.position.y - 5.0).abs() < 1e-6);
    assert!(a0.position.y > b0.position.y);
}

#[test]
fn horizontal_mapping_centers_the_middle_column() {
    let params = LayoutParams::default();
    let seats = generate_seats(&params).unwrap();
    // 25 seats: columns walk from -12 steps to +12 steps around the center.
    assert!((seats[0].position.x - (-12.0 * 0.2)).abs() < 1e-5);
    assert!((seats[12].position.x - 0.0).abs() < 1e-5);
    assert!((seats[24].position.x - (12.0 * 0.2)).abs() < 1e-5);
}

#[test]
fn facing_target_is_row_independent() {
    let params = LayoutParams::default();
    let seats = generate_seats(&params).unwrap();
    for col in 0..25 {
        let front = &seats[col];
        let back = &seats[10 * 25 + col];
        assert_eq!(front.facing_target, back.facing_target);
        assert!((front.facing_target.x - front.position.x).abs() < 1e-6);
        assert!((front.facing_target.y - 0.6 * 0.2).abs() < 1e-6);
        assert!((front.facing_target.z - (-0.355 * 0.2)).abs() < 1e-6);
    }
}

#[test]
fn rows_beyond_alphabet_are_rejected() {
    let params = LayoutParams {
        rows: 27,
        seats_per_row: 4,
        chair_scale: 0.2,
    };
    assert_eq!(
        generate_seats(&params),
        Err(LayoutError::TooManyRows { rows: 27, max: 26 })
    );
}

#[test]
fn full_alphabet_is_allowed() {
    let params = LayoutParams {
        rows: 26,
        seats_per_row: 2,
        chair_scale: 0.2,
    };
    let seats = generate_seats(&params).unwrap();
    assert_eq!(seats.len(), 52);
    assert_eq!(seats[50].label, "Z0");
}
