// Host-side tests for the selection state manager.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod selection {
    include!("../src/core/selection.rs");
}

use selection::*;
use std::cell::RefCell;
use std::rc::Rc;

fn make_state() -> SelectionState {
    let labels = ["A0", "A1", "B0", "B1", "C5"].map(String::from);
    SelectionState::new(labels)
}

#[test]
fn toggle_flips_membership() {
    let mut state = make_state();
    assert!(!state.is_selected("A0"));
    assert_eq!(state.toggle("A0"), Ok(true));
    assert!(state.is_selected("A0"));
    assert_eq!(state.toggle("A0"), Ok(false));
    assert!(!state.is_selected("A0"));
}

#[test]
fn double_toggle_restores_exact_set() {
    let mut state = make_state();
    state.toggle("A1").unwrap();
    state.toggle("B0").unwrap();
    let before = state.selected_labels();

    state.toggle("C5").unwrap();
    state.toggle("C5").unwrap();
    assert_eq!(state.selected_labels(), before);
}

#[test]
fn toggle_leaves_other_seats_untouched() {
    let mut state = make_state();
    state.toggle("A0").unwrap();
    state.toggle("B1").unwrap();

    state.toggle("C5").unwrap();
    assert!(state.is_selected("A0"));
    assert!(state.is_selected("B1"));
    assert!(state.is_selected("C5"));
    assert_eq!(state.selected_count(), 3);
}

#[test]
fn c5_scenario() {
    let mut state = make_state();
    state.toggle("C5").unwrap();
    assert_eq!(state.selected_labels(), vec!["C5".to_string()]);

    state.toggle("C5").unwrap();
    assert!(state.selected_labels().is_empty());
    assert_eq!(state.selected_count(), 0);
}

#[test]
fn unknown_labels_are_rejected() {
    let mut state = make_state();
    assert_eq!(
        state.toggle("Z99"),
        Err(SelectionError::UnknownLabel("Z99".to_string()))
    );
    assert_eq!(state.selected_count(), 0);
}

#[test]
fn observers_fire_on_every_successful_toggle() {
    let mut state = make_state();
    let seen: Rc<RefCell<Vec<SelectionChange>>> = Rc::new(RefCell::new(Vec::new()));
    let seen_obs = seen.clone();
    state.subscribe(Box::new(move |change| {
        seen_obs.borrow_mut().push(change.clone());
    }));

    state.toggle("B0").unwrap();
    state.toggle("A0").unwrap();
    state.toggle("B0").unwrap();
    // Rejected toggles notify nobody.
    let _ = state.toggle("nope");

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].label, "B0");
    assert!(seen[0].selected);
    assert_eq!(seen[1].selected_labels, vec!["A0", "B0"]);
    assert_eq!(seen[2].label, "B0");
    assert!(!seen[2].selected);
    assert_eq!(seen[2].selected_labels, vec!["A0"]);
}

#[test]
fn starts_empty() {
    let state = make_state();
    assert_eq!(state.selected_count(), 0);
    assert!(state.selected_labels().is_empty());
}
