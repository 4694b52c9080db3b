// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn drag_reports_deltas_between_moves() {
    let mut d = PointerDrag::default();
    assert_eq!(d.delta(1, 10.0, 10.0), None);
    d.begin(1, 10.0, 20.0);
    assert_eq!(d.delta(1, 15.0, 18.0), Some((5.0, -2.0)));
    assert_eq!(d.delta(1, 15.0, 30.0), Some((0.0, 12.0)));
}

#[test]
fn drag_ignores_other_pointers() {
    let mut d = PointerDrag::default();
    d.begin(3, 0.0, 0.0);
    assert_eq!(d.delta(4, 50.0, 50.0), None);
    assert!(!d.end(4));
    assert!(d.active);
    assert_eq!(d.delta(3, 1.0, 1.0), Some((1.0, 1.0)));
}

#[test]
fn drag_stops_after_end() {
    let mut d = PointerDrag::default();
    d.begin(1, 0.0, 0.0);
    assert!(d.end(1));
    assert!(!d.active);
    assert_eq!(d.delta(1, 5.0, 5.0), None);
    assert!(!d.end(1));
}

#[test]
fn restarting_a_drag_resets_the_anchor() {
    let mut d = PointerDrag::default();
    d.begin(1, 0.0, 0.0);
    d.end(1);
    d.begin(2, 100.0, 100.0);
    assert_eq!(d.delta(2, 101.0, 99.0), Some((1.0, -1.0)));
}
