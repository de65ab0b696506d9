// Host-side tests for interaction constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn zoom_bounds_are_ordered() {
    assert!(SCALE_MIN > 0.0);
    assert!(SCALE_MIN < SCALE_DEFAULT);
    assert!(SCALE_DEFAULT < SCALE_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn step_divides_the_zoom_range() {
    assert!(SCALE_STEP > 0.0);
    // both half-ranges are whole numbers of steps, so stepping from the
    // default lands exactly on each bound
    let up = (SCALE_MAX - SCALE_DEFAULT) / SCALE_STEP;
    let down = (SCALE_DEFAULT - SCALE_MIN) / SCALE_STEP;
    assert!((up - up.round()).abs() < 1e-4);
    assert!((down - down.round()).abs() < 1e-4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn animation_duration_is_positive_and_short() {
    assert!(ZOOM_ANIM_DURATION_MS > 0.0);
    // a zoom step should settle well within a second
    assert!(ZOOM_ANIM_DURATION_MS <= 1000.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drag_threshold_is_a_conventional_small_distance() {
    assert!(DRAG_THRESHOLD_PX >= 4.0);
    assert!(DRAG_THRESHOLD_PX <= 8.0);
}
