// Host-side tests for pointer gesture classification.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod anim {
        include!("../src/core/anim.rs");
    }
    pub mod controller {
        include!("../src/core/controller.rs");
    }
    pub mod gesture {
        include!("../src/core/gesture.rs");
    }
}

use crate::core::controller::ViewerController;
use crate::core::gesture::{GestureOutcome, GestureRouter};
use glam::Vec2;

#[test]
fn press_and_release_without_movement_is_a_click() {
    let mut r = GestureRouter::new();
    r.pointer_down(100.0, 100.0);
    assert!(r.is_pressed());
    assert_eq!(r.pointer_up(), GestureOutcome::Click);
    assert!(!r.is_pressed());
}

#[test]
fn jitter_below_threshold_still_clicks() {
    let mut r = GestureRouter::new();
    r.pointer_down(100.0, 100.0);
    // 2px of travel, under the 4px threshold
    assert_eq!(r.pointer_move(102.0, 100.0, false), GestureOutcome::None);
    assert_eq!(r.pointer_move(100.0, 101.0, false), GestureOutcome::None);
    assert_eq!(r.pointer_up(), GestureOutcome::Click);
}

#[test]
fn crossing_the_threshold_turns_the_press_into_a_drag() {
    let mut r = GestureRouter::new();
    r.pointer_down(0.0, 0.0);
    assert_eq!(
        r.pointer_move(10.0, 0.0, false),
        GestureOutcome::DragDelta(Vec2::new(10.0, 0.0))
    );
    assert!(r.is_dragging());
    // subsequent moves report per-move deltas
    assert_eq!(
        r.pointer_move(15.0, 5.0, false),
        GestureOutcome::DragDelta(Vec2::new(5.0, 5.0))
    );
    // a completed drag ends silently, no click action
    assert_eq!(r.pointer_up(), GestureOutcome::None);
}

#[test]
fn locked_press_never_emits_drag_deltas() {
    let mut r = GestureRouter::new();
    r.pointer_down(0.0, 0.0);
    assert_eq!(r.pointer_move(50.0, 50.0, true), GestureOutcome::None);
    assert_eq!(r.pointer_move(120.0, 0.0, true), GestureOutcome::None);
    // movement was still tracked: this resolves as a drag, not a click
    assert_eq!(r.pointer_up(), GestureOutcome::None);
}

#[test]
fn locked_click_still_fires() {
    let mut r = GestureRouter::new();
    r.pointer_down(30.0, 30.0);
    assert_eq!(r.pointer_move(31.0, 30.0, true), GestureOutcome::None);
    assert_eq!(r.pointer_up(), GestureOutcome::Click);
}

#[test]
fn unlocking_mid_press_resumes_deltas() {
    let mut r = GestureRouter::new();
    r.pointer_down(0.0, 0.0);
    assert_eq!(r.pointer_move(20.0, 0.0, true), GestureOutcome::None);
    // lock released while still pressed: deltas flow again
    assert_eq!(
        r.pointer_move(25.0, 0.0, false),
        GestureOutcome::DragDelta(Vec2::new(5.0, 0.0))
    );
}

#[test]
fn moves_without_a_press_are_ignored() {
    let mut r = GestureRouter::new();
    assert_eq!(r.pointer_move(10.0, 10.0, false), GestureOutcome::None);
    assert_eq!(r.pointer_up(), GestureOutcome::None);
}

#[test]
fn cancel_discards_the_session() {
    let mut r = GestureRouter::new();
    r.pointer_down(0.0, 0.0);
    r.cancel();
    assert!(!r.is_pressed());
    assert_eq!(r.pointer_up(), GestureOutcome::None);
}

#[test]
fn drag_moves_offset_and_lock_freezes_it() {
    let mut r = GestureRouter::new();
    let mut c = ViewerController::new();

    r.pointer_down(0.0, 0.0);
    if let GestureOutcome::DragDelta(d) = r.pointer_move(12.0, -8.0, c.is_locked()) {
        c.apply_drag_delta(d);
    }
    r.pointer_up();
    assert_eq!(c.offset(), Vec2::new(12.0, -8.0));

    // same gesture while locked: offset must not change at all
    c.lock();
    r.pointer_down(0.0, 0.0);
    if let GestureOutcome::DragDelta(d) = r.pointer_move(40.0, 40.0, c.is_locked()) {
        c.apply_drag_delta(d);
    }
    r.pointer_up();
    assert_eq!(c.offset(), Vec2::new(12.0, -8.0));

    // unlock restores responsiveness
    c.unlock();
    r.pointer_down(0.0, 0.0);
    if let GestureOutcome::DragDelta(d) = r.pointer_move(8.0, 0.0, c.is_locked()) {
        c.apply_drag_delta(d);
    }
    assert_eq!(c.offset(), Vec2::new(20.0, -8.0));
}
