// Host-side tests for the action dispatcher.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod actions {
        include!("../src/core/actions.rs");
    }
}

use crate::core::actions::{ActionDispatcher, ActionSink, ModelAction};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct RecordingSink {
    played: Vec<String>,
}

impl ActionSink for RecordingSink {
    fn play_action(&mut self, name: &str) {
        self.played.push(name.to_string());
    }
}

#[test]
fn action_names_are_stable() {
    assert_eq!(ModelAction::Idle.name(), "Idle");
    assert_eq!(ModelAction::TapBody.name(), "TapBody");
    assert_eq!(ModelAction::TapHead.name(), "TapHead");
    assert_eq!(ModelAction::ALL.len(), 3);
}

#[test]
fn dispatch_forwards_names_as_is() {
    let mut d = ActionDispatcher::new(StdRng::seed_from_u64(7));
    let mut sink = RecordingSink::default();
    // unknown names are the renderer's problem, not ours
    d.dispatch(&mut sink, "Wave");
    d.dispatch(&mut sink, "TapHead");
    assert_eq!(sink.played, vec!["Wave", "TapHead"]);
}

#[test]
fn random_dispatch_plays_exactly_one_action() {
    let mut d = ActionDispatcher::new(StdRng::seed_from_u64(42));
    let mut sink = RecordingSink::default();
    let chosen = d.dispatch_random(&mut sink);
    assert_eq!(sink.played.len(), 1);
    assert_eq!(sink.played[0], chosen.name());
}

#[test]
fn random_dispatch_covers_the_whole_action_set() {
    let mut d = ActionDispatcher::new(StdRng::seed_from_u64(1));
    let mut sink = RecordingSink::default();
    for _ in 0..300 {
        d.dispatch_random(&mut sink);
    }
    for action in ModelAction::ALL {
        assert!(
            sink.played.iter().any(|n| n == action.name()),
            "{} never chosen in 300 draws",
            action.name()
        );
    }
}
