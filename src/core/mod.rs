pub mod actions;
pub mod anim;
pub mod constants;
pub mod controller;
pub mod gesture;

pub use actions::{ActionDispatcher, ActionSink, ModelAction};
pub use anim::{ease_out_cubic, Animator};
pub use controller::ViewerController;
pub use gesture::{GestureOutcome, GestureRouter};
