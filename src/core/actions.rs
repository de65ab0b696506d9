use rand::seq::SliceRandom;
use rand::Rng;

/// Named motions the character model can play on request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelAction {
    Idle,
    TapBody,
    TapHead,
}

impl ModelAction {
    pub const ALL: [ModelAction; 3] = [ModelAction::Idle, ModelAction::TapBody, ModelAction::TapHead];

    /// Wire name forwarded to the renderer.
    pub fn name(&self) -> &'static str {
        match self {
            ModelAction::Idle => "Idle",
            ModelAction::TapBody => "TapBody",
            ModelAction::TapHead => "TapHead",
        }
    }
}

/// Consumer of action requests (implemented by the renderer collaborator).
pub trait ActionSink {
    fn play_action(&mut self, name: &str);
}

/// Fire-and-forget forwarding of action requests to a sink. Names are
/// passed through as-is; validation, if any, is the renderer's business.
/// No retry, no queueing.
pub struct ActionDispatcher<R: Rng> {
    rng: R,
}

impl<R: Rng> ActionDispatcher<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn dispatch<S: ActionSink>(&mut self, sink: &mut S, name: &str) {
        sink.play_action(name);
    }

    /// Uniform random pick from the fixed action set, as triggered by a
    /// click on the model. Returns the chosen action for logging.
    pub fn dispatch_random<S: ActionSink>(&mut self, sink: &mut S) -> ModelAction {
        let action = *ModelAction::ALL
            .choose(&mut self.rng)
            .unwrap_or(&ModelAction::Idle);
        sink.play_action(action.name());
        action
    }
}
