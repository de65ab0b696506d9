use super::constants::DRAG_THRESHOLD_PX;
use glam::Vec2;

/// Ephemeral record of one pointer-down-to-up interaction, used to
/// classify it as a click or a drag.
#[derive(Clone, Copy, Debug)]
struct GestureSession {
    start: Vec2,
    last: Vec2,
    moved_beyond_threshold: bool,
}

/// What a pointer event resolved to, as seen by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Nothing to apply (no session, below threshold, or locked).
    None,
    /// Unlocked drag movement; apply this delta to the position offset.
    DragDelta(Vec2),
    /// Pointer released without crossing the movement threshold.
    Click,
}

/// Pointer state machine: Idle -> Pressed -> (Dragging | click) -> Idle.
///
/// Movement is tracked even while the position is locked, so a locked
/// press that wanders past the threshold still resolves as a drag (and
/// fires no action); only the deltas themselves are withheld. Wheel
/// events never pass through here.
#[derive(Default)]
pub struct GestureRouter {
    session: Option<GestureSession>,
}

impl GestureRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.session
            .map_or(false, |s| s.moved_beyond_threshold)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let p = Vec2::new(x, y);
        self.session = Some(GestureSession {
            start: p,
            last: p,
            moved_beyond_threshold: false,
        });
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, locked: bool) -> GestureOutcome {
        let Some(session) = self.session.as_mut() else {
            return GestureOutcome::None;
        };
        let p = Vec2::new(x, y);
        let delta = p - session.last;
        session.last = p;
        if !session.moved_beyond_threshold {
            let travel = p - session.start;
            if travel.length_squared() > DRAG_THRESHOLD_PX * DRAG_THRESHOLD_PX {
                session.moved_beyond_threshold = true;
            }
        }
        if session.moved_beyond_threshold && !locked {
            GestureOutcome::DragDelta(delta)
        } else {
            GestureOutcome::None
        }
    }

    /// Ends the session. A press that never crossed the threshold
    /// resolves as a click; a completed drag resolves silently.
    pub fn pointer_up(&mut self) -> GestureOutcome {
        match self.session.take() {
            Some(s) if !s.moved_beyond_threshold => GestureOutcome::Click,
            _ => GestureOutcome::None,
        }
    }

    /// Drop any live session without resolving it (pointer cancel).
    pub fn cancel(&mut self) {
        self.session = None;
    }
}
