use super::anim::Animator;
use super::constants::{
    SCALE_DEFAULT, SCALE_MAX, SCALE_MIN, SCALE_STEP, ZOOM_ANIM_DURATION_MS,
};
use glam::Vec2;
use instant::Instant;

// Accumulated 0.1-steps drift off the bounds in f32; a request landing
// within this of a bound is treated as hitting it exactly.
const BOUND_SNAP_EPS: f32 = 1e-4;

#[inline]
fn snap_to_bound(target: f32) -> f32 {
    if (target - SCALE_MIN).abs() < BOUND_SNAP_EPS {
        SCALE_MIN
    } else if (target - SCALE_MAX).abs() < BOUND_SNAP_EPS {
        SCALE_MAX
    } else {
        target
    }
}

/// Live and target zoom multiplier. `current` is clamped to
/// `[SCALE_MIN, SCALE_MAX]` on every mutation.
#[derive(Clone, Copy, Debug)]
pub struct ScaleState {
    pub current: f32,
    pub target: f32,
}

/// Owns the viewer's interaction state: zoom scale (animated), position
/// offset (drag-driven) and the position lock. All zoom requests clamp
/// silently; there is no error path.
pub struct ViewerController {
    scale: ScaleState,
    offset: Vec2,
    locked: bool,
    animator: Animator,
}

impl Default for ViewerController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerController {
    pub fn new() -> Self {
        Self {
            scale: ScaleState {
                current: SCALE_DEFAULT,
                target: SCALE_DEFAULT,
            },
            offset: Vec2::ZERO,
            locked: false,
            animator: Animator::new(ZOOM_ANIM_DURATION_MS),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale.current
    }

    pub fn target_scale(&self) -> f32 {
        self.scale.target
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Base for relative zoom steps: the in-flight target when animating,
    /// else the live value. Stepping from the target is what keeps rapid
    /// wheel events accumulating instead of fighting the animation.
    fn step_base(&self) -> f32 {
        if self.animator.is_active() {
            self.scale.target
        } else {
            self.scale.current
        }
    }

    pub fn zoom_in(&mut self, now: Instant) {
        self.zoom_to(self.step_base() + SCALE_STEP, now);
    }

    pub fn zoom_out(&mut self, now: Instant) {
        self.zoom_to(self.step_base() - SCALE_STEP, now);
    }

    pub fn reset_zoom(&mut self, now: Instant) {
        self.zoom_to(SCALE_DEFAULT, now);
    }

    /// Wheel delta routed straight to a zoom step; scrolling up (negative
    /// delta) zooms in. A zero delta leaves any in-flight animation alone.
    pub fn zoom_by_wheel(&mut self, delta: f64, now: Instant) {
        if delta < 0.0 {
            self.zoom_in(now);
        } else if delta > 0.0 {
            self.zoom_out(now);
        }
    }

    fn zoom_to(&mut self, requested: f32, now: Instant) {
        let target = snap_to_bound(requested.clamp(SCALE_MIN, SCALE_MAX));
        // Already animating toward it: retargeting would only stretch the
        // animation, so leave the task alone.
        if self.animator.end_value() == Some(target) {
            return;
        }
        // Already parked there: no-op, no animation started.
        if !self.animator.is_active() && target == self.scale.current {
            self.scale.target = target;
            return;
        }
        self.scale.target = target;
        self.animator.retarget(now, self.scale.current, target);
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Apply a drag delta to the position offset. Discarded while locked;
    /// zoom is unaffected by the lock in either direction.
    pub fn apply_drag_delta(&mut self, delta: Vec2) {
        if !self.locked {
            self.offset += delta;
        }
    }

    /// Advance the zoom animation one frame, committing the interpolated
    /// value into the live scale. Returns true while a task remains
    /// active, letting the frame scheduler self-cancel when idle.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(value) = self.animator.tick(now) {
            self.scale.current = value.clamp(SCALE_MIN, SCALE_MAX);
        }
        self.animator.is_active()
    }
}
