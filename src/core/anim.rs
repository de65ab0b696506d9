use instant::Instant;

/// Cubic ease-out: fast start, settles into the target.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// One in-flight interpolation for a single animated property.
#[derive(Clone, Copy, Debug)]
pub struct AnimationTask {
    pub start_value: f32,
    pub end_value: f32,
    pub start_time: Instant,
    pub duration_ms: f64,
}

impl AnimationTask {
    /// Interpolated value at `now`, clamped to the task's endpoints.
    fn value_at(&self, now: Instant) -> f32 {
        let elapsed_ms = now.duration_since(self.start_time).as_secs_f64() * 1000.0;
        let t = (elapsed_ms / self.duration_ms).min(1.0) as f32;
        self.start_value + (self.end_value - self.start_value) * ease_out_cubic(t)
    }

    fn is_done(&self, now: Instant) -> bool {
        now.duration_since(self.start_time).as_secs_f64() * 1000.0 >= self.duration_ms
    }
}

/// Drives at most one `AnimationTask`. Retargeting replaces the task
/// atomically, starting from the value interpolated at the moment of
/// replacement so the animated property never jumps.
#[derive(Clone, Copy, Debug)]
pub struct Animator {
    task: Option<AnimationTask>,
    duration_ms: f64,
}

impl Animator {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            task: None,
            duration_ms,
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    /// End value of the in-flight task, if any.
    pub fn end_value(&self) -> Option<f32> {
        self.task.map(|t| t.end_value)
    }

    /// Current interpolated value, or `fallback` when idle.
    pub fn value_or(&self, now: Instant, fallback: f32) -> f32 {
        self.task.map_or(fallback, |t| t.value_at(now))
    }

    /// Start animating toward `end_value`. A live task is superseded,
    /// continuing from its just-interpolated value.
    pub fn retarget(&mut self, now: Instant, live_value: f32, end_value: f32) {
        let start_value = self.value_or(now, live_value);
        self.task = Some(AnimationTask {
            start_value,
            end_value,
            start_time: now,
            duration_ms: self.duration_ms,
        });
    }

    /// Advance one frame: returns the value to commit, or `None` when no
    /// task is active. A finished task reports its end value exactly once
    /// and is dropped, so the caller's scheduler can go idle.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let task = self.task?;
        if task.is_done(now) {
            self.task = None;
            Some(task.end_value)
        } else {
            Some(task.value_at(now))
        }
    }
}
