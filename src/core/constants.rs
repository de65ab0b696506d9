// Fixed interaction configuration. None of these are runtime-mutable;
// the host page gets commands, not knobs.

// Zoom bounds and stepping
pub const SCALE_MIN: f32 = 0.5;
pub const SCALE_MAX: f32 = 2.5;
pub const SCALE_STEP: f32 = 0.1;
pub const SCALE_DEFAULT: f32 = 1.0; // reset target, inside [min, max] by construction

// Zoom animation
pub const ZOOM_ANIM_DURATION_MS: f64 = 200.0;

// Pointer gesture classification
pub const DRAG_THRESHOLD_PX: f32 = 4.0; // movement below this resolves as a click
