/// Page-chrome element ids and renderer tuning for the web front-end.
///
/// Interaction tuning (zoom bounds, step, animation duration, drag
/// threshold) lives in `core/constants.rs`; everything here is glue.

// Optional toolbar buttons wired when present in the page
pub const BTN_ZOOM_IN: &str = "zoom-in";
pub const BTN_ZOOM_OUT: &str = "zoom-out";
pub const BTN_ZOOM_RESET: &str = "zoom-reset";
pub const BTN_LOCK_TOGGLE: &str = "lock-toggle";

// Loading overlay element ids
pub const LOAD_OVERLAY_ID: &str = "load-overlay";
pub const LOAD_PROGRESS_ID: &str = "load-progress";

// Renderer placeholder tuning
pub const MODEL_BASE_SIZE_PX: f64 = 320.0; // unscaled model box edge
pub const ACTION_FLASH_SEC: f32 = 0.8; // how long the last action name stays visible
