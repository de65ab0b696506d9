use crate::core::ViewerController;
use crate::render::{CanvasRenderer, ModelRenderer};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame work: advance the zoom animation, commit the interpolated
/// scale, then let the renderer consume scale/offset for its draw. All
/// of this runs on the single UI thread inside one animation callback.
pub struct FrameContext {
    pub controller: Rc<RefCell<ViewerController>>,
    pub renderer: Rc<RefCell<CanvasRenderer>>,
    pub last_instant: Instant,
}

impl FrameContext {
    /// Returns true while an animation task is still active, i.e. the
    /// scheduler should request another frame.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let (scale, offset, animating) = {
            let mut controller = self.controller.borrow_mut();
            let animating = controller.tick(now);
            (controller.scale(), controller.offset(), animating)
        };
        self.renderer.borrow_mut().draw(scale, offset, dt_sec);
        animating
    }
}

struct SchedulerInner {
    raf_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// `requestAnimationFrame` wrapper with an explicit, cancellable handle.
/// The tick re-requests itself only while the controller reports an
/// active animation, so the loop self-cancels when idle; gesture and
/// command paths call `schedule()` to wake it for a redraw.
pub struct FrameScheduler {
    inner: Rc<SchedulerInner>,
}

impl FrameScheduler {
    pub fn new(ctx: Rc<RefCell<FrameContext>>) -> Rc<Self> {
        let inner = Rc::new(SchedulerInner {
            raf_id: Cell::new(None),
            tick: RefCell::new(None),
        });
        let inner_tick = inner.clone();
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            inner_tick.raf_id.set(None);
            if ctx.borrow_mut().frame() {
                request(&inner_tick);
            }
        }) as Box<dyn FnMut()>));
        Rc::new(Self { inner })
    }

    /// Request a frame if none is pending. Idempotent within a frame.
    pub fn schedule(&self) {
        request(&self.inner);
    }

    /// Drop any pending frame request.
    pub fn cancel(&self) {
        if let Some(id) = self.inner.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

fn request(inner: &Rc<SchedulerInner>) {
    if inner.raf_id.get().is_some() {
        return;
    }
    if let Some(w) = web::window() {
        let tick = inner.tick.borrow();
        if let Some(closure) = tick.as_ref() {
            if let Ok(id) = w.request_animation_frame(closure.as_ref().unchecked_ref()) {
                inner.raf_id.set(Some(id));
            }
        }
    }
}
