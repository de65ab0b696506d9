use crate::core::{ActionDispatcher, GestureOutcome, GestureRouter, ViewerController};
use crate::frame::FrameScheduler;
use crate::render::CanvasRenderer;
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the pointer/wheel handlers need, cloned into each closure.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub controller: Rc<RefCell<ViewerController>>,
    pub router: Rc<RefCell<GestureRouter>>,
    pub dispatcher: Rc<RefCell<ActionDispatcher<StdRng>>>,
    pub renderer: Rc<RefCell<CanvasRenderer>>,
    pub scheduler: Rc<FrameScheduler>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
    wire_wheel(&w);
}

/// Pointer position in canvas backing pixels (CSS px scaled by the
/// backing-store ratio), matching the space the renderer draws in.
#[inline]
fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);
        w.router.borrow_mut().pointer_down(pos.x, pos.y);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let locked = w.controller.borrow().is_locked();
        let outcome = w.router.borrow_mut().pointer_move(pos.x, pos.y, locked);
        if let GestureOutcome::DragDelta(delta) = outcome {
            w.controller.borrow_mut().apply_drag_delta(delta);
            w.scheduler.schedule();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.router.borrow_mut().pointer_up() == GestureOutcome::Click {
            let action = w
                .dispatcher
                .borrow_mut()
                .dispatch_random(&mut *w.renderer.borrow_mut());
            log::info!("[pointer] click -> action {}", action.name());
            w.scheduler.schedule();
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointercancel(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.router.borrow_mut().cancel();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Wheel events bypass the pointer state machine entirely: each one
/// retargets the zoom animation in flight.
fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.controller
            .borrow_mut()
            .zoom_by_wheel(ev.delta_y(), Instant::now());
        w.scheduler.schedule();
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
