use crate::core::ViewerController;
use crate::frame::FrameScheduler;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    controller: &Rc<RefCell<ViewerController>>,
    scheduler: &Rc<FrameScheduler>,
) {
    let key = ev.key();
    match key.as_str() {
        "+" | "=" => {
            controller.borrow_mut().zoom_in(Instant::now());
            scheduler.schedule();
            ev.prevent_default();
        }
        "-" | "_" => {
            controller.borrow_mut().zoom_out(Instant::now());
            scheduler.schedule();
            ev.prevent_default();
        }
        "0" => {
            controller.borrow_mut().reset_zoom(Instant::now());
            scheduler.schedule();
        }
        "l" | "L" => {
            let mut c = controller.borrow_mut();
            if c.is_locked() {
                c.unlock();
            } else {
                c.lock();
            }
            log::info!("[keys] position lock={}", c.is_locked());
        }
        _ => {}
    }
}

pub fn wire_global_keydown(
    controller: Rc<RefCell<ViewerController>>,
    scheduler: Rc<FrameScheduler>,
) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &controller, &scheduler);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
