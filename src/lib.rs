#![cfg(target_arch = "wasm32")]
//! Web character-model viewer: smooth-zoom / drag / click-action
//! viewport controller plus the DOM glue around it. `mount` builds the
//! whole graph and hands the host page an explicit `Viewer` handle; no
//! hidden global state.

use crate::core::{ActionDispatcher, GestureRouter, ViewerController};
use crate::frame::{FrameContext, FrameScheduler};
use crate::render::{CanvasRenderer, LoadCallbacks};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viewer-web starting");
    Ok(())
}

/// Command surface handed to the host page. All zoom changes animate;
/// requests beyond the bounds clamp silently.
#[wasm_bindgen]
pub struct Viewer {
    controller: Rc<RefCell<ViewerController>>,
    dispatcher: Rc<RefCell<ActionDispatcher<StdRng>>>,
    renderer: Rc<RefCell<CanvasRenderer>>,
    scheduler: Rc<FrameScheduler>,
}

#[wasm_bindgen]
impl Viewer {
    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&self) {
        self.controller.borrow_mut().zoom_in(Instant::now());
        self.scheduler.schedule();
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&self) {
        self.controller.borrow_mut().zoom_out(Instant::now());
        self.scheduler.schedule();
    }

    #[wasm_bindgen(js_name = resetZoom)]
    pub fn reset_zoom(&self) {
        self.controller.borrow_mut().reset_zoom(Instant::now());
        self.scheduler.schedule();
    }

    pub fn lock(&self) {
        self.controller.borrow_mut().lock();
    }

    pub fn unlock(&self) {
        self.controller.borrow_mut().unlock();
    }

    #[wasm_bindgen(js_name = isLocked)]
    pub fn is_locked(&self) -> bool {
        self.controller.borrow().is_locked()
    }

    /// Forward a named action to the renderer as-is; validation, if any,
    /// is the renderer's responsibility.
    #[wasm_bindgen(js_name = playAction)]
    pub fn play_action(&self, name: &str) {
        self.dispatcher
            .borrow_mut()
            .dispatch(&mut *self.renderer.borrow_mut(), name);
        self.scheduler.schedule();
    }
}

/// Build the viewer on the canvas with id `canvas_id` and start loading
/// the model asset at `model_path`.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, model_path: &str) -> Result<Viewer, JsValue> {
    init(canvas_id, model_path).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn init(canvas_id: &str, model_path: &str) -> anyhow::Result<Viewer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{canvas_id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let controller = Rc::new(RefCell::new(ViewerController::new()));
    let router = Rc::new(RefCell::new(GestureRouter::new()));
    let dispatcher = Rc::new(RefCell::new(ActionDispatcher::new(StdRng::from_entropy())));
    let renderer = Rc::new(RefCell::new(CanvasRenderer::new(&canvas)?));

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        controller: controller.clone(),
        renderer: renderer.clone(),
        last_instant: Instant::now(),
    }));
    let scheduler = FrameScheduler::new(frame_ctx);

    // Resizing blanks the canvas backing store; repaint on every change.
    let scheduler_resize = scheduler.clone();
    dom::wire_canvas_resize(&canvas, move || scheduler_resize.schedule());

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        controller: controller.clone(),
        router,
        dispatcher: dispatcher.clone(),
        renderer: renderer.clone(),
        scheduler: scheduler.clone(),
    });
    events::wire_global_keydown(controller.clone(), scheduler.clone());
    wire_toolbar_buttons(&document, &controller, &scheduler);

    overlay::show(&document);
    start_model_load(&renderer, model_path, &scheduler)?;

    // First paint before any interaction arrives.
    scheduler.schedule();

    Ok(Viewer {
        controller,
        dispatcher,
        renderer,
        scheduler,
    })
}

/// Wire the optional page-chrome buttons; absent elements are skipped.
fn wire_toolbar_buttons(
    document: &web::Document,
    controller: &Rc<RefCell<ViewerController>>,
    scheduler: &Rc<FrameScheduler>,
) {
    let (c, s) = (controller.clone(), scheduler.clone());
    dom::add_click_listener(document, constants::BTN_ZOOM_IN, move || {
        c.borrow_mut().zoom_in(Instant::now());
        s.schedule();
    });
    let (c, s) = (controller.clone(), scheduler.clone());
    dom::add_click_listener(document, constants::BTN_ZOOM_OUT, move || {
        c.borrow_mut().zoom_out(Instant::now());
        s.schedule();
    });
    let (c, s) = (controller.clone(), scheduler.clone());
    dom::add_click_listener(document, constants::BTN_ZOOM_RESET, move || {
        c.borrow_mut().reset_zoom(Instant::now());
        s.schedule();
    });
    let c = controller.clone();
    dom::add_click_listener(document, constants::BTN_LOCK_TOGGLE, move || {
        let mut c = c.borrow_mut();
        if c.is_locked() {
            c.unlock();
        } else {
            c.lock();
        }
        log::info!("[ui] position lock={}", c.is_locked());
    });
}

fn start_model_load(
    renderer: &Rc<RefCell<CanvasRenderer>>,
    model_path: &str,
    scheduler: &Rc<FrameScheduler>,
) -> anyhow::Result<()> {
    let scheduler_done = scheduler.clone();
    let callbacks = Rc::new(LoadCallbacks {
        on_progress: Box::new(|p| {
            if let Some(doc) = dom::window_document() {
                overlay::update_progress(&doc, p.stage, p.progress);
            }
        }),
        on_complete: Box::new(move || {
            log::info!("[load] model ready");
            if let Some(doc) = dom::window_document() {
                overlay::hide(&doc);
            }
            scheduler_done.schedule();
        }),
        on_error: Box::new(|path, detail| {
            log::error!("[load] {path}: {detail}");
            if let Some(doc) = dom::window_document() {
                overlay::show_error(&doc, path, detail);
            }
        }),
    });
    render::load_model(renderer.clone(), model_path, callbacks)
}
