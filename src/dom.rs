use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a click handler to the element with `element_id`. Chrome
/// elements are optional; a missing one is logged and skipped.
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::debug!("[ui] no #{element_id} in page, skipping");
        return;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Bring the canvas backing store to CSS size * devicePixelRatio.
/// Returns true when the backing size actually changed — mutating
/// width/height clears the bitmap, so the caller must repaint then.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    let dpr = w.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    if w_px == canvas.width() && h_px == canvas.height() {
        return false;
    }
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    true
}

/// Re-sync the backing size on window resize, invoking `on_resized`
/// after each size change so a fresh frame repaints the blanked canvas.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, on_resized: impl Fn() + 'static) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if sync_canvas_backing_size(&canvas_resize) {
            on_resized();
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
