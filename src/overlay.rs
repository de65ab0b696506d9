use crate::constants::{LOAD_OVERLAY_ID, LOAD_PROGRESS_ID};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOAD_OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOAD_OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Update the loading line with the renderer's reported stage/progress.
pub fn update_progress(document: &web::Document, stage: &str, progress: u32) {
    if let Some(el) = document.get_element_by_id(LOAD_PROGRESS_ID) {
        el.set_text_content(Some(&format!("{} … {}%", stage, progress.min(100))));
    }
}

/// Surface a load failure in the overlay. Purely informational; the
/// controller's state is untouched.
pub fn show_error(document: &web::Document, path: &str, detail: &str) {
    show(document);
    if let Some(el) = document.get_element_by_id(LOAD_PROGRESS_ID) {
        el.set_text_content(Some(&format!("failed to load {}: {}", path, detail)));
    }
}
