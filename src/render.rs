//! Renderer collaborator seam plus a minimal 2D-canvas stand-in.
//!
//! The real character renderer is external to the viewport controller;
//! this stub only consumes the committed scale/offset on its own draw
//! cycle and reports asset-load progress outward. It never writes back
//! into controller state.

use crate::constants::{ACTION_FLASH_SEC, MODEL_BASE_SIZE_PX};
use crate::core::ActionSink;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Stage/percentage report emitted while the model asset loads.
/// Read-only input for UI display; the controller never consumes it.
#[derive(Clone, Debug)]
pub struct LoadProgress {
    pub stage: &'static str,
    pub progress: u32,
}

/// Host-page callbacks for asset loading, informational only.
pub struct LoadCallbacks {
    pub on_progress: Box<dyn Fn(LoadProgress)>,
    pub on_complete: Box<dyn Fn()>,
    pub on_error: Box<dyn Fn(&str, &str)>,
}

/// What the viewer needs from a renderer: accept action requests and
/// draw the model at the committed scale/offset.
pub trait ModelRenderer: ActionSink {
    fn draw(&mut self, scale: f32, offset: Vec2, dt_sec: f32);
}

/// 2D-canvas placeholder renderer: draws the loaded model image (or a
/// simple figure until one arrives) and flashes the last action name.
pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    image: Option<web::HtmlImageElement>,
    action_flash: Option<(String, f32)>,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            image: None,
            action_flash: None,
        })
    }

    fn draw_placeholder(&self, cx: f64, cy: f64, size: f64) {
        // Stand-in figure: body box plus head circle.
        self.ctx.set_fill_style_str("#3b4252");
        self.ctx
            .fill_rect(cx - size * 0.25, cy - size * 0.15, size * 0.5, size * 0.6);
        self.ctx.set_fill_style_str("#4c566a");
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(cx, cy - size * 0.3, size * 0.18, 0.0, std::f64::consts::TAU);
        self.ctx.fill();
    }
}

impl ActionSink for CanvasRenderer {
    fn play_action(&mut self, name: &str) {
        // Fire-and-forget: unknown names are accepted as-is.
        log::info!("[render] play action {}", name);
        self.action_flash = Some((name.to_string(), ACTION_FLASH_SEC));
    }
}

impl ModelRenderer for CanvasRenderer {
    fn draw(&mut self, scale: f32, offset: Vec2, dt_sec: f32) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        let size = MODEL_BASE_SIZE_PX * scale as f64;
        let cx = w * 0.5 + offset.x as f64;
        let cy = h * 0.5 + offset.y as f64;
        match &self.image {
            Some(img) => {
                _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    cx - size * 0.5,
                    cy - size * 0.5,
                    size,
                    size,
                );
            }
            None => self.draw_placeholder(cx, cy, size),
        }

        if let Some((name, ttl)) = self.action_flash.take() {
            self.ctx.set_fill_style_str("#cfe7ff");
            self.ctx.set_font("13px system-ui");
            _ = self.ctx.fill_text(&name, 12.0, 20.0);
            let remaining = ttl - dt_sec;
            if remaining > 0.0 {
                self.action_flash = Some((name, remaining));
            }
        }
    }
}

/// Kick off loading the model image. Progress, completion and errors are
/// reported through `callbacks`; the installed image is picked up by the
/// next draw.
pub fn load_model(
    renderer: Rc<RefCell<CanvasRenderer>>,
    path: &str,
    callbacks: Rc<LoadCallbacks>,
) -> anyhow::Result<()> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    (callbacks.on_progress)(LoadProgress {
        stage: "fetch",
        progress: 0,
    });

    {
        let renderer = renderer.clone();
        let callbacks_ok = callbacks.clone();
        let img_ok = img.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            (callbacks_ok.on_progress)(LoadProgress {
                stage: "decode",
                progress: 100,
            });
            renderer.borrow_mut().image = Some(img_ok.clone());
            (callbacks_ok.on_complete)();
        }) as Box<dyn FnMut()>);
        img.set_onload(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    {
        let callbacks_err = callbacks.clone();
        let path_err = path.to_string();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            (callbacks_err.on_error)(&path_err, "image failed to load");
        }) as Box<dyn FnMut()>);
        img.set_onerror(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    img.set_src(path);
    Ok(())
}
