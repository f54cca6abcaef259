use crate::dom::DomCaption;
use crate::render;
use gallery_core::{GalleryLayout, NavigationController, TickOutcome};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct FrameContext {
    pub controller: Rc<RefCell<NavigationController>>,
    pub layout: Rc<GalleryLayout>,
    pub caption: DomCaption,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let rotation = {
            let mut controller = self.controller.borrow_mut();
            if let TickOutcome::Completed { index } = controller.on_tick(dt, &mut self.caption) {
                log::debug!("[frame] transition to {} landed", index);
            }
            controller.rotation()
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&self.layout, rotation) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    layout: &GalleryLayout,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, layout).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let cb: Option<JsValue> = tick.borrow().as_ref().map(|c| {
        let v: &JsValue = c.as_ref();
        v.clone()
    });
    let (Some(w), Some(cb)) = (web::window(), cb) else {
        return;
    };
    let _ = w.request_animation_frame(cb.unchecked_ref());
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
