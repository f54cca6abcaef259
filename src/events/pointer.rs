use crate::camera;
use crate::dom::DomCaption;
use crate::input;
use gallery_core::{pick, GalleryLayout, Ignored, NavigationController, PickOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ClickWiring {
    pub canvas: web::HtmlCanvasElement,
    pub controller: Rc<RefCell<NavigationController>>,
    pub layout: Rc<GalleryLayout>,
    pub caption: DomCaption,
}

pub fn wire_click(w: ClickWiring) {
    let canvas_for_listener = w.canvas.clone();
    let mut caption = w.caption.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::mouse_canvas_px(&ev, &w.canvas);
        let ray = camera::screen_to_world_ray(&w.canvas, pos);

        let mut controller = w.controller.borrow_mut();
        let hits = pick(&ray, &w.layout, controller.rotation());
        let outcome = if hits.is_empty() {
            controller.on_pointer_miss()
        } else {
            controller.on_pointer_hit(&hits, &mut caption)
        };
        match outcome {
            PickOutcome::Started(req) => {
                log::info!("[click] {:?} arrow -> artwork {}", req.direction, req.target_index);
            }
            PickOutcome::Ignored(Ignored::Busy) => {
                log::debug!("[click] still turning, ignored");
            }
            PickOutcome::Ignored(_) => {}
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ = canvas_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
