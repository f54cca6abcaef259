use crate::dom::DomCaption;
use crate::input::direction_for_key;
use gallery_core::{NavigationController, PickOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_global_keydown(controller: Rc<RefCell<NavigationController>>, caption: DomCaption) {
    let mut caption = caption;
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() {
            return;
        }
        let Some(direction) = direction_for_key(&ev.key()) else {
            return;
        };
        if let PickOutcome::Started(req) = controller.borrow_mut().navigate(direction, &mut caption) {
            log::info!("[key] {} -> artwork {}", ev.key(), req.target_index);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
