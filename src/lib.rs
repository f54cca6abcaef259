#![cfg(target_arch = "wasm32")]
use gallery_core::{default_catalog, GalleryLayout, GalleryState, NavigationController, NavigationParams};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn build_controller() -> anyhow::Result<NavigationController> {
    let gallery = GalleryState::new(default_catalog())?;
    log::info!(
        "[gallery] {} artworks, facing '{}'",
        gallery.len(),
        gallery.current_artwork().title
    );
    Ok(NavigationController::new(gallery, NavigationParams::default()))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let controller = Rc::new(RefCell::new(build_controller()?));
    let layout = Rc::new(GalleryLayout::new(controller.borrow().gallery().len()));
    let caption = dom::DomCaption::from_document(&document);
    controller.borrow().show_current(&mut caption.clone());

    events::wire_click(events::ClickWiring {
        canvas: canvas.clone(),
        controller: controller.clone(),
        layout: layout.clone(),
        caption: caption.clone(),
    });
    events::wire_global_keydown(controller.clone(), caption.clone());

    let gpu = frame::init_gpu(&canvas, &layout).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        layout,
        caption,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
