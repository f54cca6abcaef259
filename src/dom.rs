use crate::constants::{ARTIST_ID, TITLE_ID};
use gallery_core::CaptionSink;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("[dom] missing #{}; caption field disabled", id);
    }
    el.and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Caption backed by the `#title` and `#artist` elements.
///
/// Missing elements are tolerated; writes to them become no-ops.
#[derive(Clone)]
pub struct DomCaption {
    title: Option<web::HtmlElement>,
    artist: Option<web::HtmlElement>,
}

impl DomCaption {
    pub fn from_document(document: &web::Document) -> Self {
        Self {
            title: html_element(document, TITLE_ID),
            artist: html_element(document, ARTIST_ID),
        }
    }

    fn fields(&self) -> impl Iterator<Item = &web::HtmlElement> {
        self.title.iter().chain(self.artist.iter())
    }
}

impl CaptionSink for DomCaption {
    fn set_visible(&mut self, visible: bool) {
        let opacity = if visible { "1" } else { "0" };
        for el in self.fields() {
            let _ = el.style().set_property("opacity", opacity);
        }
    }

    fn set_text(&mut self, title: &str, artist: &str) {
        if let Some(el) = &self.title {
            el.set_inner_text(title);
        }
        if let Some(el) = &self.artist {
            el.set_inner_text(artist);
        }
    }
}
