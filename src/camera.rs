use gallery_core::{ndc_from_canvas_px, Camera, Ray};
use glam::Vec2;
use web_sys as web;

/// Gallery camera matching the canvas' current aspect ratio.
#[inline]
pub fn canvas_camera(canvas: &web::HtmlCanvasElement) -> Camera {
    let mut cam = Camera::gallery(1.0);
    cam.set_aspect_from_size(canvas.width(), canvas.height());
    cam
}

/// Compute a world-space ray from canvas backing-store pixel coordinates.
#[inline]
pub fn screen_to_world_ray(canvas: &web::HtmlCanvasElement, px: Vec2) -> Ray {
    let ndc = ndc_from_canvas_px(px, canvas.width() as f32, canvas.height() as f32);
    canvas_camera(canvas).ray_from_ndc(ndc)
}
