// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_to_canvas_px_scales_for_device_pixel_ratio() {
    // 400x300 CSS box at (10, 20) backed by an 800x600 canvas (dpr = 2)
    let origin = Vec2::new(10.0, 20.0);
    let size = Vec2::new(400.0, 300.0);
    let backing = Vec2::new(800.0, 600.0);

    assert_eq!(client_to_canvas_px(origin, origin, size, backing), Vec2::ZERO);
    assert_eq!(
        client_to_canvas_px(Vec2::new(410.0, 320.0), origin, size, backing),
        backing
    );
    assert_eq!(
        client_to_canvas_px(Vec2::new(210.0, 170.0), origin, size, backing),
        Vec2::new(400.0, 300.0)
    );
}

#[test]
fn client_to_canvas_px_degenerate_rect_falls_back_to_centre() {
    let backing = Vec2::new(640.0, 480.0);
    let p = client_to_canvas_px(Vec2::new(5.0, 5.0), Vec2::ZERO, Vec2::ZERO, backing);
    assert_eq!(p, Vec2::new(320.0, 240.0));
}

#[test]
fn canvas_centre_maps_to_ndc_origin() {
    let backing = Vec2::new(800.0, 600.0);
    let px = client_to_canvas_px(
        Vec2::new(200.0, 150.0),
        Vec2::ZERO,
        Vec2::new(400.0, 300.0),
        backing,
    );
    let ndc = gallery_core::ndc_from_canvas_px(px, backing.x, backing.y);
    assert_eq!(ndc, Vec2::ZERO);
}
