// Host-side tests for the pure projection/layout math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod scene {
    include!("../src/scene.rs");
}
mod projection {
    include!("../src/projection.rs");
}

use constants::*;
use projection::*;
use scene::PictureParams;

fn picture_at(base_x: f32, base_y: f32, base_depth: f32) -> PictureParams {
    PictureParams::new("images/test.jpg", "Test", 8.0, base_x, base_y, base_depth, 0.25)
}

// Parallax input with tz = 0.5 contributes no depth offset, so effective
// depth equals base depth.
const NEUTRAL_TZ: ParallaxInput = ParallaxInput { tx: 0.0, tz: 0.5 };

#[test]
fn projected_scale_is_one_at_zero_depth() {
    assert_eq!(projected_scale(0.0), 1.0);
}

#[test]
fn projected_scale_strictly_decreasing() {
    // Monotonic over the visible range and a little behind the camera.
    let mut depth = -0.79_f32;
    let mut prev = projected_scale(depth);
    while depth < 3.0 {
        depth += 0.01;
        let next = projected_scale(depth);
        assert!(
            next < prev,
            "scale not decreasing at depth {}: {} >= {}",
            depth,
            next,
            prev
        );
        prev = next;
    }
}

#[test]
fn effective_depth_reference_scenario() {
    // base_depth = 2.7 with tz = 0 gives 2.7 - 1.3 = 1.4, scale 0.8/2.2.
    let depth = effective_depth(2.7, 0.0);
    assert!((depth - 1.4).abs() < 1e-6);
    let scale = projected_scale(depth);
    assert!((scale - 0.8 / 2.2).abs() < 1e-6);
}

#[test]
fn layout_culls_behind_camera() {
    // With neutral tz, effective depth equals base depth exactly.
    // Exactly at the cull threshold: not drawn.
    let at_threshold = picture_at(0.0, 0.0, CULL_DEPTH);
    assert!(layout(&at_threshold, 100.0, 100.0, NEUTRAL_TZ, 1000.0, 800.0).is_none());
    // Well behind it: not drawn.
    let behind = picture_at(0.0, 0.0, -1.0);
    assert!(layout(&behind, 100.0, 100.0, NEUTRAL_TZ, 1000.0, 800.0).is_none());
    // Just in front: drawn.
    let in_front = picture_at(0.0, 0.0, CULL_DEPTH + 0.01);
    assert!(layout(&in_front, 100.0, 100.0, NEUTRAL_TZ, 1000.0, 800.0).is_some());
    // The vertical pointer signal alone can push a picture behind the camera:
    // base depth 0 with tz = 0 sits at effective depth -1.3.
    let parked = picture_at(0.0, 0.0, 0.0);
    let input = ParallaxInput { tx: 0.0, tz: 0.0 };
    assert!(layout(&parked, 100.0, 100.0, input, 1000.0, 800.0).is_none());
}

#[test]
fn layout_scales_with_surface_width() {
    let picture = picture_at(0.0, 0.0, 0.0);
    let narrow = layout(&picture, 400.0, 300.0, NEUTRAL_TZ, 700.0, 800.0).unwrap();
    let wide = layout(&picture, 400.0, 300.0, NEUTRAL_TZ, 1400.0, 800.0).unwrap();
    // At the reference width, on-screen size = natural * base_scale * projected.
    assert!((narrow.w - 400.0 * 0.25).abs() < 1e-3);
    assert!((narrow.h - 300.0 * 0.25).abs() < 1e-3);
    // Doubling the surface width doubles the on-screen size.
    assert!((wide.w - narrow.w * 2.0).abs() < 1e-3);
    assert!((wide.h - narrow.h * 2.0).abs() < 1e-3);
}

#[test]
fn layout_centers_at_origin_params() {
    // base_x = base_y = 0, no parallax: picture centered on the surface.
    let picture = picture_at(0.0, 0.0, 0.0);
    let l = layout(&picture, 400.0, 300.0, NEUTRAL_TZ, 1000.0, 800.0).unwrap();
    assert!((l.x + l.w * 0.5 - 500.0).abs() < 1e-3);
    assert!((l.y + l.h * 0.5 - 400.0).abs() < 1e-3);
}

#[test]
fn layout_culls_horizontally_offscreen() {
    let input = NEUTRAL_TZ;
    // Far off the left edge, halo included.
    let left = picture_at(-10.0, 0.0, 0.0);
    assert!(layout(&left, 100.0, 100.0, input, 1000.0, 800.0).is_none());
    // Far off the right edge.
    let right = picture_at(10.0, 0.0, 0.0);
    assert!(layout(&right, 100.0, 100.0, input, 1000.0, 800.0).is_none());
    // Lateral parallax alone can push a picture out of frame.
    let centered = picture_at(0.0, 0.0, 0.0);
    let shoved = ParallaxInput { tx: 10.0, tz: 0.5 };
    assert!(layout(&centered, 100.0, 100.0, shoved, 1000.0, 800.0).is_none());
}

#[test]
fn layout_never_culls_vertically() {
    // Pictures only leave this scene horizontally; a vertically distant
    // picture still lays out.
    let high = picture_at(0.0, -50.0, 0.0);
    assert!(layout(&high, 100.0, 100.0, NEUTRAL_TZ, 1000.0, 800.0).is_some());
    let low = picture_at(0.0, 50.0, 0.0);
    assert!(layout(&low, 100.0, 100.0, NEUTRAL_TZ, 1000.0, 800.0).is_some());
}

#[test]
fn caption_font_and_baseline_follow_projection() {
    let picture = picture_at(0.0, 0.0, 0.8);
    // depth 0.8 gives projected scale 0.5
    let l = layout(&picture, 400.0, 300.0, NEUTRAL_TZ, 1000.0, 800.0).unwrap();
    assert!((l.font_size - 4.0).abs() < 1e-4);
    assert!((l.caption_baseline() - (l.y + l.h + 8.0)).abs() < 1e-3);
}

#[test]
fn halo_padding_scales_with_picture() {
    let picture = picture_at(0.0, 0.0, 0.0);
    let l = layout(&picture, 400.0, 300.0, NEUTRAL_TZ, 700.0, 800.0).unwrap();
    // scale at reference width and zero depth is base_scale
    assert!((l.halo_h - DEFAULT_HALO_H * 0.25).abs() < 1e-3);
    assert!((l.halo_v - DEFAULT_HALO_V * 0.25).abs() < 1e-3);
}
