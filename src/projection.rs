use crate::constants::*;
use crate::scene::PictureParams;

/// Smoothed pointer state for one frame, snapshotted by the animation driver
/// and passed to every picture's layout computation within the same tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxInput {
    /// Lateral parallax offset, the smoothed horizontal pointer signal.
    pub tx: f32,
    /// Depth parallax offset, the smoothed vertical pointer signal.
    pub tz: f32,
}

/// On-screen placement of one picture for one frame, in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PictureLayout {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub halo_h: f32,
    pub halo_v: f32,
    pub font_size: f32,
}

impl PictureLayout {
    /// Caption baseline, below the bitmap by a couple of projected font sizes.
    #[inline]
    pub fn caption_baseline(&self) -> f32 {
        self.y + self.h + self.font_size * CAPTION_GAP_FONT_FACTOR
    }
}

/// Depth of a picture once the vertical pointer signal is folded in.
#[inline]
pub fn effective_depth(base_depth: f32, tz: f32) -> f32 {
    base_depth + (tz - DEPTH_RECENTER) * DEPTH_SPAN
}

/// Perspective divide: 1.0 at depth zero, shrinking as depth grows.
#[inline]
pub fn projected_scale(depth: f32) -> f32 {
    CAMERA_DISTANCE / (CAMERA_DISTANCE + depth)
}

/// Compute the frame's on-screen placement for one picture, or `None` when it
/// is culled.
///
/// Culling happens in two places: behind-camera (effective depth at or below
/// [`CULL_DEPTH`]) and horizontal bounds (the halo-padded extent misses
/// `[0, surface_w]`). There is deliberately no vertical bounds cull: pictures
/// in this scene only ever leave the frame horizontally.
pub fn layout(
    params: &PictureParams,
    natural_w: f32,
    natural_h: f32,
    input: ParallaxInput,
    surface_w: f32,
    surface_h: f32,
) -> Option<PictureLayout> {
    let depth = effective_depth(params.base_depth, input.tz);
    if depth <= CULL_DEPTH {
        return None;
    }
    let projected = projected_scale(depth);
    let scale = params.base_scale * projected * (surface_w / REFERENCE_SURFACE_WIDTH);

    let w = natural_w * scale;
    let h = natural_h * scale;
    let x = (params.base_x * projected + 0.5 + input.tx * PARALLAX_X_GAIN) * surface_w - w * 0.5;
    let y = (params.base_y * projected + 0.5) * surface_h - h * 0.5;

    let halo_h = params.halo_h * scale;
    let halo_v = params.halo_v * scale;
    if x + w + halo_h * 2.0 <= 0.0 || x - halo_h * 2.0 >= surface_w {
        return None;
    }

    Some(PictureLayout {
        x,
        y,
        w,
        h,
        halo_h,
        halo_v,
        font_size: params.caption_font_size * projected,
    })
}
