use crate::constants::{DEFAULT_HALO_H, DEFAULT_HALO_V};

/// Static placement and sizing parameters for one gallery picture.
///
/// Everything here is fixed at construction; per-frame parallax state is
/// passed into the projection as a separate value rather than stored on the
/// picture.
#[derive(Clone, Debug)]
pub struct PictureParams {
    pub url: &'static str,
    pub caption: &'static str,
    pub caption_font_size: f32,
    /// Horizontal placement in scene units; 0 is screen center, ±0.5 roughly
    /// a quarter-screen off center at unit projected scale.
    pub base_x: f32,
    pub base_y: f32,
    /// Resting depth; larger is further from the camera.
    pub base_depth: f32,
    pub base_scale: f32,
    pub halo_h: f32,
    pub halo_v: f32,
}

impl PictureParams {
    pub fn new(
        url: &'static str,
        caption: &'static str,
        caption_font_size: f32,
        base_x: f32,
        base_y: f32,
        base_depth: f32,
        base_scale: f32,
    ) -> Self {
        Self {
            url,
            caption,
            caption_font_size,
            base_x,
            base_y,
            base_depth,
            base_scale,
            halo_h: DEFAULT_HALO_H,
            halo_v: DEFAULT_HALO_V,
        }
    }
}

/// The gallery scene: seven pictures alternating left/right, stacked from the
/// deepest at the front of the list to the nearest at the back. List order is
/// draw order; there is no z-sorting.
pub fn pictures() -> Vec<PictureParams> {
    vec![
        PictureParams::new("images/glacier-lake.jpg", "Glacier Lake", 8.0, 0.5, 0.0, 2.7, 0.25),
        PictureParams::new("images/pine-ridge.jpg", "Pine Ridge", 8.0, -0.5, 0.0, 2.3, 0.25),
        PictureParams::new("images/sea-stacks.jpg", "Sea Stacks at Dusk", 8.0, 0.5, 0.0, 1.9, 0.25),
        PictureParams::new("images/birch-hollow.jpg", "Birch Hollow", 8.0, -0.5, 0.0, 1.5, 0.25),
        PictureParams::new("images/dune-field.jpg", "Dune Field", 8.0, 0.5, 0.0, 1.1, 0.25),
        PictureParams::new("images/storm-front.jpg", "Storm Front", 8.0, -0.5, 0.0, 0.7, 0.25),
        PictureParams::new("images/river-bend.jpg", "River Bend", 8.0, 0.5, 0.0, 0.3, 0.25),
    ]
}
