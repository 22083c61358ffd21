// Projection, smoothing and layout tuning constants.

// Perspective projection
pub const CAMERA_DISTANCE: f32 = 0.8; // virtual camera distance; scale = d / (d + depth)
pub const DEPTH_RECENTER: f32 = 0.5; // recenters the smoothed vertical signal around 0
pub const DEPTH_SPAN: f32 = 2.6; // maps the recentered signal onto a depth-offset range
pub const CULL_DEPTH: f32 = -0.7; // at or behind this effective depth, nothing is drawn

// Layout
pub const REFERENCE_SURFACE_WIDTH: f32 = 700.0; // picture sizes are authored against this width
pub const PARALLAX_X_GAIN: f32 = 1.5; // horizontal parallax amplification over vertical
pub const CAPTION_GAP_FONT_FACTOR: f32 = 2.0; // caption baseline offset, in projected font sizes

// Halo padding defaults (pre-scale, in reference-surface pixels)
pub const DEFAULT_HALO_H: f32 = 50.0;
pub const DEFAULT_HALO_V: f32 = 500.0;
pub const HALO_ALPHA: f64 = 0.1;

// Input smoothing
pub const SMOOTHING_DIVISOR: f32 = 30.0; // per-frame exponential approach, step = error / divisor

// Resting pointer pose before the first move event. The raw vertical value
// sits above the normalized range so the stack drifts into a tilted-forward
// pose at startup instead of opening flat.
pub const INITIAL_RAW_X: f32 = 0.0;
pub const INITIAL_RAW_Y: f32 = 0.7;
