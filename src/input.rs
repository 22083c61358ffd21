use crate::constants::{INITIAL_RAW_X, INITIAL_RAW_Y, SMOOTHING_DIVISOR};
use glam::Vec2;

/// Pointer state shared between the move-event handlers and the frame loop.
///
/// `raw` is written synchronously by every pointer/touch move; `smoothed`
/// chases it one exponential step per animation tick, which is what gives the
/// parallax its inertia.
#[derive(Clone, Copy, Debug)]
pub struct PointerFilter {
    pub raw: Vec2,
    pub smoothed: Vec2,
}

impl Default for PointerFilter {
    fn default() -> Self {
        Self {
            raw: Vec2::new(INITIAL_RAW_X, INITIAL_RAW_Y),
            smoothed: Vec2::ZERO,
        }
    }
}

impl PointerFilter {
    #[inline]
    pub fn record(&mut self, raw: Vec2) {
        self.raw = raw;
    }

    /// One smoothing step. For constant raw input the error shrinks by a
    /// fixed ratio each tick, so the smoothed value converges without ever
    /// overshooting.
    #[inline]
    pub fn tick(&mut self) {
        self.smoothed += (self.raw - self.smoothed) / SMOOTHING_DIVISOR;
    }
}

/// Map client-space pointer coordinates onto [-0.5, 0.5] against the canvas
/// backing size. The backing store is sized as CSS pixels x dpr, so client
/// coordinates are scaled by dpr before normalizing.
#[inline]
pub fn normalize_pointer(client: Vec2, surface: Vec2, dpr: f32) -> Vec2 {
    client * dpr / surface - Vec2::splat(0.5)
}
