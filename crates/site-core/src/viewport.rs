use crate::constants::{ANCHOR_OFFSET_X, ANCHOR_OFFSET_Y};
use glam::Vec2;

/// Drawing area in device pixels, mirrored from the window's inner size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build from the CSS-pixel floats reported by `window.innerWidth/innerHeight`.
    pub fn from_inner(width: f64, height: f64) -> Self {
        let clamp = |v: f64| if v.is_finite() && v > 0.0 { v as u32 } else { 0 };
        Self::new(clamp(width), clamp(height))
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn h(&self) -> f32 {
        self.height as f32
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.w() * 0.5, self.h() * 0.5)
    }

    /// Point the sparkles orbit and the focal glyph sits on.
    #[inline]
    pub fn focal_anchor(&self) -> Vec2 {
        self.center() + Vec2::new(ANCHOR_OFFSET_X, ANCHOR_OFFSET_Y)
    }
}
