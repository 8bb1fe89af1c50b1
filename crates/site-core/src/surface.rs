use crate::paint::{CubicCurve, Glow, LinearGradient, RadialGradient, Rgba};
use crate::viewport::Viewport;
use glam::Vec2;

/// A 2D drawing target the scenes paint into once per frame.
///
/// Implementations own the backing pixels. `resize` must leave the surface
/// exactly `viewport` sized; clearing as a side effect is expected.
pub trait Surface {
    fn viewport(&self) -> Viewport;

    fn resize(&mut self, viewport: Viewport);

    fn clear(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Option<Glow>);

    fn stroke_curve(
        &mut self,
        curve: &CubicCurve,
        paint: &LinearGradient,
        width: f32,
        glow: Option<Glow>,
    );

    fn fill_glyph(
        &mut self,
        glyph: char,
        center: Vec2,
        size_px: f32,
        color: Rgba,
        glow: Option<Glow>,
    );

    /// Cover the whole surface with `gradient`.
    fn fill_radial(&mut self, gradient: &RadialGradient);
}
