use crate::surface::Surface;
use crate::viewport::Viewport;
use rand::rngs::StdRng;

mod intro;
mod starfield;

pub use intro::{glyph_opacity, glyph_size_px, IntroScene};
pub use starfield::{nebula, StarfieldScene};

/// Something the [`Renderer`](crate::Renderer) redraws once per display frame.
pub trait Scene: Sized {
    /// Build the populations for `viewport`; the scene keeps `rng` for recycling.
    fn spawn(viewport: Viewport, rng: StdRng) -> Self;

    /// The surface has already been resized when this is called.
    fn resize(&mut self, viewport: Viewport);

    /// Clear, draw and advance every population by one frame.
    fn frame(&mut self, surface: &mut dyn Surface);
}
