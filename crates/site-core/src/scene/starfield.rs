use super::Scene;
use crate::constants::{NEBULA_STOPS, STAR_COUNT};
use crate::paint::{RadialGradient, Rgba};
use crate::particles::Star;
use crate::surface::Surface;
use crate::viewport::Viewport;
use rand::rngs::StdRng;

/// Ambient background behind the content sections.
pub struct StarfieldScene {
    viewport: Viewport,
    stars: Vec<Star>,
    rng: StdRng,
}

impl StarfieldScene {
    pub fn new(viewport: Viewport, mut rng: StdRng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star::spawn(viewport, &mut rng))
            .collect();
        Self {
            viewport,
            stars,
            rng,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }
}

impl Scene for StarfieldScene {
    fn spawn(viewport: Viewport, rng: StdRng) -> Self {
        Self::new(viewport, rng)
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn frame(&mut self, surface: &mut dyn Surface) {
        surface.clear();
        for star in self.stars.iter_mut() {
            star.advance(self.viewport, &mut self.rng);
            star.draw(surface);
        }
        surface.fill_radial(&nebula(self.viewport));
    }
}

/// Faint wash centered on the viewport, fading out at one viewport width.
pub fn nebula(viewport: Viewport) -> RadialGradient {
    NEBULA_STOPS.iter().fold(
        RadialGradient::new(viewport.center(), 0.0, viewport.w()),
        |g, &(offset, rgb, alpha)| g.stop(offset, Rgba::from_rgb(rgb, alpha)),
    )
}
