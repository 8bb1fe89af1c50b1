use crate::constants::*;
use crate::paint::{clamp_unit, Rgba};
use crate::sample::up_to;
use crate::surface::Surface;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

/// Background star: twinkles by bouncing its opacity and creeps upward.
#[derive(Clone, Debug)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub speed: f32,
    pub twinkle: f32,
}

impl Star {
    pub fn spawn<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(up_to(rng, viewport.w()), up_to(rng, viewport.h())),
            size: STAR_SIZE.sample(rng),
            opacity: STAR_OPACITY.sample(rng),
            speed: STAR_SPEED.sample(rng),
            twinkle: STAR_TWINKLE.sample(rng),
        }
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.opacity += self.twinkle;
        if self.opacity > 1.0 || self.opacity < 0.0 {
            self.twinkle = -self.twinkle;
        }

        self.pos.y -= self.speed;
        if self.pos.y < -RECYCLE_MARGIN {
            self.pos = Vec2::new(up_to(rng, viewport.w()), viewport.h() + RECYCLE_MARGIN);
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(
            self.pos,
            self.size.max(MIN_DRAW_RADIUS),
            Rgba::WHITE.with_alpha(clamp_unit(self.opacity)),
            None,
        );
    }
}
