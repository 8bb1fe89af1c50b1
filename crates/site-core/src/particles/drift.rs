use crate::constants::*;
use crate::paint::{clamp_unit, Rgba};
use crate::sample::up_to;
use crate::surface::Surface;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

/// Dust mote that floats upward, pulsing in brightness.
#[derive(Clone, Debug)]
pub struct DriftParticle {
    pub pos: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub phase: f32,
    pub speed: f32,
    pub spin: f32,
}

impl DriftParticle {
    pub fn spawn<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(up_to(rng, viewport.w()), up_to(rng, viewport.h())),
            radius: DRIFT_RADIUS.sample(rng),
            opacity: DRIFT_OPACITY.sample(rng),
            phase: DRIFT_PHASE.sample(rng),
            speed: DRIFT_SPEED.sample(rng),
            spin: DRIFT_SPIN.sample(rng),
        }
    }

    #[inline]
    pub fn pulsed_opacity(&self, frame: u64) -> f32 {
        let pulse = (frame as f32 * DRIFT_PULSE_RATE + self.phase).sin() * 0.5 + 0.5;
        clamp_unit(self.opacity * pulse)
    }

    pub fn draw(&self, surface: &mut dyn Surface, frame: u64) {
        surface.fill_circle(
            self.pos,
            self.radius.max(MIN_DRAW_RADIUS),
            Rgba::WHITE.with_alpha(self.pulsed_opacity(frame)),
            None,
        );
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.pos.y -= self.speed;
        self.phase += self.spin;
        if self.pos.y < -RECYCLE_MARGIN {
            self.recycle(viewport, rng);
        }
    }

    fn recycle<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.pos = Vec2::new(up_to(rng, viewport.w()), viewport.h() + RECYCLE_MARGIN);
        self.opacity = DRIFT_OPACITY.sample(rng);
    }
}
