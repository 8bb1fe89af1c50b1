use crate::constants::*;
use crate::paint::{clamp_unit, Glow, Rgba};
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Point of light circling the focal anchor on a fixed ring.
#[derive(Clone, Debug)]
pub struct Sparkle {
    pub angle: f32,
    pub size: f32,
    pub opacity: f32,
    pub pulse_speed: f32,
}

impl Sparkle {
    /// Sparkles are spread evenly around the ring by `index`.
    pub fn spawn<R: Rng + ?Sized>(index: usize, count: usize, rng: &mut R) -> Self {
        Self {
            angle: index as f32 / count.max(1) as f32 * TAU,
            size: SPARKLE_SIZE.sample(rng),
            opacity: SPARKLE_OPACITY.sample(rng),
            pulse_speed: SPARKLE_PULSE_SPEED.sample(rng),
        }
    }

    // Ranges over [-0.2, 1.0]; callers fold it back into drawable values.
    #[inline]
    fn pulse(&self, frame: u64) -> f32 {
        (frame as f32 * self.pulse_speed).sin() * SPARKLE_PULSE_GAIN + SPARKLE_PULSE_BIAS
    }

    #[inline]
    pub fn radius(&self, frame: u64) -> f32 {
        (self.size * self.pulse(frame)).abs().max(MIN_DRAW_RADIUS)
    }

    #[inline]
    pub fn alpha(&self, frame: u64) -> f32 {
        clamp_unit(self.opacity * self.pulse(frame))
    }

    pub fn position(&self, anchor: Vec2, frame: u64) -> Vec2 {
        let angle = self.angle + frame as f32 * SPARKLE_ORBIT_RATE;
        anchor + Vec2::from_angle(angle) * SPARKLE_ORBIT_RADIUS
    }

    pub fn draw(&self, surface: &mut dyn Surface, anchor: Vec2, frame: u64) {
        let glow = Glow::new(Rgba::WHITE.with_alpha(WHITE_GLOW_ALPHA), SPARKLE_GLOW_BLUR);
        surface.fill_circle(
            self.position(anchor, frame),
            self.radius(frame),
            Rgba::WHITE.with_alpha(self.alpha(frame)),
            Some(glow),
        );
    }
}
