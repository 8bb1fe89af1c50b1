use crate::constants::*;
use crate::paint::{CubicCurve, Glow, LinearGradient, Rgba};
use crate::sample::{direction, up_to};
use crate::surface::Surface;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

/// Horizontal streak sweeping across the middle band, bent by a sine wave.
///
/// `x` is the trailing end; the streak extends `length` px in the direction
/// of travel.
#[derive(Clone, Debug)]
pub struct MotionLine {
    pub x: f32,
    pub base_y: f32,
    pub length: f32,
    pub speed: f32,
    pub opacity: f32,
    pub direction: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub phase: f32,
}

impl MotionLine {
    pub fn spawn<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        Self {
            x: up_to(rng, viewport.w()),
            base_y: band_y(viewport, rng),
            length: LINE_LENGTH.sample(rng),
            speed: LINE_SPEED.sample(rng),
            opacity: LINE_OPACITY.sample(rng),
            direction: direction(rng),
            amplitude: LINE_AMPLITUDE.sample(rng),
            frequency: LINE_FREQUENCY.sample(rng),
            phase: LINE_PHASE.sample(rng),
        }
    }

    #[inline]
    pub fn wave(&self, frame: u64) -> f32 {
        (frame as f32 * self.frequency + self.phase).sin() * self.amplitude
    }

    #[inline]
    pub fn head_x(&self) -> f32 {
        self.x + self.length * self.direction
    }

    pub fn curve(&self, frame: u64) -> CubicCurve {
        let wave = self.wave(frame);
        let start = Vec2::new(self.x, self.base_y + wave);
        let end = Vec2::new(self.head_x(), self.base_y + wave);
        let span = end.x - start.x;
        CubicCurve {
            start,
            ctrl1: Vec2::new(start.x + span * 0.25, start.y + wave * 0.5),
            ctrl2: Vec2::new(start.x + span * 0.75, end.y + wave * 0.5),
            end,
        }
    }

    /// Brightest at the midpoint, faded toward both ends.
    pub fn gradient(&self) -> LinearGradient {
        let edge = Rgba::from_rgb(LINE_RGB, self.opacity * LINE_EDGE_FADE);
        LinearGradient::new(
            Vec2::new(self.x, self.base_y),
            Vec2::new(self.head_x(), self.base_y),
        )
        .stop(0.0, edge)
        .stop(0.5, Rgba::from_rgb(LINE_RGB, self.opacity))
        .stop(1.0, edge)
    }

    pub fn draw(&self, surface: &mut dyn Surface, frame: u64) {
        let glow = Glow::new(Rgba::from_rgb(LINE_RGB, LINE_GLOW_ALPHA), LINE_GLOW_BLUR);
        surface.stroke_curve(&self.curve(frame), &self.gradient(), LINE_WIDTH, Some(glow));
    }

    /// True once the whole streak is past the exit margin on its travel side.
    pub fn has_exited(&self, viewport: Viewport) -> bool {
        if self.direction > 0.0 {
            self.x > viewport.w() + LINE_EXIT_MARGIN
        } else {
            self.x < -LINE_EXIT_MARGIN
        }
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.x += self.speed * self.direction;
        if self.has_exited(viewport) {
            self.recycle(viewport, rng);
        }
    }

    fn recycle<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.x = if self.direction > 0.0 {
            -LINE_RESPAWN_INSET
        } else {
            viewport.w() + LINE_RESPAWN_INSET
        };
        self.base_y = band_y(viewport, rng);
        self.opacity = LINE_OPACITY.sample(rng);
        self.length = LINE_LENGTH.sample(rng);
        self.speed = LINE_SPEED.sample(rng);
        self.phase = LINE_PHASE.sample(rng);
    }
}

fn band_y<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> f32 {
    viewport.h() * 0.5 + LINE_BASE_JITTER.sample(rng)
}
