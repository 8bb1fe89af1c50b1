use super::Scene;
use crate::constants::*;
use crate::paint::{Glow, Rgba};
use crate::particles::{DriftParticle, MotionLine, Sparkle};
use crate::surface::Surface;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;

/// Intro backdrop: drifting dust, sweeping streaks, a sparkle ring and the
/// pulsing star glyph at its center.
pub struct IntroScene {
    viewport: Viewport,
    anchor: Vec2,
    drift: Vec<DriftParticle>,
    lines: Vec<MotionLine>,
    sparkles: Vec<Sparkle>,
    frame: u64,
    rng: StdRng,
}

impl IntroScene {
    pub fn new(viewport: Viewport, mut rng: StdRng) -> Self {
        let drift = (0..DRIFT_PARTICLE_COUNT)
            .map(|_| DriftParticle::spawn(viewport, &mut rng))
            .collect();
        let sparkles = (0..SPARKLE_COUNT)
            .map(|i| Sparkle::spawn(i, SPARKLE_COUNT, &mut rng))
            .collect();
        let lines = (0..MOTION_LINE_COUNT)
            .map(|_| MotionLine::spawn(viewport, &mut rng))
            .collect();
        Self {
            viewport,
            anchor: viewport.focal_anchor(),
            drift,
            lines,
            sparkles,
            frame: 0,
            rng,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Frames drawn so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn drift(&self) -> &[DriftParticle] {
        &self.drift
    }

    pub fn drift_mut(&mut self) -> &mut [DriftParticle] {
        &mut self.drift
    }

    pub fn lines(&self) -> &[MotionLine] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut [MotionLine] {
        &mut self.lines
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    fn draw_glyph(&self, surface: &mut dyn Surface) {
        let glow = Glow::new(Rgba::WHITE.with_alpha(WHITE_GLOW_ALPHA), GLYPH_GLOW_BLUR);
        surface.fill_glyph(
            FOCAL_GLYPH,
            self.anchor,
            glyph_size_px(self.frame),
            Rgba::WHITE.with_alpha(glyph_opacity(self.frame)),
            Some(glow),
        );
    }
}

impl Scene for IntroScene {
    fn spawn(viewport: Viewport, rng: StdRng) -> Self {
        Self::new(viewport, rng)
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.anchor = viewport.focal_anchor();
    }

    fn frame(&mut self, surface: &mut dyn Surface) {
        let frame = self.frame;
        let viewport = self.viewport;
        surface.clear();

        for p in self.drift.iter_mut() {
            p.draw(surface, frame);
            p.advance(viewport, &mut self.rng);
        }
        for line in self.lines.iter_mut() {
            line.draw(surface, frame);
            line.advance(viewport, &mut self.rng);
        }
        for s in &self.sparkles {
            s.draw(surface, self.anchor, frame);
        }
        self.draw_glyph(surface);

        self.frame += 1;
    }
}

/// Linear fade-in over the first frames, then fully opaque.
#[inline]
pub fn glyph_opacity(frame: u64) -> f32 {
    (frame as f32 / GLYPH_FADE_IN_FRAMES).min(1.0)
}

#[inline]
pub fn glyph_size_px(frame: u64) -> f32 {
    let pulse = (frame as f32 * GLYPH_PULSE_RATE).sin() * GLYPH_PULSE_GAIN + GLYPH_PULSE_BIAS;
    GLYPH_BASE_SIZE_PX * pulse
}
