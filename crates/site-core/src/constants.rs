use crate::sample::Span;
use std::f32::consts::TAU;

// Shared animation tuning constants for the intro and starfield scenes.

// Population sizes (fixed for the lifetime of a scene)
pub const DRIFT_PARTICLE_COUNT: usize = 200;
pub const SPARKLE_COUNT: usize = 40;
pub const MOTION_LINE_COUNT: usize = 25;
pub const STAR_COUNT: usize = 150;

// Focal anchor offset from the viewport center (px)
pub const ANCHOR_OFFSET_X: f32 = -30.0;
pub const ANCHOR_OFFSET_Y: f32 = -90.0;

// Drift particles
pub const DRIFT_RADIUS: Span = Span::new(0.5, 2.5);
pub const DRIFT_OPACITY: Span = Span::new(0.1, 0.5);
pub const DRIFT_SPEED: Span = Span::new(0.1, 0.6);
pub const DRIFT_PHASE: Span = Span::new(0.0, TAU);
pub const DRIFT_SPIN: Span = Span::new(-0.01, 0.01);
pub const DRIFT_PULSE_RATE: f32 = 0.05; // radians per frame
pub const RECYCLE_MARGIN: f32 = 10.0; // px beyond the top/bottom edge

// Traveling lines
pub const LINE_LENGTH: Span = Span::new(200.0, 500.0);
pub const LINE_SPEED: Span = Span::new(2.0, 6.0);
pub const LINE_OPACITY: Span = Span::new(0.1, 0.4);
pub const LINE_AMPLITUDE: Span = Span::new(10.0, 30.0);
pub const LINE_FREQUENCY: Span = Span::new(0.01, 0.03);
pub const LINE_PHASE: Span = Span::new(0.0, TAU);
pub const LINE_BASE_JITTER: Span = Span::new(-100.0, 100.0); // around the vertical center
pub const LINE_EXIT_MARGIN: f32 = 300.0;
pub const LINE_RESPAWN_INSET: f32 = 150.0;
pub const LINE_WIDTH: f32 = 2.0;
pub const LINE_EDGE_FADE: f32 = 0.3; // gradient alpha factor at both ends
pub const LINE_RGB: [u8; 3] = [147, 112, 219];
pub const LINE_GLOW_ALPHA: f32 = 0.3;
pub const LINE_GLOW_BLUR: f32 = 15.0;

// Orbiting sparkles
pub const SPARKLE_SIZE: Span = Span::new(1.0, 3.0);
pub const SPARKLE_OPACITY: Span = Span::new(0.2, 0.8);
pub const SPARKLE_PULSE_SPEED: Span = Span::new(0.01, 0.03);
pub const SPARKLE_ORBIT_RADIUS: f32 = 30.0;
pub const SPARKLE_ORBIT_RATE: f32 = 0.001; // radians per frame
pub const SPARKLE_PULSE_GAIN: f32 = 0.6;
pub const SPARKLE_PULSE_BIAS: f32 = 0.4;
pub const SPARKLE_GLOW_BLUR: f32 = 10.0;

// Never draw a circle smaller than this; the sparkle pulse crosses zero.
pub const MIN_DRAW_RADIUS: f32 = 0.1;

// Focal glyph
pub const FOCAL_GLYPH: char = '★';
pub const GLYPH_FADE_IN_FRAMES: f32 = 150.0;
pub const GLYPH_BASE_SIZE_PX: f32 = 25.0;
pub const GLYPH_PULSE_RATE: f32 = 0.05;
pub const GLYPH_PULSE_GAIN: f32 = 0.3;
pub const GLYPH_PULSE_BIAS: f32 = 0.9;
pub const GLYPH_GLOW_BLUR: f32 = 15.0;

// White glow shared by sparkles and the glyph
pub const WHITE_GLOW_ALPHA: f32 = 0.5;

// Starfield
pub const STAR_SIZE: Span = Span::new(0.5, 2.0);
pub const STAR_OPACITY: Span = Span::new(0.0, 1.0);
pub const STAR_SPEED: Span = Span::new(0.0, 0.05);
pub const STAR_TWINKLE: Span = Span::new(0.003, 0.008);

// Nebula wash stops: (offset, rgb, alpha)
pub const NEBULA_STOPS: [(f32, [u8; 3], f32); 3] = [
    (0.0, [25, 25, 50], 0.1),
    (0.5, [20, 20, 40], 0.05),
    (1.0, [0, 0, 20], 0.0),
];

// Reveal timeline holds (milliseconds)
pub const SUFFIX_DELAY_MS: u64 = 1000;
pub const SUFFIX_HOLD_MS: u64 = 1500;
pub const PREFIX_DELAY_MS: u64 = 800;
pub const PREFIX_HOLD_MS: u64 = 1500;

// Title nudge while the suffix or prefix word is visible (px)
pub const TITLE_SHIFT_PX: f32 = 30.0;

// Navigation
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const DEFAULT_SECTION: &str = "home";
pub const SECTION_IDS: [&str; 6] = ["home", "about", "skills", "experience", "projects", "contact"];
