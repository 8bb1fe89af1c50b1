//! Particle populations. Each type is recycled in place; populations never
//! grow or shrink after spawning.

mod drift;
mod line;
mod sparkle;
mod star;

pub use drift::DriftParticle;
pub use line::MotionLine;
pub use sparkle::Sparkle;
pub use star::Star;
