pub mod constants;
pub mod error;
pub mod host;
pub mod nav;
pub mod paint;
pub mod particles;
pub mod renderer;
pub mod sample;
pub mod scene;
pub mod surface;
pub mod timeline;
pub mod viewport;

pub use error::SiteError;
pub use host::{FrameClock, FrameHandle, ListenerId, ResizeEvents, TimerId, Timers};
pub use nav::{active_section, is_scrolled, NavState, SectionBounds};
pub use paint::{ColorStop, CubicCurve, Glow, LinearGradient, RadialGradient, Rgba};
pub use renderer::{Renderer, RendererConfig};
pub use scene::{IntroScene, Scene, StarfieldScene};
pub use surface::Surface;
pub use timeline::{Phase, PhaseFlags, Timeline, TimelineConfig, TitleShift};
pub use viewport::Viewport;
