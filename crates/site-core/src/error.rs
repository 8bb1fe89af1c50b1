use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("phase `{phase}` failed: {reason}")]
    Phase { phase: &'static str, reason: String },

    #[error("could not schedule {what}: {reason}")]
    Schedule { what: &'static str, reason: String },
}

impl SiteError {
    pub fn phase(phase: &'static str, reason: impl Into<String>) -> Self {
        Self::Phase {
            phase,
            reason: reason.into(),
        }
    }

    pub fn schedule(what: &'static str, reason: impl Into<String>) -> Self {
        Self::Schedule {
            what,
            reason: reason.into(),
        }
    }
}
