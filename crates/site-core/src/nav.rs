use crate::constants::{DEFAULT_SECTION, SCROLLED_THRESHOLD_PX};

/// Vertical extent of a content section in viewport coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self {
            id: id.into(),
            top,
            bottom,
        }
    }

    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// The section straddling the vertical middle of the viewport. When several
/// do (touching edges), the later one in document order wins.
pub fn active_section(sections: &[SectionBounds], viewport_height: f64) -> &str {
    let mid = viewport_height / 2.0;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(mid))
        .map(|s| s.id.as_str())
        .unwrap_or(DEFAULT_SECTION)
}

#[inline]
pub fn is_scrolled(scroll_top: f64) -> bool {
    scroll_top > SCROLLED_THRESHOLD_PX
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub active: String,
    pub scrolled: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: DEFAULT_SECTION.to_string(),
            scrolled: false,
        }
    }
}

impl NavState {
    /// Recompute from fresh measurements; returns true if anything changed.
    pub fn update(
        &mut self,
        sections: &[SectionBounds],
        viewport_height: f64,
        scroll_top: f64,
    ) -> bool {
        let active = active_section(sections, viewport_height);
        let scrolled = is_scrolled(scroll_top);
        let changed = self.active != active || self.scrolled != scrolled;
        if changed {
            self.active = active.to_string();
            self.scrolled = scrolled;
        }
        changed
    }
}
