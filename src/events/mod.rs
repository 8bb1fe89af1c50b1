mod nav;
mod reveal;
mod scroll;

pub use nav::NavLinks;
pub use reveal::SectionReveal;
pub use scroll::NavHighlighter;

use web_sys as web;

/// Everything the content view listens to. Dropping it removes the listeners
/// and disconnects the section observer.
pub struct Navigation {
    _links: NavLinks,
    _highlight: NavHighlighter,
    _reveal: SectionReveal,
}

impl Navigation {
    pub fn wire(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            _links: NavLinks::attach(document)?,
            _highlight: NavHighlighter::attach(document)?,
            _reveal: SectionReveal::attach(document)?,
        })
    }
}
