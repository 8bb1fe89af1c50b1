//! The three intro words over the intro canvas.

use crate::constants::*;
use site_core::{PhaseFlags, SiteError};
use wasm_bindgen::JsCast;
use web_sys as web;

fn word(document: &web::Document, id: &'static str) -> Result<web::HtmlElement, SiteError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or_else(|| SiteError::phase("overlay", format!("missing #{}", id)))
}

fn set_word(el: &web::HtmlElement, visible: bool, transform: &str) -> Result<(), SiteError> {
    _ = el.class_list().toggle_with_force(VISIBLE_CLASS, visible);
    let style = el.style();
    let transition = format!("opacity {s}s, transform {s}s", s = WORD_FADE_SEC);
    style
        .set_property("transition", &transition)
        .and_then(|_| style.set_property("opacity", if visible { "1" } else { "0" }))
        .and_then(|_| style.set_property("transform", transform))
        .map_err(|e| SiteError::phase("overlay", format!("{:?}", e)))
}

// Hidden side words wait `offset` px off their resting place.
fn side_transform(visible: bool, offset: f32) -> String {
    format!("translateX({}px)", if visible { 0.0 } else { offset })
}

/// True when the page carries all three intro words.
pub fn is_present(document: &web::Document) -> bool {
    [INTRO_TITLE_ID, INTRO_SUFFIX_ID, INTRO_PREFIX_ID]
        .iter()
        .all(|id| document.get_element_by_id(id).is_some())
}

/// Reflect the timeline flags on the intro words.
///
/// A hidden title sits below its place, a hidden suffix to the right and a
/// hidden prefix to the left, so each word slides in as it fades in. A shown
/// title is shifted sideways to make room for whichever side word is up.
pub fn apply_phase(document: &web::Document, flags: PhaseFlags) -> Result<(), SiteError> {
    let title = word(document, INTRO_TITLE_ID)?;
    let suffix = word(document, INTRO_SUFFIX_ID)?;
    let prefix = word(document, INTRO_PREFIX_ID)?;

    let title_at = if flags.title {
        format!("translateX({}px)", flags.title_shift().offset_px())
    } else {
        format!("translateY({}px)", WORD_ENTRY_OFFSET_PX)
    };
    set_word(&title, flags.title, &title_at)?;
    set_word(&suffix, flags.suffix, &side_transform(flags.suffix, WORD_ENTRY_OFFSET_PX))?;
    set_word(&prefix, flags.prefix, &side_transform(flags.prefix, -WORD_ENTRY_OFFSET_PX))
}
