// Host-side tests for the web front-end constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use site_core::constants::{SECTION_IDS, SUFFIX_DELAY_MS};

#[test]
fn dom_ids_are_unique_and_plain() {
    let ids = [
        LOADING_ID,
        INTRO_ID,
        CONTENT_ID,
        INTRO_CANVAS_ID,
        INTRO_TITLE_ID,
        INTRO_SUFFIX_ID,
        INTRO_PREFIX_ID,
        STARFIELD_CANVAS_ID,
        SECTIONS_CONTAINER_ID,
        HEADER_ID,
        MENU_TOGGLE_ID,
        MOBILE_NAV_ID,
        TOAST_ID,
    ];
    for (i, id) in ids.iter().enumerate() {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "{id} should be a bare id");
        assert!(!ids[i + 1..].contains(id), "duplicate id {id}");
    }
}

#[test]
fn section_ids_do_not_clash_with_page_ids() {
    for section in SECTION_IDS {
        assert_ne!(section, LOADING_ID);
        assert_ne!(section, INTRO_ID);
        assert_ne!(section, CONTENT_ID);
    }
}

#[test]
fn selectors_match_their_attributes() {
    assert!(NAV_LINK_SELECTOR.contains(NAV_LINK_ATTR));
    assert!(SECTION_SELECTOR.starts_with(REVEAL_SELECTOR));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_observer_options_are_valid() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(REVEAL_ROOT_MARGIN.ends_with("px"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_reasonable() {
    assert!(LOADING_DELAY_MS > 0);
    assert!(WORD_FADE_SEC > 0.0);
    // A word must finish fading in before the next one appears.
    assert!((WORD_FADE_SEC * 1000.0) < SUFFIX_DELAY_MS as f32);
    assert!(WORD_ENTRY_OFFSET_PX > 0.0);
    assert!(INTRO_EXIT_FADE_SEC > 0.0);
    // The toast must be readable between its fade-in and fade-out.
    assert!((TOAST_FADE_SEC * 2000.0) < TOAST_DURATION_MS as f32);
}

#[test]
fn class_names_are_distinct() {
    let classes = [
        HIDDEN_CLASS,
        VISIBLE_CLASS,
        ACTIVE_CLASS,
        SCROLLED_CLASS,
        MENU_OPEN_CLASS,
        TOAST_CLASS,
        TOAST_TITLE_CLASS,
        TOAST_DESCRIPTION_CLASS,
    ];
    for (i, c) in classes.iter().enumerate() {
        assert!(!classes[i + 1..].contains(c));
    }
}
