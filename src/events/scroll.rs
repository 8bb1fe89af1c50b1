use crate::constants::*;
use crate::dom::{self, Listener};
use site_core::{NavState, SectionBounds};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keeps the header style and the active nav link in step with scrolling.
pub struct NavHighlighter {
    _scroll: Listener,
    _resize: Listener,
}

impl NavHighlighter {
    pub fn attach(document: &web::Document) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let container = dom::element::<web::HtmlElement>(document, SECTIONS_CONTAINER_ID);
        // Empty active id so the first measurement always paints the links.
        let state = Rc::new(RefCell::new(NavState {
            active: String::new(),
            scrolled: false,
        }));

        let update = {
            let document = document.clone();
            let window = window.clone();
            let container = container.clone();
            move || refresh(&document, &window, container.as_ref(), &state)
        };
        update();

        let scroll_target: web::EventTarget = match &container {
            Some(el) => el.clone().unchecked_into(),
            None => window.clone().unchecked_into(),
        };
        let on_scroll = Rc::new(update);
        let on_resize = on_scroll.clone();
        Ok(Self {
            _scroll: Listener::add(&scroll_target, "scroll", move |_| on_scroll())?,
            _resize: Listener::add(window.as_ref(), "resize", move |_| on_resize())?,
        })
    }
}

fn scroll_top(window: &web::Window, container: Option<&web::HtmlElement>) -> f64 {
    match container {
        Some(el) => el.scroll_top() as f64,
        None => window.scroll_y().unwrap_or(0.0),
    }
}

fn measure_sections(document: &web::Document) -> Vec<SectionBounds> {
    dom::query_all(document, SECTION_SELECTOR)
        .into_iter()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            SectionBounds::new(el.id(), rect.top(), rect.bottom())
        })
        .collect()
}

fn refresh(
    document: &web::Document,
    window: &web::Window,
    container: Option<&web::HtmlElement>,
    state: &RefCell<NavState>,
) {
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let sections = measure_sections(document);
    let mut st = state.borrow_mut();
    if !st.update(&sections, viewport_height, scroll_top(window, container)) {
        return;
    }
    log::debug!("[nav] active={} scrolled={}", st.active, st.scrolled);

    if let Some(header) = document.get_element_by_id(HEADER_ID) {
        _ = header.class_list().toggle_with_force(SCROLLED_CLASS, st.scrolled);
    }
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let is_active = link.get_attribute(NAV_LINK_ATTR).as_deref() == Some(st.active.as_str());
        _ = link.class_list().toggle_with_force(ACTIVE_CLASS, is_active);
    }
}
