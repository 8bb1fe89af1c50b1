use crate::constants::*;
use crate::dom::{self, Listener};
use web_sys as web;

fn set_menu_open(document: &web::Document, open: bool) {
    if let Some(menu) = document.get_element_by_id(MOBILE_NAV_ID) {
        _ = menu.class_list().toggle_with_force(MENU_OPEN_CLASS, open);
    }
}

fn scroll_to_section(document: &web::Document, id: &str) {
    let Some(section) = document.get_element_by_id(id) else {
        log::debug!("[nav] no section #{}", id);
        return;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Click handling for the section links and the mobile menu button.
pub struct NavLinks {
    _listeners: Vec<Listener>,
}

impl NavLinks {
    pub fn attach(document: &web::Document) -> anyhow::Result<Self> {
        let mut listeners = Vec::new();

        for link in dom::query_all(document, NAV_LINK_SELECTOR) {
            let Some(target) = link.get_attribute(NAV_LINK_ATTR) else {
                continue;
            };
            let document = document.clone();
            listeners.push(Listener::add(link.as_ref(), "click", move |ev| {
                ev.prevent_default();
                set_menu_open(&document, false);
                scroll_to_section(&document, &target);
            })?);
        }

        if let Some(toggle) = document.get_element_by_id(MENU_TOGGLE_ID) {
            let document = document.clone();
            listeners.push(Listener::add(toggle.as_ref(), "click", move |_| {
                if let Some(menu) = document.get_element_by_id(MOBILE_NAV_ID) {
                    _ = menu.class_list().toggle(MENU_OPEN_CLASS);
                }
            })?);
        }

        log::info!("[nav] wired {} listeners", listeners.len());
        Ok(Self {
            _listeners: listeners,
        })
    }
}
