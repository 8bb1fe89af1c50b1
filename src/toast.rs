//! Transient notice in the page corner, used for the welcome message.

use crate::constants::*;
use crate::dom;
use site_core::Timers;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Append a toast to the body and fade it in. After `TOAST_DURATION_MS` it
/// fades out and is removed. A toast already on the page is replaced.
pub fn show<T: Timers + 'static>(
    document: &web::Document,
    host: &Rc<T>,
    title: &str,
    description: &str,
) -> anyhow::Result<web::HtmlElement> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    if let Some(old) = document.get_element_by_id(TOAST_ID) {
        old.remove();
    }

    let toast = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("toast is not an HtmlElement"))?;
    toast.set_id(TOAST_ID);
    toast.set_class_name(TOAST_CLASS);
    toast.set_attribute("role", "status").map_err(js_err)?;
    for (class, text) in [(TOAST_TITLE_CLASS, title), (TOAST_DESCRIPTION_CLASS, description)] {
        let line = document.create_element("div").map_err(js_err)?;
        line.set_class_name(class);
        line.set_text_content(Some(text));
        toast.append_child(&line).map_err(js_err)?;
    }

    dom::fade(&toast, 0.0, TOAST_FADE_SEC)?;
    body.append_child(&toast).map_err(js_err)?;
    // Reading layout commits the starting opacity before the fade-in.
    _ = toast.offset_width();
    dom::fade(&toast, 1.0, TOAST_FADE_SEC)?;

    let el = toast.clone();
    let weak = Rc::downgrade(host);
    host.set_timeout(
        Duration::from_millis(TOAST_DURATION_MS),
        Box::new(move || {
            if dom::fade(&el, 0.0, TOAST_FADE_SEC).is_err() {
                el.remove();
                return;
            }
            let Some(host) = weak.upgrade() else {
                el.remove();
                return;
            };
            let gone = el.clone();
            let fade = Duration::from_secs_f32(TOAST_FADE_SEC);
            if host.set_timeout(fade, Box::new(move || gone.remove())).is_err() {
                el.remove();
            }
        }),
    )?;
    log::info!("[page] toast: {} - {}", title, description);
    Ok(toast)
}
