use crate::constants::*;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type RevealCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Marks each section `visible` the first time it scrolls into view.
/// The observer is disconnected when this is dropped.
pub struct SectionReveal {
    observer: web::IntersectionObserver,
    _callback: RevealCallback,
}

impl SectionReveal {
    pub fn attach(document: &web::Document) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(
            |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        _ = entry.target().class_list().add_1(VISIBLE_CLASS);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let sections = dom::query_all(document, REVEAL_SELECTOR);
        for section in &sections {
            observer.observe(section);
        }
        log::info!("[nav] observing {} sections for reveal", sections.len());
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
