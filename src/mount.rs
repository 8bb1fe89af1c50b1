//! Owned intro/starfield instances and their JS-facing handles.

use crate::browser::Browser;
use crate::canvas::Canvas2dSurface;
use crate::dom;
use crate::overlay;
use site_core::{IntroScene, Renderer, RendererConfig, StarfieldScene, Timeline, TimelineConfig};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

type IntroRenderer = Renderer<Browser, Canvas2dSurface, IntroScene>;
type StarfieldRenderer = Renderer<Browser, Canvas2dSurface, StarfieldScene>;

/// Intro canvas animation plus the reveal timeline driving the title words.
pub struct Intro {
    renderer: IntroRenderer,
    timeline: Rc<Timeline<Browser>>,
}

impl Intro {
    /// Starts drawing immediately; the timeline waits for [`Timeline::start`].
    /// Without `overlay` the timeline still runs but touches no DOM.
    pub fn new(
        host: Rc<Browser>,
        canvas: Option<&web::HtmlCanvasElement>,
        overlay: Option<web::Document>,
    ) -> Self {
        let renderer = Renderer::new(host.clone(), RendererConfig::default());
        renderer.start(canvas.and_then(Canvas2dSurface::open));

        let timeline = Rc::new(Timeline::new(host, TimelineConfig::default()));
        if let Some(document) = overlay {
            timeline.on_phase(move |flags| overlay::apply_phase(&document, flags));
        }
        Self { renderer, timeline }
    }

    pub fn timeline(&self) -> Rc<Timeline<Browser>> {
        self.timeline.clone()
    }

    pub fn unmount(&self) {
        self.timeline.cancel();
        self.renderer.stop();
    }
}

pub struct Starfield {
    renderer: StarfieldRenderer,
}

impl Starfield {
    pub fn new(host: Rc<Browser>, canvas: Option<&web::HtmlCanvasElement>) -> Self {
        let renderer = Renderer::new(host, RendererConfig::default());
        renderer.start(canvas.and_then(Canvas2dSurface::open));
        Self { renderer }
    }

    pub fn is_running(&self) -> bool {
        self.renderer.is_running()
    }

    pub fn unmount(&self) {
        self.renderer.stop();
    }
}

#[wasm_bindgen]
pub struct IntroMount {
    intro: Option<Intro>,
}

#[wasm_bindgen]
impl IntroMount {
    /// Stop drawing and abandon the reveal; `onComplete` will not be called.
    pub fn unmount(&mut self) {
        if let Some(intro) = self.intro.take() {
            intro.unmount();
        }
    }

    #[wasm_bindgen(js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.intro
            .as_ref()
            .map(|i| i.timeline.is_complete())
            .unwrap_or(false)
    }
}

#[wasm_bindgen]
pub struct StarfieldMount {
    starfield: Option<Starfield>,
}

#[wasm_bindgen]
impl StarfieldMount {
    pub fn unmount(&mut self) {
        if let Some(starfield) = self.starfield.take() {
            starfield.unmount();
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.starfield
            .as_ref()
            .map(Starfield::is_running)
            .unwrap_or(false)
    }
}

/// Mount the intro on `canvas` and start the reveal. A missing canvas or
/// 2D context leaves only the timeline running.
#[wasm_bindgen(js_name = mountIntro)]
pub fn mount_intro(
    canvas: Option<web::HtmlCanvasElement>,
    on_complete: Option<js_sys::Function>,
) -> IntroMount {
    let Some(host) = Browser::shared() else {
        log::warn!("[mount] no window; intro not mounted");
        return IntroMount { intro: None };
    };
    let document = dom::window_document().filter(overlay::is_present);
    let intro = Intro::new(host, canvas.as_ref(), document);
    let timeline = intro.timeline();
    let mount = IntroMount { intro: Some(intro) };
    timeline.start(move || {
        if let Some(f) = on_complete {
            if let Err(e) = f.call0(&JsValue::NULL) {
                log::error!("[mount] onComplete threw: {:?}", e);
            }
        }
    });
    mount
}

#[wasm_bindgen(js_name = mountStarfield)]
pub fn mount_starfield(canvas: Option<web::HtmlCanvasElement>) -> StarfieldMount {
    let Some(host) = Browser::shared() else {
        log::warn!("[mount] no window; starfield not mounted");
        return StarfieldMount { starfield: None };
    };
    StarfieldMount {
        starfield: Some(Starfield::new(host, canvas.as_ref())),
    }
}
