//! Boot flow for the full page: loading screen, intro, then content.

use crate::browser::Browser;
use crate::constants::*;
use crate::dom;
use crate::events::Navigation;
use crate::mount::{Intro, Starfield};
use crate::overlay;
use crate::toast;
use site_core::Timers;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use web_sys as web;

struct Page {
    document: web::Document,
    host: Rc<Browser>,
    intro: Option<Intro>,
    starfield: Option<Starfield>,
    navigation: Option<Navigation>,
}

thread_local! {
    static PAGE: RefCell<Option<Rc<RefCell<Page>>>> = const { RefCell::new(None) };
}

/// Run the page sequence if the document carries the intro canvas.
pub fn boot() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document.get_element_by_id(INTRO_CANVAS_ID).is_none() {
        log::info!("[page] no #{}; waiting for mountIntro/mountStarfield", INTRO_CANVAS_ID);
        return Ok(());
    }
    let host = Browser::shared().ok_or_else(|| anyhow::anyhow!("no window"))?;

    dom::show(&document, LOADING_ID);
    dom::hide(&document, INTRO_ID);
    dom::hide(&document, CONTENT_ID);

    let page = Rc::new(RefCell::new(Page {
        document,
        host: host.clone(),
        intro: None,
        starfield: None,
        navigation: None,
    }));
    PAGE.with(|slot| *slot.borrow_mut() = Some(page.clone()));

    let weak = Rc::downgrade(&page);
    let armed = host.set_timeout(
        Duration::from_millis(LOADING_DELAY_MS),
        Box::new(move || with_page(&weak, begin_intro)),
    );
    if let Err(e) = armed {
        log::warn!("[page] {}; skipping loading screen", e);
        begin_intro(&page);
    }
    Ok(())
}

fn with_page(weak: &Weak<RefCell<Page>>, f: fn(&Rc<RefCell<Page>>)) {
    if let Some(page) = weak.upgrade() {
        f(&page);
    }
}

fn begin_intro(page: &Rc<RefCell<Page>>) {
    let (document, host) = {
        let p = page.borrow();
        (p.document.clone(), p.host.clone())
    };
    dom::hide(&document, LOADING_ID);
    dom::show(&document, INTRO_ID);

    let canvas = dom::element::<web::HtmlCanvasElement>(&document, INTRO_CANVAS_ID);
    if !overlay::is_present(&document) {
        log::warn!("[page] intro words missing; reveal will complete at once");
    }
    let intro = Intro::new(host, canvas.as_ref(), Some(document));
    let timeline = intro.timeline();
    page.borrow_mut().intro = Some(intro);

    log::info!("[page] intro started");
    let weak = Rc::downgrade(page);
    // No page borrow is held here; completion may run synchronously.
    timeline.start(move || with_page(&weak, reveal_content));
}

fn reveal_content(page: &Rc<RefCell<Page>>) {
    let (document, host) = {
        let p = page.borrow();
        (p.document.clone(), p.host.clone())
    };
    // The intro screen covers the content until its fade-out ends.
    if let Some(intro) = dom::element::<web::HtmlElement>(&document, INTRO_ID) {
        if let Err(e) = dom::fade(&intro, 0.0, INTRO_EXIT_FADE_SEC) {
            log::warn!("[page] intro fade skipped: {:?}", e);
        }
    }
    dom::show(&document, CONTENT_ID);

    let canvas = dom::element::<web::HtmlCanvasElement>(&document, STARFIELD_CANVAS_ID);
    let starfield = Starfield::new(host.clone(), canvas.as_ref());
    let navigation = match Navigation::wire(&document) {
        Ok(nav) => Some(nav),
        Err(e) => {
            log::warn!("[page] navigation not wired: {:?}", e);
            None
        }
    };
    {
        let mut p = page.borrow_mut();
        p.starfield = Some(starfield);
        p.navigation = navigation;
        log::info!(
            "[page] content shown (starfield={}, navigation={})",
            p.starfield.as_ref().is_some_and(Starfield::is_running),
            p.navigation.is_some()
        );
    }

    let weak = Rc::downgrade(page);
    let armed = host.set_timeout(
        Duration::from_secs_f32(INTRO_EXIT_FADE_SEC),
        Box::new(move || with_page(&weak, finish_intro)),
    );
    if let Err(e) = armed {
        log::warn!("[page] {}; removing intro at once", e);
        finish_intro(page);
    }

    if let Err(e) = toast::show(&document, &host, WELCOME_TITLE, WELCOME_DESCRIPTION) {
        log::warn!("[page] welcome toast not shown: {:?}", e);
    }
}

fn finish_intro(page: &Rc<RefCell<Page>>) {
    let (intro, document) = {
        let mut p = page.borrow_mut();
        (p.intro.take(), p.document.clone())
    };
    if let Some(intro) = intro {
        intro.unmount();
    }
    dom::hide(&document, INTRO_ID);
    log::info!("[page] intro removed");
}
