//! `web-sys` implementation of the core host traits.
//!
//! Every JS callback is a `Closure` kept alive in a map keyed by ticket.
//! A closure cannot be dropped while it runs, so one that has fired only
//! records its ticket; the map entry is released on the next scheduling call.

use fnv::FnvHashMap;
use site_core::{
    FrameClock, FrameHandle, ListenerId, ResizeEvents, SiteError, TimerId, Timers, Viewport,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Callback = Closure<dyn FnMut()>;

pub struct Browser {
    window: web::Window,
    next_ticket: Cell<i32>,
    // ticket -> (JS handle, closure)
    frames: RefCell<FnvHashMap<i32, (i32, Callback)>>,
    timers: RefCell<FnvHashMap<i32, (i32, Callback)>>,
    listeners: RefCell<FnvHashMap<i32, Callback>>,
    fired: Rc<RefCell<Vec<i32>>>,
}

thread_local! {
    static SHARED: Option<Rc<Browser>> = web::window().map(|w| Rc::new(Browser::new(w)));
}

impl Browser {
    fn new(window: web::Window) -> Self {
        Self {
            window,
            next_ticket: Cell::new(1),
            frames: RefCell::new(FnvHashMap::default()),
            timers: RefCell::new(FnvHashMap::default()),
            listeners: RefCell::new(FnvHashMap::default()),
            fired: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// The page-wide host. Lives as long as the thread, so no closure it
    /// owns is ever dropped from under a running callback.
    pub fn shared() -> Option<Rc<Browser>> {
        SHARED.with(|b| b.clone())
    }

    pub fn window(&self) -> &web::Window {
        &self.window
    }

    fn ticket(&self) -> i32 {
        let t = self.next_ticket.get();
        self.next_ticket.set(t.wrapping_add(1));
        t
    }

    fn sweep(&self) {
        let fired = std::mem::take(&mut *self.fired.borrow_mut());
        if fired.is_empty() {
            return;
        }
        let mut frames = self.frames.borrow_mut();
        let mut timers = self.timers.borrow_mut();
        for t in fired {
            frames.remove(&t);
            timers.remove(&t);
        }
    }

    fn one_shot(&self, ticket: i32, callback: Box<dyn FnOnce()>) -> Callback {
        let fired = Rc::clone(&self.fired);
        let mut callback = Some(callback);
        Closure::wrap(Box::new(move || {
            if let Some(cb) = callback.take() {
                cb();
            }
            fired.borrow_mut().push(ticket);
        }) as Box<dyn FnMut()>)
    }
}

pub fn inner_size(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::from_inner(dim(window.inner_width()), dim(window.inner_height()))
}

impl FrameClock for Browser {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<FrameHandle, SiteError> {
        self.sweep();
        let ticket = self.ticket();
        let closure = self.one_shot(ticket, callback);
        let handle = self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| SiteError::schedule("animation frame", format!("{:?}", e)))?;
        self.frames.borrow_mut().insert(ticket, (handle, closure));
        Ok(FrameHandle(ticket))
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        let entry = self.frames.borrow_mut().remove(&handle.0);
        if let Some((raf, _closure)) = entry {
            _ = self.window.cancel_animation_frame(raf);
        }
    }
}

impl Timers for Browser {
    fn set_timeout(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Result<TimerId, SiteError> {
        self.sweep();
        let ticket = self.ticket();
        let closure = self.one_shot(ticket, callback);
        let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(|e| SiteError::schedule("timeout", format!("{:?}", e)))?;
        self.timers.borrow_mut().insert(ticket, (handle, closure));
        Ok(TimerId(ticket))
    }

    fn clear_timeout(&self, id: TimerId) {
        let entry = self.timers.borrow_mut().remove(&id.0);
        if let Some((handle, _closure)) = entry {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl ResizeEvents for Browser {
    fn inner_size(&self) -> Viewport {
        inner_size(&self.window)
    }

    fn add_resize_listener(
        &self,
        mut listener: Box<dyn FnMut(Viewport)>,
    ) -> Result<ListenerId, SiteError> {
        let window = self.window.clone();
        let closure = Closure::wrap(Box::new(move || {
            listener(inner_size(&window));
        }) as Box<dyn FnMut()>);
        self.window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| SiteError::schedule("resize listener", format!("{:?}", e)))?;
        let ticket = self.ticket();
        self.listeners.borrow_mut().insert(ticket, closure);
        Ok(ListenerId(ticket))
    }

    fn remove_resize_listener(&self, id: ListenerId) {
        let closure = self.listeners.borrow_mut().remove(&id.0);
        if let Some(closure) = closure {
            _ = self
                .window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }
}
