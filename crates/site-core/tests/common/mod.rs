// Simulated browser host and a surface that records every draw call.
// Frames only advance when a test pumps them; timers only fire when a test
// advances the clock.

#![allow(dead_code)]

use glam::Vec2;
use site_core::{
    CubicCurve, FrameClock, FrameHandle, Glow, LinearGradient, ListenerId, RadialGradient,
    ResizeEvents, Rgba, SiteError, Surface, TimerId, Timers, Viewport,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

type Callback = Box<dyn FnOnce()>;

pub struct FakeHost {
    next_id: Cell<i32>,
    now_ms: Cell<u64>,
    size: Cell<Viewport>,
    frames: RefCell<Vec<(FrameHandle, Callback)>>,
    timers: RefCell<Vec<(TimerId, u64, Callback)>>,
    listeners: RefCell<Vec<(ListenerId, Box<dyn FnMut(Viewport)>)>>,
    /// Pretend `cancel_frame` lost the race with an already queued frame.
    pub ignore_frame_cancel: Cell<bool>,
    pub fail_timers: Cell<bool>,
}

impl FakeHost {
    pub fn new(width: u32, height: u32) -> Rc<Self> {
        Rc::new(Self {
            next_id: Cell::new(1),
            now_ms: Cell::new(0),
            size: Cell::new(Viewport::new(width, height)),
            frames: RefCell::new(Vec::new()),
            timers: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            ignore_frame_cancel: Cell::new(false),
            fail_timers: Cell::new(false),
        })
    }

    fn id(&self) -> i32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Run `n` display refreshes. Callbacks queued during a refresh wait for the next one.
    pub fn pump_frames(&self, n: usize) {
        for _ in 0..n {
            let batch = std::mem::take(&mut *self.frames.borrow_mut());
            for (_, callback) in batch {
                callback();
            }
        }
    }

    /// Advance simulated time, firing due timers in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms.get() + ms;
        loop {
            let due = {
                let timers = self.timers.borrow();
                timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, at, _))| *at <= target)
                    .min_by_key(|(_, (_, at, _))| *at)
                    .map(|(i, _)| i)
            };
            let Some(i) = due else { break };
            let (_, at, callback) = self.timers.borrow_mut().remove(i);
            self.now_ms.set(at);
            callback();
        }
        self.now_ms.set(target);
    }

    pub fn resize(&self, width: u32, height: u32) {
        let vp = Viewport::new(width, height);
        self.size.set(vp);
        let mut listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        for (_, listener) in listeners.iter_mut() {
            listener(vp);
        }
        let mut slot = self.listeners.borrow_mut();
        let added = std::mem::take(&mut *slot);
        *slot = listeners;
        slot.extend(added);
    }
}

impl FrameClock for FakeHost {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<FrameHandle, SiteError> {
        let handle = FrameHandle(self.id());
        self.frames.borrow_mut().push((handle, callback));
        Ok(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if self.ignore_frame_cancel.get() {
            return;
        }
        self.frames.borrow_mut().retain(|(h, _)| *h != handle);
    }
}

impl Timers for FakeHost {
    fn set_timeout(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Result<TimerId, SiteError> {
        if self.fail_timers.get() {
            return Err(SiteError::schedule("timeout", "timer queue unavailable"));
        }
        let id = TimerId(self.id());
        let at = self.now_ms.get() + delay.as_millis() as u64;
        self.timers.borrow_mut().push((id, at, callback));
        Ok(id)
    }

    fn clear_timeout(&self, id: TimerId) {
        self.timers.borrow_mut().retain(|(t, _, _)| *t != id);
    }
}

impl ResizeEvents for FakeHost {
    fn inner_size(&self) -> Viewport {
        self.size.get()
    }

    fn add_resize_listener(
        &self,
        listener: Box<dyn FnMut(Viewport)>,
    ) -> Result<ListenerId, SiteError> {
        let id = ListenerId(self.id());
        self.listeners.borrow_mut().push((id, listener));
        Ok(id)
    }

    fn remove_resize_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(l, _)| *l != id);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Resize(Viewport),
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        glow: Option<Glow>,
    },
    Curve {
        curve: CubicCurve,
        paint: LinearGradient,
        width: f32,
    },
    Glyph {
        glyph: char,
        center: Vec2,
        size_px: f32,
        color: Rgba,
    },
    Radial(RadialGradient),
}

/// Surface whose draw log stays readable after the renderer takes ownership.
pub struct RecordingSurface {
    viewport: Viewport,
    log: Rc<RefCell<Vec<DrawCall>>>,
}

impl RecordingSurface {
    pub fn new() -> (Self, Rc<RefCell<Vec<DrawCall>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                viewport: Viewport::default(),
                log: log.clone(),
            },
            log,
        )
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.log.borrow_mut().push(DrawCall::Resize(viewport));
    }

    fn clear(&mut self) {
        self.log.borrow_mut().push(DrawCall::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Option<Glow>) {
        self.log.borrow_mut().push(DrawCall::Circle {
            center,
            radius,
            color,
            glow,
        });
    }

    fn stroke_curve(
        &mut self,
        curve: &CubicCurve,
        paint: &LinearGradient,
        width: f32,
        _glow: Option<Glow>,
    ) {
        self.log.borrow_mut().push(DrawCall::Curve {
            curve: *curve,
            paint: paint.clone(),
            width,
        });
    }

    fn fill_glyph(
        &mut self,
        glyph: char,
        center: Vec2,
        size_px: f32,
        color: Rgba,
        _glow: Option<Glow>,
    ) {
        self.log.borrow_mut().push(DrawCall::Glyph {
            glyph,
            center,
            size_px,
            color,
        });
    }

    fn fill_radial(&mut self, gradient: &RadialGradient) {
        self.log.borrow_mut().push(DrawCall::Radial(gradient.clone()));
    }
}

pub fn count_clears(log: &Rc<RefCell<Vec<DrawCall>>>) -> usize {
    log.borrow().iter().filter(|c| **c == DrawCall::Clear).count()
}
