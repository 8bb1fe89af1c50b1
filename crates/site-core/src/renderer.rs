//! Owned render loop: one surface, one scene, one pending frame.
//!
//! Frame callbacks capture only `Weak` references plus the generation they
//! were scheduled for. `stop` bumps the generation before cancelling, so a
//! callback that still fires afterwards finds a stale generation and returns
//! without touching the surface.

use crate::host::{FrameClock, FrameHandle, ListenerId, ResizeEvents};
use crate::scene::Scene;
use crate::surface::Surface;
use crate::viewport::Viewport;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Clone, Debug, Default)]
pub struct RendererConfig {
    /// Fixed seed for reproducible populations; entropy when `None`.
    pub seed: Option<u64>,
}

impl RendererConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

struct RenderState<S, Sc> {
    surface: Option<S>,
    scene: Option<Sc>,
    pending: Option<FrameHandle>,
    resize_listener: Option<ListenerId>,
    generation: u64,
    frames_drawn: u64,
}

impl<S: Surface, Sc: Scene> RenderState<S, Sc> {
    fn draw(&mut self, generation: u64) -> bool {
        if self.generation != generation {
            return false;
        }
        self.pending = None;
        let (Some(surface), Some(scene)) = (self.surface.as_mut(), self.scene.as_mut()) else {
            return false;
        };
        scene.frame(surface);
        self.frames_drawn += 1;
        true
    }

    fn resize(&mut self, viewport: Viewport) {
        let (Some(surface), Some(scene)) = (self.surface.as_mut(), self.scene.as_mut()) else {
            return;
        };
        surface.resize(viewport);
        scene.resize(viewport);
        log::debug!("[renderer] resized to {}x{}", viewport.width, viewport.height);
    }
}

pub struct Renderer<H, S, Sc>
where
    H: FrameClock + ResizeEvents + 'static,
    S: Surface + 'static,
    Sc: Scene + 'static,
{
    host: Rc<H>,
    state: Rc<RefCell<RenderState<S, Sc>>>,
    config: RendererConfig,
}

impl<H, S, Sc> Renderer<H, S, Sc>
where
    H: FrameClock + ResizeEvents + 'static,
    S: Surface + 'static,
    Sc: Scene + 'static,
{
    pub fn new(host: Rc<H>, config: RendererConfig) -> Self {
        Self {
            host,
            state: Rc::new(RefCell::new(RenderState {
                surface: None,
                scene: None,
                pending: None,
                resize_listener: None,
                generation: 0,
                frames_drawn: 0,
            })),
            config,
        }
    }

    /// Take ownership of `surface` and start drawing on the next frame.
    ///
    /// A loop that is already running is torn down first, even when `surface`
    /// is `None`. `None` means the surface or its 2D context could not be
    /// obtained; nothing new is started then.
    pub fn start(&self, surface: Option<S>) {
        self.stop();
        let Some(mut surface) = surface else {
            log::debug!("[renderer] no drawing surface; not starting");
            return;
        };

        let viewport = self.host.inner_size();
        surface.resize(viewport);
        let scene = Sc::spawn(viewport, self.config.rng());
        let generation = {
            let mut st = self.state.borrow_mut();
            st.generation += 1;
            st.surface = Some(surface);
            st.scene = Some(scene);
            st.frames_drawn = 0;
            st.generation
        };

        let weak = Rc::downgrade(&self.state);
        match self.host.add_resize_listener(Box::new(move |vp| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().resize(vp);
            }
        })) {
            Ok(id) => self.state.borrow_mut().resize_listener = Some(id),
            Err(e) => log::warn!("[renderer] resize listener not registered: {}", e),
        }

        log::info!(
            "[renderer] started at {}x{} (generation {})",
            viewport.width,
            viewport.height,
            generation
        );
        schedule(&self.host, &self.state, generation);
    }

    /// Cancel the pending frame, drop the resize listener and release the
    /// surface. Safe to call repeatedly.
    pub fn stop(&self) {
        let (pending, listener, was_running) = {
            let mut st = self.state.borrow_mut();
            let was_running = st.surface.is_some();
            st.generation += 1;
            st.surface = None;
            st.scene = None;
            (st.pending.take(), st.resize_listener.take(), was_running)
        };
        if let Some(handle) = pending {
            self.host.cancel_frame(handle);
        }
        if let Some(id) = listener {
            self.host.remove_resize_listener(id);
        }
        if was_running {
            log::info!("[renderer] stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().surface.is_some()
    }

    /// Frames drawn since the last `start`.
    pub fn frames_drawn(&self) -> u64 {
        self.state.borrow().frames_drawn
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.state.borrow().surface.as_ref().map(|s| s.viewport())
    }

    pub fn with_scene<R>(&self, f: impl FnOnce(&mut Sc) -> R) -> Option<R> {
        self.state.borrow_mut().scene.as_mut().map(f)
    }

    pub fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.state.borrow_mut().surface.as_mut().map(f)
    }
}

impl<H, S, Sc> Drop for Renderer<H, S, Sc>
where
    H: FrameClock + ResizeEvents + 'static,
    S: Surface + 'static,
    Sc: Scene + 'static,
{
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule<H, S, Sc>(host: &Rc<H>, state: &Rc<RefCell<RenderState<S, Sc>>>, generation: u64)
where
    H: FrameClock + 'static,
    S: Surface + 'static,
    Sc: Scene + 'static,
{
    let weak_host: Weak<H> = Rc::downgrade(host);
    let weak_state = Rc::downgrade(state);
    let requested = host.request_frame(Box::new(move || {
        let (Some(host), Some(state)) = (weak_host.upgrade(), weak_state.upgrade()) else {
            return;
        };
        let drew = state.borrow_mut().draw(generation);
        if drew {
            schedule(&host, &state, generation);
        }
    }));
    match requested {
        Ok(handle) => {
            let mut st = state.borrow_mut();
            if st.generation == generation {
                st.pending = Some(handle);
            } else {
                drop(st);
                host.cancel_frame(handle);
            }
        }
        Err(e) => log::error!("[renderer] frame request failed, loop halted: {}", e),
    }
}
