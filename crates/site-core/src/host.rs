//! Platform hooks the render loop and the timeline are scheduled through.
//!
//! Everything here is single-threaded: callbacks are plain `Box<dyn FnOnce()>`
//! and run on the same event loop that registered them. A host must never
//! invoke a callback synchronously from inside the registering call.

use crate::error::SiteError;
use crate::viewport::Viewport;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub i32);

/// Display-refresh scheduling (`requestAnimationFrame` on the web).
pub trait FrameClock {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<FrameHandle, SiteError>;

    /// Cancelling a handle that already fired is a no-op.
    fn cancel_frame(&self, handle: FrameHandle);
}

/// One-shot delayed callbacks (`setTimeout` on the web).
pub trait Timers {
    fn set_timeout(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Result<TimerId, SiteError>;

    fn clear_timeout(&self, id: TimerId);
}

/// Window size and its change notifications.
pub trait ResizeEvents {
    fn inner_size(&self) -> Viewport;

    fn add_resize_listener(
        &self,
        listener: Box<dyn FnMut(Viewport)>,
    ) -> Result<ListenerId, SiteError>;

    fn remove_resize_listener(&self, id: ListenerId);
}
