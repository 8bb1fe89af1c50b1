//! Staged reveal of the intro title words.
//!
//! The sequence is a chain of one-shot timers: each firing applies one phase
//! and arms the next, but only while the timeline is still active. Any
//! failure, whether from the phase observer or from scheduling, skips
//! straight to completion so the page is never left waiting on the intro.

use crate::constants::*;
use crate::error::SiteError;
use crate::host::{TimerId, Timers};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Visibility of the overlay words. Several may be true at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseFlags {
    pub title: bool,
    pub suffix: bool,
    pub prefix: bool,
    pub complete: bool,
}

/// Horizontal nudge applied to the title while a neighbour word is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleShift {
    Centered,
    Left,
    Right,
}

impl TitleShift {
    pub fn offset_px(self) -> f32 {
        match self {
            TitleShift::Centered => 0.0,
            TitleShift::Left => -TITLE_SHIFT_PX,
            TitleShift::Right => TITLE_SHIFT_PX,
        }
    }
}

impl PhaseFlags {
    /// The suffix sits to the right of the title, the prefix to its left.
    pub fn title_shift(&self) -> TitleShift {
        if self.suffix {
            TitleShift::Left
        } else if self.prefix {
            TitleShift::Right
        } else {
            TitleShift::Centered
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    ShowTitle,
    ShowSuffix,
    HideSuffix,
    ShowPrefix,
    Complete,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::ShowTitle => "show-title",
            Phase::ShowSuffix => "show-suffix",
            Phase::HideSuffix => "hide-suffix",
            Phase::ShowPrefix => "show-prefix",
            Phase::Complete => "complete",
        }
    }

    fn apply(self, flags: &mut PhaseFlags) {
        match self {
            Phase::ShowTitle => flags.title = true,
            Phase::ShowSuffix => flags.suffix = true,
            Phase::HideSuffix => flags.suffix = false,
            Phase::ShowPrefix => flags.prefix = true,
            Phase::Complete => flags.complete = true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TimelineConfig {
    pub suffix_delay: Duration,
    pub suffix_hold: Duration,
    pub prefix_delay: Duration,
    pub prefix_hold: Duration,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            suffix_delay: Duration::from_millis(SUFFIX_DELAY_MS),
            suffix_hold: Duration::from_millis(SUFFIX_HOLD_MS),
            prefix_delay: Duration::from_millis(PREFIX_DELAY_MS),
            prefix_hold: Duration::from_millis(PREFIX_HOLD_MS),
        }
    }
}

impl TimelineConfig {
    /// Each phase paired with the wait that precedes it.
    pub fn steps(&self) -> [(Duration, Phase); 5] {
        [
            (Duration::ZERO, Phase::ShowTitle),
            (self.suffix_delay, Phase::ShowSuffix),
            (self.suffix_hold, Phase::HideSuffix),
            (self.prefix_delay, Phase::ShowPrefix),
            (self.prefix_hold, Phase::Complete),
        ]
    }

    pub fn total(&self) -> Duration {
        self.steps().iter().map(|(d, _)| *d).sum()
    }
}

pub type PhaseObserver = Box<dyn FnMut(PhaseFlags) -> Result<(), SiteError>>;

struct TimelineState {
    steps: [(Duration, Phase); 5],
    flags: PhaseFlags,
    started: bool,
    active: bool,
    pending: Option<TimerId>,
    observer: Option<PhaseObserver>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

pub struct Timeline<T: Timers + 'static> {
    timers: Rc<T>,
    state: Rc<RefCell<TimelineState>>,
}

impl<T: Timers + 'static> Timeline<T> {
    pub fn new(timers: Rc<T>, config: TimelineConfig) -> Self {
        Self {
            timers,
            state: Rc::new(RefCell::new(TimelineState {
                steps: config.steps(),
                flags: PhaseFlags::default(),
                started: false,
                active: false,
                pending: None,
                observer: None,
                on_complete: None,
            })),
        }
    }

    /// Called with the new flags after every phase. An `Err` aborts the
    /// remaining phases and completes the timeline.
    pub fn on_phase(&self, observer: impl FnMut(PhaseFlags) -> Result<(), SiteError> + 'static) {
        self.state.borrow_mut().observer = Some(Box::new(observer));
    }

    /// Run the sequence once. Later calls on the same timeline are ignored.
    pub fn start(&self, on_complete: impl FnOnce() + 'static) {
        {
            let mut st = self.state.borrow_mut();
            if st.started {
                log::debug!("[timeline] already started; ignoring");
                return;
            }
            st.started = true;
            st.active = true;
            st.on_complete = Some(Box::new(on_complete));
        }
        log::info!("[timeline] started");
        enter(&self.timers, &self.state, 0);
    }

    /// Abandon the pending hold. The completion callback will never run.
    pub fn cancel(&self) {
        let (pending, was_active) = {
            let mut st = self.state.borrow_mut();
            let was_active = st.active;
            st.active = false;
            st.on_complete = None;
            (st.pending.take(), was_active)
        };
        if let Some(id) = pending {
            self.timers.clear_timeout(id);
        }
        if was_active {
            log::info!("[timeline] cancelled");
        }
    }

    pub fn flags(&self) -> PhaseFlags {
        self.state.borrow().flags
    }

    pub fn is_active(&self) -> bool {
        self.state.borrow().active
    }

    pub fn is_complete(&self) -> bool {
        self.state.borrow().flags.complete
    }
}

impl<T: Timers + 'static> Drop for Timeline<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn enter<T: Timers + 'static>(timers: &Rc<T>, state: &Rc<RefCell<TimelineState>>, index: usize) {
    let (phase, flags, mut observer) = {
        let mut st = state.borrow_mut();
        if !st.active {
            return;
        }
        st.pending = None;
        let Some(&(_, phase)) = st.steps.get(index) else {
            return;
        };
        phase.apply(&mut st.flags);
        (phase, st.flags, st.observer.take())
    };
    log::debug!("[timeline] {} -> {:?}", phase.name(), flags);

    // No borrow is held while the observer runs; it may query the timeline.
    let notified = match observer.as_mut() {
        Some(f) => f(flags),
        None => Ok(()),
    };
    let still_active = {
        let mut st = state.borrow_mut();
        if st.observer.is_none() {
            st.observer = observer;
        }
        st.active
    };
    if !still_active {
        return;
    }
    if let Err(e) = notified {
        log::warn!("[timeline] {}; skipping to completion", e);
        finish(state);
        return;
    }
    if phase == Phase::Complete {
        finish(state);
        return;
    }

    let next = index + 1;
    let delay = state.borrow().steps.get(next).map(|&(d, _)| d);
    let Some(delay) = delay else {
        finish(state);
        return;
    };
    let weak_timers: Weak<T> = Rc::downgrade(timers);
    let weak_state = Rc::downgrade(state);
    let armed = timers.set_timeout(
        delay,
        Box::new(move || {
            if let (Some(timers), Some(state)) = (weak_timers.upgrade(), weak_state.upgrade()) {
                enter(&timers, &state, next);
            }
        }),
    );
    match armed {
        Ok(id) => state.borrow_mut().pending = Some(id),
        Err(e) => {
            log::warn!("[timeline] {}; skipping to completion", e);
            finish(state);
        }
    }
}

fn finish(state: &Rc<RefCell<TimelineState>>) {
    let on_complete = {
        let mut st = state.borrow_mut();
        if !st.active {
            return;
        }
        st.active = false;
        st.flags.complete = true;
        st.pending = None;
        st.on_complete.take()
    };
    log::info!("[timeline] complete");
    if let Some(callback) = on_complete {
        callback();
    }
}
