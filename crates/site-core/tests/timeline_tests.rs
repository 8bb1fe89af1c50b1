mod common;

use common::FakeHost;
use site_core::{PhaseFlags, SiteError, Timeline, TimelineConfig, TitleShift};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

fn flags(title: bool, suffix: bool, prefix: bool, complete: bool) -> PhaseFlags {
    PhaseFlags {
        title,
        suffix,
        prefix,
        complete,
    }
}

fn completion_counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    (count, move || c.set(c.get() + 1))
}

#[test]
fn default_config_matches_reveal_schedule() {
    let config = TimelineConfig::default();
    assert_eq!(config.suffix_delay, Duration::from_millis(1000));
    assert_eq!(config.suffix_hold, Duration::from_millis(1500));
    assert_eq!(config.prefix_delay, Duration::from_millis(800));
    assert_eq!(config.prefix_hold, Duration::from_millis(1500));
    assert_eq!(config.total(), Duration::from_millis(4800));
}

#[test]
fn phases_follow_the_schedule() {
    let host = FakeHost::new(800, 600);
    let timeline = Timeline::new(host.clone(), TimelineConfig::default());
    let (done, on_complete) = completion_counter();

    timeline.start(on_complete);
    assert_eq!(timeline.flags(), flags(true, false, false, false));

    host.advance(999);
    assert_eq!(timeline.flags(), flags(true, false, false, false));
    host.advance(1);
    assert_eq!(timeline.flags(), flags(true, true, false, false));

    host.advance(1500);
    assert_eq!(timeline.flags(), flags(true, false, false, false));

    host.advance(800);
    assert_eq!(timeline.flags(), flags(true, false, true, false));
    assert_eq!(done.get(), 0);

    host.advance(1499);
    assert_eq!(done.get(), 0);
    host.advance(1);
    assert_eq!(timeline.flags(), flags(true, false, true, true));
    assert!(timeline.is_complete());
    assert!(!timeline.is_active());
    assert_eq!(done.get(), 1);

    host.advance(10_000);
    assert_eq!(done.get(), 1);
    assert_eq!(host.pending_timers(), 0);
}

#[test]
fn observer_sees_every_transition_in_order() {
    let host = FakeHost::new(800, 600);
    let timeline = Timeline::new(host.clone(), TimelineConfig::default());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    timeline.on_phase(move |f| {
        s.borrow_mut().push(f);
        Ok(())
    });

    timeline.start(|| {});
    host.advance(5_000);

    assert_eq!(
        *seen.borrow(),
        vec![
            flags(true, false, false, false),
            flags(true, true, false, false),
            flags(true, false, false, false),
            flags(true, false, true, false),
            flags(true, false, true, true),
        ]
    );
}

#[test]
fn title_shift_follows_visible_neighbour() {
    assert_eq!(flags(true, false, false, false).title_shift(), TitleShift::Centered);
    assert_eq!(flags(true, true, false, false).title_shift(), TitleShift::Left);
    assert_eq!(flags(true, false, true, false).title_shift(), TitleShift::Right);
    assert_eq!(TitleShift::Left.offset_px(), -30.0);
    assert_eq!(TitleShift::Right.offset_px(), 30.0);
    assert_eq!(TitleShift::Centered.offset_px(), 0.0);
}

#[test]
fn cancel_mid_sequence_never_completes() {
    let host = FakeHost::new(800, 600);
    let timeline = Timeline::new(host.clone(), TimelineConfig::default());
    let (done, on_complete) = completion_counter();
    timeline.start(on_complete);
    host.advance(1200);

    timeline.cancel();
    host.advance(10_000);

    assert_eq!(done.get(), 0);
    assert!(!timeline.is_complete());
    assert_eq!(timeline.flags(), flags(true, true, false, false));
    assert_eq!(host.pending_timers(), 0);
}

#[test]
fn dropping_timeline_cancels_pending_hold() {
    let host = FakeHost::new(800, 600);
    let (done, on_complete) = completion_counter();
    {
        let timeline = Timeline::new(host.clone(), TimelineConfig::default());
        timeline.start(on_complete);
        host.advance(500);
    }
    assert_eq!(host.pending_timers(), 0);
    host.advance(10_000);
    assert_eq!(done.get(), 0);
}

#[test]
fn observer_error_skips_to_completion_once() {
    let host = FakeHost::new(800, 600);
    let timeline = Timeline::new(host.clone(), TimelineConfig::default());
    timeline.on_phase(|f| {
        if f.suffix {
            Err(SiteError::phase("show-suffix", "element #intro-suffix missing"))
        } else {
            Ok(())
        }
    });
    let (done, on_complete) = completion_counter();

    timeline.start(on_complete);
    host.advance(1000);

    assert_eq!(done.get(), 1);
    assert!(timeline.is_complete());
    assert_eq!(host.pending_timers(), 0);
    host.advance(10_000);
    assert_eq!(done.get(), 1);
}

#[test]
fn first_phase_error_completes_synchronously() {
    let host = FakeHost::new(800, 600);
    let timeline = Timeline::new(host.clone(), TimelineConfig::default());
    timeline.on_phase(|_| Err(SiteError::phase("show-title", "no document")));
    let (done, on_complete) = completion_counter();

    timeline.start(on_complete);

    assert_eq!(done.get(), 1);
    assert_eq!(host.pending_timers(), 0);
}

#[test]
fn scheduling_failure_completes_immediately() {
    let host = FakeHost::new(800, 600);
    host.fail_timers.set(true);
    let timeline = Timeline::new(host.clone(), TimelineConfig::default());
    let (done, on_complete) = completion_counter();

    timeline.start(on_complete);

    assert_eq!(done.get(), 1);
    assert!(timeline.is_complete());
}

#[test]
fn second_start_is_ignored() {
    let host = FakeHost::new(800, 600);
    let timeline = Timeline::new(host.clone(), TimelineConfig::default());
    let (first, on_first) = completion_counter();
    let (second, on_second) = completion_counter();

    timeline.start(on_first);
    host.advance(300);
    timeline.start(on_second);
    host.advance(10_000);

    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 0);
}

#[test]
fn completion_callback_may_query_the_timeline() {
    let host = FakeHost::new(800, 600);
    let timeline = Rc::new(Timeline::new(host.clone(), TimelineConfig::default()));
    let observed = Rc::new(Cell::new(false));
    let (weak, o) = (Rc::downgrade(&timeline), observed.clone());

    timeline.start(move || {
        if let Some(t) = weak.upgrade() {
            o.set(t.is_complete() && !t.is_active());
        }
    });
    host.advance(5_000);

    assert!(observed.get());
}

#[test]
fn custom_holds_are_respected() {
    let host = FakeHost::new(800, 600);
    let config = TimelineConfig {
        suffix_delay: Duration::from_millis(10),
        suffix_hold: Duration::from_millis(20),
        prefix_delay: Duration::from_millis(30),
        prefix_hold: Duration::from_millis(40),
    };
    let timeline = Timeline::new(host.clone(), config);
    let (done, on_complete) = completion_counter();

    timeline.start(on_complete);
    host.advance(99);
    assert_eq!(done.get(), 0);
    host.advance(1);
    assert_eq!(done.get(), 1);
}
