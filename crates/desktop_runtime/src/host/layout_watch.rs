use std::{cell::RefCell, rc::Rc, time::Duration};

use leptos::{
    ev, on_cleanup, set_timeout, store_value, window_event_listener,
    window_event_listener_untyped, SignalWithUntracked,
};
use platform_host_web::watch_media_features;

use crate::{
    host::now_ms,
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
    throttle::{Offer, Throttle, LAYOUT_THROTTLE_MS, ORIENTATION_SETTLE_MS},
};

/// Probes the environment and dispatches a new policy only when it differs from the current one.
fn reprobe(runtime: DesktopRuntimeContext) {
    let policy = runtime.host.get_value().probe_layout();
    if runtime.state.with_untracked(|state| state.layout != policy) {
        runtime.dispatch_action(DesktopAction::ApplyLayoutPolicy { policy });
    }
}

pub(super) fn install_layout_listeners(runtime: DesktopRuntimeContext) {
    let throttle = Rc::new(RefCell::new(Throttle::<()>::new(LAYOUT_THROTTLE_MS)));

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let offer = throttle.borrow_mut().offer((), now_ms());
        match offer {
            Offer::Apply(()) => reprobe(runtime),
            Offer::ScheduleFlush {
                delay_ms,
                generation,
            } => {
                let throttle = Rc::clone(&throttle);
                set_timeout(
                    move || {
                        let fired = throttle.borrow_mut().fire(generation, now_ms());
                        if fired.is_some() {
                            reprobe(runtime);
                        }
                    },
                    Duration::from_millis(delay_ms.ceil() as u64),
                );
            }
            Offer::Coalesced => {}
        }
    });

    let orientation_listener = window_event_listener_untyped("orientationchange", move |_| {
        set_timeout(
            move || reprobe(runtime),
            Duration::from_millis(ORIENTATION_SETTLE_MS),
        );
    });

    let media_watch = store_value(Some(watch_media_features(move || reprobe(runtime))));

    on_cleanup(move || {
        resize_listener.remove();
        orientation_listener.remove();
        media_watch.update_value(|watch| {
            watch.take();
        });
    });
}
