// URL Motion: browser backends
//
// `window.location.hash` as the fragment target and `window.setInterval` as
// the scheduler. Both look the window up on every call, so they stay usable
// as zero-sized, shareable values.

use std::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::{FragmentTarget, Scheduler, Tick, TimerHandle, MIN_PERIOD};

/// The current document's URL fragment
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationHash;

impl FragmentTarget for LocationHash {
    fn write(&self, text: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window available, dropping fragment write");
            return;
        };

        if let Err(err) = window.location().set_hash(text) {
            log::warn!("Failed to set location hash: {:?}", err);
        }
    }
}

/// Scheduler backed by `window.setInterval`
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    fn schedule_repeating(&self, period: Duration, mut tick: Tick) -> Box<dyn TimerHandle> {
        let millis = i32::try_from(period.max(MIN_PERIOD).as_millis()).unwrap_or(i32::MAX);
        let callback = Closure::<dyn FnMut()>::new(move || tick());

        let interval_id = web_sys::window().and_then(|window| {
            window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    millis,
                )
                .map_err(|err| log::warn!("setInterval failed: {:?}", err))
                .ok()
        });

        Box::new(IntervalHandle {
            interval_id,
            _callback: callback,
        })
    }
}

struct IntervalHandle {
    interval_id: Option<i32>,
    /// Keeps the JS callback alive until the interval is cleared
    _callback: Closure<dyn FnMut()>,
}

impl TimerHandle for IntervalHandle {
    fn cancel(self: Box<Self>) {
        if let (Some(id), Some(window)) = (self.interval_id, web_sys::window()) {
            window.clear_interval_with_handle(id);
        }
    }
}
