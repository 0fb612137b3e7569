// URL Motion: Host capabilities
//
// The controller never touches a browser directly. It reaches the host through
// two injected capabilities:
//
// ```text
// MotionController
//     │           │
//     ▼           ▼
// ┌──────────┐ ┌────────────────┐
// │ Scheduler│ │ FragmentTarget │  ← traits defined here
// └──────────┘ └────────────────┘
//     │           │
//     ▼           ▼
// setInterval   location.hash     (web)
// tokio interval                  (tokio)
// VirtualScheduler RecordingFragment  (tests)
// ```
//
// The fragment target is process-wide in a browser. Controllers sharing one
// target overwrite each other's frames: the last tick wins.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

mod recording;
mod virtual_clock;

#[cfg(feature = "tokio")]
mod tokio_timer;

#[cfg(feature = "web")]
mod web;

pub use recording::RecordingFragment;
pub use virtual_clock::VirtualScheduler;

#[cfg(feature = "tokio")]
pub use tokio_timer::TokioScheduler;

#[cfg(feature = "web")]
pub use web::{IntervalScheduler, LocationHash};

/// Callback fired on every timer period
pub type Tick = Box<dyn FnMut() + Send + 'static>;

/// Shortest period a backend will schedule; zero is raised to this
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Host facility that fires a callback repeatedly until cancelled.
///
/// The first firing happens one `period` after scheduling. A callback runs to
/// completion before the next firing of the same timer.
pub trait Scheduler: Send + Sync {
    /// Start calling `tick` every `period`, returning the handle that stops it
    fn schedule_repeating(&self, period: Duration, tick: Tick) -> Box<dyn TimerHandle>;
}

/// Ownership of one scheduled repeating callback
pub trait TimerHandle {
    /// Stop the timer. No new firing starts after this returns; on a
    /// multi-threaded host a firing already in progress may still finish.
    fn cancel(self: Box<Self>);
}

/// The writable URL fragment (or a stand-in for it)
pub trait FragmentTarget: Send + Sync {
    /// Replace the fragment with `text`
    fn write(&self, text: &str);
}

/// Lock a mutex, recovering the data if a panicking holder poisoned it
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
