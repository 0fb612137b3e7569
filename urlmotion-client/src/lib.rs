// URL Motion client
//
// Plays frame sequences through a page's URL fragment. The host (timer and
// fragment) is injected through the traits in `host`, with backends for the
// browser (feature `web`), tokio (feature `tokio`) and a virtual clock.

pub mod animation;
pub mod host;

pub use animation::{AnimationEngine, AnimationFrame, FrameCursor, MotionController, Observer};
pub use host::{FragmentTarget, RecordingFragment, Scheduler, Tick, TimerHandle, VirtualScheduler};

#[cfg(feature = "tokio")]
pub use host::TokioScheduler;

#[cfg(feature = "web")]
pub use host::{IntervalScheduler, LocationHash};
