// URL Motion
//
// Loading animations in the address bar: a library of frame sequences
// (`frames`, `Preset`) and a controller that cycles one of them through the
// page's URL fragment on a timer.
//
// # Usage
//
// In a browser (feature `web`):
// ```ignore
// let mut motion = MotionController::new(
//     frames::three_dots("Uploading"),
//     Arc::new(IntervalScheduler),
//     Arc::new(LocationHash),
// ).with_period(Duration::from_millis(300))?;
// motion.start(None);
// // ... later
// motion.stop();
// ```
//
// From a configuration document:
// ```ignore
// let config = MotionConfig::from_json(r#"{"preset": "arrowSpinner", "period_ms": 120}"#)?;
// let mut motion = MotionController::from_config(&config, scheduler, target)?;
// ```

pub use urlmotion_client::{animation, host};
pub use urlmotion_utils::{config, error, frames, preset};

pub use urlmotion_client::{
    AnimationEngine, AnimationFrame, FragmentTarget, FrameCursor, MotionController, Observer,
    RecordingFragment, Scheduler, Tick, TimerHandle, VirtualScheduler,
};
pub use urlmotion_utils::{Frame, Frames, MotionConfig, MotionError, MotionResult, Preset};

#[cfg(feature = "runtime-tokio")]
pub use urlmotion_client::TokioScheduler;

#[cfg(feature = "web")]
pub use urlmotion_client::{IntervalScheduler, LocationHash};
