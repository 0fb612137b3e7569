// URL Motion: Motion Controller
//
// Drives a FrameCursor from a host timer and mirrors the current frame into
// the URL fragment:
//
// ```text
//  start()                        tick (every period)
//    │                               │
//    ▼                               ▼
// cancel old run           lock run, skip if cancelled
// fresh cursor (index -1)   cursor.next_frame()  (wraps last → 0)
// schedule_repeating ──────▶ target.write("#" + frame)
//                           unlock, observer(index) (if supplied)
// ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use urlmotion_utils::{Frame, Frames, MotionConfig, MotionError, MotionResult, DEFAULT_PERIOD_MS};

use super::cursor::FrameCursor;
use super::engine::AnimationEngine;
use crate::host::{lock, FragmentTarget, Scheduler, Tick, TimerHandle};

/// Callback told the index of each frame right after it is shown
pub type Observer = Box<dyn FnMut(usize) + Send + 'static>;

/// Default delay between frames
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(DEFAULT_PERIOD_MS);

/// Plays a frame sequence through a [`FragmentTarget`] on a [`Scheduler`].
///
/// The controller is either idle or running. `start` moves it to running
/// (restarting from the first frame if it already was), `stop` returns it to
/// idle and clears the fragment. Both can be called any number of times.
///
/// # Shared fragment
///
/// In a browser every controller writes to the same `location.hash`. Two
/// running controllers overwrite each other on every tick and the displayed
/// value is whichever ticked last. This is not serialized.
///
/// # Observer failures
///
/// The observer runs inside the timer callback and is not shielded: a panic
/// ends that tick and propagates according to the scheduler (out of
/// `VirtualScheduler::advance`, killing the tokio timer task, or as a JS
/// exception).
///
/// # Example
///
/// ```ignore
/// let clock = VirtualScheduler::new();
/// let fragment = RecordingFragment::new();
/// let mut controller = MotionController::new(
///     frames::three_dots("Saving"),
///     Arc::new(clock.clone()),
///     Arc::new(fragment.clone()),
/// );
///
/// controller.start(None);
/// clock.advance(Duration::from_secs(1));
/// assert_eq!(fragment.current(), "#Saving.");
/// controller.stop();
/// ```
pub struct MotionController {
    /// Frames to play, never mutated after construction
    frames: Arc<[Frame]>,

    /// Delay between frame advances
    period: Duration,

    /// Host timer facility
    scheduler: Arc<dyn Scheduler>,

    /// Where frames are written (the URL fragment)
    target: Arc<dyn FragmentTarget>,

    /// State of the current (or last) run, shared with its timer callback
    run: Arc<Mutex<PlaybackRun>>,

    /// The active repeating timer, present only while running
    timer: Option<Box<dyn TimerHandle>>,
}

/// Per-run state. The tick holds this lock across its fragment write, so
/// once `cancelled` is set no frame from this run can land afterwards, even
/// if the host could not interrupt a tick already in flight.
struct PlaybackRun {
    cursor: FrameCursor,
    cancelled: bool,
}

impl PlaybackRun {
    fn new(frames: &Arc<[Frame]>) -> Self {
        Self {
            cursor: FrameCursor::new(Arc::clone(frames)),
            cancelled: false,
        }
    }
}

impl MotionController {
    /// Create an idle controller with the default period of one second
    pub fn new(
        frames: Frames,
        scheduler: Arc<dyn Scheduler>,
        target: Arc<dyn FragmentTarget>,
    ) -> Self {
        let frames: Arc<[Frame]> = frames.into();
        let run = PlaybackRun::new(&frames);

        Self {
            frames,
            period: DEFAULT_PERIOD,
            scheduler,
            target,
            run: Arc::new(Mutex::new(run)),
            timer: None,
        }
    }

    /// Build a controller from a configuration document's preset and period
    pub fn from_config(
        config: &MotionConfig,
        scheduler: Arc<dyn Scheduler>,
        target: Arc<dyn FragmentTarget>,
    ) -> MotionResult<Self> {
        Self::new(config.frames(), scheduler, target).with_period(config.period()?)
    }

    /// Set the delay between frames. Zero is rejected.
    pub fn with_period(mut self, period: Duration) -> MotionResult<Self> {
        if period.is_zero() {
            return Err(MotionError::InvalidPeriod {
                millis: period.as_millis(),
            });
        }
        self.period = period;
        Ok(self)
    }

    /// Start playing from the first frame.
    ///
    /// Does nothing for an empty sequence. If already running, the old timer
    /// is cancelled first so at most one timer exists per controller. Each
    /// tick writes the next frame to the fragment and then calls
    /// `on_advance` with its index.
    pub fn start(&mut self, on_advance: Option<Observer>) {
        if self.frames.is_empty() {
            log::debug!("Empty frame sequence, not starting");
            return;
        }

        if self.timer.is_some() {
            log::debug!("Restarting running animation");
        }
        self.cancel_run();

        // A fresh run per start: a stale timer can never touch this one
        self.run = Arc::new(Mutex::new(PlaybackRun::new(&self.frames)));

        let tick = Self::tick(Arc::clone(&self.run), Arc::clone(&self.target), on_advance);
        self.timer = Some(self.scheduler.schedule_repeating(self.period, tick));

        log::debug!(
            "Started animation: {} frames every {:?}",
            self.frames.len(),
            self.period
        );
    }

    /// Cancel the timer (if any) and clear the fragment.
    ///
    /// Safe to call while idle. The cursor keeps its last position until the
    /// next `start`. No frame is written after this returns.
    pub fn stop(&mut self) {
        if self.timer.is_some() {
            log::debug!("Stopped animation");
        }
        self.cancel_run();
        self.target.write("");
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Index of the frame last shown, None before the first tick of a run
    pub fn current_index(&self) -> Option<usize> {
        lock(&self.run).cursor.index()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Cancel the timer and fence off the current run. Waits for a tick that
    /// is mid-write to finish.
    fn cancel_run(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        lock(&self.run).cancelled = true;
    }

    fn tick(
        run: Arc<Mutex<PlaybackRun>>,
        target: Arc<dyn FragmentTarget>,
        mut on_advance: Option<Observer>,
    ) -> Tick {
        Box::new(move || {
            let index = {
                let mut run = lock(&run);
                if run.cancelled {
                    return;
                }
                let Some(frame) = run.cursor.next_frame() else {
                    return;
                };

                log::trace!("Showing frame {}: {}", frame.index, frame.content);
                target.write(&frame.fragment());
                frame.index
            };

            // The observer runs unlocked so it may query the controller's host
            if let Some(observer) = on_advance.as_mut() {
                observer(index);
            }
        })
    }
}

impl Drop for MotionController {
    fn drop(&mut self) {
        // The fragment is left as is; only the timer must not outlive us
        self.cancel_run();
    }
}
