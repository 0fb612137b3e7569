// URL Motion: tokio scheduler
//
// Runs each repeating callback in its own task driven by
// `tokio::time::interval`. Cancelling aborts the task, which stops future
// ticks. A tick already running on another worker thread is not waited for;
// callers that need a hard fence (the controller does) must provide it.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::{Scheduler, Tick, TimerHandle, MIN_PERIOD};

/// Scheduler backed by a tokio runtime
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
}

impl TokioScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Scheduler on the runtime the caller is running in, if any
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&self, period: Duration, mut tick: Tick) -> Box<dyn TimerHandle> {
        let period = period.max(MIN_PERIOD);
        let first = Instant::now() + period;

        let task = self.runtime.spawn(async move {
            let mut ticker = interval_at(first, period);
            // A late tick shifts the schedule instead of firing a burst
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tick();
            }
        });

        Box::new(TokioTimer { task })
    }
}

struct TokioTimer {
    task: JoinHandle<()>,
}

impl TimerHandle for TokioTimer {
    fn cancel(self: Box<Self>) {
        self.task.abort();
    }
}
