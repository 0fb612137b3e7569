// URL Motion: Virtual clock scheduler
//
// Deterministic Scheduler driven by explicit `advance` calls instead of wall
// time. Timers fire in due order (ties broken by creation order), each firing
// running to completion before the next one starts.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use super::{lock, Scheduler, Tick, TimerHandle, MIN_PERIOD};

struct VirtualTimer {
    id: u64,
    period: Duration,
    next_due: Duration,
    /// Taken out while the callback is running
    tick: Option<Tick>,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    timers: Vec<VirtualTimer>,
}

/// Scheduler with a manually advanced clock.
///
/// Clones share the same clock, so tests keep one clone to call `advance`
/// and hand another to the controller.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    state: Arc<Mutex<ClockState>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        lock(&self.state).now
    }

    /// Number of timers that have not been cancelled
    pub fn active_timers(&self) -> usize {
        lock(&self.state).timers.len()
    }

    /// Move the clock forward by `by`, firing every timer that comes due.
    ///
    /// A panicking callback unwinds out of `advance` with the clock left at
    /// that firing; its timer stays scheduled and fires again on the next
    /// advance, as `setInterval` keeps going after a throwing callback.
    pub fn advance(&self, by: Duration) {
        let deadline = self.now() + by;

        while let Some((id, tick)) = self.take_due(deadline) {
            let mut firing = Firing {
                state: &self.state,
                id,
                tick: Some(tick),
            };
            if let Some(tick) = firing.tick.as_mut() {
                tick();
            }
        }

        lock(&self.state).now = deadline;
    }

    /// Pop the earliest firing at or before `deadline`, moving the clock to it
    fn take_due(&self, deadline: Duration) -> Option<(u64, Tick)> {
        let mut state = lock(&self.state);

        let timer = state
            .timers
            .iter_mut()
            .filter(|timer| timer.tick.is_some() && timer.next_due <= deadline)
            .min_by_key(|timer| (timer.next_due, timer.id))?;

        let due = timer.next_due;
        timer.next_due += timer.period;
        let id = timer.id;
        let tick = timer.tick.take()?;

        state.now = due;
        Some((id, tick))
    }
}

/// A callback taken out of its timer while it runs. Dropping it, whether
/// normally or while unwinding, hands the callback back.
struct Firing<'a> {
    state: &'a Mutex<ClockState>,
    id: u64,
    tick: Option<Tick>,
}

impl Drop for Firing<'_> {
    fn drop(&mut self) {
        // Put the callback back unless the timer was cancelled mid-tick
        let mut state = lock(self.state);
        if let Some(timer) = state.timers.iter_mut().find(|timer| timer.id == self.id) {
            timer.tick = self.tick.take();
        }
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule_repeating(&self, period: Duration, tick: Tick) -> Box<dyn TimerHandle> {
        let period = period.max(MIN_PERIOD);
        let mut state = lock(&self.state);

        let id = state.next_id;
        state.next_id += 1;
        let next_due = state.now + period;
        state.timers.push(VirtualTimer {
            id,
            period,
            next_due,
            tick: Some(tick),
        });

        Box::new(VirtualTimerHandle {
            id,
            state: Arc::downgrade(&self.state),
        })
    }
}

struct VirtualTimerHandle {
    id: u64,
    state: Weak<Mutex<ClockState>>,
}

impl TimerHandle for VirtualTimerHandle {
    fn cancel(self: Box<Self>) {
        if let Some(state) = self.state.upgrade() {
            lock(&state).timers.retain(|timer| timer.id != self.id);
        }
    }
}
