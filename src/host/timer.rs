//! Recurring-timer contract provided by the host event loop.

use std::sync::Mutex;
use std::time::Duration;

/// Opaque handle for a recurring timer armed through [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Host-provided recurring-timer facility.
///
/// The host owns the event loop; plugins only arm and cancel. A timer
/// armed here makes the host invoke the owning plugin's tick handler once
/// per period until cancelled.
pub trait Scheduler: Send + Sync {
    /// Arm a recurring timer with the given period.
    fn set_interval(&self, period: Duration) -> TimerToken;

    /// Cancel a previously armed timer. Unknown tokens are ignored.
    fn cancel(&self, token: TimerToken);
}

/// Scheduler double that records armed intervals.
///
/// Hosts embedding the plugins supply their own event-loop-backed
/// implementation; tests and the one-shot stdio bridge use this one.
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    inner: Mutex<RecordingState>,
}

#[derive(Debug, Default)]
struct RecordingState {
    next_token: u64,
    armed: Vec<(TimerToken, Duration)>,
}

impl RecordingScheduler {
    /// Create a scheduler with no armed timers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently armed timers, in arming order.
    #[must_use]
    pub fn armed(&self) -> Vec<(TimerToken, Duration)> {
        self.inner.lock().unwrap().armed.clone()
    }

    /// Number of currently armed timers.
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.inner.lock().unwrap().armed.len()
    }
}

impl Scheduler for RecordingScheduler {
    fn set_interval(&self, period: Duration) -> TimerToken {
        let mut inner = self.inner.lock().unwrap();
        let token = TimerToken(inner.next_token);
        inner.next_token += 1;
        inner.armed.push((token, period));
        token
    }

    fn cancel(&self, token: TimerToken) {
        self.inner
            .lock()
            .unwrap()
            .armed
            .retain(|(armed, _)| *armed != token);
    }
}
