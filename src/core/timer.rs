//! Lifecycle-bound interval timer

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// Handle to a periodic timer task.
///
/// The callback runs once per period until the handle is canceled. Dropping
/// the handle cancels it, so a widget that owns one cannot keep ticking past
/// its own teardown. Must be created within a tokio runtime.
pub struct Interval {
    active: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl Interval {
    /// Spawn a timer that invokes `on_tick` once per `period`.
    ///
    /// `period` must be non-zero.
    pub fn spawn<F>(period: Duration, on_tick: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let active = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&active);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // a delayed tick must not trigger a catch-up burst
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // the first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if !flag.load(Ordering::SeqCst) {
                    break;
                }
                on_tick();
            }
        });
        Self { active, task }
    }

    /// Whether the timer is still armed
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Stop the timer. Idempotent; the active flag is cleared before the
    /// task is aborted, so no new tick begins after this returns.
    pub fn cancel(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            self.task.abort();
            debug!("interval timer canceled");
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}
